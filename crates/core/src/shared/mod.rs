pub mod constants;
pub mod deploy_config;
