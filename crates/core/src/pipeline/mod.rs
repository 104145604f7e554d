pub mod deploy_sequence_use_case;
pub mod sequence_logger;
pub mod sequence_report;
