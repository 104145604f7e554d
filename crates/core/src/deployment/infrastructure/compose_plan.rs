use thiserror::Error;

use crate::deployment::domain::step_command::{StepCommand, StepPlan};
use crate::shared::constants::{BUILD_ARGS, START_ARGS, TEARDOWN_ARGS};
use crate::shared::deploy_config::DeployConfig;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("could not parse {field} '{value}': {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: shell_words::ParseError,
    },
}

/// Derives the build, start, script and teardown invocations from config.
///
/// Compose steps share the program, its leading words (`docker compose`)
/// and the optional `-f <file>`; only the build step receives the
/// [`BuildEnv`](crate::shared::deploy_config::BuildEnv) exports. Every step
/// runs in the project directory when one is set.
pub fn plan(config: &DeployConfig) -> Result<StepPlan, PlanError> {
    let (compose_program, compose_prefix) =
        split_words("compose command", &config.compose_command)?;
    let (python_program, python_args) = split_words("python interpreter", &config.python)?;
    if config.script.as_os_str().is_empty() {
        return Err(PlanError::Empty { field: "script" });
    }

    let compose = |subcommand: &[&str]| -> StepCommand {
        let mut args = compose_prefix.clone();
        if let Some(file) = &config.compose_file {
            args.push("-f".to_string());
            args.push(file.to_string_lossy().into_owned());
        }
        args.extend(subcommand.iter().map(|s| s.to_string()));
        StepCommand::new(compose_program.as_str())
            .with_args(args)
            .with_working_dir(config.project_dir.clone())
    };

    Ok(StepPlan {
        build: compose(BUILD_ARGS).with_envs(config.build_env.vars()),
        start: compose(START_ARGS),
        script: StepCommand::new(python_program)
            .with_args(python_args)
            .with_args([config.script.to_string_lossy().into_owned()])
            .with_working_dir(config.project_dir.clone()),
        teardown: compose(TEARDOWN_ARGS),
    })
}

fn split_words(field: &'static str, value: &str) -> Result<(String, Vec<String>), PlanError> {
    let mut words = shell_words::split(value).map_err(|e| PlanError::Parse {
        field,
        value: value.to_string(),
        source: e,
    })?;
    if words.is_empty() {
        return Err(PlanError::Empty { field });
    }
    let program = words.remove(0);
    Ok((program, words))
}
