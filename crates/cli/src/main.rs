use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facebound_core::deployment::domain::command_runner::CommandRunner;
use facebound_core::deployment::domain::step::Step;
use facebound_core::deployment::infrastructure::compose_plan;
use facebound_core::deployment::infrastructure::interrupt_guard::InterruptGuard;
use facebound_core::deployment::infrastructure::process_command_runner::ProcessCommandRunner;
use facebound_core::pipeline::deploy_sequence_use_case::DeploySequenceUseCase;
use facebound_core::pipeline::sequence_logger::StdoutSequenceLogger;
use facebound_core::shared::constants::{
    DEFAULT_COMPOSE_COMMAND, DEFAULT_PYTHON, DEFAULT_SCRIPT, INSTALL_URL_ENV, VERSION_PIN_ENV,
};
use facebound_core::shared::deploy_config::{BuildEnv, DeployConfig};

const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// Build, start, snapshot and tear down the Facebound compose deployment.
#[derive(Parser)]
#[command(name = "facebound-deploy")]
struct Cli {
    /// Compose program; "docker compose" selects the v2 plugin.
    #[arg(long, env = "FACEBOUND_COMPOSE_CMD", default_value = DEFAULT_COMPOSE_COMMAND)]
    compose_cmd: String,

    /// Compose file passed with -f (default: compose's own lookup).
    #[arg(long, env = "FACEBOUND_COMPOSE_FILE")]
    compose_file: Option<PathBuf>,

    /// Directory every step runs in.
    #[arg(long, env = "FACEBOUND_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Interpreter for the snapshot script.
    #[arg(long, env = "FACEBOUND_PYTHON", default_value = DEFAULT_PYTHON)]
    python: String,

    /// Script run once the services are up.
    #[arg(long, env = "FACEBOUND_SCRIPT", default_value = DEFAULT_SCRIPT)]
    script: PathBuf,

    /// Version pin exported to the build step.
    #[arg(long, env = VERSION_PIN_ENV)]
    version_pin: Option<String>,

    /// Install-source URL exported to the build step.
    #[arg(long, env = INSTALL_URL_ENV)]
    install_url: Option<String>,

    /// Exit with the script's code when it fails (default: exit 0 once
    /// build and start succeeded).
    #[arg(long)]
    fail_on_script_error: bool,

    /// Only run the teardown step.
    #[arg(long)]
    teardown_only: bool,
}

impl Cli {
    fn to_config(&self) -> DeployConfig {
        DeployConfig {
            compose_command: self.compose_cmd.clone(),
            compose_file: self.compose_file.clone(),
            project_dir: self.project_dir.clone(),
            python: self.python.clone(),
            script: self.script.clone(),
            build_env: BuildEnv {
                version_pin: self.version_pin.clone(),
                install_url: self.install_url.clone(),
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let guard = match InterruptGuard::install() {
        Ok(guard) => Some(guard),
        Err(e) => {
            log::warn!("Could not install signal handlers: {e}");
            None
        }
    };

    let result = run(&cli, Box::new(ProcessCommandRunner::new()), guard.as_ref());
    process::exit(exit_code(result));
}

fn exit_code(result: Result<i32, Box<dyn std::error::Error>>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            CONFIG_ERROR_EXIT_CODE
        }
    }
}

fn run(
    cli: &Cli,
    runner: Box<dyn CommandRunner>,
    guard: Option<&InterruptGuard>,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = cli.to_config();
    validate(&config)?;

    let plan = compose_plan::plan(&config)?;
    let mut use_case =
        DeploySequenceUseCase::new(runner, plan, Box::new(StdoutSequenceLogger::new()));

    let report = if cli.teardown_only {
        use_case.teardown()
    } else {
        use_case.execute()
    };

    if let Err(e) = report.outcome() {
        eprintln!("Error: {e}");
    }
    if report.teardown_failed() {
        log::warn!("Services may still be running; retry with --teardown-only");
    }
    if guard.is_some_and(InterruptGuard::was_interrupted) {
        if report.runs_of(Step::Teardown) > 0 {
            log::warn!("Interrupted by signal; teardown still ran");
        } else {
            log::warn!("Interrupted by signal before services started");
        }
    }
    Ok(report.exit_code(cli.fail_on_script_error))
}

fn validate(config: &DeployConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = &config.project_dir {
        if !dir.is_dir() {
            return Err(format!("Project directory not found: {}", dir.display()).into());
        }
    }
    if let Some(file) = &config.compose_file {
        let resolved = resolve(config.project_dir.as_deref(), file);
        if !resolved.is_file() {
            return Err(format!("Compose file not found: {}", resolved.display()).into());
        }
    }
    Ok(())
}

/// Relative paths are looked up from the project directory, matching the
/// working directory the compose steps run in.
fn resolve(project_dir: Option<&Path>, path: &Path) -> PathBuf {
    match project_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
