use std::process::{Command, ExitStatus, Stdio};

use crate::deployment::domain::command_runner::CommandRunner;
use crate::deployment::domain::step_command::StepCommand;
use crate::shared::constants::{SIGNAL_EXIT_CODE_BASE, UNKNOWN_EXIT_CODE};

/// Runs steps as child processes sharing the caller's terminal.
///
/// Output is not captured: build and script logs stream straight to the
/// operator's console.
#[derive(Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&mut self, command: &StepCommand) -> std::io::Result<i32> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .envs(command.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &command.working_dir {
            process.current_dir(dir);
        }

        let status = process.status()?;
        Ok(exit_code_of(status))
    }
}

/// Collapses an exit status to a shell-style code: the process's own code,
/// or 128 + signal number when it was killed.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_CODE_BASE + signal;
        }
    }
    UNKNOWN_EXIT_CODE
}
