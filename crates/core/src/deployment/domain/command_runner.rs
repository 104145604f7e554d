use crate::deployment::domain::step_command::StepCommand;

/// Runs one external process to completion.
///
/// Returns the process exit code. An `Err` means the process never ran
/// (missing program, permission denied); the sequencer decides how that
/// maps onto a step failure.
pub trait CommandRunner: Send {
    fn run(&mut self, command: &StepCommand) -> std::io::Result<i32>;
}
