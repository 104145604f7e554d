pub mod command_runner;
pub mod sequence_error;
pub mod step;
pub mod step_command;
