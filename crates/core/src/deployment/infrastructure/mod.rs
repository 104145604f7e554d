pub mod compose_plan;
pub mod interrupt_guard;
pub mod process_command_runner;
