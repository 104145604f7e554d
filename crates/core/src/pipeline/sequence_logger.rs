use std::time::Instant;

use crate::deployment::domain::step::{Step, StepRecord};
use crate::deployment::domain::step_command::StepCommand;

/// Observer for deployment sequence events.
///
/// Keeps the sequencer independent of where progress ends up (console,
/// log crate, tests).
pub trait SequenceLogger: Send {
    /// A new run begins. Loggers that summarise should forget earlier runs.
    /// Default: no-op.
    fn sequence_started(&mut self) {}

    /// A step is about to spawn its process.
    fn step_started(&mut self, step: Step, command: &StepCommand);

    /// A step's process exited (or failed to spawn).
    fn step_finished(&mut self, step: Step, exit_code: i32, duration_ms: f64);

    /// Non-fatal problem, e.g. a failed teardown.
    fn warn(&mut self, message: &str);

    /// Failure that ends or degrades the run.
    fn error(&mut self, message: &str);

    fn info(&mut self, message: &str);

    /// Emit an end-of-sequence summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullSequenceLogger;

impl SequenceLogger for NullSequenceLogger {
    fn step_started(&mut self, _step: Step, _command: &StepCommand) {}
    fn step_finished(&mut self, _step: Step, _exit_code: i32, _duration_ms: f64) {}
    fn warn(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI logger: forwards events to the `log` facade and keeps per-step
/// results for a summary table at the end of the run.
pub struct StdoutSequenceLogger {
    start_time: Instant,
    finished: Vec<StepRecord>,
    warnings: Vec<String>,
}

impl StdoutSequenceLogger {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            finished: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns the formatted summary, or `None` if no step ran.
    pub fn summary_string(&self) -> Option<String> {
        if self.finished.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Deploy summary ({} steps, {elapsed_s:.1}s total):",
            self.finished.len()
        )];
        for record in &self.finished {
            let status = if record.succeeded() { "ok" } else { "FAILED" };
            lines.push(format!(
                "  {:10}: {status:6} exit {:3}  {:8.1}s",
                record.step.name(),
                record.exit_code,
                record.duration_ms / 1000.0
            ));
        }
        for warning in &self.warnings {
            lines.push(format!("  warning: {warning}"));
        }
        Some(lines.join("\n"))
    }
}

impl Default for StdoutSequenceLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceLogger for StdoutSequenceLogger {
    fn sequence_started(&mut self) {
        self.start_time = Instant::now();
        self.finished.clear();
        self.warnings.clear();
    }

    fn step_started(&mut self, step: Step, command: &StepCommand) {
        log::info!("[{step}] {}", command.display());
    }

    fn step_finished(&mut self, step: Step, exit_code: i32, duration_ms: f64) {
        self.finished.push(StepRecord {
            step,
            exit_code,
            duration_ms,
        });
        log::info!(
            "[{step}] exited with {exit_code} after {:.1}s",
            duration_ms / 1000.0
        );
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        log::warn!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullSequenceLogger;
        logger.sequence_started();
        logger.step_started(Step::Build, &StepCommand::new("docker-compose"));
        logger.step_finished(Step::Build, 0, 5.0);
        logger.warn("careful");
        logger.error("broken");
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutSequenceLogger::new();
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_summary_lists_steps_in_order() {
        let mut logger = StdoutSequenceLogger::new();
        logger.step_finished(Step::Build, 0, 1200.0);
        logger.step_finished(Step::Start, 0, 300.0);
        logger.step_finished(Step::Script, 137, 50.0);
        logger.step_finished(Step::Teardown, 0, 900.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.starts_with("Deploy summary (4 steps"));
        let build = summary.find("build").unwrap();
        let script = summary.find("script").unwrap();
        let teardown = summary.find("teardown").unwrap();
        assert!(build < script && script < teardown);
        assert!(summary.contains("FAILED exit 137"));
    }

    #[test]
    fn test_summary_includes_warnings() {
        let mut logger = StdoutSequenceLogger::new();
        logger.step_finished(Step::Teardown, 1, 10.0);
        logger.warn("teardown failed (exit 1)");

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("warning: teardown failed (exit 1)"));
    }

    #[test]
    fn test_sequence_started_forgets_previous_run() {
        let mut logger = StdoutSequenceLogger::default();
        logger.sequence_started();
        logger.step_finished(Step::Build, 0, 10.0);
        logger.step_finished(Step::Teardown, 1, 10.0);
        logger.warn("teardown failed (exit 1)");

        logger.sequence_started();
        logger.step_finished(Step::Teardown, 0, 10.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.starts_with("Deploy summary (1 steps"));
        assert!(!summary.contains("build"));
        assert!(!summary.contains("warning"));
        assert!(!summary.contains("FAILED"));
    }

    #[test]
    fn test_sequence_started_on_fresh_logger_has_no_summary() {
        let mut logger = StdoutSequenceLogger::new();
        logger.sequence_started();
        assert!(logger.summary_string().is_none());
    }
}
