use std::time::Instant;

use crate::deployment::domain::command_runner::CommandRunner;
use crate::deployment::domain::sequence_error::SequenceError;
use crate::deployment::domain::step::{Step, StepRecord};
use crate::deployment::domain::step_command::StepPlan;
use crate::pipeline::sequence_logger::SequenceLogger;
use crate::pipeline::sequence_report::SequenceReport;
use crate::shared::constants::SPAWN_FAILURE_EXIT_CODE;

/// Deployment sequence: build, start, script, teardown.
///
/// Build or start failure stops the run immediately; nothing was started,
/// so there is nothing to tear down. Once services are up, teardown runs
/// exactly once whatever the script returns. Teardown failures are
/// reported as warnings and never change the outcome.
pub struct DeploySequenceUseCase {
    runner: Box<dyn CommandRunner>,
    plan: StepPlan,
    logger: Box<dyn SequenceLogger>,
}

impl DeploySequenceUseCase {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        plan: StepPlan,
        logger: Box<dyn SequenceLogger>,
    ) -> Self {
        Self {
            runner,
            plan,
            logger,
        }
    }

    pub fn execute(&mut self) -> SequenceReport {
        let mut report = SequenceReport::new();
        self.logger.sequence_started();
        self.logger.info("Deploying: build, start, script, teardown");

        for step in [Step::Build, Step::Start, Step::Script] {
            let code = self.run_step(step, &mut report);
            if code == 0 {
                continue;
            }
            let Some(error) = SequenceError::from_step(step, code) else {
                continue;
            };
            if error.is_fatal() {
                return self.abort(report, error);
            }
            self.logger
                .error(&format!("{error}; tearing down services anyway"));
            report.fail(error);
        }

        self.run_teardown(&mut report);
        self.logger.summary();
        report
    }

    /// Runs the teardown step on its own, e.g. to clean up after an
    /// interrupted run. Repeating it on stopped services is harmless.
    pub fn teardown(&mut self) -> SequenceReport {
        let mut report = SequenceReport::new();
        self.logger.sequence_started();
        self.run_teardown(&mut report);
        self.logger.summary();
        report
    }

    fn abort(&mut self, mut report: SequenceReport, error: SequenceError) -> SequenceReport {
        self.logger
            .error(&format!("{error}; skipping remaining steps"));
        report.fail(error);
        self.logger.summary();
        report
    }

    fn run_teardown(&mut self, report: &mut SequenceReport) {
        let code = self.run_step(Step::Teardown, report);
        if code != 0 {
            self.logger.warn(&format!(
                "teardown failed (exit {code}); services may still be running"
            ));
            report.mark_teardown_failed();
        }
    }

    fn run_step(&mut self, step: Step, report: &mut SequenceReport) -> i32 {
        let command = self.plan.command(step);
        self.logger.step_started(step, command);

        let started = Instant::now();
        let exit_code = match self.runner.run(command) {
            Ok(code) => code,
            Err(e) => {
                self.logger
                    .error(&format!("[{step}] could not run '{}': {e}", command.program));
                SPAWN_FAILURE_EXIT_CODE
            }
        };
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

        self.logger.step_finished(step, exit_code, duration_ms);
        report.push(StepRecord {
            step,
            exit_code,
            duration_ms,
        });
        exit_code
    }
}
