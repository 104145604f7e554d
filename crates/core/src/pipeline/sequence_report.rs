use crate::deployment::domain::sequence_error::SequenceError;
use crate::deployment::domain::step::{Step, StepRecord};

/// What a sequence run did: the steps that ran, in order, and how it ended.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceReport {
    records: Vec<StepRecord>,
    outcome: Result<(), SequenceError>,
    teardown_failed: bool,
}

impl SequenceReport {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            outcome: Ok(()),
            teardown_failed: false,
        }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub(crate) fn fail(&mut self, error: SequenceError) {
        if self.outcome.is_ok() {
            self.outcome = Err(error);
        }
    }

    pub(crate) fn mark_teardown_failed(&mut self) {
        self.teardown_failed = true;
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn outcome(&self) -> Result<(), SequenceError> {
        self.outcome
    }

    pub fn teardown_failed(&self) -> bool {
        self.teardown_failed
    }

    /// Number of times `step` ran.
    pub fn runs_of(&self, step: Step) -> usize {
        self.records.iter().filter(|r| r.step == step).count()
    }

    /// Process exit code for the operator.
    ///
    /// Build and start failures surface their code. A script failure
    /// surfaces only when `fail_on_script_error` is set. Teardown never
    /// affects it.
    pub fn exit_code(&self, fail_on_script_error: bool) -> i32 {
        match self.outcome {
            Ok(()) => 0,
            Err(SequenceError::Script { .. }) if !fail_on_script_error => 0,
            Err(e) => e.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(step: Step, exit_code: i32) -> StepRecord {
        StepRecord {
            step,
            exit_code,
            duration_ms: 0.0,
        }
    }

    #[test]
    fn test_new_report_is_ok_and_empty() {
        let report = SequenceReport::new();
        assert!(report.records().is_empty());
        assert_eq!(report.outcome(), Ok(()));
        assert!(!report.teardown_failed());
        assert_eq!(report.exit_code(true), 0);
    }

    #[test]
    fn test_first_failure_wins() {
        let mut report = SequenceReport::new();
        report.fail(SequenceError::Script { code: 3 });
        report.fail(SequenceError::Build { code: 1 });
        assert_eq!(report.outcome(), Err(SequenceError::Script { code: 3 }));
    }

    #[test]
    fn test_runs_of_counts_records() {
        let mut report = SequenceReport::new();
        report.push(record(Step::Build, 0));
        report.push(record(Step::Teardown, 0));
        report.push(record(Step::Teardown, 0));
        assert_eq!(report.runs_of(Step::Build), 1);
        assert_eq!(report.runs_of(Step::Teardown), 2);
        assert_eq!(report.runs_of(Step::Start), 0);
    }

    #[rstest]
    #[case::build(SequenceError::Build { code: 1 }, false, 1)]
    #[case::build_strict(SequenceError::Build { code: 2 }, true, 2)]
    #[case::start(SequenceError::Start { code: 14 }, false, 14)]
    #[case::script_lenient(SequenceError::Script { code: 137 }, false, 0)]
    #[case::script_strict(SequenceError::Script { code: 137 }, true, 137)]
    fn test_exit_code(
        #[case] error: SequenceError,
        #[case] fail_on_script_error: bool,
        #[case] expected: i32,
    ) {
        let mut report = SequenceReport::new();
        report.fail(error);
        assert_eq!(report.exit_code(fail_on_script_error), expected);
    }

    #[test]
    fn test_teardown_failure_does_not_change_exit_code() {
        let mut report = SequenceReport::new();
        report.push(record(Step::Teardown, 1));
        report.mark_teardown_failed();
        assert!(report.teardown_failed());
        assert_eq!(report.outcome(), Ok(()));
        assert_eq!(report.exit_code(true), 0);
    }
}
