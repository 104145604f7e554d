use thiserror::Error;

use crate::deployment::domain::step::Step;

/// Failure of a deployment step, carrying the offending process's exit code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("image build failed (exit {code})")]
    Build { code: i32 },
    #[error("service start failed (exit {code})")]
    Start { code: i32 },
    #[error("script failed (exit {code})")]
    Script { code: i32 },
}

impl SequenceError {
    pub fn exit_code(&self) -> i32 {
        match *self {
            SequenceError::Build { code }
            | SequenceError::Start { code }
            | SequenceError::Script { code } => code,
        }
    }

    /// The error a non-zero exit of `step` stands for. Teardown failures
    /// are never sequence errors.
    pub fn from_step(step: Step, code: i32) -> Option<Self> {
        match step {
            Step::Build => Some(SequenceError::Build { code }),
            Step::Start => Some(SequenceError::Start { code }),
            Step::Script => Some(SequenceError::Script { code }),
            Step::Teardown => None,
        }
    }

    /// Build and start failures abort the sequence before anything needs
    /// tearing down. Script failures do not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SequenceError::Script { .. })
    }
}
