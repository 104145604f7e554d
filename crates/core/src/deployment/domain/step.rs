use std::fmt;

/// One stage of the deployment sequence, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Build,
    Start,
    Script,
    Teardown,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Build => "build",
            Step::Start => "start",
            Step::Script => "script",
            Step::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single step that actually ran.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub step: Step,
    pub exit_code: i32,
    pub duration_ms: f64,
}

impl StepRecord {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
