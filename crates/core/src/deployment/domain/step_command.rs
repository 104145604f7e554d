use std::path::PathBuf;

use crate::deployment::domain::step::Step;

/// A single external process invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Extra variables layered over the inherited environment.
    pub envs: Vec<(String, String)>,
    pub working_dir: Option<PathBuf>,
}

impl StepCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            working_dir: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_envs(mut self, envs: Vec<(String, String)>) -> Self {
        self.envs.extend(envs);
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    /// Shell-quoted command line, for logs.
    pub fn display(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

/// The four invocations the sequencer runs, one per [`Step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepPlan {
    pub build: StepCommand,
    pub start: StepCommand,
    pub script: StepCommand,
    pub teardown: StepCommand,
}

impl StepPlan {
    pub fn command(&self, step: Step) -> &StepCommand {
        match step {
            Step::Build => &self.build,
            Step::Start => &self.start,
            Step::Script => &self.script,
            Step::Teardown => &self.teardown,
        }
    }
}
