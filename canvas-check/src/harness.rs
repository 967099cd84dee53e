//! A small test harness: named tests, fail-fast steps, and collected outcomes.

use crate::error::CaseError;
use crate::report::RunReport;
use serde::{Deserialize, Serialize};

/// Final status of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail { message: String },
}

/// Name and status of a finished test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Pass
    }
}

/// Handle to a running test.
///
/// Each [`step`](TestHandle::step) runs only while no earlier step has
/// failed; the first error becomes the test's failure message.
#[derive(Debug)]
pub struct TestHandle {
    name: String,
    failure: Option<String>,
}

impl TestHandle {
    /// Start a test outside any [`Harness`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run one step of the test body.
    ///
    /// Returns `true` if the step ran and succeeded.
    pub fn step<F>(&mut self, f: F) -> bool
    where
        F: FnOnce() -> Result<(), CaseError>,
    {
        if self.failure.is_some() {
            return false;
        }
        match f() {
            Ok(()) => true,
            Err(err) => {
                log::debug!(target: "check", "{}: {}", self.name, err);
                self.failure = Some(err.to_string());
                false
            }
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Finish the test.
    pub fn done(self) -> TestOutcome {
        let status = match self.failure {
            None => TestStatus::Pass,
            Some(message) => TestStatus::Fail { message },
        };
        TestOutcome {
            name: self.name,
            status,
        }
    }
}

/// Collects outcomes of the tests it starts.
#[derive(Debug, Default)]
pub struct Harness {
    outcomes: Vec<TestOutcome>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_test(&self, name: impl Into<String>) -> TestHandle {
        TestHandle::new(name)
    }

    pub fn report(&mut self, outcome: TestOutcome) {
        match &outcome.status {
            TestStatus::Pass => log::info!(target: "check", "PASS {}", outcome.name),
            TestStatus::Fail { message } => {
                log::warn!(target: "check", "FAIL {}: {}", outcome.name, message)
            }
        }
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn finish(self) -> RunReport {
        RunReport::new(self.outcomes)
    }
}
