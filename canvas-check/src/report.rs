//! Run summaries.

use crate::error::CheckResult;
use crate::harness::TestOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcomes of a run with pass/fail counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<TestOutcome>,
}

impl RunReport {
    pub fn new(outcomes: Vec<TestOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        Self {
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn to_json(&self, pretty: bool) -> CheckResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// One line per test followed by a summary line.
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.status {
                crate::TestStatus::Pass => writeln!(f, "PASS {}", outcome.name)?,
                crate::TestStatus::Fail { message } => {
                    writeln!(f, "FAIL {}: {}", outcome.name, message)?
                }
            }
        }
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::TestStatus;

    fn outcome(name: &str, status: TestStatus) -> TestOutcome {
        TestOutcome {
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn test_counts_and_display() {
        let report = RunReport::new(vec![
            outcome("2d.line.cap.butt", TestStatus::Pass),
            outcome(
                "2d.line.cap.round",
                TestStatus::Fail {
                    message: "bad pixel".to_string(),
                },
            ),
        ]);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.to_string(),
            "PASS 2d.line.cap.butt\nFAIL 2d.line.cap.round: bad pixel\n1 passed, 1 failed"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let report = RunReport::new(vec![outcome("a", TestStatus::Pass)]);
        let json = report.to_json(false).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(parsed.all_passed());
    }

    #[test]
    fn test_empty_report_passes() {
        let report = RunReport::new(Vec::new());
        assert!(report.all_passed());
        assert_eq!(report.to_string(), "0 passed, 0 failed");
    }
}
