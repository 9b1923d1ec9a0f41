//! Turns case outcomes into the graded report.
//!
//! The run is graded as a whole: a single failing case marks every result as
//! a failure with score 0. Only the message tells individually failing cases
//! apart from the rest.

use super::state::{CaseOutcome, RunState};
use crate::report::{Report, ResultStatus, TestResult};

pub const PASSED_MESSAGE: &str = "No issues found.";
pub const RUN_FAILED_MESSAGE: &str = "All test cases not passed.";

pub fn case_failed_message(outcome: &CaseOutcome) -> String {
    let base = format!(
        "Test case {} failed for input: {}",
        outcome.case.id, outcome.case.input
    );
    match outcome.error() {
        Some(err) => format!("{} (error: {})", base, err),
        None => base,
    }
}

/// Build the report for `outcomes`, in order
pub fn build_report(outcomes: &[CaseOutcome]) -> Report {
    let mut state = RunState::new();
    for outcome in outcomes {
        state.record(outcome);
    }

    let data = outcomes
        .iter()
        .map(|outcome| {
            if state.all_passed() {
                TestResult {
                    testid: outcome.case.id,
                    status: ResultStatus::Success,
                    score: 1,
                    maximum: 1,
                    message: PASSED_MESSAGE.to_string(),
                }
            } else {
                let message = if state.is_failed(outcome.case.id) {
                    case_failed_message(outcome)
                } else {
                    RUN_FAILED_MESSAGE.to_string()
                };
                TestResult {
                    testid: outcome.case.id,
                    status: ResultStatus::Failure,
                    score: 0,
                    maximum: 1,
                    message,
                }
            }
        })
        .collect();

    Report { data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Invocation;
    use crate::parser::TestSuite;
    use crate::validator::valid_string;

    fn outcomes_with(answer: impl Fn(&str) -> Invocation) -> Vec<CaseOutcome> {
        TestSuite::builtin()
            .cases
            .into_iter()
            .map(|case| {
                let invocation = answer(&case.input);
                CaseOutcome::new(case, invocation)
            })
            .collect()
    }

    #[test]
    fn test_all_pass() {
        let report = build_report(&outcomes_with(|s| Invocation::Returned(valid_string(s))));
        assert_eq!(report.data.len(), 8);
        for (i, result) in report.data.iter().enumerate() {
            assert_eq!(result.testid, i as u32 + 1);
            assert_eq!(result.status, ResultStatus::Success);
            assert_eq!(result.score, 1);
            assert_eq!(result.maximum, 1);
            assert_eq!(result.message, PASSED_MESSAGE);
        }
    }

    #[test]
    fn test_single_failure_flips_every_result() {
        let report = build_report(&outcomes_with(|s| {
            Invocation::Returned(s == "abc" || valid_string(s))
        }));

        assert!(report.data.iter().all(|r| r.status == ResultStatus::Failure));
        assert_eq!(report.total_score(), 0);
        for result in &report.data {
            if result.testid == 3 {
                assert_eq!(result.message, "Test case 3 failed for input: abc");
            } else {
                assert_eq!(result.message, RUN_FAILED_MESSAGE);
            }
        }
    }

    #[test]
    fn test_error_is_a_failure_with_detail() {
        let report = build_report(&outcomes_with(|s| {
            if s == "123abc" {
                Invocation::Errored("TypeError: boom".into())
            } else {
                Invocation::Returned(valid_string(s))
            }
        }));
        assert_eq!(
            report.data[3].message,
            "Test case 4 failed for input: 123abc (error: TypeError: boom)"
        );
        assert_eq!(report.data[0].message, RUN_FAILED_MESSAGE);
    }

    #[test]
    fn test_empty_outcomes() {
        assert!(build_report(&[]).data.is_empty());
    }
}
