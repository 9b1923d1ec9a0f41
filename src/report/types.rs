use serde::{Deserialize, Serialize};

/// Per-case grading status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Failure,
}

/// One graded test case, as written to `evaluate.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub testid: u32,
    pub status: ResultStatus,
    pub score: u32,
    #[serde(rename = "maximum marks")]
    pub maximum: u32,
    pub message: String,
}

/// Grading report, one result per case in case order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub data: Vec<TestResult>,
}

impl Report {
    pub fn total_score(&self) -> u32 {
        self.data.iter().map(|r| r.score).sum()
    }

    pub fn maximum_score(&self) -> u32 {
        self.data.iter().map(|r| r.maximum).sum()
    }

    pub fn all_passed(&self) -> bool {
        !self.data.is_empty() && self.data.iter().all(|r| r.status == ResultStatus::Success)
    }
}
