use crate::driver::Invocation;
use crate::parser::TestCase;
use serde::{Deserialize, Serialize};

/// A case together with what the page returned for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub case: TestCase,
    pub invocation: Invocation,
}

impl CaseOutcome {
    pub fn new(case: TestCase, invocation: Invocation) -> Self {
        Self { case, invocation }
    }

    /// Passed iff the call returned exactly the expected boolean
    pub fn passed(&self) -> bool {
        self.invocation.value() == Some(self.case.expected)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.invocation {
            Invocation::Errored(e) => Some(e),
            Invocation::Returned(_) => None,
        }
    }
}

/// Running tally kept while cases execute
#[derive(Debug, Clone)]
pub struct RunState {
    all_passed: bool,
    failed: Vec<u32>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            all_passed: true,
            failed: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: &CaseOutcome) {
        if !outcome.passed() {
            self.all_passed = false;
            self.failed.push(outcome.case.id);
        }
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    pub fn is_failed(&self, id: u32) -> bool {
        self.failed.contains(&id)
    }

    pub fn failed(&self) -> &[u32] {
        &self.failed
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
