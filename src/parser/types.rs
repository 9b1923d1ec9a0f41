use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single input/expected pair fed to the function under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: u32,
    pub input: String,
    pub expected: bool,
}

impl TestCase {
    pub fn new(id: u32, input: &str, expected: bool) -> Self {
        Self {
            id,
            input: input.to_string(),
            expected,
        }
    }
}

/// Ordered collection of test cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(default = "default_suite_name")]
    pub name: String,
    pub cases: Vec<TestCase>,
}

fn default_suite_name() -> String {
    "validString".to_string()
}

impl TestSuite {
    /// The eight cases graded by default
    pub fn builtin() -> Self {
        Self {
            name: default_suite_name(),
            cases: vec![
                TestCase::new(1, "abc123", true),
                TestCase::new(2, "xyz999", true),
                TestCase::new(3, "abc", false),     // No digits
                TestCase::new(4, "123abc", false),  // Digits first
                TestCase::new(5, "abcd1234", true),
                TestCase::new(6, "1a2b3c", false),  // Interleaved
                TestCase::new(7, "a12345", true),
                TestCase::new(8, "abcABC123", false), // Uppercase mixed in
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Check the suite is usable: non-empty and ids unique
    pub fn validate(&self) -> Result<(), String> {
        if self.cases.is_empty() {
            return Err("suite has no cases".to_string());
        }
        let mut seen = HashSet::new();
        for case in &self.cases {
            if !seen.insert(case.id) {
                return Err(format!("duplicate case id {}", case.id));
            }
        }
        Ok(())
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::builtin()
    }
}
