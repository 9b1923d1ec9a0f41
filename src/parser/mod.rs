pub mod types;
pub mod yaml;

pub use types::{TestCase, TestSuite};

use crate::error::GradeError;
use std::path::Path;

/// Load the suite from `path`, or the built-in suite when no path is given
pub fn load_suite(path: Option<&Path>) -> Result<TestSuite, GradeError> {
    match path {
        Some(p) => yaml::parse_suite_file(p),
        None => Ok(TestSuite::builtin()),
    }
}
