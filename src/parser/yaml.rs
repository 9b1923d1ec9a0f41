use super::types::{TestCase, TestSuite};
use crate::error::GradeError;
use std::path::Path;

/// Parse a YAML suite file into a TestSuite
pub fn parse_suite_file(path: &Path) -> Result<TestSuite, GradeError> {
    let content = std::fs::read_to_string(path).map_err(|e| GradeError::Cases {
        source_name: path.display().to_string(),
        reason: format!("failed to read file: {}", e),
    })?;

    parse_suite_content(&content, &path.display().to_string())
}

/// Parse YAML content into a TestSuite
///
/// Two layouts are accepted:
/// ```yaml
/// name: validString
/// cases:
///   - { id: 1, input: abc123, expected: true }
/// ```
/// or a bare list of cases.
pub fn parse_suite_content(content: &str, source_name: &str) -> Result<TestSuite, GradeError> {
    let invalid = |reason: String| GradeError::Cases {
        source_name: source_name.to_string(),
        reason,
    };

    let suite = match serde_yaml::from_str::<TestSuite>(content) {
        Ok(suite) => suite,
        Err(map_err) => match serde_yaml::from_str::<Vec<TestCase>>(content) {
            Ok(cases) => TestSuite {
                name: file_stem(source_name),
                cases,
            },
            // Report the structured-form error, it is the documented layout
            Err(_) => return Err(invalid(map_err.to_string())),
        },
    };

    suite.validate().map_err(invalid)?;
    Ok(suite)
}

fn file_stem(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| source_name.to_string())
}
