use super::types::{Report, ResultStatus, TestResult};
use crate::error::GradeError;
use crate::parser::TestSuite;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::Path;

/// Generate a JUnit XML document from a graded suite
pub fn generate_junit_xml(
    suite: &TestSuite,
    report: &Report,
    timestamp: &str,
) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let total = report.data.len().to_string();
    let failures = report
        .data
        .iter()
        .filter(|r| r.status == ResultStatus::Failure)
        .count()
        .to_string();

    let mut suites_start = BytesStart::new("testsuites");
    suites_start.push_attribute(("name", "pattern-grader"));
    suites_start.push_attribute(("tests", total.as_str()));
    suites_start.push_attribute(("failures", failures.as_str()));
    writer.write_event(Event::Start(suites_start))?;

    let mut suite_start = BytesStart::new("testsuite");
    suite_start.push_attribute(("name", suite.name.as_str()));
    suite_start.push_attribute(("tests", total.as_str()));
    suite_start.push_attribute(("failures", failures.as_str()));
    suite_start.push_attribute(("skipped", "0"));
    suite_start.push_attribute(("timestamp", timestamp));
    writer.write_event(Event::Start(suite_start))?;

    for result in &report.data {
        let input = suite
            .cases
            .iter()
            .find(|c| c.id == result.testid)
            .map(|c| c.input.as_str())
            .unwrap_or_default();
        write_test_case(&mut writer, &suite.name, result, input)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

    let xml = String::from_utf8(writer.into_inner().into_inner())?;
    Ok(xml)
}

fn write_test_case<W: std::io::Write>(
    writer: &mut Writer<W>,
    suite_name: &str,
    result: &TestResult,
    input: &str,
) -> anyhow::Result<()> {
    let name = format!("case {}: {:?}", result.testid, input);
    let mut case_start = BytesStart::new("testcase");
    case_start.push_attribute(("name", name.as_str()));
    case_start.push_attribute(("classname", suite_name));

    if result.status == ResultStatus::Success {
        writer.write_event(Event::Empty(case_start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(case_start))?;
    let mut fail_start = BytesStart::new("failure");
    fail_start.push_attribute(("message", result.message.as_str()));
    fail_start.push_attribute(("type", "AssertionError"));
    writer.write_event(Event::Start(fail_start))?;
    writer.write_event(Event::Text(BytesText::new(&result.message)))?;
    writer.write_event(Event::End(BytesEnd::new("failure")))?;
    writer.write_event(Event::End(BytesEnd::new("testcase")))?;
    Ok(())
}

/// Write the JUnit report to `path`
pub fn write_report(suite: &TestSuite, report: &Report, path: &Path) -> Result<(), GradeError> {
    let failed = |reason: String| GradeError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let xml = generate_junit_xml(suite, report, &timestamp).map_err(|e| failed(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
    }
    std::fs::write(path, xml).map_err(|e| failed(e.to_string()))?;
    log::info!("JUnit report saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TestCase;

    #[test]
    fn test_generate_junit_xml() {
        let suite = TestSuite {
            name: "validString".into(),
            cases: vec![
                TestCase::new(1, "abc123", true),
                TestCase::new(2, "abc", false),
            ],
        };
        let report = Report {
            data: vec![
                TestResult {
                    testid: 1,
                    status: ResultStatus::Failure,
                    score: 0,
                    maximum: 1,
                    message: "All test cases not passed.".into(),
                },
                TestResult {
                    testid: 2,
                    status: ResultStatus::Failure,
                    score: 0,
                    maximum: 1,
                    message: "Test case 2 failed for input: abc".into(),
                },
            ],
        };

        let xml = generate_junit_xml(&suite, &report, "2024-01-01T12:00:00").unwrap();

        assert!(xml.contains(r#"<testsuites name="pattern-grader" tests="2" failures="2">"#));
        assert!(xml.contains(r#"timestamp="2024-01-01T12:00:00""#));
        assert!(xml.contains(r#"name="case 2: &quot;abc&quot;""#));
        assert!(xml.contains(r#"message="Test case 2 failed for input: abc""#));
    }

    #[test]
    fn test_passing_cases_are_empty_elements() {
        let suite = TestSuite::builtin();
        let report = Report {
            data: vec![TestResult {
                testid: 1,
                status: ResultStatus::Success,
                score: 1,
                maximum: 1,
                message: "No issues found.".into(),
            }],
        };
        let xml = generate_junit_xml(&suite, &report, "t").unwrap();
        assert!(xml.contains(r#"<testcase name="case 1: &quot;abc123&quot;" classname="validString"/>"#));
        assert!(!xml.contains("<failure"));
    }
}
