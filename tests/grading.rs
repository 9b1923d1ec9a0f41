use pattern_grader::parser::{yaml, TestSuite};
use pattern_grader::report::{Report, ResultStatus};
use pattern_grader::{run, Config, Engine, GradeError};
use std::path::{Path, PathBuf};

const CORRECT: &str = "function validString(input) { return /^[a-z]+[0-9]+$/.test(input); }";
// Digits made optional, so "abc" is wrongly accepted
const ACCEPTS_ABC: &str = "function validString(input) { return /^[a-z]+[0-9]*$/.test(input); }";

fn lab(dir: &Path, script: &str) -> PathBuf {
    std::fs::write(dir.join("script.js"), script).unwrap();
    let page = dir.join("index.html");
    std::fs::write(
        &page,
        r#"<html><head><script src="script.js"></script></head><body></body></html>"#,
    )
    .unwrap();
    page
}

fn script_config(page: PathBuf, output: PathBuf) -> Config {
    Config {
        page,
        output,
        engine: Engine::Script,
        ..Config::default()
    }
}

fn read_report(path: &Path) -> Report {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn correct_validator_passes_every_case() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/evaluate.json");
    let config = script_config(lab(dir.path(), CORRECT), output.clone());

    let report = run(&config).await.unwrap();

    assert_eq!(report, read_report(&output));
    let ids: Vec<u32> = report.data.iter().map(|r| r.testid).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    for result in &report.data {
        assert_eq!(result.status, ResultStatus::Success);
        assert_eq!(result.score, 1);
        assert_eq!(result.maximum, 1);
        assert_eq!(result.message, "No issues found.");
    }
}

#[tokio::test]
async fn one_wrong_answer_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("evaluate.json");
    let config = script_config(lab(dir.path(), ACCEPTS_ABC), output.clone());

    let report = run(&config).await.unwrap();

    assert_eq!(report.data.len(), 8);
    for result in &report.data {
        assert_eq!(result.status, ResultStatus::Failure);
        assert_eq!(result.score, 0);
        if result.testid == 3 {
            assert_eq!(result.message, "Test case 3 failed for input: abc");
        } else {
            assert_eq!(result.message, "All test cases not passed.");
        }
    }

    let raw = std::fs::read_to_string(&output).unwrap();
    assert!(raw.contains("\n  \"data\": [\n    {\n      \"testid\": 1,"));
    assert!(raw.contains("\"maximum marks\": 1"));
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("evaluate.json");
    let config = script_config(lab(dir.path(), ACCEPTS_ABC), output.clone());

    run(&config).await.unwrap();
    let first = std::fs::read(&output).unwrap();
    run(&config).await.unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_function_errors_every_case() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("evaluate.json");
    let config = script_config(lab(dir.path(), "var nothing = 0;"), output);

    let report = run(&config).await.unwrap();

    assert!(report.data.iter().all(|r| r.status == ResultStatus::Failure));
    assert_eq!(
        report.data[0].message,
        "Test case 1 failed for input: abc123 (error: validString is not defined or not a function)"
    );
}

#[tokio::test]
async fn page_script_error_still_grades_every_case() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("evaluate.json");
    let script = format!("{}\nwindow.onload.call();", CORRECT);
    let config = script_config(lab(dir.path(), &script), output.clone());

    let report = run(&config).await.unwrap();

    assert_eq!(report.data.len(), 8);
    assert!(report.all_passed());
    assert_eq!(read_report(&output), report);
}

#[tokio::test]
async fn missing_page_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("evaluate.json");
    let config = script_config(dir.path().join("absent.html"), output.clone());

    let err = run(&config).await.unwrap_err();

    assert!(matches!(err, GradeError::PageLoad { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn invalid_suite_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let suite = dir.path().join("suite.yaml");
    std::fs::write(&suite, "cases: []\n").unwrap();
    let config = Config {
        cases: Some(suite),
        ..script_config(lab(dir.path(), CORRECT), dir.path().join("evaluate.json"))
    };

    let err = run(&config).await.unwrap_err();
    assert!(matches!(err, GradeError::Cases { .. }));
}

#[tokio::test]
async fn injected_suite_and_junit_export() {
    let dir = tempfile::tempdir().unwrap();
    let suite = dir.path().join("suite.yaml");
    std::fs::write(
        &suite,
        "name: extra\ncases:\n  - { id: 10, input: q7, expected: true }\n  - { id: 11, input: Q7, expected: false }\n",
    )
    .unwrap();
    let junit = dir.path().join("reports/junit.xml");
    let config = Config {
        cases: Some(suite),
        junit: Some(junit.clone()),
        ..script_config(lab(dir.path(), CORRECT), dir.path().join("evaluate.json"))
    };

    let report = run(&config).await.unwrap();

    let ids: Vec<u32> = report.data.iter().map(|r| r.testid).collect();
    assert_eq!(ids, vec![10, 11]);
    assert!(report.all_passed());
    let xml = std::fs::read_to_string(&junit).unwrap();
    assert!(xml.contains(r#"<testsuite name="extra""#));
    assert!(xml.contains(r#"failures="0""#));
}

#[tokio::test]
async fn shipped_page_and_suite_agree_with_reference() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let dir = tempfile::tempdir().unwrap();
    let suite_file = root.join("cases/valid_string.yaml");
    assert_eq!(yaml::parse_suite_file(&suite_file).unwrap(), TestSuite::builtin());

    for engine in [Engine::Script, Engine::Native] {
        let config = Config {
            page: root.join("page/index.html"),
            output: dir.path().join(format!("{}.json", engine)),
            cases: Some(suite_file.clone()),
            engine,
            ..Config::default()
        };
        let report = run(&config).await.unwrap();
        assert!(report.all_passed(), "{} engine", engine);
    }
}
