use super::types::Report;
use crate::error::GradeError;
use std::path::Path;

/// Pretty-printed report, 2-space indentation
pub fn render(report: &Report) -> Result<String, GradeError> {
    serde_json::to_string_pretty(report).map_err(|e| GradeError::Write {
        path: "<memory>".into(),
        reason: e.to_string(),
    })
}

/// Write the report to `path`, replacing any previous file
pub fn write(report: &Report, path: &Path) -> Result<(), GradeError> {
    let json = render(report)?;
    let failed = |e: std::io::Error| GradeError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(failed)?;
    }
    std::fs::write(path, json).map_err(failed)?;
    log::info!("JSON report saved to: {}", path.display());
    Ok(())
}
