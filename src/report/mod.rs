pub mod json;
pub mod junit;
pub mod types;

pub use types::{Report, ResultStatus, TestResult};

use colored::Colorize;

/// Print a one-line-per-case summary of the report
pub fn print_summary(report: &Report) {
    for result in &report.data {
        let icon = match result.status {
            ResultStatus::Success => "✓".green(),
            ResultStatus::Failure => "✗".red(),
        };
        println!("  {} [{}] {}", icon, result.testid, result.message);
    }

    let score = format!("{}/{}", report.total_score(), report.maximum_score());
    if report.all_passed() {
        println!("{} Score: {}", "✅".green(), score.green().bold());
    } else {
        println!("{} Score: {}", "❌".red(), score.red().bold());
    }
}
