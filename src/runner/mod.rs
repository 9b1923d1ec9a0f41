pub mod grading;
pub mod state;

pub use grading::build_report;
pub use state::*;

use colored::Colorize;

use crate::driver::{self, EvalContext};
use crate::error::{chain, GradeError};
use crate::parser::{self, TestCase, TestSuite};
use crate::report::{self, Report};
use crate::utils::config::Config;

/// Invoke the function for each case, strictly in order
pub async fn execute_cases(ctx: &mut dyn EvalContext, cases: &[TestCase]) -> Vec<CaseOutcome> {
    let mut outcomes = Vec::with_capacity(cases.len());
    for case in cases {
        let invocation = ctx.invoke(&case.input).await;
        let outcome = CaseOutcome::new(case.clone(), invocation);
        log::debug!(
            "case {} input={:?} expected={} got={:?} passed={}",
            case.id,
            case.input,
            case.expected,
            outcome.invocation,
            outcome.passed()
        );
        outcomes.push(outcome);
    }
    outcomes
}

/// Load the page, grade every case and write the report artifacts.
///
/// Write failures are logged and do not fail the run.
pub async fn grade(
    ctx: &mut dyn EvalContext,
    suite: &TestSuite,
    config: &Config,
) -> Result<Report, GradeError> {
    ctx.load().await.map_err(|e| GradeError::PageLoad {
        page: config.page.display().to_string(),
        reason: chain(&e),
    })?;
    log::info!("page loaded: {}", config.page.display());

    let outcomes = execute_cases(ctx, &suite.cases).await;
    let report = build_report(&outcomes);

    if let Err(e) = report::json::write(&report, &config.output) {
        log::error!("{}", e);
    }
    if let Some(ref junit) = config.junit {
        if let Err(e) = report::junit::write_report(suite, &report, junit) {
            log::error!("{}", e);
        }
    }

    Ok(report)
}

/// Run a full grading session with `config`.
///
/// The rendering context is released on every path once it has been acquired.
pub async fn run(config: &Config) -> Result<Report, GradeError> {
    let suite = parser::load_suite(config.cases.as_deref())?;

    println!(
        "{} Grading {} with {} case(s) [{}]",
        "▶".green().bold(),
        config.page.display().to_string().cyan(),
        suite.len(),
        config.engine.to_string().yellow()
    );

    let mut ctx = driver::open(config).await?;
    let result = grade(ctx.as_mut(), &suite, config).await;

    if let Err(e) = ctx.close().await {
        log::warn!("failed to release {} context: {}", ctx.engine_name(), chain(&e));
    }

    result
}
