//! Browser rendering context using Playwright
//!
//! Launches a headless Chromium, opens the page under test over `file://` and
//! calls the exposed function through `page.evaluate`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use playwright::api::{Browser, BrowserContext as PwContext, Page};
use playwright::Playwright;
use std::path::PathBuf;

use crate::driver::traits::{EvalContext, Invocation};
use crate::utils::config::Config;

/// Launch options for the browser context
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    pub headless: bool,
    pub executable: Option<PathBuf>,
    /// `file://` URL of the page under test
    pub page_url: String,
    /// Global function invoked for each case
    pub function: String,
}

impl BrowserOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            headless: config.headless,
            executable: config.browser_executable.clone(),
            page_url: config.page_url()?,
            function: config.function.clone(),
        })
    }

    /// Expression passed to `page.evaluate` for each case
    fn call_expression(&self) -> String {
        format!("input => {}(input)", self.function)
    }

    /// Expression checking the function is exposed on the loaded page
    fn exposed_check_expression(&self) -> String {
        format!("() => typeof {} === 'function'", self.function)
    }
}

/// Map the result of one `page.evaluate` call to an invocation
fn invocation_from_result<E: std::fmt::Display>(
    result: std::result::Result<serde_json::Value, E>,
) -> Invocation {
    match result {
        Ok(value) => Invocation::from_json(&value),
        Err(e) => Invocation::Errored(e.to_string()),
    }
}

/// Headless Chromium session
pub struct BrowserContext {
    #[allow(dead_code)]
    playwright: Playwright,
    browser: Browser,
    #[allow(dead_code)]
    context: PwContext,
    page: Page,
    options: BrowserOptions,
    closed: bool,
}

impl BrowserContext {
    /// Start Playwright, launch Chromium and open a blank page
    pub async fn launch(options: BrowserOptions) -> Result<Self> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let chromium = playwright.chromium();
        let browser = launch_chromium_browser(&chromium, &options).await?;

        let context = browser
            .context_builder()
            .build()
            .await
            .context("Failed to create browser context")?;
        let page = context.new_page().await.context("Failed to open page")?;

        log::info!("browser context ready (headless: {})", options.headless);

        Ok(Self {
            playwright,
            browser,
            context,
            page,
            options,
            closed: false,
        })
    }
}

#[async_trait(?Send)]
impl EvalContext for BrowserContext {
    fn engine_name(&self) -> &str {
        "browser"
    }

    async fn load(&mut self) -> Result<()> {
        self.page
            .goto_builder(&self.options.page_url)
            .goto()
            .await
            .context("Failed to navigate to page")?;

        let check = self.options.exposed_check_expression();
        let exposed: bool = self.page.evaluate(&check, ()).await.unwrap_or(false);
        if !exposed {
            log::warn!(
                "{} is not defined on {}, every case will error",
                self.options.function,
                self.options.page_url
            );
        }
        Ok(())
    }

    async fn invoke(&mut self, input: &str) -> Invocation {
        let expression = self.options.call_expression();
        let result = self
            .page
            .evaluate::<String, serde_json::Value>(&expression, input.to_string())
            .await;
        invocation_from_result(result)
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.browser
            .close()
            .await
            .context("Failed to close browser")?;
        log::info!("browser context closed");
        Ok(())
    }
}

impl Drop for BrowserContext {
    fn drop(&mut self) {
        // The Playwright driver process goes away with `playwright`, taking Chromium with it
        if !self.closed {
            log::warn!("browser context dropped without close");
        }
    }
}

/// Launch Chromium with the sandbox flags needed inside grading containers
async fn launch_chromium_browser(
    chromium: &playwright::api::BrowserType,
    options: &BrowserOptions,
) -> Result<Browser> {
    let mut launcher = chromium.launcher().headless(options.headless);

    let executable = options.executable.clone().or_else(find_system_browser);
    if let Some(ref path) = executable {
        println!("{} Using browser: {}", "🌐".blue(), path.display());
        launcher = launcher.executable(path);
    } else {
        println!(
            "{} No browser executable found. Falling back to Playwright's bundled Chromium",
            "ℹ".blue()
        );
    }

    let args: Vec<String> = [
        "--no-sandbox",
        "--disable-setuid-sandbox",
        "--disable-dev-shm-usage",
        "--disable-gpu",
        "--ignore-certificate-errors",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    launcher = launcher.args(&args);

    launcher
        .launch()
        .await
        .context("Failed to launch Chromium")
}

fn find_system_browser() -> Option<PathBuf> {
    let common_paths = [
        "/usr/bin/google-chrome",
        "/usr/bin/google-chrome-stable",
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/snap/bin/chromium",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
    ];

    common_paths
        .iter()
        .map(std::path::Path::new)
        .find(|p| p.exists())
        .map(|p| p.to_path_buf())
}
