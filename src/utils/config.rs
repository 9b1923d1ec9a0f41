use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Rendering context used to evaluate the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Headless Chromium via Playwright
    #[default]
    Browser,
    /// Embedded JavaScript engine running the page's scripts
    Script,
    /// Built-in reference validator, the page is not loaded
    Native,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Engine::Browser => "browser",
            Engine::Script => "script",
            Engine::Native => "native",
        };
        f.write_str(name)
    }
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Page exposing the function under test
    pub page: PathBuf,

    /// Grading report destination (overwritten on every run)
    pub output: PathBuf,

    /// YAML suite file; the built-in suite is used when absent
    pub cases: Option<PathBuf>,

    pub engine: Engine,

    /// Run the browser without a window
    pub headless: bool,

    /// Chromium binary override
    pub browser_executable: Option<PathBuf>,

    /// Global function invoked for each case
    pub function: String,

    /// Optional JUnit XML copy of the report
    pub junit: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let headless = std::env::var("GRADER_HEADLESS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let browser_executable = std::env::var("PLAYWRIGHT_CHROMIUM_EXECUTABLE_PATH")
            .ok()
            .map(PathBuf::from);

        Self {
            page: PathBuf::from("index.html"),
            output: PathBuf::from("../evaluate.json"),
            cases: None,
            engine: Engine::Browser,
            headless,
            browser_executable,
            function: "validString".to_string(),
            junit: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Percent-encoded `file://` URL of the page, resolved against the working directory
    pub fn page_url(&self) -> Result<String> {
        let absolute = if self.page.is_absolute() {
            self.page.clone()
        } else {
            std::env::current_dir()
                .context("Failed to resolve working directory")?
                .join(&self.page)
        };
        let url = url::Url::from_file_path(&absolute)
            .map_err(|_| anyhow::anyhow!("Cannot build file URL for: {}", absolute.display()))?;
        Ok(url.to_string())
    }
}
