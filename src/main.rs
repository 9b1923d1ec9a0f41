use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use pattern_grader::{parser, report, runner, validator, Config, Engine};

#[derive(Parser)]
#[command(name = "pattern-grader")]
#[command(version)]
#[command(about = "Autograder for the letters-then-digits validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade the page and write the JSON report
    Run(RunArgs),

    /// Check strings against the reference validator
    Check {
        /// Strings to check
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the active test suite
    Cases {
        /// YAML suite file (built-in suite if omitted)
        #[arg(long)]
        cases: Option<PathBuf>,
    },
}

#[derive(clap::Args, Default)]
struct RunArgs {
    /// YAML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page exposing the function under test
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// Report output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML suite file
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Rendering context
    #[arg(short, long, value_enum)]
    engine: Option<Engine>,

    /// Also write a JUnit XML report
    #[arg(long)]
    junit: Option<PathBuf>,

    /// Show the browser window
    #[arg(long, default_value = "false")]
    headed: bool,
}

impl RunArgs {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(page) = self.page {
            config.page = page;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.cases.is_some() {
            config.cases = self.cases;
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if self.junit.is_some() {
            config.junit = self.junit;
        }
        if self.headed {
            config.headless = false;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // No subcommand behaves like a plain `run`
    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let config = args.into_config()?;
            let graded = runner::run(&config).await?;
            report::print_summary(&graded);
            println!("  Output: {}", config.output.display().to_string().cyan());
        }

        Commands::Check { inputs } => {
            for input in inputs {
                if validator::valid_string(&input) {
                    println!("{} {:?} is valid", "✓".green(), input);
                } else {
                    println!("{} {:?} is invalid", "✗".red(), input);
                }
            }
        }

        Commands::Cases { cases } => {
            let suite = parser::load_suite(cases.as_deref())?;
            println!("{} {}", "Suite:".bold(), suite.name.cyan());
            for case in &suite.cases {
                println!("  [{}] {:<16} -> {}", case.id, format!("{:?}", case.input), case.expected);
            }
        }
    }

    Ok(())
}
