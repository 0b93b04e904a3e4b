// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! aiseobot CLI - AI Search Readiness Checker

use aiseobot::config::{self, Config};
use aiseobot::report::{generate_report, OutputFormat};
use aiseobot::{HttpFetcher, SiteAnalyzer};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// aiseobot: AI Search Readiness Checker
///
/// Analyzes how well a website is prepared to be cited by AI search engines:
/// ChatGPT, Perplexity, Google Gemini, Microsoft Copilot, and Claude.
#[derive(Parser)]
#[command(name = "aiseobot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Domain or URL to analyze (e.g. myblog.com)
    domain: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Homepage timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize configuration file
    Init {
        /// Output format (yaml, toml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Show current configuration
    Show,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable report
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    let mut config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(timeout) = cli.timeout {
        config.fetch.homepage_timeout_secs = timeout.max(1);
    }

    match (cli.command, cli.domain) {
        (Some(Command::Init { format }), _) => handle_init(&config_path, &format),
        (Some(Command::Show), _) => handle_show(&config),
        (None, Some(domain)) => handle_analyze(&domain, &config, cli.format.into()).await,
        (None, None) => {
            eprintln!("Usage: aiseobot <domain>");
            eprintln!("Example: aiseobot myblog.com");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn handle_analyze(domain: &str, config: &Config, format: OutputFormat) -> ExitCode {
    let fetcher = match HttpFetcher::new(&config.fetch) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let analyzer = SiteAnalyzer::new(fetcher, config.fetch.clone());

    if format == OutputFormat::Text {
        println!("\n⏳ Analyzing AI SEO readiness for {}...", domain);
        println!("   Checking signals used by ChatGPT, Perplexity, Copilot & Gemini...\n");
    }

    match analyzer.analyze(domain).await {
        Ok(report) => match generate_report(&report, format) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error rendering report: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("  ❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_init(config_path: &PathBuf, format: &str) -> ExitCode {
    let path = if format == "toml" {
        config_path.with_extension("toml")
    } else {
        config_path.clone()
    };

    match config::write_default_config(&path) {
        Ok(()) => {
            println!("Created configuration file: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error creating config: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_show(config: &Config) -> ExitCode {
    println!("\nCurrent Configuration:");
    println!("======================\n");

    println!("Fetch:");
    println!("  Homepage timeout:  {}s", config.fetch.homepage_timeout_secs);
    println!("  Auxiliary timeout: {}s", config.fetch.auxiliary_timeout_secs);
    println!("  Fast threshold:    {}s", config.fetch.fast_threshold_secs);
    println!("  User agent:        {}", config.fetch.user_agent);

    ExitCode::SUCCESS
}
