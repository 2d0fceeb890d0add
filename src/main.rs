//! API smoke test runner.
//!
//! With no arguments it checks the production API using the compiled-in
//! configuration. Exit status: 0 all checks passed, 1 at least one failed,
//! 2 the configuration was rejected before any check ran.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use api_smoke::checks::CheckContext;
use api_smoke::config::{load_config, validate_config, ConfigError, SmokeConfig};
use api_smoke::observability::logging;
use api_smoke::runner::Runner;

#[derive(Parser)]
#[command(name = "api-smoke")]
#[command(about = "Black-box smoke tests for the deployed API", long_about = None)]
struct Cli {
    /// TOML configuration file (compiled-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the object storage URL
    #[arg(long)]
    storage_url: Option<String>,

    /// Override the per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<SmokeConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SmokeConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.target.base_url = base_url.clone();
        }
        if let Some(storage_url) = &self.storage_url {
            config.target.storage_url = storage_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.target.timeout_secs = timeout;
        }
        if self.no_color {
            config.output.color = false;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    logging::init(&config.observability);
    tracing::info!(
        base_url = %config.target.base_url,
        timeout_secs = config.target.timeout_secs,
        "Configuration loaded"
    );

    let ctx = match CheckContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: failed to build HTTP client: {}", e);
            return ExitCode::from(2);
        }
    };

    let runner = Runner::standard();
    ctx.reporter.banner(&ctx.config);
    let tally = runner.run(&ctx).await;
    ctx.reporter.summary(&tally);

    tally.exit_code()
}
