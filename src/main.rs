/*!
 * Command-line interface for tokcount
 */

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tokcount::config::{Args, Command, Config};
use tokcount::report::{Catalog, ReportFormat, Reporter};
use tokcount::tokenizer::{default_model, Registry};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> tokcount::Result<()> {
    config.validate()?;

    match config.command {
        Command::Help => {
            Args::command().print_help()?;
            Ok(())
        }
        Command::Completions(shell) => {
            clap_complete::generate(shell, &mut Args::command(), "tokcount", &mut io::stdout());
            Ok(())
        }
        Command::List => {
            let registry = Registry::default();
            let catalog = Catalog::from_registry(&registry, default_model());
            let reporter = Reporter::new(config.format);
            println!("{}", reporter.render_catalog(&catalog)?);
            Ok(())
        }
        Command::Count => count(config),
    }
}

fn count(config: &Config) -> tokcount::Result<()> {
    let text = config.read_input()?;
    debug!(bytes = text.len(), model = %config.model, "read input");

    // Construct the registry once; it is read-only from here on
    let registry = Registry::default();

    let progress = if config.format == ReportFormat::Table && io::stderr().is_terminal() {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg:.dim.white}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress.set_message(format!("🔎 Counting tokens for {}", config.model));
        progress
    } else {
        ProgressBar::hidden()
    };

    let result = registry.count_tokens(&text, &config.model);
    progress.finish_and_clear();
    let result = result?;

    info!(
        provider = %result.provider,
        tokens = result.token_count,
        estimate = result.is_estimate,
        "counted tokens"
    );

    let reporter = Reporter::new(config.format);
    println!("{}", reporter.render_count(&result)?);

    Ok(())
}
