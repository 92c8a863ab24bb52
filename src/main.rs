//! movmp4 - QuickTime to MP4 converter
//!
//! With a positional argument the file is converted in the terminal;
//! without one the converter window opens.

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movmp4::cli::Args;
use movmp4::config::{Config, LoggingConfig};
use movmp4::report::{self, ConversionResult};
use movmp4::request::ConversionRequest;
use movmp4::workflow::Workflow;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = setup_logging(args.verbose, &config.logging)?;

    info!("Starting movmp4 v{}", env!("CARGO_PKG_VERSION"));

    // Built by hand rather than #[tokio::main]: the window needs the main
    // thread outside of any async context
    let runtime = tokio::runtime::Runtime::new()?;
    let workflow = Workflow::new(&config);

    match args.input {
        Some(input) => Ok(runtime.block_on(run_cli(&workflow, &input, args.json))?),
        None => run_gui(workflow, &runtime),
    }
}

async fn run_cli(workflow: &Workflow, input: &Path, json: bool) -> Result<ExitCode> {
    let request = match ConversionRequest::resolve(input) {
        Ok(request) => request,
        Err(reason) => {
            let result = ConversionResult::Failed(reason.into());
            emit(input, &result, json)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    spinner.set_message(format!("Converting {}", request.input_path.display()));

    let result = ConversionResult::from(workflow.run_request(&request).await);
    spinner.finish_and_clear();

    emit(input, &result, json)?;

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn emit(input: &Path, result: &ConversionResult, json: bool) -> Result<()> {
    if json {
        report::print_json(input, result)?;
    } else {
        report::print_console(input, result);
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(workflow: Workflow, runtime: &tokio::runtime::Runtime) -> Result<ExitCode> {
    info!("No input given, opening converter window");
    movmp4::gui::run(workflow, runtime.handle().clone())?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_workflow: Workflow, _runtime: &tokio::runtime::Runtime) -> Result<ExitCode> {
    eprintln!("Error: no input file given and this build has no window support");
    eprintln!("Usage: movmp4 <file.mov>");
    Ok(ExitCode::FAILURE)
}

fn setup_logging(verbose: bool, logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console layer on stderr so stdout carries only the report
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .with_file(verbose)
        .with_line_number(verbose);

    // Optional file layer with daily rotation
    let (file_layer, guard) = match &logging.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = rolling::daily(log_dir, "movmp4.log");
            let (non_blocking_file, guard) = non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking_file)
                .with_target(false)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
