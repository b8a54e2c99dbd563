mod run;

use anyhow::{Context, Result};
use clap::Parser;
use reviewer::feedback::gemini::GeminiClient;
use run::{Outcome, execute};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_appender::rolling;
use util::config::AppConfig;

/// Sends every source file in a folder to Gemini for review and writes the
/// feedback to a CSV report.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Folder containing the extracted submission files
    folder: Option<PathBuf>,
    /// Report path. Defaults to FEEDBACK_OUTPUT or "LLM_Feedbacks.csv"
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Filename suffix of the files to review. Defaults to FEEDBACK_FILE_SUFFIX or ".c"
    #[arg(long)]
    suffix: Option<String>,
    /// Gemini model. Defaults to GEMINI_MODEL or "gemini-2.0-flash"
    #[arg(long)]
    model: Option<String>,
}

impl Args {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(output) = &self.output {
            config = config.with_output_file(output);
        }
        if let Some(suffix) = &self.suffix {
            config = config.with_file_suffix(suffix);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // A missing credential stops the run before any file is touched.
    let config = args.apply(AppConfig::from_env().context("loading configuration")?);
    let _log_guard = init_logging(&config);

    let Some(folder) = args.folder.as_deref() else {
        println!("Error: folder containing extracted files not provided");
        return Ok(ExitCode::FAILURE);
    };

    let client = GeminiClient::new(&config);
    let outcome = execute(folder, &config, client).await?;
    if let Outcome::Saved { path, rows } = &outcome {
        tracing::info!(rows, path = %path.display(), "run finished");
    }

    Ok(ExitCode::SUCCESS)
}

/// Console logging filtered by `LOG_LEVEL`, plus a daily rolling file under
/// `logs/` when `LOG_FILE` is set.
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(util::config::DEFAULT_LOG_LEVEL));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    let (file_layer, guard) = match &config.log_file {
        Some(log_file) => {
            let file_appender = rolling::daily("logs", log_file);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
