//! SelectionProofread - proofread the selected text in place
//!
//! Bind this binary to a desktop shortcut: it copies the selection, asks a
//! chat-completion model to rewrite it, and pastes the answer back.

use clap::Parser;
use selectionproofread::clipboard::SystemClipboard;
use selectionproofread::config::{self, Config};
use selectionproofread::core::completion::ChatCompletionClient;
use selectionproofread::error::{ProofreadError, ProofreadResult};
use selectionproofread::input::{self, Backend};
use selectionproofread::logging;
use selectionproofread::processor::{Outcome, Proofreader};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (default: ~/.config/selectionproofread/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append log lines to this file
    #[arg(long, default_value = logging::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// How to send the copy/paste keystrokes
    #[arg(short, long, value_enum, default_value_t = Backend::Command)]
    backend: Backend,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (dispatch, log_error) = match logging::build(Some(&args.log_file), args.verbose) {
        Ok(dispatch) => (dispatch, None),
        Err(e) => match logging::build(None, args.verbose) {
            Ok(dispatch) => (dispatch, Some(e)),
            Err(e) => {
                eprintln!("Failed to set up logging: {e:#}");
                return ExitCode::FAILURE;
            }
        },
    };

    tracing::dispatcher::with_default(&dispatch, || {
        if let Some(e) = log_error {
            warn!("Logging to stdout only: {e:#}");
        }

        match panic::catch_unwind(AssertUnwindSafe(|| execute(&args))) {
            Ok(code) => code,
            Err(payload) => {
                error!("Uncaught panic: {}", panic_message(payload.as_ref()));
                ExitCode::FAILURE
            }
        }
    })
}

/// The only place a run result becomes an exit code
fn execute(args: &Args) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(Outcome::Replaced) | Ok(Outcome::NoSelection) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> ProofreadResult<Outcome> {
    info!("=== SelectionProofread started ===");

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    info!("Loading config from {}", config_path.display());
    let config = Config::load_from(&config_path)?;

    let keys = input::create_sender(args.backend)?;
    let clipboard = SystemClipboard::new()?;
    let completion = ChatCompletionClient::new(&config);

    let mut proofreader =
        Proofreader::new(config, keys, Box::new(clipboard), Box::new(completion));
    proofreader.run().await
}

fn report(err: &ProofreadError) {
    if err.is_warning() {
        warn!("{}", err);
    } else {
        error!("{}", err);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
