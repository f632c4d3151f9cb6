//! Diagnostics for `rewire-sim`.
//!
//! Run summaries go to stdout as JSON, so every tracing event is written to
//! stderr. `RUST_LOG` picks the level (default `info`) and
//! `REWIRE_LOG_FORMAT` picks between `human` and `json` lines.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const FORMAT_VAR: &str = "REWIRE_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Line format of stderr diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// One JSON object per event, including the current span.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnknownFormat {
                value: other.to_owned(),
            }),
        }
    }

    fn from_env() -> Result<Self, LoggingError> {
        match env::var(FORMAT_VAR) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::NonUnicodeFormat { source })
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("REWIRE_LOG_FORMAT is not valid UTF-8: {source}")]
    NonUnicodeFormat {
        #[source]
        source: env::VarError,
    },
    #[error("REWIRE_LOG_FORMAT=`{value}` is not a log format (use `human` or `json`)")]
    UnknownFormat { value: String },
    #[error("could not install the tracing subscriber: {source}")]
    Install {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Sets up stderr diagnostics once per process.
///
/// A subscriber installed by someone else (a test harness, say) is left in
/// place with a note on stderr.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;
    match install(format) {
        Ok(()) => {}
        Err(LoggingError::Install { source }) => {
            eprintln!("rewire-sim: keeping the existing tracing subscriber ({source})");
        }
        Err(err) => return Err(err),
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::Install { source })
}
