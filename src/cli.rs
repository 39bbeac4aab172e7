//! CLI command implementations for Tilegrid.

pub(crate) mod inspect;
pub(crate) mod walk;

mod output;

use clap::ValueEnum;
use log::info;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::rc::Rc;
use tilegrid::{ConfigError, ConstructionError, Engine, ResourceLibrary, SceneConfig};

/// Output format for `inspect` and `walk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConstructionError> for CliError {
    fn from(e: ConstructionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Start `env_logger` at `warn`, raised by each `-v`.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load a scene file into an engine.
///
/// Every action key the scene declares is bound to a handler that logs it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or built.
pub(crate) fn load_engine(path: &Path) -> Result<Engine, CliError> {
    let config = SceneConfig::load(path)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;

    let mut library = ResourceLibrary::new();
    for key in &config.resources.actions {
        let name = key.clone();
        library.insert_action(key, move || info!("[Action] {name}"));
    }
    let scene = config.build(&mut library)?;

    Ok(Engine::new(scene)
        .with_library(Rc::new(library))
        .with_config(config.engine))
}
