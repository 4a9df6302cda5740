//! Option handling shared by all commands.

use super::config::Config;
#[cfg(test)]
use super::config::CONFIG_FILE_NAME;
use crate::Result;
use crate::source::StatsClient;
use crate::traffic::DateBounds;
#[cfg(test)]
use camino::Utf8Path;
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use url::Url;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every command
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `traffic.toml`)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Root URL of the stats API, overriding the configured one
    #[arg(long, value_name = "URL", env = "REPO_TRAFFIC_API", global = true)]
    pub base_url: Option<Url>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Inclusive date window given on the command line
#[derive(Args, Debug, Clone, Copy)]
pub struct WindowArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,
}

impl WindowArgs {
    #[must_use]
    pub const fn bounds(&self) -> DateBounds {
        DateBounds::new(self.start, self.end)
    }
}

#[cfg(test)]
impl CommonArgs {
    /// Options reading the default configuration from a copy under `dir`, so that no
    /// `traffic.toml` in the working or user configuration directory is consulted.
    pub fn isolated(dir: &Utf8Path) -> Self {
        let config = dir.join(CONFIG_FILE_NAME);
        Config::save_default(&config).unwrap();

        Self {
            config: Some(config),
            base_url: None,
            color: ColorMode::Never,
            log_level: LogLevel::None,
        }
    }
}

/// Configuration and output settings resolved from [`CommonArgs`]
#[derive(Debug)]
pub struct Common {
    pub config: Config,
    color: ColorMode,
}

impl Common {
    /// Load the configuration and apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid after overrides
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let mut config = Config::load(args.config.as_deref())?;

        if let Some(base_url) = &args.base_url {
            config.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(Self { config, color: args.color })
    }

    /// Build an API client from the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is unusable
    pub fn client(&self) -> Result<StatsClient> {
        StatsClient::new(self.config.base_url.clone(), self.config.request_timeout)
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
