#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, OnceLock},
};

use anyhow::{Context, Result, bail};
use tracing::Level;

use crate::constants::DEFAULT_REPORT_WRAP;

/// When to emit ANSI colors from the command line driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Let `colored` decide from the terminal and its own environment checks.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl FromStr for ColorChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => bail!("Unknown color choice `{other}`, expected auto, always or never"),
        }
    }
}

/// Parses the optional log level value, defaulting to `INFO` when unset.
fn parse_log_level(val: Option<String>) -> Result<Level> {
    match val.map(|s| s.trim().to_owned()) {
        None => Ok(Level::INFO),
        Some(s) if s.is_empty() => Ok(Level::INFO),
        Some(s) => Level::from_str(&s).with_context(|| format!("Invalid GRADECARD_LOG value `{s}`")),
    }
}

/// Parses the optional color choice. `NO_COLOR` being present wins over
/// anything else.
fn parse_color(val: Option<String>, no_color: bool) -> Result<ColorChoice> {
    if no_color {
        return Ok(ColorChoice::Never);
    }
    val.as_deref()
        .map(ColorChoice::from_str)
        .transpose()
        .context("Invalid GRADECARD_COLOR value")
        .map(Option::unwrap_or_default)
}

/// Parses the report wrap width, falling back to the default when missing,
/// unparsable, or zero.
fn parse_wrap(val: Option<String>) -> usize {
    val.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_REPORT_WRAP)
}

/// Runtime configuration read from the environment.
#[derive(Debug)]
pub struct ConfigState {
    /// Most verbose level the subscriber lets through.
    log_level:   Level,
    /// Color policy for the command line driver.
    color:       ColorChoice,
    /// Wrap width applied to report cells.
    report_wrap: usize,
}

impl ConfigState {
    /// Construct a new configuration instance from environment variables.
    fn new() -> Result<Self> {
        let log_level = parse_log_level(std::env::var("GRADECARD_LOG").ok())?;
        let color = parse_color(
            std::env::var("GRADECARD_COLOR").ok(),
            std::env::var_os("NO_COLOR").is_some(),
        )?;
        let report_wrap = parse_wrap(std::env::var("GRADECARD_WRAP").ok());

        Ok(Self {
            log_level,
            color,
            report_wrap,
        })
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the configured color policy.
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    /// Returns the configured report wrap width.
    pub fn report_wrap(&self) -> usize {
        self.report_wrap
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Configuration built on first successful read of the environment.
static CONFIG: OnceLock<ConfigHandle> = OnceLock::new();

/// Reads the environment once and returns a handle to the shared
/// configuration. A failed read is not cached, so it is retried next call.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    if let Some(cfg) = CONFIG.get() {
        return Ok(cfg.clone());
    }

    let cfg = ConfigHandle(Arc::new(ConfigState::new()?));
    Ok(CONFIG.get_or_init(|| cfg).clone())
}

/// Returns the configured report wrap width.
///
/// Never fails: when the rest of the environment is invalid, only
/// `GRADECARD_WRAP` is consulted.
pub fn report_wrap() -> usize {
    ensure_initialized()
        .map(|cfg| cfg.report_wrap())
        .unwrap_or_else(|_| parse_wrap(std::env::var("GRADECARD_WRAP").ok()))
}
