//! Configuration for the MAU model and its host driver.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Five-tick strobe phases with matching settle and idle gaps.
//! 2. **Structures:** Serial timing for the host driver and trace gating for the model.
//! 3. **Validation:** Rejects timings under which a result could not be ready in time.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_path`)
//! or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::FILL_LATENCY;
use crate::common::{MauError, Result};

/// Default configuration constants.
mod defaults {
    /// Unit clock ticks per strobe phase.
    pub const HALF_PERIOD: u32 = 5;

    /// Idle ticks after a write before a read may start.
    pub const SETTLE_CYCLES: u32 = 5;

    /// Idle ticks after each complete transaction.
    pub const IDLE_GAP: u32 = 5;

    /// Ticks the reset line is held by `SerialHost::reset`.
    pub const RESET_CYCLES: u32 = 2;
}

/// Root configuration.
///
/// Every section and field is optional in JSON; omitted values take their
/// defaults.
///
/// # Examples
///
/// ```
/// use mau_core::config::Config;
///
/// let config = Config::from_json(r#"{ "serial": { "half_period": 2 } }"#).unwrap();
/// assert_eq!(config.serial.half_period, 2);
/// assert_eq!(config.serial.settle_cycles, 5);
/// assert!(!config.trace.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Host serial timing
    #[serde(default)]
    pub serial: SerialConfig,
    /// Model tracing
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::ConfigParse`] if the document is not valid JSON for
    /// this schema, or [`MauError::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::InvalidConfig`] if `half_period` or `reset_cycles`
    /// is zero, or if the settle time plus the first read's lead-in is shorter
    /// than the pipeline's fill latency.
    pub fn validate(&self) -> Result<()> {
        self.serial.validate()
    }
}

/// Host-side serial timing, in unit clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SerialConfig {
    /// Ticks per strobe phase
    #[serde(default = "SerialConfig::default_half_period")]
    pub half_period: u32,

    /// Idle ticks between the end of a write and the start of a read
    #[serde(default = "SerialConfig::default_settle_cycles")]
    pub settle_cycles: u32,

    /// Idle ticks after each transaction
    #[serde(default = "SerialConfig::default_idle_gap")]
    pub idle_gap: u32,

    /// Ticks the reset line is held asserted
    #[serde(default = "SerialConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl SerialConfig {
    const fn default_half_period() -> u32 {
        defaults::HALF_PERIOD
    }

    const fn default_settle_cycles() -> u32 {
        defaults::SETTLE_CYCLES
    }

    const fn default_idle_gap() -> u32 {
        defaults::IDLE_GAP
    }

    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Ticks between the last instruction nibble's capture and the first
    /// result sample: the rest of that strobe period, the settle time, and the
    /// low phase of the first read.
    pub const fn result_lead_time(&self) -> u32 {
        self.settle_cycles
            .saturating_add(self.half_period.saturating_mul(3))
    }

    /// # Errors
    ///
    /// See [`Config::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.half_period == 0 {
            return Err(MauError::InvalidConfig(
                "serial.half_period must be at least 1".to_owned(),
            ));
        }
        if self.reset_cycles == 0 {
            return Err(MauError::InvalidConfig(
                "serial.reset_cycles must be at least 1".to_owned(),
            ));
        }
        if self.result_lead_time() < FILL_LATENCY {
            return Err(MauError::InvalidConfig(format!(
                "serial.settle_cycles + 3 * serial.half_period = {} is below the pipeline fill latency of {FILL_LATENCY}",
                self.result_lead_time()
            )));
        }
        Ok(())
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            half_period: defaults::HALF_PERIOD,
            settle_cycles: defaults::SETTLE_CYCLES,
            idle_gap: defaults::IDLE_GAP,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

/// Tracing switches for the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Emit a `trace` event with the pin state on every tick
    #[serde(default)]
    pub enabled: bool,
}
