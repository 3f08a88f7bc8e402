//! Round configuration. Every field defaults to the standard round.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::types::ViewBounds;

/// Tunable round parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub round_secs: u32,
    pub ammo_capacity: u32,
    pub spawn_period_secs: f64,
    pub spawn_tolerance_secs: f64,
    pub countdown_period_secs: f64,
    pub countdown_tolerance_secs: f64,
    /// Friendly with probability `.0 / .1`.
    pub friendly_odds: (u32, u32),
    pub traversal_min_secs: f64,
    pub traversal_max_secs: f64,
    pub friendly_penalty: i32,
    pub view_bounds: ViewBounds,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_secs: ROUND_SECS,
            ammo_capacity: AMMO_CAPACITY,
            spawn_period_secs: SPAWN_PERIOD_SECS,
            spawn_tolerance_secs: SPAWN_TOLERANCE_SECS,
            countdown_period_secs: COUNTDOWN_PERIOD_SECS,
            countdown_tolerance_secs: COUNTDOWN_TOLERANCE_SECS,
            friendly_odds: (FRIENDLY_ODDS_NUMERATOR, FRIENDLY_ODDS_DENOMINATOR),
            traversal_min_secs: TRAVERSAL_MIN_SECS,
            traversal_max_secs: TRAVERSAL_MAX_SECS,
            friendly_penalty: FRIENDLY_PENALTY,
            view_bounds: ViewBounds::default(),
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: RoundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the round logic cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.round_secs == 0 {
            return Err(invalid("round_secs must be at least 1"));
        }
        if self.ammo_capacity == 0 {
            return Err(invalid("ammo_capacity must be at least 1"));
        }
        // Timers run on whole ticks, so a period must span at least one.
        let min_period = DT / 2.0;
        if !(self.spawn_period_secs >= min_period) {
            return Err(invalid("spawn_period_secs must be positive"));
        }
        if !(self.countdown_period_secs >= min_period) {
            return Err(invalid("countdown_period_secs must be positive"));
        }
        if !(self.spawn_tolerance_secs >= 0.0) || !(self.countdown_tolerance_secs >= 0.0) {
            return Err(invalid("timer tolerances must not be negative"));
        }
        let (numerator, denominator) = self.friendly_odds;
        if denominator == 0 || numerator > denominator {
            return Err(invalid(&format!(
                "friendly_odds {numerator}/{denominator} is not a probability"
            )));
        }
        if !(self.traversal_min_secs > 0.0) || !(self.traversal_max_secs > self.traversal_min_secs)
        {
            return Err(invalid(&format!(
                "traversal range [{}, {}) is empty",
                self.traversal_min_secs, self.traversal_max_secs
            )));
        }
        let bounds = &self.view_bounds;
        if !(bounds.width() > 0.0) || !(bounds.height() > 0.0) {
            return Err(invalid("view_bounds must have positive width and height"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Invalid(msg.to_string())
}
