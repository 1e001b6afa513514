//! Alert threshold resolution.

use serde::{Deserialize, Serialize};

/// Effective alert thresholds for one tracked quantity, in whole hours.
///
/// `info_hours <= warn_hours <= urgent_hours` is the expected shape but
/// is not enforced; classification resolves overlaps to the highest
/// matching tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub info_hours: i64,
    pub warn_hours: i64,
    pub urgent_hours: i64,
    pub alerts_enabled: bool,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            info_hours: 22,
            warn_hours: 24,
            urgent_hours: 25,
            alerts_enabled: false,
        }
    }
}

/// Partial threshold overrides, typically deserialized from a config
/// file or environment table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub info: Option<i64>,
    pub warn: Option<i64>,
    pub urgent: Option<i64>,
    pub enable_alerts: Option<bool>,
}

impl Thresholds {
    /// Resolves effective thresholds from a partial override set.
    ///
    /// Absent fields fall back to the defaults; non-positive hour values
    /// are treated as absent. Configuration is trusted input, so there
    /// are no error conditions.
    #[must_use]
    pub fn resolve(overrides: &ThresholdOverrides) -> Self {
        let defaults = Self::default();
        let hours = |value: Option<i64>, default: i64| value.filter(|&h| h > 0).unwrap_or(default);
        Self {
            info_hours: hours(overrides.info, defaults.info_hours),
            warn_hours: hours(overrides.warn, defaults.warn_hours),
            urgent_hours: hours(overrides.urgent, defaults.urgent_hours),
            alerts_enabled: overrides
                .enable_alerts
                .unwrap_or(defaults.alerts_enabled),
        }
    }
}
