//! Tracker configuration.

use bgl_core::{CoreError, CoreResult, RegionConfig};

/// Everything a [`BackgroundTracker`][crate::BackgroundTracker] can be tuned
/// with.
///
/// Typically built in code or loaded from JSON by the host (with the `serde`
/// feature); missing fields take their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Ring geometry.
    pub region: RegionConfig,

    /// Prefix for persisted cache keys and ring region identifiers.
    pub namespace: String,

    /// Name passed to the platform when opening a background-execution
    /// token.
    pub background_task_name: String,

    /// Minimum great-circle displacement, metres, for a fix to count as
    /// movement.  `0.0` means exact coordinate equality decides.
    pub min_displacement_m: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            region:               RegionConfig::default(),
            namespace:            "bgloc".to_owned(),
            background_task_name: "fetchLocation".to_owned(),
            min_displacement_m:   0.0,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.region.validate()?;
        if self.namespace.is_empty() || self.namespace.chars().any(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "namespace must be non-empty and contain no whitespace, got {:?}",
                self.namespace
            )));
        }
        if !self.min_displacement_m.is_finite() || self.min_displacement_m < 0.0 {
            return Err(CoreError::Config(format!(
                "min_displacement_m must be a non-negative number, got {}",
                self.min_displacement_m
            )));
        }
        Ok(())
    }
}
