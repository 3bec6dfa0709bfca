//! Engine tunables, with defaults and optional environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Every threshold the placement engine consults.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Snapshots kept on each of the past/future stacks.
    pub history_limit: usize,
    pub snap_threshold: f64,
    pub snap_gap: f64,
    /// Shaved off each footprint half-extent before SAT.
    pub footprint_tolerance: f64,
    pub min_half_extent: f64,
    pub broad_phase_radius: f64,
    pub rotate_proximity: f64,
    pub rotate_snap_tolerance_deg: f64,
    pub default_color: String,
    pub default_finish: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: consts::HISTORY_LIMIT,
            snap_threshold: consts::SNAP_THRESHOLD,
            snap_gap: consts::SNAP_GAP,
            footprint_tolerance: consts::FOOTPRINT_TOLERANCE,
            min_half_extent: consts::MIN_HALF_EXTENT,
            broad_phase_radius: consts::BROAD_PHASE_RADIUS,
            rotate_proximity: consts::ROTATE_PROXIMITY,
            rotate_snap_tolerance_deg: consts::ROTATE_SNAP_TOLERANCE_DEG,
            default_color: consts::DEFAULT_COLOR.to_owned(),
            default_finish: consts::DEFAULT_FINISH.to_owned(),
        }
    }
}

impl EngineConfig {
    /// Build config from defaults overridden by environment variables.
    ///
    /// Optional:
    /// - `PLACEMENT_HISTORY_LIMIT`: default 30
    /// - `PLACEMENT_SNAP_THRESHOLD`: default 0.5
    /// - `PLACEMENT_SNAP_GAP`: default 0.01
    /// - `PLACEMENT_FOOTPRINT_TOLERANCE`: default 0.02
    /// - `PLACEMENT_BROAD_PHASE_RADIUS`: default 2.5
    /// - `PLACEMENT_ROTATE_PROXIMITY`: default 1.6
    /// - `PLACEMENT_ROTATE_SNAP_TOLERANCE_DEG`: default 5
    /// - `PLACEMENT_DEFAULT_COLOR`: default `Grijs`
    /// - `PLACEMENT_DEFAULT_FINISH`: default `glad`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for values that don't parse and the
    /// [`EngineConfig::validate`] errors for values that parse but make no sense.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let cfg = Self {
            history_limit: env_parse("PLACEMENT_HISTORY_LIMIT", defaults.history_limit)?,
            snap_threshold: env_parse("PLACEMENT_SNAP_THRESHOLD", defaults.snap_threshold)?,
            snap_gap: env_parse("PLACEMENT_SNAP_GAP", defaults.snap_gap)?,
            footprint_tolerance: env_parse("PLACEMENT_FOOTPRINT_TOLERANCE", defaults.footprint_tolerance)?,
            min_half_extent: defaults.min_half_extent,
            broad_phase_radius: env_parse("PLACEMENT_BROAD_PHASE_RADIUS", defaults.broad_phase_radius)?,
            rotate_proximity: env_parse("PLACEMENT_ROTATE_PROXIMITY", defaults.rotate_proximity)?,
            rotate_snap_tolerance_deg: env_parse(
                "PLACEMENT_ROTATE_SNAP_TOLERANCE_DEG",
                defaults.rotate_snap_tolerance_deg,
            )?,
            default_color: std::env::var("PLACEMENT_DEFAULT_COLOR").unwrap_or(defaults.default_color),
            default_finish: std::env::var("PLACEMENT_DEFAULT_FINISH").unwrap_or(defaults.default_finish),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the engine can't run with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroHistoryLimit`] when `history_limit` is 0 and
    /// [`ConfigError::OutOfRange`] for any negative or non-finite distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        let fields = [
            ("snap_threshold", self.snap_threshold),
            ("snap_gap", self.snap_gap),
            ("footprint_tolerance", self.footprint_tolerance),
            ("min_half_extent", self.min_half_extent),
            ("broad_phase_radius", self.broad_phase_radius),
            ("rotate_proximity", self.rotate_proximity),
            ("rotate_snap_tolerance_deg", self.rotate_snap_tolerance_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Rotation snap window in radians.
    #[must_use]
    pub fn rotate_snap_tolerance(&self) -> f64 {
        self.rotate_snap_tolerance_deg.to_radians()
    }
}

fn env_parse<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Parse { var, value: raw }),
        Err(_) => Ok(default),
    }
}
