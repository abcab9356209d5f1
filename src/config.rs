//! Export settings for a single feed run.
//!
//! The capture application historically exposed a mutable shared settings
//! singleton; the export engine instead takes an immutable
//! [`ExportSettings`] value per invocation so runs are deterministic and
//! testable.

use crate::constants::{
    self, DEFAULT_DIM_FACTOR, DEFAULT_OPT_INFO, DEFAULT_SITE_ID, FACTOR_TOLERANCE, units,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings consumed by one export invocation
///
/// Unit strings are free text on purpose: the conversion functions treat any
/// unrecognized dimension token as inches and any unrecognized weight token
/// as pounds, matching the feed's historical behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Unit for NET_LENGTH / NET_WIDTH / NET_HEIGHT (`in` or `cm`)
    pub dim_unit: String,

    /// Unit for NET_WEIGHT (`lb` or `kg`)
    pub wgt_unit: String,

    /// Unit reported in the VOL_UNIT column
    pub vol_unit: String,

    /// Dimensional-weight divisor; must be positive to produce a non-zero
    /// NET_DIM_WGT
    pub factor: f64,

    /// Pass-through SITE_ID column value
    pub site_id: String,

    /// Pass-through OPT_INFO_2 column value
    pub opt_info2: String,

    /// Pass-through OPT_INFO_3 column value
    pub opt_info3: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dim_unit: units::INCHES.to_string(),
            wgt_unit: units::POUNDS.to_string(),
            vol_unit: units::INCHES.to_string(),
            factor: DEFAULT_DIM_FACTOR,
            site_id: DEFAULT_SITE_ID.to_string(),
            opt_info2: DEFAULT_OPT_INFO.to_string(),
            opt_info3: DEFAULT_OPT_INFO.to_string(),
        }
    }
}

impl ExportSettings {
    /// Create settings with custom unit tokens
    pub fn with_units(
        mut self,
        dim_unit: impl Into<String>,
        wgt_unit: impl Into<String>,
        vol_unit: impl Into<String>,
    ) -> Self {
        self.dim_unit = dim_unit.into();
        self.wgt_unit = wgt_unit.into();
        self.vol_unit = vol_unit.into();
        self
    }

    /// Create settings with a custom dimensional-weight factor
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Create settings with a custom site identifier
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self
    }

    /// Create settings with custom OPT_INFO_2 / OPT_INFO_3 values
    pub fn with_opt_info(
        mut self,
        opt_info2: impl Into<String>,
        opt_info3: impl Into<String>,
    ) -> Self {
        self.opt_info2 = opt_info2.into();
        self.opt_info3 = opt_info3.into();
        self
    }

    /// Validate settings for values the engine cannot recover from
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(Error::configuration(format!(
                "dimensional-weight factor must be finite, got {}",
                self.factor
            )));
        }
        Ok(())
    }

    /// Check whether either measurement unit is metric
    pub fn uses_metric_units(&self) -> bool {
        normalize_unit(&self.dim_unit) == units::CENTIMETERS
            || normalize_unit(&self.wgt_unit) == units::KILOGRAMS
    }

    /// Check whether the factor still equals the inch/pound default
    pub fn has_default_factor(&self) -> bool {
        (self.factor - constants::DEFAULT_DIM_FACTOR).abs() < FACTOR_TOLERANCE
    }
}

/// Normalize a unit token for comparison
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}
