//! Length and weight unit conversion for export measurements
//!
//! Conversions pivot through the capture base units (inches and pounds).
//! Unit tokens are compared after lowercase normalization; any token that is
//! not a recognized metric unit is treated as the base unit. The feed has
//! always been permissive here and downstream systems rely on it.

use crate::config::normalize_unit;
use crate::constants::{CM_PER_INCH, KG_PER_POUND, units};

/// Convert a length measurement between units
///
/// Non-positive input always yields `0.0` so that zero/negative placeholder
/// values never survive conversion. Equal unit tokens are a no-op even when
/// neither token is recognized.
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }

    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);
    if from == to {
        return value;
    }

    // Pivot through inches; any non-cm token is already inches
    let inches = if from == units::CENTIMETERS {
        value / CM_PER_INCH
    } else {
        value
    };

    if to == units::CENTIMETERS {
        inches * CM_PER_INCH
    } else {
        inches
    }
}

/// Convert a weight measurement between units
///
/// Mirrors [`convert_length`]: non-positive input yields `0.0`, equal tokens
/// are a no-op, and any non-kg token is treated as pounds.
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }

    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);
    if from == to {
        return value;
    }

    let pounds = if from == units::KILOGRAMS {
        value / KG_PER_POUND
    } else {
        value
    };

    if to == units::KILOGRAMS {
        pounds * KG_PER_POUND
    } else {
        pounds
    }
}
