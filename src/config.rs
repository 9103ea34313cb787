// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Constants that tune the low-precision solar model.
//!
//! A [`SolarConfig`] is built once by the host (usually [`SolarConfig::DEFAULT`])
//! and handed to [`SubsolarCalculator::new`](crate::SubsolarCalculator::new).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, SolarError, SolarResult};

/// Immutable configuration for [`SubsolarCalculator`](crate::SubsolarCalculator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarConfig {
    /// Obliquity of the ecliptic used for the subsolar latitude, in degrees.
    pub axial_tilt: f64,
    /// `tan²(ε/2)`, the obliquity term of the equation of time.
    pub obliquity_factor: f64,
}

impl SolarConfig {
    pub const DEFAULT: Self = Self {
        axial_tilt: 23.437_15,
        obliquity_factor: 0.043_026_491_654_516_5,
    };

    /// Build a validated configuration.
    pub fn new(axial_tilt: f64, obliquity_factor: f64) -> SolarResult<Self> {
        let axial_tilt = ensure_finite("axial tilt", axial_tilt)?;
        let obliquity_factor = ensure_finite("obliquity factor", obliquity_factor)?;

        if !(axial_tilt > 0.0 && axial_tilt < 90.0) {
            log::warn!("rejecting axial tilt {axial_tilt}°");
            return Err(SolarError::invalid_config(format!(
                "axial tilt must lie in (0°, 90°), got {axial_tilt}°"
            )));
        }
        if !(0.0..1.0).contains(&obliquity_factor) {
            log::warn!("rejecting obliquity factor {obliquity_factor}");
            return Err(SolarError::invalid_config(format!(
                "obliquity factor must lie in [0, 1), got {obliquity_factor}"
            )));
        }

        Ok(Self {
            axial_tilt,
            obliquity_factor,
        })
    }
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let config = SolarConfig::default();
        assert_eq!(config.axial_tilt, 23.43715);
        assert_eq!(config.obliquity_factor, 0.0430264916545165);
    }

    #[test]
    fn obliquity_factor_is_consistent_with_tilt() {
        // y = tan²(ε/2) with ε the default axial tilt.
        let half = (SolarConfig::DEFAULT.axial_tilt / 2.0).to_radians();
        let y = half.tan().powi(2);
        assert!((y - SolarConfig::DEFAULT.obliquity_factor).abs() < 1e-6);
    }

    #[test]
    fn new_accepts_sane_values() {
        let config = SolarConfig::new(23.44, 0.043).unwrap();
        assert_eq!(config.axial_tilt, 23.44);
    }

    #[test]
    fn new_rejects_bad_values() {
        assert!(matches!(
            SolarConfig::new(0.0, 0.043),
            Err(SolarError::InvalidConfig { .. })
        ));
        assert!(SolarConfig::new(95.0, 0.043).is_err());
        assert!(SolarConfig::new(23.44, -0.1).is_err());
        assert!(SolarConfig::new(23.44, 1.0).is_err());
        assert!(matches!(
            SolarConfig::new(f64::NAN, 0.043),
            Err(SolarError::NonFiniteInput { .. })
        ));
    }
}
