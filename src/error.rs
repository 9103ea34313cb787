// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the raw-number entry points.
//!
//! The solar formulas themselves cannot fail. Errors only arise where a caller
//! hands in a bare `f64` (Unix seconds, configuration constants) that may be
//! NaN, infinite, or outside chrono's representable range.

use thiserror::Error;

/// Convenience alias used by every fallible function in the crate.
pub type SolarResult<T> = Result<T, SolarError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarError {
    /// A numeric input was NaN or infinite.
    #[error("non-finite value for {name}: {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    /// A Unix timestamp cannot be represented as a calendar instant.
    #[error("timestamp {seconds} s is outside the representable date range")]
    OutOfRange { seconds: f64 },

    #[error("invalid solar configuration: {message}")]
    InvalidConfig { message: String },
}

impl SolarError {
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteInput { name, value }
    }

    pub fn out_of_range(seconds: f64) -> Self {
        Self::OutOfRange { seconds }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Reject NaN and ±∞, logging the offending input.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> SolarResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::warn!("rejecting non-finite {name}: {value}");
        Err(SolarError::non_finite(name, value))
    }
}
