// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Subsolar point astronomy.
//!
//! This crate computes where on Earth the Sun stands at the zenith for a given
//! instant, together with the time arguments and low-precision solar
//! quantities that lead to it.
//!
//! # Core types
//!
//! - [`Time<S>`] — epoch-counter instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`SubsolarPoint`] — latitude/longitude of the point beneath the Sun.
//! - [`SubsolarCalculator`] — the solar-position pipeline, bound to a
//!   [`SolarConfig`].
//! - [`SolarError`] — failures of the raw-number entry points.
//!
//! # Pipeline
//!
//! | Step | Function |
//! |------|----------|
//! | instant → JD | [`julian_date`] |
//! | JD → centuries since J2000 | [`julian_century`] |
//! | mean anomaly, eccentricity, mean longitude | [`solar::mean_anomaly`], [`solar::orbit_eccentricity`], [`solar::geometric_mean_longitude`] |
//! | equation of center / of time | [`solar::equation_of_center`], [`solar::equation_of_time`] |
//! | subsolar latitude / longitude | [`subsolar_latitude`], [`subsolar_longitude`] |
//! | both | [`subsolar_coordinates`] |
//!
//! Every step is a pure function; calls may run concurrently from any thread.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use subsolar::{julian_century, julian_date, SubsolarCalculator};
//!
//! let instant = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! let jd = julian_date(&instant);
//! assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
//! assert!(julian_century(jd).value().abs() < 1e-12);
//!
//! let point = SubsolarCalculator::default().coordinates(&instant);
//! assert!(point.longitude > -180.0 && point.longitude <= 180.0);
//! ```

mod config;
mod error;
mod geometry;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;
pub mod solar;
mod subsolar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::SolarConfig;
pub use error::{SolarError, SolarResult};
pub use geometry::globe_position;
pub use instant::{Time, TimeScale};
pub use julian_date_ext::{julian_century, julian_date};
pub use scales::{UnixTime, JD, MJD};
pub use subsolar::{
    equation_of_time, subsolar_coordinates, subsolar_coordinates_now, subsolar_latitude,
    subsolar_longitude, SubsolarCalculator, SubsolarPoint,
};

/// Julian Date — continuous count of days since the Julian Period.
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
pub type ModifiedJulianDate = Time<MJD>;
