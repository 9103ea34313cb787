// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The subsolar point: where on Earth the Sun is at the zenith.
//!
//! [`SubsolarCalculator`] composes the formulas of [`crate::solar`] into the
//! geographic coordinate beneath the Sun for a civil instant:
//!
//! ```text
//! instant → JD → T (centuries) → { L₀, M, e, C, EoT } → (latitude, longitude)
//! ```
//!
//! The latitude is the solar declination. The longitude follows from the
//! apparent solar time at Greenwich: the Sun sits on the Greenwich meridian at
//! apparent noon and moves 15° west per hour.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use subsolar::subsolar_coordinates;
//!
//! let instant = Utc.with_ymd_and_hms(2021, 6, 21, 12, 0, 0).unwrap();
//! let point = subsolar_coordinates(&instant);
//! assert!((point.latitude - 23.44).abs() < 0.2);
//! ```

use chrono::{DateTime, Offset, TimeZone, Timelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SolarConfig;
use crate::error::{SolarError, SolarResult};
use crate::julian_date_ext::{julian_century, julian_date};
use crate::solar;
use crate::JulianDate;

const HOURS_PER_DAY: f64 = 24.0;
const DEGREES_PER_HOUR: f64 = 15.0;

/// Geographic coordinate of the point directly beneath the Sun, in degrees.
///
/// `latitude` lies within the configured axial tilt, `longitude` in
/// `(-180, 180]` (east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubsolarPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl SubsolarPoint {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for SubsolarPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Stateless solar-position pipeline bound to one [`SolarConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubsolarCalculator {
    config: SolarConfig,
}

impl SubsolarCalculator {
    pub const fn new(config: SolarConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SolarConfig {
        &self.config
    }

    /// Equation of time at `instant`, in minutes.
    pub fn equation_of_time<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        let t = julian_century(julian_date(instant));
        solar::equation_of_time(t, self.config.obliquity_factor)
    }

    /// Subsolar latitude (the solar declination) in degrees.
    pub fn subsolar_latitude<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        let t = julian_century(julian_date(instant));
        solar::declination(t, self.config.axial_tilt)
    }

    /// Subsolar longitude in degrees, east positive, within `(-180, 180]`.
    ///
    /// The instant's local wall clock and GMT offset are both honoured; any
    /// time zone gives the same answer for the same absolute instant.
    pub fn subsolar_longitude<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        let local = instant.naive_local();
        let local_hour = local.hour() as f64
            + local.minute() as f64 / 60.0
            + (local.second() as f64 + local.nanosecond() as f64 / 1e9) / 3600.0;
        let gmt_offset = instant.offset().fix().local_minus_utc() as f64 / 3600.0;

        longitude_from_clock(local_hour, gmt_offset, self.equation_of_time(instant))
    }

    /// Subsolar point at `instant`.
    pub fn coordinates<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> SubsolarPoint {
        let point = SubsolarPoint::new(
            self.subsolar_latitude(instant),
            self.subsolar_longitude(instant),
        );
        log::debug!(
            "subsolar point at {}: {}",
            instant.with_timezone(&Utc).to_rfc3339(),
            point
        );
        point
    }

    /// Subsolar point right now.
    pub fn coordinates_now(&self) -> SubsolarPoint {
        self.coordinates(&Utc::now())
    }

    /// Subsolar point for a raw Unix timestamp in seconds.
    ///
    /// Fails on NaN/∞ input or on timestamps chrono cannot represent.
    pub fn coordinates_at_unix(&self, seconds: f64) -> SolarResult<SubsolarPoint> {
        let instant = JulianDate::from_unix_seconds(seconds)?
            .to_utc()
            .ok_or_else(|| {
                log::warn!("timestamp {seconds} s is outside chrono's range");
                SolarError::out_of_range(seconds)
            })?;
        Ok(self.coordinates(&instant))
    }
}

/// Empirical subsolar longitude from a local clock reading.
///
/// * `local_hour` — decimal hour of the local wall clock;
/// * `gmt_offset` — local offset from GMT in hours (east positive);
/// * `equation_of_time` — minutes, apparent minus mean solar time.
pub(crate) fn longitude_from_clock(local_hour: f64, gmt_offset: f64, equation_of_time: f64) -> f64 {
    let gmt = wrap_hours(local_hour - gmt_offset);
    // Apparent solar hour at Greenwich.
    let apparent = wrap_hours(gmt + equation_of_time / 60.0);

    let noon_hour_delta = (12.0 - apparent).abs().min(12.0);
    let longitude = if apparent < 12.0 {
        noon_hour_delta * DEGREES_PER_HOUR
    } else {
        -noon_hour_delta * DEGREES_PER_HOUR
    };

    normalize_longitude(longitude)
}

/// Wrap an hour count into `[0, 24)`.
fn wrap_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(HOURS_PER_DAY);
    // rem_euclid rounds tiny negative inputs up to exactly 24.0.
    if wrapped >= HOURS_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

/// Fold a longitude into `(-180, 180]`, mapping −0 to +0.
pub(crate) fn normalize_longitude(longitude: f64) -> f64 {
    let mut lon = longitude.rem_euclid(360.0);
    if lon >= 360.0 {
        lon = 0.0;
    }
    if lon > 180.0 {
        lon -= 360.0;
    }
    lon + 0.0
}

// ── Crate-level conveniences bound to SolarConfig::DEFAULT ────────────────

const DEFAULT_CALCULATOR: SubsolarCalculator = SubsolarCalculator::new(SolarConfig::DEFAULT);

/// Equation of time in minutes with the default configuration.
pub fn equation_of_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    DEFAULT_CALCULATOR.equation_of_time(instant)
}

/// Subsolar latitude in degrees with the default configuration.
pub fn subsolar_latitude<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    DEFAULT_CALCULATOR.subsolar_latitude(instant)
}

/// Subsolar longitude in degrees with the default configuration.
pub fn subsolar_longitude<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    DEFAULT_CALCULATOR.subsolar_longitude(instant)
}

/// Subsolar point with the default configuration.
pub fn subsolar_coordinates<Tz: TimeZone>(instant: &DateTime<Tz>) -> SubsolarPoint {
    DEFAULT_CALCULATOR.coordinates(instant)
}

/// Subsolar point for the current instant.
pub fn subsolar_coordinates_now() -> SubsolarPoint {
    DEFAULT_CALCULATOR.coordinates_now()
}
