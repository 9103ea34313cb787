// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch-counter instants.
//!
//! [`Time<S>`] stores a single [`Days`] quantity whose epoch is fixed by the
//! compile-time marker `S: TimeScale`. Every supported scale is a pure day
//! count offset from the Julian Date, so conversions between them are a
//! single addition.
//!
//! Civil time enters through [`Time::from_utc`] / [`Time::from_datetime`]
//! and is placed on the Julian axis directly (`JD = 2440587.5 + s / 86400`),
//! without any ΔT correction: the low-precision solar formulas in this crate
//! are fitted against civil time.

use chrono::{DateTime, TimeZone, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ensure_finite, SolarResult};

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for epoch counters.
///
/// A scale supplies a display label and the two conversions between its own
/// day count and an absolute Julian Date.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Day count on this scale → absolute Julian Date.
    fn to_jd(value: Days) -> Days;

    /// Absolute Julian Date → day count on this scale.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`, layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Date of this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Re-express this instant on another scale.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(self.julian_day())
    }

    // ── civil time ────────────────────────────────────────────────────

    /// Place a UTC timestamp on this scale.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_julian_day(UNIX_EPOCH_JD + (seconds + nanos).to::<Day>())
    }

    /// Place a zoned timestamp on this scale. Only the absolute instant
    /// matters; the offset is discarded.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_utc(datetime.with_timezone(&Utc))
    }

    /// Build an instant from fractional seconds since the Unix epoch.
    ///
    /// NaN and infinite inputs are rejected; every finite value has a Julian
    /// Date even if chrono cannot represent it.
    pub fn from_unix_seconds(seconds: f64) -> SolarResult<Self> {
        let seconds = ensure_finite("unix seconds", seconds)?;
        Ok(Self::from_julian_day(
            UNIX_EPOCH_JD + Seconds::new(seconds).to::<Day>(),
        ))
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(&self) -> f64 {
        (self.julian_day() - UNIX_EPOCH_JD).to::<Second>().value()
    }

    /// Convert back to `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = self.unix_seconds();
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor();
        if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
            return None;
        }
        let nanos = (((seconds - secs) * 1e9).round() as u32).min(999_999_999);
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}
