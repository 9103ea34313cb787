// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Closed-form polynomial and trigonometric fits for the Sun's apparent
//! motion, all taking the time argument `t` in Julian centuries since J2000
//! (see [`Time::<JD>::julian_centuries`](crate::Time::julian_centuries)).
//! Angles are returned in degrees. The fits are accurate to roughly 0.01°
//! for dates within a few centuries of J2000.
//!
//! ## References
//! * Meeus, *Astronomical Algorithms* (2nd ed. 1998), ch. 25 and 28
//! * NOAA Global Monitoring Laboratory solar calculator

use qtty::Centuries;

/// Mean anomaly of the Sun (degrees, not reduced).
#[inline]
pub fn mean_anomaly(t: Centuries) -> f64 {
    let t = t.value();
    357.529_11 + t * 35_999.050_29 - t * t * 0.000_153_7
}

/// Eccentricity of Earth's orbit (unitless).
#[inline]
pub fn orbit_eccentricity(t: Centuries) -> f64 {
    let t = t.value();
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Geometric mean longitude of the Sun, reduced to `[0, 360)`.
#[inline]
pub fn geometric_mean_longitude(t: Centuries) -> f64 {
    let t = t.value();
    (280.466_46 + t * 36_000.769_83 + t * t * 0.000_303_2).rem_euclid(360.0)
}

/// Equation of center: true anomaly minus mean anomaly.
pub fn equation_of_center(t: Centuries) -> f64 {
    let m = mean_anomaly(t).to_radians();
    let t = t.value();

    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

/// True geometric longitude of the Sun (degrees, not reduced).
#[inline]
pub fn true_longitude(t: Centuries) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// Equation of time in **minutes**: apparent solar time minus mean solar time.
///
/// `obliquity_factor` is `y = tan²(ε/2)`; see
/// [`SolarConfig`](crate::SolarConfig::obliquity_factor).
pub fn equation_of_time(t: Centuries, obliquity_factor: f64) -> f64 {
    let y = obliquity_factor;
    let l0 = geometric_mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = orbit_eccentricity(t);

    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    // One degree of hour angle is four minutes of time.
    4.0 * radians.to_degrees()
}

/// Solar declination for an ecliptic of obliquity `axial_tilt` (degrees).
///
/// Bounded by `±axial_tilt` for every `t`.
pub fn declination(t: Centuries, axial_tilt: f64) -> f64 {
    let lambda = true_longitude(t).to_radians();
    (lambda.sin() * axial_tilt.to_radians().sin())
        .asin()
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: Centuries = Centuries::new(0.0);

    #[test]
    fn values_at_j2000() {
        assert!((mean_anomaly(J2000) - 357.52911).abs() < 1e-12);
        assert!((orbit_eccentricity(J2000) - 0.016708634).abs() < 1e-15);
        assert!((geometric_mean_longitude(J2000) - 280.46646).abs() < 1e-12);
    }

    #[test]
    fn mean_longitude_is_reduced() {
        for i in -40..=40 {
            let l0 = geometric_mean_longitude(Centuries::new(i as f64 * 0.0137));
            assert!((0.0..360.0).contains(&l0), "L0 = {l0}");
        }
    }

    #[test]
    fn eccentricity_decreases_slowly() {
        let now = orbit_eccentricity(Centuries::new(0.25));
        assert!(now < orbit_eccentricity(J2000));
        assert!((now - 0.016_698).abs() < 1e-5);
    }

    #[test]
    fn equation_of_center_bounded() {
        // |C| never exceeds ~1.915 + 0.02 + 0.0003 degrees.
        for i in 0..365 {
            let c = equation_of_center(Centuries::new(i as f64 / 36_525.0));
            assert!(c.abs() < 1.94, "C = {c}");
        }
    }

    #[test]
    fn equation_of_time_stays_within_annual_extremes() {
        // EoT ranges from about −14.3 min (Feb) to +16.5 min (Nov).
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for day in 0..366 {
            let t = Centuries::new((day as f64 + 7_671.0) / 36_525.0);
            let eot = equation_of_time(t, 0.043_026_491_654_516_5);
            min = min.min(eot);
            max = max.max(eot);
        }
        assert!(min > -14.8 && min < -13.8, "min = {min}");
        assert!(max > 16.0 && max < 16.9, "max = {max}");
    }

    #[test]
    fn declination_obeys_tilt_bound() {
        for day in 0..730 {
            let t = Centuries::new(day as f64 / 36_525.0);
            assert!(declination(t, 23.43715).abs() <= 23.43715 + 1e-9);
        }
    }
}
