// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Globe and map helpers built on a [`SubsolarPoint`].
//!
//! A renderer needs three things from the Sun: a light direction for the
//! globe, a way to tell whether a ground location is lit, and the day/night
//! boundary to shade a flat map. All of it follows from the subsolar point on
//! a spherical Earth.

use crate::subsolar::{normalize_longitude, SubsolarPoint};

/// Earth-fixed Cartesian position of a geographic coordinate on a sphere.
///
/// Axes: `x` toward (0°, 0°), `y` toward (0°, 90°E), `z` toward the north
/// pole.
pub fn globe_position(latitude: f64, longitude: f64, radius: f64) -> [f64; 3] {
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
    [
        radius * cos_lat * cos_lon,
        radius * cos_lat * sin_lon,
        radius * sin_lat,
    ]
}

impl SubsolarPoint {
    /// Unit vector from Earth's centre toward the Sun, in the frame of
    /// [`globe_position`].
    pub fn to_unit_vector(&self) -> [f64; 3] {
        globe_position(self.latitude, self.longitude, 1.0)
    }

    /// Great-circle angle between the subsolar point and a location, in
    /// degrees within `[0, 180]`.
    pub fn angular_distance(&self, latitude: f64, longitude: f64) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = latitude.to_radians();
        let d_phi = phi2 - phi1;
        let d_lambda = (longitude - self.longitude).to_radians();

        // Haversine keeps precision for nearby points.
        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        (2.0 * a.sqrt().min(1.0).asin()).to_degrees()
    }

    /// Geometric elevation of the Sun seen from a location, in degrees.
    /// No refraction or solar radius correction.
    pub fn solar_elevation(&self, latitude: f64, longitude: f64) -> f64 {
        90.0 - self.angular_distance(latitude, longitude)
    }

    pub fn is_daylight(&self, latitude: f64, longitude: f64) -> bool {
        self.solar_elevation(latitude, longitude) > 0.0
    }

    /// Day/night boundary as `(latitude, longitude)` pairs sampled evenly from
    /// −180° to +180° longitude.
    ///
    /// `samples` is clamped to at least 2. At an equinox the boundary is a
    /// meridian pair and the returned latitudes saturate at ±90°.
    pub fn terminator(&self, samples: usize) -> Vec<(f64, f64)> {
        let samples = samples.max(2);
        let (sin_s, cos_s) = self.latitude.to_radians().sin_cos();
        // Keeps the ratio's sign while pinning atan2 to (-90°, 90°).
        let sign = sin_s.signum();

        (0..samples)
            .map(|i| {
                let longitude = -180.0 + 360.0 * i as f64 / (samples - 1) as f64;
                let d_lambda = (longitude - self.longitude).to_radians();
                let latitude = (-cos_s * d_lambda.cos() * sign)
                    .atan2(sin_s.abs())
                    .to_degrees();
                (latitude, longitude)
            })
            .collect()
    }

    /// Antipode of the subsolar point: where the Sun is at the nadir.
    pub fn antisolar(&self) -> SubsolarPoint {
        SubsolarPoint::new(-self.latitude, normalize_longitude(self.longitude + 180.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn globe_axes() {
        let p = globe_position(0.0, 0.0, 2.0);
        assert!((p[0] - 2.0).abs() < 1e-12 && p[1].abs() < 1e-12 && p[2].abs() < 1e-12);
        let p = globe_position(0.0, 90.0, 1.0);
        assert!((p[1] - 1.0).abs() < 1e-12);
        let p = globe_position(90.0, 45.0, 1.0);
        assert!((p[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let v = SubsolarPoint::new(-17.3, 123.4).to_unit_vector();
        assert!((norm(v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn angular_distance_basics() {
        let sun = SubsolarPoint::new(0.0, 0.0);
        assert!(sun.angular_distance(0.0, 0.0).abs() < 1e-12);
        assert!((sun.angular_distance(0.0, 90.0) - 90.0).abs() < 1e-9);
        assert!((sun.angular_distance(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((sun.angular_distance(90.0, 0.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn daylight_follows_hemisphere() {
        let sun = SubsolarPoint::new(23.4, -30.0);
        assert!(sun.is_daylight(23.4, -30.0));
        assert!((sun.solar_elevation(23.4, -30.0) - 90.0).abs() < 1e-9);
        assert!(!sun.is_daylight(-23.4, 150.0));
        // Midnight sun in the Arctic summer.
        assert!(sun.is_daylight(89.0, 150.0));
    }

    #[test]
    fn terminator_points_are_on_the_horizon() {
        let sun = SubsolarPoint::new(18.2, 42.0);
        let line = sun.terminator(73);
        assert_eq!(line.len(), 73);
        assert_eq!(line[0].1, -180.0);
        assert_eq!(line[72].1, 180.0);
        for &(lat, lon) in &line {
            assert!(lat.abs() <= 90.0);
            assert!(sun.solar_elevation(lat, lon).abs() < 1e-9, "({lat}, {lon})");
        }
    }

    #[test]
    fn terminator_southern_summer() {
        let sun = SubsolarPoint::new(-23.0, 0.0);
        for &(lat, lon) in &sun.terminator(37) {
            assert!(sun.solar_elevation(lat, lon).abs() < 1e-9, "({lat}, {lon})");
        }
    }

    #[test]
    fn terminator_at_equinox_saturates() {
        let sun = SubsolarPoint::new(0.0, 0.0);
        let line = sun.terminator(5);
        // Longitudes −180, −90, 0, 90, 180.
        assert!((line[0].0 - 90.0).abs() < 1e-9);
        assert!((line[2].0 + 90.0).abs() < 1e-9);
        assert!(line.iter().all(|(lat, _)| lat.is_finite()));
    }

    #[test]
    fn terminator_clamps_sample_count() {
        assert_eq!(SubsolarPoint::new(10.0, 10.0).terminator(0).len(), 2);
    }

    #[test]
    fn antisolar_point() {
        let anti = SubsolarPoint::new(20.0, 10.0).antisolar();
        assert_eq!(anti, SubsolarPoint::new(-20.0, -170.0));
        let anti = SubsolarPoint::new(-5.0, 0.0).antisolar();
        assert_eq!(anti.longitude, 180.0);
    }
}
