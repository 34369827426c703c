//! WGS-84 geodesy for the space track.
//!
//! Space tracks report an Earth-centred, Earth-fixed state vector; the track
//! facade presents it as geodetic latitude, longitude and height like every
//! other track.

use serde::Serialize;

/// WGS-84 semi-major axis in metres.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS-84 first eccentricity squared.
pub const WGS84_E2: f64 = 2.0 * WGS84_F - WGS84_F * WGS84_F;

/// Earth-centred, Earth-fixed vector in metres (or metres per second).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Ecef {
    /// Towards latitude 0, longitude 0.
    pub x: f64,
    /// Towards latitude 0, longitude 90 E.
    pub y: f64,
    /// Towards the north pole.
    pub z: f64,
}

impl Ecef {
    /// Build from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Geodetic position on the WGS-84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Geodetic {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above the ellipsoid in metres.
    pub altitude_m: f64,
}

impl Geodetic {
    /// Build from degrees and metres.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Local north-east-down vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Ned {
    /// North component.
    pub north: f64,
    /// East component.
    pub east: f64,
    /// Down component.
    pub down: f64,
}

impl Ned {
    /// Build from components.
    pub fn new(north: f64, east: f64, down: f64) -> Self {
        Self { north, east, down }
    }

    /// Level velocity from ground speed and course (degrees from north).
    pub fn from_speed_course(speed: f64, course_deg: f64) -> Self {
        let course = course_deg.to_radians();
        Self {
            north: speed * course.cos(),
            east: speed * course.sin(),
            down: 0.0,
        }
    }

    /// Horizontal speed.
    pub fn ground_speed(&self) -> f64 {
        self.north.hypot(self.east)
    }

    /// Course over ground in degrees, 0 to 360.
    pub fn course_deg(&self) -> f64 {
        self.east.atan2(self.north).to_degrees().rem_euclid(360.0)
    }
}

/// Geodetic to ECEF.
pub fn lla_to_ecef(lla: &Geodetic) -> Ecef {
    let (sin_lat, cos_lat) = lla.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lla.longitude_deg.to_radians().sin_cos();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    Ecef {
        x: (n + lla.altitude_m) * cos_lat * cos_lon,
        y: (n + lla.altitude_m) * cos_lat * sin_lon,
        z: (n * (1.0 - WGS84_E2) + lla.altitude_m) * sin_lat,
    }
}

/// ECEF to geodetic, by Bowring's iteration.
pub fn ecef_to_lla(ecef: &Ecef) -> Geodetic {
    let Ecef { x, y, z } = *ecef;
    let p = x.hypot(y);
    let b = WGS84_A * (1.0 - WGS84_F);
    let ep2 = (WGS84_A * WGS84_A - b * b) / (b * b);

    let mut beta = z.atan2(p * (1.0 - WGS84_F));
    let mut lat = beta;
    for _ in 0..5 {
        let (sin_beta, cos_beta) = beta.sin_cos();
        lat = (z + ep2 * b * sin_beta.powi(3)).atan2(p - WGS84_E2 * WGS84_A * cos_beta.powi(3));
        beta = ((1.0 - WGS84_F) * lat.tan()).atan();
    }

    let sin_lat = lat.sin();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let altitude_m = if lat.cos().abs() > 1e-10 {
        p / lat.cos() - n
    } else {
        z.abs() - b
    };

    Geodetic {
        latitude_deg: lat.to_degrees(),
        longitude_deg: y.atan2(x).to_degrees(),
        altitude_m,
    }
}

/// Rotate a local NED vector at `at` into ECEF axes.
pub fn ned_to_ecef_velocity(ned: &Ned, at: &Geodetic) -> Ecef {
    let (sin_lat, cos_lat) = at.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = at.longitude_deg.to_radians().sin_cos();
    Ecef {
        x: -sin_lat * cos_lon * ned.north - sin_lon * ned.east - cos_lat * cos_lon * ned.down,
        y: -sin_lat * sin_lon * ned.north + cos_lon * ned.east - cos_lat * sin_lon * ned.down,
        z: cos_lat * ned.north - sin_lat * ned.down,
    }
}

/// Rotate an ECEF vector into local NED axes at `at`.
pub fn ecef_to_ned_velocity(v: &Ecef, at: &Geodetic) -> Ned {
    let (sin_lat, cos_lat) = at.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = at.longitude_deg.to_radians().sin_cos();
    Ned {
        north: -sin_lat * cos_lon * v.x - sin_lat * sin_lon * v.y + cos_lat * v.z,
        east: -sin_lon * v.x + cos_lon * v.y,
        down: -cos_lat * cos_lon * v.x - cos_lat * sin_lon * v.y - sin_lat * v.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn equator_prime_meridian() {
        let ecef = lla_to_ecef(&Geodetic::new(0.0, 0.0, 0.0));
        assert!(close(ecef.x, WGS84_A, 1e-6));
        assert!(close(ecef.y, 0.0, 1e-6));
        assert!(close(ecef.z, 0.0, 1e-6));
    }

    #[test]
    fn geodetic_round_trip() {
        for lla in [
            Geodetic::new(40.0, -75.0, 100.0),
            Geodetic::new(-33.9, 151.2, 35_786_000.0),
            Geodetic::new(89.9, 10.0, 400_000.0),
        ] {
            let back = ecef_to_lla(&lla_to_ecef(&lla));
            assert!(close(back.latitude_deg, lla.latitude_deg, 1e-8), "{back:?}");
            assert!(close(back.longitude_deg, lla.longitude_deg, 1e-8), "{back:?}");
            assert!(close(back.altitude_m, lla.altitude_m, 1e-3), "{back:?}");
        }
    }

    #[test]
    fn pole_height() {
        let pole = Ecef::new(0.0, 0.0, 6_356_752.314_245 + 1000.0);
        let lla = ecef_to_lla(&pole);
        assert!(close(lla.latitude_deg, 90.0, 1e-9));
        assert!(close(lla.altitude_m, 1000.0, 1e-3));
    }

    #[test]
    fn north_at_equator_is_plus_z() {
        let v = ned_to_ecef_velocity(&Ned::new(100.0, 0.0, 0.0), &Geodetic::new(0.0, 0.0, 0.0));
        assert!(close(v.z, 100.0, 1e-9));
        assert!(close(v.x, 0.0, 1e-9));
        let east = ned_to_ecef_velocity(&Ned::new(0.0, 10.0, 0.0), &Geodetic::new(0.0, 0.0, 0.0));
        assert!(close(east.y, 10.0, 1e-9));
    }

    #[test]
    fn velocity_rotation_round_trip() {
        let at = Geodetic::new(51.5, -0.12, 0.0);
        let ned = Ned::new(120.0, -45.0, 3.5);
        let back = ecef_to_ned_velocity(&ned_to_ecef_velocity(&ned, &at), &at);
        assert!(close(back.north, ned.north, 1e-9));
        assert!(close(back.east, ned.east, 1e-9));
        assert!(close(back.down, ned.down, 1e-9));
    }

    #[test]
    fn speed_and_course() {
        let ned = Ned::from_speed_course(200.0, 270.0);
        assert!(close(ned.ground_speed(), 200.0, 1e-9));
        assert!(close(ned.course_deg(), 270.0, 1e-9));
    }
}
