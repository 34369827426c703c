//! Physical units carried by J-series fields and their SI conversions.
//!
//! Fields store values in the units the message standard publishes them in
//! (feet, data miles per hour, degrees...). The track facade converts to SI.

use serde::Serialize;

/// Metres in one foot.
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Metres in one data mile (6000 ft).
pub const METERS_PER_DATA_MILE: f64 = 1828.8;
/// Metres per second in one data mile per hour.
pub const MPS_PER_DMPH: f64 = METERS_PER_DATA_MILE / 3600.0;
/// Metres per second in one knot.
pub const MPS_PER_KNOT: f64 = 1852.0 / 3600.0;

/// Unit of a field's accessor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Dimensionless.
    #[strum(serialize = "")]
    None,
    /// Feet.
    #[strum(serialize = "ft")]
    Feet,
    /// Metres.
    #[strum(serialize = "m")]
    Meters,
    /// Data miles.
    #[strum(serialize = "DM")]
    DataMiles,
    /// Data miles per hour.
    #[strum(serialize = "DM/h")]
    DataMilesPerHour,
    /// Knots.
    #[strum(serialize = "kt")]
    Knots,
    /// Metres per second.
    #[strum(serialize = "m/s")]
    MetersPerSecond,
    /// Degrees of arc.
    #[strum(serialize = "deg")]
    Degrees,
    /// Seconds.
    #[strum(serialize = "s")]
    Seconds,
    /// Pounds.
    #[strum(serialize = "lb")]
    Pounds,
}

impl Unit {
    /// Factor converting a value in this unit to its SI counterpart.
    ///
    /// Degrees convert to radians. Units without an SI counterpart in this
    /// crate return 1.
    pub fn si_factor(self) -> f64 {
        match self {
            Unit::Feet => METERS_PER_FOOT,
            Unit::DataMiles => METERS_PER_DATA_MILE,
            Unit::DataMilesPerHour => MPS_PER_DMPH,
            Unit::Knots => MPS_PER_KNOT,
            Unit::Degrees => std::f64::consts::PI / 180.0,
            Unit::None
            | Unit::Meters
            | Unit::MetersPerSecond
            | Unit::Seconds
            | Unit::Pounds => 1.0,
        }
    }

    /// Convert `value` in this unit to SI.
    pub fn to_si(self, value: f64) -> f64 {
        value * self.si_factor()
    }

    /// Convert an SI `value` to this unit.
    pub fn from_si(self, value: f64) -> f64 {
        value / self.si_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_to_meters() {
        assert!((Unit::Feet.to_si(1000.0) - 304.8).abs() < 1e-9);
    }

    #[test]
    fn dmph_round_trip() {
        let mps = Unit::DataMilesPerHour.to_si(500.0);
        assert!((mps - 254.0).abs() < 1e-9);
        assert!((Unit::DataMilesPerHour.from_si(mps) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn knots_use_the_nautical_mile() {
        assert!((Unit::Knots.to_si(3600.0) - 1852.0).abs() < 1e-9);
    }

    #[test]
    fn degrees_become_radians() {
        assert!((Unit::Degrees.to_si(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn display_symbols() {
        assert_eq!(Unit::DataMilesPerHour.to_string(), "DM/h");
        assert_eq!(Unit::None.to_string(), "");
    }
}
