//! Field types shared by the message families.
//!
//! Each constant fixes a width, a conversion and a no-statement policy once;
//! the family tables in [`crate::families`] name them per word.

use crate::field::{FieldKind, FieldType, NoStatement, QualityTable};
use crate::units::Unit;

// ---------------------------------------------------------------------------
// Enumeration tables
// ---------------------------------------------------------------------------

/// Track identity codes.
pub const IDENTITY_NAMES: &[&str] = &[
    "PENDING",
    "UNKNOWN",
    "ASSUMED_FRIEND",
    "FRIEND",
    "NEUTRAL",
    "SUSPECT",
    "HOSTILE",
    "UNDEFINED",
];

/// Identity amplification codes.
pub const IDENTITY_AMPLIFY_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "EXERCISE_PENDING",
    "EXERCISE_UNKNOWN",
    "EXERCISE_ASSUMED_FRIEND",
    "EXERCISE_FRIEND",
    "EXERCISE_NEUTRAL",
    "JOKER",
    "FAKER",
];

/// Track environment codes.
pub const ENVIRONMENT_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "SPACE",
    "AIR",
    "SURFACE",
    "SUBSURFACE",
    "LAND",
    "UNDEFINED",
];

/// Altitude source codes.
pub const ALTITUDE_SOURCE_NAMES: &[&str] = &["NO_STATEMENT", "RADAR", "IFF", "PILOT"];

/// Track management action codes.
pub const TRACK_MGMT_ACTION_NAMES: &[&str] = &[
    "DROP_TRACK",
    "CHANGE_DATA_ORDER",
    "EMERGENCY_STATUS_CHANGE",
    "FORCE_TELL_CHANGE",
    "STRENGTH_CHANGE",
    "ENVIRONMENT_CHANGE",
    "ALERT_CHANGE",
    "UNDEFINED",
];

/// Data update request action codes.
pub const UPDATE_REQUEST_NAMES: &[&str] = &[
    "TRACK_NUMBER",
    "ALL_TRACKS",
    "ALL_POINTS",
    "ALL_UNITS",
    "BY_ENVIRONMENT",
    "UNDEFINED",
];

/// Correlation action codes.
pub const CORRELATION_NAMES: &[&str] = &[
    "CORRELATION_REQUEST",
    "DECORRELATION",
    "CORRELATION_CONFIRMED",
    "CORRELATION_DENIED",
];

/// Pointer purpose codes.
pub const POINTER_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "POINTER",
    "TARGET",
    "EMERGENCY",
    "THREAT",
];

/// Reference point type codes.
pub const POINT_TYPE_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "WAYPOINT",
    "STATION",
    "REFERENCE",
    "HAZARD",
    "AREA",
    "LINE",
    "CORRIDOR",
];

/// Emergency point type codes.
pub const EMERGENCY_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "MAN_IN_WATER",
    "DITCHING",
    "BAILOUT",
    "DISTRESSED_VESSEL",
    "CRASH",
];

/// Command codes.
pub const COMMAND_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "WEAPONS_FREE",
    "WEAPONS_TIGHT",
    "ENGAGE",
    "ASSIGN",
    "CLEAR_ENGAGE",
    "HOLD_FIRE",
    "CEASE_FIRE",
    "COVER",
    "SALVO_CLEAR_AIRCRAFT",
    "ASSUME_CONTROL",
    "ATTACK",
    "CEASE_ATTACK",
    "DISUSED",
    "PROCEED_TO_POINT",
];

/// Receipt and compliance codes.
pub const RECEIPT_COMPLIANCE_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "MACHINE_RECEIPT",
    "WILCO",
    "HAVE_COMPLY",
    "CANTCO",
    "CANNOT_PROCESS",
];

/// Weapon engagement status codes.
pub const ENGAGEMENT_STATUS_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "WEAPON_ASSIGNED",
    "ENGAGING",
    "ENGAGED",
    "KILL",
    "NO_KILL",
    "TARGET_LOST",
    "CEASE_ENGAGEMENT",
];

/// Weapon system codes.
pub const WEAPON_SYSTEM_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "AIRCRAFT",
    "SAM",
    "SHORT_RANGE_SAM",
    "GUN",
    "MISSILE",
    "LASER",
];

/// Fire method codes.
pub const FIRE_METHOD_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "SINGLE_SHOT",
    "SALVO",
    "SHOOT_LOOK_SHOOT",
];

/// Handover and control action codes.
pub const CONTROL_ACTION_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "REQUEST",
    "ACCEPT",
    "REJECT",
    "COMPLETE",
];

/// Weapon status codes of the network enabled weapon family.
pub const WEAPON_STATUS_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "BASIC_WIFT",
    "SELF_ABORT",
    "BOMB_HIT_INDICATION",
    "ABORT_ACKNOWLEDGED",
    "HANDOFF_COMPLETE",
    "IN_FLIGHT",
    "RELEASED",
];

/// Weapon flight profile codes.
pub const WEAPON_PROFILE_NAMES: &[&str] = &["NO_STATEMENT", "MIDCOURSE", "TERMINAL"];

/// Seeker acquisition confidence codes.
pub const SEEKER_CONFIDENCE_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "BELOW_50",
    "50_THROUGH_59",
    "60_THROUGH_69",
    "70_THROUGH_79",
    "80_THROUGH_89",
    "90_AND_ABOVE",
];

/// Seeker acquisition status codes.
pub const SEEKER_STATUS_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "NOT_IN_SEARCH_OR_TRACK",
    "SEARCH_MODE_COURSE",
    "SEARCH_MODE_FINE",
    "TRACKING",
];

/// Weapon self abort reasons.
pub const SELF_ABORT_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "FAILURE",
    "PRIMARY_TARGET_NOT_DETECTED",
    "FUEL_EXHAUSTED",
    "COMMANDED",
];

/// Detailed weapon status codes.
pub const DETAILED_STATUS_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "UNKNOWN",
    "TARGET_ACQUIRED",
    "TARGET_NOT_ACQUIRED",
    "TARGET_LOST",
];

/// In-flight weapon directive codes.
pub const WEAPON_DIRECTIVE_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "IN_FLIGHT_TARGET_UPDATE",
    "HANDOFF_CONTROL_CHANGE_ORDER",
    "ABORT",
    "RETARGET",
];

/// Third party source codes.
pub const THIRD_PARTY_SOURCE_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "CONTROLLER",
    "ALTERNATE_CONTROLLER",
    "THIRD_PARTY",
];

/// Weapon coordination action codes.
pub const COORDINATION_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "CONTROL_REQUEST",
    "CONTROL_ACCEPT",
    "CONTROL_DENY",
    "RELEASE_CONTROL",
];

/// Vector type codes.
pub const VECTOR_NAMES: &[&str] = &["NO_STATEMENT", "VECTOR", "ORBIT", "RETURN_TO_BASE"];

/// Target sorting action codes.
pub const SORTING_NAMES: &[&str] = &["NO_STATEMENT", "ASSIGN", "CANCEL", "ACKNOWLEDGE"];

/// Operational capability codes.
pub const OPERATIONAL_CAPABILITY_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "FULLY_CAPABLE",
    "DEGRADED",
    "NOT_OPERATIONAL",
];

/// Emitter status codes.
pub const EMITTER_STATUS_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "ACTIVE",
    "NOT_ACTIVE",
    "INTERMITTENT",
];

/// Fix or bearing codes of an EW product.
pub const FIX_OR_BEARING_NAMES: &[&str] = &["NO_STATEMENT", "FIX", "BEARING", "AREA"];

/// Electronic warfare coordination action codes.
pub const EW_ACTION_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "JAM",
    "CEASE_JAMMING",
    "SEARCH",
    "DIRECTION_FINDING",
];

/// Threat posture codes; code 4 is the published no-statement value.
pub const THREAT_POSTURE_NAMES: &[&str] = &[
    "HOSTILE_ACT",
    "THREAT_IMMINENT",
    "HOSTILE_INTENT",
    "THREAT_WARNING",
    "NO_STATEMENT",
];

/// Mode 4 indicator codes.
pub const MODE4_NAMES: &[&str] = &["NO_STATEMENT", "NO_RESPONSE", "INVALID", "VALID"];

/// Depth category codes.
pub const DEPTH_CATEGORY_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "SURFACED",
    "PERISCOPE",
    "SHALLOW",
    "INTERMEDIATE",
    "DEEP",
];

/// Space amplification codes.
pub const SPACE_AMPLIFY_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "SATELLITE",
    "BALLISTIC_MISSILE",
    "DEBRIS",
    "DECOY",
    "MANNED_SPACECRAFT",
];

/// Amplification confidence codes.
pub const AMPLIFY_CONFIDENCE_NAMES: &[&str] = &["NO_STATEMENT", "LOW", "MEDIUM", "HIGH"];

/// Weather condition codes.
pub const WEATHER_NAMES: &[&str] = &[
    "NO_STATEMENT",
    "CLEAR",
    "SCATTERED",
    "BROKEN",
    "OVERCAST",
    "RAIN",
    "SNOW",
    "FOG",
];

// ---------------------------------------------------------------------------
// Common field types
// ---------------------------------------------------------------------------

/// One boolean bit.
pub const FLAG: FieldType = FieldType::flag();

/// Track number, 19 bits.
pub const TRACK_NUMBER: FieldType = FieldType::new(19, FieldKind::TrackNumber);
/// Addressee track number, 15 bits; all ones is no statement.
pub const TRACK_NUMBER_ADDRESSEE: FieldType = FieldType::integer(15, NoStatement::Max);
/// Track strength, 4 bits.
pub const STRENGTH: FieldType = FieldType::integer(4, NoStatement::Zero);
/// Track identity.
pub const IDENTITY: FieldType = FieldType::enumerated(3, IDENTITY_NAMES, NoStatement::None);
/// Identity amplification.
pub const IDENTITY_AMPLIFY: FieldType =
    FieldType::enumerated(3, IDENTITY_AMPLIFY_NAMES, NoStatement::Zero);
/// Track environment.
pub const ENVIRONMENT: FieldType =
    FieldType::enumerated(3, ENVIRONMENT_NAMES, NoStatement::Zero);
/// Track quality, air/surface/subsurface/land table.
pub const TRACK_QUALITY: FieldType =
    FieldType::new(4, FieldKind::TrackQuality(QualityTable::Standard));
/// Track quality, space table.
pub const TRACK_QUALITY_SPACE: FieldType =
    FieldType::new(4, FieldKind::TrackQuality(QualityTable::Space));
/// Position or time quality, 4 bits.
pub const QUALITY: FieldType = FieldType::integer(4, NoStatement::Zero);
/// Network participation status.
pub const PARTICIPATION_STATUS: FieldType = FieldType::integer(4, NoStatement::Zero);
/// Net number.
pub const NET_NUMBER: FieldType = FieldType::integer(7, NoStatement::Max);

/// Latitude, 21 bits.
pub const LATITUDE: FieldType = FieldType::new(21, FieldKind::Latitude);
/// Longitude, 22 bits.
pub const LONGITUDE: FieldType = FieldType::new(22, FieldKind::Longitude);
/// Altitude in 25 ft steps.
pub const ALTITUDE: FieldType = FieldType::scaled(13, 25.0, Unit::Feet, NoStatement::Max);
/// Altitude in 25 ft steps with negative altitudes down to -2000 ft.
pub const ALTITUDE_EXTENDED: FieldType =
    FieldType::new(12, FieldKind::PiecewiseAltitude { lsb: 25.0 });
/// Relative elevation in feet.
pub const DELTA_ELEVATION: FieldType = FieldType::signed(15, 1.0, Unit::Feet);
/// Elevation angle, 360/65536 degree steps.
pub const ELEVATION_ANGLE: FieldType = FieldType::signed(15, 0.005_493_164_062_5, Unit::Degrees);
/// Depth in 15 m steps.
pub const DEPTH: FieldType = FieldType::scaled(7, 15.0, Unit::Meters, NoStatement::Max);
/// Depth category.
pub const DEPTH_CATEGORY: FieldType =
    FieldType::enumerated(4, DEPTH_CATEGORY_NAMES, NoStatement::Zero);

/// Course, whole degrees.
pub const COURSE: FieldType = FieldType::angle(9, 1.0, 360.0);
/// Axis orientation of an area, whole degrees modulo 180.
pub const AXIS_ORIENTATION: FieldType = FieldType::angle(8, 1.0, 180.0);
/// Bearing, 12-bit fraction of a circle.
pub const BEARING: FieldType = FieldType::new(12, FieldKind::Bearing);
/// Speed in 2 data-mile-per-hour steps.
pub const SPEED: FieldType = FieldType::scaled(11, 2.0, Unit::DataMilesPerHour, NoStatement::Max);
/// Subsurface speed in 2 data-mile-per-hour steps.
pub const SPEED_SUBSURFACE: FieldType =
    FieldType::scaled(9, 2.0, Unit::DataMilesPerHour, NoStatement::Max);
/// Speed in 5 knot steps.
pub const SPEED_KNOTS: FieldType = FieldType::scaled(8, 5.0, Unit::Knots, NoStatement::Max);
/// Area axis length in data miles.
pub const AXIS_LENGTH: FieldType = FieldType::scaled(6, 1.0, Unit::DataMiles, NoStatement::Max);

/// Position along an ECEF axis, 10 m steps.
pub const WCS_POSITION: FieldType = FieldType::signed(23, 10.0, Unit::Meters);
/// Velocity along an ECEF or local axis, 0.25 m/s steps.
pub const WCS_VELOCITY: FieldType = FieldType::signed(16, 0.25, Unit::MetersPerSecond);

/// Fuel remaining in 100 lb steps.
pub const FUEL: FieldType = FieldType::scaled(12, 100.0, Unit::Pounds, NoStatement::Max);
/// Time to go in 2 s steps.
pub const TIME_TO_GO: FieldType = FieldType::scaled(7, 2.0, Unit::Seconds, NoStatement::Max);
/// Time to input lockout.
pub const TIME_TO_LOCKOUT: FieldType = FieldType::new(5, FieldKind::TimeToLockout);
/// Hour of day.
pub const HOUR: FieldType = FieldType::integer(5, NoStatement::Max);
/// Minute of hour, or second of minute.
pub const MINUTE: FieldType = FieldType::integer(6, NoStatement::Max);

/// Four-character callsign.
pub const CALLSIGN: FieldType = FieldType::new(24, FieldKind::Callsign);
/// Four characters of seven-bit text.
pub const TEXT: FieldType = FieldType::new(28, FieldKind::Text);

/// Platform type, 6 bits.
pub const PLATFORM: FieldType = FieldType::integer(6, NoStatement::Zero);
/// Platform activity, 7 bits.
pub const ACTIVITY: FieldType = FieldType::integer(7, NoStatement::Zero);
/// Specific type, 12 bits.
pub const SPECIFIC_TYPE: FieldType = FieldType::integer(12, NoStatement::Zero);
/// Mode 1 IFF code.
pub const MODE1: FieldType = FieldType::integer(5, NoStatement::Zero);
/// Mode 2 or Mode 3 IFF code.
pub const MODE_CODE: FieldType = FieldType::integer(12, NoStatement::Zero);
/// Mode 4 indicator.
pub const MODE4: FieldType = FieldType::enumerated(2, MODE4_NAMES, NoStatement::Zero);

/// DIS site, application or entity number.
pub const DIS_NUMBER: FieldType = FieldType::integer(16, NoStatement::None);

/// Unused bits.
pub const fn spare(width: u8) -> FieldType {
    FieldType::spare(width)
}

/// Retired bits.
pub const fn disused(width: u8) -> FieldType {
    FieldType::disused(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    #[test]
    fn identity_decodes_names() {
        assert_eq!(IDENTITY.decode(6).as_str(), Some("HOSTILE"));
        assert_eq!(IDENTITY.decode(3).as_str(), Some("FRIEND"));
    }

    #[test]
    fn threat_posture_uses_specific_sentinel() {
        let posture = FieldType::enumerated(3, THREAT_POSTURE_NAMES, NoStatement::Value(4));
        assert_eq!(posture.decode(4), FieldValue::NoStatement);
        assert_eq!(posture.decode(0).as_str(), Some("HOSTILE_ACT"));
    }

    #[test]
    fn speed_tops_out_at_2046_codes() {
        assert_eq!(SPEED.encode_number(1.0e6), Some(2046));
        assert_eq!(SPEED.decode(2046), FieldValue::Real(4092.0));
    }

    #[test]
    fn wcs_position_range() {
        let max_m = f64::from((1u32 << 22) - 1) * 10.0;
        let raw = WCS_POSITION.encode_number(1.0e9).unwrap();
        assert_eq!(WCS_POSITION.decode(raw), FieldValue::Real(max_m));
    }

    #[test]
    fn elevation_angle_step() {
        assert_eq!(ELEVATION_ANGLE.encode_number(45.0), Some(8192));
        assert_eq!(ELEVATION_ANGLE.encode_number(90.0), Some(16383));
    }

    #[test]
    fn altitude_extended_reaches_below_sea_level() {
        assert_eq!(ALTITUDE_EXTENDED.encode_number(-25.0), Some(80));
        assert_eq!(ALTITUDE_EXTENDED.decode(81), FieldValue::Real(0.0));
        assert_eq!(ALTITUDE_EXTENDED.decode(40), FieldValue::Real(-50.0));
    }
}
