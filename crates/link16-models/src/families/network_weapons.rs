//! J11 network enabled weapons: in-flight weapon responses, weapon
//! directives and weapon coordination.
//!
//! J11.0 is the widest family in the catalog: twelve continuation words
//! spread over a sparse legal set, covering the weapon's own state, its
//! target, and an aimpoint.

use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::units::Unit;
use crate::word::WordDef;

/// Height above the WGS-84 ellipsoid in 25 ft steps.
const HEIGHT_ABOVE_ELLIPSOID: FieldType = ALTITUDE;
/// One NED velocity component.
const VELOCITY_COMPONENT: FieldType = FieldType::signed(16, 0.25, Unit::MetersPerSecond);

// ── J11.0 Weapon Response / In-Flight Target Update ─────────────────

const J11_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("WeaponTrackNumber", TRACK_NUMBER),
    FieldDef::new("WeaponStatus", FieldType::enumerated(5, WEAPON_STATUS_NAMES, NoStatement::Zero)),
    FieldDef::new("WeaponType", FieldType::integer(6, NoStatement::Zero)),
    FieldDef::new("WeaponProfile", FieldType::enumerated(3, WEAPON_PROFILE_NAMES, NoStatement::Zero)),
    FieldDef::new(
        "SeekerAcquisitionConfidence",
        FieldType::enumerated(4, SEEKER_CONFIDENCE_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("Spare", spare(19)),
];

const J11_0_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Latitude", LATITUDE),
    FieldDef::new("Longitude", LONGITUDE),
    FieldDef::new("HeightAboveEllipsoid", HEIGHT_ABOVE_ELLIPSOID),
    FieldDef::new("Spare", spare(7)),
];

const J11_0_C2_FIELDS: &[FieldDef] = &[
    FieldDef::new("Speed", SPEED),
    FieldDef::new("Course", COURSE),
    FieldDef::new("TimeToGo", TIME_TO_GO),
    FieldDef::new("SelfAbortReason", FieldType::enumerated(4, SELF_ABORT_NAMES, NoStatement::Zero)),
    FieldDef::new("Spare", spare(32)),
];

const J11_0_C3_FIELDS: &[FieldDef] = &[
    FieldDef::new("TargetTrackNumber", TRACK_NUMBER),
    FieldDef::new("Spare", spare(44)),
];

const J11_0_C4_FIELDS: &[FieldDef] = &[
    FieldDef::new("TrackNumberController", TRACK_NUMBER),
    FieldDef::new("Spare", spare(44)),
];

const J11_0_C5_FIELDS: &[FieldDef] = &[
    FieldDef::new("TimeToLockout", TIME_TO_LOCKOUT),
    FieldDef::new("Spare", spare(58)),
];

const J11_0_C9_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "DetailedStatusInformation",
        FieldType::enumerated(5, DETAILED_STATUS_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("Spare", spare(58)),
];

const J11_0_C13_FIELDS: &[FieldDef] = &[
    FieldDef::new("WeaponLatitude", LATITUDE),
    FieldDef::new("WeaponLongitude", LONGITUDE),
    FieldDef::new("Spare", spare(20)),
];

const J11_0_C14_FIELDS: &[FieldDef] = &[
    FieldDef::new("WeaponHeightAboveEllipsoid", HEIGHT_ABOVE_ELLIPSOID),
    FieldDef::new("WeaponVelocityNorth", VELOCITY_COMPONENT),
    FieldDef::new("WeaponVelocityEast", VELOCITY_COMPONENT),
    FieldDef::new("WeaponVelocityDown", VELOCITY_COMPONENT),
    FieldDef::new("Spare", spare(2)),
];

const J11_0_C15_FIELDS: &[FieldDef] = &[
    FieldDef::new("TargetLatitude", LATITUDE),
    FieldDef::new("TargetLongitude", LONGITUDE),
    FieldDef::new("Spare", spare(20)),
];

const J11_0_C16_FIELDS: &[FieldDef] = &[
    FieldDef::new("TargetHeightAboveEllipsoid", HEIGHT_ABOVE_ELLIPSOID),
    FieldDef::new("TargetVelocityNorth", VELOCITY_COMPONENT),
    FieldDef::new("TargetVelocityEast", VELOCITY_COMPONENT),
    FieldDef::new("TargetVelocityDown", VELOCITY_COMPONENT),
    FieldDef::new("Spare", spare(2)),
];

const J11_0_C17_FIELDS: &[FieldDef] = &[
    FieldDef::new("AimpointLatitude", LATITUDE),
    FieldDef::new("Spare", spare(42)),
];

const J11_0_C18_FIELDS: &[FieldDef] = &[
    FieldDef::new("AimpointLongitude", LONGITUDE),
    FieldDef::new("AimpointHeightAboveEllipsoid", HEIGHT_ABOVE_ELLIPSOID),
    FieldDef::new("Spare", spare(28)),
];

const J11_0_E0_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "SeekerAcquisitionStatus",
        FieldType::enumerated(3, SEEKER_STATUS_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("Spare", spare(65)),
];

/// J11.0 Initial word.
pub static J11_0_I: WordDef = WordDef::initial(11, 0, "J11.0I", J11_0_I_FIELDS);
/// J11.0 E0: seeker acquisition status.
pub static J11_0_E0: WordDef = WordDef::extension(11, 0, 0, "J11.0E0", J11_0_E0_FIELDS);
/// J11.0 C1: weapon position.
pub static J11_0_C1: WordDef = WordDef::continuation(11, 0, 1, "J11.0C1", J11_0_C1_FIELDS);
/// J11.0 C2: weapon kinematics and time to go.
pub static J11_0_C2: WordDef = WordDef::continuation(11, 0, 2, "J11.0C2", J11_0_C2_FIELDS);
/// J11.0 C3: target track number.
pub static J11_0_C3: WordDef = WordDef::continuation(11, 0, 3, "J11.0C3", J11_0_C3_FIELDS);
/// J11.0 C4: controlling unit.
pub static J11_0_C4: WordDef = WordDef::continuation(11, 0, 4, "J11.0C4", J11_0_C4_FIELDS);
/// J11.0 C5: time to input lockout.
pub static J11_0_C5: WordDef = WordDef::continuation(11, 0, 5, "J11.0C5", J11_0_C5_FIELDS);
/// J11.0 C9: detailed status.
pub static J11_0_C9: WordDef = WordDef::continuation(11, 0, 9, "J11.0C9", J11_0_C9_FIELDS);
/// J11.0 C13: precise weapon position.
pub static J11_0_C13: WordDef = WordDef::continuation(11, 0, 13, "J11.0C13", J11_0_C13_FIELDS);
/// J11.0 C14: weapon height and velocity.
pub static J11_0_C14: WordDef = WordDef::continuation(11, 0, 14, "J11.0C14", J11_0_C14_FIELDS);
/// J11.0 C15: target position.
pub static J11_0_C15: WordDef = WordDef::continuation(11, 0, 15, "J11.0C15", J11_0_C15_FIELDS);
/// J11.0 C16: target height and velocity.
pub static J11_0_C16: WordDef = WordDef::continuation(11, 0, 16, "J11.0C16", J11_0_C16_FIELDS);
/// J11.0 C17: aimpoint latitude.
pub static J11_0_C17: WordDef = WordDef::continuation(11, 0, 17, "J11.0C17", J11_0_C17_FIELDS);
/// J11.0 C18: aimpoint longitude and height.
pub static J11_0_C18: WordDef = WordDef::continuation(11, 0, 18, "J11.0C18", J11_0_C18_FIELDS);

/// J11.0 Weapon Response / In-Flight Target Update.
pub static J11_0: FamilyDef = FamilyDef {
    family: Family::WeaponResponse,
    name: "Weapon Response / In-Flight Target Update",
    initial: &J11_0_I,
    continuations: &[
        &J11_0_C1, &J11_0_C2, &J11_0_C3, &J11_0_C4, &J11_0_C5, &J11_0_C9, &J11_0_C13,
        &J11_0_C14, &J11_0_C15, &J11_0_C16, &J11_0_C17, &J11_0_C18,
    ],
    extensions: &[&J11_0_E0],
};

// ── J11.1 Weapon Directive ──────────────────────────────────────────

const J11_1_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("WeaponTrackNumber", TRACK_NUMBER),
    FieldDef::new(
        "WeaponDirective",
        FieldType::enumerated(4, WEAPON_DIRECTIVE_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("TargetTrackNumber", TRACK_NUMBER),
    FieldDef::new("Spare", spare(14)),
];

const J11_1_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "ThirdPartySource",
        FieldType::enumerated(3, THIRD_PARTY_SOURCE_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("TrackNumberController", TRACK_NUMBER),
    FieldDef::new("Spare", spare(41)),
];

const J11_1_C2_FIELDS: &[FieldDef] = &[
    FieldDef::new("TargetLatitude", LATITUDE),
    FieldDef::new("TargetLongitude", LONGITUDE),
    FieldDef::new("TargetHeightAboveEllipsoid", HEIGHT_ABOVE_ELLIPSOID),
    FieldDef::new("Spare", spare(7)),
];

const J11_1_C3_FIELDS: &[FieldDef] = &[
    FieldDef::new("TargetVelocityNorth", VELOCITY_COMPONENT),
    FieldDef::new("TargetVelocityEast", VELOCITY_COMPONENT),
    FieldDef::new("TargetVelocityDown", VELOCITY_COMPONENT),
    FieldDef::new("Spare", spare(15)),
];

/// J11.1 Initial word.
pub static J11_1_I: WordDef = WordDef::initial(11, 1, "J11.1I", J11_1_I_FIELDS);
/// J11.1 C1: third-party source and controller.
pub static J11_1_C1: WordDef = WordDef::continuation(11, 1, 1, "J11.1C1", J11_1_C1_FIELDS);
/// J11.1 C2: target position.
pub static J11_1_C2: WordDef = WordDef::continuation(11, 1, 2, "J11.1C2", J11_1_C2_FIELDS);
/// J11.1 C3: target velocity.
pub static J11_1_C3: WordDef = WordDef::continuation(11, 1, 3, "J11.1C3", J11_1_C3_FIELDS);

/// J11.1 Weapon Directive.
pub static J11_1: FamilyDef = FamilyDef {
    family: Family::WeaponDirective,
    name: "Weapon Directive",
    initial: &J11_1_I,
    continuations: &[&J11_1_C1, &J11_1_C2, &J11_1_C3],
    extensions: &[],
};

// ── J11.2 Weapon Coordination and Management ────────────────────────

const J11_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("WeaponTrackNumber", TRACK_NUMBER),
    FieldDef::new(
        "CoordinationAction",
        FieldType::enumerated(4, COORDINATION_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("TrackNumberController", TRACK_NUMBER),
    FieldDef::new("Spare", spare(14)),
];

/// J11.2 Initial word.
pub static J11_2_I: WordDef = WordDef::initial(11, 2, "J11.2I", J11_2_I_FIELDS);

/// J11.2 Weapon Coordination and Management.
pub static J11_2: FamilyDef = FamilyDef {
    family: Family::WeaponCoordination,
    name: "Weapon Coordination and Management",
    initial: &J11_2_I,
    continuations: &[],
    extensions: &[],
};
