//! J3 surveillance: reference and emergency points, air, surface,
//! subsurface, land and space tracks, and electronic warfare products.
//!
//! Track families share a layout convention: identity and quality in the
//! Initial word, position and kinematics in E0, the DIS entity identifier in
//! the next extension, platform and specific type in C1. The space track
//! carries an ECEF state vector split over E0 and E1 instead of a geodetic
//! position.

use super::{DIS_ENTITY_FIELDS, KINEMATIC_EXTENSION_FIELDS, POSITION_EXTENSION_FIELDS};
use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

// ── J3.0 Reference Point ────────────────────────────────────────────

const J3_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("PointType", FieldType::enumerated(4, POINT_TYPE_NAMES, NoStatement::Zero)),
    FieldDef::new("PointAmplify", FieldType::integer(4, NoStatement::Zero)),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Spare", spare(16)),
];

const J3_0_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("AxisOrientation", AXIS_ORIENTATION),
    FieldDef::new("MajorAxis", AXIS_LENGTH),
    FieldDef::new("MinorAxis", AXIS_LENGTH),
    FieldDef::new("Spare", spare(43)),
];

/// J3.0 Initial word.
pub static J3_0_I: WordDef = WordDef::initial(3, 0, "J3.0I", J3_0_I_FIELDS);
/// J3.0 E0: point position, course and speed.
pub static J3_0_E0: WordDef = WordDef::extension(3, 0, 0, "J3.0E0", KINEMATIC_EXTENSION_FIELDS);
/// J3.0 C1: area dimensions.
pub static J3_0_C1: WordDef = WordDef::continuation(3, 0, 1, "J3.0C1", J3_0_C1_FIELDS);

/// J3.0 Reference Point.
pub static J3_0: FamilyDef = FamilyDef {
    family: Family::ReferencePoint,
    name: "Reference Point",
    initial: &J3_0_I,
    continuations: &[&J3_0_C1],
    extensions: &[&J3_0_E0],
};

// ── J3.1 Emergency Point ────────────────────────────────────────────

const J3_1_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("EmergencyType", FieldType::enumerated(4, EMERGENCY_NAMES, NoStatement::Zero)),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("Spare", spare(17)),
];

/// J3.1 Initial word.
pub static J3_1_I: WordDef = WordDef::initial(3, 1, "J3.1I", J3_1_I_FIELDS);
/// J3.1 E0: emergency position.
pub static J3_1_E0: WordDef = WordDef::extension(3, 1, 0, "J3.1E0", POSITION_EXTENSION_FIELDS);

/// J3.1 Emergency Point.
pub static J3_1: FamilyDef = FamilyDef {
    family: Family::EmergencyPoint,
    name: "Emergency Point",
    initial: &J3_1_I,
    continuations: &[],
    extensions: &[&J3_1_E0],
};

// ── J3.2 Air Track ──────────────────────────────────────────────────

const J3_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("ForceTell", FLAG),
    FieldDef::new("EmergencyIndicator", FLAG),
    FieldDef::new("SpecialProcessing", FLAG),
    FieldDef::new("SimulationIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Strength", STRENGTH),
    FieldDef::new("AltitudeSource", FieldType::enumerated(2, ALTITUDE_SOURCE_NAMES, NoStatement::Zero)),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("TrackQuality", TRACK_QUALITY),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("Spare", spare(4)),
];

const J3_2_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("AirPlatform", PLATFORM),
    FieldDef::new("AirPlatformActivity", ACTIVITY),
    FieldDef::new("IsSpecificType", FLAG),
    FieldDef::new("SpecificType", SPECIFIC_TYPE),
    FieldDef::new("Mode1Code", MODE1),
    FieldDef::new("Mode2Code", MODE_CODE),
    FieldDef::new("Mode3Code", MODE_CODE),
    FieldDef::new("Spare", spare(8)),
];

/// J3.2 Initial word.
pub static J3_2_I: WordDef = WordDef::initial(3, 2, "J3.2I", J3_2_I_FIELDS);
/// J3.2 E0: position, course and speed.
pub static J3_2_E0: WordDef = WordDef::extension(3, 2, 0, "J3.2E0", KINEMATIC_EXTENSION_FIELDS);
/// J3.2 E1: DIS entity identifier.
pub static J3_2_E1: WordDef = WordDef::extension(3, 2, 1, "J3.2E1", DIS_ENTITY_FIELDS);
/// J3.2 C1: platform, specific type and IFF codes.
pub static J3_2_C1: WordDef = WordDef::continuation(3, 2, 1, "J3.2C1", J3_2_C1_FIELDS);

/// J3.2 Air Track.
pub static J3_2: FamilyDef = FamilyDef {
    family: Family::AirTrack,
    name: "Air Track",
    initial: &J3_2_I,
    continuations: &[&J3_2_C1],
    extensions: &[&J3_2_E0, &J3_2_E1],
};

// ── J3.3 Surface (Maritime) Track ───────────────────────────────────

const J3_3_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("ForceTell", FLAG),
    FieldDef::new("EmergencyIndicator", FLAG),
    FieldDef::new("SpecialProcessing", FLAG),
    FieldDef::new("SimulationIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Strength", STRENGTH),
    FieldDef::new("TrackQuality", TRACK_QUALITY),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("SurfacePlatform", PLATFORM),
    FieldDef::new("SurfacePlatformActivity", ACTIVITY),
    FieldDef::new("Spare", spare(6)),
];

const J3_3_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("IsSpecificType", FLAG),
    FieldDef::new("SpecificType", SPECIFIC_TYPE),
    FieldDef::new("Mode3Code", MODE_CODE),
    FieldDef::new("Spare", spare(38)),
];

/// J3.3 Initial word.
pub static J3_3_I: WordDef = WordDef::initial(3, 3, "J3.3I", J3_3_I_FIELDS);
/// J3.3 E0: position, course and speed.
pub static J3_3_E0: WordDef = WordDef::extension(3, 3, 0, "J3.3E0", KINEMATIC_EXTENSION_FIELDS);
/// J3.3 E1: DIS entity identifier.
pub static J3_3_E1: WordDef = WordDef::extension(3, 3, 1, "J3.3E1", DIS_ENTITY_FIELDS);
/// J3.3 C1: specific type and Mode 3 code.
pub static J3_3_C1: WordDef = WordDef::continuation(3, 3, 1, "J3.3C1", J3_3_C1_FIELDS);

/// J3.3 Surface (Maritime) Track.
pub static J3_3: FamilyDef = FamilyDef {
    family: Family::SurfaceTrack,
    name: "Surface (Maritime) Track",
    initial: &J3_3_I,
    continuations: &[&J3_3_C1],
    extensions: &[&J3_3_E0, &J3_3_E1],
};

// ── J3.4 Subsurface (Maritime) Track ────────────────────────────────

const J3_4_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("ForceTell", FLAG),
    FieldDef::new("EmergencyIndicator", FLAG),
    FieldDef::new("SpecialProcessing", FLAG),
    FieldDef::new("SimulationIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackQuality", TRACK_QUALITY),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("SubsurfacePlatform", PLATFORM),
    FieldDef::new("SubsurfacePlatformActivity", ACTIVITY),
    FieldDef::new("DepthCategory", DEPTH_CATEGORY),
    FieldDef::new("Spare", spare(6)),
];

const J3_4_E0_FIELDS: &[FieldDef] = &[
    FieldDef::new("Latitude", LATITUDE),
    FieldDef::new("Longitude", LONGITUDE),
    FieldDef::new("Course", COURSE),
    FieldDef::new("Speed", SPEED_SUBSURFACE),
    FieldDef::new("Depth", DEPTH),
];

const J3_4_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("IsSpecificType", FLAG),
    FieldDef::new("SpecificType", SPECIFIC_TYPE),
    FieldDef::new("Confidence", FieldType::integer(5, NoStatement::Zero)),
    FieldDef::new("Spare", spare(45)),
];

/// J3.4 Initial word.
pub static J3_4_I: WordDef = WordDef::initial(3, 4, "J3.4I", J3_4_I_FIELDS);
/// J3.4 E0: position, course, speed and depth.
pub static J3_4_E0: WordDef = WordDef::extension(3, 4, 0, "J3.4E0", J3_4_E0_FIELDS);
/// J3.4 E1: DIS entity identifier.
pub static J3_4_E1: WordDef = WordDef::extension(3, 4, 1, "J3.4E1", DIS_ENTITY_FIELDS);
/// J3.4 C1: specific type and classification confidence.
pub static J3_4_C1: WordDef = WordDef::continuation(3, 4, 1, "J3.4C1", J3_4_C1_FIELDS);

/// J3.4 Subsurface (Maritime) Track.
pub static J3_4: FamilyDef = FamilyDef {
    family: Family::SubsurfaceTrack,
    name: "Subsurface (Maritime) Track",
    initial: &J3_4_I,
    continuations: &[&J3_4_C1],
    extensions: &[&J3_4_E0, &J3_4_E1],
};

// ── J3.5 Land (Ground) Point/Track ──────────────────────────────────

const J3_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("ForceTell", FLAG),
    FieldDef::new("EmergencyIndicator", FLAG),
    FieldDef::new("SpecialProcessing", FLAG),
    FieldDef::new("SimulationIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Strength", STRENGTH),
    FieldDef::new("PointOrTrack", FLAG),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("TrackQuality", TRACK_QUALITY),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("Spare", spare(5)),
];

const J3_5_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("LandPlatform", PLATFORM),
    FieldDef::new("LandPlatformActivity", ACTIVITY),
    FieldDef::new("IsSpecificType", FLAG),
    FieldDef::new("SpecificType", SPECIFIC_TYPE),
    FieldDef::new("Spare", spare(37)),
];

/// J3.5 Initial word.
pub static J3_5_I: WordDef = WordDef::initial(3, 5, "J3.5I", J3_5_I_FIELDS);
/// J3.5 E0: position, course and speed.
pub static J3_5_E0: WordDef = WordDef::extension(3, 5, 0, "J3.5E0", KINEMATIC_EXTENSION_FIELDS);
/// J3.5 E1: DIS entity identifier.
pub static J3_5_E1: WordDef = WordDef::extension(3, 5, 1, "J3.5E1", DIS_ENTITY_FIELDS);
/// J3.5 C1: platform and specific type.
pub static J3_5_C1: WordDef = WordDef::continuation(3, 5, 1, "J3.5C1", J3_5_C1_FIELDS);

/// J3.5 Land (Ground) Point/Track.
pub static J3_5: FamilyDef = FamilyDef {
    family: Family::LandTrack,
    name: "Land (Ground) Point/Track",
    initial: &J3_5_I,
    continuations: &[&J3_5_C1],
    extensions: &[&J3_5_E0, &J3_5_E1],
};

// ── J3.6 Space Track ────────────────────────────────────────────────

const J3_6_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("ForceTell", FLAG),
    FieldDef::new("SpecialProcessing", FLAG),
    FieldDef::new("SimulationIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackQuality", TRACK_QUALITY_SPACE),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("SpacePlatform", PLATFORM),
    FieldDef::new("SpacePlatformActivity", ACTIVITY),
    FieldDef::new("Minute", MINUTE),
    FieldDef::new("Spare", spare(5)),
];

const J3_6_E0_FIELDS: &[FieldDef] = &[
    FieldDef::new("WcsX", WCS_POSITION),
    FieldDef::new("WcsY", WCS_POSITION),
    FieldDef::new("WcsVelocityX", WCS_VELOCITY),
    FieldDef::new("SpaceAmplify", FieldType::enumerated(4, SPACE_AMPLIFY_NAMES, NoStatement::Zero)),
    FieldDef::new("AmplifyConfidence", FieldType::enumerated(2, AMPLIFY_CONFIDENCE_NAMES, NoStatement::Zero)),
];

const J3_6_E1_FIELDS: &[FieldDef] = &[
    FieldDef::new("IsTrackLost", FLAG),
    FieldDef::new("WcsZ", WCS_POSITION),
    FieldDef::new("WcsVelocityY", WCS_VELOCITY),
    FieldDef::new("WcsVelocityZ", WCS_VELOCITY),
    FieldDef::new("Spare", spare(12)),
];

/// J3.6 Initial word.
pub static J3_6_I: WordDef = WordDef::initial(3, 6, "J3.6I", J3_6_I_FIELDS);
/// J3.6 E0: ECEF X and Y position, X velocity.
pub static J3_6_E0: WordDef = WordDef::extension(3, 6, 0, "J3.6E0", J3_6_E0_FIELDS);
/// J3.6 E1: ECEF Z position, Y and Z velocity.
pub static J3_6_E1: WordDef = WordDef::extension(3, 6, 1, "J3.6E1", J3_6_E1_FIELDS);
/// J3.6 E2: DIS entity identifier.
pub static J3_6_E2: WordDef = WordDef::extension(3, 6, 2, "J3.6E2", DIS_ENTITY_FIELDS);

/// J3.6 Space Track.
pub static J3_6: FamilyDef = FamilyDef {
    family: Family::SpaceTrack,
    name: "Space Track",
    initial: &J3_6_I,
    continuations: &[],
    extensions: &[&J3_6_E0, &J3_6_E1, &J3_6_E2],
};

// ── J3.7 Electronic Warfare Product Information ─────────────────────

const J3_7_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("FixOrBearing", FieldType::enumerated(3, FIX_OR_BEARING_NAMES, NoStatement::Zero)),
    FieldDef::new("EmitterStatus", FieldType::enumerated(3, EMITTER_STATUS_NAMES, NoStatement::Zero)),
    FieldDef::new("Environment", ENVIRONMENT),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("Bearing", BEARING),
    FieldDef::new("Spare", spare(13)),
];

/// J3.7 Initial word.
pub static J3_7_I: WordDef = WordDef::initial(3, 7, "J3.7I", J3_7_I_FIELDS);
/// J3.7 E0: fix position.
pub static J3_7_E0: WordDef = WordDef::extension(3, 7, 0, "J3.7E0", POSITION_EXTENSION_FIELDS);

/// J3.7 Electronic Warfare Product Information.
pub static J3_7: FamilyDef = FamilyDef {
    family: Family::EwProduct,
    name: "Electronic Warfare Product Information",
    initial: &J3_7_I,
    continuations: &[],
    extensions: &[&J3_7_E0],
};
