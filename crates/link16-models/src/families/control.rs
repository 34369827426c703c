//! J12 control: mission assignment, vectoring, control changes and
//! target sorting.

use super::{KINEMATIC_EXTENSION_FIELDS, POSITION_EXTENSION_FIELDS};
use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

// ── J12.0 Mission Assignment ────────────────────────────────────────

const J12_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("MissionAssignment", FieldType::integer(6, NoStatement::Zero)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Spare", spare(16)),
];

const J12_0_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Speed", SPEED),
    FieldDef::new("Course", COURSE),
    FieldDef::new("Spare", spare(30)),
];

/// J12.0 Initial word.
pub static J12_0_I: WordDef = WordDef::initial(12, 0, "J12.0I", J12_0_I_FIELDS);
/// J12.0 E0: objective position.
pub static J12_0_E0: WordDef = WordDef::extension(12, 0, 0, "J12.0E0", POSITION_EXTENSION_FIELDS);
/// J12.0 C1: ordered altitude, speed and course.
pub static J12_0_C1: WordDef = WordDef::continuation(12, 0, 1, "J12.0C1", J12_0_C1_FIELDS);

/// J12.0 Mission Assignment.
pub static J12_0: FamilyDef = FamilyDef {
    family: Family::MissionAssignment,
    name: "Mission Assignment",
    initial: &J12_0_I,
    continuations: &[&J12_0_C1],
    extensions: &[&J12_0_E0],
};

// ── J12.1 Vector ────────────────────────────────────────────────────

const J12_1_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("VectorType", FieldType::enumerated(3, VECTOR_NAMES, NoStatement::Zero)),
    FieldDef::new("Course", COURSE),
    FieldDef::new("Speed", SPEED),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Spare", spare(5)),
];

/// J12.1 Initial word.
pub static J12_1_I: WordDef = WordDef::initial(12, 1, "J12.1I", J12_1_I_FIELDS);

/// J12.1 Vector.
pub static J12_1: FamilyDef = FamilyDef {
    family: Family::Vector,
    name: "Vector",
    initial: &J12_1_I,
    continuations: &[],
    extensions: &[],
};

// ── J12.4 Controlling Unit Change ───────────────────────────────────

const J12_4_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("TrackNumberController", TRACK_NUMBER),
    FieldDef::new("NetNumber", NET_NUMBER),
    FieldDef::new("Spare", spare(15)),
];

/// J12.4 Initial word.
pub static J12_4_I: WordDef = WordDef::initial(12, 4, "J12.4I", J12_4_I_FIELDS);

/// J12.4 Controlling Unit Change.
pub static J12_4: FamilyDef = FamilyDef {
    family: Family::ControllingUnitChange,
    name: "Controlling Unit Change",
    initial: &J12_4_I,
    continuations: &[],
    extensions: &[],
};

// ── J12.5 Target/Track Sorting ──────────────────────────────────────

const J12_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("SortingAction", FieldType::enumerated(3, SORTING_NAMES, NoStatement::Zero)),
    FieldDef::new("Spare", spare(19)),
];

/// J12.5 Initial word.
pub static J12_5_I: WordDef = WordDef::initial(12, 5, "J12.5I", J12_5_I_FIELDS);

/// J12.5 Target/Track Sorting.
pub static J12_5: FamilyDef = FamilyDef {
    family: Family::TargetTrackSorting,
    name: "Target/Track Sorting",
    initial: &J12_5_I,
    continuations: &[],
    extensions: &[],
};

// ── J12.6 Target Sorting ────────────────────────────────────────────

const J12_6_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Environment", ENVIRONMENT),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("Strength", STRENGTH),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Spare", spare(14)),
];

/// J12.6 Initial word.
pub static J12_6_I: WordDef = WordDef::initial(12, 6, "J12.6I", J12_6_I_FIELDS);
/// J12.6 E0: target position, course and speed.
pub static J12_6_E0: WordDef = WordDef::extension(12, 6, 0, "J12.6E0", KINEMATIC_EXTENSION_FIELDS);

/// J12.6 Target Sorting.
pub static J12_6: FamilyDef = FamilyDef {
    family: Family::TargetSorting,
    name: "Target Sorting",
    initial: &J12_6_I,
    continuations: &[],
    extensions: &[&J12_6_E0],
};
