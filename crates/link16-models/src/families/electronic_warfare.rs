//! J14 electronic warfare and J15 threat warning.

use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

// ── J14.0 Parametric Information ────────────────────────────────────

const J14_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("EmitterStatus", FieldType::enumerated(3, EMITTER_STATUS_NAMES, NoStatement::Zero)),
    FieldDef::new("Environment", ENVIRONMENT),
    FieldDef::new("Spare", spare(31)),
];

const J14_0_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Bearing", BEARING),
    FieldDef::new("ElevationAngle", ELEVATION_ANGLE),
    FieldDef::new("Spare", spare(36)),
];

/// J14.0 Initial word.
pub static J14_0_I: WordDef = WordDef::initial(14, 0, "J14.0I", J14_0_I_FIELDS);
/// J14.0 C1: emitter line of bearing.
pub static J14_0_C1: WordDef = WordDef::continuation(14, 0, 1, "J14.0C1", J14_0_C1_FIELDS);

/// J14.0 Parametric Information.
pub static J14_0: FamilyDef = FamilyDef {
    family: Family::ParametricInformation,
    name: "Parametric Information",
    initial: &J14_0_I,
    continuations: &[&J14_0_C1],
    extensions: &[],
};

// ── J14.2 Electronic Warfare Control/Coordination ───────────────────

const J14_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("EwAction", FieldType::enumerated(3, EW_ACTION_NAMES, NoStatement::Zero)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Spare", spare(19)),
];

/// J14.2 Initial word.
pub static J14_2_I: WordDef = WordDef::initial(14, 2, "J14.2I", J14_2_I_FIELDS);

/// J14.2 Electronic Warfare Control/Coordination.
pub static J14_2: FamilyDef = FamilyDef {
    family: Family::EwCoordination,
    name: "Electronic Warfare Control/Coordination",
    initial: &J14_2_I,
    continuations: &[],
    extensions: &[],
};

// ── J15.0 Threat Warning ────────────────────────────────────────────

const J15_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("ThreatPosture", FieldType::enumerated(3, THREAT_POSTURE_NAMES, NoStatement::Zero)),
    FieldDef::new("ThreatEnvironment", ENVIRONMENT),
    FieldDef::new("Bearing", BEARING),
    FieldDef::new("Spare", spare(19)),
];

/// J15.0 Initial word.
pub static J15_0_I: WordDef = WordDef::initial(15, 0, "J15.0I", J15_0_I_FIELDS);

/// J15.0 Threat Warning.
pub static J15_0: FamilyDef = FamilyDef {
    family: Family::ThreatWarning,
    name: "Threat Warning",
    initial: &J15_0_I,
    continuations: &[],
    extensions: &[],
};
