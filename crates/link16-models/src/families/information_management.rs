//! J7 information management: track management, update requests,
//! correlation, pointers, identifiers and IFF management.

use super::POSITION_EXTENSION_FIELDS;
use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

// ── J7.0 Track Management ───────────────────────────────────────────

const J7_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new(
        "ActionTrackManagement",
        FieldType::enumerated(3, TRACK_MGMT_ACTION_NAMES, NoStatement::None),
    ),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Environment", ENVIRONMENT),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("Strength", STRENGTH),
    FieldDef::new("Spare", spare(24)),
];

/// J7.0 Initial word.
pub static J7_0_I: WordDef = WordDef::initial(7, 0, "J7.0I", J7_0_I_FIELDS);

/// J7.0 Track Management.
pub static J7_0: FamilyDef = FamilyDef {
    family: Family::TrackManagement,
    name: "Track Management",
    initial: &J7_0_I,
    continuations: &[],
    extensions: &[],
};

// ── J7.1 Data Update Request ────────────────────────────────────────

const J7_1_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("Action", FieldType::enumerated(3, UPDATE_REQUEST_NAMES, NoStatement::Zero)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("Spare", spare(19)),
];

/// J7.1 Initial word.
pub static J7_1_I: WordDef = WordDef::initial(7, 1, "J7.1I", J7_1_I_FIELDS);

/// J7.1 Data Update Request.
pub static J7_1: FamilyDef = FamilyDef {
    family: Family::DataUpdateRequest,
    name: "Data Update Request",
    initial: &J7_1_I,
    continuations: &[],
    extensions: &[],
};

// ── J7.2 Correlation ────────────────────────────────────────────────

const J7_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("CorrelationAction", FieldType::enumerated(2, CORRELATION_NAMES, NoStatement::None)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackNumberDropped", TRACK_NUMBER),
    FieldDef::new("Spare", spare(16)),
];

/// J7.2 Initial word.
pub static J7_2_I: WordDef = WordDef::initial(7, 2, "J7.2I", J7_2_I_FIELDS);

/// J7.2 Correlation.
pub static J7_2: FamilyDef = FamilyDef {
    family: Family::Correlation,
    name: "Correlation",
    initial: &J7_2_I,
    continuations: &[],
    extensions: &[],
};

// ── J7.3 Pointer ────────────────────────────────────────────────────

const J7_3_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("PointerAction", FieldType::enumerated(3, POINTER_NAMES, NoStatement::Zero)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Spare", spare(21)),
];

/// J7.3 Initial word.
pub static J7_3_I: WordDef = WordDef::initial(7, 3, "J7.3I", J7_3_I_FIELDS);
/// J7.3 E0: pointer position.
pub static J7_3_E0: WordDef = WordDef::extension(7, 3, 0, "J7.3E0", POSITION_EXTENSION_FIELDS);

/// J7.3 Pointer.
pub static J7_3: FamilyDef = FamilyDef {
    family: Family::Pointer,
    name: "Pointer",
    initial: &J7_3_I,
    continuations: &[],
    extensions: &[&J7_3_E0],
};

// ── J7.4 Track Identifier ───────────────────────────────────────────

const J7_4_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Identity", IDENTITY),
    FieldDef::new("IdentityAmplify", IDENTITY_AMPLIFY),
    FieldDef::new("Environment", ENVIRONMENT),
    FieldDef::new("SpecificType", SPECIFIC_TYPE),
    FieldDef::new("Spare", spare(16)),
];

/// J7.4 Initial word.
pub static J7_4_I: WordDef = WordDef::initial(7, 4, "J7.4I", J7_4_I_FIELDS);

/// J7.4 Track Identifier.
pub static J7_4: FamilyDef = FamilyDef {
    family: Family::TrackIdentifier,
    name: "Track Identifier",
    initial: &J7_4_I,
    continuations: &[],
    extensions: &[],
};

// ── J7.5 IFF/SIF Management ─────────────────────────────────────────

const J7_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("Mode1Code", MODE1),
    FieldDef::new("Mode2Code", MODE_CODE),
    FieldDef::new("Mode3Code", MODE_CODE),
    FieldDef::new("Spare", spare(8)),
];

/// J7.5 Initial word.
pub static J7_5_I: WordDef = WordDef::initial(7, 5, "J7.5I", J7_5_I_FIELDS);

/// J7.5 IFF/SIF Management.
pub static J7_5: FamilyDef = FamilyDef {
    family: Family::IffManagement,
    name: "IFF/SIF Management",
    initial: &J7_5_I,
    continuations: &[],
    extensions: &[],
};
