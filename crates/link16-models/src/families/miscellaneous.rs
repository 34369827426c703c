//! J17 weather, J28 free text and J31 no statement.

use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

// ── J17.0 Weather Over Target ───────────────────────────────────────

const J17_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("WeatherCondition", FieldType::enumerated(3, WEATHER_NAMES, NoStatement::Zero)),
    FieldDef::new("DeltaElevation", DELTA_ELEVATION),
    FieldDef::new("Spare", spare(19)),
];

/// J17.0 Initial word.
pub static J17_0_I: WordDef = WordDef::initial(17, 0, "J17.0I", J17_0_I_FIELDS);

/// J17.0 Weather Over Target.
pub static J17_0: FamilyDef = FamilyDef {
    family: Family::WeatherOverTarget,
    name: "Weather Over Target",
    initial: &J17_0_I,
    continuations: &[],
    extensions: &[],
};

// ── J28.2 Free Text ─────────────────────────────────────────────────

const J28_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("Text0", TEXT),
    FieldDef::new("Text1", TEXT),
];

const J28_2_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Text2", TEXT),
    FieldDef::new("Text3", TEXT),
    FieldDef::new("Spare", spare(7)),
];

/// J28.2 Initial word: the first eight characters.
pub static J28_2_I: WordDef = WordDef::initial(28, 2, "J28.2I", J28_2_I_FIELDS);
/// J28.2 C1: eight more characters.
pub static J28_2_C1: WordDef = WordDef::continuation(28, 2, 1, "J28.2C1", J28_2_C1_FIELDS);

/// J28.2 Free Text.
pub static J28_2: FamilyDef = FamilyDef {
    family: Family::FreeText,
    name: "Free Text",
    initial: &J28_2_I,
    continuations: &[&J28_2_C1],
    extensions: &[],
};

// ── J31.7 No Statement ──────────────────────────────────────────────

const J31_7_I_FIELDS: &[FieldDef] = &[FieldDef::new("Spare", spare(57))];

/// J31.7 Initial word.
pub static J31_7_I: WordDef = WordDef::initial(31, 7, "J31.7I", J31_7_I_FIELDS);

/// J31.7 No Statement.
pub static J31_7: FamilyDef = FamilyDef {
    family: Family::NoStatement,
    name: "No Statement",
    initial: &J31_7_I,
    continuations: &[],
    extensions: &[],
};
