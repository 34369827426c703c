//! J13 platform and system status.

use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

const OPERATIONAL_CAPABILITY: FieldType =
    FieldType::enumerated(4, OPERATIONAL_CAPABILITY_NAMES, NoStatement::Zero);

// ── J13.2 Air Platform and System Status ────────────────────────────

const J13_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("AirPlatform", PLATFORM),
    FieldDef::new("FuelRemaining", FUEL),
    FieldDef::new("OperationalCapability", OPERATIONAL_CAPABILITY),
    FieldDef::new("Hour", HOUR),
    FieldDef::new("Minute", MINUTE),
    FieldDef::new("Spare", spare(23)),
];

const J13_2_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Callsign", CALLSIGN),
    FieldDef::new("Spare", spare(39)),
];

/// J13.2 Initial word.
pub static J13_2_I: WordDef = WordDef::initial(13, 2, "J13.2I", J13_2_I_FIELDS);
/// J13.2 C1: callsign.
pub static J13_2_C1: WordDef = WordDef::continuation(13, 2, 1, "J13.2C1", J13_2_C1_FIELDS);

/// J13.2 Air Platform and System Status.
pub static J13_2: FamilyDef = FamilyDef {
    family: Family::AirPlatformStatus,
    name: "Air Platform and System Status",
    initial: &J13_2_I,
    continuations: &[&J13_2_C1],
    extensions: &[],
};

// ── J13.3 Surface Platform and System Status ────────────────────────

const J13_3_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("SurfacePlatform", PLATFORM),
    FieldDef::new("OperationalCapability", OPERATIONAL_CAPABILITY),
    FieldDef::new("Spare", spare(46)),
];

/// J13.3 Initial word.
pub static J13_3_I: WordDef = WordDef::initial(13, 3, "J13.3I", J13_3_I_FIELDS);

/// J13.3 Surface (Maritime) Platform and System Status.
pub static J13_3: FamilyDef = FamilyDef {
    family: Family::SurfacePlatformStatus,
    name: "Surface (Maritime) Platform and System Status",
    initial: &J13_3_I,
    continuations: &[],
    extensions: &[],
};

// ── J13.4 Subsurface Platform and System Status ─────────────────────

const J13_4_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("SubsurfacePlatform", PLATFORM),
    FieldDef::new("OperationalCapability", OPERATIONAL_CAPABILITY),
    FieldDef::new("Depth", DEPTH),
    FieldDef::new("Spare", spare(39)),
];

/// J13.4 Initial word.
pub static J13_4_I: WordDef = WordDef::initial(13, 4, "J13.4I", J13_4_I_FIELDS);

/// J13.4 Subsurface (Maritime) Platform and System Status.
pub static J13_4: FamilyDef = FamilyDef {
    family: Family::SubsurfacePlatformStatus,
    name: "Subsurface (Maritime) Platform and System Status",
    initial: &J13_4_I,
    continuations: &[],
    extensions: &[],
};

// ── J13.5 Land Platform and System Status ───────────────────────────

const J13_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("LandPlatform", PLATFORM),
    FieldDef::new("OperationalCapability", OPERATIONAL_CAPABILITY),
    FieldDef::new("Spare", spare(46)),
];

/// J13.5 Initial word.
pub static J13_5_I: WordDef = WordDef::initial(13, 5, "J13.5I", J13_5_I_FIELDS);

/// J13.5 Land (Ground) Platform and System Status.
pub static J13_5: FamilyDef = FamilyDef {
    family: Family::LandPlatformStatus,
    name: "Land (Ground) Platform and System Status",
    initial: &J13_5_I,
    continuations: &[],
    extensions: &[],
};
