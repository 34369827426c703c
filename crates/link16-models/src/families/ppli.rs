//! J2 precise participant location and identification (PPLI).

use super::{KINEMATIC_EXTENSION_FIELDS, POSITION_EXTENSION_FIELDS};
use crate::catalog::{Family, FamilyDef};
use crate::field::FieldDef;
use crate::field_types::*;
use crate::word::WordDef;

// ── J2.2 Air PPLI ───────────────────────────────────────────────────

const J2_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("NetworkParticipationStatus", PARTICIPATION_STATUS),
    FieldDef::new("IndirectInterfaceUnit", FLAG),
    FieldDef::new("C2Indicator", FLAG),
    FieldDef::new("Spare", spare(5)),
    FieldDef::new("AirPlatform", PLATFORM),
    FieldDef::new("AirPlatformActivity", ACTIVITY),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("PositionQuality", QUALITY),
    FieldDef::new("TimeQuality", QUALITY),
    FieldDef::new("Mode1Code", MODE1),
    FieldDef::new("Spare", spare(6)),
];

const J2_2_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Mode2Code", MODE_CODE),
    FieldDef::new("Mode3Code", MODE_CODE),
    FieldDef::new("Mode4Indicator", MODE4),
    FieldDef::new("Callsign", CALLSIGN),
    FieldDef::new("Spare", spare(13)),
];

const J2_2_C2_FIELDS: &[FieldDef] = &[
    FieldDef::new("FuelRemaining", FUEL),
    FieldDef::new("Hour", HOUR),
    FieldDef::new("Minute", MINUTE),
    FieldDef::new("NetNumber", NET_NUMBER),
    FieldDef::new("Spare", spare(33)),
];

/// J2.2 Initial word.
pub static J2_2_I: WordDef = WordDef::initial(2, 2, "J2.2I", J2_2_I_FIELDS);
/// J2.2 E0: position, course and speed.
pub static J2_2_E0: WordDef = WordDef::extension(2, 2, 0, "J2.2E0", KINEMATIC_EXTENSION_FIELDS);
/// J2.2 C1: IFF codes and callsign.
pub static J2_2_C1: WordDef = WordDef::continuation(2, 2, 1, "J2.2C1", J2_2_C1_FIELDS);
/// J2.2 C2: fuel and time of report.
pub static J2_2_C2: WordDef = WordDef::continuation(2, 2, 2, "J2.2C2", J2_2_C2_FIELDS);

/// J2.2 Air PPLI.
pub static J2_2: FamilyDef = FamilyDef {
    family: Family::PpliAir,
    name: "Air PPLI",
    initial: &J2_2_I,
    continuations: &[&J2_2_C1, &J2_2_C2],
    extensions: &[&J2_2_E0],
};

// ── J2.3 Surface (Maritime) PPLI ────────────────────────────────────

const J2_3_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("NetworkParticipationStatus", PARTICIPATION_STATUS),
    FieldDef::new("IndirectInterfaceUnit", FLAG),
    FieldDef::new("C2Indicator", FLAG),
    FieldDef::new("Spare", spare(5)),
    FieldDef::new("SurfacePlatform", PLATFORM),
    FieldDef::new("SurfacePlatformActivity", ACTIVITY),
    FieldDef::new("PositionQuality", QUALITY),
    FieldDef::new("TimeQuality", QUALITY),
    FieldDef::new("Spare", spare(24)),
];

/// J2.3 Initial word.
pub static J2_3_I: WordDef = WordDef::initial(2, 3, "J2.3I", J2_3_I_FIELDS);
/// J2.3 E0: position, course and speed.
pub static J2_3_E0: WordDef = WordDef::extension(2, 3, 0, "J2.3E0", KINEMATIC_EXTENSION_FIELDS);

/// J2.3 Surface (Maritime) PPLI.
pub static J2_3: FamilyDef = FamilyDef {
    family: Family::PpliSurface,
    name: "Surface (Maritime) PPLI",
    initial: &J2_3_I,
    continuations: &[],
    extensions: &[&J2_3_E0],
};

// ── J2.4 Subsurface (Maritime) PPLI ─────────────────────────────────

const J2_4_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("NetworkParticipationStatus", PARTICIPATION_STATUS),
    FieldDef::new("IndirectInterfaceUnit", FLAG),
    FieldDef::new("C2Indicator", FLAG),
    FieldDef::new("Spare", spare(5)),
    FieldDef::new("SubsurfacePlatform", PLATFORM),
    FieldDef::new("SubsurfacePlatformActivity", ACTIVITY),
    FieldDef::new("PositionQuality", QUALITY),
    FieldDef::new("TimeQuality", QUALITY),
    FieldDef::new("DepthCategory", DEPTH_CATEGORY),
    FieldDef::new("Depth", DEPTH),
    FieldDef::new("Spare", spare(13)),
];

const J2_4_E0_FIELDS: &[FieldDef] = &[
    FieldDef::new("Latitude", LATITUDE),
    FieldDef::new("Longitude", LONGITUDE),
    FieldDef::new("Course", COURSE),
    FieldDef::new("Speed", SPEED_SUBSURFACE),
    FieldDef::new("Spare", spare(7)),
];

/// J2.4 Initial word.
pub static J2_4_I: WordDef = WordDef::initial(2, 4, "J2.4I", J2_4_I_FIELDS);
/// J2.4 E0: position, course and speed.
pub static J2_4_E0: WordDef = WordDef::extension(2, 4, 0, "J2.4E0", J2_4_E0_FIELDS);

/// J2.4 Subsurface (Maritime) PPLI.
pub static J2_4: FamilyDef = FamilyDef {
    family: Family::PpliSubsurface,
    name: "Subsurface (Maritime) PPLI",
    initial: &J2_4_I,
    continuations: &[],
    extensions: &[&J2_4_E0],
};

// ── J2.5 Land (Ground) Point PPLI ───────────────────────────────────

const J2_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("NetworkParticipationStatus", PARTICIPATION_STATUS),
    FieldDef::new("IndirectInterfaceUnit", FLAG),
    FieldDef::new("C2Indicator", FLAG),
    FieldDef::new("Spare", spare(5)),
    FieldDef::new("LandPlatform", PLATFORM),
    FieldDef::new("LandPlatformActivity", ACTIVITY),
    FieldDef::new("PositionQuality", QUALITY),
    FieldDef::new("TimeQuality", QUALITY),
    FieldDef::new("Altitude", ALTITUDE_EXTENDED),
    FieldDef::new("Spare", spare(12)),
];

/// J2.5 Initial word.
pub static J2_5_I: WordDef = WordDef::initial(2, 5, "J2.5I", J2_5_I_FIELDS);
/// J2.5 E0: point position.
pub static J2_5_E0: WordDef = WordDef::extension(2, 5, 0, "J2.5E0", POSITION_EXTENSION_FIELDS);

/// J2.5 Land (Ground) Point PPLI.
pub static J2_5: FamilyDef = FamilyDef {
    family: Family::PpliLandPoint,
    name: "Land (Ground) Point PPLI",
    initial: &J2_5_I,
    continuations: &[],
    extensions: &[&J2_5_E0],
};

// ── J2.6 Land (Ground) Track PPLI ───────────────────────────────────

const J2_6_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("NetworkParticipationStatus", PARTICIPATION_STATUS),
    FieldDef::new("IndirectInterfaceUnit", FLAG),
    FieldDef::new("C2Indicator", FLAG),
    FieldDef::new("Spare", spare(5)),
    FieldDef::new("LandPlatform", PLATFORM),
    FieldDef::new("LandPlatformActivity", ACTIVITY),
    FieldDef::new("PositionQuality", QUALITY),
    FieldDef::new("TimeQuality", QUALITY),
    FieldDef::new("Spare", spare(24)),
];

/// J2.6 Initial word.
pub static J2_6_I: WordDef = WordDef::initial(2, 6, "J2.6I", J2_6_I_FIELDS);
/// J2.6 E0: position, course and speed.
pub static J2_6_E0: WordDef = WordDef::extension(2, 6, 0, "J2.6E0", KINEMATIC_EXTENSION_FIELDS);

/// J2.6 Land (Ground) Track PPLI.
pub static J2_6: FamilyDef = FamilyDef {
    family: Family::PpliLandTrack,
    name: "Land (Ground) Track PPLI",
    initial: &J2_6_I,
    continuations: &[],
    extensions: &[&J2_6_E0],
};
