//! J9 command and J10 weapons coordination and management.

use crate::catalog::{Family, FamilyDef};
use crate::field::{FieldDef, FieldType, NoStatement};
use crate::field_types::*;
use crate::word::WordDef;

const SECOND: FieldType = FieldType::integer(6, NoStatement::Max);

// ── J9.0 Command ────────────────────────────────────────────────────

const J9_0_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("Command", FieldType::enumerated(5, COMMAND_NAMES, NoStatement::Zero)),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new(
        "ReceiptCompliance",
        FieldType::enumerated(5, RECEIPT_COMPLIANCE_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("Spare", spare(12)),
];

const J9_0_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("Hour", HOUR),
    FieldDef::new("Minute", MINUTE),
    FieldDef::new("Second", SECOND),
    FieldDef::new("Altitude", ALTITUDE),
    FieldDef::new("Spare", spare(33)),
];

/// J9.0 Initial word.
pub static J9_0_I: WordDef = WordDef::initial(9, 0, "J9.0I", J9_0_I_FIELDS);
/// J9.0 C1: execution time and altitude.
pub static J9_0_C1: WordDef = WordDef::continuation(9, 0, 1, "J9.0C1", J9_0_C1_FIELDS);

/// J9.0 Command.
pub static J9_0: FamilyDef = FamilyDef {
    family: Family::Command,
    name: "Command",
    initial: &J9_0_I,
    continuations: &[&J9_0_C1],
    extensions: &[],
};

// ── J10.2 Engagement Status ─────────────────────────────────────────

const J10_2_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new(
        "EngagementStatus",
        FieldType::enumerated(4, ENGAGEMENT_STATUS_NAMES, NoStatement::Zero),
    ),
    FieldDef::new("WeaponSystem", FieldType::enumerated(5, WEAPON_SYSTEM_NAMES, NoStatement::Zero)),
    FieldDef::new("FireMethod", FieldType::enumerated(3, FIRE_METHOD_NAMES, NoStatement::Zero)),
    FieldDef::new("Hour", HOUR),
    FieldDef::new("Minute", MINUTE),
    FieldDef::new("Spare", spare(14)),
];

const J10_2_C1_FIELDS: &[FieldDef] = &[
    FieldDef::new("ProbabilityOfKill", FieldType::integer(3, NoStatement::Zero)),
    FieldDef::new("Spare", spare(60)),
];

/// J10.2 Initial word.
pub static J10_2_I: WordDef = WordDef::initial(10, 2, "J10.2I", J10_2_I_FIELDS);
/// J10.2 C1: kill probability.
pub static J10_2_C1: WordDef = WordDef::continuation(10, 2, 1, "J10.2C1", J10_2_C1_FIELDS);

/// J10.2 Engagement Status.
pub static J10_2: FamilyDef = FamilyDef {
    family: Family::EngagementStatus,
    name: "Engagement Status",
    initial: &J10_2_I,
    continuations: &[&J10_2_C1],
    extensions: &[],
};

// ── J10.3 Handover ──────────────────────────────────────────────────

const J10_3_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("HandoverAction", FieldType::enumerated(3, CONTROL_ACTION_NAMES, NoStatement::Zero)),
    FieldDef::new("Spare", spare(19)),
];

/// J10.3 Initial word.
pub static J10_3_I: WordDef = WordDef::initial(10, 3, "J10.3I", J10_3_I_FIELDS);

/// J10.3 Handover.
pub static J10_3: FamilyDef = FamilyDef {
    family: Family::Handover,
    name: "Handover",
    initial: &J10_3_I,
    continuations: &[],
    extensions: &[],
};

// ── J10.5 Controlling Unit Report ───────────────────────────────────

const J10_5_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TrackNumberAddressee", TRACK_NUMBER_ADDRESSEE),
    FieldDef::new("ControlStatus", FieldType::enumerated(3, CONTROL_ACTION_NAMES, NoStatement::Zero)),
    FieldDef::new("Spare", spare(19)),
];

/// J10.5 Initial word.
pub static J10_5_I: WordDef = WordDef::initial(10, 5, "J10.5I", J10_5_I_FIELDS);

/// J10.5 Controlling Unit Report.
pub static J10_5: FamilyDef = FamilyDef {
    family: Family::ControllingUnitReport,
    name: "Controlling Unit Report",
    initial: &J10_5_I,
    continuations: &[],
    extensions: &[],
};

// ── J10.6 Pairing ───────────────────────────────────────────────────

const J10_6_I_FIELDS: &[FieldDef] = &[
    FieldDef::new("ExerciseIndicator", FLAG),
    FieldDef::new("TrackNumber", TRACK_NUMBER),
    FieldDef::new("TargetTrackNumber", TRACK_NUMBER),
    FieldDef::new("WeaponSystem", FieldType::enumerated(5, WEAPON_SYSTEM_NAMES, NoStatement::Zero)),
    FieldDef::new("Spare", spare(13)),
];

/// J10.6 Initial word.
pub static J10_6_I: WordDef = WordDef::initial(10, 6, "J10.6I", J10_6_I_FIELDS);

/// J10.6 Pairing.
pub static J10_6: FamilyDef = FamilyDef {
    family: Family::Pairing,
    name: "Pairing",
    initial: &J10_6_I,
    continuations: &[],
    extensions: &[],
};
