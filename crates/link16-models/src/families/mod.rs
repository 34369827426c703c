//! # Message family tables
//!
//! One module per functional area. Each family declares its Initial word,
//! its legal Continuation and Extension words, and a [`FamilyDef`] tying
//! them together; [`crate::catalog::MESSAGE_CATALOG`] lists every family.
//!
//! | Module | Families |
//! |--------|----------|
//! | [`ppli`] | J2.2 - J2.6 precise participant location and identification |
//! | [`surveillance`] | J3.0 - J3.7 points and tracks |
//! | [`information_management`] | J7.0 - J7.5 |
//! | [`weapons_coordination`] | J9.0, J10.2, J10.3, J10.5, J10.6 |
//! | [`network_weapons`] | J11.0 - J11.2 network enabled weapons |
//! | [`control`] | J12.0, J12.1, J12.4 - J12.6 |
//! | [`platform_status`] | J13.2 - J13.5 |
//! | [`electronic_warfare`] | J14.0, J14.2, J15.0 |
//! | [`miscellaneous`] | J17.0, J28.2, J31.7 |
//!
//! Field names are shared across families where the meaning is shared
//! (`Latitude`, `Speed`, `TrackNumber`...); the track facade relies on that.
//!
//! [`FamilyDef`]: crate::catalog::FamilyDef

pub mod control;
pub mod electronic_warfare;
pub mod information_management;
pub mod miscellaneous;
pub mod network_weapons;
pub mod platform_status;
pub mod ppli;
pub mod surveillance;
pub mod weapons_coordination;

use crate::field::FieldDef;
use crate::field_types::{spare, COURSE, DIS_NUMBER, LATITUDE, LONGITUDE, SPEED};

/// Position, course and speed; shared by the E0 word of most track
/// and PPLI families.
pub(crate) const KINEMATIC_EXTENSION_FIELDS: &[FieldDef] = &[
    FieldDef::new("Latitude", LATITUDE),
    FieldDef::new("Longitude", LONGITUDE),
    FieldDef::new("Course", COURSE),
    FieldDef::new("Speed", SPEED),
    FieldDef::new("Spare", spare(5)),
];

/// Position only.
pub(crate) const POSITION_EXTENSION_FIELDS: &[FieldDef] = &[
    FieldDef::new("Latitude", LATITUDE),
    FieldDef::new("Longitude", LONGITUDE),
    FieldDef::new("Spare", spare(25)),
];

/// DIS entity identifier carried alongside a Link-16 track.
pub(crate) const DIS_ENTITY_FIELDS: &[FieldDef] = &[
    FieldDef::new("DisSite", DIS_NUMBER),
    FieldDef::new("DisApplication", DIS_NUMBER),
    FieldDef::new("DisEntity", DIS_NUMBER),
    FieldDef::new("Spare", spare(20)),
];
