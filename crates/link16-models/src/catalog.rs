//! # Message catalog
//!
//! The fixed table of message families, keyed by `label * 100 + sublabel`.
//!
//! [`MESSAGE_CATALOG`] is sorted by key and never changes at runtime.
//! [`Family`] names each entry; [`FamilyDef`] holds its word definitions and
//! therefore its legal continuation and extension numbers.
//!
//! ```
//! use link16_models::{find_family, Family};
//!
//! let air = find_family(3, 2).unwrap();
//! assert_eq!(air.family, Family::AirTrack);
//! assert_eq!(air.family.to_string(), "J3.2");
//! assert!(find_family(99, 0).is_none());
//! ```

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};

use crate::families::{
    control, electronic_warfare, information_management, miscellaneous, network_weapons,
    platform_status, ppli, surveillance, weapons_coordination,
};
use crate::message::Message;
use crate::word::{WordDef, WordKind};

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// Every message family the codec knows, displayed and parsed as `J<label>.<sublabel>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum Family {
    /// J2.2 Air PPLI.
    #[strum(to_string = "J2.2")]
    PpliAir,
    /// J2.3 Surface (Maritime) PPLI.
    #[strum(to_string = "J2.3")]
    PpliSurface,
    /// J2.4 Subsurface (Maritime) PPLI.
    #[strum(to_string = "J2.4")]
    PpliSubsurface,
    /// J2.5 Land (Ground) Point PPLI.
    #[strum(to_string = "J2.5")]
    PpliLandPoint,
    /// J2.6 Land (Ground) Track PPLI.
    #[strum(to_string = "J2.6")]
    PpliLandTrack,
    /// J3.0 Reference Point.
    #[strum(to_string = "J3.0")]
    ReferencePoint,
    /// J3.1 Emergency Point.
    #[strum(to_string = "J3.1")]
    EmergencyPoint,
    /// J3.2 Air Track.
    #[strum(to_string = "J3.2")]
    AirTrack,
    /// J3.3 Surface (Maritime) Track.
    #[strum(to_string = "J3.3")]
    SurfaceTrack,
    /// J3.4 Subsurface (Maritime) Track.
    #[strum(to_string = "J3.4")]
    SubsurfaceTrack,
    /// J3.5 Land (Ground) Point/Track.
    #[strum(to_string = "J3.5")]
    LandTrack,
    /// J3.6 Space Track.
    #[strum(to_string = "J3.6")]
    SpaceTrack,
    /// J3.7 Electronic Warfare Product Information.
    #[strum(to_string = "J3.7")]
    EwProduct,
    /// J7.0 Track Management.
    #[strum(to_string = "J7.0")]
    TrackManagement,
    /// J7.1 Data Update Request.
    #[strum(to_string = "J7.1")]
    DataUpdateRequest,
    /// J7.2 Correlation.
    #[strum(to_string = "J7.2")]
    Correlation,
    /// J7.3 Pointer.
    #[strum(to_string = "J7.3")]
    Pointer,
    /// J7.4 Track Identifier.
    #[strum(to_string = "J7.4")]
    TrackIdentifier,
    /// J7.5 IFF/SIF Management.
    #[strum(to_string = "J7.5")]
    IffManagement,
    /// J9.0 Command.
    #[strum(to_string = "J9.0")]
    Command,
    /// J10.2 Engagement Status.
    #[strum(to_string = "J10.2")]
    EngagementStatus,
    /// J10.3 Handover.
    #[strum(to_string = "J10.3")]
    Handover,
    /// J10.5 Controlling Unit Report.
    #[strum(to_string = "J10.5")]
    ControllingUnitReport,
    /// J10.6 Pairing.
    #[strum(to_string = "J10.6")]
    Pairing,
    /// J11.0 Weapon Response / In-Flight Target Update.
    #[strum(to_string = "J11.0")]
    WeaponResponse,
    /// J11.1 Weapon Directive.
    #[strum(to_string = "J11.1")]
    WeaponDirective,
    /// J11.2 Weapon Coordination and Management.
    #[strum(to_string = "J11.2")]
    WeaponCoordination,
    /// J12.0 Mission Assignment.
    #[strum(to_string = "J12.0")]
    MissionAssignment,
    /// J12.1 Vector.
    #[strum(to_string = "J12.1")]
    Vector,
    /// J12.4 Controlling Unit Change.
    #[strum(to_string = "J12.4")]
    ControllingUnitChange,
    /// J12.5 Target/Track Sorting.
    #[strum(to_string = "J12.5")]
    TargetTrackSorting,
    /// J12.6 Target Sorting.
    #[strum(to_string = "J12.6")]
    TargetSorting,
    /// J13.2 Air Platform and System Status.
    #[strum(to_string = "J13.2")]
    AirPlatformStatus,
    /// J13.3 Surface Platform and System Status.
    #[strum(to_string = "J13.3")]
    SurfacePlatformStatus,
    /// J13.4 Subsurface Platform and System Status.
    #[strum(to_string = "J13.4")]
    SubsurfacePlatformStatus,
    /// J13.5 Land Platform and System Status.
    #[strum(to_string = "J13.5")]
    LandPlatformStatus,
    /// J14.0 Parametric Information.
    #[strum(to_string = "J14.0")]
    ParametricInformation,
    /// J14.2 Electronic Warfare Control/Coordination.
    #[strum(to_string = "J14.2")]
    EwCoordination,
    /// J15.0 Threat Warning.
    #[strum(to_string = "J15.0")]
    ThreatWarning,
    /// J17.0 Weather Over Target.
    #[strum(to_string = "J17.0")]
    WeatherOverTarget,
    /// J28.2 Free Text.
    #[strum(to_string = "J28.2")]
    FreeText,
    /// J31.7 No Statement.
    #[strum(to_string = "J31.7")]
    NoStatement,
}

impl Family {
    /// The family's definition.
    pub fn def(self) -> &'static FamilyDef {
        match self {
            Family::PpliAir => &ppli::J2_2,
            Family::PpliSurface => &ppli::J2_3,
            Family::PpliSubsurface => &ppli::J2_4,
            Family::PpliLandPoint => &ppli::J2_5,
            Family::PpliLandTrack => &ppli::J2_6,
            Family::ReferencePoint => &surveillance::J3_0,
            Family::EmergencyPoint => &surveillance::J3_1,
            Family::AirTrack => &surveillance::J3_2,
            Family::SurfaceTrack => &surveillance::J3_3,
            Family::SubsurfaceTrack => &surveillance::J3_4,
            Family::LandTrack => &surveillance::J3_5,
            Family::SpaceTrack => &surveillance::J3_6,
            Family::EwProduct => &surveillance::J3_7,
            Family::TrackManagement => &information_management::J7_0,
            Family::DataUpdateRequest => &information_management::J7_1,
            Family::Correlation => &information_management::J7_2,
            Family::Pointer => &information_management::J7_3,
            Family::TrackIdentifier => &information_management::J7_4,
            Family::IffManagement => &information_management::J7_5,
            Family::Command => &weapons_coordination::J9_0,
            Family::EngagementStatus => &weapons_coordination::J10_2,
            Family::Handover => &weapons_coordination::J10_3,
            Family::ControllingUnitReport => &weapons_coordination::J10_5,
            Family::Pairing => &weapons_coordination::J10_6,
            Family::WeaponResponse => &network_weapons::J11_0,
            Family::WeaponDirective => &network_weapons::J11_1,
            Family::WeaponCoordination => &network_weapons::J11_2,
            Family::MissionAssignment => &control::J12_0,
            Family::Vector => &control::J12_1,
            Family::ControllingUnitChange => &control::J12_4,
            Family::TargetTrackSorting => &control::J12_5,
            Family::TargetSorting => &control::J12_6,
            Family::AirPlatformStatus => &platform_status::J13_2,
            Family::SurfacePlatformStatus => &platform_status::J13_3,
            Family::SubsurfacePlatformStatus => &platform_status::J13_4,
            Family::LandPlatformStatus => &platform_status::J13_5,
            Family::ParametricInformation => &electronic_warfare::J14_0,
            Family::EwCoordination => &electronic_warfare::J14_2,
            Family::ThreatWarning => &electronic_warfare::J15_0,
            Family::WeatherOverTarget => &miscellaneous::J17_0,
            Family::FreeText => &miscellaneous::J28_2,
            Family::NoStatement => &miscellaneous::J31_7,
        }
    }

    /// `(label, sublabel)`.
    pub fn label(self) -> (u8, u8) {
        self.def().label()
    }

    /// Catalog key, `label * 100 + sublabel`.
    pub fn key(self) -> u16 {
        self.def().key()
    }

    /// Look a family up by `(label, sublabel)`.
    pub fn from_label(label: u8, sublabel: u8) -> Option<Self> {
        find_family(label, sublabel).map(|def| def.family)
    }

    /// `true` for the J3 families read through the track facade.
    pub fn is_track(self) -> bool {
        matches!(
            self,
            Family::AirTrack
                | Family::SurfaceTrack
                | Family::SubsurfaceTrack
                | Family::LandTrack
                | Family::SpaceTrack
        )
    }
}

impl Serialize for Family {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Family definitions
// ---------------------------------------------------------------------------

/// Static description of one message family.
///
/// The legal continuation and extension numbers are exactly those of the
/// words listed in `continuations` and `extensions`.
#[derive(Debug)]
pub struct FamilyDef {
    /// Which family this is.
    pub family: Family,
    /// Published family title.
    pub name: &'static str,
    /// Initial word layout.
    pub initial: &'static WordDef,
    /// Continuation word layouts, ascending by number.
    pub continuations: &'static [&'static WordDef],
    /// Extension word layouts, ascending by number.
    pub extensions: &'static [&'static WordDef],
}

impl FamilyDef {
    /// `(label, sublabel)`.
    pub fn label(&self) -> (u8, u8) {
        (self.initial.label, self.initial.sublabel)
    }

    /// Catalog key, `label * 100 + sublabel`.
    pub fn key(&self) -> u16 {
        self.initial.key()
    }

    /// Layout of continuation `number`, if the family declares it.
    pub fn continuation(&self, number: u8) -> Option<&'static WordDef> {
        self.continuations
            .iter()
            .copied()
            .find(|def| def.kind == WordKind::Continuation(number))
    }

    /// Layout of extension `number`, if the family declares it.
    pub fn extension(&self, number: u8) -> Option<&'static WordDef> {
        self.extensions
            .iter()
            .copied()
            .find(|def| def.kind == WordKind::Extension(number))
    }

    /// Layout of any word kind of the family.
    pub fn word(&self, kind: WordKind) -> Option<&'static WordDef> {
        match kind {
            WordKind::Initial => Some(self.initial),
            WordKind::Continuation(n) => self.continuation(n),
            WordKind::Extension(n) => self.extension(n),
        }
    }

    /// Legal continuation numbers.
    pub fn continuation_numbers(&self) -> Vec<u8> {
        self.continuations.iter().filter_map(|d| d.kind.number()).collect()
    }

    /// Legal extension numbers.
    pub fn extension_numbers(&self) -> Vec<u8> {
        self.extensions.iter().filter_map(|d| d.kind.number()).collect()
    }

    /// Serializable overview for listings and JSON export.
    pub fn summary(&self) -> FamilySummary {
        FamilySummary {
            family: self.family,
            key: self.key(),
            name: self.name,
            continuations: self.continuation_numbers(),
            extensions: self.extension_numbers(),
        }
    }
}

/// One catalog entry, as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    /// `J<label>.<sublabel>`.
    pub family: Family,
    /// Catalog key.
    pub key: u16,
    /// Published family title.
    pub name: &'static str,
    /// Legal continuation numbers.
    pub continuations: Vec<u8>,
    /// Legal extension numbers.
    pub extensions: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Every family, sorted by key.
pub static MESSAGE_CATALOG: &[&FamilyDef] = &[
    &ppli::J2_2,
    &ppli::J2_3,
    &ppli::J2_4,
    &ppli::J2_5,
    &ppli::J2_6,
    &surveillance::J3_0,
    &surveillance::J3_1,
    &surveillance::J3_2,
    &surveillance::J3_3,
    &surveillance::J3_4,
    &surveillance::J3_5,
    &surveillance::J3_6,
    &surveillance::J3_7,
    &information_management::J7_0,
    &information_management::J7_1,
    &information_management::J7_2,
    &information_management::J7_3,
    &information_management::J7_4,
    &information_management::J7_5,
    &weapons_coordination::J9_0,
    &weapons_coordination::J10_2,
    &weapons_coordination::J10_3,
    &weapons_coordination::J10_5,
    &weapons_coordination::J10_6,
    &network_weapons::J11_0,
    &network_weapons::J11_1,
    &network_weapons::J11_2,
    &control::J12_0,
    &control::J12_1,
    &control::J12_4,
    &control::J12_5,
    &control::J12_6,
    &platform_status::J13_2,
    &platform_status::J13_3,
    &platform_status::J13_4,
    &platform_status::J13_5,
    &electronic_warfare::J14_0,
    &electronic_warfare::J14_2,
    &electronic_warfare::J15_0,
    &miscellaneous::J17_0,
    &miscellaneous::J28_2,
    &miscellaneous::J31_7,
];

/// Look up a family by catalog key.
pub fn find_family_by_key(key: u16) -> Option<&'static FamilyDef> {
    MESSAGE_CATALOG
        .binary_search_by_key(&key, |def| def.key())
        .ok()
        .map(|i| MESSAGE_CATALOG[i])
}

/// Look up a family by `(label, sublabel)`.
pub fn find_family(label: u8, sublabel: u8) -> Option<&'static FamilyDef> {
    find_family_by_key(u16::from(label) * 100 + u16::from(sublabel))
}

/// Overview of the whole catalog.
pub fn catalog_summary() -> Vec<FamilySummary> {
    MESSAGE_CATALOG.iter().map(|def| def.summary()).collect()
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Family-specific consumer of decoded messages.
///
/// Closures taking `(Family, &Message)` implement it directly.
pub trait MessageHandler {
    /// Called once per dispatched message with its resolved family.
    fn handle(&mut self, family: Family, message: &Message);
}

impl<F> MessageHandler for F
where
    F: FnMut(Family, &Message),
{
    fn handle(&mut self, family: Family, message: &Message) {
        self(family, message);
    }
}

/// Route a message to `handler` by the catalog key of its Initial word.
///
/// Returns `false`, without calling the handler, when the key has no entry
/// or the Initial word's layout is not the one registered under the key.
///
/// ```
/// use link16_models::{dispatch, Family, Message};
///
/// let message = Message::for_family(Family::AirTrack);
/// let mut seen = Vec::new();
/// assert!(dispatch(&message, &mut |family: Family, _: &Message| seen.push(family)));
/// assert_eq!(seen, [Family::AirTrack]);
/// ```
pub fn dispatch<H: MessageHandler + ?Sized>(message: &Message, handler: &mut H) -> bool {
    match find_family_by_key(message.key()) {
        Some(def) if std::ptr::eq(def.initial, message.initial().def()) => {
            handler.handle(def.family, message);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDef;
    use crate::field_types::spare;
    use strum::IntoEnumIterator;

    const UNREGISTERED_FIELDS: &[FieldDef] = &[FieldDef::new("Spare", spare(57))];
    static UNREGISTERED: WordDef = WordDef::initial(31, 0, "J31.0I", UNREGISTERED_FIELDS);

    // -- Catalog ---------------------------------------------------------------

    #[test]
    fn catalog_is_sorted_and_unique() {
        assert!(MESSAGE_CATALOG.windows(2).all(|w| w[0].key() < w[1].key()));
        assert_eq!(MESSAGE_CATALOG.len(), Family::iter().count());
    }

    #[test]
    fn every_family_resolves_to_itself() {
        for family in Family::iter() {
            let def = family.def();
            assert_eq!(def.family, family);
            let (label, sublabel) = def.label();
            assert_eq!(family.to_string(), format!("J{label}.{sublabel}"));
            assert!(std::ptr::eq(find_family(label, sublabel).unwrap(), def));
            assert_eq!(family.to_string().parse::<Family>().unwrap(), family);
        }
    }

    #[test]
    fn sub_words_belong_to_their_family() {
        for def in MESSAGE_CATALOG {
            let label = def.label();
            assert_eq!(def.initial.kind, WordKind::Initial);
            for word in def.continuations {
                assert_eq!((word.label, word.sublabel), label, "{}", word.name);
                assert!(matches!(word.kind, WordKind::Continuation(_)), "{}", word.name);
            }
            for (position, word) in def.extensions.iter().enumerate() {
                assert_eq!((word.label, word.sublabel), label, "{}", word.name);
                assert_eq!(word.kind, WordKind::Extension(position as u8), "{}", word.name);
            }
            let numbers = def.continuation_numbers();
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{}", def.family);
        }
    }

    #[test]
    fn word_names_follow_family_and_kind() {
        for def in MESSAGE_CATALOG {
            let words = std::iter::once(def.initial)
                .chain(def.continuations.iter().copied())
                .chain(def.extensions.iter().copied());
            for word in words {
                assert_eq!(word.name, format!("{}{}", def.family, word.kind));
            }
        }
    }

    #[test]
    fn weapon_response_legal_continuations() {
        let def = Family::WeaponResponse.def();
        assert_eq!(
            def.continuation_numbers(),
            [1, 2, 3, 4, 5, 9, 13, 14, 15, 16, 17, 18]
        );
        assert!(def.continuation(6).is_none());
        assert_eq!(def.continuation(9).unwrap().name, "J11.0C9");
        assert_eq!(def.extension_numbers(), [0]);
    }

    #[test]
    fn unknown_keys_are_absent() {
        assert!(find_family(99, 0).is_none());
        assert!(find_family_by_key(400).is_none());
        assert_eq!(Family::from_label(3, 6), Some(Family::SpaceTrack));
        assert_eq!(Family::from_label(4, 0), None);
    }

    #[test]
    fn summary_serializes_family_name() {
        let json = serde_json::to_value(Family::AirTrack.def().summary()).unwrap();
        assert_eq!(json["family"], "J3.2");
        assert_eq!(json["key"], 302);
        assert_eq!(json["continuations"], serde_json::json!([1]));
        assert_eq!(json["extensions"], serde_json::json!([0, 1]));
        assert_eq!(catalog_summary().len(), MESSAGE_CATALOG.len());
    }

    // -- Dispatch --------------------------------------------------------------

    #[test]
    fn dispatch_air_track_calls_handler_once() {
        let message = Message::new(&surveillance::J3_2_I);
        let mut calls = Vec::new();
        let mut handler = |family: Family, m: &Message| calls.push((family, m.key()));
        assert!(dispatch(&message, &mut handler));
        assert_eq!(calls, [(Family::AirTrack, 302)]);
    }

    #[test]
    fn dispatch_unregistered_key_is_a_no_op() {
        struct Counter(usize);
        impl MessageHandler for Counter {
            fn handle(&mut self, _: Family, _: &Message) {
                self.0 += 1;
            }
        }

        let message = Message::new(&UNREGISTERED);
        let mut counter = Counter(0);
        assert!(!dispatch(&message, &mut counter));
        assert_eq!(counter.0, 0);
    }
}
