//! # Track facade
//!
//! Air, surface, subsurface, land and space tracks keep the same facts in
//! different words and units. [`TrackAccessor`] is the common capability
//! set; each track family has one adapter implementing it, picked from the
//! catalog by [`track_accessor`]. [`Track`] pairs an adapter with a message
//! so callers can simply write `track.speed()`.
//!
//! Values come out in SI units (metres, metres per second) and degrees.
//! Missing words degrade: location and velocity become `None`, speed and
//! course become `0.0`.
//!
//! | Family | Position | Height | Speed / course | Specific type | DIS id |
//! |--------|----------|--------|----------------|---------------|--------|
//! | J3.2 air | E0 | Initial altitude | E0 | C1 | E1 |
//! | J3.3 surface | E0 | zero | E0 | C1 | E1 |
//! | J3.4 subsurface | E0 | minus E0 depth | E0 | C1 | E1 |
//! | J3.5 land | E0 | Initial altitude | E0 | C1 | E1 |
//! | J3.6 space | ECEF, E0 + E1 | ECEF | ECEF velocity, E0 + E1 | none | E2 |
//!
//! ```
//! use link16_models::{Family, Geodetic, Message, Track};
//!
//! let mut message = Message::for_family(Family::AirTrack);
//! let mut track = Track::new(&mut message).unwrap();
//! track.set_location(&Geodetic::new(48.5, 2.25, 3048.0)).unwrap();
//! track.set_speed_course(250.0, 90.0).unwrap();
//!
//! let track = Track::new(&message).unwrap();
//! let at = track.location().unwrap();
//! assert!((at.latitude_deg - 48.5).abs() < 1e-4);
//! assert!((at.altitude_m - 3048.0).abs() < 8.0);
//! assert!((track.speed() - 250.0).abs() < 2.0);
//! assert_eq!(track.course(), 90.0);
//! ```

use std::borrow::{Borrow, BorrowMut};

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, FromRepr, IntoEnumIterator};

use crate::catalog::Family;
use crate::dis::DisEntityId;
use crate::error::CodecError;
use crate::field::QualityTable;
use crate::geo::{ecef_to_lla, ecef_to_ned_velocity, lla_to_ecef, ned_to_ecef_velocity, Ecef, Geodetic, Ned};
use crate::message::Message;
use crate::units::Unit;
use crate::word::Word;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Where a track lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrackEnvironment {
    /// J3.2.
    Air,
    /// J3.3.
    Surface,
    /// J3.4.
    Subsurface,
    /// J3.5.
    Land,
    /// J3.6.
    Space,
}

impl TrackEnvironment {
    /// The track family reporting this environment.
    pub fn family(self) -> Family {
        match self {
            TrackEnvironment::Air => Family::AirTrack,
            TrackEnvironment::Surface => Family::SurfaceTrack,
            TrackEnvironment::Subsurface => Family::SubsurfaceTrack,
            TrackEnvironment::Land => Family::LandTrack,
            TrackEnvironment::Space => Family::SpaceTrack,
        }
    }

    /// The environment a family reports; `None` for non-track families.
    pub fn from_family(family: Family) -> Option<Self> {
        Self::iter().find(|environment| environment.family() == family)
    }

    /// The adapter for this environment's family.
    pub fn accessor(self) -> &'static dyn TrackAccessor {
        match self {
            TrackEnvironment::Air => &AirTrackAdapter,
            TrackEnvironment::Surface => &SurfaceTrackAdapter,
            TrackEnvironment::Subsurface => &SubsurfaceTrackAdapter,
            TrackEnvironment::Land => &LandTrackAdapter,
            TrackEnvironment::Space => &SpaceTrackAdapter,
        }
    }
}

/// Track identity, by its 3-bit code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, FromRepr,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Identity {
    /// Not yet evaluated.
    Pending = 0,
    /// Evaluated, not identified.
    Unknown = 1,
    /// Assumed friend.
    AssumedFriend = 2,
    /// Friend.
    Friend = 3,
    /// Neutral.
    Neutral = 4,
    /// Suspect.
    Suspect = 5,
    /// Hostile.
    Hostile = 6,
}

impl Identity {
    /// The 3-bit code.
    pub fn code(self) -> u32 {
        u32::from(self as u8)
    }
}

// ---------------------------------------------------------------------------
// Capability set
// ---------------------------------------------------------------------------

/// Uniform read and write access to the track facts of one family.
///
/// Adapters are stateless; every method takes the message it works on.
/// Setters create the words they need, together with any lower-numbered
/// extension, so the message stays encodable.
pub trait TrackAccessor: Sync {
    /// The family the adapter reads.
    fn family(&self) -> Family;

    /// The environment the family reports.
    fn environment(&self) -> TrackEnvironment;

    /// Which quality table the family's `TrackQuality` code uses.
    fn quality_table(&self) -> QualityTable {
        QualityTable::Standard
    }

    /// Extension number of the DIS entity word.
    fn dis_extension(&self) -> u8 {
        1
    }

    /// Geodetic position, if reported.
    fn location(&self, message: &Message) -> Option<Geodetic>;

    /// Store a geodetic position.
    ///
    /// # Errors
    ///
    /// Field access errors from the underlying words.
    fn set_location(&self, message: &mut Message, location: &Geodetic) -> Result<(), CodecError>;

    /// Ground speed in metres per second; `0.0` when not reported.
    fn speed(&self, message: &Message) -> f64;

    /// Course over ground in degrees; `0.0` when not reported.
    fn course(&self, message: &Message) -> f64;

    /// Store ground speed (metres per second) and course (degrees).
    ///
    /// # Errors
    ///
    /// Field access errors from the underlying words.
    fn set_speed_course(
        &self,
        message: &mut Message,
        speed_mps: f64,
        course_deg: f64,
    ) -> Result<(), CodecError>;

    /// ECEF velocity in metres per second, if position and velocity are
    /// reported.
    fn velocity_ecef(&self, message: &Message) -> Option<Ecef> {
        let at = self.location(message)?;
        let ned = Ned::from_speed_course(self.speed(message), self.course(message));
        Some(ned_to_ecef_velocity(&ned, &at))
    }

    /// Store an ECEF velocity, rotated into the local frame of the reported
    /// position (or of latitude 0, longitude 0 when none is reported).
    ///
    /// # Errors
    ///
    /// Field access errors from the underlying words.
    fn set_velocity_ecef(&self, message: &mut Message, velocity: &Ecef) -> Result<(), CodecError> {
        let at = self.location(message).unwrap_or_default();
        let ned = ecef_to_ned_velocity(velocity, &at);
        self.set_speed_course(message, ned.ground_speed(), ned.course_deg())
    }

    /// Specific type code, if reported.
    fn specific_type(&self, message: &Message) -> Option<u32>;

    /// Store a specific type code.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownField`] for a family without one.
    fn set_specific_type(&self, message: &mut Message, code: u32) -> Result<(), CodecError>;

    /// Track number in its five-character form.
    fn track_number(&self, message: &Message) -> Option<String> {
        message.initial().text("TrackNumber")
    }

    /// Store a track number.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidTrackNumber`] for a malformed string.
    fn set_track_number(&self, message: &mut Message, track_number: &str) -> Result<(), CodecError> {
        message.initial_mut().set("TrackNumber", track_number)
    }

    /// Identity, if the code is a defined one.
    fn identity(&self, message: &Message) -> Option<Identity> {
        let code = message.initial().integer("Identity")?;
        u8::try_from(code).ok().and_then(Identity::from_repr)
    }

    /// Store an identity.
    ///
    /// # Errors
    ///
    /// Field access errors from the Initial word.
    fn set_identity(&self, message: &mut Message, identity: Identity) -> Result<(), CodecError> {
        message.initial_mut().set("Identity", identity.code())
    }

    /// Raw 4-bit track quality code.
    fn track_quality(&self, message: &Message) -> Option<u32> {
        message.initial().integer("TrackQuality")
    }

    /// Store a raw track quality code.
    ///
    /// # Errors
    ///
    /// Field access errors from the Initial word.
    fn set_track_quality(&self, message: &mut Message, code: u32) -> Result<(), CodecError> {
        message.initial_mut().set("TrackQuality", code)
    }

    /// 95% circular error probable in metres for the quality code, read
    /// through the family's table; `None` for code 0.
    fn track_quality_error_95cep(&self, message: &Message) -> Option<f64> {
        let code = self.track_quality(message).filter(|&code| code != 0)?;
        Some(Unit::Feet.to_si(self.quality_table().error_95cep_ft(code)))
    }

    /// DIS entity identifier, if its extension word is present.
    fn dis_entity_id(&self, message: &Message) -> Option<DisEntityId> {
        let word = message.extension(self.dis_extension())?;
        let number = |name: &str| word.integer(name).and_then(|n| u16::try_from(n).ok());
        Some(DisEntityId::new(
            number("DisSite")?,
            number("DisApplication")?,
            number("DisEntity")?,
        ))
    }

    /// Store a DIS entity identifier.
    ///
    /// # Errors
    ///
    /// Field access errors from the DIS extension word.
    fn set_dis_entity_id(&self, message: &mut Message, id: DisEntityId) -> Result<(), CodecError> {
        let word = extension_mut(message, self.dis_extension())?;
        word.set("DisSite", u32::from(id.site))?;
        word.set("DisApplication", u32::from(id.application))?;
        word.set("DisEntity", u32::from(id.entity))
    }
}

/// Extension `number`, creating it and every lower-numbered extension.
fn extension_mut(message: &mut Message, number: u8) -> Result<&mut Word, CodecError> {
    let (label, sublabel) = message.label();
    let unsupported = CodecError::UnsupportedExtension {
        label,
        sublabel,
        number,
    };
    for lower in 0..number {
        message.ensure_extension(lower).ok_or(unsupported.clone())?;
    }
    message.ensure_extension(number).ok_or(unsupported)
}

/// Continuation `number`, creating it if absent.
fn continuation_mut(message: &mut Message, number: u8) -> Result<&mut Word, CodecError> {
    let (label, sublabel) = message.label();
    message
        .ensure_continuation(number)
        .ok_or(CodecError::UnsupportedContinuation {
            label,
            sublabel,
            number,
        })
}

// ---------------------------------------------------------------------------
// Geodetic families
// ---------------------------------------------------------------------------

/// Where a geodetic family keeps height.
#[derive(Debug, Clone, Copy)]
enum Height {
    /// Initial word `Altitude`, feet.
    InitialAltitude,
    /// Not reported; always zero.
    SeaLevel,
    /// E0 `Depth`, metres below the surface.
    Depth,
}

/// Shared reading of E0 position, course and speed.
#[derive(Debug, Clone, Copy)]
struct GeodeticLayout {
    height: Height,
}

impl GeodeticLayout {
    fn location(self, message: &Message) -> Option<Geodetic> {
        let e0 = message.extension(0)?;
        let latitude_deg = e0.real("Latitude")?;
        let longitude_deg = e0.real("Longitude")?;
        let altitude_m = match self.height {
            Height::InitialAltitude => {
                Unit::Feet.to_si(message.initial().real("Altitude").unwrap_or(0.0))
            }
            Height::SeaLevel => 0.0,
            Height::Depth => -e0.real("Depth").unwrap_or(0.0),
        };
        Some(Geodetic::new(latitude_deg, longitude_deg, altitude_m))
    }

    fn set_location(self, message: &mut Message, at: &Geodetic) -> Result<(), CodecError> {
        let e0 = extension_mut(message, 0)?;
        e0.set("Latitude", at.latitude_deg)?;
        e0.set("Longitude", at.longitude_deg)?;
        if matches!(self.height, Height::Depth) {
            e0.set("Depth", (-at.altitude_m).max(0.0))?;
        }
        if matches!(self.height, Height::InitialAltitude) {
            message
                .initial_mut()
                .set("Altitude", Unit::Feet.from_si(at.altitude_m))?;
        }
        Ok(())
    }

    fn speed(self, message: &Message) -> f64 {
        message
            .extension(0)
            .and_then(|e0| e0.real("Speed"))
            .map_or(0.0, |dmph| Unit::DataMilesPerHour.to_si(dmph))
    }

    fn course(self, message: &Message) -> f64 {
        message
            .extension(0)
            .and_then(|e0| e0.real("Course"))
            .unwrap_or(0.0)
    }

    fn set_speed_course(
        self,
        message: &mut Message,
        speed_mps: f64,
        course_deg: f64,
    ) -> Result<(), CodecError> {
        let e0 = extension_mut(message, 0)?;
        e0.set("Speed", Unit::DataMilesPerHour.from_si(speed_mps))?;
        e0.set("Course", course_deg)
    }

    fn specific_type(message: &Message) -> Option<u32> {
        message.continuation(1)?.integer("SpecificType")
    }

    fn set_specific_type(message: &mut Message, code: u32) -> Result<(), CodecError> {
        let c1 = continuation_mut(message, 1)?;
        c1.set("IsSpecificType", true)?;
        c1.set("SpecificType", code)
    }
}

macro_rules! geodetic_adapter {
    ($(#[$doc:meta])* $name:ident, $family:ident, $environment:ident, $height:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            const LAYOUT: GeodeticLayout = GeodeticLayout {
                height: Height::$height,
            };
        }

        impl TrackAccessor for $name {
            fn family(&self) -> Family {
                Family::$family
            }

            fn environment(&self) -> TrackEnvironment {
                TrackEnvironment::$environment
            }

            fn location(&self, message: &Message) -> Option<Geodetic> {
                Self::LAYOUT.location(message)
            }

            fn set_location(
                &self,
                message: &mut Message,
                location: &Geodetic,
            ) -> Result<(), CodecError> {
                Self::LAYOUT.set_location(message, location)
            }

            fn speed(&self, message: &Message) -> f64 {
                Self::LAYOUT.speed(message)
            }

            fn course(&self, message: &Message) -> f64 {
                Self::LAYOUT.course(message)
            }

            fn set_speed_course(
                &self,
                message: &mut Message,
                speed_mps: f64,
                course_deg: f64,
            ) -> Result<(), CodecError> {
                Self::LAYOUT.set_speed_course(message, speed_mps, course_deg)
            }

            fn specific_type(&self, message: &Message) -> Option<u32> {
                GeodeticLayout::specific_type(message)
            }

            fn set_specific_type(&self, message: &mut Message, code: u32) -> Result<(), CodecError> {
                GeodeticLayout::set_specific_type(message, code)
            }
        }
    };
}

geodetic_adapter!(
    /// J3.2 Air Track adapter.
    AirTrackAdapter, AirTrack, Air, InitialAltitude
);
geodetic_adapter!(
    /// J3.3 Surface Track adapter.
    SurfaceTrackAdapter, SurfaceTrack, Surface, SeaLevel
);
geodetic_adapter!(
    /// J3.4 Subsurface Track adapter; height is negative depth.
    SubsurfaceTrackAdapter, SubsurfaceTrack, Subsurface, Depth
);
geodetic_adapter!(
    /// J3.5 Land Track adapter.
    LandTrackAdapter, LandTrack, Land, InitialAltitude
);

// ---------------------------------------------------------------------------
// Space track
// ---------------------------------------------------------------------------

/// J3.6 Space Track adapter.
///
/// Position and velocity are ECEF, X and Y in E0, Z in E1. Both words must
/// be present and reported for either to be available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTrackAdapter;

impl SpaceTrackAdapter {
    fn position_ecef(message: &Message) -> Option<Ecef> {
        let e0 = message.extension(0)?;
        let e1 = message.extension(1)?;
        Some(Ecef::new(e0.real("WcsX")?, e0.real("WcsY")?, e1.real("WcsZ")?))
    }

    fn velocity_ned(&self, message: &Message) -> Option<Ned> {
        let at = self.location(message)?;
        Some(ecef_to_ned_velocity(&self.velocity_ecef(message)?, &at))
    }
}

impl TrackAccessor for SpaceTrackAdapter {
    fn family(&self) -> Family {
        Family::SpaceTrack
    }

    fn environment(&self) -> TrackEnvironment {
        TrackEnvironment::Space
    }

    fn quality_table(&self) -> QualityTable {
        QualityTable::Space
    }

    fn dis_extension(&self) -> u8 {
        2
    }

    fn location(&self, message: &Message) -> Option<Geodetic> {
        Self::position_ecef(message).map(|ecef| ecef_to_lla(&ecef))
    }

    fn set_location(&self, message: &mut Message, location: &Geodetic) -> Result<(), CodecError> {
        let ecef = lla_to_ecef(location);
        let e0 = extension_mut(message, 0)?;
        e0.set("WcsX", ecef.x)?;
        e0.set("WcsY", ecef.y)?;
        extension_mut(message, 1)?.set("WcsZ", ecef.z)
    }

    fn speed(&self, message: &Message) -> f64 {
        self.velocity_ecef(message).map_or(0.0, |v| v.norm())
    }

    fn course(&self, message: &Message) -> f64 {
        self.velocity_ned(message).map_or(0.0, |ned| ned.course_deg())
    }

    fn set_speed_course(
        &self,
        message: &mut Message,
        speed_mps: f64,
        course_deg: f64,
    ) -> Result<(), CodecError> {
        let at = self.location(message).unwrap_or_default();
        let ned = Ned::from_speed_course(speed_mps, course_deg);
        self.set_velocity_ecef(message, &ned_to_ecef_velocity(&ned, &at))
    }

    fn velocity_ecef(&self, message: &Message) -> Option<Ecef> {
        let e0 = message.extension(0)?;
        let e1 = message.extension(1)?;
        Some(Ecef::new(
            e0.real("WcsVelocityX")?,
            e1.real("WcsVelocityY")?,
            e1.real("WcsVelocityZ")?,
        ))
    }

    fn set_velocity_ecef(&self, message: &mut Message, velocity: &Ecef) -> Result<(), CodecError> {
        extension_mut(message, 0)?.set("WcsVelocityX", velocity.x)?;
        let e1 = extension_mut(message, 1)?;
        e1.set("WcsVelocityY", velocity.y)?;
        e1.set("WcsVelocityZ", velocity.z)
    }

    fn specific_type(&self, _message: &Message) -> Option<u32> {
        None
    }

    fn set_specific_type(&self, message: &mut Message, code: u32) -> Result<(), CodecError> {
        message.initial_mut().set("SpecificType", code)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The adapter for a family; `None` for families that are not tracks.
pub fn track_accessor(family: Family) -> Option<&'static dyn TrackAccessor> {
    TrackEnvironment::from_family(family).map(TrackEnvironment::accessor)
}

/// A message viewed through its family's adapter.
///
/// `M` is `&Message`, `&mut Message` or an owned [`Message`]; setters need
/// mutable access.
pub struct Track<M> {
    accessor: &'static dyn TrackAccessor,
    message: M,
}

impl<M: Borrow<Message>> Track<M> {
    /// View a message as a track; `None` for non-track families.
    pub fn new(message: M) -> Option<Self> {
        let family = message.borrow().family()?;
        let accessor = track_accessor(family)?;
        Some(Self { accessor, message })
    }

    /// View a message through a given adapter.
    pub fn with_accessor(accessor: &'static dyn TrackAccessor, message: M) -> Self {
        Self { accessor, message }
    }

    /// The adapter in use.
    pub fn accessor(&self) -> &'static dyn TrackAccessor {
        self.accessor
    }

    /// The underlying message.
    pub fn message(&self) -> &Message {
        self.message.borrow()
    }

    /// Give the message back.
    pub fn into_inner(self) -> M {
        self.message
    }

    /// See [`TrackAccessor::environment`].
    pub fn environment(&self) -> TrackEnvironment {
        self.accessor.environment()
    }

    /// See [`TrackAccessor::location`].
    pub fn location(&self) -> Option<Geodetic> {
        self.accessor.location(self.message())
    }

    /// See [`TrackAccessor::speed`].
    pub fn speed(&self) -> f64 {
        self.accessor.speed(self.message())
    }

    /// See [`TrackAccessor::course`].
    pub fn course(&self) -> f64 {
        self.accessor.course(self.message())
    }

    /// See [`TrackAccessor::velocity_ecef`].
    pub fn velocity_ecef(&self) -> Option<Ecef> {
        self.accessor.velocity_ecef(self.message())
    }

    /// See [`TrackAccessor::track_number`].
    pub fn track_number(&self) -> Option<String> {
        self.accessor.track_number(self.message())
    }

    /// See [`TrackAccessor::identity`].
    pub fn identity(&self) -> Option<Identity> {
        self.accessor.identity(self.message())
    }

    /// See [`TrackAccessor::track_quality`].
    pub fn track_quality(&self) -> Option<u32> {
        self.accessor.track_quality(self.message())
    }

    /// See [`TrackAccessor::track_quality_error_95cep`].
    pub fn track_quality_error_95cep(&self) -> Option<f64> {
        self.accessor.track_quality_error_95cep(self.message())
    }

    /// See [`TrackAccessor::specific_type`].
    pub fn specific_type(&self) -> Option<u32> {
        self.accessor.specific_type(self.message())
    }

    /// See [`TrackAccessor::dis_entity_id`].
    pub fn dis_entity_id(&self) -> Option<DisEntityId> {
        self.accessor.dis_entity_id(self.message())
    }

    /// Every getter at once.
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot {
            family: self.accessor.family(),
            environment: self.environment(),
            track_number: self.track_number(),
            identity: self.identity(),
            location: self.location(),
            speed_mps: self.speed(),
            course_deg: self.course(),
            velocity_ecef: self.velocity_ecef(),
            track_quality: self.track_quality(),
            track_quality_error_95cep_m: self.track_quality_error_95cep(),
            specific_type: self.specific_type(),
            dis_entity_id: self.dis_entity_id(),
        }
    }
}

impl<M: BorrowMut<Message>> Track<M> {
    fn message_mut(&mut self) -> &mut Message {
        self.message.borrow_mut()
    }

    /// See [`TrackAccessor::set_location`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_location(&mut self, location: &Geodetic) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_location(self.message_mut(), location)
    }

    /// See [`TrackAccessor::set_speed_course`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_speed_course(&mut self, speed_mps: f64, course_deg: f64) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_speed_course(self.message_mut(), speed_mps, course_deg)
    }

    /// See [`TrackAccessor::set_velocity_ecef`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_velocity_ecef(&mut self, velocity: &Ecef) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_velocity_ecef(self.message_mut(), velocity)
    }

    /// See [`TrackAccessor::set_track_number`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_track_number(&mut self, track_number: &str) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_track_number(self.message_mut(), track_number)
    }

    /// See [`TrackAccessor::set_identity`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_identity(&mut self, identity: Identity) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_identity(self.message_mut(), identity)
    }

    /// See [`TrackAccessor::set_track_quality`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_track_quality(&mut self, code: u32) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_track_quality(self.message_mut(), code)
    }

    /// See [`TrackAccessor::set_specific_type`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_specific_type(&mut self, code: u32) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_specific_type(self.message_mut(), code)
    }

    /// See [`TrackAccessor::set_dis_entity_id`].
    ///
    /// # Errors
    ///
    /// As the adapter reports.
    pub fn set_dis_entity_id(&mut self, id: DisEntityId) -> Result<(), CodecError> {
        let accessor = self.accessor;
        accessor.set_dis_entity_id(self.message_mut(), id)
    }
}

/// All track facts of one message, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSnapshot {
    /// Track family.
    pub family: Family,
    /// Environment.
    pub environment: TrackEnvironment,
    /// Track number.
    pub track_number: Option<String>,
    /// Identity.
    pub identity: Option<Identity>,
    /// Geodetic position.
    pub location: Option<Geodetic>,
    /// Speed, metres per second.
    pub speed_mps: f64,
    /// Course, degrees.
    pub course_deg: f64,
    /// ECEF velocity, metres per second.
    pub velocity_ecef: Option<Ecef>,
    /// Raw track quality code.
    pub track_quality: Option<u32>,
    /// Track quality as a 95% CEP radius in metres.
    pub track_quality_error_95cep_m: Option<f64>,
    /// Specific type code.
    pub specific_type: Option<u32>,
    /// DIS entity identifier.
    pub dis_entity_id: Option<DisEntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{METERS_PER_FOOT, MPS_PER_DMPH};

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    // -- Selection ---------------------------------------------------------------

    #[test]
    fn every_environment_has_an_adapter() {
        for environment in TrackEnvironment::iter() {
            let accessor = track_accessor(environment.family()).unwrap();
            assert_eq!(accessor.environment(), environment);
            assert!(accessor.family().is_track());
        }
        assert!(track_accessor(Family::FreeText).is_none());
        assert!(Track::new(Message::for_family(Family::PpliAir)).is_none());
    }

    #[test]
    fn environment_and_identity_parse() {
        assert_eq!("Subsurface".parse::<TrackEnvironment>().unwrap(), TrackEnvironment::Subsurface);
        assert_eq!("hostile".parse::<Identity>().unwrap(), Identity::Hostile);
        assert_eq!(Identity::AssumedFriend.to_string(), "assumed_friend");
        assert_eq!(Identity::from_repr(3), Some(Identity::Friend));
    }

    // -- Degradation ---------------------------------------------------------------

    #[test]
    fn missing_kinematic_word_degrades() {
        let message = Message::for_family(Family::AirTrack);
        let track = Track::new(&message).unwrap();
        assert_eq!(track.location(), None);
        assert_eq!(track.speed(), 0.0);
        assert_eq!(track.course(), 0.0);
        assert_eq!(track.velocity_ecef(), None);
        assert_eq!(track.specific_type(), None);
        assert_eq!(track.dis_entity_id(), None);
        assert_eq!(track.track_quality_error_95cep(), None);
    }

    #[test]
    fn no_statement_position_is_absent() {
        let mut message = Message::for_family(Family::SurfaceTrack);
        message.add_extension(0).unwrap();
        let track = Track::new(&message).unwrap();
        assert_eq!(track.location(), None);
        assert_eq!(track.speed(), 0.0);
    }

    #[test]
    fn space_needs_both_position_words() {
        let mut message = Message::for_family(Family::SpaceTrack);
        let e0 = message.add_extension(0).unwrap();
        e0.set("WcsX", 7_000_000.0).unwrap();
        e0.set("WcsY", 0.0).unwrap();
        let track = Track::new(&message).unwrap();
        assert_eq!(track.location(), None);
        assert_eq!(track.velocity_ecef(), None);

        message.add_extension(1).unwrap();
        // E1 present, WcsZ still no statement.
        assert_eq!(Track::new(&message).unwrap().location(), None);
        message.ensure_extension(1).unwrap().set("WcsZ", 0.0).unwrap();
        assert!(Track::new(&message).unwrap().location().is_some());
    }

    // -- Geodetic families -----------------------------------------------------------

    #[test]
    fn air_track_round_trip() {
        let mut message = Message::for_family(Family::AirTrack);
        let mut track = Track::new(&mut message).unwrap();
        track.set_location(&Geodetic::new(-33.75, 151.25, 10_000.0)).unwrap();
        track.set_speed_course(220.0, 315.0).unwrap();
        track.set_track_number("07701").unwrap();
        track.set_identity(Identity::Hostile).unwrap();
        track.set_track_quality(12).unwrap();
        track.set_specific_type(1234).unwrap();
        track.set_dis_entity_id(DisEntityId::new(1, 2, 3)).unwrap();

        let decoded = Message::from_bits(&message.to_bits().unwrap()).unwrap();
        let snapshot = Track::new(&decoded).unwrap().snapshot();
        let at = snapshot.location.unwrap();
        assert!(close(at.latitude_deg, -33.75, 1e-4));
        assert!(close(at.longitude_deg, 151.25, 1e-4));
        assert!(close(at.altitude_m, 10_000.0, 25.0 * METERS_PER_FOOT));
        assert!(close(snapshot.speed_mps, 220.0, 2.0 * MPS_PER_DMPH));
        assert_eq!(snapshot.course_deg, 315.0);
        assert_eq!(snapshot.track_number.as_deref(), Some("07701"));
        assert_eq!(snapshot.identity, Some(Identity::Hostile));
        assert_eq!(snapshot.track_quality, Some(12));
        assert!(close(snapshot.track_quality_error_95cep_m.unwrap(), 68.0 * METERS_PER_FOOT, 1e-9));
        assert_eq!(snapshot.specific_type, Some(1234));
        assert_eq!(snapshot.dis_entity_id, Some(DisEntityId::new(1, 2, 3)));
        assert_eq!(snapshot.environment, TrackEnvironment::Air);
    }

    #[test]
    fn dis_id_creates_lower_extensions() {
        let mut message = Message::for_family(Family::LandTrack);
        Track::new(&mut message)
            .unwrap()
            .set_dis_entity_id(DisEntityId::new(9, 8, 7))
            .unwrap();
        assert!(message.extension(0).is_some());
        assert!(message.to_bits().is_ok());
    }

    #[test]
    fn subsurface_height_is_negative_depth() {
        let mut message = Message::for_family(Family::SubsurfaceTrack);
        let mut track = Track::new(&mut message).unwrap();
        track.set_location(&Geodetic::new(10.0, 20.0, -150.0)).unwrap();
        let at = Track::new(&message).unwrap().location().unwrap();
        assert_eq!(at.altitude_m, -150.0);
        assert_eq!(message.extension(0).unwrap().real("Depth"), Some(150.0));
    }

    #[test]
    fn surface_track_ignores_height() {
        let mut message = Message::for_family(Family::SurfaceTrack);
        let mut track = Track::new(&mut message).unwrap();
        track.set_location(&Geodetic::new(1.0, 2.0, 500.0)).unwrap();
        assert_eq!(track.location().unwrap().altitude_m, 0.0);
    }

    // -- Space track -------------------------------------------------------------------

    #[test]
    fn space_track_converts_through_ecef() {
        let mut message = Message::for_family(Family::SpaceTrack);
        let mut track = Track::new(&mut message).unwrap();
        let orbit = Geodetic::new(30.0, -60.0, 400_000.0);
        track.set_location(&orbit).unwrap();
        track.set_velocity_ecef(&Ecef::new(1000.0, -2500.5, 7000.25)).unwrap();
        track.set_track_quality(15).unwrap();
        track.set_dis_entity_id(DisEntityId::new(4, 5, 6)).unwrap();

        let decoded = Message::from_bits(&message.to_bits().unwrap()).unwrap();
        let track = Track::new(&decoded).unwrap();
        let at = track.location().unwrap();
        // 10 m ECEF quantization.
        assert!(close(at.latitude_deg, 30.0, 1e-3));
        assert!(close(at.longitude_deg, -60.0, 1e-3));
        assert!(close(at.altitude_m, 400_000.0, 30.0));
        assert_eq!(track.velocity_ecef(), Some(Ecef::new(1000.0, -2500.5, 7000.25)));
        assert!(close(track.speed(), Ecef::new(1000.0, -2500.5, 7000.25).norm(), 1e-9));
        assert!(close(track.track_quality_error_95cep().unwrap(), 39.0 * METERS_PER_FOOT, 1e-9));
        assert_eq!(track.dis_entity_id(), Some(DisEntityId::new(4, 5, 6)));
        assert_eq!(decoded.word_count(), 4);
    }

    #[test]
    fn space_track_has_no_specific_type() {
        let mut message = Message::for_family(Family::SpaceTrack);
        let mut track = Track::new(&mut message).unwrap();
        assert_eq!(track.specific_type(), None);
        assert!(matches!(
            track.set_specific_type(5),
            Err(CodecError::UnknownField { .. })
        ));
    }

    #[test]
    fn snapshot_serializes() {
        let message = Message::for_family(Family::LandTrack);
        let json = serde_json::to_value(Track::new(&message).unwrap().snapshot()).unwrap();
        assert_eq!(json["family"], "J3.5");
        assert_eq!(json["environment"], "land");
        assert_eq!(json["location"], serde_json::Value::Null);
        assert_eq!(json["speed_mps"], 0.0);
    }
}
