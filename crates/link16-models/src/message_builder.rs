//! # Message Builder
//!
//! Fluent builders for J-series messages, so callers never juggle word
//! numbers, units or the extension ordering rules by hand.
//!
//! - [`TrackMessageBuilder`] builds J3.2 to J3.6 track reports from SI
//!   kinematic state through the track facade.
//! - [`FamilyMessageBuilder`] sets named fields on any registered family.
//!
//! Setter errors (a malformed track number, a field the word lacks) are held
//! until `build()`, which reports the first one.
//!
//! ## Quick examples
//!
//! ```rust
//! use link16_models::{DisEntityId, Geodetic, Identity, MessageBuilder, TrackEnvironment};
//!
//! // Air track with position, kinematics and DIS id
//! let message = MessageBuilder::track(TrackEnvironment::Air)
//!     .track_number("A0017")
//!     .identity(Identity::Friend)
//!     .location(Geodetic::new(51.5, -0.5, 9144.0))
//!     .speed_course(230.0, 270.0)
//!     .track_quality(11)
//!     .dis_entity_id(DisEntityId::new(1, 3, 101))
//!     .build()
//!     .unwrap();
//! assert_eq!(message.word_count(), 3);
//!
//! // Any family, field by field, straight to hex
//! let hex = MessageBuilder::family(link16_models::Family::ReferencePoint)
//!     .initial("TrackNumber", "00042")
//!     .extension(0, "Latitude", 12.5)
//!     .frame()
//!     .unwrap()
//!     .to_hex();
//! assert_eq!(hex.len(), 36);
//! ```

use crate::catalog::Family;
use crate::dis::DisEntityId;
use crate::error::CodecError;
use crate::field::FieldValue;
use crate::frame::Frame;
use crate::geo::{Ecef, Geodetic};
use crate::message::Message;
use crate::track::{Identity, Track, TrackEnvironment};

// ─── Track Message Builder ───────────────────────────────────────────

/// How the builder was told to move the track.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    SpeedCourse { speed_mps: f64, course_deg: f64 },
    Ecef(Ecef),
}

/// Builder for track reports.
///
/// Created via [`MessageBuilder::track`]. Nothing is required: an empty
/// builder yields a bare Initial word.
#[derive(Debug, Clone)]
pub struct TrackMessageBuilder {
    environment: TrackEnvironment,
    exercise: bool,
    track_number: Option<String>,
    identity: Option<Identity>,
    location: Option<Geodetic>,
    motion: Option<Motion>,
    track_quality: Option<u32>,
    specific_type: Option<u32>,
    dis_entity_id: Option<DisEntityId>,
}

impl TrackMessageBuilder {
    fn new(environment: TrackEnvironment) -> Self {
        Self {
            environment,
            exercise: false,
            track_number: None,
            identity: None,
            location: None,
            motion: None,
            track_quality: None,
            specific_type: None,
            dis_entity_id: None,
        }
    }

    /// Mark the report as exercise traffic.
    pub fn exercise(mut self, exercise: bool) -> Self {
        self.exercise = exercise;
        self
    }

    /// Set the five-character track number.
    pub fn track_number(mut self, track_number: impl Into<String>) -> Self {
        self.track_number = Some(track_number.into());
        self
    }

    /// Set the identity.
    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Set the geodetic position (degrees, metres).
    pub fn location(mut self, location: Geodetic) -> Self {
        self.location = Some(location);
        self
    }

    /// Set ground speed (m/s) and course (degrees from north).
    pub fn speed_course(mut self, speed_mps: f64, course_deg: f64) -> Self {
        self.motion = Some(Motion::SpeedCourse {
            speed_mps,
            course_deg,
        });
        self
    }

    /// Set an ECEF velocity (m/s). Replaces any speed and course.
    pub fn velocity_ecef(mut self, velocity: Ecef) -> Self {
        self.motion = Some(Motion::Ecef(velocity));
        self
    }

    /// Set the raw track quality code.
    pub fn track_quality(mut self, code: u32) -> Self {
        self.track_quality = Some(code);
        self
    }

    /// Set the specific type code. Space tracks have none; `build()` fails.
    pub fn specific_type(mut self, code: u32) -> Self {
        self.specific_type = Some(code);
        self
    }

    /// Set the DIS entity identifier.
    pub fn dis_entity_id(mut self, id: DisEntityId) -> Self {
        self.dis_entity_id = Some(id);
        self
    }

    /// Consume the builder and produce the [`Message`].
    ///
    /// Position is stored before velocity, so a space track's speed and
    /// course are rotated at the reported position.
    ///
    /// # Errors
    ///
    /// The first error any facade setter reports.
    pub fn build(self) -> Result<Message, CodecError> {
        let mut message = Message::for_family(self.environment.family());
        message.initial_mut().set("ExerciseIndicator", self.exercise)?;

        let mut track = Track::with_accessor(self.environment.accessor(), &mut message);
        if let Some(track_number) = &self.track_number {
            track.set_track_number(track_number)?;
        }
        if let Some(identity) = self.identity {
            track.set_identity(identity)?;
        }
        if let Some(location) = &self.location {
            track.set_location(location)?;
        }
        match self.motion {
            Some(Motion::SpeedCourse {
                speed_mps,
                course_deg,
            }) => track.set_speed_course(speed_mps, course_deg)?,
            Some(Motion::Ecef(velocity)) => track.set_velocity_ecef(&velocity)?,
            None => {}
        }
        if let Some(code) = self.track_quality {
            track.set_track_quality(code)?;
        }
        if let Some(code) = self.specific_type {
            track.set_specific_type(code)?;
        }
        if let Some(id) = self.dis_entity_id {
            track.set_dis_entity_id(id)?;
        }
        Ok(message)
    }

    /// Build and encode into a [`Frame`].
    ///
    /// # Errors
    ///
    /// As [`TrackMessageBuilder::build`] and [`Frame::push`].
    pub fn frame(self) -> Result<Frame, CodecError> {
        Frame::from_messages([&self.build()?])
    }
}

// ─── Family Message Builder ──────────────────────────────────────────

/// Builder setting named fields on any family.
///
/// Created via [`MessageBuilder::family`].
#[derive(Debug, Clone)]
pub struct FamilyMessageBuilder {
    message: Message,
    error: Option<CodecError>,
}

impl FamilyMessageBuilder {
    fn new(family: Family) -> Self {
        Self {
            message: Message::for_family(family),
            error: None,
        }
    }

    fn record(&mut self, result: Result<(), CodecError>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    /// Set a field of the Initial word.
    pub fn initial(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        let result = self.message.initial_mut().set(field, value);
        self.record(result);
        self
    }

    /// Set a field of continuation `number`, creating the word.
    pub fn continuation(mut self, number: u8, field: &str, value: impl Into<FieldValue>) -> Self {
        let (label, sublabel) = self.message.label();
        let result = match self.message.ensure_continuation(number) {
            Some(word) => word.set(field, value),
            None => Err(CodecError::UnsupportedContinuation {
                label,
                sublabel,
                number,
            }),
        };
        self.record(result);
        self
    }

    /// Set a field of extension `number`, creating the word.
    pub fn extension(mut self, number: u8, field: &str, value: impl Into<FieldValue>) -> Self {
        let (label, sublabel) = self.message.label();
        let result = match self.message.ensure_extension(number) {
            Some(word) => word.set(field, value),
            None => Err(CodecError::UnsupportedExtension {
                label,
                sublabel,
                number,
            }),
        };
        self.record(result);
        self
    }

    /// Consume the builder and produce the [`Message`].
    ///
    /// # Errors
    ///
    /// The first error met by a setter.
    pub fn build(self) -> Result<Message, CodecError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.message),
        }
    }

    /// Build and encode into a [`Frame`].
    ///
    /// # Errors
    ///
    /// As [`FamilyMessageBuilder::build`] and [`Frame::push`].
    pub fn frame(self) -> Result<Frame, CodecError> {
        Frame::from_messages([&self.build()?])
    }
}

// ─── Top-level entry point ───────────────────────────────────────────

/// Entry point for the message builders.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Start a track report for `environment`.
    pub fn track(environment: TrackEnvironment) -> TrackMessageBuilder {
        TrackMessageBuilder::new(environment)
    }

    /// Start a message of any registered family.
    pub fn family(family: Family) -> FamilyMessageBuilder {
        FamilyMessageBuilder::new(family)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::DecodeOptions;
    use strum::IntoEnumIterator;

    #[test]
    fn empty_track_is_initial_only() {
        for environment in TrackEnvironment::iter() {
            let message = MessageBuilder::track(environment).build().unwrap();
            assert_eq!(message.family(), Some(environment.family()));
            assert_eq!(message.word_count(), 1);
        }
    }

    #[test]
    fn build_surface_track() {
        let message = MessageBuilder::track(TrackEnvironment::Surface)
            .exercise(true)
            .track_number("00775")
            .identity(Identity::Neutral)
            .location(Geodetic::new(36.0, -5.25, 0.0))
            .speed_course(10.0, 45.0)
            .specific_type(77)
            .build()
            .unwrap();

        assert_eq!(message.initial().get("ExerciseIndicator"), Some(FieldValue::Flag(true)));
        let track = Track::new(&message).unwrap();
        assert_eq!(track.track_number().as_deref(), Some("00775"));
        assert_eq!(track.identity(), Some(Identity::Neutral));
        assert_eq!(track.course(), 45.0);
        assert_eq!(track.specific_type(), Some(77));
        // Initial, E0 and C1.
        assert_eq!(message.word_count(), 3);
    }

    #[test]
    fn build_space_track_from_speed_and_course() {
        let message = MessageBuilder::track(TrackEnvironment::Space)
            .location(Geodetic::new(0.0, 0.0, 500_000.0))
            .speed_course(7600.0, 0.0)
            .build()
            .unwrap();
        let velocity = Track::new(&message).unwrap().velocity_ecef().unwrap();
        // Due north at the equator and prime meridian is +Z.
        assert!((velocity.z - 7600.0).abs() < 0.25);
        assert!(velocity.x.abs() < 0.25);
        assert!(velocity.y.abs() < 0.25);
    }

    #[test]
    fn build_reports_first_error() {
        let err = MessageBuilder::track(TrackEnvironment::Air)
            .track_number("I0001")
            .build()
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidTrackNumber { .. }));

        let err = MessageBuilder::track(TrackEnvironment::Space)
            .specific_type(3)
            .build()
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownField { .. }));
    }

    // ── Family builder tests ───────────────────────────────────────

    #[test]
    fn family_builder_sets_fields() {
        let message = MessageBuilder::family(Family::ReferencePoint)
            .initial("TrackNumber", "00042")
            .extension(0, "Latitude", -12.5)
            .build()
            .unwrap();
        assert_eq!(message.initial().text("TrackNumber").as_deref(), Some("00042"));
        let latitude = message.extension(0).unwrap().real("Latitude").unwrap();
        assert!((latitude + 12.5).abs() < 1e-4);
    }

    #[test]
    fn family_builder_keeps_first_error() {
        let err = MessageBuilder::family(Family::WeaponResponse)
            .continuation(6, "Anything", 1u32)
            .initial("NoSuchField", 1u32)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedContinuation {
                label: 11,
                sublabel: 0,
                number: 6
            }
        );
    }

    #[test]
    fn frame_decodes_back() {
        let frame = MessageBuilder::track(TrackEnvironment::Land)
            .track_number("77777")
            .location(Geodetic::new(-1.0, 37.0, 1600.0))
            .frame()
            .unwrap();
        let stream = frame.decode(DecodeOptions::default()).unwrap();
        assert_eq!(stream.messages.len(), 1);
        let track = Track::new(&stream.messages[0]).unwrap();
        assert_eq!(track.track_number().as_deref(), Some("77777"));
        assert!((track.location().unwrap().altitude_m - 1600.0).abs() < 8.0);
    }
}
