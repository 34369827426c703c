//! # Messages
//!
//! A [`Message`] owns one Initial word and the Continuation and Extension
//! words that follow it, at most one per number. The numbers a message may
//! hold are those its family declares in the catalog.
//!
//! ## Wire order
//!
//! ```text
//! Initial  (length = number of following words)
//! E0, E1, ...   extensions, contiguous from 0, unnumbered on the wire
//! Cn, Cm, ...   continuations, ascending, each carrying its number
//! ```
//!
//! ```
//! use link16_models::{Family, Message};
//!
//! let mut message = Message::for_family(Family::WeaponResponse);
//! assert!(message.create_continuation(6).is_none());
//! let word = message.add_continuation(9).unwrap();
//! assert_eq!(word.def().name, "J11.0C9");
//!
//! let bits = message.to_bits().unwrap();
//! assert_eq!(bits.len(), 140);
//! let decoded = Message::from_bits(&bits).unwrap();
//! assert_eq!(decoded, message);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bits::{BitReader, BitWriter, Bits, BitsRef};
use crate::catalog::{find_family, find_family_by_key, Family, FamilyDef};
use crate::error::CodecError;
use crate::header::{Header, MAX_FOLLOWING_WORDS};
use crate::word::{FieldReport, Word, WordDef, WordKind, WORD_BITS};

/// An Initial word and its sub-words.
#[derive(Debug, Clone)]
pub struct Message {
    initial: Word,
    family: Option<&'static FamilyDef>,
    continuations: BTreeMap<u8, Word>,
    extensions: BTreeMap<u8, Word>,
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.initial == other.initial
            && self.continuations == other.continuations
            && self.extensions == other.extensions
    }
}

impl Message {
    /// A bare message around a fresh Initial word.
    ///
    /// A layout that is not the registered Initial word of a catalog family
    /// gives a message with no legal sub-words.
    pub fn new(initial: &'static WordDef) -> Self {
        Self::from_initial(Word::new(initial))
    }

    /// A bare message of a catalog family.
    pub fn for_family(family: Family) -> Self {
        Self::new(family.def().initial)
    }

    /// A bare message around an existing Initial word.
    pub fn from_initial(initial: Word) -> Self {
        let family = find_family_by_key(initial.def().key())
            .filter(|def| std::ptr::eq(def.initial, initial.def()));
        Self {
            initial,
            family,
            continuations: BTreeMap::new(),
            extensions: BTreeMap::new(),
        }
    }

    // ─── Identity ────────────────────────────────────────────────────

    /// The Initial word.
    pub fn initial(&self) -> &Word {
        &self.initial
    }

    /// The Initial word, mutably.
    pub fn initial_mut(&mut self) -> &mut Word {
        &mut self.initial
    }

    /// `(label, sublabel)` of the Initial word.
    pub fn label(&self) -> (u8, u8) {
        self.initial.label()
    }

    /// Catalog key, `label * 100 + sublabel`.
    pub fn key(&self) -> u16 {
        self.initial.def().key()
    }

    /// The catalog family, if the Initial word is a registered one.
    pub fn family(&self) -> Option<Family> {
        self.family.map(|def| def.family)
    }

    /// The catalog entry, if the Initial word is a registered one.
    pub fn family_def(&self) -> Option<&'static FamilyDef> {
        self.family
    }

    // ─── Sub-word creation ───────────────────────────────────────────

    /// A new empty continuation word, if `number` is legal for the family.
    ///
    /// The word is not attached; see [`insert`](Self::insert) and
    /// [`add_continuation`](Self::add_continuation).
    pub fn create_continuation(&self, number: u8) -> Option<Word> {
        self.family?.continuation(number).map(Word::new)
    }

    /// A new empty extension word, if `number` is legal for the family.
    pub fn create_extension(&self, number: u8) -> Option<Word> {
        self.family?.extension(number).map(Word::new)
    }

    /// Attach a new empty continuation word, replacing any present one.
    pub fn add_continuation(&mut self, number: u8) -> Option<&mut Word> {
        let word = self.create_continuation(number)?;
        self.continuations.insert(number, word);
        self.continuations.get_mut(&number)
    }

    /// Attach a new empty extension word, replacing any present one.
    pub fn add_extension(&mut self, number: u8) -> Option<&mut Word> {
        let word = self.create_extension(number)?;
        self.extensions.insert(number, word);
        self.extensions.get_mut(&number)
    }

    /// The continuation word `number`, created empty if it is legal and not
    /// yet present.
    pub fn ensure_continuation(&mut self, number: u8) -> Option<&mut Word> {
        if !self.continuations.contains_key(&number) {
            let word = self.create_continuation(number)?;
            self.continuations.insert(number, word);
        }
        self.continuations.get_mut(&number)
    }

    /// The extension word `number`, created empty if it is legal and not yet
    /// present.
    pub fn ensure_extension(&mut self, number: u8) -> Option<&mut Word> {
        if !self.extensions.contains_key(&number) {
            let word = self.create_extension(number)?;
            self.extensions.insert(number, word);
        }
        self.extensions.get_mut(&number)
    }

    /// Attach a sub-word. A word with the same number is replaced and
    /// returned.
    ///
    /// # Errors
    ///
    /// [`CodecError::ForeignWord`] for a word of another family,
    /// [`CodecError::UnexpectedWordFormat`] for an Initial word, and
    /// [`CodecError::UnsupportedContinuation`] or
    /// [`CodecError::UnsupportedExtension`] for a layout the family does not
    /// declare.
    pub fn insert(&mut self, word: Word) -> Result<Option<Word>, CodecError> {
        let (label, sublabel) = self.label();
        if word.label() != (label, sublabel) {
            return Err(CodecError::ForeignWord {
                word: word.def().name,
                label,
                sublabel,
            });
        }
        let declared = self
            .family
            .and_then(|def| def.word(word.kind()))
            .is_some_and(|def| std::ptr::eq(def, word.def()));
        match word.kind() {
            WordKind::Initial => Err(CodecError::UnexpectedWordFormat {
                expected: "continuation or extension",
                found: "initial",
            }),
            WordKind::Continuation(number) if declared => {
                Ok(self.continuations.insert(number, word))
            }
            WordKind::Extension(number) if declared => Ok(self.extensions.insert(number, word)),
            WordKind::Continuation(number) => Err(CodecError::UnsupportedContinuation {
                label,
                sublabel,
                number,
            }),
            WordKind::Extension(number) => Err(CodecError::UnsupportedExtension {
                label,
                sublabel,
                number,
            }),
        }
    }

    /// Detach a sub-word.
    pub fn remove(&mut self, kind: WordKind) -> Option<Word> {
        match kind {
            WordKind::Initial => None,
            WordKind::Continuation(n) => self.continuations.remove(&n),
            WordKind::Extension(n) => self.extensions.remove(&n),
        }
    }

    // ─── Lookup ──────────────────────────────────────────────────────

    /// The attached sub-word with the layout's discriminator.
    ///
    /// Always `None` when the layout belongs to another family, whatever
    /// this message holds under the same number.
    pub fn find(&self, def: &'static WordDef) -> Option<&Word> {
        if (def.label, def.sublabel) != self.label() {
            return None;
        }
        match def.kind {
            WordKind::Initial => Some(&self.initial),
            WordKind::Continuation(n) => self.continuations.get(&n),
            WordKind::Extension(n) => self.extensions.get(&n),
        }
    }

    /// Mutable [`find`](Self::find).
    pub fn find_mut(&mut self, def: &'static WordDef) -> Option<&mut Word> {
        if (def.label, def.sublabel) != self.label() {
            return None;
        }
        match def.kind {
            WordKind::Initial => Some(&mut self.initial),
            WordKind::Continuation(n) => self.continuations.get_mut(&n),
            WordKind::Extension(n) => self.extensions.get_mut(&n),
        }
    }

    /// Attached continuation `number`.
    pub fn continuation(&self, number: u8) -> Option<&Word> {
        self.continuations.get(&number)
    }

    /// Attached extension `number`.
    pub fn extension(&self, number: u8) -> Option<&Word> {
        self.extensions.get(&number)
    }

    /// Every word in wire order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        std::iter::once(&self.initial)
            .chain(self.extensions.values())
            .chain(self.continuations.values())
    }

    /// Number of words, the Initial word included.
    pub fn word_count(&self) -> usize {
        1 + self.continuations.len() + self.extensions.len()
    }

    // ─── Encoding ────────────────────────────────────────────────────

    /// Append the message, headers included.
    ///
    /// # Errors
    ///
    /// [`CodecError::TooManyWords`] when more sub-words are attached than
    /// the length indicator can announce, [`CodecError::ExtensionGap`] when
    /// the extension numbers are not contiguous from zero.
    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), CodecError> {
        let following = self.word_count() - 1;
        let length = u8::try_from(following)
            .ok()
            .filter(|&n| n <= MAX_FOLLOWING_WORDS)
            .ok_or(CodecError::TooManyWords {
                count: following,
                max: usize::from(MAX_FOLLOWING_WORDS),
            })?;
        for (expected, &number) in (0u8..).zip(self.extensions.keys()) {
            if number != expected {
                return Err(CodecError::ExtensionGap {
                    present: number,
                    missing: expected,
                });
            }
        }

        let (label, sublabel) = self.label();
        Header::Initial {
            label,
            sublabel,
            length,
        }
        .write(writer);
        self.initial.write(writer);
        for word in self.extensions.values() {
            Header::Extension.write(writer);
            word.write(writer);
        }
        for (&number, word) in &self.continuations {
            Header::Continuation { number }.write(writer);
            word.write(writer);
        }
        Ok(())
    }

    /// Encode into a fresh bit vector.
    ///
    /// # Errors
    ///
    /// As [`encode`](Self::encode).
    pub fn to_bits(&self) -> Result<Bits, CodecError> {
        let mut writer = BitWriter::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bits())
    }

    // ─── Decoding ────────────────────────────────────────────────────

    /// Decode one message starting at an Initial word header.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnexpectedWordFormat`] if the first word is not an
    /// Initial word, [`CodecError::UnknownFamily`] for an unregistered
    /// label, and whatever [`decode_body`](Self::decode_body) reports.
    pub fn decode(reader: &mut BitReader<'_>) -> Result<Self, CodecError> {
        match Header::read(reader)? {
            Header::Initial {
                label,
                sublabel,
                length,
            } => {
                let def = find_family(label, sublabel)
                    .ok_or(CodecError::UnknownFamily { label, sublabel })?;
                Self::decode_body(def, length, reader)
            }
            other => Err(CodecError::UnexpectedWordFormat {
                expected: "initial",
                found: other.kind_name(),
            }),
        }
    }

    /// Decode a message whose Initial header was already read.
    ///
    /// # Errors
    ///
    /// [`CodecError::Underrun`] on a truncated source,
    /// [`CodecError::UnexpectedWordFormat`] for an Initial word among the
    /// sub-words, [`CodecError::DuplicateContinuation`] for a repeated
    /// continuation number, and [`CodecError::UnsupportedContinuation`] or
    /// [`CodecError::UnsupportedExtension`] for a sub-word the family does
    /// not declare.
    pub fn decode_body(
        def: &'static FamilyDef,
        length: u8,
        reader: &mut BitReader<'_>,
    ) -> Result<Self, CodecError> {
        let (label, sublabel) = def.label();
        let mut message = Self::from_initial(Word::read(def.initial, reader)?);
        let mut next_extension = 0u8;
        for _ in 0..length {
            match Header::read(reader)? {
                Header::Continuation { number } => {
                    let layout = def.continuation(number).ok_or(
                        CodecError::UnsupportedContinuation {
                            label,
                            sublabel,
                            number,
                        },
                    )?;
                    if message.continuations.contains_key(&number) {
                        return Err(CodecError::DuplicateContinuation {
                            label,
                            sublabel,
                            number,
                        });
                    }
                    message
                        .continuations
                        .insert(number, Word::read(layout, reader)?);
                }
                Header::Extension => {
                    let number = next_extension;
                    let layout = def.extension(number).ok_or(CodecError::UnsupportedExtension {
                        label,
                        sublabel,
                        number,
                    })?;
                    message.extensions.insert(number, Word::read(layout, reader)?);
                    next_extension += 1;
                }
                Header::Initial { .. } => {
                    return Err(CodecError::UnexpectedWordFormat {
                        expected: "continuation or extension",
                        found: "initial",
                    })
                }
            }
        }
        Ok(message)
    }

    /// Decode exactly one message from a bit slice.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode).
    pub fn from_bits(bits: &BitsRef) -> Result<Self, CodecError> {
        Self::decode(&mut BitReader::new(bits))
    }

    // ─── Introspection ───────────────────────────────────────────────

    /// Every word with its decoded fields.
    pub fn describe(&self) -> MessageReport {
        let (label, sublabel) = self.label();
        MessageReport {
            family: self.family(),
            label,
            sublabel,
            words: self
                .words()
                .map(|word| WordReport {
                    name: word.def().name,
                    kind: word.kind(),
                    fields: word.fields(),
                })
                .collect(),
        }
    }
}

/// A message as listed for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageReport {
    /// Catalog family, if registered.
    pub family: Option<Family>,
    /// Label.
    pub label: u8,
    /// Sublabel.
    pub sublabel: u8,
    /// Words in wire order.
    pub words: Vec<WordReport>,
}

/// One word of a [`MessageReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReport {
    /// Word name, e.g. `J3.2E0`.
    pub name: &'static str,
    /// Kind and number.
    pub kind: WordKind,
    /// Valued fields.
    pub fields: Vec<FieldReport>,
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

/// How [`decode_stream`] treats messages of unknown families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on an unknown family instead of skipping it.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl DecodeOptions {
    /// Skip unknown families.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// A message of an unknown family passed over in lenient mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedMessage {
    /// Label.
    pub label: u8,
    /// Sublabel.
    pub sublabel: u8,
    /// Words skipped, the Initial word included.
    pub words: usize,
}

/// Result of [`decode_stream`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedStream {
    /// Decoded messages in stream order.
    pub messages: Vec<Message>,
    /// Unknown-family messages skipped in lenient mode.
    pub skipped: Vec<SkippedMessage>,
}

/// Decode consecutive messages until fewer than one word of bits remains.
///
/// # Errors
///
/// The first [`CodecError`] met; an unknown family only in strict mode.
pub fn decode_stream(bits: &BitsRef, options: DecodeOptions) -> Result<DecodedStream, CodecError> {
    let mut reader = BitReader::new(bits);
    let mut stream = DecodedStream::default();
    while reader.remaining() >= WORD_BITS {
        let (label, sublabel, length) = match Header::read(&mut reader)? {
            Header::Initial {
                label,
                sublabel,
                length,
            } => (label, sublabel, length),
            other => {
                return Err(CodecError::UnexpectedWordFormat {
                    expected: "initial",
                    found: other.kind_name(),
                })
            }
        };
        match find_family(label, sublabel) {
            Some(def) => stream
                .messages
                .push(Message::decode_body(def, length, &mut reader)?),
            None if !options.strict => {
                let initial_bits = WordKind::Initial.data_bits() as usize;
                reader.skip(initial_bits + usize::from(length) * WORD_BITS)?;
                stream.skipped.push(SkippedMessage {
                    label,
                    sublabel,
                    words: usize::from(length) + 1,
                });
            }
            None => return Err(CodecError::UnknownFamily { label, sublabel }),
        }
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{network_weapons, surveillance};
    use crate::field::FieldValue;

    fn air_track() -> Message {
        let mut message = Message::for_family(Family::AirTrack);
        message.initial_mut().set("TrackNumber", "A0017").unwrap();
        message.initial_mut().set("Altitude", 30_000.0).unwrap();
        let e0 = message.add_extension(0).unwrap();
        e0.set("Latitude", 45.0).unwrap();
        e0.set("Longitude", -122.5).unwrap();
        e0.set("Speed", 480.0).unwrap();
        message.add_continuation(1).unwrap().set("SpecificType", 42u32).unwrap();
        message
    }

    // -- Creation --------------------------------------------------------------

    #[test]
    fn legal_set_enforcement() {
        let message = Message::for_family(Family::WeaponResponse);
        assert!(message.create_continuation(6).is_none());
        let word = message.create_continuation(9).unwrap();
        assert_eq!(word.kind(), WordKind::Continuation(9));
        assert!(std::ptr::eq(word.def(), &network_weapons::J11_0_C9));
        assert!(word.is_no_statement("DetailedStatusInformation"));
        assert!(message.create_extension(1).is_none());
        assert!(message.create_extension(0).is_some());
    }

    #[test]
    fn created_words_are_detached() {
        let message = Message::for_family(Family::AirTrack);
        let _ = message.create_extension(0).unwrap();
        assert_eq!(message.word_count(), 1);
        assert!(message.extension(0).is_none());
    }

    #[test]
    fn get_label_reports_family() {
        let message = Message::for_family(Family::SpaceTrack);
        assert_eq!(message.label(), (3, 6));
        assert_eq!(message.key(), 306);
        assert_eq!(message.family(), Some(Family::SpaceTrack));
    }

    #[test]
    fn ensure_keeps_existing_word() {
        let mut message = Message::for_family(Family::AirTrack);
        message.ensure_extension(0).unwrap().set("Course", 90.0).unwrap();
        message.ensure_extension(0).unwrap();
        assert_eq!(message.extension(0).unwrap().real("Course"), Some(90.0));
        message.add_extension(0).unwrap();
        assert_eq!(message.extension(0).unwrap().real("Course"), None);
    }

    // -- Insert / find -----------------------------------------------------------

    #[test]
    fn insert_replaces_same_number() {
        let mut message = Message::for_family(Family::AirTrack);
        let mut first = message.create_continuation(1).unwrap();
        first.set("AirPlatform", 3u32).unwrap();
        assert_eq!(message.insert(first.clone()).unwrap(), None);
        let second = message.create_continuation(1).unwrap();
        assert_eq!(message.insert(second).unwrap(), Some(first));
        assert_eq!(message.word_count(), 2);
    }

    #[test]
    fn insert_rejects_foreign_words() {
        let mut message = Message::for_family(Family::AirTrack);
        let foreign = Word::new(&surveillance::J3_3_C1);
        assert_eq!(
            message.insert(foreign),
            Err(CodecError::ForeignWord {
                word: "J3.3C1",
                label: 3,
                sublabel: 2
            })
        );
        assert!(matches!(
            message.insert(Word::new(&surveillance::J3_2_I)),
            Err(CodecError::UnexpectedWordFormat { .. })
        ));
    }

    #[test]
    fn find_checks_family_first() {
        let message = air_track();
        assert!(message.find(&surveillance::J3_2_C1).is_some());
        assert!(message.find(&surveillance::J3_2_E1).is_none());
        // Same discriminator, other family.
        assert!(message.find(&surveillance::J3_3_C1).is_none());
        assert!(message.find(&surveillance::J3_5_E0).is_none());
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut message = air_track();
        message
            .find_mut(&surveillance::J3_2_E0)
            .unwrap()
            .set("Course", 180.0)
            .unwrap();
        assert_eq!(message.extension(0).unwrap().real("Course"), Some(180.0));
        assert!(message.find_mut(&surveillance::J3_3_C1).is_none());
    }

    // -- Encoding ------------------------------------------------------------------

    #[test]
    fn encode_orders_extensions_before_continuations() {
        let message = air_track();
        let bits = message.to_bits().unwrap();
        assert_eq!(bits.len(), 3 * WORD_BITS);

        let mut reader = BitReader::new(&bits);
        assert_eq!(
            Header::read(&mut reader).unwrap(),
            Header::Initial {
                label: 3,
                sublabel: 2,
                length: 2
            }
        );
        reader.skip(57).unwrap();
        assert_eq!(Header::read(&mut reader).unwrap(), Header::Extension);
        reader.skip(68).unwrap();
        assert_eq!(
            Header::read(&mut reader).unwrap(),
            Header::Continuation { number: 1 }
        );
    }

    #[test]
    fn encode_rejects_extension_gap() {
        let mut message = Message::for_family(Family::AirTrack);
        message.add_extension(1).unwrap();
        assert_eq!(
            message.to_bits(),
            Err(CodecError::ExtensionGap {
                present: 1,
                missing: 0
            })
        );
    }

    #[test]
    fn encode_rejects_too_many_words() {
        let mut message = Message::for_family(Family::WeaponResponse);
        for number in [1, 2, 3, 4, 5, 9, 13, 14] {
            message.add_continuation(number).unwrap();
        }
        assert_eq!(
            message.to_bits(),
            Err(CodecError::TooManyWords { count: 8, max: 7 })
        );
    }

    // -- Decoding ------------------------------------------------------------------

    #[test]
    fn decode_restores_message() {
        let message = air_track();
        let decoded = Message::from_bits(&message.to_bits().unwrap()).unwrap();
        assert_eq!(decoded, message);
        let e0 = decoded.extension(0).unwrap();
        assert_eq!(e0.real("Speed"), Some(480.0));
        assert_eq!(
            decoded.initial().get("TrackNumber"),
            Some(FieldValue::Text("A0017".into()))
        );
    }

    #[test]
    fn decode_truncated_message_fails() {
        let bits = air_track().to_bits().unwrap();
        let err = Message::from_bits(&bits[..150]).unwrap_err();
        assert!(matches!(err, CodecError::Underrun { .. }));
    }

    #[test]
    fn decode_rejects_repeated_continuation() {
        let mut writer = BitWriter::new();
        Header::Initial {
            label: 3,
            sublabel: 2,
            length: 2,
        }
        .write(&mut writer);
        writer.pad(57);
        for _ in 0..2 {
            Header::Continuation { number: 1 }.write(&mut writer);
            writer.pad(63);
        }
        assert_eq!(
            Message::from_bits(writer.as_bits()),
            Err(CodecError::DuplicateContinuation {
                label: 3,
                sublabel: 2,
                number: 1
            })
        );
    }

    #[test]
    fn decode_requires_initial_word() {
        let mut writer = BitWriter::new();
        Header::Continuation { number: 1 }.write(&mut writer);
        writer.pad(63);
        assert_eq!(
            Message::from_bits(writer.as_bits()),
            Err(CodecError::UnexpectedWordFormat {
                expected: "initial",
                found: "continuation"
            })
        );
    }

    #[test]
    fn decode_rejects_undeclared_continuation() {
        let mut writer = BitWriter::new();
        Header::Initial {
            label: 11,
            sublabel: 0,
            length: 1,
        }
        .write(&mut writer);
        writer.pad(57);
        Header::Continuation { number: 6 }.write(&mut writer);
        writer.pad(63);
        assert_eq!(
            Message::from_bits(writer.as_bits()),
            Err(CodecError::UnsupportedContinuation {
                label: 11,
                sublabel: 0,
                number: 6
            })
        );
    }

    fn unknown_family_word(writer: &mut BitWriter) {
        Header::Initial {
            label: 4,
            sublabel: 1,
            length: 1,
        }
        .write(writer);
        writer.pad(57);
        Header::Extension.write(writer);
        writer.pad(68);
    }

    #[test]
    fn stream_skips_unknown_family_when_lenient() {
        let mut writer = BitWriter::new();
        unknown_family_word(&mut writer);
        air_track().encode(&mut writer).unwrap();
        writer.pad(6);
        let bits = writer.into_bits();

        let stream = decode_stream(&bits, DecodeOptions::lenient()).unwrap();
        assert_eq!(stream.messages.len(), 1);
        assert_eq!(stream.messages[0].family(), Some(Family::AirTrack));
        assert_eq!(
            stream.skipped,
            [SkippedMessage {
                label: 4,
                sublabel: 1,
                words: 2
            }]
        );

        assert_eq!(
            decode_stream(&bits, DecodeOptions::default()),
            Err(CodecError::UnknownFamily {
                label: 4,
                sublabel: 1
            })
        );
    }

    #[test]
    fn describe_lists_words_in_wire_order() {
        let report = air_track().describe();
        let names: Vec<_> = report.words.iter().map(|w| w.name).collect();
        assert_eq!(names, ["J3.2I", "J3.2E0", "J3.2C1"]);
        assert_eq!(report.family, Some(Family::AirTrack));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["family"], "J3.2");
        assert_eq!(json["words"][1]["kind"]["kind"], "extension");
    }
}
