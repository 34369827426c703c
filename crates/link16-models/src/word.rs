//! # Words
//!
//! A word definition ([`WordDef`]) is an ordered list of [`FieldDef`]s tagged
//! with its family's label and sublabel and its kind. The field widths must
//! add up to the data size of the kind; the check runs in a `const fn`, so a
//! family table that gets it wrong does not compile.
//!
//! A [`Word`] is one instance: a definition plus one raw code per field.
//! Moving codes between a word and a bit cursor goes through the
//! [`Transfer`] trait, implemented by [`BitReader`] (decode), [`BitWriter`]
//! (encode) and [`Introspect`] (field listing for diagnostics).

use std::fmt;

use serde::Serialize;

use crate::bits::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::field::{FieldDef, FieldValue};
use crate::units::Unit;

/// Bits in one transmitted word, header included.
pub const WORD_BITS: usize = 70;

// ---------------------------------------------------------------------------
// Word kinds
// ---------------------------------------------------------------------------

/// The three word kinds and their discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "number", rename_all = "snake_case")]
pub enum WordKind {
    /// First word of every message; carries label and sublabel.
    Initial,
    /// Optional word numbered 1..=31.
    Continuation(u8),
    /// Optional word numbered 0..=31 by position.
    Extension(u8),
}

impl WordKind {
    /// Bits of field data the kind carries after its header.
    pub const fn data_bits(self) -> u32 {
        match self {
            WordKind::Initial => 57,
            WordKind::Continuation(_) => 63,
            WordKind::Extension(_) => 68,
        }
    }

    /// Continuation or extension number; `None` for the Initial word.
    pub const fn number(self) -> Option<u8> {
        match self {
            WordKind::Initial => None,
            WordKind::Continuation(n) | WordKind::Extension(n) => Some(n),
        }
    }

    /// Lower-case kind name.
    pub const fn name(self) -> &'static str {
        match self {
            WordKind::Initial => "initial",
            WordKind::Continuation(_) => "continuation",
            WordKind::Extension(_) => "extension",
        }
    }
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordKind::Initial => write!(f, "I"),
            WordKind::Continuation(n) => write!(f, "C{n}"),
            WordKind::Extension(n) => write!(f, "E{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Word definitions
// ---------------------------------------------------------------------------

/// Static layout of one word of one message family.
#[derive(Debug)]
pub struct WordDef {
    /// Display name, e.g. `J3.2C1`.
    pub name: &'static str,
    /// Family label (0..=31).
    pub label: u8,
    /// Family sublabel (0..=7).
    pub sublabel: u8,
    /// Kind and discriminator.
    pub kind: WordKind,
    /// Fields in transmission order.
    pub fields: &'static [FieldDef],
}

/// Sum of field widths, usable in constant evaluation.
pub const fn total_width(fields: &[FieldDef]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].ty.width as u32;
        i += 1;
    }
    total
}

impl WordDef {
    /// Define an Initial word.
    pub const fn initial(
        label: u8,
        sublabel: u8,
        name: &'static str,
        fields: &'static [FieldDef],
    ) -> Self {
        Self::new(name, label, sublabel, WordKind::Initial, fields)
    }

    /// Define a Continuation word.
    pub const fn continuation(
        label: u8,
        sublabel: u8,
        number: u8,
        name: &'static str,
        fields: &'static [FieldDef],
    ) -> Self {
        assert!(number >= 1 && number <= 31, "continuation numbers are 1..=31");
        Self::new(name, label, sublabel, WordKind::Continuation(number), fields)
    }

    /// Define an Extension word.
    pub const fn extension(
        label: u8,
        sublabel: u8,
        number: u8,
        name: &'static str,
        fields: &'static [FieldDef],
    ) -> Self {
        assert!(number <= 31, "extension numbers are 0..=31");
        Self::new(name, label, sublabel, WordKind::Extension(number), fields)
    }

    /// Define a word of any kind.
    ///
    /// # Panics
    ///
    /// When the field widths do not add up to [`WordKind::data_bits`]. Used
    /// in a `static`, the panic is a compile error.
    pub const fn new(
        name: &'static str,
        label: u8,
        sublabel: u8,
        kind: WordKind,
        fields: &'static [FieldDef],
    ) -> Self {
        assert!(label <= 31, "labels are 0..=31");
        assert!(sublabel <= 7, "sublabels are 0..=7");
        assert!(
            total_width(fields) == kind.data_bits(),
            "word field widths do not add up to the size of the word kind"
        );
        Self {
            name,
            label,
            sublabel,
            kind,
            fields,
        }
    }

    /// Catalog key, `label * 100 + sublabel`.
    pub const fn key(&self) -> u16 {
        self.label as u16 * 100 + self.sublabel as u16
    }

    /// Position and definition of a field.
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDef)> {
        self.fields.iter().enumerate().find(|(_, f)| f.name == name)
    }
}

// ---------------------------------------------------------------------------
// Transfer directions
// ---------------------------------------------------------------------------

/// One direction of moving raw codes between a word and the outside.
///
/// [`Word::transfer`] walks the fields in order and hands each one here.
pub trait Transfer {
    /// Move one field's raw code.
    ///
    /// # Errors
    ///
    /// Implementations that read from a bit source fail with
    /// [`CodecError::Underrun`] when the source is exhausted.
    fn transfer(&mut self, field: &'static FieldDef, raw: &mut u32) -> Result<(), CodecError>;
}

impl Transfer for BitReader<'_> {
    fn transfer(&mut self, field: &'static FieldDef, raw: &mut u32) -> Result<(), CodecError> {
        let width = usize::from(field.width());
        if field.ty.is_padding() {
            self.skip(width)?;
            *raw = 0;
        } else {
            *raw = self.read(width)?;
        }
        Ok(())
    }
}

impl Transfer for BitWriter {
    fn transfer(&mut self, field: &'static FieldDef, raw: &mut u32) -> Result<(), CodecError> {
        let width = usize::from(field.width());
        if field.ty.is_padding() {
            self.pad(width);
        } else {
            self.write(*raw, width);
        }
        Ok(())
    }
}

/// One field of a word, as listed for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    /// Field name.
    pub name: &'static str,
    /// Width in bits.
    pub width: u8,
    /// Raw code.
    pub raw: u32,
    /// Decoded value.
    pub value: FieldValue,
    /// Unit of `value`.
    pub unit: Unit,
}

/// Introspection direction: records each field without touching bits.
#[derive(Debug, Default)]
pub struct Introspect {
    /// Fields visited so far, spare runs omitted unless requested.
    pub fields: Vec<FieldReport>,
    include_padding: bool,
}

impl Introspect {
    /// Record valued fields only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record spare and disused runs as well.
    pub fn with_padding() -> Self {
        Self {
            fields: Vec::new(),
            include_padding: true,
        }
    }
}

impl Transfer for Introspect {
    fn transfer(&mut self, field: &'static FieldDef, raw: &mut u32) -> Result<(), CodecError> {
        if field.ty.is_padding() && !self.include_padding {
            return Ok(());
        }
        self.fields.push(FieldReport {
            name: field.name,
            width: field.width(),
            raw: *raw,
            value: field.decode(*raw),
            unit: field.ty.unit(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Word instances
// ---------------------------------------------------------------------------

/// One word: a definition and a raw code per field.
#[derive(Debug, Clone)]
pub struct Word {
    def: &'static WordDef,
    raw: Vec<u32>,
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.raw == other.raw
    }
}

impl Word {
    /// A word with every field at its no-statement code (or zero).
    pub fn new(def: &'static WordDef) -> Self {
        let raw = def.fields.iter().map(|f| f.ty.default_raw()).collect();
        Self { def, raw }
    }

    /// Decode the field data of a word whose header was already consumed.
    ///
    /// # Errors
    ///
    /// [`CodecError::Underrun`] if the reader runs out mid-word.
    pub fn read(def: &'static WordDef, reader: &mut BitReader<'_>) -> Result<Self, CodecError> {
        let mut word = Self::new(def);
        word.transfer(reader)?;
        Ok(word)
    }

    /// Append the field data (no header) to a writer.
    pub fn write(&self, writer: &mut BitWriter) {
        self.visit(writer);
    }

    /// Hand every field, in order, to a transfer direction.
    ///
    /// # Errors
    ///
    /// Whatever the direction reports; reading stops at the first error.
    pub fn transfer<T: Transfer + ?Sized>(&mut self, direction: &mut T) -> Result<(), CodecError> {
        for (field, raw) in self.def.fields.iter().zip(self.raw.iter_mut()) {
            direction.transfer(field, raw)?;
        }
        Ok(())
    }

    /// The word's definition.
    pub fn def(&self) -> &'static WordDef {
        self.def
    }

    /// Kind and discriminator.
    pub fn kind(&self) -> WordKind {
        self.def.kind
    }

    /// `(label, sublabel)` of the family the word belongs to.
    pub fn label(&self) -> (u8, u8) {
        (self.def.label, self.def.sublabel)
    }

    /// Raw code of a field.
    pub fn raw(&self, name: &str) -> Option<u32> {
        self.def.field(name).map(|(i, _)| self.raw[i])
    }

    /// Overwrite a field's raw code, masked to the field width.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownField`] if the word has no such field.
    pub fn set_raw(&mut self, name: &str, raw: u32) -> Result<(), CodecError> {
        let (i, field) = self.locate(name)?;
        self.raw[i] = if field.ty.is_padding() {
            0
        } else {
            raw & crate::field::max_code(field.width())
        };
        Ok(())
    }

    /// Decoded value of a field.
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.def.field(name).map(|(i, f)| f.decode(self.raw[i]))
    }

    /// Encode and store a field value, clamping numbers.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownField`] for a name the word lacks, otherwise as
    /// [`FieldDef::encode`].
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), CodecError> {
        let (i, field) = self.locate(name)?;
        self.raw[i] = field.encode(&value.into())?;
        Ok(())
    }

    /// Numeric value of a field; `None` if absent or not reported.
    pub fn real(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.as_f64())
    }

    /// Integer value of a field; `None` if absent or not reported.
    pub fn integer(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(|v| v.as_u32())
    }

    /// Text value of a field; `None` if absent or not text.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// `true` if the field exists and holds its no-statement code.
    pub fn is_no_statement(&self, name: &str) -> bool {
        self.def
            .field(name)
            .is_some_and(|(i, f)| f.is_no_statement(self.raw[i]))
    }

    /// Store the hour, minute and second of `time` in whichever of the
    /// `Hour`, `Minute` and `Second` fields the word has.
    pub fn set_time_of_day(&mut self, time: &impl chrono::Timelike) {
        for (name, value) in [
            ("Hour", time.hour()),
            ("Minute", time.minute()),
            ("Second", time.second()),
        ] {
            // A word without the field keeps its other fields unchanged.
            let _ = self.set(name, value);
        }
    }

    /// Every valued field with its raw code and decoded value.
    pub fn fields(&self) -> Vec<FieldReport> {
        let mut introspect = Introspect::new();
        self.visit(&mut introspect);
        introspect.fields
    }

    /// Run a direction that only observes codes (writing, introspection).
    fn visit<T: Transfer + ?Sized>(&self, direction: &mut T) {
        for (field, &raw) in self.def.fields.iter().zip(&self.raw) {
            let mut raw = raw;
            // Observing directions have no failure path.
            let _ = direction.transfer(field, &mut raw);
        }
    }

    fn locate(&self, name: &str) -> Result<(usize, &'static FieldDef), CodecError> {
        self.def.field(name).ok_or_else(|| CodecError::UnknownField {
            word: self.def.name,
            field: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldType, NoStatement};
    use crate::field_types::{spare, COURSE, FLAG, SPEED, TRACK_NUMBER};

    const TEST_INITIAL_FIELDS: &[FieldDef] = &[
        FieldDef::new("Exercise", FLAG),
        FieldDef::new("TrackNumber", TRACK_NUMBER),
        FieldDef::new("Course", COURSE),
        FieldDef::new("Speed", SPEED),
        FieldDef::new("Count", FieldType::integer(4, NoStatement::None)),
        FieldDef::new("Spare", spare(13)),
    ];
    static TEST_INITIAL: WordDef = WordDef::initial(30, 1, "J30.1I", TEST_INITIAL_FIELDS);

    const TEST_EXTENSION_FIELDS: &[FieldDef] = &[
        FieldDef::new("Value", FieldType::integer(31, NoStatement::None)),
        FieldDef::new("Spare", spare(37)),
    ];
    static TEST_EXTENSION: WordDef = WordDef::extension(30, 1, 0, "J30.1E0", TEST_EXTENSION_FIELDS);

    // -- Definitions ---------------------------------------------------------

    #[test]
    fn widths_match_kind() {
        assert_eq!(total_width(TEST_INITIAL.fields), 57);
        assert_eq!(total_width(TEST_EXTENSION.fields), 68);
        assert_eq!(TEST_INITIAL.key(), 3001);
    }

    #[test]
    fn kind_display_and_sizes() {
        assert_eq!(WordKind::Continuation(4).to_string(), "C4");
        assert_eq!(WordKind::Extension(0).to_string(), "E0");
        assert_eq!(WordKind::Continuation(4).data_bits(), 63);
        assert_eq!(WordKind::Extension(1).number(), Some(1));
        assert_eq!(WordKind::Initial.number(), None);
    }

    // -- Access --------------------------------------------------------------

    #[test]
    fn new_word_starts_at_no_statement() {
        let word = Word::new(&TEST_INITIAL);
        assert!(word.is_no_statement("Course"));
        assert!(word.is_no_statement("Speed"));
        assert_eq!(word.get("Exercise"), Some(FieldValue::Flag(false)));
        assert_eq!(word.real("Speed"), None);
    }

    #[test]
    fn set_and_get_by_name() {
        let mut word = Word::new(&TEST_INITIAL);
        word.set("Course", 271.0).unwrap();
        word.set("TrackNumber", "A0017").unwrap();
        word.set("Exercise", true).unwrap();
        assert_eq!(word.real("Course"), Some(271.0));
        assert_eq!(word.text("TrackNumber").as_deref(), Some("A0017"));
        assert_eq!(word.raw("Exercise"), Some(1));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut word = Word::new(&TEST_INITIAL);
        let err = word.set("Altitude", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "word J30.1I has no field named Altitude");
        assert_eq!(word.get("Altitude"), None);
    }

    #[test]
    fn set_raw_masks_to_width() {
        let mut word = Word::new(&TEST_INITIAL);
        word.set_raw("Count", 0xFF).unwrap();
        assert_eq!(word.integer("Count"), Some(0xF));
    }

    #[test]
    fn time_of_day_fills_present_fields_only() {
        let mut word = Word::new(&TEST_INITIAL);
        let time = chrono::NaiveTime::from_hms_opt(12, 30, 5).unwrap();
        word.set_time_of_day(&time);
        assert_eq!(word, Word::new(&TEST_INITIAL));
    }

    // -- Transfer --------------------------------------------------------------

    #[test]
    fn write_then_read_restores_fields() {
        let mut word = Word::new(&TEST_INITIAL);
        word.set("Course", 90.0).unwrap();
        word.set("Speed", 500.0).unwrap();
        word.set("Count", 9u32).unwrap();

        let mut writer = BitWriter::new();
        word.write(&mut writer);
        assert_eq!(writer.len(), 57);

        let bits = writer.into_bits();
        let mut reader = BitReader::new(&bits);
        let decoded = Word::read(&TEST_INITIAL, &mut reader).unwrap();
        assert_eq!(decoded, word);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_source_fails() {
        let mut writer = BitWriter::new();
        writer.pad(40);
        let bits = writer.into_bits();
        let mut reader = BitReader::new(&bits);
        assert!(matches!(
            Word::read(&TEST_INITIAL, &mut reader),
            Err(CodecError::Underrun { .. })
        ));
    }

    #[test]
    fn spare_bits_are_written_as_zero() {
        let mut word = Word::new(&TEST_EXTENSION);
        word.set("Value", 0x7FFF_FFFFu32).unwrap();
        let mut writer = BitWriter::new();
        word.write(&mut writer);
        let bits = writer.into_bits();
        assert_eq!(bits.len(), 68);
        assert!(bits[31..].not_any());
    }

    #[test]
    fn introspection_lists_valued_fields() {
        let mut word = Word::new(&TEST_INITIAL);
        word.set("Count", 3u32).unwrap();
        let names: Vec<_> = word.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["Exercise", "TrackNumber", "Course", "Speed", "Count"]);

        let mut all = Introspect::with_padding();
        word.transfer(&mut all).unwrap();
        assert_eq!(all.fields.len(), 6);
        assert_eq!(all.fields[4].raw, 3);
    }
}
