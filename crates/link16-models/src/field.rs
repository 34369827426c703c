//! # Fields
//!
//! A field is a fixed-width raw code plus the rule that turns it into an
//! accessor value. The rule lives in [`FieldKind`], the width and kind
//! together in [`FieldType`], and a named slot of a word in [`FieldDef`].
//!
//! Every conversion is total: out-of-range accessor values clamp to the
//! nearest representable code, and a code reserved for "no statement" is
//! never produced from a reported value.
//!
//! ```
//! use link16_models::field_types::SPEED_KNOTS;
//! use link16_models::{FieldDef, FieldValue};
//!
//! // 8 bits of knots/5, all-ones means "not reported".
//! let speed = FieldDef::new("Speed", SPEED_KNOTS);
//! let raw = speed.encode(&FieldValue::Real(2000.0)).unwrap();
//! assert_eq!(raw, 254);
//! assert_eq!(speed.decode(raw), FieldValue::Real(1270.0));
//! assert!(speed.is_no_statement(255));
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::CodecError;
use crate::units::Unit;

/// Tolerance added before truncating a value expressed in raw code units,
/// so that a decoded value encodes back to the same code.
const QUANTUM_EPSILON: f64 = 1e-6;

/// Widest valued field.
pub const MAX_VALUE_BITS: u8 = 31;

/// Widest spare or disused run.
pub const MAX_SPARE_BITS: u8 = 68;

/// Altitude floor of the piecewise altitude encoding, in feet.
const PIECEWISE_ALTITUDE_FLOOR_FT: f64 = -2000.0;

/// Largest raw code of a `width`-bit field.
pub const fn max_code(width: u8) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

// ---------------------------------------------------------------------------
// No-statement policy
// ---------------------------------------------------------------------------

/// Which raw code, if any, means "value not reported".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoStatement {
    /// Every code is a reported value.
    None,
    /// All bits clear.
    Zero,
    /// Only the most significant bit set.
    Mid,
    /// All bits set.
    Max,
    /// A specific code.
    Value(u32),
}

impl NoStatement {
    /// The sentinel code for a `width`-bit field.
    pub const fn code(self, width: u8) -> Option<u32> {
        match self {
            NoStatement::None => None,
            NoStatement::Zero => Some(0),
            NoStatement::Mid => Some(1u32 << (width - 1)),
            NoStatement::Max => Some(max_code(width)),
            NoStatement::Value(code) => Some(code),
        }
    }
}

// ---------------------------------------------------------------------------
// Track quality tables
// ---------------------------------------------------------------------------

/// Code 15 has no published radius and reads as 0.
const STANDARD_ERROR_95CEP_FT: [f64; 15] = [
    177_697.0, 88_662.0, 70_927.0, 53_202.0, 35_504.0, 17_590.0, 7_101.0, 3_550.0, 567.0, 283.0,
    144.0, 68.0, 34.0, 19.0, 0.0,
];

const SPACE_ERROR_95CEP_FT: [f64; 15] = [
    39.0, 70.0, 127.0, 229.0, 413.0, 744.0, 1_342.0, 2_419.0, 4_361.0, 7_862.0, 14_173.0,
    25_551.0, 46_062.0, 83_040.0, 83_040.0,
];

/// The two track quality encodings in use.
///
/// Both store a 4-bit code where higher is better; they differ in the error
/// radius each code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTable {
    /// Air, surface, subsurface and land tracks.
    Standard,
    /// Space tracks.
    Space,
}

impl QualityTable {
    /// 95% circular error probable, in feet, for a raw quality code.
    /// Code 0 (no quality) maps to 0.
    pub fn error_95cep_ft(self, code: u32) -> f64 {
        if code == 0 {
            return 0.0;
        }
        match self {
            QualityTable::Standard => {
                let index = (code as usize - 1).min(STANDARD_ERROR_95CEP_FT.len() - 1);
                STANDARD_ERROR_95CEP_FT[index]
            }
            QualityTable::Space => {
                let index = 15usize.saturating_sub(code as usize);
                SPACE_ERROR_95CEP_FT[index]
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Field kinds
// ---------------------------------------------------------------------------

/// How a raw code converts to and from its accessor value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Unused bits, always sent as zero.
    Spare,
    /// Bits retired by the standard, always sent as zero.
    Disused,
    /// A single boolean bit.
    Flag,
    /// A plain unsigned number.
    Integer {
        /// No-statement policy.
        no_statement: NoStatement,
    },
    /// A code with published names. Codes past the table read as `UNDEFINED`.
    Enumerated {
        /// Name of each code, indexed by code.
        names: &'static [&'static str],
        /// No-statement policy.
        no_statement: NoStatement,
    },
    /// Unsigned linear quantity: `value = code * lsb + offset`, truncating.
    Scaled {
        /// Value of one code step.
        lsb: f64,
        /// Value of code 0.
        offset: f64,
        /// Accessor unit.
        unit: Unit,
        /// No-statement policy.
        no_statement: NoStatement,
    },
    /// Two's-complement quantity whose most negative code is the no-statement
    /// sentinel: `value = signed(code) * lsb`.
    Signed {
        /// Value of one code step.
        lsb: f64,
        /// Accessor unit.
        unit: Unit,
    },
    /// Geodetic latitude in degrees, two's complement over +/-90.
    ///
    /// Negative values truncate toward zero before negation, so the codes
    /// are not bit-exact with encoders that store `max + trunc(x)`: those
    /// land one step lower for every negative value.
    Latitude,
    /// Geodetic longitude in degrees, two's complement over +/-180. Same
    /// negative-value caveat as [`Latitude`](Self::Latitude).
    Longitude,
    /// Altitude in feet: codes below `2000 / lsb + 1` hold negative
    /// altitudes as `-2000 / code`, the rest hold `(code - base) * lsb`.
    /// Code 0 is the no-statement sentinel.
    PiecewiseAltitude {
        /// Step of the positive range, in feet.
        lsb: f64,
    },
    /// Angle in degrees reduced modulo `modulus`; all ones is no statement.
    Angle {
        /// Degrees per code.
        lsb: f64,
        /// Angle at which the value wraps to zero.
        modulus: f64,
    },
    /// Bearing as a fraction of a full circle over all codes.
    Bearing,
    /// 19-bit track number with its five-character form.
    TrackNumber,
    /// Six bits per callsign character.
    Callsign,
    /// Seven-bit ASCII text.
    Text,
    /// Time to input lockout in seconds.
    ///
    /// `t(0) = 0`, `t(n) = n(n+1)/2 + 1`; all ones is no statement.
    TimeToLockout,
    /// Four-bit track quality code.
    TrackQuality(QualityTable),
}

/// A field's width and conversion rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldType {
    /// Width in bits.
    pub width: u8,
    /// Conversion rule.
    pub kind: FieldKind,
}

impl FieldType {
    /// Unused bits.
    pub const fn spare(width: u8) -> Self {
        Self::new(width, FieldKind::Spare)
    }

    /// Retired bits.
    pub const fn disused(width: u8) -> Self {
        Self::new(width, FieldKind::Disused)
    }

    /// One boolean bit.
    pub const fn flag() -> Self {
        Self::new(1, FieldKind::Flag)
    }

    /// Plain unsigned number.
    pub const fn integer(width: u8, no_statement: NoStatement) -> Self {
        Self::new(width, FieldKind::Integer { no_statement })
    }

    /// Named codes.
    pub const fn enumerated(
        width: u8,
        names: &'static [&'static str],
        no_statement: NoStatement,
    ) -> Self {
        Self::new(width, FieldKind::Enumerated { names, no_statement })
    }

    /// Unsigned linear quantity starting at zero.
    pub const fn scaled(width: u8, lsb: f64, unit: Unit, no_statement: NoStatement) -> Self {
        Self::new(
            width,
            FieldKind::Scaled {
                lsb,
                offset: 0.0,
                unit,
                no_statement,
            },
        )
    }

    /// Two's-complement quantity with a most-negative sentinel.
    pub const fn signed(width: u8, lsb: f64, unit: Unit) -> Self {
        Self::new(width, FieldKind::Signed { lsb, unit })
    }

    /// Angle in degrees.
    pub const fn angle(width: u8, lsb: f64, modulus: f64) -> Self {
        Self::new(width, FieldKind::Angle { lsb, modulus })
    }

    /// Any kind at any width.
    ///
    /// Valued fields span 1 to 31 bits; spare and disused runs may fill a
    /// whole word.
    pub const fn new(width: u8, kind: FieldKind) -> Self {
        let limit = if matches!(kind, FieldKind::Spare | FieldKind::Disused) {
            MAX_SPARE_BITS
        } else {
            MAX_VALUE_BITS
        };
        assert!(width >= 1 && width <= limit, "field width out of range");
        Self { width, kind }
    }

    /// `true` for spare and disused runs, which carry no value.
    pub const fn is_padding(&self) -> bool {
        matches!(self.kind, FieldKind::Spare | FieldKind::Disused)
    }

    /// The no-statement sentinel code, if the kind reserves one.
    pub fn no_statement_code(&self) -> Option<u32> {
        let policy = match self.kind {
            FieldKind::Spare
            | FieldKind::Disused
            | FieldKind::Flag
            | FieldKind::Bearing
            | FieldKind::TrackNumber
            | FieldKind::Callsign
            | FieldKind::Text
            | FieldKind::TrackQuality(_) => NoStatement::None,
            FieldKind::Integer { no_statement }
            | FieldKind::Enumerated { no_statement, .. }
            | FieldKind::Scaled { no_statement, .. } => no_statement,
            FieldKind::Signed { .. } | FieldKind::Latitude | FieldKind::Longitude => {
                NoStatement::Mid
            }
            FieldKind::PiecewiseAltitude { .. } => NoStatement::Zero,
            FieldKind::Angle { .. } | FieldKind::TimeToLockout => NoStatement::Max,
        };
        policy.code(self.width)
    }

    /// `true` if `raw` is the no-statement sentinel.
    pub fn is_no_statement(&self, raw: u32) -> bool {
        self.no_statement_code() == Some(raw)
    }

    /// Code a freshly built word starts with: the sentinel, or zero.
    pub fn default_raw(&self) -> u32 {
        self.no_statement_code().unwrap_or(0)
    }

    /// Unit of the accessor value.
    pub fn unit(&self) -> Unit {
        match self.kind {
            FieldKind::Scaled { unit, .. } | FieldKind::Signed { unit, .. } => unit,
            FieldKind::Latitude
            | FieldKind::Longitude
            | FieldKind::Angle { .. }
            | FieldKind::Bearing => Unit::Degrees,
            FieldKind::PiecewiseAltitude { .. } => Unit::Feet,
            FieldKind::TimeToLockout => Unit::Seconds,
            _ => Unit::None,
        }
    }

    fn max(&self) -> u32 {
        max_code(self.width)
    }

    fn half(&self) -> i64 {
        1i64 << (self.width - 1)
    }

    // -- Decoding ------------------------------------------------------------

    /// Convert a raw code to its accessor value.
    pub fn decode(&self, raw: u32) -> FieldValue {
        let raw = raw & self.max();
        if self.is_no_statement(raw) {
            return FieldValue::NoStatement;
        }
        match self.kind {
            FieldKind::Spare | FieldKind::Disused => FieldValue::Spare,
            FieldKind::Flag => FieldValue::Flag(raw != 0),
            FieldKind::Integer { .. } | FieldKind::TrackQuality(_) => FieldValue::Integer(raw),
            FieldKind::Enumerated { names, .. } => FieldValue::Enumerated {
                code: raw,
                name: names.get(raw as usize).copied().unwrap_or("UNDEFINED"),
            },
            FieldKind::Scaled { lsb, offset, .. } => {
                FieldValue::Real(f64::from(raw) * lsb + offset)
            }
            FieldKind::Signed { lsb, .. } => FieldValue::Real(self.sign_extend(raw) as f64 * lsb),
            FieldKind::Latitude => FieldValue::Real(self.arc_degrees(raw, 90.0)),
            FieldKind::Longitude => FieldValue::Real(self.arc_degrees(raw, 180.0)),
            FieldKind::PiecewiseAltitude { lsb } => {
                let base = piecewise_base(lsb);
                if raw < base {
                    FieldValue::Real(PIECEWISE_ALTITUDE_FLOOR_FT / f64::from(raw))
                } else {
                    FieldValue::Real(f64::from(raw - base) * lsb)
                }
            }
            FieldKind::Angle { lsb, .. } => FieldValue::Real(f64::from(raw) * lsb),
            FieldKind::Bearing => FieldValue::Real(f64::from(raw) * self.bearing_lsb()),
            FieldKind::TrackNumber => FieldValue::Text(decode_track_number(raw)),
            FieldKind::Callsign => FieldValue::Text(decode_callsign(raw, self.width / 6)),
            FieldKind::Text => FieldValue::Text(decode_text(raw, self.width / 7)),
            FieldKind::TimeToLockout => FieldValue::Real(time_to_lockout_seconds(raw)),
        }
    }

    fn sign_extend(&self, raw: u32) -> i64 {
        let value = i64::from(raw);
        if value >= self.half() {
            value - 2 * self.half()
        } else {
            value
        }
    }

    fn arc_steps(&self) -> f64 {
        (self.half() - 1) as f64
    }

    fn arc_degrees(&self, raw: u32, range: f64) -> f64 {
        self.sign_extend(raw) as f64 * range / self.arc_steps()
    }

    fn bearing_lsb(&self) -> f64 {
        360.0 / (f64::from(self.max()) + 1.0)
    }

    // -- Encoding ------------------------------------------------------------

    /// Encode a numeric accessor value, clamping to the representable range.
    ///
    /// Returns `None` for kinds that do not take numbers (spare and text
    /// kinds).
    pub fn encode_number(&self, value: f64) -> Option<u32> {
        let raw = match self.kind {
            FieldKind::Spare
            | FieldKind::Disused
            | FieldKind::TrackNumber
            | FieldKind::Callsign
            | FieldKind::Text => return None,
            FieldKind::Flag => u32::from(value != 0.0 && !value.is_nan()),
            FieldKind::Integer { .. } | FieldKind::Enumerated { .. } | FieldKind::TrackQuality(_) => {
                clamp_code(truncate(value), 0, self.max())
            }
            FieldKind::Scaled { lsb, offset, .. } => {
                let (lo, hi) = self.reported_range();
                let raw = clamp_code(truncate((value - offset) / lsb), lo, hi);
                self.avoid_sentinel(raw, lo, hi)
            }
            FieldKind::Signed { lsb, .. } => self.encode_signed(value / lsb),
            FieldKind::Latitude => {
                self.encode_signed(value.clamp(-90.0, 90.0) * self.arc_steps() / 90.0)
            }
            FieldKind::Longitude => {
                let wrapped = if value.is_finite() && value.abs() > 180.0 {
                    (value + 180.0).rem_euclid(360.0) - 180.0
                } else {
                    value
                };
                self.encode_signed(wrapped * self.arc_steps() / 180.0)
            }
            FieldKind::PiecewiseAltitude { lsb } => self.encode_piecewise_altitude(value, lsb),
            FieldKind::Angle { lsb, modulus } => {
                if value.is_nan() {
                    return Some(0);
                }
                let turn = (modulus / lsb).round();
                let code = truncate(value.rem_euclid(modulus) / lsb) % turn;
                clamp_code(code, 0, self.max() - 1)
            }
            FieldKind::Bearing => {
                if value.is_nan() {
                    return Some(0);
                }
                let turn = f64::from(self.max()) + 1.0;
                let code = truncate(value.rem_euclid(360.0) / self.bearing_lsb()) % turn;
                clamp_code(code, 0, self.max())
            }
            FieldKind::TimeToLockout => encode_time_to_lockout(value, self.max() - 1),
        };
        Some(raw)
    }

    /// Encode a text accessor value.
    ///
    /// Returns `Ok(None)` for kinds that do not take text.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidTrackNumber`] for a malformed track number.
    pub fn encode_text(&self, text: &str) -> Result<Option<u32>, CodecError> {
        match self.kind {
            FieldKind::TrackNumber => encode_track_number(text).map(Some),
            FieldKind::Callsign => Ok(Some(encode_callsign(text, self.width / 6))),
            FieldKind::Text => Ok(Some(encode_text(text, self.width / 7))),
            _ => Ok(None),
        }
    }

    /// Lowest and highest codes a reported value may use.
    fn reported_range(&self) -> (u32, u32) {
        let max = self.max();
        match self.no_statement_code() {
            Some(0) => (1, max),
            Some(code) if code == max => (0, max - 1),
            _ => (0, max),
        }
    }

    fn avoid_sentinel(&self, raw: u32, lo: u32, hi: u32) -> u32 {
        match self.no_statement_code() {
            Some(code) if code == raw && raw > lo => raw - 1,
            Some(code) if code == raw && raw < hi => raw + 1,
            _ => raw,
        }
    }

    fn encode_signed(&self, units: f64) -> u32 {
        let limit = self.half() - 1;
        let steps = if units.is_nan() {
            0
        } else {
            // i64 conversion saturates; the clamp below bounds the result.
            #[allow(clippy::cast_possible_truncation)]
            let steps = (units.signum() * (units.abs() + QUANTUM_EPSILON).trunc()) as i64;
            steps.clamp(-limit, limit)
        };
        let raw = steps.rem_euclid(2 * self.half());
        u32::try_from(raw).unwrap_or(0)
    }

    fn encode_piecewise_altitude(&self, feet: f64, lsb: f64) -> u32 {
        let base = piecewise_base(lsb);
        if feet.is_nan() {
            return base;
        }
        if feet <= -lsb + QUANTUM_EPSILON {
            let code = truncate(PIECEWISE_ALTITUDE_FLOOR_FT / feet);
            clamp_code(code, 1, base - 1)
        } else if feet < 0.0 {
            base
        } else {
            let steps = truncate(feet / lsb);
            clamp_code(steps + f64::from(base), base, self.max())
        }
    }
}

/// Truncate toward zero after nudging by [`QUANTUM_EPSILON`].
fn truncate(units: f64) -> f64 {
    if units.is_nan() {
        return 0.0;
    }
    (units + QUANTUM_EPSILON).trunc()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_code(code: f64, lo: u32, hi: u32) -> u32 {
    if code <= f64::from(lo) {
        lo
    } else if code >= f64::from(hi) {
        hi
    } else {
        code as u32
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn piecewise_base(lsb: f64) -> u32 {
    (-PIECEWISE_ALTITUDE_FLOOR_FT / lsb).round() as u32 + 1
}

// ---------------------------------------------------------------------------
// Time to input lockout
// ---------------------------------------------------------------------------

/// Seconds represented by a time-to-lockout code: `n(n+1)/2 + 1` for
/// code `n`, 0 for code 0.
pub fn time_to_lockout_seconds(code: u32) -> f64 {
    if code == 0 {
        return 0.0;
    }
    let n = f64::from(code);
    n * (n + 1.0) / 2.0 + 1.0
}

/// Largest code whose time does not exceed `seconds`, capped at `max_code`.
fn encode_time_to_lockout(seconds: f64, max_code: u32) -> u32 {
    if seconds.is_nan() {
        return 0;
    }
    (1..=max_code)
        .take_while(|&n| time_to_lockout_seconds(n) <= seconds + QUANTUM_EPSILON)
        .last()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Track numbers
// ---------------------------------------------------------------------------

/// Convert a five-character track number ("A1234", "00017") to its 19-bit code.
///
/// The first two characters are five bits each (`0`-`7` or a letter other
/// than `I` and `O`), the last three are octal digits. Shorter strings are
/// padded on the left with `0`.
///
/// # Errors
///
/// [`CodecError::InvalidTrackNumber`] if the string is longer than five
/// characters or holds a character outside its position's alphabet.
pub fn encode_track_number(text: &str) -> Result<u32, CodecError> {
    let invalid = |reason: &str| CodecError::InvalidTrackNumber {
        value: text.to_string(),
        reason: reason.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.chars().count() > 5 {
        return Err(invalid("must be at most 5 characters"));
    }
    let padded = format!("{trimmed:0>5}").to_ascii_uppercase();
    let chars: Vec<char> = padded.chars().collect();

    let mut code = 0u32;
    for &c in &chars[..2] {
        code = (code << 5) | five_bit_code(c).map_err(|reason| invalid(reason))?;
    }
    for &c in &chars[2..] {
        let digit = c
            .to_digit(8)
            .ok_or_else(|| invalid("last three characters must be octal digits"))?;
        code = (code << 3) | digit;
    }
    Ok(code)
}

/// Five-character form of a 19-bit track number code.
pub fn decode_track_number(code: u32) -> String {
    let mut out = String::with_capacity(5);
    out.push(five_bit_char((code >> 14) & 0x1F));
    out.push(five_bit_char((code >> 9) & 0x1F));
    for shift in [6, 3, 0] {
        out.push(char::from(b'0' + ((code >> shift) & 0x7) as u8));
    }
    out
}

fn five_bit_code(c: char) -> Result<u32, &'static str> {
    match c {
        '0'..='7' => Ok(c as u32 - '0' as u32),
        'I' | 'O' => Err("letters I and O are not used"),
        'A'..='Z' => {
            let mut code = c as u32 - 'A' as u32 + 8;
            if c > 'I' {
                code -= 1;
            }
            if c > 'O' {
                code -= 1;
            }
            Ok(code)
        }
        _ => Err("leading characters must be 0-7 or A-Z"),
    }
}

fn five_bit_char(code: u32) -> char {
    if code < 8 {
        return char::from(b'0' + code as u8);
    }
    let mut c = b'A' + (code - 8) as u8;
    if c >= b'I' {
        c += 1;
    }
    if c >= b'O' {
        c += 1;
    }
    char::from(c)
}

// ---------------------------------------------------------------------------
// Callsigns and text
// ---------------------------------------------------------------------------

fn callsign_code(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        '0' => 63,
        d @ '1'..='9' => d as u32 - '0' as u32,
        l @ 'A'..='Z' => l as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

fn callsign_char(code: u32) -> char {
    match code {
        0 => ' ',
        1..=9 => char::from(b'0' + code as u8),
        10..=35 => char::from(b'A' + (code - 10) as u8),
        63 => '0',
        _ => '_',
    }
}

fn encode_callsign(text: &str, count: u8) -> u32 {
    let mut chars = text.chars();
    (0..count).fold(0, |acc, _| (acc << 6) | chars.next().map_or(0, callsign_code))
}

fn decode_callsign(raw: u32, count: u8) -> String {
    let text: String = (0..count)
        .rev()
        .map(|i| callsign_char((raw >> (u32::from(i) * 6)) & 0x3F))
        .collect();
    text.trim_end().to_string()
}

fn encode_text(text: &str, count: u8) -> u32 {
    let mut chars = text.chars();
    (0..count).fold(0, |acc, _| {
        let code = chars
            .next()
            .filter(char::is_ascii)
            .map_or(0, |c| c as u32 & 0x7F);
        (acc << 7) | code
    })
}

fn decode_text(raw: u32, count: u8) -> String {
    let text: String = (0..count)
        .rev()
        .map(|i| char::from(((raw >> (u32::from(i) * 7)) & 0x7F) as u8))
        .collect();
    text.trim_end_matches(['\0', ' ']).to_string()
}

// ---------------------------------------------------------------------------
// Accessor values
// ---------------------------------------------------------------------------

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// The sender did not report this field.
    NoStatement,
    /// Spare or disused bits.
    Spare,
    /// A boolean bit.
    Flag(bool),
    /// A plain number or a quality code.
    Integer(u32),
    /// A physical quantity in the field's unit.
    Real(f64),
    /// A named code.
    Enumerated {
        /// The raw code.
        code: u32,
        /// Its published name.
        name: &'static str,
    },
    /// A track number, callsign or free text.
    Text(String),
}

impl FieldValue {
    /// `true` for [`FieldValue::NoStatement`].
    pub fn is_no_statement(&self) -> bool {
        matches!(self, FieldValue::NoStatement)
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Real(v) => Some(*v),
            FieldValue::Integer(n) | FieldValue::Enumerated { code: n, .. } => Some(f64::from(*n)),
            FieldValue::Flag(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Integer view of the value, if it has one.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            FieldValue::Integer(n) | FieldValue::Enumerated { code: n, .. } => Some(*n),
            FieldValue::Flag(b) => Some(u32::from(*b)),
            _ => None,
        }
    }

    /// Boolean view of the value, if it has one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Text view of the value, if it has one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Enumerated { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::NoStatement => write!(f, "no statement"),
            FieldValue::Spare => write!(f, "-"),
            FieldValue::Flag(b) => write!(f, "{b}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Enumerated { code, name } => write!(f, "{name} ({code})"),
            FieldValue::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

// ---------------------------------------------------------------------------
// Field definitions
// ---------------------------------------------------------------------------

/// A named field slot within a word definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// Field name, unique within its word.
    pub name: &'static str,
    /// Width and conversion.
    pub ty: FieldType,
}

impl FieldDef {
    /// Name a field type.
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    /// Width in bits.
    pub const fn width(&self) -> u8 {
        self.ty.width
    }

    /// Convert a raw code to its accessor value.
    pub fn decode(&self, raw: u32) -> FieldValue {
        self.ty.decode(raw)
    }

    /// `true` if `raw` is this field's no-statement sentinel.
    pub fn is_no_statement(&self, raw: u32) -> bool {
        self.ty.is_no_statement(raw)
    }

    /// Convert an accessor value to a raw code.
    ///
    /// Numbers clamp silently. [`FieldValue::NoStatement`] produces the
    /// sentinel.
    ///
    /// # Errors
    ///
    /// [`CodecError::AccessorMismatch`] when the value's kind does not fit
    /// the field (text into a number, a no-statement into a field with no
    /// sentinel) and [`CodecError::InvalidTrackNumber`] for a malformed
    /// track number.
    pub fn encode(&self, value: &FieldValue) -> Result<u32, CodecError> {
        let mismatch = |expected| CodecError::AccessorMismatch {
            field: self.name,
            expected,
        };
        match (value, self.ty.kind) {
            (_, FieldKind::Spare | FieldKind::Disused) => match value {
                FieldValue::Spare => Ok(0),
                _ => Err(mismatch("a spare")),
            },
            (FieldValue::NoStatement, _) => self
                .ty
                .no_statement_code()
                .ok_or_else(|| mismatch("a reported")),
            (FieldValue::Text(text), _) => {
                self.ty.encode_text(text)?.ok_or_else(|| mismatch("a numeric"))
            }
            (FieldValue::Spare, _) => Err(mismatch("a reported")),
            (other, _) => other
                .as_f64()
                .and_then(|v| self.ty.encode_number(v))
                .ok_or_else(|| mismatch("a text")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_types::SPEED_KNOTS;

    fn def(ty: FieldType) -> FieldDef {
        FieldDef::new("Test", ty)
    }

    fn round(field: &FieldDef, value: f64) -> FieldValue {
        field.decode(field.encode(&FieldValue::Real(value)).unwrap())
    }

    // -- No-statement policies -----------------------------------------------

    #[test]
    fn no_statement_codes() {
        assert_eq!(NoStatement::None.code(8), None);
        assert_eq!(NoStatement::Zero.code(8), Some(0));
        assert_eq!(NoStatement::Mid.code(8), Some(128));
        assert_eq!(NoStatement::Max.code(8), Some(255));
        assert_eq!(NoStatement::Value(4).code(3), Some(4));
    }

    #[test]
    fn sentinel_decodes_to_no_statement_and_back() {
        let field = def(FieldType::integer(5, NoStatement::Max));
        assert_eq!(field.decode(31), FieldValue::NoStatement);
        assert_eq!(field.encode(&FieldValue::NoStatement).unwrap(), 31);
    }

    #[test]
    fn no_statement_into_field_without_sentinel_is_rejected() {
        let field = def(FieldType::flag());
        assert!(matches!(
            field.encode(&FieldValue::NoStatement),
            Err(CodecError::AccessorMismatch { .. })
        ));
    }

    // -- Scaled ----------------------------------------------------------------

    #[test]
    fn speed_in_knots_clamps_below_sentinel() {
        let field = def(SPEED_KNOTS);
        let raw = field.encode(&FieldValue::Real(2000.0)).unwrap();
        assert_eq!(raw, 254);
        assert_eq!(field.decode(raw), FieldValue::Real(1270.0));
    }

    #[test]
    fn time_to_go_truncates_to_two_second_steps() {
        let field = def(FieldType::scaled(7, 2.0, Unit::Seconds, NoStatement::Max));
        let raw = field.encode(&FieldValue::Real(5.0)).unwrap();
        assert_eq!(raw, 2);
        assert_eq!(field.decode(raw), FieldValue::Real(4.0));
    }

    #[test]
    fn scaled_negative_clamps_to_lowest_code() {
        let field = def(FieldType::scaled(8, 5.0, Unit::Knots, NoStatement::Zero));
        assert_eq!(field.encode(&FieldValue::Real(-40.0)).unwrap(), 1);
    }

    #[test]
    fn scaled_round_trips_non_binary_steps() {
        let field = def(FieldType::scaled(16, 0.01, Unit::Degrees, NoStatement::Max));
        assert_eq!(field.encode(&FieldValue::Real(45.12)).unwrap(), 4512);
    }

    #[test]
    fn scaled_accepts_integer_input() {
        let field = def(FieldType::scaled(12, 100.0, Unit::Pounds, NoStatement::Max));
        assert_eq!(field.encode(&FieldValue::Integer(5000)).unwrap(), 50);
    }

    // -- Signed ----------------------------------------------------------------

    #[test]
    fn signed_reserves_most_negative_code() {
        let field = def(FieldType::signed(8, 1.0, Unit::Feet));
        assert_eq!(field.decode(0x80), FieldValue::NoStatement);
        assert_eq!(field.encode(&FieldValue::Real(-1000.0)).unwrap(), 0x81);
        assert_eq!(field.encode(&FieldValue::Real(1000.0)).unwrap(), 0x7F);
        assert_eq!(field.decode(0xFF), FieldValue::Real(-1.0));
    }

    #[test]
    fn signed_round_trip() {
        let field = def(FieldType::signed(16, 0.25, Unit::MetersPerSecond));
        for v in [-8191.75, -0.25, 0.0, 0.25, 1234.5, 8191.75] {
            assert_eq!(round(&field, v), FieldValue::Real(v));
        }
    }

    // -- Latitude / longitude ---------------------------------------------------

    #[test]
    fn latitude_extremes_avoid_sentinel() {
        let field = def(FieldType::new(21, FieldKind::Latitude));
        let south = field.encode(&FieldValue::Real(-90.0)).unwrap();
        assert_ne!(south, 1 << 20);
        assert_eq!(field.decode(south), FieldValue::Real(-90.0));
        assert_eq!(round(&field, 90.0), FieldValue::Real(90.0));
        assert_eq!(round(&field, 120.0), FieldValue::Real(90.0));
    }

    #[test]
    fn negative_latitude_truncates_toward_zero() {
        let field = def(FieldType::new(21, FieldKind::Latitude));
        let lsb = 90.0 / f64::from((1u32 << 20) - 1);
        let raw = field.encode(&FieldValue::Real(-1.5 * lsb)).unwrap();
        assert_eq!(raw, (1 << 21) - 1);
        assert_eq!(field.decode(raw), FieldValue::Real(-lsb));
    }

    #[test]
    fn latitude_resolution() {
        let field = def(FieldType::new(21, FieldKind::Latitude));
        let FieldValue::Real(v) = round(&field, 37.123_456) else {
            panic!("expected a real");
        };
        assert!((v - 37.123_456).abs() < 90.0 / f64::from(1u32 << 20));
    }

    #[test]
    fn longitude_wraps() {
        let field = def(FieldType::new(22, FieldKind::Longitude));
        let FieldValue::Real(v) = round(&field, 190.0) else {
            panic!("expected a real");
        };
        assert!((v + 170.0).abs() < 1e-3);
    }

    // -- Piecewise altitude -----------------------------------------------------

    #[test]
    fn piecewise_altitude_regions() {
        let field = def(FieldType::new(12, FieldKind::PiecewiseAltitude { lsb: 25.0 }));
        assert_eq!(field.encode(&FieldValue::Real(0.0)).unwrap(), 81);
        assert_eq!(field.encode(&FieldValue::Real(100.0)).unwrap(), 85);
        assert_eq!(field.encode(&FieldValue::Real(-25.0)).unwrap(), 80);
        assert_eq!(field.encode(&FieldValue::Real(-2000.0)).unwrap(), 1);
        assert_eq!(field.encode(&FieldValue::Real(-9000.0)).unwrap(), 1);
        assert_eq!(field.encode(&FieldValue::Real(1.0e7)).unwrap(), 4095);
        assert_eq!(field.decode(0), FieldValue::NoStatement);
        assert_eq!(field.decode(40), FieldValue::Real(-50.0));
    }

    // -- Angles -----------------------------------------------------------------

    #[test]
    fn course_wraps_modulo_360() {
        let field = def(FieldType::angle(9, 1.0, 360.0));
        assert_eq!(field.encode(&FieldValue::Real(370.0)).unwrap(), 10);
        assert_eq!(field.encode(&FieldValue::Real(-90.0)).unwrap(), 270);
        assert_eq!(field.encode(&FieldValue::Real(360.0)).unwrap(), 0);
        assert_eq!(field.decode(511), FieldValue::NoStatement);
    }

    #[test]
    fn bearing_covers_full_circle() {
        let field = def(FieldType::new(12, FieldKind::Bearing));
        assert_eq!(field.encode(&FieldValue::Real(180.0)).unwrap(), 2048);
        assert_eq!(field.decode(1024), FieldValue::Real(90.0));
    }

    // -- Time to lockout ----------------------------------------------------------

    #[test]
    fn time_to_lockout_follows_triangular_formula() {
        assert_eq!(time_to_lockout_seconds(0), 0.0);
        assert_eq!(time_to_lockout_seconds(1), 2.0);
        assert_eq!(time_to_lockout_seconds(7), 29.0);
        assert_eq!(time_to_lockout_seconds(8), 37.0);
        assert_eq!(time_to_lockout_seconds(30), 466.0);
    }

    #[test]
    fn time_to_lockout_encodes_to_interval_floor() {
        let field = def(FieldType::new(5, FieldKind::TimeToLockout));
        assert_eq!(field.encode(&FieldValue::Real(30.0)).unwrap(), 7);
        assert_eq!(field.encode(&FieldValue::Real(36.9)).unwrap(), 7);
        assert_eq!(field.encode(&FieldValue::Real(37.0)).unwrap(), 8);
        assert_eq!(field.encode(&FieldValue::Real(1.5)).unwrap(), 0);
        assert_eq!(field.encode(&FieldValue::Real(10_000.0)).unwrap(), 30);
        assert_eq!(field.decode(31), FieldValue::NoStatement);
        for code in 0..=30 {
            let seconds = time_to_lockout_seconds(code);
            assert_eq!(field.encode(&FieldValue::Real(seconds)).unwrap(), code);
        }
    }

    // -- Track numbers ----------------------------------------------------------

    #[test]
    fn track_number_digits_only() {
        assert_eq!(encode_track_number("00017").unwrap(), 0o17);
        assert_eq!(decode_track_number(0o17), "00017");
    }

    #[test]
    fn track_number_with_letters() {
        let code = encode_track_number("AZ123").unwrap();
        assert_eq!(code >> 14, 8);
        assert_eq!((code >> 9) & 0x1F, 31);
        assert_eq!(code & 0o777, 0o123);
        assert_eq!(decode_track_number(code), "AZ123");
    }

    #[test]
    fn track_number_skips_i_and_o() {
        let code = encode_track_number("JP000").unwrap();
        assert_eq!(code >> 14, 16);
        assert_eq!((code >> 9) & 0x1F, 21);
        assert_eq!(decode_track_number(code), "JP000");
    }

    #[test]
    fn track_number_short_input_is_left_padded() {
        assert_eq!(encode_track_number("7").unwrap(), 7);
    }

    #[test]
    fn track_number_rejects_bad_input() {
        assert!(encode_track_number("I0000").is_err());
        assert!(encode_track_number("00008").is_err());
        assert!(encode_track_number("123456").is_err());
        assert!(encode_track_number("#0000").is_err());
    }

    // -- Callsigns and text -------------------------------------------------------

    #[test]
    fn callsign_round_trip() {
        let field = def(FieldType::new(24, FieldKind::Callsign));
        let raw = field.encode(&FieldValue::from("AB10")).unwrap();
        assert_eq!(raw, (10 << 18) | (11 << 12) | (1 << 6) | 63);
        assert_eq!(field.decode(raw), FieldValue::from("AB10"));
    }

    #[test]
    fn short_callsign_is_space_padded() {
        let field = def(FieldType::new(24, FieldKind::Callsign));
        let raw = field.encode(&FieldValue::from("X")).unwrap();
        assert_eq!(field.decode(raw), FieldValue::from("X"));
    }

    #[test]
    fn text_round_trip() {
        let field = def(FieldType::new(28, FieldKind::Text));
        let raw = field.encode(&FieldValue::from("Hi!")).unwrap();
        assert_eq!(field.decode(raw), FieldValue::from("Hi!"));
    }

    // -- Accessor mismatches ----------------------------------------------------

    #[test]
    fn text_into_numeric_field_is_rejected() {
        let field = def(FieldType::integer(4, NoStatement::None));
        let err = field.encode(&FieldValue::from("x")).unwrap_err();
        assert_eq!(err.to_string(), "field Test expects a numeric value");
    }

    #[test]
    fn spare_accepts_only_spare() {
        let field = def(FieldType::spare(3));
        assert_eq!(field.encode(&FieldValue::Spare).unwrap(), 0);
        assert!(field.encode(&FieldValue::Integer(1)).is_err());
    }

    // -- Enumerations and quality -------------------------------------------------

    #[test]
    fn enumerated_names() {
        const NAMES: &[&str] = &["NONE", "ONE"];
        let field = def(FieldType::enumerated(2, NAMES, NoStatement::None));
        assert_eq!(
            field.decode(1),
            FieldValue::Enumerated {
                code: 1,
                name: "ONE"
            }
        );
        assert_eq!(field.decode(3).as_str(), Some("UNDEFINED"));
    }

    #[test]
    fn quality_tables() {
        assert_eq!(QualityTable::Standard.error_95cep_ft(0), 0.0);
        assert_eq!(QualityTable::Standard.error_95cep_ft(1), 177_697.0);
        assert_eq!(QualityTable::Standard.error_95cep_ft(14), 19.0);
        assert_eq!(QualityTable::Standard.error_95cep_ft(15), 0.0);
        assert_eq!(QualityTable::Space.error_95cep_ft(15), 39.0);
        assert_eq!(QualityTable::Space.error_95cep_ft(1), 83_040.0);
    }

    #[test]
    fn field_value_serializes_with_kind_tag() {
        let json = serde_json::to_value(FieldValue::Real(1.5)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "real", "value": 1.5}));
        let json = serde_json::to_value(FieldValue::NoStatement).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "no_statement"}));
    }
}
