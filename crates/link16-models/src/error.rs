//! Error types for the `link16-models` crate.
//!
//! Every fallible decode, encode and framing operation returns a variant of
//! [`CodecError`]. Requests a family simply does not support (an illegal
//! continuation number, a lookup for a word of another family, dispatching an
//! unregistered key) are not errors: they surface as `None`.

/// Errors produced while reading, writing or validating J-series messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The bit source ran out before a field or header could be read.
    #[error("bit stream underrun: needed {needed} bits, {available} available")]
    Underrun {
        /// Number of bits the read required.
        needed: usize,
        /// Number of bits left in the source.
        available: usize,
    },

    /// A word header carried the reserved word-format code.
    #[error("invalid word format code {code:#04b}")]
    InvalidWordFormat {
        /// The two-bit format code read from the header.
        code: u8,
    },

    /// A word of one format appeared where another was required.
    #[error("expected {expected} word, found {found} word")]
    UnexpectedWordFormat {
        /// The word format the decoder required at this position.
        expected: &'static str,
        /// The word format actually present.
        found: &'static str,
    },

    /// No message family is registered for the given label and sublabel.
    #[error("unknown message family J{label}.{sublabel}")]
    UnknownFamily {
        /// Label from the Initial word header.
        label: u8,
        /// Sublabel from the Initial word header.
        sublabel: u8,
    },

    /// A continuation number outside the family's legal set.
    #[error("continuation {number} is not defined for J{label}.{sublabel}")]
    UnsupportedContinuation {
        /// Family label.
        label: u8,
        /// Family sublabel.
        sublabel: u8,
        /// The offending continuation number.
        number: u8,
    },

    /// A continuation number appeared twice within one message.
    #[error("continuation {number} repeated in J{label}.{sublabel}")]
    DuplicateContinuation {
        /// Family label.
        label: u8,
        /// Family sublabel.
        sublabel: u8,
        /// The repeated continuation number.
        number: u8,
    },

    /// An extension number outside the family's legal set.
    #[error("extension {number} is not defined for J{label}.{sublabel}")]
    UnsupportedExtension {
        /// Family label.
        label: u8,
        /// Family sublabel.
        sublabel: u8,
        /// The offending extension number.
        number: u8,
    },

    /// Extension words must be numbered contiguously from zero.
    #[error("extension {present} cannot be sent without extension {missing}")]
    ExtensionGap {
        /// The extension that is present.
        present: u8,
        /// The lower-numbered extension that is absent.
        missing: u8,
    },

    /// More sub-words than the message length indicator can announce.
    #[error("message has {count} sub-words, at most {max} can be sent")]
    TooManyWords {
        /// Number of sub-words attached to the message.
        count: usize,
        /// Largest count the header can carry.
        max: usize,
    },

    /// A word from another family was attached to a message.
    #[error("word {word} does not belong to J{label}.{sublabel}")]
    ForeignWord {
        /// Name of the rejected word definition.
        word: &'static str,
        /// Label of the receiving message.
        label: u8,
        /// Sublabel of the receiving message.
        sublabel: u8,
    },

    /// A track number string could not be converted to its 19-bit code.
    #[error("invalid track number \"{value}\": {reason}")]
    InvalidTrackNumber {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A field name is not part of the word definition.
    #[error("word {word} has no field named {field}")]
    UnknownField {
        /// Name of the word definition.
        word: &'static str,
        /// The requested field name.
        field: String,
    },

    /// The accessor value does not match the kind of the field.
    #[error("field {field} expects {expected} value")]
    AccessorMismatch {
        /// The field being written.
        field: &'static str,
        /// Kind of value the field accepts.
        expected: &'static str,
    },

    /// Hexadecimal input could not be parsed.
    #[error("invalid hex input: {reason}")]
    InvalidHex {
        /// Human-readable explanation.
        reason: String,
    },

    /// A DIS entity identifier string is not `site:application:entity`.
    #[error("invalid DIS entity id \"{value}\": expected site:application:entity")]
    InvalidEntityId {
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_underrun() {
        let err = CodecError::Underrun {
            needed: 13,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "bit stream underrun: needed 13 bits, 4 available"
        );
    }

    #[test]
    fn error_display_unknown_family() {
        let err = CodecError::UnknownFamily {
            label: 99,
            sublabel: 0,
        };
        assert_eq!(err.to_string(), "unknown message family J99.0");
    }

    #[test]
    fn error_display_word_format() {
        let err = CodecError::InvalidWordFormat { code: 3 };
        assert_eq!(err.to_string(), "invalid word format code 0b11");
    }

    #[test]
    fn error_display_track_number() {
        let err = CodecError::InvalidTrackNumber {
            value: "I0001".into(),
            reason: "letters I and O are not used".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid track number \"I0001\": letters I and O are not used"
        );
    }

    #[test]
    fn error_display_duplicate_continuation() {
        let err = CodecError::DuplicateContinuation {
            label: 3,
            sublabel: 2,
            number: 1,
        };
        assert_eq!(err.to_string(), "continuation 1 repeated in J3.2");
    }

    #[test]
    fn error_display_extension_gap() {
        let err = CodecError::ExtensionGap {
            present: 1,
            missing: 0,
        };
        assert_eq!(
            err.to_string(),
            "extension 1 cannot be sent without extension 0"
        );
    }
}
