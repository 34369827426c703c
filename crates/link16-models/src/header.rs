//! Word headers.
//!
//! Every 70-bit word opens with a two-bit word format. The Initial word
//! follows it with label, sublabel and the message length indicator; a
//! Continuation word with its number; an Extension word with nothing, its
//! number being its position among the extensions of the message.
//!
//! | Kind | Header bits | Data bits |
//! |------|-------------|-----------|
//! | Initial | format (2) label (5) sublabel (3) length (3) | 57 |
//! | Continuation | format (2) number (5) | 63 |
//! | Extension | format (2) | 68 |

use crate::bits::{BitReader, BitWriter};
use crate::error::CodecError;

/// Word format code of an Initial word.
pub const FORMAT_INITIAL: u32 = 0b00;
/// Word format code of an Extension word.
pub const FORMAT_EXTENSION: u32 = 0b01;
/// Word format code of a Continuation word.
pub const FORMAT_CONTINUATION: u32 = 0b10;

/// Largest number of words that may follow an Initial word.
pub const MAX_FOLLOWING_WORDS: u8 = 7;

/// A decoded word header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Header of an Initial word.
    Initial {
        /// Family label.
        label: u8,
        /// Family sublabel.
        sublabel: u8,
        /// Number of words following this one in the same message.
        length: u8,
    },
    /// Header of a Continuation word.
    Continuation {
        /// Continuation number.
        number: u8,
    },
    /// Header of an Extension word.
    Extension,
}

impl Header {
    /// Read a header.
    ///
    /// # Errors
    ///
    /// [`CodecError::Underrun`] on a short source and
    /// [`CodecError::InvalidWordFormat`] for the reserved format code.
    pub fn read(reader: &mut BitReader<'_>) -> Result<Self, CodecError> {
        match reader.read(2)? {
            FORMAT_INITIAL => Ok(Header::Initial {
                label: narrow(reader.read(5)?),
                sublabel: narrow(reader.read(3)?),
                length: narrow(reader.read(3)?),
            }),
            FORMAT_CONTINUATION => Ok(Header::Continuation {
                number: narrow(reader.read(5)?),
            }),
            FORMAT_EXTENSION => Ok(Header::Extension),
            code => Err(CodecError::InvalidWordFormat { code: narrow(code) }),
        }
    }

    /// Append the header.
    pub fn write(&self, writer: &mut BitWriter) {
        match *self {
            Header::Initial {
                label,
                sublabel,
                length,
            } => {
                writer.write(FORMAT_INITIAL, 2);
                writer.write(u32::from(label), 5);
                writer.write(u32::from(sublabel), 3);
                writer.write(u32::from(length), 3);
            }
            Header::Continuation { number } => {
                writer.write(FORMAT_CONTINUATION, 2);
                writer.write(u32::from(number), 5);
            }
            Header::Extension => writer.write(FORMAT_EXTENSION, 2),
        }
    }

    /// Header size in bits.
    pub fn bits(&self) -> usize {
        match self {
            Header::Initial { .. } => 13,
            Header::Continuation { .. } => 7,
            Header::Extension => 2,
        }
    }

    /// Lower-case name of the word kind this header opens.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Header::Initial { .. } => "initial",
            Header::Continuation { .. } => "continuation",
            Header::Extension => "extension",
        }
    }
}

/// Header codes are at most five bits wide.
#[allow(clippy::cast_possible_truncation)]
fn narrow(code: u32) -> u8 {
    code as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordKind;

    #[test]
    fn header_sizes_complete_a_word() {
        let initial = Header::Initial {
            label: 3,
            sublabel: 2,
            length: 1,
        };
        assert_eq!(initial.bits() as u32 + WordKind::Initial.data_bits(), 70);
        assert_eq!(
            Header::Continuation { number: 1 }.bits() as u32 + WordKind::Continuation(1).data_bits(),
            70
        );
        assert_eq!(Header::Extension.bits() as u32 + WordKind::Extension(0).data_bits(), 70);
    }

    #[test]
    fn initial_header_layout() {
        let mut w = BitWriter::new();
        Header::Initial {
            label: 3,
            sublabel: 2,
            length: 5,
        }
        .write(&mut w);
        // 00 00011 010 101 -> 0000_0110 1010_1000
        assert_eq!(w.into_bytes(), vec![0b0000_0110, 0b1010_1000]);
    }

    #[test]
    fn headers_read_back() {
        let headers = [
            Header::Initial {
                label: 31,
                sublabel: 7,
                length: 7,
            },
            Header::Continuation { number: 18 },
            Header::Extension,
        ];
        let mut w = BitWriter::new();
        for h in &headers {
            h.write(&mut w);
        }
        let bits = w.into_bits();
        let mut r = BitReader::new(&bits);
        for h in &headers {
            assert_eq!(Header::read(&mut r).unwrap(), *h);
        }
    }

    #[test]
    fn reserved_format_is_rejected() {
        let bytes = [0b1100_0000];
        let mut r = BitReader::from_bytes(&bytes);
        assert_eq!(
            Header::read(&mut r),
            Err(CodecError::InvalidWordFormat { code: 3 })
        );
    }
}
