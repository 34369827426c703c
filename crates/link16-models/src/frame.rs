//! Byte framing for transmissions.
//!
//! A [`Frame`] holds consecutive messages as 70-bit words packed back to
//! back. Its byte form zero-pads the last byte; its text form is that byte
//! form in hexadecimal. Padding never reaches a full word, so decoding a
//! frame read back from bytes sees exactly the words that were pushed.
//!
//! ```
//! use link16_models::{DecodeOptions, Family, Frame, Message};
//!
//! let mut frame = Frame::new();
//! frame.push(&Message::for_family(Family::FreeText)).unwrap();
//! frame.push(&Message::for_family(Family::AirTrack)).unwrap();
//! assert_eq!(frame.word_count(), 2);
//! assert_eq!(frame.to_bytes().len(), 18);
//!
//! let parsed: Frame = frame.to_hex().parse().unwrap();
//! let stream = parsed.decode(DecodeOptions::default()).unwrap();
//! assert_eq!(stream.messages.len(), 2);
//! assert_eq!(stream.messages[1].family(), Some(Family::AirTrack));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bits::{BitWriter, Bits, BitsRef};
use crate::error::CodecError;
use crate::message::{decode_stream, DecodeOptions, DecodedStream, Message};
use crate::word::WORD_BITS;

/// Consecutive encoded messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    bits: Bits,
}

impl Frame {
    /// An empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `messages` in order.
    ///
    /// # Errors
    ///
    /// The first encoding error, as [`Message::encode`].
    pub fn from_messages<'a>(
        messages: impl IntoIterator<Item = &'a Message>,
    ) -> Result<Self, CodecError> {
        let mut frame = Self::new();
        for message in messages {
            frame.push(message)?;
        }
        Ok(frame)
    }

    /// Append one message.
    ///
    /// # Errors
    ///
    /// As [`Message::encode`]; the frame is unchanged on error.
    pub fn push(&mut self, message: &Message) -> Result<(), CodecError> {
        let mut writer = BitWriter::new();
        message.encode(&mut writer)?;
        self.bits.extend_from_bitslice(writer.as_bits());
        Ok(())
    }

    /// Frame over raw bytes; trailing bits short of a word are padding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Bits::from_slice(bytes);
        let whole = bits.len() / WORD_BITS * WORD_BITS;
        bits.truncate(whole);
        Self { bits }
    }

    /// Parse hexadecimal text. Whitespace, `_` separators and a leading
    /// `0x` are ignored.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidHex`] for odd-length or non-hex input.
    pub fn from_hex(text: &str) -> Result<Self, CodecError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let digits: String = body
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect();
        let bytes = hex::decode(&digits).map_err(|err| CodecError::InvalidHex {
            reason: err.to_string(),
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    /// The packed words.
    pub fn bits(&self) -> &BitsRef {
        &self.bits
    }

    /// Whole words in the frame.
    pub fn word_count(&self) -> usize {
        self.bits.len() / WORD_BITS
    }

    /// `true` when no word has been pushed.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bytes, last byte zero padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }

    /// Lower-case hexadecimal of [`Frame::to_bytes`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode every message in the frame.
    ///
    /// # Errors
    ///
    /// As [`decode_stream`].
    pub fn decode(&self, options: DecodeOptions) -> Result<DecodedStream, CodecError> {
        decode_stream(&self.bits, options)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Frame {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Family;

    // -- Packing --------------------------------------------------------------

    #[test]
    fn words_are_packed_back_to_back() {
        let mut message = Message::for_family(Family::AirTrack);
        message.add_extension(0).unwrap();
        let frame = Frame::from_messages([&message, &message]).unwrap();
        assert_eq!(frame.word_count(), 4);
        assert_eq!(frame.bits().len(), 4 * WORD_BITS);
        // 280 bits fit exactly in 35 bytes.
        assert_eq!(frame.to_bytes().len(), 35);
    }

    #[test]
    fn last_byte_is_zero_padded() {
        let frame = Frame::from_messages([&Message::for_family(Family::FreeText)]).unwrap();
        let bytes = frame.to_bytes();
        assert_eq!(bytes.len(), 9);
        // 70 bits leave two padding bits.
        assert_eq!(bytes[8] & 0b11, 0);
    }

    #[test]
    fn failed_push_leaves_frame_unchanged() {
        let mut message = Message::for_family(Family::AirTrack);
        message.add_extension(1).unwrap();
        let mut frame = Frame::new();
        assert!(matches!(
            frame.push(&message),
            Err(CodecError::ExtensionGap { .. })
        ));
        assert!(frame.is_empty());
    }

    // -- Hex ------------------------------------------------------------------

    #[test]
    fn hex_round_trip() {
        let mut message = Message::for_family(Family::LandTrack);
        message.initial_mut().set("TrackNumber", "12345").unwrap();
        let frame = Frame::from_messages([&message]).unwrap();
        let text = frame.to_string();
        assert_eq!(text.len(), 18);
        assert_eq!(text.parse::<Frame>().unwrap(), frame);

        let decoded = frame.decode(DecodeOptions::default()).unwrap();
        assert_eq!(decoded.messages, vec![message]);
    }

    #[test]
    fn hex_accepts_separators_and_prefix() {
        let frame = Frame::from_messages([&Message::for_family(Family::FreeText)]).unwrap();
        let hex = frame.to_hex();
        let spaced = format!("0x{} {}_{}", &hex[..4], &hex[4..10], &hex[10..]);
        assert_eq!(Frame::from_hex(&spaced).unwrap(), frame);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["abc", "zz", "0x1"] {
            assert!(
                matches!(Frame::from_hex(bad), Err(CodecError::InvalidHex { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn short_input_holds_no_words() {
        let frame = Frame::from_hex("ffff").unwrap();
        assert_eq!(frame.word_count(), 0);
        assert!(frame.decode(DecodeOptions::default()).unwrap().messages.is_empty());
    }
}
