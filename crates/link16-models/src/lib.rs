#![warn(missing_docs)]

//! # Link-16 Models
//!
//! Bit-level codec for Link-16 J-series messages: field conversions, the
//! 70-bit word model, multi-word messages, the family catalog and a
//! uniform facade over the track families.
//!
//! ## Message hierarchy
//!
//! ```text
//! Message (one family, keyed label * 100 + sublabel)
//! ├── Initial word        header 13 bits + 57 field bits
//! ├── Extension words     header  2 bits + 68 field bits, numbered by position
//! └── Continuation words  header  7 bits + 63 field bits, numbered 1..=31
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`bits`] | MSB-first `BitReader` / `BitWriter` |
//! | [`units`] | Physical units and SI conversion |
//! | [`field`] | Field types, no-statement policies, accessor values |
//! | [`field_types`] | Library of reusable field types |
//! | [`word`] | Word definitions, width checks, word values |
//! | [`header`] | Word headers on the wire |
//! | [`message`] | Multi-word messages, encode / decode, streams |
//! | [`families`] | Word and family tables, one module per message group |
//! | [`catalog`] | `Family`, the key-sorted catalog, dispatch |
//! | [`geo`] | WGS-84 geodetic / ECEF conversions |
//! | [`dis`] | DIS entity identifiers |
//! | [`track`] | Track facade over J3.2 to J3.6 |
//! | [`message_builder`] | Fluent message builders |
//! | [`frame`] | Byte and hex framing |
//! | [`error`] | `CodecError` |

pub mod bits;
pub mod catalog;
pub mod dis;
pub mod error;
pub mod families;
pub mod field;
pub mod field_types;
pub mod frame;
pub mod geo;
pub mod header;
pub mod message;
pub mod message_builder;
pub mod track;
pub mod units;
pub mod word;

// Re-export the public types at crate root.
// `families` and `field_types` stay behind their module paths.
pub use bits::*;
pub use catalog::*;
pub use dis::*;
pub use error::*;
pub use field::*;
pub use frame::*;
pub use geo::*;
pub use header::*;
pub use message::*;
pub use message_builder::*;
pub use track::*;
pub use units::*;
pub use word::*;
