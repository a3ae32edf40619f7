//! # bincomb - Parser combinators for binary formats
//!
//! bincomb builds grammars for binary wire and file formats out of small,
//! composable parsers. A grammar consumes an immutable byte buffer through a
//! [`ByteCursor`] and produces typed values, backtracking freely since cursors
//! are plain copies.
//!
//! Besides the usual sequencing, repetition and alternation combinators the
//! library provides:
//!
//! - **Windows**: [`length::Length`] runs a parser inside a fixed-size field
//! - **Checksummed frames**: [`with_checksum::WithChecksum`] verifies a
//!   trailing digest over exactly the bytes a parser consumed
//! - **Furthest-failure diagnostics**: alternatives report the failure that got
//!   furthest into the input, with every expectation tried at that position
//!
//! ```
//! use bincomb::and::AndExt;
//! use bincomb::byte::{byte, bytes, is_byte};
//! use bincomb::checksum::Crc16Ccitt;
//! use bincomb::end::EndExt;
//! use bincomb::map::MapExt;
//! use bincomb::then::ThenExt;
//! use bincomb::with_checksum::WithChecksumExt;
//!
//! // sync byte, length-prefixed payload, CRC over length and payload
//! let frame = is_byte(0x7E)
//!     .and(
//!         byte()
//!             .then(|len| bytes(len as usize))
//!             .with_checksum(Crc16Ccitt::NON_ZERO_1),
//!     )
//!     .map(|(_, payload)| payload)
//!     .end();
//!
//! let data = [0x7E, 0x02, 0x10, 0x20, 0xED, 0x85];
//! assert_eq!(bincomb::parse(&frame, &data), Ok(vec![0x10, 0x20]));
//!
//! let corrupted = [0x7E, 0x02, 0x10, 0x21, 0xED, 0x85];
//! let error = bincomb::parse(&frame, &corrupted).unwrap_err();
//! assert!(error.to_string().starts_with("Parsing failure: invalid checksum"));
//! ```

pub mod and;
pub mod byte;
pub mod checksum;
pub mod concat;
pub mod cursor;
pub mod driver;
pub mod end;
pub mod error;
pub mod except;
pub mod length;
pub mod many;
pub mod map;
pub mod number;
pub mod once;
pub mod or;
pub mod parser;
pub mod pure;
pub mod repeat;
pub mod result;
pub mod source;
pub mod then;
pub mod until;
pub mod validate;
pub mod with_checksum;

pub use checksum::{Checksum, Crc16Ccitt};
pub use cursor::ByteCursor;
pub use driver::{parse, try_parse};
pub use error::{FailureKind, ParseError, ParseFailure};
pub use parser::Parser;
pub use result::{ParseResult, ParseResultExt};
pub use source::Source;
