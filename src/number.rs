//! Fixed-width numeric parsers
//!
//! Multi-byte numbers take a [`byteorder::ByteOrder`] type parameter so the
//! wire endianness is always spelled out at the call site:
//!
//! ```
//! use bincomb::number::{i32, u16};
//! use bincomb::{ByteCursor, Parser};
//! use byteorder::{BigEndian, LittleEndian};
//!
//! let data = [0x01, 0x02, 0xFE, 0xFF, 0xFF, 0xFF];
//! let (be, cursor) = u16::<BigEndian>().parse(ByteCursor::new(&data)).unwrap();
//! let (le, _) = i32::<LittleEndian>().parse(cursor).unwrap();
//! assert_eq!(be, 0x0102);
//! assert_eq!(le, -2);
//! ```

use crate::byte::bytes;
use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;
use byteorder::{ByteOrder, LittleEndian};
use std::marker::PhantomData;

/// A number stored in a fixed number of bytes
pub trait FixedWidth: Sized {
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes
    fn read<E: ByteOrder>(bytes: &[u8]) -> Self;
}

impl FixedWidth for u8 {
    const WIDTH: usize = 1;

    fn read<E: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl FixedWidth for i8 {
    const WIDTH: usize = 1;

    fn read<E: ByteOrder>(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }
}

macro_rules! fixed_width {
    ($($ty:ty => $width:expr, $read:ident;)*) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = $width;

                fn read<E: ByteOrder>(bytes: &[u8]) -> Self {
                    E::$read(bytes)
                }
            }
        )*
    };
}

fixed_width! {
    u16 => 2, read_u16;
    i16 => 2, read_i16;
    u32 => 4, read_u32;
    i32 => 4, read_i32;
    u64 => 8, read_u64;
    i64 => 8, read_i64;
    f32 => 4, read_f32;
    f64 => 8, read_f64;
}

/// Parser for a fixed-width number in byte order `E`
pub struct Number<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Number<T, E> {
    pub fn new() -> Self {
        Number {
            _marker: PhantomData,
        }
    }
}

impl<T, E> Default for Number<T, E> {
    fn default() -> Self {
        Number::new()
    }
}

impl<T, E> Clone for Number<T, E> {
    fn clone(&self) -> Self {
        Number::new()
    }
}

impl<T, E> Copy for Number<T, E> {}

impl<'code, T, E> Parser<'code> for Number<T, E>
where
    T: FixedWidth,
    E: ByteOrder,
{
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        let (raw, cursor) = bytes(T::WIDTH).parse(cursor)?;
        Ok((T::read::<E>(&raw), cursor))
    }
}

pub fn u8() -> Number<u8, LittleEndian> {
    Number::new()
}

pub fn i8() -> Number<i8, LittleEndian> {
    Number::new()
}

pub fn u16<E: ByteOrder>() -> Number<u16, E> {
    Number::new()
}

pub fn i16<E: ByteOrder>() -> Number<i16, E> {
    Number::new()
}

pub fn u32<E: ByteOrder>() -> Number<u32, E> {
    Number::new()
}

pub fn i32<E: ByteOrder>() -> Number<i32, E> {
    Number::new()
}

pub fn u64<E: ByteOrder>() -> Number<u64, E> {
    Number::new()
}

pub fn i64<E: ByteOrder>() -> Number<i64, E> {
    Number::new()
}

pub fn f32<E: ByteOrder>() -> Number<f32, E> {
    Number::new()
}

pub fn f64<E: ByteOrder>() -> Number<f64, E> {
    Number::new()
}

/// Reinterpret a two-byte sequence as a `u16` in byte order `E`
///
/// Fails at the position the inner parser started from when it produced
/// anything other than exactly two bytes.
pub struct ToU16<P, E> {
    parser: P,
    _order: PhantomData<fn() -> E>,
}

impl<P, E> ToU16<P, E> {
    pub fn new(parser: P) -> Self {
        ToU16 {
            parser,
            _order: PhantomData,
        }
    }
}

impl<'code, P, E> Parser<'code> for ToU16<P, E>
where
    P: Parser<'code, Output = Vec<u8>>,
    E: ByteOrder,
{
    type Output = u16;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u16> {
        let (raw, remainder) = self.parser.parse(cursor)?;
        if raw.len() != 2 {
            return Err(ParseFailure::new(
                FailureKind::ValidationFailed,
                format!("expected 2 bytes but was {}", raw.len()),
                cursor,
            ));
        }
        Ok((E::read_u16(&raw), remainder))
    }
}

/// Extension trait for parsers producing raw bytes
pub trait BytesExt<'code>: Parser<'code, Output = Vec<u8>> + Sized {
    fn to_u16<E: ByteOrder>(self) -> ToU16<Self, E> {
        ToU16::new(self)
    }
}

impl<'code, P> BytesExt<'code> for P where P: Parser<'code, Output = Vec<u8>> {}
