//! Checksum capability used by [`crate::with_checksum`]
//!
//! A checksum turns a byte span into a fixed-length digest. The combinator
//! only needs the digest length and the calculation, so any algorithm can be
//! plugged in by implementing [`Checksum`].

pub mod crc16;

use std::sync::Arc;

pub use crc16::{Crc16Ccitt, InitialValue};

/// A digest algorithm with a fixed output length
pub trait Checksum {
    /// Number of bytes produced by [`Checksum::calculate`]
    fn length(&self) -> usize;

    /// Compute the digest of `bytes` in wire order
    fn calculate(&self, bytes: &[u8]) -> Vec<u8>;
}

impl<C: Checksum + ?Sized> Checksum for &C {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn calculate(&self, bytes: &[u8]) -> Vec<u8> {
        (**self).calculate(bytes)
    }
}

impl<C: Checksum + ?Sized> Checksum for Box<C> {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn calculate(&self, bytes: &[u8]) -> Vec<u8> {
        (**self).calculate(bytes)
    }
}

impl<C: Checksum + ?Sized> Checksum for Arc<C> {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn calculate(&self, bytes: &[u8]) -> Vec<u8> {
        (**self).calculate(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of all bytes modulo 256
    struct Additive;

    impl Checksum for Additive {
        fn length(&self) -> usize {
            1
        }

        fn calculate(&self, bytes: &[u8]) -> Vec<u8> {
            vec![bytes.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte))]
        }
    }

    fn digest_of<C: Checksum>(checksum: C, bytes: &[u8]) -> Vec<u8> {
        checksum.calculate(bytes)
    }

    #[test]
    fn test_custom_checksum() {
        assert_eq!(Additive.length(), 1);
        assert_eq!(Additive.calculate(&[0xF0, 0x20]), vec![0x10]);
    }

    #[test]
    fn test_wrappers_delegate() {
        let data = [0x01, 0x02];

        assert_eq!(digest_of(&Additive, &data), vec![0x03]);
        assert_eq!(digest_of(Box::new(Additive), &data), vec![0x03]);
        assert_eq!(digest_of(Arc::new(Additive), &data), vec![0x03]);

        let boxed: Box<dyn Checksum> = Box::new(Crc16Ccitt::NON_ZERO_1);
        assert_eq!(boxed.length(), 2);
        assert_eq!(digest_of(boxed, b"123456789"), vec![0xB1, 0x29]);
    }
}
