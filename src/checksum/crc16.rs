use super::Checksum;
use byteorder::{ByteOrder, LittleEndian};

const POLYNOMIAL: u16 = 0x1021;

/// Lookup table for the MSB-first CCITT polynomial, built at compile time
const TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Register presets for [`Crc16Ccitt`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InitialValue {
    /// `0x0000` (XMODEM)
    Zeros,
    /// `0xFFFF`
    NonZero1,
    /// `0x1D0F`
    NonZero2,
}

impl InitialValue {
    pub const fn register(self) -> u16 {
        match self {
            InitialValue::Zeros => 0x0000,
            InitialValue::NonZero1 => 0xFFFF,
            InitialValue::NonZero2 => 0x1D0F,
        }
    }
}

/// CRC16 with the CCITT polynomial `0x1021`, non-reflected
///
/// The digest is the 16-bit register encoded little-endian.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Crc16Ccitt {
    initial: u16,
}

impl Crc16Ccitt {
    pub const ZEROS: Crc16Ccitt = Crc16Ccitt::new(InitialValue::Zeros);
    pub const NON_ZERO_1: Crc16Ccitt = Crc16Ccitt::new(InitialValue::NonZero1);
    pub const NON_ZERO_2: Crc16Ccitt = Crc16Ccitt::new(InitialValue::NonZero2);

    pub const fn new(initial: InitialValue) -> Self {
        Crc16Ccitt {
            initial: initial.register(),
        }
    }

    /// Raw register value after feeding `bytes`
    pub fn crc(&self, bytes: &[u8]) -> u16 {
        bytes.iter().fold(self.initial, |register, &byte| {
            (register << 8) ^ TABLE[usize::from((register >> 8) as u8 ^ byte)]
        })
    }
}

impl Default for Crc16Ccitt {
    fn default() -> Self {
        Crc16Ccitt::NON_ZERO_1
    }
}

impl Checksum for Crc16Ccitt {
    fn length(&self) -> usize {
        2
    }

    fn calculate(&self, bytes: &[u8]) -> Vec<u8> {
        let mut digest = vec![0; 2];
        LittleEndian::write_u16(&mut digest, self.crc(bytes));
        digest
    }
}
