//! Address-field framings
//!
//! Every addressed instruction carries exactly 3 address bytes, MSB first.
//! The main array uses the low 18 bits of a linear address; the
//! identification page and its lock status use fixed framings where only the
//! A10 bit and the low byte vary.

use crate::chip::ADDRESS_MASK;

/// A10 set in the mid address byte selects the lock status over the ID data
const A10: u8 = 0x04;

/// The address field of an SPI instruction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// No address phase (WREN, WRDI, RDSR, WRSR)
    #[default]
    None,
    /// Main-array linear address; bits above the chip's 18 are masked off
    Memory(u32),
    /// Identification-page byte address (A10 = 0)
    Identification(u8),
    /// Identification-page lock status (A10 = 1)
    LockRegion,
}

impl AddressField {
    /// Returns the number of address bytes this field occupies on the wire
    pub const fn bytes(&self) -> usize {
        match self {
            Self::None => 0,
            _ => 3,
        }
    }

    /// Encode the address field into `buf`, MSB first
    ///
    /// Masking is bitwise: excess high bits are cleared, never the whole
    /// byte. Returns the number of bytes written.
    pub fn encode(&self, buf: &mut [u8; 3]) -> usize {
        match *self {
            Self::None => 0,
            Self::Memory(address) => {
                let address = address & ADDRESS_MASK;
                buf[0] = (address >> 16) as u8;
                buf[1] = (address >> 8) as u8;
                buf[2] = address as u8;
                3
            }
            Self::Identification(id_addr) => {
                buf[0] = 0x00;
                buf[1] = 0x00;
                buf[2] = id_addr;
                3
            }
            Self::LockRegion => {
                buf[0] = 0x00;
                buf[1] = A10;
                buf[2] = 0x00;
                3
            }
        }
    }
}
