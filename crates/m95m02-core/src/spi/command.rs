//! SPI command descriptor

use super::{opcodes, AddressField};

/// A single SPI transaction
///
/// Designed to avoid allocation - uses slices for data. The lifetime
/// parameter `'a` ties the command to the buffers it references.
///
/// On the wire the phases always appear in the same order: opcode byte,
/// address bytes (if any), write data, then read data clocked out with
/// dummy bytes. No instruction has both a write and a read phase.
pub struct EepromCommand<'a> {
    /// The opcode byte
    pub opcode: u8,

    /// Address field framing
    pub address: AddressField,

    /// Data to write after opcode/address
    pub write_data: &'a [u8],

    /// Buffer to read into (mutable)
    pub read_buf: &'a mut [u8],
}

impl<'a> EepromCommand<'a> {
    /// Create a simple command with no address or data (WREN, WRDI)
    pub fn simple(opcode: u8) -> Self {
        Self {
            opcode,
            address: AddressField::None,
            write_data: &[],
            read_buf: &mut [],
        }
    }

    /// Create a read register command with no address (RDSR)
    pub fn read_reg(opcode: u8, buf: &'a mut [u8]) -> Self {
        Self {
            opcode,
            address: AddressField::None,
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create a write register command with no address (WRSR)
    pub fn write_reg(opcode: u8, data: &'a [u8]) -> Self {
        Self {
            opcode,
            address: AddressField::None,
            write_data: data,
            read_buf: &mut [],
        }
    }

    /// Create a main-array read command (READ)
    pub fn read_memory(addr: u32, buf: &'a mut [u8]) -> Self {
        Self {
            opcode: opcodes::READ,
            address: AddressField::Memory(addr),
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create a main-array write command (WRITE)
    pub fn write_memory(addr: u32, data: &'a [u8]) -> Self {
        Self {
            opcode: opcodes::WRITE,
            address: AddressField::Memory(addr),
            write_data: data,
            read_buf: &mut [],
        }
    }

    /// Create an identification-page read command (READ_ID, A10 = 0)
    pub fn read_id(id_addr: u8, buf: &'a mut [u8]) -> Self {
        Self {
            opcode: opcodes::READ_ID,
            address: AddressField::Identification(id_addr),
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create an identification-page write command (WRITE_ID, A10 = 0)
    pub fn write_id(id_addr: u8, data: &'a [u8]) -> Self {
        Self {
            opcode: opcodes::WRITE_ID,
            address: AddressField::Identification(id_addr),
            write_data: data,
            read_buf: &mut [],
        }
    }

    /// Create a lock-status read command (READ_LOCK_STATUS, A10 = 1)
    pub fn read_lock_status(buf: &'a mut [u8]) -> Self {
        Self {
            opcode: opcodes::READ_LOCK_STATUS,
            address: AddressField::LockRegion,
            write_data: &[],
            read_buf: buf,
        }
    }

    /// Create the lock command (LOCK_ID, A10 = 1, fixed data byte)
    pub fn lock_id() -> Self {
        Self {
            opcode: opcodes::LOCK_ID,
            address: AddressField::LockRegion,
            write_data: &[opcodes::LOCK_DATA],
            read_buf: &mut [],
        }
    }

    /// Returns true if this command has a read phase
    pub fn has_read(&self) -> bool {
        !self.read_buf.is_empty()
    }

    /// Returns true if this command has a write phase
    pub fn has_write(&self) -> bool {
        !self.write_data.is_empty()
    }

    /// Calculate the total number of bytes exchanged on the wire
    pub fn total_bytes(&self) -> usize {
        1 + self.address.bytes() + self.write_data.len() + self.read_buf.len()
    }
}
