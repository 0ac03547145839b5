//! m95m02-dummy - In-memory M95M02 emulator for testing
//!
//! This crate provides a dummy transport that emulates the EEPROM chip in
//! memory, one SPI byte exchange at a time. It's useful for testing and
//! development without real hardware.
//!
//! The emulation is deliberately byte-level: the chip model decodes the
//! opcode, the three address bytes and the data phase from the raw wire
//! stream, so tests can assert the exact framing the driver emits (every
//! MOSI byte is recorded in a transcript). Behavioral details the test
//! suite depends on are modeled too: the write-enable latch, the write
//! cycle observed through WIP polls, in-page address wrap on WRITE,
//! full-array rollover on READ, the identification page, and the permanent
//! lock latch.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use log::debug;
#[cfg(feature = "alloc")]
use m95m02_core::chip::{ADDRESS_MASK, ID_PAGE_SIZE, PAGE_SIZE, TOTAL_SIZE};
#[cfg(feature = "alloc")]
use m95m02_core::error::{Error, Result};
#[cfg(feature = "alloc")]
use m95m02_core::spi::opcodes;
#[cfg(feature = "alloc")]
use m95m02_core::transport::SpiExchange;

/// Configuration for the dummy EEPROM
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Number of RDSR polls the simulated write cycle keeps WIP set for
    ///
    /// 0 means writes complete instantly.
    pub write_cycle_polls: u8,
    /// Initial fill byte of the main array and the identification page
    pub fill: u8,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            write_cycle_polls: 2,
            fill: 0xFF,
        }
    }
}

/// Where the data phase of the current instruction is directed
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy)]
enum Target {
    MemoryRead { addr: u32 },
    MemoryWrite { start: u32 },
    IdRead { addr: u8 },
    IdWrite { start: u8 },
    LockRead,
    LockWrite,
}

/// Decoder state between byte exchanges within one transaction
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Waiting for an opcode byte
    Opcode,
    /// Collecting the 3-byte address field
    Address { opcode: u8, buf: [u8; 3], got: u8 },
    /// Streaming the data phase
    Data(Target),
    /// RDSR: every further exchange clocks out the status register
    Status,
    /// WRSR: one data byte expected
    StatusWrite,
    /// Instruction fully handled or ignored; swallow anything further
    Drain,
}

/// Dummy EEPROM transport
///
/// Emulates an M95M02 in memory for testing purposes. Writes are staged
/// during the data phase and committed when the transaction finishes, which
/// is when the real chip latches them (chip-select rise).
#[cfg(feature = "alloc")]
pub struct DummyEeprom {
    config: DummyConfig,
    data: Vec<u8>,
    id_page: Vec<u8>,
    /// Persistent SRWD/BP bits written via WRSR
    status_reg: u8,
    write_enabled: bool,
    locked: bool,
    wip_polls_remaining: u8,
    phase: Phase,
    pending: Vec<u8>,
    mosi_log: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl DummyEeprom {
    /// Create a new dummy EEPROM with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        let data = vec![config.fill; TOTAL_SIZE];
        let id_page = vec![config.fill; ID_PAGE_SIZE];
        Self {
            config,
            data,
            id_page,
            status_reg: 0,
            write_enabled: false,
            locked: false,
            wip_polls_remaining: 0,
            phase: Phase::Opcode,
            pending: Vec::new(),
            mosi_log: Vec::new(),
        }
    }

    /// Create a new dummy EEPROM with the default configuration
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy EEPROM with pre-filled main-array data
    pub fn with_data(config: DummyConfig, initial_data: &[u8]) -> Self {
        let mut eeprom = Self::new(config);
        let len = core::cmp::min(initial_data.len(), eeprom.data.len());
        eeprom.data[..len].copy_from_slice(&initial_data[..len]);
        eeprom
    }

    /// Get a reference to the main-array data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the main-array data
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get a reference to the identification-page data
    pub fn id_page(&self) -> &[u8] {
        &self.id_page
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// True if the identification page has been locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True if the write-enable latch is currently set
    pub fn write_enabled(&self) -> bool {
        self.write_enabled
    }

    /// Force the simulated write cycle to complete immediately
    pub fn complete_write_cycle(&mut self) {
        self.wip_polls_remaining = 0;
    }

    /// Every byte the driver has clocked onto MOSI, in order
    pub fn mosi_log(&self) -> &[u8] {
        &self.mosi_log
    }

    /// Clear the MOSI transcript
    pub fn clear_mosi_log(&mut self) {
        self.mosi_log.clear();
    }

    fn busy(&self) -> bool {
        self.wip_polls_remaining > 0
    }

    fn status_byte(&self) -> u8 {
        let mut sr = self.status_reg;
        if self.write_enabled {
            sr |= opcodes::Status::WEL.bits();
        }
        if self.busy() {
            sr |= opcodes::Status::WIP.bits();
        }
        sr
    }

    fn begin_write_cycle(&mut self) {
        self.wip_polls_remaining = self.config.write_cycle_polls;
    }

    fn decode_opcode(&mut self, opcode: u8) -> Result<Phase> {
        // A busy chip only answers RDSR; everything else is ignored until
        // the write cycle completes.
        if self.busy() && opcode != opcodes::RDSR {
            return Ok(Phase::Drain);
        }

        let phase = match opcode {
            opcodes::WREN => {
                self.write_enabled = true;
                Phase::Drain
            }
            opcodes::WRDI => {
                self.write_enabled = false;
                Phase::Drain
            }
            opcodes::RDSR => Phase::Status,
            opcodes::WRSR => Phase::StatusWrite,
            opcodes::READ | opcodes::WRITE | opcodes::READ_ID | opcodes::WRITE_ID => {
                Phase::Address {
                    opcode,
                    buf: [0u8; 3],
                    got: 0,
                }
            }
            _ => return Err(Error::OpcodeNotSupported),
        };
        Ok(phase)
    }

    /// Resolve the data-phase target once all 3 address bytes are in
    fn decode_target(&mut self, opcode: u8, addr_bytes: [u8; 3]) -> Target {
        match opcode {
            opcodes::READ | opcodes::WRITE => {
                let addr = ((addr_bytes[0] as u32) << 16
                    | (addr_bytes[1] as u32) << 8
                    | addr_bytes[2] as u32)
                    & ADDRESS_MASK;
                if opcode == opcodes::READ {
                    Target::MemoryRead { addr }
                } else {
                    self.pending.clear();
                    Target::MemoryWrite { start: addr }
                }
            }
            // 0x83/0x82: the A10 bit of the address field picks the lock
            // status over the identification data
            _ => {
                let lock = addr_bytes[1] & 0x04 != 0;
                match (opcode, lock) {
                    (opcodes::READ_ID, false) => Target::IdRead {
                        addr: addr_bytes[2],
                    },
                    (opcodes::READ_ID, true) => Target::LockRead,
                    (_, false) => {
                        self.pending.clear();
                        Target::IdWrite {
                            start: addr_bytes[2],
                        }
                    }
                    (_, true) => {
                        self.pending.clear();
                        Target::LockWrite
                    }
                }
            }
        }
    }

    fn data_exchange(&mut self, target: Target, out: u8) -> (Target, u8) {
        match target {
            Target::MemoryRead { addr } => {
                let byte = self.data[addr as usize];
                // Sequential reads roll over the entire array
                let next = (addr + 1) % TOTAL_SIZE as u32;
                (Target::MemoryRead { addr: next }, byte)
            }
            Target::IdRead { addr } => {
                let byte = self.id_page[addr as usize];
                let next = ((addr as usize + 1) % ID_PAGE_SIZE) as u8;
                (Target::IdRead { addr: next }, byte)
            }
            Target::LockRead => {
                let byte = if self.locked { opcodes::LOCK_DATA } else { 0x00 };
                (Target::LockRead, byte)
            }
            Target::MemoryWrite { .. } | Target::IdWrite { .. } | Target::LockWrite => {
                self.pending.push(out);
                (target, 0x00)
            }
        }
    }

    /// Apply a staged write at transaction end, honoring WEL and the lock
    fn commit(&mut self, target: Target) {
        match target {
            Target::MemoryWrite { start } => {
                if !self.write_enabled || self.pending.is_empty() {
                    return;
                }
                debug!(
                    "committing {} byte write at {:#07x}",
                    self.pending.len(),
                    start
                );
                // The address counter wraps within the page: the page bits
                // stay fixed while the low byte rolls over.
                let page_base = start as usize & !(PAGE_SIZE - 1);
                let offset = start as usize % PAGE_SIZE;
                for (i, &byte) in self.pending.iter().enumerate() {
                    self.data[page_base + (offset + i) % PAGE_SIZE] = byte;
                }
                self.write_enabled = false;
                self.begin_write_cycle();
            }
            Target::IdWrite { start } => {
                if !self.write_enabled || self.pending.is_empty() {
                    return;
                }
                if self.locked {
                    // Locked page: the instruction is ignored entirely
                    return;
                }
                for (i, &byte) in self.pending.iter().enumerate() {
                    self.id_page[(start as usize + i) % ID_PAGE_SIZE] = byte;
                }
                self.write_enabled = false;
                self.begin_write_cycle();
            }
            Target::LockWrite => {
                if !self.write_enabled || self.pending.is_empty() {
                    return;
                }
                if self.pending[0] & opcodes::LOCK_DATA != 0 {
                    debug!("identification page locked");
                    self.locked = true;
                }
                self.write_enabled = false;
                self.begin_write_cycle();
            }
            _ => {}
        }
    }
}

#[cfg(feature = "alloc")]
impl SpiExchange for DummyEeprom {
    fn init(&mut self) -> Result<()> {
        // Nothing to bring up; idempotent by construction
        Ok(())
    }

    fn exchange(&mut self, out: u8) -> Result<u8> {
        self.mosi_log.push(out);

        match self.phase {
            Phase::Opcode => {
                self.phase = self.decode_opcode(out)?;
                Ok(0x00)
            }
            Phase::Address {
                opcode,
                mut buf,
                got,
            } => {
                buf[got as usize] = out;
                if got == 2 {
                    let target = self.decode_target(opcode, buf);
                    self.phase = Phase::Data(target);
                } else {
                    self.phase = Phase::Address {
                        opcode,
                        buf,
                        got: got + 1,
                    };
                }
                Ok(0x00)
            }
            Phase::Data(target) => {
                let (next, byte) = self.data_exchange(target, out);
                self.phase = Phase::Data(next);
                Ok(byte)
            }
            Phase::Status => {
                let byte = self.status_byte();
                if self.wip_polls_remaining > 0 {
                    self.wip_polls_remaining -= 1;
                }
                Ok(byte)
            }
            Phase::StatusWrite => {
                self.pending.push(out);
                self.phase = Phase::Drain;
                Ok(0x00)
            }
            Phase::Drain => Ok(0x00),
        }
    }

    fn finish(&mut self) -> Result<()> {
        let phase = core::mem::replace(&mut self.phase, Phase::Opcode);
        match phase {
            Phase::Data(target) => self.commit(target),
            Phase::Drain if !self.pending.is_empty() => {
                // WRSR latches its single data byte at chip-select rise
                if self.write_enabled {
                    let writable = (opcodes::Status::SRWD
                        | opcodes::Status::BP1
                        | opcodes::Status::BP0)
                        .bits();
                    self.status_reg = self.pending[0] & writable;
                    self.write_enabled = false;
                    self.begin_write_cycle();
                }
            }
            _ => {}
        }
        self.pending.clear();
        Ok(())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use m95m02_core::error::Error;
    use m95m02_core::protocol;
    use m95m02_core::spi::EepromCommand;
    use m95m02_core::transport;
    use m95m02_core::M95M02;

    /// Poll WIP the way a real caller would, counting the polls
    fn wait_idle(eeprom: &mut DummyEeprom) -> usize {
        let mut polls = 0;
        while protocol::write_in_progress(eeprom).unwrap() {
            polls += 1;
            assert!(polls < 100, "write cycle never completed");
        }
        polls
    }

    #[test]
    fn test_write_read_byte_roundtrip() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_enable(&mut eeprom).unwrap();
        assert_eq!(protocol::write_byte(&mut eeprom, 0x012345, 0xA5).unwrap(), 1);
        wait_idle(&mut eeprom);
        assert_eq!(protocol::read_byte(&mut eeprom, 0x012345).unwrap(), 0xA5);

        // Last byte of the array
        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_byte(&mut eeprom, 0x3FFFF, 0x42).unwrap();
        wait_idle(&mut eeprom);
        assert_eq!(protocol::read_byte(&mut eeprom, 0x3FFFF).unwrap(), 0x42);
        // Its neighbor is untouched
        assert_eq!(protocol::read_byte(&mut eeprom, 0x3FFFE).unwrap(), 0xFF);
    }

    #[test]
    fn test_buffer_roundtrip_full_page() {
        let mut eeprom = DummyEeprom::new_default();
        let data: Vec<u8> = (0..=255).collect();

        protocol::write_enable(&mut eeprom).unwrap();
        assert_eq!(protocol::write(&mut eeprom, 0x1000, &data).unwrap(), 256);
        wait_idle(&mut eeprom);

        let mut buf = [0u8; 256];
        assert_eq!(protocol::read(&mut eeprom, 0x1000, &mut buf).unwrap(), 256);
        assert_eq!(&buf[..], &data[..]);
    }

    #[test]
    fn test_wip_busy_then_idle() {
        let mut eeprom = DummyEeprom::new(DummyConfig {
            write_cycle_polls: 3,
            ..DummyConfig::default()
        });

        assert!(!protocol::write_in_progress(&mut eeprom).unwrap());

        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_byte(&mut eeprom, 0, 0x11).unwrap();

        // Busy immediately after the write command, idle once the
        // simulated cycle has been polled through.
        assert_eq!(wait_idle(&mut eeprom), 3);
        assert!(!protocol::write_in_progress(&mut eeprom).unwrap());
    }

    #[test]
    fn test_busy_chip_ignores_instructions() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_byte(&mut eeprom, 0, 0x11).unwrap();

        // Still busy: a second write sequence must be swallowed whole
        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_byte(&mut eeprom, 1, 0x22).unwrap();

        wait_idle(&mut eeprom);
        assert_eq!(protocol::read_byte(&mut eeprom, 0).unwrap(), 0x11);
        assert_eq!(protocol::read_byte(&mut eeprom, 1).unwrap(), 0xFF);
    }

    #[test]
    fn test_write_framing_on_the_wire() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_enable(&mut eeprom).unwrap();
        eeprom.clear_mosi_log();
        protocol::write_byte(&mut eeprom, 0x012345, 0xAB).unwrap();
        assert_eq!(eeprom.mosi_log(), &[0x02, 0x01, 0x23, 0x45, 0xAB]);
    }

    #[test]
    fn test_read_framing_on_the_wire() {
        let mut eeprom = DummyEeprom::new_default();

        eeprom.clear_mosi_log();
        protocol::read_byte(&mut eeprom, 0x1FFFF).unwrap();
        // Dummy 0x00 clocks the response out
        assert_eq!(eeprom.mosi_log(), &[0x03, 0x01, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_excess_address_bits_masked_bitwise() {
        let mut eeprom = DummyEeprom::new_default();

        // Issue the raw instruction so the protocol-level range check does
        // not get in the way: the chip must decode the low 18 bits and
        // leave the in-range byte below the don't-care bits intact.
        protocol::write_enable(&mut eeprom).unwrap();
        let data = [0x5A];
        let mut cmd = EepromCommand::write_memory(0xFFF2_3456, &data);
        transport::execute(&mut eeprom, &mut cmd).unwrap();
        eeprom.complete_write_cycle();

        assert_eq!(protocol::read_byte(&mut eeprom, 0x23456).unwrap(), 0x5A);
    }

    #[test]
    fn test_write_without_wren_is_ignored() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_byte(&mut eeprom, 0x100, 0x77).unwrap();
        eeprom.complete_write_cycle();
        assert_eq!(protocol::read_byte(&mut eeprom, 0x100).unwrap(), 0xFF);
    }

    #[test]
    fn test_wel_set_and_cleared() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_enable(&mut eeprom).unwrap();
        assert!(protocol::status(&mut eeprom).unwrap().write_enabled());

        protocol::write_disable(&mut eeprom).unwrap();
        assert!(!protocol::status(&mut eeprom).unwrap().write_enabled());

        // The latch also clears itself after a completed write
        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_byte(&mut eeprom, 0, 0x01).unwrap();
        wait_idle(&mut eeprom);
        assert!(!protocol::status(&mut eeprom).unwrap().write_enabled());
    }

    #[test]
    fn test_page_boundary_guard() {
        let mut eeprom = DummyEeprom::new_default();
        protocol::write_enable(&mut eeprom).unwrap();

        assert_eq!(
            protocol::write(&mut eeprom, 0x1FF, &[0x11, 0x22]),
            Err(Error::PageBoundaryCrossed)
        );
        assert_eq!(
            protocol::write(&mut eeprom, 0x100, &[0u8; 257]),
            Err(Error::PageBoundaryCrossed)
        );
        // Exactly one page is fine
        assert_eq!(protocol::write(&mut eeprom, 0x100, &[0u8; 256]).unwrap(), 256);
    }

    #[test]
    fn test_raw_write_wraps_within_page() {
        let mut eeprom = DummyEeprom::new_default();

        // What the guard protects against: a raw WRITE crossing the page
        // boundary wraps to the start of the same page.
        protocol::write_enable(&mut eeprom).unwrap();
        let data = [0x11, 0x22];
        let mut cmd = EepromCommand::write_memory(0x1FF, &data);
        transport::execute(&mut eeprom, &mut cmd).unwrap();
        eeprom.complete_write_cycle();

        assert_eq!(eeprom.data()[0x1FF], 0x11);
        assert_eq!(eeprom.data()[0x100], 0x22);
        assert_eq!(eeprom.data()[0x200], 0xFF);
    }

    #[test]
    fn test_sequential_read_spans_pages() {
        let mut eeprom = DummyEeprom::new_default();
        eeprom.data_mut()[0x1FE..0x202].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);

        // One READ instruction; the chip auto-increments into the next page
        let mut buf = [0u8; 4];
        protocol::read(&mut eeprom, 0x1FE, &mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut eeprom = DummyEeprom::new_default();
        let mut buf = [0u8; 4];

        assert_eq!(
            protocol::read(&mut eeprom, 0x40000, &mut buf),
            Err(Error::AddressOutOfRange)
        );
        assert_eq!(
            protocol::read(&mut eeprom, 0x3FFFE, &mut buf),
            Err(Error::AddressOutOfRange)
        );
        assert_eq!(
            protocol::write(&mut eeprom, 0x40000, &[0]),
            Err(Error::AddressOutOfRange)
        );
        assert_eq!(
            protocol::read_id_page(&mut eeprom, 250, &mut [0u8; 10]),
            Err(Error::AddressOutOfRange)
        );
        assert_eq!(
            protocol::write_id_page(&mut eeprom, 1, &[0u8; 256]),
            Err(Error::AddressOutOfRange)
        );
    }

    #[test]
    fn test_id_page_roundtrip_and_isolation() {
        let mut eeprom = DummyEeprom::new_default();
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];

        protocol::write_enable(&mut eeprom).unwrap();
        assert_eq!(protocol::write_id_page(&mut eeprom, 5, &data).unwrap(), 10);
        wait_idle(&mut eeprom);

        let mut buf = [0u8; 10];
        assert_eq!(protocol::read_id_page(&mut eeprom, 5, &mut buf).unwrap(), 10);
        assert_eq!(buf, data);

        // The main array is untouched, including the same numeric addresses
        let mut main = [0u8; 16];
        protocol::read(&mut eeprom, 0, &mut main).unwrap();
        assert!(main.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_id_framing_on_the_wire() {
        let mut eeprom = DummyEeprom::new_default();

        eeprom.clear_mosi_log();
        let mut buf = [0u8; 1];
        protocol::read_id_page(&mut eeprom, 0x5A, &mut buf).unwrap();
        assert_eq!(eeprom.mosi_log(), &[0x83, 0x00, 0x00, 0x5A, 0x00]);

        eeprom.clear_mosi_log();
        protocol::read_lock_status(&mut eeprom).unwrap();
        assert_eq!(eeprom.mosi_log(), &[0x83, 0x00, 0x04, 0x00, 0x00]);

        protocol::write_enable(&mut eeprom).unwrap();
        eeprom.clear_mosi_log();
        protocol::lock_id(&mut eeprom).unwrap();
        assert_eq!(eeprom.mosi_log(), &[0x82, 0x00, 0x04, 0x00, 0x02]);
    }

    #[test]
    fn test_lock_is_permanent() {
        let mut eeprom = DummyEeprom::new_default();

        assert!(!protocol::id_page_locked(&mut eeprom).unwrap());
        assert_eq!(protocol::read_lock_status(&mut eeprom).unwrap(), 0x00);

        protocol::write_enable(&mut eeprom).unwrap();
        protocol::lock_id(&mut eeprom).unwrap();
        wait_idle(&mut eeprom);

        assert!(protocol::id_page_locked(&mut eeprom).unwrap());
        assert_eq!(
            protocol::read_lock_status(&mut eeprom).unwrap(),
            opcodes::LOCK_DATA
        );

        // Writes to the locked page go nowhere, WREN or not
        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_id_page(&mut eeprom, 0, &[0x99]).unwrap();
        eeprom.complete_write_cycle();
        let mut buf = [0u8; 1];
        protocol::read_id_page(&mut eeprom, 0, &mut buf).unwrap();
        assert_eq!(buf[0], 0xFF);
        assert!(eeprom.is_locked());
    }

    #[test]
    fn test_status_register_write() {
        let mut eeprom = DummyEeprom::new_default();

        let bits = (opcodes::Status::SRWD | opcodes::Status::BP1 | opcodes::Status::BP0).bits();
        protocol::write_enable(&mut eeprom).unwrap();
        protocol::write_status(&mut eeprom, 0xFF).unwrap();
        wait_idle(&mut eeprom);

        // Only SRWD and the block-protect bits stick; WEL/WIP are live state
        assert_eq!(protocol::read_status(&mut eeprom).unwrap(), bits);

        // Without WREN the register write is ignored
        protocol::write_status(&mut eeprom, 0x00).unwrap();
        eeprom.complete_write_cycle();
        assert_eq!(protocol::read_status(&mut eeprom).unwrap(), bits);
    }

    #[test]
    fn test_status_is_never_cached() {
        let mut eeprom = DummyEeprom::new_default();

        protocol::write_enable(&mut eeprom).unwrap();
        eeprom.clear_mosi_log();
        protocol::read_status(&mut eeprom).unwrap();
        protocol::read_status(&mut eeprom).unwrap();
        // Two queries, two RDSR instructions on the wire
        assert_eq!(eeprom.mosi_log(), &[0x05, 0x00, 0x05, 0x00]);
    }

    #[test]
    fn test_device_adapter_flow() {
        let mut eeprom = DummyEeprom::new_default();
        let mut dev = M95M02::new(&mut eeprom);

        dev.init().unwrap();
        dev.init().unwrap();

        dev.write_enable().unwrap();
        assert_eq!(dev.write(0x2000, b"calibration").unwrap(), 11);
        while dev.write_in_progress().unwrap() {}

        let mut buf = [0u8; 11];
        assert_eq!(dev.read(0x2000, &mut buf).unwrap(), 11);
        assert_eq!(&buf, b"calibration");

        assert_eq!(dev.read_byte(0x2000).unwrap(), b'c');
        assert!(!dev.id_page_locked().unwrap());
    }

    #[test]
    fn test_unknown_opcode_reported() {
        let mut eeprom = DummyEeprom::new_default();
        let mut cmd = EepromCommand::simple(0x9F);
        assert_eq!(
            transport::execute(&mut eeprom, &mut cmd),
            Err(Error::OpcodeNotSupported)
        );
    }
}
