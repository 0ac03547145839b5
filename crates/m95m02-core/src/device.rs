//! EEPROM device adapter
//!
//! This module provides [`M95M02`], an adapter that bundles the protocol
//! operations behind a method API over a borrowed transport.

use crate::error::Result;
use crate::protocol;
use crate::spi::Status;
use crate::transport::SpiExchange;
use maybe_async::maybe_async;

/// Driver handle for one M95M02 chip
///
/// The driver is stateless between calls: it borrows the transport and holds
/// nothing else, so a handle can be created per transaction sequence. Access
/// to the shared bus must be serialized externally - an opcode/address/data
/// sequence must never interleave with another caller's.
///
/// # Example
///
/// ```ignore
/// use m95m02_core::M95M02;
///
/// fn store<B: m95m02_core::transport::SpiExchange>(bus: &mut B) {
///     let mut eeprom = M95M02::new(bus);
///     eeprom.init().unwrap();
///     eeprom.write_enable().unwrap();
///     eeprom.write(0x1000, b"calibration").unwrap();
///     while eeprom.write_in_progress().unwrap() {}
/// }
/// ```
pub struct M95M02<'a, B: SpiExchange + ?Sized> {
    bus: &'a mut B,
}

#[maybe_async]
impl<'a, B: SpiExchange + ?Sized> M95M02<'a, B> {
    /// Create a new driver handle over a transport
    pub fn new(bus: &'a mut B) -> Self {
        Self { bus }
    }

    /// Get a reference to the underlying transport
    pub fn bus(&mut self) -> &mut B {
        self.bus
    }

    /// Bring up the transport; idempotent
    pub async fn init(&mut self) -> Result<()> {
        self.bus.init().await
    }

    /// Set the write-enable latch (WREN)
    ///
    /// Required before every write-class operation; the chip clears the
    /// latch again when the write instruction completes.
    pub async fn write_enable(&mut self) -> Result<()> {
        protocol::write_enable(self.bus).await
    }

    /// Clear the write-enable latch (WRDI)
    pub async fn write_disable(&mut self) -> Result<()> {
        protocol::write_disable(self.bus).await
    }

    /// Read the status register, verbatim
    pub async fn read_status(&mut self) -> Result<u8> {
        protocol::read_status(self.bus).await
    }

    /// Read the status register as typed flags
    pub async fn status(&mut self) -> Result<Status> {
        protocol::status(self.bus).await
    }

    /// Check whether the internal write cycle is still running
    ///
    /// Poll in a caller-owned loop after a write; the driver performs no
    /// looping, sleeping, or timeout itself.
    pub async fn write_in_progress(&mut self) -> Result<bool> {
        protocol::write_in_progress(self.bus).await
    }

    /// Write the status register. Caller must call `write_enable` first
    pub async fn write_status(&mut self, value: u8) -> Result<()> {
        protocol::write_status(self.bus, value).await
    }

    /// Read a single byte from the main array
    pub async fn read_byte(&mut self, addr: u32) -> Result<u8> {
        protocol::read_byte(self.bus, addr).await
    }

    /// Read into `buf` starting at `addr`; returns the count read
    pub async fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<usize> {
        protocol::read(self.bus, addr, buf).await
    }

    /// Write a single byte. Caller must call `write_enable` first
    pub async fn write_byte(&mut self, addr: u32, data: u8) -> Result<usize> {
        protocol::write_byte(self.bus, addr, data).await
    }

    /// Write `data` starting at `addr`; returns the count written
    ///
    /// Bounded to one 256-byte page. Caller must call `write_enable` first
    /// and poll [`write_in_progress`](Self::write_in_progress) if durability
    /// before the next operation is required.
    pub async fn write(&mut self, addr: u32, data: &[u8]) -> Result<usize> {
        protocol::write(self.bus, addr, data).await
    }

    /// Read from the identification page
    pub async fn read_id_page(&mut self, id_addr: u8, buf: &mut [u8]) -> Result<usize> {
        protocol::read_id_page(self.bus, id_addr, buf).await
    }

    /// Write to the identification page. Caller must call `write_enable` first
    pub async fn write_id_page(&mut self, id_addr: u8, data: &[u8]) -> Result<usize> {
        protocol::write_id_page(self.bus, id_addr, data).await
    }

    /// Read the identification-page lock status byte
    pub async fn read_lock_status(&mut self) -> Result<u8> {
        protocol::read_lock_status(self.bus).await
    }

    /// Check whether the identification page has been locked
    pub async fn id_page_locked(&mut self) -> Result<bool> {
        protocol::id_page_locked(self.bus).await
    }

    /// Lock the identification page - irreversible on real hardware
    ///
    /// Caller must call `write_enable` first.
    pub async fn lock_id(&mut self) -> Result<()> {
        protocol::lock_id(self.bus).await
    }
}
