//! M95M02 command sequences
//!
//! Each operation issues exactly one SPI instruction: opcode, address field,
//! data phase. Nothing here loops, sleeps, or retries - completion polling
//! after a write belongs to the caller, via [`write_in_progress`].
//!
//! # Write-enable contract
//!
//! The chip requires the write-enable latch (WREN) before every write-class
//! instruction and clears the latch when the instruction completes. These
//! functions do NOT assert WREN implicitly: callers must invoke
//! [`write_enable`] themselves before `write_byte`, `write`, `write_status`,
//! `write_id_page` and `lock_id`. A write issued without WREN is silently
//! ignored by the chip - there is no error, the data simply never changes.

use crate::chip;
use crate::error::{Error, Result};
use crate::spi::{opcodes, EepromCommand, Status};
use crate::transport::{execute, SpiExchange};
use log::debug;
use maybe_async::maybe_async;

/// Send the Write Enable instruction
///
/// Sets the WEL latch; required before every write-class instruction.
#[maybe_async]
pub async fn write_enable<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<()> {
    let mut cmd = EepromCommand::simple(opcodes::WREN);
    execute(bus, &mut cmd).await
}

/// Send the Write Disable instruction
///
/// Clears the WEL latch without writing anything.
#[maybe_async]
pub async fn write_disable<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<()> {
    let mut cmd = EepromCommand::simple(opcodes::WRDI);
    execute(bus, &mut cmd).await
}

/// Read the status register, verbatim
///
/// Always re-issues RDSR; the register is never cached.
#[maybe_async]
pub async fn read_status<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<u8> {
    let mut buf = [0u8; 1];
    let mut cmd = EepromCommand::read_reg(opcodes::RDSR, &mut buf);
    execute(bus, &mut cmd).await?;
    Ok(buf[0])
}

/// Read the status register as typed flags
#[maybe_async]
pub async fn status<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<Status> {
    Ok(Status::from_bits_retain(read_status(bus).await?))
}

/// Check whether the chip's internal write cycle is still running
///
/// Intended to be polled in a caller-owned loop after a write until it
/// clears; the caller imposes its own delay and timeout policy.
#[maybe_async]
pub async fn write_in_progress<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<bool> {
    Ok(status(bus).await?.write_in_progress())
}

/// Write the status register (block protect and SRWD bits)
///
/// Caller must issue [`write_enable`] first; see the module docs.
#[maybe_async]
pub async fn write_status<B: SpiExchange + ?Sized>(bus: &mut B, value: u8) -> Result<()> {
    let data = [value];
    let mut cmd = EepromCommand::write_reg(opcodes::WRSR, &data);
    execute(bus, &mut cmd).await
}

/// Read a single byte from the main array
#[maybe_async]
pub async fn read_byte<B: SpiExchange + ?Sized>(bus: &mut B, addr: u32) -> Result<u8> {
    let mut buf = [0u8; 1];
    read(bus, addr, &mut buf).await?;
    Ok(buf[0])
}

/// Read `buf.len()` bytes from the main array starting at `addr`
///
/// A single READ instruction; the chip auto-increments across page
/// boundaries, so the only bound is the array itself. Returns the number of
/// bytes read.
#[maybe_async]
pub async fn read<B: SpiExchange + ?Sized>(
    bus: &mut B,
    addr: u32,
    buf: &mut [u8],
) -> Result<usize> {
    if !chip::fits_main_array(addr, buf.len()) {
        return Err(Error::AddressOutOfRange);
    }

    let mut cmd = EepromCommand::read_memory(addr, buf);
    execute(bus, &mut cmd).await?;
    Ok(buf.len())
}

/// Write a single byte to the main array
///
/// Returns 1 without waiting for the write cycle; callers needing
/// durability must poll [`write_in_progress`]. Caller must issue
/// [`write_enable`] first.
#[maybe_async]
pub async fn write_byte<B: SpiExchange + ?Sized>(bus: &mut B, addr: u32, data: u8) -> Result<usize> {
    let buf = [data];
    write(bus, addr, &buf).await
}

/// Write `data` to the main array starting at `addr`
///
/// A single WRITE instruction, so the data must fit within one 256-byte
/// page: the chip wraps the low address bits within the page on overflow
/// instead of advancing, which would silently corrupt the start of the
/// page. Returns the number of bytes written; never waits for the write
/// cycle. Caller must issue [`write_enable`] first.
#[maybe_async]
pub async fn write<B: SpiExchange + ?Sized>(bus: &mut B, addr: u32, data: &[u8]) -> Result<usize> {
    if !chip::fits_main_array(addr, data.len()) {
        return Err(Error::AddressOutOfRange);
    }
    if chip::crosses_page_boundary(addr, data.len()) {
        return Err(Error::PageBoundaryCrossed);
    }

    debug!("write {} bytes at {:#07x}", data.len(), addr);
    let mut cmd = EepromCommand::write_memory(addr, data);
    execute(bus, &mut cmd).await?;
    Ok(data.len())
}

/// Read from the identification page
///
/// `id_addr` is the byte offset within the 256-byte page. Returns the
/// number of bytes read.
#[maybe_async]
pub async fn read_id_page<B: SpiExchange + ?Sized>(
    bus: &mut B,
    id_addr: u8,
    buf: &mut [u8],
) -> Result<usize> {
    if !chip::fits_id_page(id_addr, buf.len()) {
        return Err(Error::AddressOutOfRange);
    }

    let mut cmd = EepromCommand::read_id(id_addr, buf);
    execute(bus, &mut cmd).await?;
    Ok(buf.len())
}

/// Write to the identification page
///
/// The identification page is disjoint from the main array; writing here
/// never touches array data. Once the page is locked via [`lock_id`] the
/// chip ignores these writes permanently. Returns the number of bytes
/// written. Caller must issue [`write_enable`] first.
#[maybe_async]
pub async fn write_id_page<B: SpiExchange + ?Sized>(
    bus: &mut B,
    id_addr: u8,
    data: &[u8],
) -> Result<usize> {
    if !chip::fits_id_page(id_addr, data.len()) {
        return Err(Error::AddressOutOfRange);
    }

    debug!("write {} bytes at id page offset {:#04x}", data.len(), id_addr);
    let mut cmd = EepromCommand::write_id(id_addr, data);
    execute(bus, &mut cmd).await?;
    Ok(data.len())
}

/// Read the identification-page lock status byte, verbatim
#[maybe_async]
pub async fn read_lock_status<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<u8> {
    let mut buf = [0u8; 1];
    let mut cmd = EepromCommand::read_lock_status(&mut buf);
    execute(bus, &mut cmd).await?;
    Ok(buf[0])
}

/// Check whether the identification page has been locked
#[maybe_async]
pub async fn id_page_locked<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<bool> {
    Ok(read_lock_status(bus).await? & opcodes::LOCK_DATA != 0)
}

/// Lock the identification page
///
/// This is a one-way, destructive transition: the lock is latched in
/// nonvolatile memory and there is no unlock instruction. All subsequent
/// identification-page writes are ignored by the chip, forever. Caller must
/// issue [`write_enable`] first.
#[maybe_async]
pub async fn lock_id<B: SpiExchange + ?Sized>(bus: &mut B) -> Result<()> {
    debug!("locking identification page (irreversible)");
    let mut cmd = EepromCommand::lock_id();
    execute(bus, &mut cmd).await
}
