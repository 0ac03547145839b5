//! Transport trait and command executor
//!
//! The bus is an external collaborator reduced to its smallest useful
//! surface: a blocking full-duplex byte exchange. Everything protocol-shaped
//! (opcode first, then exactly three address bytes, then data) lives in
//! [`execute`], so transports stay trivial.
//!
//! The trait uses `maybe_async` to support both sync and async modes:
//! - With the `is_sync` feature: blocking/synchronous
//! - Without `is_sync`: async (embedded executors, tokio)

use crate::error::Result;
use crate::spi::{opcodes, EepromCommand};
use log::trace;
use maybe_async::maybe_async;

/// Full-duplex SPI byte exchange (sync or async depending on `is_sync`)
///
/// One instruction maps to one transaction: the executor clocks the opcode,
/// address and data bytes through [`exchange`](Self::exchange) and then calls
/// [`finish`](Self::finish). The chip latches write instructions when chip
/// select rises, so transports that drive CS must release it in `finish`;
/// transports whose hardware frames transfers on its own may no-op.
#[maybe_async(AFIT)]
pub trait SpiExchange {
    /// Bring up the underlying bus
    ///
    /// Called once from driver initialization; must be idempotent.
    async fn init(&mut self) -> Result<()>;

    /// Exchange a single byte: clock `out` onto the bus, return the byte
    /// clocked back in
    async fn exchange(&mut self, out: u8) -> Result<u8>;

    /// End the current transaction (chip-select release)
    async fn finish(&mut self) -> Result<()>;
}

// Blanket impl for boxed transports to allow trait objects (sync mode only)
// In async mode, traits with async fn are not object-safe
#[cfg(all(feature = "alloc", feature = "is_sync"))]
impl SpiExchange for alloc::boxed::Box<dyn SpiExchange + Send> {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn exchange(&mut self, out: u8) -> Result<u8> {
        (**self).exchange(out)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Stream a command over the transport
///
/// This is the only place bytes are sequenced: opcode, then the encoded
/// address field (exactly 3 bytes for every addressed instruction), then the
/// write data, then one dummy byte per byte read. The transaction is closed
/// with [`SpiExchange::finish`] even when no data phase is present.
#[maybe_async]
pub async fn execute<B: SpiExchange + ?Sized>(
    bus: &mut B,
    cmd: &mut EepromCommand<'_>,
) -> Result<()> {
    trace!(
        "opcode {:#04x}: {} bytes on the wire",
        cmd.opcode,
        cmd.total_bytes()
    );

    bus.exchange(cmd.opcode).await?;

    let mut addr = [0u8; 3];
    let addr_len = cmd.address.encode(&mut addr);
    for &byte in &addr[..addr_len] {
        bus.exchange(byte).await?;
    }

    for &byte in cmd.write_data {
        bus.exchange(byte).await?;
    }

    for slot in cmd.read_buf.iter_mut() {
        *slot = bus.exchange(opcodes::DUMMY_BYTE).await?;
    }

    bus.finish().await
}
