//! m95m02-core - Protocol core for the ST M95M02 SPI EEPROM
//!
//! This crate translates logical EEPROM operations (read N bytes at address
//! A, write N bytes at address A, query status, identification-page access)
//! into the chip's command-byte / address-byte / data-byte SPI sequences.
//! It is designed to be `no_std` compatible for use in embedded environments.
//!
//! The SPI bus itself is an external collaborator: anything implementing
//! [`transport::SpiExchange`] (a full-duplex single-byte exchange) can carry
//! the protocol.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation (boxed transport objects)
//! - `is_sync` - Compile the async API as blocking/synchronous
//!
//! # Example
//!
//! ```ignore
//! use m95m02_core::{protocol, transport::SpiExchange};
//!
//! fn dump_status<B: SpiExchange>(bus: &mut B) {
//!     match protocol::read_status(bus) {
//!         Ok(sr) => println!("status register: {:#04x}", sr),
//!         Err(e) => println!("status read failed: {}", e),
//!     }
//! }
//! ```
//!
//! # Write-enable contract
//!
//! The driver never asserts the write-enable latch on its own. Callers must
//! issue [`protocol::write_enable`] before every write-class command
//! (`write_byte`, `write`, `write_status`, `write_id_page`, `lock_id`) and
//! must poll [`protocol::write_in_progress`] themselves if durability before
//! the next operation is required. A write issued without WREN is silently
//! ignored by the chip.

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Allow async fn in traits - we use maybe-async for dual sync/async support
#![allow(async_fn_in_trait)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod chip;
pub mod device;
pub mod error;
pub mod protocol;
pub mod spi;
pub mod transport;

pub use device::M95M02;
pub use error::{Error, Result};
