//! Error types for m95m02-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Address or length exceeds the addressed region (main array or ID page)
    AddressOutOfRange,
    /// Multi-byte write would span a 256-byte page boundary
    ///
    /// The chip wraps the low address bits within the page instead of
    /// carrying into the next page, so such a write corrupts data at the
    /// start of the page rather than continuing past its end.
    PageBoundaryCrossed,
    /// The transport failed to exchange a byte
    Transport,
    /// Opcode not understood by the device
    ///
    /// Only surfaced by chip emulators; real hardware ignores unknown
    /// instructions silently.
    OpcodeNotSupported,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressOutOfRange => write!(f, "address out of range"),
            Self::PageBoundaryCrossed => write!(f, "write crosses a page boundary"),
            Self::Transport => write!(f, "SPI transport failure"),
            Self::OpcodeNotSupported => write!(f, "opcode not supported by device"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
