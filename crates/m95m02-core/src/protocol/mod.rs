//! Protocol implementations
//!
//! This module contains the M95M02 command sequences built on top of the
//! byte-exchange transport.

mod m95;

pub use m95::*;
