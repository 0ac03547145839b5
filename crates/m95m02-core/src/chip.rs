//! M95M02 geometry and page arithmetic
//!
//! The chip is a 2 Mbit array organized as 1024 pages of 256 bytes, with a
//! separate 256-byte identification page. Addresses are decoded from 18 bits;
//! anything above that is ignored by the hardware.

/// Bytes per page
pub const PAGE_SIZE: usize = 256;

/// Number of pages in the main array
pub const PAGE_COUNT: usize = 1024;

/// Total main-array capacity in bytes (262144)
pub const TOTAL_SIZE: usize = PAGE_SIZE * PAGE_COUNT;

/// Address bits decoded by the chip
pub const ADDRESS_BITS: u32 = 18;

/// Mask selecting the address bits the chip decodes
pub const ADDRESS_MASK: u32 = (1 << ADDRESS_BITS) - 1;

/// Size of the identification page in bytes
pub const ID_PAGE_SIZE: usize = 256;

/// Returns the number of bytes from `addr` to the end of its page
pub const fn page_remaining(addr: u32) -> usize {
    PAGE_SIZE - (addr as usize % PAGE_SIZE)
}

/// Returns true if writing `len` bytes at `addr` would cross a page boundary
pub const fn crosses_page_boundary(addr: u32, len: usize) -> bool {
    len > page_remaining(addr)
}

/// Returns true if `len` bytes at `addr` fit within the main array
pub const fn fits_main_array(addr: u32, len: usize) -> bool {
    (addr as usize) < TOTAL_SIZE && len <= TOTAL_SIZE - addr as usize
}

/// Returns true if `len` bytes at `id_addr` fit within the identification page
pub const fn fits_id_page(id_addr: u8, len: usize) -> bool {
    len <= ID_PAGE_SIZE - id_addr as usize
}
