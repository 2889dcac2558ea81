pub const ADDRESS_SPACE_BITS: u32 = 9;

/// Default number of pages in the simulated virtual address space.
pub const DEFAULT_ADDRESS_SPACE_PAGES: usize = 1 << ADDRESS_SPACE_BITS;
