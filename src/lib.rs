pub mod constants;
pub mod driver;
pub mod error;
pub mod frame;
pub mod io;
pub mod manager;
pub mod page_table;
pub mod policy;

// Re-export commonly used items for convenience
pub use constants::*;
pub use error::{Error, Result};
pub use frame::{FrameAllocator, FrameIndex};
pub use manager::{MemoryManager, Simulator};
pub use page_table::{PageNumber, PageTable, PageTableEntry};
pub use policy::{PolicyKind, ReplacementPolicy};
