//! Page replacement policies.
//!
//! Each policy tracks its own view of the resident set and differs only in
//! victim selection; the shared fault-handling shape lives in
//! [`crate::manager::MemoryManager`].

pub mod clock;
pub mod fifo;
pub mod lru;
pub mod optimal;

pub use clock::Clock;
pub use fifo::Fifo;
pub use lru::Lru;
pub use optimal::Optimal;

use std::fmt;
use std::str::FromStr;

use crate::page_table::{PageNumber, PageTable};

/// Victim-selection strategy, injected into a session at construction time.
///
/// `select_victim` takes the page table because Clock reads and clears the
/// accessed bits during its sweep; the other policies ignore it.
pub trait ReplacementPolicy {
    /// Called after a faulting page has been placed in a frame.
    fn on_load(&mut self, page: PageNumber);

    /// Called on every reference, hit or miss. FIFO deliberately leaves this
    /// a no-op: load order, not access order, governs its evictions.
    fn on_access(&mut self, _page: PageNumber) {}

    /// Called when a page is evicted, before its frame is released.
    fn on_evict(&mut self, page: PageNumber);

    /// Choose the resident page to evict next. Returns `None` only when the
    /// policy is tracking no pages.
    fn select_victim(&mut self, table: &mut PageTable) -> Option<PageNumber>;
}

/// The closed set of shipped policies, selectable by name on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Clock,
    Optimal,
}

impl PolicyKind {
    /// Build the policy. Optimal is the only one that needs the full
    /// reference string up front; the rest ignore it.
    pub fn build(self, references: &[PageNumber]) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(Fifo::new()),
            PolicyKind::Lru => Box::new(Lru::new()),
            PolicyKind::Clock => Box::new(Clock::new()),
            PolicyKind::Optimal => Box::new(Optimal::new(references)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "clock" => Ok(PolicyKind::Clock),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(format!(
                "Unknown policy: {s} (expected fifo, lru, clock or optimal)"
            )),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Clock => "clock",
            PolicyKind::Optimal => "optimal",
        };
        write!(f, "{name}")
    }
}
