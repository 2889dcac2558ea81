//! Reference-string driver: the simulator side of the callback boundary.
//!
//! Detects misses, calls the session's fault handler, and records what the
//! core did so the CLI and the tests can inspect it.

use log::info;

use crate::constants::DEFAULT_ADDRESS_SPACE_PAGES;
use crate::error::Result;
use crate::frame::FrameIndex;
use crate::manager::{MemoryManager, Simulator};
use crate::page_table::PageNumber;
use crate::policy::PolicyKind;

/// One `loadPage`/`evictPage` callback raised by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Load { page: PageNumber, frame: FrameIndex },
    Evict { page: PageNumber },
}

/// Simulator implementation that records every effect in order. The real
/// I/O is out of scope, so recording is all the collaborator does.
#[derive(Debug, Default)]
pub struct EffectLog {
    pub effects: Vec<Effect>,
}

impl Simulator for EffectLog {
    fn load_page(&mut self, page: PageNumber, frame: FrameIndex) {
        self.effects.push(Effect::Load { page, frame });
    }

    fn evict_page(&mut self, page: PageNumber) {
        self.effects.push(Effect::Evict { page });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Fault,
}

/// What happened over one replayed reference string.
#[derive(Debug, Default)]
pub struct TraceResult {
    /// Hit or fault, one per reference.
    pub outcomes: Vec<Outcome>,
    /// Frame the referenced page occupies after each reference.
    pub frames: Vec<FrameIndex>,
    pub faults: usize,
    /// Victim page numbers in eviction order.
    pub evictions: Vec<PageNumber>,
}

impl TraceResult {
    pub fn references(&self) -> usize {
        self.outcomes.len()
    }

    pub fn hits(&self) -> usize {
        self.references() - self.faults
    }

    pub fn hit_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.hits() as f64 / self.references() as f64
    }
}

/// Build a session for a policy with the default address-space size.
/// Optimal is the only policy that reads `references` at construction.
pub fn new_session(
    kind: PolicyKind,
    num_frames: usize,
    references: &[PageNumber],
) -> MemoryManager<EffectLog> {
    MemoryManager::new(
        num_frames,
        DEFAULT_ADDRESS_SPACE_PAGES,
        kind.build(references),
        EffectLog::default(),
    )
}

/// Replay a reference string: every reference is announced via
/// `notify_access`, and misses go through `handle_fault`.
pub fn run_trace(
    session: &mut MemoryManager<EffectLog>,
    references: &[PageNumber],
) -> Result<TraceResult> {
    let mut result = TraceResult::default();

    for &page in references {
        session.notify_access(page)?;

        if session.is_resident(page)? {
            result.outcomes.push(Outcome::Hit);
        } else {
            session.handle_fault(page)?;
            result.outcomes.push(Outcome::Fault);
            result.faults += 1;
        }

        // handle_fault guarantees residency on return
        let frame = session
            .frame_of(page)
            .ok_or(crate::error::Error::NotResident(page))?;
        result.frames.push(frame);
    }

    result.evictions = session
        .simulator()
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::Evict { page } => Some(*page),
            Effect::Load { .. } => None,
        })
        .collect();

    info!(
        "trace complete: {} references, {} faults, {} evictions",
        result.references(),
        result.faults,
        result.evictions.len()
    );
    Ok(result)
}
