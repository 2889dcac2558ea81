use log::{debug, trace};

use crate::error::{Error, Result};
use crate::frame::{FrameAllocator, FrameIndex};
use crate::page_table::{PageNumber, PageTable, PageTableEntry};
use crate::policy::ReplacementPolicy;

/// Outbound effects the core raises while handling a fault. The collaborator
/// performs the actual load and write-back; the core only models the
/// decision. Both calls happen synchronously inside `handle_fault`.
pub trait Simulator {
    /// Load a page into the frame it was just assigned.
    fn load_page(&mut self, page: PageNumber, frame: FrameIndex);

    /// The resident copy of a page is being discarded. Its modified bit has
    /// already been cleared by the time this runs.
    fn evict_page(&mut self, page: PageNumber);
}

/// One simulation session: page table, frame pool and the injected
/// replacement policy, driven one event at a time by the simulator.
///
/// Single-threaded by construction; eviction and allocation happen inline
/// within `handle_fault` before it returns. Independent traces get
/// independent sessions.
pub struct MemoryManager<S: Simulator> {
    table: PageTable,
    frames: FrameAllocator,
    policy: Box<dyn ReplacementPolicy>,
    sim: S,
}

impl<S: Simulator> MemoryManager<S> {
    pub fn new(
        num_frames: usize,
        address_space_pages: usize,
        policy: Box<dyn ReplacementPolicy>,
        sim: S,
    ) -> Self {
        MemoryManager {
            table: PageTable::new(address_space_pages),
            frames: FrameAllocator::new(num_frames),
            policy,
            sim,
        }
    }

    /// Handle a miss: place the page in a free frame, evicting a victim
    /// first when none is free. On return the page is valid and resident.
    ///
    /// Faulting on an already-resident page is a driver contract violation.
    pub fn handle_fault(&mut self, page: PageNumber) -> Result<()> {
        if self.table.is_resident(page)? {
            return Err(Error::AlreadyResident(page));
        }

        let frame = match self.frames.allocate() {
            Ok(frame) => frame,
            Err(Error::NoFreeFrame) => {
                let victim = self
                    .policy
                    .select_victim(&mut self.table)
                    .ok_or(Error::NoFreeFrame)?;
                self.evict(victim)?;
                self.frames.allocate()?
            }
            Err(e) => return Err(e),
        };

        let entry = self.table.entry(page)?;
        entry.set_valid(true);
        entry.set_frame(Some(frame));
        self.policy.on_load(page);

        debug!("fault: page {page} -> frame {frame}");
        self.sim.load_page(page, frame);
        Ok(())
    }

    /// Record a reference to a page, hit or miss. Sets the accessed bit on
    /// resident entries and runs the policy's recency hook.
    pub fn notify_access(&mut self, page: PageNumber) -> Result<()> {
        let entry = self.table.entry(page)?;
        if entry.is_valid() {
            entry.set_accessed(true);
        }
        trace!("access: page {page}");
        self.policy.on_access(page);
        Ok(())
    }

    /// Evict a resident page: invalidate its entry, clear the accessed and
    /// modified bits, notify the collaborator and return its frame to the
    /// pool. Evicting a non-resident page is a consistency violation.
    pub fn evict(&mut self, page: PageNumber) -> Result<FrameIndex> {
        let entry = self.table.entry(page)?;
        if !entry.is_valid() {
            return Err(Error::NotResident(page));
        }
        let frame = entry.frame().ok_or(Error::NotResident(page))?;

        entry.set_valid(false);
        entry.set_frame(None);
        entry.set_accessed(false);
        entry.set_modified(false);
        self.policy.on_evict(page);

        debug!("evict: page {page} frees frame {frame}");
        self.sim.evict_page(page);
        self.frames.release(frame)?;
        Ok(frame)
    }

    pub fn is_resident(&self, page: PageNumber) -> Result<bool> {
        self.table.is_resident(page)
    }

    /// The frame a page occupies, if it is resident.
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameIndex> {
        self.table
            .get(page)
            .filter(|e| e.is_valid())
            .and_then(PageTableEntry::frame)
    }

    pub fn resident_count(&self) -> usize {
        self.table.valid_count()
    }

    pub fn free_frames(&self) -> usize {
        self.frames.free_count()
    }

    pub fn num_frames(&self) -> usize {
        self.frames.num_frames()
    }

    pub fn table(&self) -> &PageTable {
        &self.table
    }

    pub fn simulator(&self) -> &S {
        &self.sim
    }

    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.sim
    }
}
