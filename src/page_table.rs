use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::frame::FrameIndex;

/// A unit of virtual address space, identified by its number.
pub type PageNumber = usize;

/// Per-page residency record.
///
/// `frame` is meaningful only while `valid` is set; the owning replacement
/// policy is responsible for keeping the two in step. The accessed and
/// modified bits are auxiliary state read by some policies (Clock) and
/// cleared on eviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    valid: bool,
    frame: Option<FrameIndex>,
    accessed: bool,
    modified: bool,
}

impl PageTableEntry {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn frame(&self) -> Option<FrameIndex> {
        self.frame
    }

    #[inline]
    pub fn accessed(&self) -> bool {
        self.accessed
    }

    #[inline]
    pub fn modified(&self) -> bool {
        self.modified
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn set_frame(&mut self, frame: Option<FrameIndex>) {
        self.frame = frame;
    }

    pub fn set_accessed(&mut self, accessed: bool) {
        self.accessed = accessed;
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }
}

/// Mapping from page number to its entry.
///
/// Entries are created lazily on first reference and never destroyed, only
/// reset when their page is evicted. Page numbers at or beyond the
/// configured address-space size are rejected with `Error::OutOfRange`.
pub struct PageTable {
    entries: BTreeMap<PageNumber, PageTableEntry>,
    address_space_pages: usize,
}

impl PageTable {
    pub fn new(address_space_pages: usize) -> Self {
        PageTable {
            entries: BTreeMap::new(),
            address_space_pages,
        }
    }

    fn check_bounds(&self, page: PageNumber) -> Result<()> {
        if page >= self.address_space_pages {
            return Err(Error::OutOfRange {
                page,
                limit: self.address_space_pages,
            });
        }
        Ok(())
    }

    /// The entry for a page, created invalid with no frame on first reference.
    pub fn entry(&mut self, page: PageNumber) -> Result<&mut PageTableEntry> {
        self.check_bounds(page)?;
        Ok(self.entries.entry(page).or_default())
    }

    /// Read-only lookup that does not create an entry.
    pub fn get(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.entries.get(&page)
    }

    /// Whether a page currently occupies a frame.
    pub fn is_resident(&self, page: PageNumber) -> Result<bool> {
        self.check_bounds(page)?;
        Ok(self.get(page).is_some_and(|e| e.is_valid()))
    }

    /// Number of pages currently resident.
    pub fn valid_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_valid()).count()
    }

    /// Page numbers of all resident pages, in page-number order.
    pub fn resident_pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| e.is_valid())
            .map(|(&page, _)| page)
    }

    pub fn address_space_pages(&self) -> usize {
        self.address_space_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_created_lazily() {
        let mut table = PageTable::new(64);
        assert!(table.get(5).is_none());

        let entry = table.entry(5).unwrap();
        assert!(!entry.is_valid());
        assert_eq!(entry.frame(), None);
        assert!(!entry.accessed());
        assert!(!entry.modified());

        // The entry persists once created
        assert!(table.get(5).is_some());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut table = PageTable::new(64);
        assert_eq!(
            table.entry(64),
            Err(Error::OutOfRange { page: 64, limit: 64 })
        );
        assert_eq!(
            table.is_resident(1000),
            Err(Error::OutOfRange { page: 1000, limit: 64 })
        );
        // The failed lookup must not create an entry
        assert!(table.get(64).is_none());
    }

    #[test]
    fn test_entry_mutators() {
        let mut table = PageTable::new(64);
        let entry = table.entry(3).unwrap();
        entry.set_valid(true);
        entry.set_frame(Some(7));
        entry.set_accessed(true);
        entry.set_modified(true);

        let entry = table.get(3).unwrap();
        assert!(entry.is_valid());
        assert_eq!(entry.frame(), Some(7));
        assert!(entry.accessed());
        assert!(entry.modified());
    }

    #[test]
    fn test_valid_count_and_resident_pages() {
        let mut table = PageTable::new(64);
        for page in [2, 9, 4] {
            let entry = table.entry(page).unwrap();
            entry.set_valid(true);
            entry.set_frame(Some(page));
        }
        // An invalid entry must not be counted
        table.entry(30).unwrap();

        assert_eq!(table.valid_count(), 3);
        let resident: Vec<PageNumber> = table.resident_pages().collect();
        assert_eq!(resident, vec![2, 4, 9]);
    }
}
