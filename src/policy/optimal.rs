use super::ReplacementPolicy;
use crate::page_table::{PageNumber, PageTable};

/// Belady's optimal replacement: victim is the resident page whose next use
/// lies furthest in the future, or that is never used again.
///
/// Requires the full reference string up front. The cursor tracks how far
/// the driver has advanced, one `on_access` call per reference.
#[derive(Debug)]
pub struct Optimal {
    future: Vec<PageNumber>,
    cursor: usize,
    resident: Vec<PageNumber>,
}

impl Optimal {
    pub fn new(references: &[PageNumber]) -> Self {
        Optimal {
            future: references.to_vec(),
            cursor: 0,
            resident: Vec::new(),
        }
    }

    /// Offset of the next use of a page at or after the cursor, or
    /// `usize::MAX` if the page is never referenced again.
    fn next_use(&self, page: PageNumber) -> usize {
        self.future[self.cursor..]
            .iter()
            .position(|&p| p == page)
            .unwrap_or(usize::MAX)
    }
}

impl ReplacementPolicy for Optimal {
    fn on_load(&mut self, page: PageNumber) {
        self.resident.push(page);
    }

    fn on_access(&mut self, page: PageNumber) {
        // The driver replays the same string the policy was built from, so
        // each access consumes the matching reference. Anything else leaves
        // the cursor alone and degrades the prediction gracefully.
        if self.future.get(self.cursor) == Some(&page) {
            self.cursor += 1;
        }
    }

    fn on_evict(&mut self, page: PageNumber) {
        self.resident.retain(|&p| p != page);
    }

    fn select_victim(&mut self, _table: &mut PageTable) -> Option<PageNumber> {
        // Ties (several pages never used again) go to the earliest-loaded,
        // since `resident` is kept in load order.
        let mut victim: Option<(PageNumber, usize)> = None;
        for &page in &self.resident {
            let distance = self.next_use(page);
            match victim {
                Some((_, best)) if distance <= best => {}
                _ => victim = Some((page, distance)),
            }
        }
        victim.map(|(page, _)| page)
    }
}
