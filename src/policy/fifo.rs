use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::page_table::{PageNumber, PageTable};

/// First-in first-out replacement: victim is the oldest-loaded resident
/// page, irrespective of any accesses since its load.
#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<PageNumber>,
}

impl Fifo {
    pub fn new() -> Self {
        Fifo::default()
    }
}

impl ReplacementPolicy for Fifo {
    fn on_load(&mut self, page: PageNumber) {
        self.queue.push_back(page);
    }

    fn on_evict(&mut self, page: PageNumber) {
        if let Some(i) = self.queue.iter().position(|&p| p == page) {
            self.queue.remove(i);
        }
    }

    fn select_victim(&mut self, _table: &mut PageTable) -> Option<PageNumber> {
        self.queue.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::driver::{self, Outcome};
    use crate::policy::PolicyKind;

    // 3 frames, refs 1,2,3,4,1,2,5: every re-reference lands after its
    // frame was recycled, so all 7 references fault.
    #[test]
    fn test_fifo_scenario() {
        let refs = [1, 2, 3, 4, 1, 2, 5];
        let mut session = driver::new_session(PolicyKind::Fifo, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        assert_eq!(result.faults, 7);
        assert!(result.outcomes.iter().all(|&o| o == Outcome::Fault));
        assert_eq!(result.evictions, vec![1, 2, 3, 4]);
    }

    // Accesses to a resident page must not save it from eviction.
    #[test]
    fn test_fifo_ignores_accesses() {
        let refs = [1, 2, 3, 1, 1, 4, 1];
        let mut session = driver::new_session(PolicyKind::Fifo, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        // Page 1 is evicted on 4's fault despite being the hottest page,
        // then refaults on the final reference.
        assert_eq!(result.evictions, vec![1, 2]);
        assert_eq!(result.faults, 5);
    }
}
