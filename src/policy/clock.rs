use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::page_table::{PageNumber, PageTable};

/// Second-chance (clock) replacement.
///
/// Resident pages form a circular list; the front of the deque is the clock
/// hand. The sweep reads the page table's accessed bits: a set bit buys the
/// page one more lap and is cleared, the first clear bit marks the victim.
#[derive(Debug, Default)]
pub struct Clock {
    ring: VecDeque<PageNumber>,
}

impl Clock {
    pub fn new() -> Self {
        Clock::default()
    }
}

impl ReplacementPolicy for Clock {
    fn on_load(&mut self, page: PageNumber) {
        // New pages enter behind the hand and are swept last.
        self.ring.push_back(page);
    }

    fn on_evict(&mut self, page: PageNumber) {
        if let Some(i) = self.ring.iter().position(|&p| p == page) {
            self.ring.remove(i);
        }
    }

    fn select_victim(&mut self, table: &mut PageTable) -> Option<PageNumber> {
        // Terminates: each rotation clears one accessed bit, so after at
        // most one full lap the front page has a clear bit.
        loop {
            let page = *self.ring.front()?;
            let entry = table.entry(page).ok()?;
            if entry.accessed() {
                entry.set_accessed(false);
                self.ring.rotate_left(1);
            } else {
                return Some(page);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::driver;
    use crate::policy::PolicyKind;

    // Without intervening hits no accessed bit is ever set, so the sweep
    // always takes the front page and clock degenerates to FIFO.
    #[test]
    fn test_clock_degenerates_to_fifo_without_hits() {
        let refs = [1, 2, 3, 4, 1, 2, 5];
        let mut session = driver::new_session(PolicyKind::Clock, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        assert_eq!(result.faults, 7);
        assert_eq!(result.evictions, vec![1, 2, 3, 4]);
    }

    // A hit sets the accessed bit, so the sweep skips page 1 and takes 2.
    #[test]
    fn test_clock_grants_second_chance() {
        let refs = [1, 2, 3, 1, 4];
        let mut session = driver::new_session(PolicyKind::Clock, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        assert_eq!(result.evictions, vec![2]);
        assert_eq!(result.faults, 4);
        assert!(session.is_resident(1).unwrap());
        assert!(session.is_resident(4).unwrap());
    }

    // The second-chance sweep clears bits as it passes, so a page spared
    // once is evicted on the next pressure unless re-referenced.
    #[test]
    fn test_clock_clears_bits_during_sweep() {
        let refs = [1, 2, 3, 1, 4, 5];
        let mut session = driver::new_session(PolicyKind::Clock, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        // 4's fault sweeps past 1 (clearing its bit) and evicts 2; 5's
        // fault then finds 3 with a clear bit at the hand.
        assert_eq!(result.evictions, vec![2, 3]);
    }
}
