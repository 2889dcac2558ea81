use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::page_table::{PageNumber, PageTable};

/// Least-recently-used replacement. The deque holds resident pages in
/// recency order, least recent at the front.
#[derive(Debug, Default)]
pub struct Lru {
    order: VecDeque<PageNumber>,
}

impl Lru {
    pub fn new() -> Self {
        Lru::default()
    }
}

impl ReplacementPolicy for Lru {
    fn on_load(&mut self, page: PageNumber) {
        self.order.push_back(page);
    }

    fn on_access(&mut self, page: PageNumber) {
        // Only resident pages are tracked; an access to the page already at
        // the most-recent end is a no-op.
        if self.order.back() == Some(&page) {
            return;
        }
        if let Some(i) = self.order.iter().position(|&p| p == page) {
            self.order.remove(i);
            self.order.push_back(page);
        }
    }

    fn on_evict(&mut self, page: PageNumber) {
        if let Some(i) = self.order.iter().position(|&p| p == page) {
            self.order.remove(i);
        }
    }

    fn select_victim(&mut self, _table: &mut PageTable) -> Option<PageNumber> {
        self.order.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{self, Outcome};
    use crate::policy::PolicyKind;

    // 3 frames, refs 1,2,3,1,4,1: the hit on 1 refreshes its recency, so 4's
    // fault evicts 2 and the final reference to 1 hits. FIFO would evict 1
    // there and refault it.
    #[test]
    fn test_lru_keeps_recently_used_page() {
        let refs = [1, 2, 3, 1, 4, 1];
        let mut session = driver::new_session(PolicyKind::Lru, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        assert_eq!(result.evictions, vec![2]);
        assert_eq!(result.faults, 4);
        assert_eq!(result.outcomes[5], Outcome::Hit);

        let mut fifo = driver::new_session(PolicyKind::Fifo, 3, &refs);
        let fifo_result = driver::run_trace(&mut fifo, &refs).unwrap();
        assert_eq!(fifo_result.faults, 5);
    }

    // If A was referenced more recently than B, B goes first under pressure.
    #[test]
    fn test_lru_ordering_property() {
        let refs = [1, 2, 3, 2, 1, 4, 5];
        let mut session = driver::new_session(PolicyKind::Lru, 3, &refs);
        let result = driver::run_trace(&mut session, &refs).unwrap();

        // Recency after the first five references is 3 < 2 < 1.
        assert_eq!(result.evictions, vec![3, 2]);
    }

    #[test]
    fn test_repeated_access_is_idempotent() {
        let mut lru = Lru::new();
        for page in [1, 2, 3] {
            lru.on_load(page);
        }
        lru.on_access(3);
        lru.on_access(3);
        lru.on_access(3);
        assert_eq!(lru.order, [1, 2, 3]);

        // Accessing a page the policy is not tracking changes nothing.
        lru.on_access(9);
        assert_eq!(lru.order, [1, 2, 3]);
    }
}
