//! Pagination bookkeeping for the browse listing
//!
//! The server owns the slicing; the client only tracks which page it is on
//! and which navigations are legal.

/// Current position within a paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: current.max(1),
            total: total.max(1),
        }
    }

    /// The page to navigate to, or `None` when the request is a no-op:
    /// page zero, past the end, or already the current page.
    pub fn goto(&self, page: u32) -> Option<u32> {
        if page < 1 || page > self.total || page == self.current {
            None
        } else {
            Some(page)
        }
    }

    pub fn prev(&self) -> Option<u32> {
        self.current.checked_sub(1).and_then(|p| self.goto(p))
    }

    pub fn next(&self) -> Option<u32> {
        self.goto(self.current + 1)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// The page track, e.g. "2 of 7"
    pub fn label(&self) -> String {
        format!("{} of {}", self.current, self.total)
    }

    /// Single-page listings render no pagination controls at all
    pub fn single_page(&self) -> bool {
        self.total <= 1
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_is_a_no_op() {
        let pager = Pager::new(1, 5);
        assert_eq!(pager.goto(0), None);
    }

    #[test]
    fn past_the_end_is_a_no_op() {
        let pager = Pager::new(4, 5);
        assert_eq!(pager.goto(6), None);
        assert_eq!(pager.goto(5), Some(5));
    }

    #[test]
    fn current_page_is_a_no_op() {
        let pager = Pager::new(3, 5);
        assert_eq!(pager.goto(3), None);
    }

    #[test]
    fn prev_next_disable_at_the_edges() {
        let first = Pager::new(1, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pager::new(3, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(2));
    }

    #[test]
    fn label_reads_current_of_total() {
        assert_eq!(Pager::new(2, 7).label(), "2 of 7");
    }

    #[test]
    fn degenerate_input_clamps_to_page_one() {
        let pager = Pager::new(0, 0);
        assert_eq!(pager.label(), "1 of 1");
        assert!(pager.single_page());
    }

    #[test]
    fn pages_iterates_every_link() {
        let pager = Pager::new(1, 3);
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
