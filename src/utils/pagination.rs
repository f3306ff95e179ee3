//! Client-side pagination over a filtered collection.

/// Fixed page size used by every list screen.
pub const PAGE_SIZE: usize = 50;

/// A 1-based page window over a collection of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self { page: 1, total }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(PAGE_SIZE).max(1)
    }

    /// Half-open index range of the current page, clamped to `total`.
    pub fn window(&self) -> (usize, usize) {
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.total);
        (start.min(self.total), end)
    }

    pub fn next(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Reset to page 1 with a new total, keeping the page in range when
    /// the collection shrinks under the cursor.
    pub fn retotal(&mut self, total: usize) {
        self.total = total;
        if self.page > self.page_count() {
            self.page = self.page_count();
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.window();
        &items[start..end]
    }
}

/// Case-insensitive substring match used by the local list filters.
pub fn matches_filter(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(Pager::new(0).page_count(), 1);
        assert_eq!(Pager::new(1).page_count(), 1);
        assert_eq!(Pager::new(50).page_count(), 1);
        assert_eq!(Pager::new(51).page_count(), 2);
        assert_eq!(Pager::new(150).page_count(), 3);
        assert_eq!(Pager::new(151).page_count(), 4);
    }

    #[test]
    fn test_window_slices() {
        let items: Vec<usize> = (0..123).collect();
        let mut pager = Pager::new(items.len());

        assert_eq!(pager.slice(&items), &items[0..50]);
        pager.next();
        assert_eq!(pager.slice(&items), &items[50..100]);
        pager.next();
        assert_eq!(pager.slice(&items), &items[100..123]);
        // At the last page next is a no-op.
        pager.next();
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut pager = Pager::new(10);
        pager.prev();
        assert_eq!(pager.page, 1);
    }

    #[test]
    fn test_retotal_clamps_page() {
        let mut pager = Pager::new(200);
        pager.page = 4;
        pager.retotal(60);
        assert_eq!(pager.page, 2);
        pager.retotal(0);
        assert_eq!(pager.page, 1);
        assert_eq!(pager.window(), (0, 0));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        assert!(matches_filter("Antioqueñita", "anti"));
        assert!(matches_filter("Antioqueñita", "ANTI"));
        assert!(matches_filter("2024-05-20", "05-2"));
        assert!(!matches_filter("Paisita", "anti"));
        assert!(matches_filter("anything", ""));
    }
}
