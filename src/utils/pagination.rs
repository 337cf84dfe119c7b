// ============================================================================
// PAGINATION - Pager over list results (pure, no DOM)
// ============================================================================
// Pages are one-based everywhere in the UI. The backend counts from zero,
// `PageRequest` does the translation.
// ============================================================================

use serde::{Deserialize, Serialize};

/// How a list view gets its pages from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagingMode {
    /// Fetch up to `fetch_limit` items once and slice pages locally
    ClientSliced { fetch_limit: usize },
    /// Every page is its own backend request; the returned batch is the page
    ServerPaged,
}

/// Query parameters for a backend list endpoint (`?page=&size=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PagingMode {
    /// Backend query for the given one-based UI page
    pub fn request(&self, page: usize, page_size: usize) -> PageRequest {
        match self {
            Self::ClientSliced { fetch_limit } => PageRequest {
                page: 0,
                size: *fetch_limit,
            },
            Self::ServerPaged => PageRequest {
                page: page.max(1) - 1,
                size: page_size,
            },
        }
    }

    /// Whether moving to another page needs a new request
    pub fn refetch_on_page_change(&self) -> bool {
        matches!(self, Self::ServerPaged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    mode: PagingMode,
    page_size: usize,
    current: usize,
    loaded: usize,
}

impl Pager {
    pub fn new(mode: PagingMode, page_size: usize) -> Self {
        Self {
            mode,
            page_size: page_size.max(1),
            current: 1,
            loaded: 0,
        }
    }

    /// Client-sliced pager over an already loaded collection
    pub fn client(page_size: usize, total_items: usize) -> Self {
        let mut pager = Self::new(PagingMode::ClientSliced { fetch_limit: total_items }, page_size);
        pager.loaded = total_items;
        pager
    }

    pub fn mode(&self) -> PagingMode {
        self.mode
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Records how many items the last response held. In client mode that is
    /// the whole collection, and the current page is clamped into range.
    pub fn with_loaded(mut self, count: usize) -> Self {
        self.loaded = count;
        if let Some(total) = self.total_pages() {
            self.current = self.current.clamp(1, total.max(1));
        }
        self
    }

    /// `ceil(count / page_size)` in client mode, unknown when server paged
    pub fn total_pages(&self) -> Option<usize> {
        match self.mode {
            PagingMode::ClientSliced { .. } => Some(self.loaded.div_ceil(self.page_size)),
            PagingMode::ServerPaged => None,
        }
    }

    /// A server page past the last full batch came back empty
    pub fn is_past_end(&self) -> bool {
        matches!(self.mode, PagingMode::ServerPaged) && self.loaded == 0 && self.current > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        match self.mode {
            PagingMode::ClientSliced { .. } => self.current < self.total_pages().unwrap_or(0),
            // A full batch means the backend may hold more
            PagingMode::ServerPaged => self.loaded == self.page_size,
        }
    }

    /// Next page, or `self` unchanged at the last page
    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                current: self.current + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Previous page, or `self` unchanged at the first page
    pub fn previous(self) -> Self {
        if self.has_previous() {
            Self {
                current: self.current - 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn request(&self) -> PageRequest {
        self.mode.request(self.current, self.page_size)
    }

    /// Items to show on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.mode {
            PagingMode::ClientSliced { .. } => {
                let start = ((self.current - 1) * self.page_size).min(items.len());
                let end = (self.current * self.page_size).min(items.len());
                &items[start..end]
            }
            PagingMode::ServerPaged => &items[..items.len().min(self.page_size)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn thirteen_items_in_pages_of_ten() {
        let items: Vec<u32> = (1..=13).collect();
        let pager = Pager::client(10, items.len());

        assert_eq!(pager.total_pages(), Some(2));
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.slice(&items), &items[0..10]);
        assert!(!pager.has_previous());
        assert!(pager.has_next());

        let second = pager.next();
        assert_eq!(second.current_page(), 2);
        assert_eq!(second.slice(&items), &[11, 12, 13]);
        assert!(!second.has_next());

        // Next at the boundary is a no-op
        assert_eq!(second.next(), second);
    }

    #[test]
    fn previous_at_first_page_is_noop() {
        let pager = Pager::client(6, 20);
        assert_eq!(pager.previous(), pager);
        assert_eq!(pager.next().previous().current_page(), 1);
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(13, 6, 3)]
    fn total_pages_is_ceiling(#[case] count: usize, #[case] size: usize, #[case] pages: usize) {
        assert_eq!(Pager::client(size, count).total_pages(), Some(pages));
    }

    #[test]
    fn empty_collection_has_no_pages_and_empty_slice() {
        let items: Vec<u8> = Vec::new();
        let pager = Pager::client(10, 0);
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.has_next());
        assert!(!pager.has_previous());
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn shrinking_collection_clamps_current_page() {
        let pager = Pager::client(10, 35).next().next().next();
        assert_eq!(pager.current_page(), 4);
        let shrunk = pager.with_loaded(12);
        assert_eq!(shrunk.current_page(), 2);
    }

    #[test]
    fn client_mode_requests_everything_once() {
        let pager = Pager::new(PagingMode::ClientSliced { fetch_limit: 100 }, 10).with_loaded(42);
        assert_eq!(pager.request(), PageRequest { page: 0, size: 100 });
        assert_eq!(pager.next().request(), PageRequest { page: 0, size: 100 });
        assert!(!pager.mode().refetch_on_page_change());
    }

    #[test]
    fn server_mode_translates_to_zero_based_pages() {
        let pager = Pager::new(PagingMode::ServerPaged, 6).with_loaded(6);
        assert_eq!(pager.request(), PageRequest { page: 0, size: 6 });
        assert_eq!(pager.total_pages(), None);
        assert!(pager.has_next());

        let second = pager.next();
        assert_eq!(second.request(), PageRequest { page: 1, size: 6 });
        assert!(second.mode().refetch_on_page_change());
    }

    #[test]
    fn server_mode_partial_batch_is_last_page() {
        let batch = vec!['a', 'b', 'c'];
        let pager = Pager::new(PagingMode::ServerPaged, 6).with_loaded(6).next();
        assert_eq!(pager.current_page(), 2);
        let pager = pager.with_loaded(batch.len());
        assert!(!pager.has_next());
        assert!(pager.has_previous());
        assert_eq!(pager.slice(&batch), &batch[..]);
    }

    #[test]
    fn server_mode_empty_page_after_exact_multiple_can_go_back() {
        let items: Vec<u8> = Vec::new();
        let pager = Pager::new(PagingMode::ServerPaged, 6).with_loaded(6).next().with_loaded(0);

        assert_eq!(pager.current_page(), 2);
        assert!(pager.is_past_end());
        assert!(pager.slice(&items).is_empty());
        assert!(!pager.has_next());
        assert!(pager.has_previous());
        assert_eq!(pager.previous().current_page(), 1);
        assert!(!Pager::new(PagingMode::ServerPaged, 6).with_loaded(0).is_past_end());
    }
}
