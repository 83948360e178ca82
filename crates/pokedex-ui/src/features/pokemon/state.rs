//! List state reconciler: one authoritative page offset shared by the URL, the
//! preference store and data fetching.
//!
//! # Design
//! - The page is stored 0-based; the URL carries it 1-based.
//! - Every page change records who caused it. The URL write reaction consumes the
//!   tag exactly once, so a page adopted from the URL is never written back.
//! - While a search is active the cursor is suspended: offset 0, no `page` in the URL,
//!   navigation requests ignored.
//! - Page info (`has_next`/`has_previous`) is cleared on every move and refilled from
//!   the next response, so repeated clicks cannot run past the server's bounds.

use pokedex_api_models::{ListQuery, PAGE_SIZE};

/// Who caused the most recent page change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOrigin {
    /// Pagination controls or search.
    User,
    /// Browser navigation changed the `page` parameter.
    Url,
}

/// Pagination control requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    /// Jump to page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// Jump to the last page once the total is known.
    Last,
}

/// What the URL write reaction should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlWrite {
    /// Leave the URL alone.
    Skip,
    /// Drop the `page` parameter.
    StripPage,
    /// Write `?page=n` (1-based).
    SetPage(u32),
}

/// Pagination cursor for the list view.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ListCursor {
    page: u32,
    origin: Option<UpdateOrigin>,
    searching: bool,
    has_next: bool,
    has_previous: bool,
    total_count: Option<u64>,
}

impl ListCursor {
    /// Current page, 0-based.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Current page, 1-based, as shown to the user.
    #[must_use]
    pub const fn display_page(&self) -> u32 {
        self.page + 1
    }

    /// Whether pagination controls accept input.
    #[must_use]
    pub const fn controls_enabled(&self) -> bool {
        !self.searching
    }

    /// Server said a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Server said a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Total number of pages once the unfiltered count is known.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_count.map(total_pages)
    }

    /// Offset the data layer should request.
    #[must_use]
    pub const fn effective_offset(&self) -> u32 {
        if self.searching {
            0
        } else {
            self.page.saturating_mul(PAGE_SIZE)
        }
    }

    /// Query for the current state.
    #[must_use]
    pub fn query(&self, search: Option<String>) -> ListQuery {
        ListQuery::page(self.effective_offset(), search)
    }

    /// Adopt a 1-based page read from the URL.
    ///
    /// Returns `true` when the cursor changed. Ignored while searching. A page past
    /// the known end is clamped and tagged as a user change so the URL is rewritten.
    pub fn adopt_url(&mut self, url_page: u32) -> bool {
        if self.searching {
            return false;
        }
        let requested = url_page.saturating_sub(1);
        let page = self.clamp(requested);
        if page != requested {
            self.move_to(page, UpdateOrigin::User);
            return true;
        }
        if page == self.page {
            return false;
        }
        self.move_to(page, UpdateOrigin::Url);
        true
    }

    /// React to a settled search term.
    ///
    /// Returns `true` when the cursor changed and the URL should be rewritten.
    pub fn on_search_changed(&mut self, term: &str) -> bool {
        let active = !term.trim().is_empty();
        if active == self.searching {
            return false;
        }
        self.searching = active;
        self.move_to(0, UpdateOrigin::User);
        true
    }

    /// Record page info from the list response for the current query.
    pub const fn apply_page_info(&mut self, has_next: bool, has_previous: bool) {
        self.has_next = has_next;
        self.has_previous = has_previous;
    }

    /// Record the unfiltered total; clamps the page into range.
    ///
    /// Returns `true` when clamping moved the page.
    pub fn set_total_count(&mut self, count: u64) -> bool {
        self.total_count = Some(count);
        if self.searching {
            return false;
        }
        let clamped = self.clamp(self.page);
        if clamped == self.page {
            return false;
        }
        self.move_to(clamped, UpdateOrigin::User);
        true
    }

    /// Apply a pagination control request.
    ///
    /// Returns `true` when the page changed.
    pub fn request(&mut self, request: PageRequest) -> bool {
        if self.searching {
            return false;
        }
        let target = match request {
            PageRequest::First => Some(0),
            PageRequest::Previous => (self.has_previous && self.page > 0).then(|| self.page - 1),
            PageRequest::Next => self.has_next.then(|| self.clamp(self.page.saturating_add(1))),
            PageRequest::Last => self.total_pages().filter(|pages| *pages > 0).map(|p| p - 1),
        };
        match target {
            Some(page) if page != self.page => {
                self.move_to(page, UpdateOrigin::User);
                true
            }
            _ => false,
        }
    }

    /// Consume the pending origin tag and decide the URL write.
    pub const fn url_write(&mut self) -> UrlWrite {
        match self.origin.take() {
            None | Some(UpdateOrigin::Url) => UrlWrite::Skip,
            Some(UpdateOrigin::User) if self.searching || self.page == 0 => UrlWrite::StripPage,
            Some(UpdateOrigin::User) => UrlWrite::SetPage(self.page + 1),
        }
    }

    fn clamp(&self, page: u32) -> u32 {
        match self.total_pages() {
            Some(pages) if pages > 0 => page.min(pages - 1),
            _ => page,
        }
    }

    const fn move_to(&mut self, page: u32, origin: UpdateOrigin) {
        self.page = page;
        self.origin = Some(origin);
        self.has_next = false;
        self.has_previous = false;
    }
}

/// `ceil(count / PAGE_SIZE)` saturated into `u32`.
#[must_use]
pub fn total_pages(count: u64) -> u32 {
    let pages = count.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ListCursor {
        const fn pending_origin(&self) -> Option<UpdateOrigin> {
            self.origin
        }

        const fn is_searching(&self) -> bool {
            self.searching
        }
    }

    /// Simulate a server that holds `count` items and answer for the cursor's page.
    fn respond(cursor: &mut ListCursor, count: u64) {
        let pages = total_pages(count);
        let page = cursor.page();
        cursor.apply_page_info(page + 1 < pages, page > 0);
    }

    #[test]
    fn offset_follows_page_until_search_starts() {
        let mut cursor = ListCursor::default();
        assert!(cursor.adopt_url(3));
        assert_eq!(cursor.effective_offset(), 40);

        assert!(cursor.on_search_changed("char"));
        assert_eq!(cursor.effective_offset(), 0);
        assert_eq!(cursor.page(), 0);
        assert_eq!(cursor.url_write(), UrlWrite::StripPage);
        assert_eq!(
            cursor.query(Some("char".into())),
            ListQuery::page(0, Some("char".into()))
        );
    }

    #[test]
    fn url_adoption_suppresses_exactly_one_write() {
        let mut cursor = ListCursor::default();
        assert!(cursor.adopt_url(4));
        assert_eq!(cursor.pending_origin(), Some(UpdateOrigin::Url));
        assert_eq!(cursor.url_write(), UrlWrite::Skip);
        assert_eq!(cursor.pending_origin(), None);

        respond(&mut cursor, 200);
        assert!(cursor.request(PageRequest::Next));
        assert_eq!(cursor.url_write(), UrlWrite::SetPage(5));
        assert_eq!(cursor.url_write(), UrlWrite::Skip);
    }

    #[test]
    fn adopting_the_current_page_is_a_no_op() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.adopt_url(1));
        assert_eq!(cursor.pending_origin(), None);
    }

    #[test]
    fn next_advances_offset_by_one_page_only_when_allowed() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.request(PageRequest::Next));

        cursor.apply_page_info(true, false);
        assert!(cursor.request(PageRequest::Next));
        assert_eq!(cursor.effective_offset(), 20);
        // Page info is unknown until the next response lands.
        assert!(!cursor.request(PageRequest::Next));
    }

    #[test]
    fn navigation_is_ignored_while_searching() {
        let mut cursor = ListCursor::default();
        cursor.set_total_count(100);
        cursor.on_search_changed("bulba");
        cursor.apply_page_info(true, false);
        assert!(!cursor.request(PageRequest::Next));
        assert!(!cursor.request(PageRequest::Last));
        assert!(!cursor.adopt_url(3));
        assert!(!cursor.controls_enabled());
    }

    #[test]
    fn clearing_search_returns_to_canonical_first_page() {
        let mut cursor = ListCursor::default();
        cursor.on_search_changed("x");
        cursor.url_write();
        assert!(cursor.on_search_changed(""));
        assert!(!cursor.is_searching());
        assert_eq!(cursor.url_write(), UrlWrite::StripPage);
    }

    #[test]
    fn last_requires_known_total() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.request(PageRequest::Last));
        cursor.set_total_count(45);
        assert_eq!(cursor.total_pages(), Some(3));
        assert!(cursor.request(PageRequest::Last));
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.url_write(), UrlWrite::SetPage(3));
        assert!(cursor.request(PageRequest::First));
        assert_eq!(cursor.url_write(), UrlWrite::StripPage);
    }

    #[test]
    fn out_of_range_url_page_is_clamped_once_total_is_known() {
        let mut cursor = ListCursor::default();
        cursor.adopt_url(50);
        cursor.url_write();
        assert!(cursor.set_total_count(45));
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.url_write(), UrlWrite::SetPage(3));
    }

    #[test]
    fn url_page_past_the_known_end_is_rewritten() {
        let mut cursor = ListCursor::default();
        cursor.set_total_count(45);
        assert!(cursor.adopt_url(50));
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.pending_origin(), Some(UpdateOrigin::User));
        assert_eq!(cursor.url_write(), UrlWrite::SetPage(3));

        // Already showing the last page: the URL still needs canonicalizing.
        assert!(cursor.adopt_url(50));
        assert_eq!(cursor.page(), 2);
        assert_eq!(cursor.url_write(), UrlWrite::SetPage(3));

        assert!(!cursor.adopt_url(3));
        assert_eq!(cursor.url_write(), UrlWrite::Skip);
    }

    #[test]
    fn whitespace_only_search_keeps_pagination() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.on_search_changed("   "));
        assert!(!cursor.is_searching());
        assert!(cursor.on_search_changed(" mr "));
        assert!(cursor.is_searching());
    }

    #[test]
    fn bounded_walks_stay_within_page_range() {
        let count = 101;
        let last = total_pages(count) - 1;
        let mut cursor = ListCursor::default();
        cursor.set_total_count(count);
        let script = [
            PageRequest::Previous,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Previous,
            PageRequest::Next,
            PageRequest::Next,
            PageRequest::Previous,
            PageRequest::Previous,
            PageRequest::Previous,
            PageRequest::Previous,
            PageRequest::Previous,
            PageRequest::Previous,
        ];
        for step in script {
            respond(&mut cursor, count);
            cursor.request(step);
            assert!(cursor.page() <= last, "{step:?} overshot to {}", cursor.page());
        }
        assert_eq!(cursor.page(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(20), 1);
        assert_eq!(total_pages(21), 2);
        assert_eq!(total_pages(1_025), 52);
    }
}
