//! App-wide yewdux store slices.
//!
//! # Design
//! - One store for preferences, the list cursor and the query cache so reducers
//!   that touch several of them (logout) stay atomic.
//! - Preferences are in memory only; a reload starts from the defaults.

use pokedex_api_models::{ClientSettings, ListQuery};
use yewdux::store::Store;

use crate::core::cache::QueryCache;
use crate::core::preferences::UiPreferences;
use crate::features::auth::state::AuthSlice;
use crate::features::pokemon::state::ListCursor;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Search and sort preferences.
    pub prefs: UiPreferences,
    /// Login form state.
    pub auth: AuthSlice,
    /// Pagination reconciler for the list view.
    pub cursor: ListCursor,
    /// Keyed query cache.
    pub cache: QueryCache,
    /// Settings handed over by the gate.
    pub settings: ClientSettings,
}

impl AppStore {
    /// Query the list view currently depends on.
    #[must_use]
    pub fn current_query(&self) -> ListQuery {
        self.cursor.query(self.prefs.search_filter())
    }

    /// Failure recorded for the current list query, if any.
    #[must_use]
    pub fn list_error(&self) -> Option<String> {
        self.cache.lists.error(&self.current_query()).map(str::to_owned)
    }

    /// Failure recorded for detail `id`, if any.
    #[must_use]
    pub fn detail_error(&self, id: u32) -> Option<String> {
        self.cache.details.error(&id).map(str::to_owned)
    }

    /// Adopt the 1-based page from the URL and return the query to fetch.
    pub fn enter_list(&mut self, url_page: u32) -> ListQuery {
        if self.cursor.adopt_url(url_page) {
            self.sync_cursor();
        }
        self.current_query()
    }

    /// Feed cached page info and total count into the cursor.
    ///
    /// Returns `true` when the total clamped the page.
    pub fn sync_cursor(&mut self) -> bool {
        if let Some(list) = self.cache.lists.get(&self.current_query()) {
            self.cursor.apply_page_info(list.has_next(), list.has_previous());
        }
        match self.cache.counts.get(&ListQuery::count_probe()).copied() {
            Some(count) => self.cursor.set_total_count(count),
            None => false,
        }
    }

    /// Session teardown: drop cached data, orphan fetches and reset preferences.
    pub fn clear_session(&mut self) {
        self.cache.invalidate_all();
        self.prefs.reset();
        self.cursor = ListCursor::default();
        self.auth = AuthSlice::default();
    }
}
