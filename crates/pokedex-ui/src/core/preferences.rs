//! Tab-scoped UI preferences: search term and sort criteria.
//!
//! # Design
//! - Sort field and direction are enums so every combination is valid.
//! - Mutation only through the three setters.

/// Field the current page is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Species name.
    Name,
    /// National dex number.
    #[default]
    Number,
}

impl SortBy {
    /// Radio value and label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Number => "Number",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// Search and sort preferences shared by the list view components.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UiPreferences {
    search_term: String,
    sort_by: SortBy,
    sort_order: SortOrder,
}

impl UiPreferences {
    /// Search term exactly as typed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Trimmed search term as a server filter, `None` when blank.
    #[must_use]
    pub fn search_filter(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_string())
    }

    /// Current sort field.
    #[must_use]
    pub const fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Current sort direction.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replace both sort criteria at once.
    pub const fn set_sorting(&mut self, by: SortBy, order: SortOrder) {
        self.sort_by = by;
        self.sort_order = order;
    }

    /// Back to `("", Number, Asc)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whether a search term arriving from the store should replace the input's text.
///
/// A term the input emitted itself echoes back unchanged and is ignored, so typing
/// is never overwritten; other changes (a logout reset) replace the local text.
#[must_use]
pub fn should_replace_input(store_term: &str, last_emitted: &str, local: &str) -> bool {
    store_term != last_emitted && store_term != local
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_number_ascending_without_search() {
        let prefs = UiPreferences::default();
        assert_eq!(prefs.search_term(), "");
        assert_eq!(prefs.search_filter(), None);
        assert_eq!(prefs.sort_by(), SortBy::Number);
        assert_eq!(prefs.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn reset_restores_defaults_after_changes() {
        let mut prefs = UiPreferences::default();
        prefs.set_sorting(SortBy::Name, SortOrder::Asc);
        prefs.set_sorting(SortBy::Number, SortOrder::Desc);
        prefs.set_search_term("pika");
        assert_eq!(prefs.search_filter().as_deref(), Some("pika"));

        prefs.reset();
        assert_eq!(prefs, UiPreferences::default());
    }

    #[test]
    fn typed_spaces_are_kept_but_not_sent() {
        let mut prefs = UiPreferences::default();
        prefs.set_search_term("mr ");
        assert_eq!(prefs.search_term(), "mr ");
        assert_eq!(prefs.search_filter().as_deref(), Some("mr"));

        prefs.set_search_term("   ");
        assert_eq!(prefs.search_filter(), None);
    }

    #[test]
    fn echoed_search_term_leaves_the_input_alone() {
        // Emitted "mr " and kept typing before the store echoed it back.
        assert!(!should_replace_input("mr ", "mr ", "mr m"));
        assert!(!should_replace_input("mr ", "mr ", "mr "));
        // Logout resets the store under the input.
        assert!(should_replace_input("", "mr ", "mr m"));
    }
}
