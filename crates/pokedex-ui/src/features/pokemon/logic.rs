//! Pure list helpers: sorting of the loaded page and card/pagination presentation.

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use pokedex_api_models::PokemonListItem;

use crate::core::preferences::{SortBy, SortOrder};

/// Artwork shown when a sprite is missing or fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/54.png";

/// Placeholder cards rendered while a page loads.
pub const SKELETON_COUNT: usize = 20;

/// Sorted copy of the current page; the input is left untouched.
///
/// Names are compared with the root-locale collator at tertiary strength: accents
/// and case only break ties, lowercase first. The sort is stable.
#[must_use]
pub fn sort_items(items: &[PokemonListItem], by: SortBy, order: SortOrder) -> Vec<PokemonListItem> {
    let collator = match by {
        SortBy::Name => name_collator(),
        SortBy::Number => None,
    };
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| {
        let ordering = match by {
            SortBy::Name => compare_names(collator.as_ref(), &left.name, &right.name),
            SortBy::Number => left.id.cmp(&right.id),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn name_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(CollatorPreferences::default(), options).ok()
}

fn compare_names(collator: Option<&CollatorBorrowed<'static>>, left: &str, right: &str) -> Ordering {
    collator
        .map_or_else(
            || left.to_lowercase().cmp(&right.to_lowercase()),
            |collator| collator.compare(left, right),
        )
        .then_with(|| left.cmp(right))
}

/// `#001`-style dex number.
#[must_use]
pub fn format_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Species name with the first letter upper-cased.
#[must_use]
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Image for a card, falling back to the shared artwork.
#[must_use]
pub fn image_or_fallback(image: Option<&str>) -> &str {
    image
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(FALLBACK_IMAGE_URL)
}

/// Enabled state and label of the pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    /// `current / total`, or just the current page when the total is unknown.
    pub label: String,
    /// Jump to page 1.
    pub first: bool,
    /// One page back.
    pub previous: bool,
    /// One page forward.
    pub next: bool,
    /// Jump to the last page.
    pub last: bool,
}

/// Build the pagination view model for a 1-based `current` page.
#[must_use]
pub fn pagination_view(
    current: u32,
    total: Option<u32>,
    has_next: bool,
    has_previous: bool,
    enabled: bool,
) -> PaginationView {
    let label = total.map_or_else(
        || current.to_string(),
        |total| format!("{current} / {}", total.max(1)),
    );
    let on_last = total.is_none_or(|total| current >= total);
    PaginationView {
        label,
        first: enabled && current > 1,
        previous: enabled && has_previous,
        next: enabled && has_next,
        last: enabled && !on_last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> PokemonListItem {
        PokemonListItem {
            id,
            name: name.into(),
            image: None,
        }
    }

    fn names(items: &[PokemonListItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn name_sort_puts_lowercase_before_uppercase_on_ties() {
        let page = vec![item(3, "venusaur"), item(1, "Bulbasaur"), item(2, "bulbasaur")];
        let sorted = sort_items(&page, SortBy::Name, SortOrder::Asc);
        assert_eq!(names(&sorted), ["bulbasaur", "Bulbasaur", "venusaur"]);
        // Input untouched.
        assert_eq!(page[0].id, 3);
    }

    #[test]
    fn name_sort_collates_accented_letters_with_their_base() {
        let page = vec![
            item(41, "zubat"),
            item(900, "élan"),
            item(1, "bulbasaur"),
            item(2, "Bulbasaur"),
        ];
        let sorted = sort_items(&page, SortBy::Name, SortOrder::Asc);
        assert_eq!(names(&sorted), ["bulbasaur", "Bulbasaur", "élan", "zubat"]);

        let sorted = sort_items(&page, SortBy::Name, SortOrder::Desc);
        assert_eq!(names(&sorted), ["zubat", "élan", "Bulbasaur", "bulbasaur"]);
    }

    #[test]
    fn number_sort_descending() {
        let page = vec![item(4, "charmander"), item(25, "pikachu"), item(1, "bulbasaur")];
        let sorted = sort_items(&page, SortBy::Number, SortOrder::Desc);
        let ids: Vec<u32> = sorted.iter().map(|item| item.id).collect();
        assert_eq!(ids, [25, 4, 1]);
    }

    #[test]
    fn sorting_keeps_every_item() {
        let page = vec![item(1, "a"), item(2, "c"), item(3, "b")];
        let sorted = sort_items(&page, SortBy::Name, SortOrder::Desc);
        assert_eq!(names(&sorted), ["c", "b", "a"]);
        assert_eq!(sorted.len(), page.len());
    }

    #[test]
    fn card_text_helpers() {
        assert_eq!(format_number(1), "#001");
        assert_eq!(format_number(1025), "#1025");
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name(""), "");
        assert_eq!(image_or_fallback(None), FALLBACK_IMAGE_URL);
        assert_eq!(image_or_fallback(Some("http://img/1.png")), "http://img/1.png");
    }

    #[test]
    fn pagination_view_disables_edges() {
        let view = pagination_view(1, Some(5), true, false, true);
        assert_eq!(view.label, "1 / 5");
        assert!(!view.first && !view.previous && view.next && view.last);

        let view = pagination_view(5, Some(5), false, true, true);
        assert!(view.first && view.previous && !view.next && !view.last);

        let unknown = pagination_view(2, None, true, true, true);
        assert_eq!(unknown.label, "2");
        assert!(!unknown.last);

        let searching = pagination_view(1, Some(5), true, false, false);
        assert!(!searching.next && !searching.last);
    }
}
