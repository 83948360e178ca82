//! Upstream endpoint paths and in-app route builders.
use pokedex_api_models::ListQuery;

/// Upstream path for a list query.
#[must_use]
pub fn list_path(query: &ListQuery) -> String {
    let mut path = format!("/pokemons?offset={}&limit={}", query.offset, query.limit);
    if let Some(term) = query.search.as_deref().filter(|term| !term.is_empty()) {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(term));
    }
    path
}

/// Upstream path for a single record.
#[must_use]
pub fn detail_path(id: u32) -> String {
    format!("/pokemons/{id}")
}

/// Parse a 1-based `page` query value; malformed or `< 1` reads as page 1.
#[must_use]
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// 1-based page carried by a raw query string (with or without the leading `?`).
#[must_use]
pub fn page_from_query(query: &str) -> u32 {
    let raw = query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find_map(|(key, value)| (key == "page").then_some(value));
    parse_page_param(raw)
}

/// In-app list route for a 1-based page; page 1 is canonical without a parameter.
#[must_use]
pub fn list_route(page: u32) -> String {
    if page <= 1 {
        "/pokemon".to_string()
    } else {
        format!("/pokemon?page={page}")
    }
}

/// In-app detail route that remembers the list page it was opened from.
#[must_use]
pub fn detail_route(id: u32, page: u32) -> String {
    format!("/pokemon/{id}?page={}", page.max(1))
}
