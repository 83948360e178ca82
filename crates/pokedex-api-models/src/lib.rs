#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Pokedex catalog.
//!
//! These types mirror the upstream REST contract (`/auth/login`, `/pokemons`,
//! `/pokemons/{id}`) and the boot payload the gate server embeds into the HTML
//! shell. Both the gate server and the browser UI decode through them so the wire
//! shape stays a single source of truth.
use serde::{Deserialize, Serialize};

/// Fixed page size used by the list view.
pub const PAGE_SIZE: u32 = 20;

/// Credentials submitted to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Authenticated account summary.
    #[serde(default)]
    pub user: User,
}

/// Account summary returned alongside a login token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// Upstream account identifier when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Account name.
    pub username: String,
}

/// Summary row rendered in the card grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonListItem {
    /// National dex number.
    pub id: u32,
    /// Lower-case species name.
    pub name: String,
    /// Artwork URL; `None` when the upstream has no sprite.
    pub image: Option<String>,
}

/// Paginated list envelope for `GET /pokemons`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonListResponse {
    /// Total number of matching entries across all pages.
    pub count: u64,
    /// Link to the next page, `None` on the last page.
    pub next: Option<String>,
    /// Link to the previous page, `None` on the first page.
    pub previous: Option<String>,
    /// Entries on this page.
    pub results: Vec<PokemonListItem>,
}

impl PokemonListResponse {
    /// Whether the server reported a following page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether the server reported a preceding page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Ability entry on the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonAbility {
    /// Ability name.
    pub name: String,
    /// Whether the ability is a hidden ability.
    #[serde(default)]
    pub is_hidden: bool,
}

/// Named reference used for moves, forms and types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
}

/// Base stat entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonStat {
    /// Stat name (`hp`, `attack`, ...).
    pub name: String,
    /// Base value.
    pub value: u32,
}

/// Full payload for `GET /pokemons/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonDetail {
    /// National dex number.
    pub id: u32,
    /// Lower-case species name.
    pub name: String,
    /// Artwork URL.
    pub image: Option<String>,
    /// Abilities, hidden ones flagged.
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    /// Learnable moves.
    #[serde(default)]
    pub moves: Vec<NamedResource>,
    /// Alternate forms.
    #[serde(default)]
    pub forms: Vec<NamedResource>,
    /// Elemental types when the upstream supplies them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<NamedResource>>,
    /// Base stats when the upstream supplies them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<PokemonStat>>,
}

/// Error envelope emitted by the upstream API and by the gate server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// HTTP status echoed in the body.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Parameters for a list query. Doubles as the cache key for list results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListQuery {
    /// Items to skip.
    pub offset: u32,
    /// Page size.
    pub limit: u32,
    /// Server-side filter; `None` when no search is active.
    pub search: Option<String>,
}

impl ListQuery {
    /// Query for the page starting at `offset` with the fixed page size.
    #[must_use]
    pub fn page(offset: u32, search: Option<String>) -> Self {
        Self {
            offset,
            limit: PAGE_SIZE,
            search: search.filter(|term| !term.is_empty()),
        }
    }

    /// Minimal query used only to learn the total count.
    #[must_use]
    pub const fn count_probe() -> Self {
        Self {
            offset: 0,
            limit: 1,
            search: None,
        }
    }
}

/// Browser-facing settings the gate server hands to the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL the browser uses for upstream calls.
    pub api_base_url: String,
    /// Whether the session cookie must carry the `Secure` attribute.
    pub secure_cookies: bool,
}

/// Data prefetched during server render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum InitialData {
    /// First page of the unfiltered list.
    List(PokemonListResponse),
    /// Detail record for the requested id.
    Detail(PokemonDetail),
}

/// JSON document embedded in the HTML shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootPayload {
    /// Client settings.
    pub config: ClientSettings,
    /// Prefetched data, absent when there is no session or the prefetch failed.
    #[serde(default)]
    pub initial: Option<InitialData>,
}
