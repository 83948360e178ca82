//! Boot payload embedded by the gate in the HTML shell.
//!
//! # Design
//! - Parsing is pure; the DOM lookup of the script element happens in `app`.
//! - A missing or malformed payload is not fatal: the client falls back to the
//!   default settings and fetches everything itself.

use pokedex_api_models::BootPayload;

/// Element id of the `<script type="application/json">` carrying the payload.
pub const BOOT_ELEMENT_ID: &str = "pokedex-boot";

/// Decode the payload text, `None` when absent or malformed.
#[must_use]
pub fn parse_boot(raw: &str) -> Option<BootPayload> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_api_models::InitialData;

    #[test]
    fn parses_payload_with_initial_list() {
        let raw = r#"{
            "config": {"api_base_url": "http://api.local", "secure_cookies": false},
            "initial": {"kind": "list", "data": {"count": 1, "next": null, "previous": null,
                "results": [{"id": 1, "name": "bulbasaur", "image": null}]}}
        }"#;
        let Some(payload) = parse_boot(raw) else {
            panic!("payload should parse");
        };
        assert_eq!(payload.config.api_base_url, "http://api.local");
        assert!(matches!(payload.initial, Some(InitialData::List(ref list)) if list.count == 1));
    }

    #[test]
    fn blank_or_broken_payload_is_ignored() {
        assert!(parse_boot("   ").is_none());
        assert!(parse_boot("{not json").is_none());
    }
}
