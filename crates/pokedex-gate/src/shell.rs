//! HTML shell rendering with an embedded boot payload.
//!
//! # Design
//! - The shell is the built `index.html`, read once at startup.
//! - The payload is JSON inside `<script type="application/json">`; `</` is escaped
//!   so record data can never close the tag early.

use std::path::Path;
use std::sync::Arc;

use pokedex_api_models::BootPayload;
use tracing::warn;

use crate::error::{GateError, GateResult};

/// DOM id of the boot payload script element.
pub const BOOT_ELEMENT_ID: &str = "pokedex-boot";

const FALLBACK_TEMPLATE: &str = "<!doctype html><html><head><meta charset=\"utf-8\"><title>Pokemon Browser</title></head><body><div id=\"root\"></div></body></html>";

/// Cached HTML template.
#[derive(Clone, Debug)]
pub struct Shell {
    template: Arc<str>,
}

impl Shell {
    /// Load `index.html` from the assets directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read.
    pub fn load(assets_dir: &Path) -> GateResult<Self> {
        let path = assets_dir.join("index.html");
        match std::fs::read_to_string(&path) {
            Ok(template) => Ok(Self::from_template(template)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "index.html missing; serving bare shell");
                Ok(Self::from_template(FALLBACK_TEMPLATE))
            }
            Err(source) => Err(GateError::ShellRead { path, source }),
        }
    }

    /// Use an in-memory template.
    #[must_use]
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: Arc::from(template.into()),
        }
    }

    /// Render the shell with `payload` injected before `</head>`.
    #[must_use]
    pub fn render(&self, payload: &BootPayload) -> String {
        let json = serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
        let script = format!(
            "<script id=\"{BOOT_ELEMENT_ID}\" type=\"application/json\">{}</script>",
            escape_script(&json)
        );
        let template = &*self.template;
        let anchor = template.find("</head>").or_else(|| template.find("</body>"));
        match anchor {
            Some(index) => {
                let mut html = String::with_capacity(template.len() + script.len());
                html.push_str(&template[..index]);
                html.push_str(&script);
                html.push_str(&template[index..]);
                html
            }
            None => format!("{template}{script}"),
        }
    }
}

fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\u0021--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pokedex_api_models::{ClientSettings, InitialData, PokemonDetail};

    fn payload(name: &str) -> BootPayload {
        BootPayload {
            config: ClientSettings {
                api_base_url: "http://api".into(),
                secure_cookies: false,
            },
            initial: Some(InitialData::Detail(PokemonDetail {
                id: 1,
                name: name.into(),
                image: None,
                abilities: Vec::new(),
                moves: Vec::new(),
                forms: Vec::new(),
                types: None,
                stats: None,
            })),
        }
    }

    #[test]
    fn payload_lands_before_head_close() {
        let shell =
            Shell::from_template("<html><head><title>x</title></head><body></body></html>");
        let html = shell.render(&payload("bulbasaur"));
        let script_at = html.find("id=\"pokedex-boot\"").unwrap_or(usize::MAX);
        let head_close = html.find("</head>").unwrap_or(0);
        assert!(script_at < head_close);
    }

    #[test]
    fn script_breakout_is_escaped_and_still_decodes() -> Result<()> {
        let shell = Shell::from_template("<html><body></body></html>");
        let html = shell.render(&payload("</script><script>alert(1)"));
        assert_eq!(html.matches("</script>").count(), 1);

        let start = html.find("application/json\">").map(|i| i + 18).unwrap_or_default();
        let end = html.rfind("</script>").unwrap_or_default();
        let decoded: BootPayload = serde_json::from_str(&html[start..end])?;
        assert_eq!(decoded, payload("</script><script>alert(1)"));
        Ok(())
    }

    #[test]
    fn missing_index_uses_fallback_template() -> Result<()> {
        let shell = Shell::load(Path::new("/nonexistent/pokedex-assets"))?;
        let html = shell.render(&payload("ivysaur"));
        assert!(html.contains("<div id=\"root\"></div>"));
        Ok(())
    }
}
