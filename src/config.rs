//! Page-level configuration for the API root and log level.
//!
//! DESIGN
//! ======
//! The API root is derived from the page origin so the client works from any
//! host or port. A `<meta name="wishlist:api-root">` tag can point it
//! elsewhere; `<meta name="wishlist:log-level">` picks the console log level.
//! Outside the browser both fall back to defaults and paths stay relative.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

pub const API_ROOT_META: &str = "wishlist:api-root";
pub const LOG_LEVEL_META: &str = "wishlist:log-level";

/// Where API paths are resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    root: String,
}

impl ApiConfig {
    pub fn new(root: &str) -> Self {
        Self { root: root.trim().trim_end_matches('/').to_owned() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolve `path` against the root. Absolute URLs pass through.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.root)
        } else {
            format!("{}/{path}", self.root)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api: ApiConfig::default(), log_level: Level::Info }
    }
}

impl AppConfig {
    /// Build config from the page origin and optional meta overrides.
    pub fn resolve(
        origin: Option<&str>,
        api_root_meta: Option<&str>,
        log_level_meta: Option<&str>,
    ) -> Self {
        let root = api_root_meta
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .or(origin)
            .unwrap_or_default();
        let log_level = log_level_meta
            .and_then(parse_log_level)
            .unwrap_or(Level::Info);
        Self { api: ApiConfig::new(root), log_level }
    }

    /// Read config from the current document.
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let origin = window.location().origin().ok();
            let document = window.document();
            let meta = |name: &str| {
                document
                    .as_ref()
                    .and_then(|doc| {
                        doc.query_selector(&format!("meta[name=\"{name}\"]"))
                            .ok()
                            .flatten()
                    })
                    .and_then(|el| el.get_attribute("content"))
            };
            let api_root = meta(API_ROOT_META);
            let log_level = meta(LOG_LEVEL_META);
            Self::resolve(origin.as_deref(), api_root.as_deref(), log_level.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    value.trim().parse().ok()
}
