use super::*;

#[test]
fn api_root_trims_trailing_slashes() {
    let api = ApiConfig::new("http://localhost:8080/");
    assert_eq!(api.root(), "http://localhost:8080");
    assert_eq!(api.url_for("/wishlists"), "http://localhost:8080/wishlists");
}

#[test]
fn url_for_handles_relative_and_absolute_paths() {
    let api = ApiConfig::new("https://shop.example");
    assert_eq!(api.url_for("wishlists/3"), "https://shop.example/wishlists/3");
    assert_eq!(api.url_for("http://other.example/wishlists"), "http://other.example/wishlists");
}

#[test]
fn empty_root_keeps_paths_relative() {
    let api = ApiConfig::default();
    assert_eq!(api.url_for("/wishlists"), "/wishlists");
}

#[test]
fn resolve_uses_origin_by_default() {
    let config = AppConfig::resolve(Some("http://127.0.0.1:5000"), None, None);
    assert_eq!(config.api.root(), "http://127.0.0.1:5000");
    assert_eq!(config.log_level, Level::Info);
}

#[test]
fn resolve_prefers_meta_overrides() {
    let config = AppConfig::resolve(
        Some("http://127.0.0.1:5000"),
        Some("https://api.example/v1/"),
        Some("debug"),
    );
    assert_eq!(config.api.root(), "https://api.example/v1");
    assert_eq!(config.log_level, Level::Debug);
}

#[test]
fn resolve_ignores_blank_root_and_bad_level() {
    let config = AppConfig::resolve(Some("http://host:1"), Some("   "), Some("loud"));
    assert_eq!(config.api.root(), "http://host:1");
    assert_eq!(config.log_level, Level::Info);
}

#[cfg(not(feature = "csr"))]
#[test]
fn detect_outside_browser_returns_defaults() {
    assert_eq!(AppConfig::detect(), AppConfig::default());
}
