//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Only the HTML shell reads these values; it is rendered on the server and never
//! hydrated, so they do not need to match the WASM build.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Analytics pixel id
    /// Example: 1234567890
    pub meta_pixel_id: Option<String>,

    /// Public origin of the site, used for the canonical link and structured data
    /// Example: https://rvland.dev
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            meta_pixel_id: get("META_PIXEL_ID"),
            site_url: get("SITE_URL").map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Check if the analytics pixel is configured
    pub fn has_meta_pixel(&self) -> bool {
        self.meta_pixel_id.is_some()
    }

    /// Check if a canonical site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Canonical URL of the landing page
    pub fn canonical_url(&self) -> Option<String> {
        self.site_url.as_ref().map(|url| format!("{url}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("META_PIXEL_ID", "1234567890"),
            ("SITE_URL", "https://rvland.dev"),
        ]));

        assert_eq!(config.meta_pixel_id, Some("1234567890".to_string()));
        assert_eq!(config.site_url, Some("https://rvland.dev".to_string()));
        assert!(config.has_meta_pixel());
        assert!(config.has_site_url());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config, Config::default());
        assert!(!config.has_meta_pixel());
        assert!(!config.has_site_url());
        assert!(config.canonical_url().is_none());
    }

    #[test]
    fn test_config_with_empty_string_values() {
        // Unlike a missing variable with a default, an empty one disables the feature
        let config = Config::from_lookup(lookup(&[("META_PIXEL_ID", ""), ("SITE_URL", "  ")]));

        assert!(config.meta_pixel_id.is_none());
        assert!(config.site_url.is_none());
    }

    #[test]
    fn test_canonical_url_normalises_trailing_slash() {
        let config = Config::from_lookup(lookup(&[("SITE_URL", "https://rvland.dev/")]));
        assert_eq!(config.site_url.as_deref(), Some("https://rvland.dev"));
        assert_eq!(
            config.canonical_url().as_deref(),
            Some("https://rvland.dev/")
        );
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_meta_pixel();
        let _ = config.has_site_url();
    }
}
