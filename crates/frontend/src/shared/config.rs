//! Browser-side configuration, read from the page query string.
//!
//! `?api_base=http://localhost:8765&tab_cache=cache_for_view&log_level=info`

use leptos::prelude::use_context;
use serde::Deserialize;
use web_sys::window;

/// What an entity view does when a previously visited tab is selected again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabCachePolicy {
    /// Fetch again on every visit; the pipeline's data may have changed
    #[default]
    AlwaysRefetch,
    /// Keep the first successful payload of each tab until the view unmounts
    CacheForView,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Prefix for every API path; empty means same origin as the page
    pub api_base: String,
    pub tab_cache: TabCachePolicy,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            tab_cache: TabCachePolicy::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Decode a query string, with or without the leading `?`.
    /// Malformed input yields the defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(query).unwrap_or_else(|err| {
            log::warn!("ignoring malformed query config {:?}: {}", query, err);
            Self::default()
        })
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Config provided at the app root, or the defaults outside of it
    pub fn current() -> Self {
        use_context::<BrowserConfig>().unwrap_or_default()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let config = BrowserConfig::from_query("");
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.tab_cache, TabCachePolicy::AlwaysRefetch);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_query_overrides() {
        let config = BrowserConfig::from_query(
            "?api_base=http%3A%2F%2Flocalhost%3A8765&tab_cache=cache_for_view&log_level=warn",
        );
        assert_eq!(config.api_base, "http://localhost:8765");
        assert_eq!(config.tab_cache, TabCachePolicy::CacheForView);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_partial_query_keeps_other_defaults() {
        let config = BrowserConfig::from_query("tab_cache=cache_for_view&unrelated=1");
        assert_eq!(config.api_base, "");
        assert_eq!(config.tab_cache, TabCachePolicy::CacheForView);
    }

    #[test]
    fn test_bad_policy_falls_back() {
        let config = BrowserConfig::from_query("tab_cache=sometimes");
        assert_eq!(config, BrowserConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let config = BrowserConfig::from_query("log_level=loud");
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
