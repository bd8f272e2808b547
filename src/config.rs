//! Site configuration module.
//!
//! Handles loading and validating `hub.toml`. Unlike content data — which
//! lives in the registry tables and never changes at runtime — config covers
//! deployment-level knobs: the canonical host, sitemap limits, and the
//! City × Role indexing policy.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://example.com"    # Canonical host for absolute URLs
//!
//! # Whether `build` also writes pages for City × Role pairs outside the
//! # high-value set. Such pages are renderable on request either way, carry
//! # a noindex flag, and never appear in the sitemap.
//! render_unindexed_combinations = true
//!
//! [sitemap]
//! max_urls_per_file = 1000            # Per-urlset budget before chunking
//! lastmod = "2026-08-01"              # Fixed lastmod date (keeps output deterministic)
//!
//! [processing]
//! max_processes = 4                   # Max parallel render workers (omit for auto)
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `hub.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical host, no trailing slash. Every absolute URL in metadata
    /// and sitemaps is built from this.
    pub base_url: String,
    /// Emit pages for City × Role pairs outside the high-value set.
    /// They carry `noindex` and are never listed in the sitemap.
    pub render_unindexed_combinations: bool,
    /// Sitemap emission settings.
    pub sitemap: SitemapConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            render_unindexed_combinations: true,
            sitemap: SitemapConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.example.com".to_string()
}

impl SiteConfig {
    /// Load from a TOML file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with a slash".into(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.sitemap.max_urls_per_file == 0 {
            return Err(ConfigError::Validation(
                "sitemap.max_urls_per_file must be at least 1".into(),
            ));
        }
        if self.sitemap.max_urls_per_file > 50_000 {
            return Err(ConfigError::Validation(
                "sitemap.max_urls_per_file must not exceed the protocol limit of 50000".into(),
            ));
        }
        Ok(())
    }
}

/// Sitemap emission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Per-urlset URL budget. Categories exceeding it are split into
    /// numbered files (`sitemap-city-roles-2.xml`, …). The sitemap
    /// protocol caps this at 50,000.
    pub max_urls_per_file: usize,
    /// Fixed lastmod date (ISO `YYYY-MM-DD`) stamped on every URL.
    /// A data-driven constant rather than the build clock, so repeated
    /// builds over the same data are byte-identical.
    pub lastmod: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            max_urls_per_file: 1000,
            lastmod: "2026-08-01".to_string(),
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page-render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// A documented stock `hub.toml` with every option at its default.
pub fn stock_config_toml() -> String {
    r#"# hubgen site configuration
# All options are optional - defaults shown below.

# Canonical host for absolute URLs (metadata, JSON-LD, sitemaps).
# No trailing slash.
base_url = "https://www.example.com"

# Whether `build` also writes pages for City x Role pairs outside the
# high-value set. Such pages always resolve on request, carry a noindex
# flag, and never appear in the sitemap.
render_unindexed_combinations = true

[sitemap]
# Per-urlset URL budget before a category is split into numbered files.
# The sitemap protocol allows up to 50000.
max_urls_per_file = 1000
# Fixed lastmod date stamped on every URL. Bump when the data tables
# change; keeping it fixed makes builds reproducible.
lastmod = "2026-08-01"

[processing]
# Max parallel render workers. Omit for one per CPU core.
# max_processes = 4
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.base_url, defaults.base_url);
        assert_eq!(
            parsed.render_unindexed_combinations,
            defaults.render_unindexed_combinations
        );
        assert_eq!(
            parsed.sitemap.max_urls_per_file,
            defaults.sitemap.max_urls_per_file
        );
    }

    #[test]
    fn trailing_slash_rejected() {
        let config = SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_urlset_budget_rejected() {
        let mut config = SiteConfig::default();
        config.sitemap.max_urls_per_file = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("bse_url = \"https://x.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn sparse_config_keeps_defaults() {
        let config: SiteConfig = toml::from_str("base_url = \"https://hub.test\"").unwrap();
        assert_eq!(config.base_url, "https://hub.test");
        assert!(config.render_unindexed_combinations);
        assert_eq!(config.sitemap.lastmod, "2026-08-01");
    }

    #[test]
    fn effective_threads_clamps_to_cores() {
        let config = ProcessingConfig {
            max_processes: Some(10_000),
        };
        let cores = std::thread::available_parallelism().unwrap().get();
        assert_eq!(effective_threads(&config), cores);
    }
}
