use std::path::PathBuf;
use std::sync::Arc;

use core_rtx::{RobotsConfig, resolve_site_href};

/// Read-only inputs shared by every request. robots.txt itself is regenerated per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<RobotsConfig>,
    pub site_href: Arc<str>,
}

impl AppState {
    pub fn new(config: RobotsConfig, site_href: impl Into<Arc<str>>) -> Self {
        Self {
            config: Arc::new(config),
            site_href: site_href.into(),
        }
    }

    /// Builds the state from the environment:
    ///   - ROBOTS_CONFIG: JSON options file; defaults apply when unset
    ///   - SITE_URL: deployed site URL; no derived sitemap when unset
    ///   - SITE_BASE: base path below SITE_URL, `/` when unset
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path = std::env::var("ROBOTS_CONFIG").ok().filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        let site = std::env::var("SITE_URL").ok();
        let base = std::env::var("SITE_BASE").unwrap_or_else(|_| "/".to_string());

        let config = RobotsConfig::load(config_path.as_deref())?;
        let site_href = resolve_site_href(site.as_deref(), &base)?;

        match &config_path {
            Some(path) => tracing::info!("Loaded robots.txt options from {}", path.display()),
            None => tracing::info!("No ROBOTS_CONFIG set, using default robots.txt options"),
        }
        if site_href.is_empty() {
            tracing::warn!("SITE_URL is not set: the default sitemap line will be omitted");
        }

        Ok(Self::new(config, site_href))
    }
}
