//! Sitemap and site URL utilities.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::errors::{Result, RobotsError};

/// File name of the sitemap index derived from the site URL.
pub const DEFAULT_SITEMAP_FILE: &str = "sitemap-index.xml";

static SITEMAP_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:xml|xml\.gz|txt|txt\.gz|json)$").expect("sitemap path pattern is a valid regex")
});

/// Checks if a URL can be announced in a `Sitemap:` line.
///
/// The URL must be absolute `http`/`https` with a host, contain no whitespace,
/// and its path must end in `.xml`, `.xml.gz`, `.txt`, `.txt.gz` or `.json`
/// (any case). Query strings and fragments do not count as part of the path.
///
/// # Examples
///
/// ```
/// # use core_rtx::is_valid_sitemap_url;
/// assert!(is_valid_sitemap_url("https://example.com/sitemap.xml"));
/// assert!(is_valid_sitemap_url("http://example.com/feeds/Sitemap.TXT.GZ"));
/// assert!(!is_valid_sitemap_url("ftp://example.com/sitemap.xml"));
/// assert!(!is_valid_sitemap_url("https://example.com/sitemap.html"));
/// assert!(!is_valid_sitemap_url("https://example.com/feed?format=.xml"));
/// ```
pub fn is_valid_sitemap_url(url: &str) -> bool {
    // the parser would strip or percent-encode whitespace
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str().is_some_and(|h| !h.is_empty())
        && SITEMAP_PATH_PATTERN.is_match(parsed.path())
}

/// The sitemap index URL under the resolved site URL, or `None` when the site URL is unknown.
///
/// # Examples
///
/// ```
/// # use core_rtx::default_sitemap_url;
/// assert_eq!(
///     default_sitemap_url("https://example.com/"),
///     Some("https://example.com/sitemap-index.xml".to_string())
/// );
/// assert_eq!(default_sitemap_url(""), None);
/// ```
pub fn default_sitemap_url(site_href: &str) -> Option<String> {
    if site_href.is_empty() {
        None
    } else {
        Some(format!("{}{}", site_href, DEFAULT_SITEMAP_FILE))
    }
}

/// Resolves the site's base URL from the configured site and base path.
///
/// Returns the empty string when no site is configured, which later disables
/// the derived sitemap line.
///
/// # Errors
///
/// Returns an error if `site` is not an absolute URL or `base` cannot be joined onto it.
pub fn resolve_site_href(site: Option<&str>, base: &str) -> Result<String> {
    let Some(site) = site.filter(|s| !s.is_empty()) else {
        return Ok(String::new());
    };

    let invalid = |source: url::ParseError| RobotsError::InvalidSiteUrl {
        site: site.to_string(),
        source,
    };
    let site_url = Url::parse(site).map_err(invalid)?;
    let resolved = site_url.join(base).map_err(invalid)?;
    Ok(resolved.to_string())
}
