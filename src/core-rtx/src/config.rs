//! Configuration model for robots.txt generation.
//!
//! Options are read from JSON with camelCase keys. Fields that accept either one
//! string or a list of strings are normalized into a `Vec<String>` while
//! deserializing, so the generator never branches on the input shape.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::errors::{Result, RobotsError};

/// Reads a string-or-list-of-strings field into a list.
/// `null`, a missing key and the empty string all become the empty list.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) if value.is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

/// Value of a policy's `crawlDelay`.
///
/// Non-numeric input is kept rather than rejected by the parser so that
/// validation can report which policy carries it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CrawlDelay {
    Seconds(f64),
    Malformed(serde_json::Value),
}

impl CrawlDelay {
    /// The delay in seconds, if the configured value is a number.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Self::Seconds(s) => Some(*s),
            Self::Malformed(_) => None,
        }
    }
}

impl fmt::Display for CrawlDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{}", s),
            Self::Malformed(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for CrawlDelay {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

/// One crawling rule: the robots it applies to and what they may fetch.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Policy {
    /// Robot identifiers, `*` meaning every robot.
    #[serde(default, deserialize_with = "one_or_many")]
    pub user_agent: Vec<String>,
    /// Path patterns robots may fetch.
    #[serde(default, deserialize_with = "one_or_many")]
    pub allow: Vec<String>,
    /// Path patterns robots must not fetch.
    #[serde(default, deserialize_with = "one_or_many")]
    pub disallow: Vec<String>,
    /// Minimum wait between two requests, in seconds.
    #[serde(default)]
    pub crawl_delay: Option<CrawlDelay>,
    /// URL parameters (optionally scoped to a path) to ignore while indexing.
    #[serde(default, deserialize_with = "one_or_many")]
    pub clean_param: Vec<String>,
}

impl Policy {
    /// Creates a new builder for Policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }
}

/// Builder for Policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    /// Adds a robot the policy applies to.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.policy.user_agent.push(agent.into());
        self
    }

    /// Adds several robots the policy applies to.
    pub fn user_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.user_agent.extend(agents.into_iter().map(Into::into));
        self
    }

    /// Adds a path pattern to allow.
    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.policy.allow.push(path.into());
        self
    }

    /// Adds a path pattern to disallow.
    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.policy.disallow.push(path.into());
        self
    }

    /// Sets the crawl delay in seconds.
    pub fn crawl_delay(mut self, seconds: f64) -> Self {
        self.policy.crawl_delay = Some(CrawlDelay::Seconds(seconds));
        self
    }

    /// Adds a Clean-param value, e.g. `"sid /index.php"`.
    pub fn clean_param(mut self, param: impl Into<String>) -> Self {
        self.policy.clean_param.push(param.into());
        self
    }

    /// Builds the Policy. No validation happens here; see [`crate::validate`].
    pub fn build(self) -> Policy {
        self.policy
    }
}

/// Where the `Sitemap:` lines come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawSitemap")]
pub enum Sitemap {
    /// No sitemap lines.
    Disabled,
    /// `<site href>sitemap-index.xml`, derived from the resolved site URL.
    #[default]
    SiteDefault,
    /// Explicit sitemap URLs, in order.
    Urls(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSitemap {
    Flag(bool),
    One(String),
    Many(Vec<String>),
}

impl From<RawSitemap> for Sitemap {
    fn from(raw: RawSitemap) -> Self {
        match raw {
            RawSitemap::Flag(true) => Sitemap::SiteDefault,
            RawSitemap::Flag(false) => Sitemap::Disabled,
            RawSitemap::One(url) if url.is_empty() => Sitemap::Disabled,
            RawSitemap::One(url) => Sitemap::Urls(vec![url]),
            RawSitemap::Many(urls) => Sitemap::Urls(urls),
        }
    }
}

/// A present `"policy": null` is an empty policy list, not a missing key.
fn null_as_no_policy<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<Policy>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<Vec<Policy>>::deserialize(deserializer)?.unwrap_or_default()))
}

/// A present `"sitemap": null` is falsy and disables the sitemap lines.
fn null_as_disabled<'de, D>(deserializer: D) -> std::result::Result<Option<Sitemap>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<Sitemap>::deserialize(deserializer)?.unwrap_or(Sitemap::Disabled)))
}

/// User supplied options. Every key is optional; see [`RobotsConfig`] for the defaults.
///
/// Only missing keys fall back to the defaults. A key set to `null` overrides
/// them: no policies (a configuration error) or no sitemap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RobotsOptions {
    #[serde(default, deserialize_with = "null_as_no_policy")]
    pub policy: Option<Vec<Policy>>,
    #[serde(default, deserialize_with = "null_as_disabled")]
    pub sitemap: Option<Sitemap>,
    #[serde(default)]
    pub host: Option<String>,
}

impl RobotsOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an options file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| RobotsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Complete configuration: options merged with defaults. Not modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotsConfig {
    pub policy: Vec<Policy>,
    pub sitemap: Sitemap,
    pub host: Option<String>,
}

impl Default for RobotsConfig {
    /// Every robot may fetch everything, the sitemap derives from the site URL, no host.
    fn default() -> Self {
        Self {
            policy: vec![Policy::builder().user_agent("*").allow("/").build()],
            sitemap: Sitemap::SiteDefault,
            host: None,
        }
    }
}

impl From<RobotsOptions> for RobotsConfig {
    fn from(options: RobotsOptions) -> Self {
        let defaults = RobotsConfig::default();
        Self {
            policy: options.policy.unwrap_or(defaults.policy),
            sitemap: options.sitemap.unwrap_or(defaults.sitemap),
            host: options.host.or(defaults.host),
        }
    }
}

impl RobotsConfig {
    /// Loads options from `path` and merges them with the defaults.
    /// Without a path, the defaults are used as is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => RobotsOptions::load(path).map(Self::from),
            None => Ok(Self::default()),
        }
    }

    /// The configured host, treating the empty string as unset.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref().filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_list_fields_normalize_to_lists() {
        let policy: Policy = serde_json::from_str(
            r#"{"userAgent": ["Googlebot", "bingbot"], "allow": "/", "disallow": ["/admin", "/tmp"], "cleanParam": "sid /index.php"}"#,
        )
        .unwrap();

        assert_eq!(policy.user_agent, vec!["Googlebot", "bingbot"]);
        assert_eq!(policy.allow, vec!["/"]);
        assert_eq!(policy.disallow, vec!["/admin", "/tmp"]);
        assert_eq!(policy.clean_param, vec!["sid /index.php"]);
        assert_eq!(policy.crawl_delay, None);
    }

    #[test]
    fn test_empty_and_null_fields_are_absent() {
        let policy: Policy = serde_json::from_str(r#"{"userAgent": "", "allow": null}"#).unwrap();
        assert!(policy.user_agent.is_empty());
        assert!(policy.allow.is_empty());
        assert!(policy.disallow.is_empty());
    }

    #[test]
    fn test_crawl_delay_keeps_malformed_values() {
        let policy: Policy = serde_json::from_str(r#"{"userAgent": "*", "crawlDelay": 2.5}"#).unwrap();
        assert_eq!(policy.crawl_delay, Some(CrawlDelay::Seconds(2.5)));

        let policy: Policy = serde_json::from_str(r#"{"userAgent": "*", "crawlDelay": "abc"}"#).unwrap();
        let delay = policy.crawl_delay.unwrap();
        assert_eq!(delay.seconds(), None);
        assert_eq!(delay.to_string(), "\"abc\"");
    }

    #[test]
    fn test_crawl_delay_display_matches_number_formatting() {
        assert_eq!(CrawlDelay::Seconds(30.0).to_string(), "30");
        assert_eq!(CrawlDelay::Seconds(0.1).to_string(), "0.1");
        assert_eq!(CrawlDelay::Seconds(60.0).to_string(), "60");
    }

    #[test]
    fn test_sitemap_shapes() {
        let parse = |json: &str| serde_json::from_str::<Sitemap>(json).unwrap();
        assert_eq!(parse("true"), Sitemap::SiteDefault);
        assert_eq!(parse("false"), Sitemap::Disabled);
        assert_eq!(parse(r#""""#), Sitemap::Disabled);
        assert_eq!(
            parse(r#""https://example.com/sitemap.xml""#),
            Sitemap::Urls(vec!["https://example.com/sitemap.xml".to_string()])
        );
        assert_eq!(
            parse(r#"["https://a.com/s.xml", "https://b.com/s.xml"]"#),
            Sitemap::Urls(vec!["https://a.com/s.xml".to_string(), "https://b.com/s.xml".to_string()])
        );
    }

    #[test]
    fn test_options_merge_with_defaults() {
        let config = RobotsConfig::from(RobotsOptions::from_json("{}").unwrap());
        assert_eq!(config, RobotsConfig::default());

        let config = RobotsConfig::from(
            RobotsOptions::from_json(r#"{"sitemap": false, "host": "www.example.com"}"#).unwrap(),
        );
        assert_eq!(config.policy, RobotsConfig::default().policy);
        assert_eq!(config.sitemap, Sitemap::Disabled);
        assert_eq!(config.host(), Some("www.example.com"));
    }

    #[test]
    fn test_explicit_empty_policy_overrides_default() {
        let config = RobotsConfig::from(RobotsOptions::from_json(r#"{"policy": []}"#).unwrap());
        assert!(config.policy.is_empty());
    }

    #[test]
    fn test_null_options_override_defaults() {
        let options = RobotsOptions::from_json(r#"{"policy": null, "sitemap": null, "host": null}"#).unwrap();
        assert_eq!(options.policy, Some(vec![]));
        assert_eq!(options.sitemap, Some(Sitemap::Disabled));

        let config = RobotsConfig::from(options);
        assert!(config.policy.is_empty());
        assert_eq!(config.sitemap, Sitemap::Disabled);
        assert_eq!(config.host(), None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = RobotsOptions::from_json(r#"{"sitemaps": true}"#).unwrap_err();
        assert!(matches!(err, RobotsError::ParseConfig(_)));

        let err = RobotsOptions::from_json(r#"{"policy": [{"userAgent": "*", "alow": "/"}]}"#).unwrap_err();
        assert!(matches!(err, RobotsError::ParseConfig(_)));
    }

    #[test]
    fn test_empty_host_is_unset() {
        let config = RobotsConfig {
            host: Some(String::new()),
            ..RobotsConfig::default()
        };
        assert_eq!(config.host(), None);
    }

    #[test]
    fn test_builder() {
        let policy = Policy::builder()
            .user_agents(["Googlebot", "Applebot"])
            .allow("/")
            .disallow("/admin")
            .crawl_delay(5.0)
            .clean_param("ref /articles/")
            .build();

        assert_eq!(policy.user_agent, vec!["Googlebot", "Applebot"]);
        assert_eq!(policy.allow, vec!["/"]);
        assert_eq!(policy.disallow, vec!["/admin"]);
        assert_eq!(policy.crawl_delay, Some(CrawlDelay::Seconds(5.0)));
        assert_eq!(policy.clean_param, vec!["ref /articles/"]);
    }
}
