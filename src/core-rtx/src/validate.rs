//! Structural checks run before any robots.txt content is produced.
//!
//! Every function here is pure: it returns the first violation found as a
//! [`RobotsError`] and leaves reporting to the caller.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Policy;
use crate::errors::{Result, RobotsError};

/// Inclusive bounds for `Crawl-delay`, in seconds.
pub const MIN_CRAWL_DELAY: f64 = 0.1;
pub const MAX_CRAWL_DELAY: f64 = 60.0;

/// Longest hostname allowed in a `Host:` line.
const MAX_HOST_LEN: usize = 253;

/// One or more `label.` prefixes followed by an alphabetic top-level label.
/// Labels are 1-63 letters, digits or hyphens, never starting or ending with a hyphen.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
        .expect("host pattern is a valid regex")
});

/// Checks the policy list and, when set, the host.
///
/// Order: list non-empty, then each policy in turn (user agent, allow/disallow,
/// crawl delay), then the host. Stops at the first failure.
pub fn validate(policies: &[Policy], host: Option<&str>) -> Result<()> {
    if policies.is_empty() {
        return Err(RobotsError::EmptyPolicy);
    }
    validate_policies(policies)?;
    match host.filter(|h| !h.is_empty()) {
        Some(host) => validate_host(host),
        None => Ok(()),
    }
}

/// Checks each policy in list order, reporting the index of the first bad one.
/// An empty list passes; emptiness is the caller's check.
pub fn validate_policies(policies: &[Policy]) -> Result<()> {
    for (index, policy) in policies.iter().enumerate() {
        if policy.user_agent.is_empty() {
            return Err(RobotsError::MissingUserAgent { index });
        }

        if policy.allow.is_empty() && policy.disallow.is_empty() {
            return Err(RobotsError::MissingRule { index });
        }

        if let Some(delay) = &policy.crawl_delay {
            match delay.seconds() {
                Some(s) if (MIN_CRAWL_DELAY..=MAX_CRAWL_DELAY).contains(&s) => {}
                _ => return Err(RobotsError::InvalidCrawlDelay { index }),
            }
        }
    }
    Ok(())
}

/// Checks that `host` is a DNS hostname such as `www.example.com`.
pub fn validate_host(host: &str) -> Result<()> {
    if is_valid_host(host) {
        Ok(())
    } else {
        Err(RobotsError::InvalidHost { host: host.to_string() })
    }
}

/// True if `host` is a DNS hostname with at least one dot and an alphabetic TLD.
pub fn is_valid_host(host: &str) -> bool {
    !host.is_empty() && host.len() <= MAX_HOST_LEN && HOST_PATTERN.is_match(host)
}
