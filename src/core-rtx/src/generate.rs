//! Turns a [`RobotsConfig`] into robots.txt text.
//!
//! The document has three sections, each optional except the first:
//!
//! ```text
//! User-agent: *
//! Allow: /
//!
//! Sitemap: https://example.com/sitemap-index.xml
//!
//! Host: www.example.com
//! ```
//!
//! Policy blocks are separated by a blank line, as are the sections themselves.

use crate::config::{Policy, RobotsConfig, Sitemap};
use crate::errors::{Result, RobotsError};
use crate::sink::LogSink;
use crate::sitemap::{default_sitemap_url, is_valid_sitemap_url};
use crate::validate::{validate_host, validate_policies};

/// Generates robots.txt content.
///
/// `site_href` is the resolved base URL of the site (see
/// [`crate::resolve_site_href`]); it may be empty, in which case a
/// `sitemap: true` configuration produces no `Sitemap:` line.
///
/// Warnings (unusable sitemap URLs) go to `sink` and do not stop generation.
///
/// # Errors
///
/// Returns the first configuration error found: an empty policy list, a bad
/// policy, or an invalid host. The error is also logged through `sink`.
///
/// # Examples
///
/// ```
/// # use core_rtx::{generate, RobotsConfig, TracingSink};
/// let robots = generate(&RobotsConfig::default(), "https://site.test/", &TracingSink).unwrap();
/// assert_eq!(robots, "User-agent: *\nAllow: /\n\nSitemap: https://site.test/sitemap-index.xml");
/// ```
pub fn generate(config: &RobotsConfig, site_href: &str, sink: &dyn LogSink) -> Result<String> {
    reported(sink, check_policies(&config.policy))?;

    let sections = [
        policy_section(&config.policy),
        sitemap_section(&config.sitemap, site_href, sink),
        reported(sink, host_section(config.host()))?,
    ];

    let document = sections
        .iter()
        .filter(|section| !section.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(document.trim().to_string())
}

fn check_policies(policies: &[Policy]) -> Result<()> {
    if policies.is_empty() {
        return Err(RobotsError::EmptyPolicy);
    }
    validate_policies(policies)
}

/// Logs a configuration error at error level before handing it back.
fn reported<T>(sink: &dyn LogSink, result: Result<T>) -> Result<T> {
    result.inspect_err(|e| sink.error(&e.to_string()))
}

/// Every policy block, in list order, separated by blank lines.
fn policy_section(policies: &[Policy]) -> String {
    policies.iter().map(policy_block).collect::<Vec<_>>().join("\n")
}

/// The lines of one policy. Directive order is fixed:
/// User-agent, Allow, Disallow, Crawl-delay, Clean-param.
fn policy_block(policy: &Policy) -> String {
    let mut block = String::new();

    if policy.user_agent.is_empty() {
        push_line(&mut block, "User-agent", "*");
    }
    for agent in &policy.user_agent {
        push_line(&mut block, "User-agent", agent);
    }
    for path in &policy.allow {
        push_line(&mut block, "Allow", path);
    }
    for path in &policy.disallow {
        push_line(&mut block, "Disallow", path);
    }
    if let Some(delay) = &policy.crawl_delay {
        push_line(&mut block, "Crawl-delay", &delay.to_string());
    }
    for param in &policy.clean_param {
        push_line(&mut block, "Clean-param", param);
    }

    block
}

fn sitemap_section(sitemap: &Sitemap, site_href: &str, sink: &dyn LogSink) -> String {
    let mut section = String::new();

    match sitemap {
        Sitemap::Disabled => {}

        Sitemap::SiteDefault => match default_sitemap_url(site_href) {
            Some(url) => push_line(&mut section, "Sitemap", &url),
            None => sink.warn(
                "`sitemap` is configured as true, but the site URL is not provided. \
                 Failed to generate default sitemap URL.",
            ),
        },

        Sitemap::Urls(urls) => {
            for url in urls {
                if is_valid_sitemap_url(url) {
                    push_line(&mut section, "Sitemap", url);
                } else {
                    sink.warn(&format!("Invalid Sitemap URL: {}", url));
                }
            }
        }
    }

    section
}

fn host_section(host: Option<&str>) -> Result<String> {
    let mut section = String::new();
    if let Some(host) = host {
        validate_host(host)?;
        push_line(&mut section, "Host", host);
    }
    Ok(section)
}

fn push_line(out: &mut String, directive: &str, value: &str) {
    out.push_str(directive);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}
