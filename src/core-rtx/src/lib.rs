//! # robots.txt generation
//!
//! Builds `robots.txt` content from a policy configuration, validating the
//! configuration before anything is written.
//!
//! ## Features
//!
//! - JSON configuration with string-or-list fields and defaults for missing keys
//! - Fail-fast validation naming the offending field and policy index
//! - `User-agent`, `Allow`, `Disallow`, `Crawl-delay`, `Clean-param`, `Sitemap` and `Host` directives
//! - Warnings and errors reported through an injected [`LogSink`]
//! - Writing the file into a build output directory with a size/time report
//!
//! ## Example
//!
//! ```
//! use core_rtx::{generate, MemorySink, Policy, RobotsConfig, Sitemap};
//!
//! let config = RobotsConfig {
//!     policy: vec![Policy::builder().user_agent("*").disallow("/admin").build()],
//!     sitemap: Sitemap::Urls(vec!["https://example.com/sitemap.xml".to_string()]),
//!     host: Some("example.com".to_string()),
//! };
//!
//! let sink = MemorySink::new();
//! let robots = generate(&config, "https://example.com/", &sink).unwrap();
//! assert_eq!(
//!     robots,
//!     "User-agent: *\nDisallow: /admin\n\nSitemap: https://example.com/sitemap.xml\n\nHost: example.com"
//! );
//! ```

pub mod common;
mod config;
mod emit;
mod errors;
mod generate;
mod sink;
mod sitemap;
mod validate;

pub use common::{ServerAddrError, get_server_addr, health_check, setup_logging};
pub use config::{CrawlDelay, Policy, PolicyBuilder, RobotsConfig, RobotsOptions, Sitemap};
pub use emit::{BuildReport, ROBOTS_TXT, SIZE_LIMIT_KB, log_build_report, write_robots_txt};
pub use errors::{Result, RobotsError};
pub use generate::generate;
pub use sink::{Level, LogSink, MemorySink, TracingSink};
pub use sitemap::{DEFAULT_SITEMAP_FILE, default_sitemap_url, is_valid_sitemap_url, resolve_site_href};
pub use validate::{MAX_CRAWL_DELAY, MIN_CRAWL_DELAY, is_valid_host, validate, validate_host, validate_policies};
