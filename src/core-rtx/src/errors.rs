//! Error types for robots.txt configuration, validation and output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for robots.txt generation operations.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// The policy list is missing or empty.
    #[error("Policy configuration is required.")]
    EmptyPolicy,

    /// A policy has no user agent.
    #[error("policy[{index}].userAgent is required.")]
    MissingUserAgent { index: usize },

    /// A policy has neither an `allow` nor a `disallow` entry.
    #[error("policy[{index}] must have at least one 'disallow' or 'allow' entry.")]
    MissingRule { index: usize },

    /// A policy's crawl delay is not a number in [0.1, 60].
    #[error("policy[{index}].crawlDelay must be between 0.1 and 60 seconds.")]
    InvalidCrawlDelay { index: usize },

    /// The `host` value is not a domain name.
    #[error("Host '{host}' is invalid. It should be a valid domain like 'www.example.com'")]
    InvalidHost { host: String },

    /// The site URL used to derive the default sitemap cannot be parsed or joined with the base path.
    #[error("Invalid site URL '{site}': {source}")]
    InvalidSiteUrl {
        site: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration file is not valid JSON for the options schema.
    #[error("Invalid robots.txt configuration: {0}")]
    ParseConfig(#[from] serde_json::Error),

    /// Reading the configuration or writing the output failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RobotsError {
    /// True for the fatal configuration errors raised while validating or generating.
    /// False for the file and parsing failures of the surrounding build layer.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::EmptyPolicy
            | Self::MissingUserAgent { .. }
            | Self::MissingRule { .. }
            | Self::InvalidCrawlDelay { .. }
            | Self::InvalidHost { .. }
            | Self::InvalidSiteUrl { .. } => true,
            Self::ParseConfig(_) | Self::Io { .. } => false,
        }
    }
}

/// Type alias for Result with RobotsError
pub type Result<T> = std::result::Result<T, RobotsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field_and_index() {
        assert_eq!(
            RobotsError::MissingUserAgent { index: 2 }.to_string(),
            "policy[2].userAgent is required."
        );
        assert_eq!(
            RobotsError::MissingRule { index: 0 }.to_string(),
            "policy[0] must have at least one 'disallow' or 'allow' entry."
        );
        assert_eq!(
            RobotsError::InvalidCrawlDelay { index: 1 }.to_string(),
            "policy[1].crawlDelay must be between 0.1 and 60 seconds."
        );
        assert_eq!(RobotsError::EmptyPolicy.to_string(), "Policy configuration is required.");
    }

    #[test]
    fn test_error_classification() {
        assert!(RobotsError::EmptyPolicy.is_configuration());
        assert!(
            RobotsError::InvalidHost {
                host: "nope".to_string()
            }
            .is_configuration()
        );

        let io = RobotsError::Io {
            path: PathBuf::from("dist/robots.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!io.is_configuration());
        assert_eq!(io.to_string(), "I/O error on dist/robots.txt: missing");
    }
}
