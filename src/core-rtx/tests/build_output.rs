//! Integration tests for the build step: options file in, robots.txt on disk out.

use std::fs;

use core_rtx::{
    MemorySink, ROBOTS_TXT, RobotsConfig, RobotsError, generate, log_build_report, resolve_site_href, write_robots_txt,
};
use indoc::indoc;

fn write_config(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("robots.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_build_writes_generated_content() {
    let work = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let config_path = write_config(
        &work,
        indoc! {r#"
            {
              "policy": [
                { "userAgent": ["Googlebot", "bingbot"], "allow": "/", "disallow": ["/admin"], "crawlDelay": 2 },
                { "userAgent": "Yandex", "disallow": "/private", "cleanParam": "sid /index.php" }
              ],
              "sitemap": true,
              "host": "www.example.com"
            }
        "#},
    );

    let config = RobotsConfig::load(Some(&config_path)).unwrap();
    let site_href = resolve_site_href(Some("https://www.example.com"), "/").unwrap();
    let sink = MemorySink::new();

    let report = write_robots_txt(&config, &site_href, out_dir.path(), &sink).unwrap();

    let written = fs::read_to_string(out_dir.path().join(ROBOTS_TXT)).unwrap();
    assert_eq!(
        written,
        indoc! {"
            User-agent: Googlebot
            User-agent: bingbot
            Allow: /
            Disallow: /admin
            Crawl-delay: 2

            User-agent: Yandex
            Disallow: /private
            Clean-param: sid /index.php

            Sitemap: https://www.example.com/sitemap-index.xml

            Host: www.example.com"}
    );
    assert_eq!(report.path, out_dir.path().join(ROBOTS_TXT));
    assert_eq!(report.bytes, written.len() as u64);
    assert_eq!(written, generate(&config, &site_href, &MemorySink::new()).unwrap());

    log_build_report(&report, &sink);
    assert!(sink.warnings().is_empty());
    assert!(sink.errors().is_empty());
}

#[test]
fn test_build_with_defaults_and_no_site() {
    let out_dir = tempfile::tempdir().unwrap();
    let sink = MemorySink::new();

    let config = RobotsConfig::load(None).unwrap();
    let site_href = resolve_site_href(None, "/").unwrap();
    write_robots_txt(&config, &site_href, out_dir.path(), &sink).unwrap();

    let written = fs::read_to_string(out_dir.path().join(ROBOTS_TXT)).unwrap();
    assert_eq!(written, "User-agent: *\nAllow: /");
    assert_eq!(sink.warnings().len(), 1);
}

#[test]
fn test_base_path_is_part_of_default_sitemap() {
    let out_dir = tempfile::tempdir().unwrap();
    let site_href = resolve_site_href(Some("https://example.com"), "/docs/").unwrap();

    write_robots_txt(&RobotsConfig::default(), &site_href, out_dir.path(), &MemorySink::new()).unwrap();

    let written = fs::read_to_string(out_dir.path().join(ROBOTS_TXT)).unwrap();
    assert!(written.ends_with("Sitemap: https://example.com/docs/sitemap-index.xml"));
}

#[test]
fn test_invalid_config_writes_nothing() {
    let work = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&work, r#"{ "policy": [{ "userAgent": "*" }] }"#);
    let sink = MemorySink::new();

    let config = RobotsConfig::load(Some(&config_path)).unwrap();
    let err = write_robots_txt(&config, "", out_dir.path(), &sink).unwrap_err();

    assert!(matches!(err, RobotsError::MissingRule { index: 0 }));
    assert!(err.is_configuration());
    assert_eq!(
        sink.errors(),
        vec!["policy[0] must have at least one 'disallow' or 'allow' entry."]
    );
    assert!(!out_dir.path().join(ROBOTS_TXT).exists());
}

#[test]
fn test_empty_policy_list_in_file_is_fatal() {
    let work = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&work, r#"{ "policy": [] }"#);

    let config = RobotsConfig::load(Some(&config_path)).unwrap();
    let err = write_robots_txt(&config, "", out_dir.path(), &MemorySink::new()).unwrap_err();
    assert!(matches!(err, RobotsError::EmptyPolicy));
}

#[test]
fn test_missing_output_directory_is_an_io_error() {
    let out_dir = tempfile::tempdir().unwrap();
    let missing = out_dir.path().join("does-not-exist");

    let err = write_robots_txt(&RobotsConfig::default(), "", &missing, &MemorySink::new()).unwrap_err();
    assert!(matches!(err, RobotsError::Io { .. }));
    assert!(!err.is_configuration());
}

#[test]
fn test_unreadable_and_malformed_config_files() {
    let work = tempfile::tempdir().unwrap();

    let err = RobotsConfig::load(Some(&work.path().join("missing.json"))).unwrap_err();
    assert!(matches!(err, RobotsError::Io { .. }));

    let config_path = write_config(&work, r#"{ "policy": "#);
    let err = RobotsConfig::load(Some(&config_path)).unwrap_err();
    assert!(matches!(err, RobotsError::ParseConfig(_)));
}
