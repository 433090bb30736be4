//! Writing robots.txt into a build output directory and reporting on it.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::RobotsConfig;
use crate::errors::{Result, RobotsError};
use crate::generate::generate;
use crate::sink::LogSink;

/// Name of the generated file.
pub const ROBOTS_TXT: &str = "robots.txt";

/// Crawlers may ignore robots.txt content past this size.
pub const SIZE_LIMIT_KB: f64 = 10.0;

/// What a build wrote and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    /// Full path of the written file.
    pub path: PathBuf,
    /// Size on disk after the write.
    pub bytes: u64,
    /// Time spent generating and writing.
    pub elapsed: Duration,
}

impl BuildReport {
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }

    pub fn exceeds_size_limit(&self) -> bool {
        self.size_kb() > SIZE_LIMIT_KB
    }
}

/// Generates robots.txt and writes it to `<out_dir>/robots.txt`.
///
/// # Errors
///
/// Configuration errors from [`generate`] (already logged through `sink`),
/// or an I/O error if the file cannot be written or its size read back.
pub fn write_robots_txt(
    config: &RobotsConfig,
    site_href: &str,
    out_dir: &Path,
    sink: &dyn LogSink,
) -> Result<BuildReport> {
    let start = Instant::now();
    let path = out_dir.join(ROBOTS_TXT);

    let content = generate(config, site_href, sink)?;
    let io_error = |source: std::io::Error| RobotsError::Io {
        path: path.clone(),
        source,
    };
    std::fs::write(&path, content).map_err(io_error)?;
    let elapsed = start.elapsed();

    let bytes = std::fs::metadata(&path).map_err(io_error)?.len();
    Ok(BuildReport { path, bytes, elapsed })
}

/// Logs the outcome of a build: a warning when the file is over the size limit,
/// then where it was written.
pub fn log_build_report(report: &BuildReport, sink: &dyn LogSink) {
    let size_kb = report.size_kb();
    if report.exceeds_size_limit() {
        sink.warn(&format!(
            "'{}' file size is {:.2} KB. Keep it under {} KB for best results.",
            ROBOTS_TXT, size_kb, SIZE_LIMIT_KB
        ));
    }

    let dir = report.path.parent().unwrap_or(report.path.as_path());
    sink.info(&format!(
        "`{}` ({:.2} KB) created at `{}` in {} ms",
        ROBOTS_TXT,
        size_kb,
        relative_to_cwd(dir).display(),
        report.elapsed.as_millis()
    ));
}

/// `path` relative to the current directory when it lies below it, otherwise unchanged.
fn relative_to_cwd(path: &Path) -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
}
