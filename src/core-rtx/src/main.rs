use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use core_rtx::{
    LogSink, RobotsConfig, RobotsError, TracingSink, generate, log_build_report, resolve_site_href, setup_logging,
    validate, write_robots_txt,
};

#[derive(Parser)]
#[command(name = "core-robotstxt")]
#[command(about = "Generate and validate robots.txt from a JSON policy configuration", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
    /// JSON configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, global = true, value_parser = validate_input_file)]
    config: Option<PathBuf>,
    /// Absolute URL of the deployed site, used to derive the default sitemap URL.
    #[arg(long, global = true, value_parser = validate_url)]
    site: Option<String>,
    /// Base path of the site below `--site`.
    #[arg(long, global = true, default_value = "/")]
    base: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration without generating anything.
    Validate,

    /// Generate robots.txt and print it to stdout.
    Print,

    /// Generate robots.txt into a build output directory and report its size.
    Build {
        /// Existing directory that receives robots.txt.
        #[arg(short, long, value_parser = validate_output_dir)]
        out_dir: PathBuf,
    },
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Output directory does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Output path is not a directory: {}", path.display()));
    }

    Ok(path)
}

fn main() -> ExitCode {
    setup_logging("core_rtx=info,core_robotstxt=info,robots_txt=info");
    let cli = CoreCli::parse();

    match run(&cli, &TracingSink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // configuration errors were already reported by the generator or validator
            if !e.is_configuration() {
                tracing::error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CoreCli, sink: &dyn LogSink) -> Result<(), RobotsError> {
    let config = RobotsConfig::load(cli.config.as_deref())?;
    let site_href = resolve_site_href(cli.site.as_deref(), &cli.base).inspect_err(|e| sink.error(&e.to_string()))?;

    match &cli.command {
        Commands::Validate => {
            validate(&config.policy, config.host()).inspect_err(|e| sink.error(&e.to_string()))?;
            sink.info(&format!("Valid robots.txt configuration: {}", describe(cli.config.as_deref())));
        }

        Commands::Print => {
            println!("{}", generate(&config, &site_href, sink)?);
        }

        Commands::Build { out_dir } => {
            let report = write_robots_txt(&config, &site_href, out_dir, sink)?;
            log_build_report(&report, sink);
        }
    }

    Ok(())
}

fn describe(config: Option<&Path>) -> String {
    match config {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
