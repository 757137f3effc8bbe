//! Report binary for replay analysis.
//!
//! Reads one `AnalysisResult` JSON document (the payload the remote replay
//! parser returns), runs the aggregation pass, and prints the derived views
//! as JSON on stdout.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `REPLAY_CONFIG` or `replay-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Read the analysis document from the path argument, or stdin for `-`
//! 4. Aggregate and print, with the build log at the page given as the
//!    optional second argument (default 1)
//!
//! # Logging
//!
//! `REPLAY_LOG` takes precedence, then `RUST_LOG`, then `logging.level`
//! from the configuration file.

mod error;

use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};

use replay_core::{BuildLog, EngineConfig, aggregate};
use replay_types::AnalysisResult;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReportError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "replay-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read or parsed, or the output cannot be serialized.
fn main() -> Result<(), ReportError> {
    // 1. Load configuration. Logging is not up yet, so remember where it
    //    came from and report after init.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    let filter = EnvFilter::try_from_env("REPLAY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if config.logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(
        config = %source,
        page_size = config.pagination.page_size,
        priced_actions = config.ledger.costs.len(),
        palette = %config.palette.version,
        "Configuration loaded"
    );

    // 3. Read the analysis document.
    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or(ReportError::MissingInput)?;
    let page = args.next().as_deref().map_or(Ok(1), parse_page)?;
    let result = read_analysis(&input)?;
    info!(
        map = %result.map_name,
        players = result.players.len(),
        events = result.events.len(),
        "Analysis loaded"
    );

    // 4. Aggregate and print.
    let mut views = aggregate(&result, &config);
    if page != 1 {
        let build_log = BuildLog::new(&result.events, &result.players, config.pagination.page_size);
        views.build_log = build_log.page(page);
    }
    info!(
        axis_points = views.cumulative.axis.len(),
        series = views.cumulative.series.len(),
        build_log_page = views.build_log.page,
        build_log_pages = views.build_log.page_count,
        "Aggregation complete"
    );
    println!("{}", serde_json::to_string_pretty(&views)?);

    Ok(())
}

/// Load configuration from `REPLAY_CONFIG`, then `replay-config.yaml`.
///
/// A missing default file falls back to built-in defaults. A path named
/// explicitly through `REPLAY_CONFIG` must exist.
fn load_config() -> Result<(EngineConfig, String), ReportError> {
    if let Some(path) = std::env::var_os("REPLAY_CONFIG") {
        let path = PathBuf::from(path);
        let config = EngineConfig::from_file(&path)?;
        return Ok((config, path.display().to_string()));
    }

    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        let config = EngineConfig::from_file(config_path)?;
        Ok((config, DEFAULT_CONFIG_PATH.to_owned()))
    } else {
        Ok((EngineConfig::default(), "defaults".to_owned()))
    }
}

/// Parse the 1-indexed build-log page argument.
///
/// Pages past the end are accepted and come back empty.
fn parse_page(arg: &OsStr) -> Result<usize, ReportError> {
    let invalid = || ReportError::InvalidPage {
        value: arg.to_string_lossy().into_owned(),
    };
    let text = arg.to_str().ok_or_else(invalid)?;
    match text.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(invalid()),
    }
}

/// Read and parse an analysis document; `-` reads stdin.
fn read_analysis(path: &Path) -> Result<AnalysisResult, ReportError> {
    let io_error = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(io_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_argument_parses_positive_numbers() {
        assert!(matches!(parse_page(OsStr::new("1")), Ok(1)));
        assert!(matches!(parse_page(OsStr::new("42")), Ok(42)));
    }

    #[test]
    fn page_argument_rejects_zero_and_text() {
        for bad in ["0", "-3", "two", ""] {
            let result = parse_page(OsStr::new(bad));
            assert!(
                matches!(result, Err(ReportError::InvalidPage { ref value }) if value == bad),
                "{bad} was accepted"
            );
        }
    }
}
