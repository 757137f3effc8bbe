//! Configuration loading and typed config structures for the aggregation
//! engine.
//!
//! The configuration lives in `replay-config.yaml`. Every field has a
//! default, so an empty file (or no file at all) yields the stock engine:
//! pages of 10, a 50-mineral seed, the single-entry cost table, and the
//! built-in `v1` palette.

use std::path::Path;

use serde::Deserialize;

use replay_ledger::{CostEntry, CostTable, LedgerSettings};

use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::palette::{NamedPalette, is_hex_color};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `replay-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Build-log paging.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Resource seed, clamping, and cost model.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Cumulative chart options.
    #[serde(default)]
    pub cumulative: CumulativeConfig,

    /// Color palette.
    #[serde(default)]
    pub palette: NamedPalette,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero page size or a palette
    /// color that is not `#rrggbb`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "pagination.page_size".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if let Some(bad) = self.palette.colors.iter().find(|c| !is_hex_color(&c.hex)) {
            return Err(ConfigError::Invalid {
                field: format!("palette.colors[{}]", bad.name),
                reason: format!("'{}' is not a #rrggbb color", bad.hex),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Build-log paging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Events per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Resource ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Minerals every player starts with.
    #[serde(default = "default_initial_minerals")]
    pub initial_minerals: i64,

    /// Gas every player starts with.
    #[serde(default)]
    pub initial_gas: i64,

    /// Floor balances at zero.
    #[serde(default)]
    pub clamp_at_zero: bool,

    /// Priced actions. Later entries override earlier ones for the same key.
    #[serde(default = "CostTable::default_entries")]
    pub costs: Vec<CostEntry>,
}

impl LedgerConfig {
    /// Seed and clamping policy.
    pub const fn settings(&self) -> LedgerSettings {
        LedgerSettings {
            initial_minerals: self.initial_minerals,
            initial_gas: self.initial_gas,
            clamp_at_zero: self.clamp_at_zero,
        }
    }

    /// The cost table built from `costs`.
    pub fn cost_table(&self) -> CostTable {
        CostTable::from_entries(&self.costs)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_minerals: default_initial_minerals(),
            initial_gas: 0,
            clamp_at_zero: false,
            costs: CostTable::default_entries(),
        }
    }
}

/// Cumulative chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CumulativeConfig {
    /// Emit upgrade, tech, and cancel series even when empty.
    #[serde(default)]
    pub include_empty_series: bool,

    /// Last second the time axis may reach. Later events still count in
    /// every other view but fall off the cumulative chart.
    #[serde(default = "default_max_axis_seconds")]
    pub max_axis_seconds: u32,
}

impl Default for CumulativeConfig {
    fn default() -> Self {
        Self {
            include_empty_series: false,
            max_axis_seconds: default_max_axis_seconds(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_initial_minerals() -> i64 {
    50
}

/// Six hours.
const fn default_max_axis_seconds() -> u32 {
    21_600
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_types::CanonicalKind;

    use crate::palette::ColorResolver;

    #[test]
    fn defaults_match_stock_engine() {
        let config = EngineConfig::default();
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.ledger.settings(), LedgerSettings::default());
        assert_eq!(config.ledger.cost_table(), CostTable::default());
        assert!(!config.cumulative.include_empty_series);
        assert_eq!(config.cumulative.max_axis_seconds, 21_600);
        assert_eq!(config.palette, NamedPalette::builtin());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = EngineConfig::parse("");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r##"
pagination:
  page_size: 25
ledger:
  initial_minerals: 75
  initial_gas: 10
  clamp_at_zero: true
  costs:
    - { kind: Train, action: Marine, minerals: 50 }
    - { kind: Build, action: Barracks, minerals: 150 }
    - { kind: Tech, action: Stim Packs, minerals: 100, gas: 100 }
cumulative:
  include_empty_series: true
  max_axis_seconds: 3600
palette:
  version: custom-1
  colors:
    - { name: Red, hex: "#ff0000" }
    - { name: Blue, hex: "#0000ff" }
logging:
  level: debug
  json: true
"##;
        let config = EngineConfig::parse(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.ledger.settings().seed().minerals, 75);
        assert!(config.ledger.clamp_at_zero);
        let costs = config.ledger.cost_table();
        assert_eq!(costs.len(), 3);
        let stim = costs.lookup(CanonicalKind::Tech, "Stim Packs");
        assert_eq!(stim.map(|c| c.gas), Some(100));
        assert!(config.cumulative.include_empty_series);
        assert_eq!(config.cumulative.max_axis_seconds, 3600);
        assert_eq!(config.palette.version, "custom-1");
        assert_eq!(config.palette.resolve("blue"), Some("#0000ff"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn partial_palette_section_keeps_builtin_colors() {
        let config = EngineConfig::parse("palette:\n  version: v1\n");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        assert_eq!(config.palette, NamedPalette::builtin());
    }

    #[test]
    fn empty_cost_list_prices_nothing() {
        let config = EngineConfig::parse("ledger:\n  costs: []\n");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        assert!(config.ledger.cost_table().is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = EngineConfig::parse("pagination:\n  page_size: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { ref field, .. }) if field == "pagination.page_size"
        ));
    }

    #[test]
    fn malformed_palette_hex_is_rejected() {
        let yaml = "palette:\n  colors:\n    - { name: Red, hex: \"red\" }\n";
        let result = EngineConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = EngineConfig::parse("pagination: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = EngineConfig::from_file(Path::new("/nonexistent/replay-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("replay-config.yaml");
        if path.exists() {
            let config = EngineConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
