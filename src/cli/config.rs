// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Core settings
    pub gap_chars: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Record filtering
    pub include_records: Option<String>,
    pub exclude_records: Option<String>,
    pub include_records_list: Option<String>,
    pub exclude_records_list: Option<String>,

    // Flags
    pub stats_only: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        eprintln!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        eprintln!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# uniqsub.toml - Configuration file for uniqsub
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to FASTA input file (omit to read from stdin)
input = "/path/to/sequences.fasta"

# Output report file (omit to write to stdout)
output = "report.txt"

# Output format: text, json
format = "text"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Alignment-gap characters stripped from sequences before analysis
gap_chars = "-_"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
threads = 8

# =============================================================================
# RECORD FILTERING
# =============================================================================

# Include only records whose header matches regex pattern
# include_records = "tRNA.*"

# Exclude records whose header matches regex pattern
# exclude_records = "pseudo.*"

# Include only records whose ID is listed in a file (one ID per line)
# include_records_list = "records.txt"

# Exclude records whose ID is listed in a file (one ID per line)
# exclude_records_list = "blacklist.txt"

# =============================================================================
# FLAGS
# =============================================================================

# Show per-record substring statistics only, skip the report
stats_only = false

# Validate and load inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
