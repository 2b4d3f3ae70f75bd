// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "text" && config.format.is_some() {
            self.format = config.format.unwrap();
        }
        if self.gap_chars == "-_" && config.gap_chars.is_some() {
            self.gap_chars = config.gap_chars.unwrap();
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Record filtering
        if self.include_records.is_none() {
            self.include_records = config.include_records;
        }
        if self.exclude_records.is_none() {
            self.exclude_records = config.exclude_records;
        }
        if self.include_records_list.is_none() {
            self.include_records_list = config.include_records_list;
        }
        if self.exclude_records_list.is_none() {
            self.exclude_records_list = config.exclude_records_list;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.stats_only && config.stats_only.unwrap_or(false) {
            self.stats_only = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
