// validation.rs - Input validation utilities

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use regex::Regex;
use crate::cli::args::Args;

pub struct ValidationResult {
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
    pub include_set: Option<HashSet<String>>,
    pub exclude_set: Option<HashSet<String>>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate output format
    match args.format.to_lowercase().as_str() {
        "text" | "json" => {}
        other => {
            return Err(format!(
                "Unsupported output format: {}. Use: text, json",
                other
            ))
        }
    }

    // Validate mode combinations
    if args.stats_only && args.dry_run {
        return Err("--stats-only and --dry-run are mutually exclusive".to_string());
    }
    if args.stats_only && args.output.is_some() {
        return Err("--output is not compatible with --stats-only (statistics go to stdout)".to_string());
    }

    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err("--threads must be at least 1".to_string());
        }
    }

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_records regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_records regex: {}", e))?)
    } else {
        None
    };

    // Load filter sets from files
    let include_set = if let Some(file_path) = &args.include_records_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    let exclude_set = if let Some(file_path) = &args.exclude_records_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    Ok(ValidationResult {
        include_regex,
        exclude_regex,
        include_set,
        exclude_set,
    })
}

/// Load a set of strings from a file (one per line)
fn load_set_from_file(file_path: &str) -> Result<HashSet<String>, String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open filter file '{}': {}", file_path, e))?;

    let reader = BufReader::new(file);
    let mut set = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            format!(
                "Failed to read line {} from '{}': {}",
                line_num + 1,
                file_path,
                e
            )
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            set.insert(trimmed.to_string());
        }
    }

    eprintln!("📋 Loaded {} items from filter file '{}'", set.len(), file_path);
    Ok(set)
}
