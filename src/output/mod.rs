// mod.rs - Alignment rendering and report output

use std::collections::HashSet;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use serde::Serialize;
use crate::data::SequenceRecord;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Character offset of the leftmost occurrence of `fragment` in `sequence`.
/// Scans every start position left to right and compares the slice of
/// matching length, so the offset counts characters, not bytes.
pub fn first_occurrence(sequence: &str, fragment: &str) -> Option<usize> {
    if fragment.is_empty() {
        return None;
    }
    let mut position = 0;
    let mut rest = sequence;
    loop {
        if rest.starts_with(fragment) {
            return Some(position);
        }
        let mut chars = rest.chars();
        chars.next()?;
        rest = chars.as_str();
        position += 1;
    }
}

/// Locate every minimal substring of a record at its first occurrence.
///
/// A minimal substring that cannot be found in its own record's sequence
/// violates the pipeline invariants and is reported as a hard error, never
/// skipped. Fragments are ordered by first-occurrence offset, then length,
/// then lexicographically, so rendered output is reproducible.
pub fn aligned_fragments<'a>(
    record: &SequenceRecord,
    minimal: &'a HashSet<String>,
) -> Result<Vec<(usize, &'a str)>, String> {
    let mut fragments: Vec<(usize, &str)> = Vec::with_capacity(minimal.len());

    for fragment in minimal {
        let offset = first_occurrence(&record.sequence, fragment).ok_or_else(|| {
            format!(
                "Internal consistency error: minimal substring '{}' not found in record {} ('{}')",
                fragment, record.index, record.header
            )
        })?;
        fragments.push((offset, fragment.as_str()));
    }

    fragments.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.len().cmp(&b.1.len()))
            .then(a.1.cmp(b.1))
    });
    Ok(fragments)
}

/// Render one record's output block: header line, cleaned sequence line,
/// then one dot-padded line per minimal substring.
pub fn render_block(
    record: &SequenceRecord,
    minimal: &HashSet<String>,
) -> Result<Vec<String>, String> {
    let mut lines = Vec::with_capacity(minimal.len() + 2);
    lines.push(record.header.clone());
    lines.push(record.sequence.clone());

    for (offset, fragment) in aligned_fragments(record, minimal)? {
        lines.push(format!("{}{}", ".".repeat(offset), fragment));
    }
    Ok(lines)
}

/// Write the plain-text report: one block per record, in collection order,
/// with no decoration beyond the blocks themselves.
pub fn write_text<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
    minimal_sets: &[HashSet<String>],
) -> Result<(), String> {
    for (record, minimal) in records.iter().zip(minimal_sets) {
        for line in render_block(record, minimal)? {
            writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
        }
    }
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

#[derive(Serialize)]
struct ReportMetadata {
    version: String,
    generated: String,
    total_records: usize,
}

#[derive(Serialize)]
struct FragmentReport<'a> {
    substring: &'a str,
    offset: usize,
}

#[derive(Serialize)]
struct RecordReport<'a> {
    index: usize,
    header: &'a str,
    sequence: &'a str,
    unique: Vec<FragmentReport<'a>>,
}

#[derive(Serialize)]
struct Report<'a> {
    metadata: ReportMetadata,
    records: Vec<RecordReport<'a>>,
}

/// Write the JSON report with run metadata
pub fn write_json<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
    minimal_sets: &[HashSet<String>],
) -> Result<(), String> {
    let mut record_reports = Vec::with_capacity(records.len());
    for (record, minimal) in records.iter().zip(minimal_sets) {
        let unique = aligned_fragments(record, minimal)?
            .into_iter()
            .map(|(offset, substring)| FragmentReport { substring, offset })
            .collect();
        record_reports.push(RecordReport {
            index: record.index,
            header: &record.header,
            sequence: &record.sequence,
            unique,
        });
    }

    let report = Report {
        metadata: ReportMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated: chrono::Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            total_records: records.len(),
        },
        records: record_reports,
    };

    serde_json::to_writer_pretty(&mut *writer, &report)
        .map_err(|e| format!("Failed to serialize JSON report: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

/// Write the report in the specified format, to a file or stdout
pub fn write_report(
    output: Option<&str>,
    format: &str,
    records: &[SequenceRecord],
    minimal_sets: &[HashSet<String>],
) -> Result<(), String> {
    match output {
        Some(file_path) => {
            ensure_parent_dir(file_path)?;
            let file = File::create(file_path)
                .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
            let mut writer = BufWriter::new(file);
            dispatch_format(&mut writer, format, records, minimal_sets)?;
            eprintln!("✅ Report written to: {}", file_path);
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            dispatch_format(&mut writer, format, records, minimal_sets)
        }
    }
}

fn dispatch_format<W: Write>(
    writer: &mut W,
    format: &str,
    records: &[SequenceRecord],
    minimal_sets: &[HashSet<String>],
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "text" => write_text(writer, records, minimal_sets),
        "json" => write_json(writer, records, minimal_sets),
        _ => Err(format!(
            "Unsupported output format: {}. Use: text, json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, header: &str, sequence: &str) -> SequenceRecord {
        SequenceRecord::new(index, header.to_string(), sequence.to_string())
    }

    fn set_of(fragments: &[&str]) -> HashSet<String> {
        fragments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_basic() {
        assert_eq!(first_occurrence("ABABC", "BC"), Some(3));
        assert_eq!(first_occurrence("ABABC", "A"), Some(0));
        assert_eq!(first_occurrence("ABABC", "ABABC"), Some(0));
        assert_eq!(first_occurrence("ABABC", "ZZ"), None);
    }

    #[test]
    fn test_first_occurrence_is_leftmost() {
        // "AB" occurs at offsets 0 and 2; only the leftmost is reported
        assert_eq!(first_occurrence("ABAB", "AB"), Some(0));
        assert_eq!(first_occurrence("XABAB", "AB"), Some(1));
    }

    #[test]
    fn test_first_occurrence_empty_inputs() {
        assert_eq!(first_occurrence("", "A"), None);
        assert_eq!(first_occurrence("A", ""), None);
    }

    #[test]
    fn test_render_dot_padding() {
        let rec = record(0, "trna1", "ABABC");
        let lines = render_block(&rec, &set_of(&["BC"])).unwrap();
        assert_eq!(lines, vec!["trna1", "ABABC", "...BC"]);
    }

    #[test]
    fn test_render_order_offset_then_length_then_lexicographic() {
        let rec = record(0, "trna1", "TGA");
        // "T" and "TG" share offset 0; "GA" starts at 1
        let lines = render_block(&rec, &set_of(&["TG", "GA", "T"])).unwrap();
        assert_eq!(lines, vec!["trna1", "TGA", "T", "TG", ".GA"]);
    }

    #[test]
    fn test_render_empty_minimal_set() {
        // Identical records end up with empty minimal sets: header and
        // sequence only, zero alignment lines
        let rec = record(1, "trna2", "GCGC");
        let lines = render_block(&rec, &HashSet::new()).unwrap();
        assert_eq!(lines, vec!["trna2", "GCGC"]);
    }

    #[test]
    fn test_unlocatable_fragment_is_hard_error() {
        let rec = record(3, "trna4 Homo sapiens", "ACGT");
        let err = render_block(&rec, &set_of(&["TT"])).unwrap_err();
        assert!(err.contains("Internal consistency error"));
        assert!(err.contains("record 3"));
        assert!(err.contains("trna4 Homo sapiens"));
    }

    #[test]
    fn test_write_text_blocks_in_collection_order() {
        let records = vec![record(0, "first", "AC"), record(1, "second", "GT")];
        let minimal_sets = vec![set_of(&["C"]), set_of(&["G"])];

        let mut buffer = Vec::new();
        write_text(&mut buffer, &records, &minimal_sets).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "first\nAC\n.C\nsecond\nGT\nG\n");
    }

    #[test]
    fn test_write_json_report_shape() {
        let records = vec![record(0, "trna1", "ABABC")];
        let minimal_sets = vec![set_of(&["BC"])];

        let mut buffer = Vec::new();
        write_json(&mut buffer, &records, &minimal_sets).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(report["metadata"]["total_records"], 1);
        assert_eq!(report["records"][0]["header"], "trna1");
        assert_eq!(report["records"][0]["sequence"], "ABABC");
        assert_eq!(report["records"][0]["unique"][0]["substring"], "BC");
        assert_eq!(report["records"][0]["unique"][0]["offset"], 3);
    }

    #[test]
    fn test_dispatch_rejects_unknown_format() {
        let mut buffer = Vec::new();
        let err = dispatch_format(&mut buffer, "phylip", &[], &[]).unwrap_err();
        assert!(err.contains("Unsupported output format"));
    }

    #[test]
    fn test_pipeline_single_record_reduces_to_distinct_characters() {
        // Single-record collection: the full universe survives subtraction,
        // and minimization reduces it to the distinct single characters
        use crate::core::{build_universes, minimize_all, unique_sets};

        let records = vec![record(0, "only", "ABABC")];
        let universes = build_universes(&records);
        let uniques = unique_sets(&universes);
        let minimals = minimize_all(&uniques);

        assert_eq!(minimals[0], set_of(&["A", "B", "C"]));

        let lines = render_block(&records[0], &minimals[0]).unwrap();
        assert_eq!(lines, vec!["only", "ABABC", "A", ".B", "....C"]);
    }
}
