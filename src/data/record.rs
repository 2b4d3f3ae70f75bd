// record.rs - Sequence records and FASTA collection loading

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use bio::io::fasta;
use regex::Regex;

/// A single input record: header and cleaned sequence text, indexed by its
/// position in the (filtered) collection. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub index: usize,
    pub header: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(index: usize, header: String, sequence: String) -> Self {
        Self {
            index,
            header,
            sequence,
        }
    }

    /// First whitespace-delimited token of the header (the FASTA ID)
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

/// Ordered collection of sequence records, built once per run
#[derive(Debug, Default)]
pub struct SequenceCollection {
    pub records: Vec<SequenceRecord>,
}

/// Strip alignment-gap characters (default `-` and `_`) from raw sequence
/// text before it reaches the core pipeline.
pub fn clean_sequence(raw: &str, gap_chars: &str) -> String {
    raw.chars().filter(|c| !gap_chars.contains(*c)).collect()
}

impl SequenceCollection {
    /// Load a collection from a FASTA file, or from stdin when no path is
    /// given. Records are cleaned and filtered here; indices are assigned
    /// in the order records survive filtering, so the core only ever sees
    /// the final collection.
    ///
    /// Regex filters match against the full header; list filters match the
    /// FASTA ID (first whitespace-delimited token) exactly.
    #[allow(clippy::too_many_arguments)]
    pub fn load(
        input: Option<&str>,
        gap_chars: &str,
        include_regex: Option<&Regex>,
        exclude_regex: Option<&Regex>,
        include_set: Option<&HashSet<String>>,
        exclude_set: Option<&HashSet<String>>,
    ) -> Result<Self, String> {
        let raw_records = match input {
            Some(path) => {
                eprintln!("🧬 Loading FASTA records from file: {}", path);
                if !Path::new(path).is_file() {
                    return Err(format!("Input file does not exist: {}", path));
                }
                let file = File::open(path)
                    .map_err(|e| format!("Failed to open FASTA file {}: {}", path, e))?;
                Self::read_records(fasta::Reader::new(BufReader::new(file)), path)?
            }
            None => {
                eprintln!("🧬 Loading FASTA records from stdin");
                Self::read_records(fasta::Reader::new(BufReader::new(io::stdin())), "<stdin>")?
            }
        };

        if raw_records.is_empty() {
            return Err("No FASTA records found in input".to_string());
        }
        let total_read = raw_records.len();

        let mut kept: Vec<(String, String)> = Vec::new();
        for (header, sequence) in raw_records {
            if Self::record_passes(&header, include_regex, exclude_regex, include_set, exclude_set)
            {
                kept.push((header, sequence));
            }
        }

        if kept.is_empty() {
            return Err(format!(
                "No records left after filtering ({} read from input)",
                total_read
            ));
        }

        let records: Vec<SequenceRecord> = kept
            .into_iter()
            .enumerate()
            .map(|(index, (header, raw_sequence))| {
                let sequence = clean_sequence(&raw_sequence, gap_chars);
                SequenceRecord::new(index, header, sequence)
            })
            .collect();

        let collection = Self { records };
        collection.print_statistics(total_read);
        Ok(collection)
    }

    /// Read (header, raw sequence) pairs in file order
    fn read_records<B: io::BufRead>(
        reader: fasta::Reader<B>,
        source: &str,
    ) -> Result<Vec<(String, String)>, String> {
        let mut raw_records = Vec::new();

        for (record_num, record_result) in reader.records().enumerate() {
            let record = record_result
                .map_err(|e| format!("Invalid FASTA record {} in {}: {}", record_num + 1, source, e))?;

            if record.id().is_empty() {
                return Err(format!(
                    "Record {} in {} is missing a header",
                    record_num + 1,
                    source
                ));
            }

            let header = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };

            let sequence = String::from_utf8(record.seq().to_vec()).map_err(|_| {
                format!(
                    "Record {} ('{}') in {} contains non-UTF-8 sequence data",
                    record_num + 1,
                    record.id(),
                    source
                )
            })?;

            raw_records.push((header, sequence));
        }

        Ok(raw_records)
    }

    fn record_passes(
        header: &str,
        include_regex: Option<&Regex>,
        exclude_regex: Option<&Regex>,
        include_set: Option<&HashSet<String>>,
        exclude_set: Option<&HashSet<String>>,
    ) -> bool {
        let id = header.split_whitespace().next().unwrap_or("");

        if let Some(re) = include_regex {
            if !re.is_match(header) {
                return false;
            }
        }
        if let Some(re) = exclude_regex {
            if re.is_match(header) {
                return false;
            }
        }
        if let Some(set) = include_set {
            if !set.contains(id) {
                return false;
            }
        }
        if let Some(set) = exclude_set {
            if set.contains(id) {
                return false;
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn print_statistics(&self, total_read: usize) {
        let total_residues: usize = self.records.iter().map(|r| r.sequence.len()).sum();
        let empty_sequences = self
            .records
            .iter()
            .filter(|r| r.sequence.is_empty())
            .count();

        eprintln!(
            "📊 Collection: {} records ({} filtered out), {} residues total",
            self.records.len(),
            total_read - self.records.len(),
            total_residues
        );
        if empty_sequences > 0 {
            eprintln!("⚠️  {} record(s) have an empty cleaned sequence", empty_sequences);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_from(content: &'static str) -> fasta::Reader<BufReader<&'static [u8]>> {
        fasta::Reader::new(content.as_bytes())
    }

    #[test]
    fn test_clean_sequence_strips_gap_characters() {
        assert_eq!(clean_sequence("AC-GT_A", "-_"), "ACGTA");
        assert_eq!(clean_sequence("----", "-_"), "");
        assert_eq!(clean_sequence("ACGT", "-_"), "ACGT");
    }

    #[test]
    fn test_clean_sequence_custom_gap_set() {
        assert_eq!(clean_sequence("A.C.G", "."), "ACG");
        // Empty gap set leaves the sequence untouched
        assert_eq!(clean_sequence("A-C", ""), "A-C");
    }

    #[test]
    fn test_read_records_in_file_order() {
        let records = SequenceCollection::read_records(
            reader_from(">trna1 Homo sapiens\nGCAU\n>trna2\nAC\nGU\n"),
            "test",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, "trna1 Homo sapiens");
        assert_eq!(records[0].1, "GCAU");
        // Multi-line sequences are concatenated
        assert_eq!(records[1].0, "trna2");
        assert_eq!(records[1].1, "ACGU");
    }

    #[test]
    fn test_record_id_is_first_token() {
        let record = SequenceRecord::new(0, "trna1 Homo sapiens mito".to_string(), "GC".to_string());
        assert_eq!(record.id(), "trna1");
    }

    #[test]
    fn test_record_filtering() {
        let set: HashSet<String> = ["trna1".to_string()].into_iter().collect();
        let re = Regex::new("sapiens").unwrap();

        assert!(SequenceCollection::record_passes(
            "trna1 Homo sapiens",
            Some(&re),
            None,
            Some(&set),
            None
        ));
        assert!(!SequenceCollection::record_passes(
            "trna2 Mus musculus",
            Some(&re),
            None,
            None,
            None
        ));
        assert!(!SequenceCollection::record_passes(
            "trna1 Homo sapiens",
            None,
            Some(&re),
            None,
            None
        ));
        assert!(!SequenceCollection::record_passes(
            "trna2 Homo sapiens",
            None,
            None,
            Some(&set),
            None
        ));
        assert!(!SequenceCollection::record_passes(
            "trna1 Homo sapiens",
            None,
            None,
            None,
            Some(&set)
        ));
    }
}
