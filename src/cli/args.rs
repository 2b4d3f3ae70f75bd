// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// uniqsub - Minimal unique substring finder for sequence collections
pub struct Args {
    /// path to FASTA input file (default: read from stdin)
    #[argh(option)]
    pub input: Option<String>,

    /// output report file (default: write to stdout)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: text, json (default: text)
    #[argh(option, default = "String::from(\"text\")")]
    pub format: String,

    /// alignment-gap characters stripped from sequences (default: -_)
    #[argh(option, default = "String::from(\"-_\")")]
    pub gap_chars: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// include only records whose header matches regex pattern
    #[argh(option)]
    pub include_records: Option<String>,

    /// exclude records whose header matches regex pattern
    #[argh(option)]
    pub exclude_records: Option<String>,

    /// include only records whose ID is listed in a file (one ID per line)
    #[argh(option)]
    pub include_records_list: Option<String>,

    /// exclude records whose ID is listed in a file (one ID per line)
    #[argh(option)]
    pub exclude_records_list: Option<String>,

    /// show per-record substring statistics only, skip the report
    #[argh(switch)]
    pub stats_only: bool,

    /// validate and load inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
