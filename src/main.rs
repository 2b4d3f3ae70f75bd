// main.rs - CLI entry point

use std::collections::HashSet;
use std::time::Instant;
use uniqsub::cli::Config;
use uniqsub::data::SequenceCollection;
use uniqsub::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        eprintln!("💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    eprintln!("🚀 uniqsub v{}", env!("CARGO_PKG_VERSION"));

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .expect("Failed to configure thread pool");
        eprintln!("🧵 Threads: {}", n);
    } else {
        eprintln!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    let total_start = Instant::now();

    // Load, clean and filter the record collection
    let collection = SequenceCollection::load(
        args.input.as_deref(),
        &args.gap_chars,
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
        validation_result.include_set.as_ref(),
        validation_result.exclude_set.as_ref(),
    )?;

    if args.dry_run {
        eprintln!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Stage 1: substring universes, one per record
    let stage_start = Instant::now();
    let universes = build_universes(&collection.records);
    let total_fragments: usize = universes.iter().map(|u| u.len()).sum();
    eprintln!(
        "🧩 Universes built: {} fragments across {} records ({:.2}s)",
        total_fragments,
        collection.len(),
        stage_start.elapsed().as_secs_f64()
    );

    // Stage 2: cross-sequence uniqueness
    let stage_start = Instant::now();
    let uniques = unique_sets(&universes);
    eprintln!(
        "🔎 Unique sets computed ({:.2}s)",
        stage_start.elapsed().as_secs_f64()
    );

    // Stage 3: minimization
    let stage_start = Instant::now();
    let minimals = minimize_all(&uniques);
    eprintln!(
        "✂️  Minimal sets computed ({:.2}s)",
        stage_start.elapsed().as_secs_f64()
    );

    if args.stats_only {
        print_substring_statistics(&collection, &universes, &uniques, &minimals);
        eprintln!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
        return Ok(());
    }

    // Stage 4: alignment rendering
    write_report(
        args.output.as_deref(),
        &args.format,
        &collection.records,
        &minimals,
    )?;

    eprintln!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Per-record counts for --stats-only mode
fn print_substring_statistics(
    collection: &SequenceCollection,
    universes: &[HashSet<String>],
    uniques: &[HashSet<String>],
    minimals: &[HashSet<String>],
) {
    println!("index\tid\tlength\tuniverse\tunique\tminimal");
    for record in &collection.records {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.index,
            record.id(),
            record.sequence.len(),
            universes[record.index].len(),
            uniques[record.index].len(),
            minimals[record.index].len()
        );
    }
}
