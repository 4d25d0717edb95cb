//! Conjure Icons CLI
//!
//! Usage:
//!   conjure-icons --input <DIRECTORY> --output <DIRECTORY> [OPTIONS]
//!
//! Options:
//!   -i, --input <DIRECTORY>   Input directory containing SVG files
//!   -o, --output <DIRECTORY>  Output directory for generated components
//!   -c, --config <FILE>       Generator configuration (TOML format)
//!   --skip-malformed          Skip icons with malformed markup instead of failing
//!   --dry-run                 List the files that would be written
//!   -v, --verbose             Show debug logging
//!
//! Per-icon progress is logged to stderr as each component is written, so an
//! aborted run still shows what reached the disk. The summary goes to stdout.
//!   -h, --help                Print help

use std::path::PathBuf;

use clap::Parser;

use conjure_icons::{generate_icons, GenerationReport, GeneratorConfig, GeneratorOptions, OnMalformed};

#[derive(Parser)]
#[command(name = "conjure-icons")]
#[command(about = "Generate React Icon components from SVG files", version)]
struct Cli {
    /// Input directory containing SVG files
    #[arg(short, long, value_name = "DIRECTORY")]
    input: PathBuf,

    /// Output directory for generated components
    #[arg(short, long, value_name = "DIRECTORY")]
    output: PathBuf,

    /// Generator configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip icons with malformed markup instead of failing the run
    #[arg(long)]
    skip_malformed: bool,

    /// Print the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };
    if cli.skip_malformed {
        config = config.with_on_malformed(OnMalformed::Skip);
    }

    let options = GeneratorOptions::new(cli.input, cli.output)
        .with_config(config)
        .with_dry_run(cli.dry_run);

    match generate_icons(&options) {
        Ok(report) => {
            for line in summary(&report) {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn log_level(verbose: bool) -> tracing::Level {
    if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

/// Lines printed to stdout once the run has finished
fn summary(report: &GenerationReport) -> Vec<String> {
    let mut lines = Vec::new();
    for skipped in &report.skipped {
        lines.push(format!("✗ Skipped: {} ({})", skipped.file_name, skipped.error));
    }

    if report.dry_run {
        lines.push("Dry run, nothing written. Planned files:".to_string());
        for path in &report.files {
            lines.push(format!("  {}", path.display()));
        }
        lines.push(String::new());
        lines.push(format!("✓ Would generate {} icons", report.generated.len()));
    } else {
        lines.push(format!("✓ Generated {} icons", report.generated.len()));
        lines.push("✓ Created index file".to_string());
        lines.push("✓ Created types file".to_string());
        lines.push("✓ Created icon map".to_string());
    }

    let renamed: Vec<_> = report.renamed().collect();
    if !renamed.is_empty() {
        lines.push(String::new());
        lines.push("Name transformations applied:".to_string());
        for icon in renamed {
            lines.push(format!("  \"{}\" → \"{}\"", icon.original_name, icon.clean_key));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use conjure_icons::normalize;

    fn report(dry_run: bool) -> GenerationReport {
        GenerationReport {
            generated: vec![normalize("home.svg")],
            files: vec![PathBuf::from("out/components/HomeIcon.tsx")],
            dry_run,
            ..GenerationReport::default()
        }
    }

    #[test]
    fn test_default_log_level_is_info() {
        assert_eq!(log_level(false), tracing::Level::INFO);
        assert_eq!(log_level(true), tracing::Level::DEBUG);
    }

    #[test]
    fn test_summary_after_write() {
        let lines = summary(&report(false));
        assert_eq!(lines[0], "✓ Generated 1 icons");
        assert!(lines.contains(&"✓ Created index file".to_string()));
    }

    #[test]
    fn test_dry_run_summary_claims_nothing_created() {
        let lines = summary(&report(true));
        assert!(lines.iter().all(|line| !line.contains("Created")));
        assert!(lines.contains(&"  out/components/HomeIcon.tsx".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("✓ Would generate 1 icons"));
    }
}
