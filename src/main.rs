//! flattree - flatten directory trees into single annotated text files.
//!
//! Usage:
//!   flattree [PATH]           Flatten one tree to source-<name>.txt
//!   flattree plan <FILE>      Run a JSON plan of several targets
//!   flattree --help           Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use compact_str::CompactString;
use tracing_subscriber::EnvFilter;

use flattree_core::{FlattenConfig, FlattenPlan, FlattenReport, RootPolicy};
use flattree_flatten::{TreeFlattener, run_plan};

#[derive(Parser)]
#[command(
    name = "flattree",
    version,
    about = "Flatten directory trees into single annotated text files",
    long_about = "flattree walks a directory tree, reads every text file under it, and \
                  concatenates the contents (each prefixed with its relative path) into \
                  one source-<name>.txt snapshot.\n\n\
                  Run `flattree [PATH]` for a single tree, or `flattree plan <FILE>` to \
                  process several roots from a JSON plan file."
)]
struct Cli {
    /// Root directory to flatten (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output name; the document is written to source-<NAME>.txt
    /// (defaults to the root directory's name)
    #[arg(short, long)]
    name: Option<String>,

    /// File names to skip wherever they appear
    /// (replaces the default set when given)
    #[arg(short = 'x', long = "exclude")]
    excluded: Vec<String>,

    /// Directory the output file is written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Keep filesystem traversal order instead of sorting by path
    #[arg(long)]
    no_sort: bool,

    /// Maximum depth to traverse
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,

    /// Output format for the run summary
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a JSON plan file of flatten targets, strictly in order
    Plan {
        /// Plan file: {"targets": [{"root": ..., "output_name": ...}, ...]}
        file: PathBuf,

        /// Skip targets whose root is missing instead of aborting
        #[arg(short, long)]
        keep_going: bool,

        /// Output format for the run summary
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Plan {
            file,
            keep_going,
            format,
        }) => {
            run_plan_file(&file, keep_going, format)?;
        }
        None => {
            run_single(&cli)?;
        }
    }

    Ok(())
}

/// Flatten one root from CLI flags.
fn run_single(cli: &Cli) -> Result<()> {
    let root = cli.path.canonicalize().context("Invalid path")?;

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "root".to_string()),
    };

    let mut builder = FlattenConfig::builder();
    builder
        .root(&root)
        .output_name(name.as_str())
        .output_dir(&cli.out_dir)
        .sort_entries(!cli.no_sort)
        .max_depth(cli.max_depth);
    if !cli.excluded.is_empty() {
        builder.excluded_names(
            cli.excluded
                .iter()
                .map(|n| CompactString::new(n))
                .collect::<Vec<_>>(),
        );
    }
    let config = builder.build().map_err(|e| eyre!(e.to_string()))?;

    eprintln!("Flattening {}...", root.display());

    let report = TreeFlattener::new()
        .flatten(&config)
        .context("Flatten failed")?;

    match cli.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Run a JSON plan file of several targets sequentially.
fn run_plan_file(file: &PathBuf, keep_going: bool, format: OutputFormat) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read plan file {}", file.display()))?;
    let mut plan: FlattenPlan = serde_json::from_str(&text).context("Invalid plan file")?;

    if keep_going {
        plan.on_bad_root = RootPolicy::Skip;
    }

    eprintln!("Running plan with {} target(s)...", plan.targets.len());

    let outcome = run_plan(&plan).context("Plan failed")?;

    match format {
        OutputFormat::Text => {
            for report in &outcome.reports {
                print_report(report);
            }
            if !outcome.failures.is_empty() {
                println!();
                println!("{} root(s) skipped:", outcome.failures.len());
                for failure in &outcome.failures {
                    println!("  {}: {}", failure.root.display(), failure.error);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    if outcome.reports.is_empty() && !outcome.failures.is_empty() {
        return Err(eyre!("No target produced an output file"));
    }

    Ok(())
}

/// Print a run summary.
fn print_report(report: &FlattenReport) {
    println!();
    println!("{}", "─".repeat(60));
    println!(
        " {} -> {}",
        report.root_path.display(),
        report.output_path.display()
    );
    println!(
        " {} files flattened, {} excluded, {} skipped",
        report.stats.files_flattened, report.stats.files_excluded, report.stats.files_skipped
    );
    println!(
        " {} read across {} directories, document {}",
        format_size(report.stats.bytes_read),
        report.stats.dirs_visited,
        format_size(report.document_len)
    );
    println!(" Flattened in {:.2}s", report.duration.as_secs_f64());
    println!("{}", "─".repeat(60));

    if report.has_warnings() {
        println!();
        println!("{} file(s) skipped during flatten", report.warnings.len());
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
