use std::path::PathBuf;

use clap::Args;

use crate::catalog::films::DEFAULT_FILM_LIST;
use crate::catalog::scripts::DEFAULT_SCRIPT_DIR;
use crate::catalog::{load_films, load_scripts, TitleIndex};
use crate::cli::OutputFormat;
use crate::matching::{CrossrefEngine, CrossrefReport};
use crate::report::{write_snapshot, ReportSnapshot, DEFAULT_REPORT_PATH};

/// Number of example matched pairs shown in the text summary
const EXAMPLE_MATCHES: usize = 5;

#[derive(Args)]
pub struct CrossrefArgs {
    /// Path to the film list (JSON array of titles)
    #[arg(long, default_value = DEFAULT_FILM_LIST)]
    pub films: PathBuf,

    /// Directory of parsed script documents
    #[arg(long, default_value = DEFAULT_SCRIPT_DIR)]
    pub scripts: PathBuf,

    /// Where to write the JSON report
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Skip writing the report file
    #[arg(long)]
    pub no_save: bool,
}

/// Execute crossref subcommand
///
/// # Errors
///
/// Returns an error if either catalog cannot be loaded or the report cannot
/// be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CrossrefArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let film_list = load_films(&args.films)?;
    let script_list = load_scripts(&args.scripts)?;

    if verbose {
        eprintln!(
            "Loaded {} films from {}",
            film_list.len(),
            args.films.display()
        );
        eprintln!(
            "Loaded {} scripts from {}",
            script_list.len(),
            args.scripts.display()
        );
    }

    let films = TitleIndex::from_identifiers(film_list);
    let scripts = TitleIndex::from_identifiers(script_list);

    if films.is_empty() {
        eprintln!("Warning: Film list is empty, every script will be unmatched.");
    }

    let report = CrossrefEngine::new(&films, &scripts).run();
    let snapshot = ReportSnapshot::from_report(&report);

    match format {
        OutputFormat::Text => print_text_summary(&report),
        OutputFormat::Json => println!("{}", snapshot.to_json()?),
    }

    if args.no_save {
        return Ok(());
    }

    write_snapshot(&args.output, &snapshot)?;
    if matches!(format, OutputFormat::Text) {
        println!("Report saved: {}", args.output.display());
    }

    Ok(())
}

fn print_text_summary(report: &CrossrefReport) {
    let summary = &report.summary;

    println!("Cross-reference results");
    println!("{}", "─".repeat(60));
    println!("  Films loaded:        {}", summary.total_films);
    println!("  Scripts loaded:      {}", summary.total_scripts);
    println!("  Matches found:       {}", summary.matches_found);
    println!("  Match percentage:    {:.1}%", summary.match_percentage);
    println!("  Scripts without film: {}", report.unmatched_scripts.len());
    println!("  Films without script: {}", report.unmatched_films.len());

    if summary.film_collisions > 0 || summary.script_collisions > 0 {
        println!(
            "  Key collisions:      {} film, {} script",
            summary.film_collisions, summary.script_collisions
        );
    }

    if !report.matches.is_empty() {
        println!("\nExample matches:");
        for record in report.matches.iter().take(EXAMPLE_MATCHES) {
            println!("  {} <-> {}", record.script, record.film);
        }
    }

    println!();
}
