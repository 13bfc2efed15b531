use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::films::DEFAULT_FILM_LIST;
use crate::catalog::scripts::DEFAULT_SCRIPT_DIR;
use crate::catalog::{load_films, load_scripts, TitleIndex};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommands,
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List the film catalog
    Films {
        /// Path to the film list (JSON array of titles)
        #[arg(long, default_value = DEFAULT_FILM_LIST)]
        films: PathBuf,
    },

    /// List the script catalog
    Scripts {
        /// Directory of parsed script documents
        #[arg(long, default_value = DEFAULT_SCRIPT_DIR)]
        scripts: PathBuf,
    },
}

/// Execute list subcommand
///
/// # Errors
///
/// Returns an error if the selected catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let index = match args.command {
        ListCommands::Films { films } => TitleIndex::from_identifiers(load_films(&films)?),
        ListCommands::Scripts { scripts } => {
            TitleIndex::from_identifiers(load_scripts(&scripts)?)
        }
    };

    match format {
        OutputFormat::Text => print_text(&index),
        OutputFormat::Json => print_json(&index)?,
    }

    Ok(())
}

fn print_text(index: &TitleIndex) {
    for (key, original) in index.iter() {
        println!("{original}\t{key}");
    }

    println!(
        "\n{} identifiers, {} distinct keys, {} collisions",
        index.raw_count(),
        index.len(),
        index.collisions()
    );
}

fn print_json(index: &TitleIndex) -> anyhow::Result<()> {
    let entries: Vec<serde_json::Value> = index
        .iter()
        .map(|(key, original)| {
            serde_json::json!({
                "identifier": original,
                "normalized": key,
            })
        })
        .collect();

    let output = serde_json::json!({
        "entries": entries,
        "total_identifiers": index.raw_count(),
        "distinct_keys": index.len(),
        "collisions": index.collisions(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
