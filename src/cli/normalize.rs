use clap::Args;

use crate::core::normalize::normalize_key;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Titles to normalize
    #[arg(required = true)]
    pub titles: Vec<String>,
}

/// Execute normalize subcommand
pub fn run(args: &NormalizeArgs) {
    for title in &args.titles {
        println!("{}\t{}", title, normalize_key(title));
    }
}
