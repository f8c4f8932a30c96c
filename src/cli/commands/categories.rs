//! Categories command implementation

use colored::*;

use crate::app::services::categories::CATEGORIES;
use crate::cli::args::{CategoriesArgs, OutputFormat};
use crate::{Error, Result};

/// Categories command runner
pub fn run_categories(args: CategoriesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => print_human_table(),
        OutputFormat::Json => print_json_table()?,
    }
    Ok(())
}

fn print_human_table() {
    println!();
    println!("{}", "Marker Categories".bold());
    println!("{}", "=================".bold());
    println!();

    for category in CATEGORIES {
        println!(
            "  {}  {:<12} {}",
            category.symbol,
            category.name.cyan(),
            category.label
        );
    }

    println!();
    println!("  {} categories", CATEGORIES.len());
    println!();
}

fn print_json_table() -> Result<()> {
    let json = serde_json::to_string_pretty(CATEGORIES)
        .map_err(|e| Error::output("Failed to serialize categories", Box::new(e)))?;
    println!("{}", json);
    Ok(())
}
