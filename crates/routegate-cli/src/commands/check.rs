use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use routegate::{nav_entries, RouteTable};

pub fn execute(table_path: &Path) -> Result<()> {
    println!("{}", "Checking route table...".green().bold());
    println!();

    let table = RouteTable::load(table_path)?;
    println!("  {} TOML parsed", "✓".green());

    let routes = table.into_descriptors()?;
    println!("  {} Access flags valid", "✓".green());

    let nav = nav_entries(&routes);
    let unlabelled = nav.iter().filter(|entry| entry.label.is_empty()).count();
    if unlabelled > 0 {
        println!("  {} {} route(s) without a label", "⚠".yellow(), unlabelled);
    }

    println!();
    println!(
        "{}",
        format!("Route table OK ({} route(s), {} top-level)", nav.len(), routes.len())
            .green()
            .bold()
    );

    Ok(())
}
