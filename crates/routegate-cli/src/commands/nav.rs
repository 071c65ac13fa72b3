use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use routegate::{nav_entries, RouteTable};

pub fn execute(table_path: &Path, json: bool) -> Result<()> {
    let routes = RouteTable::load(table_path)?.into_descriptors()?;
    let nav = nav_entries(&routes);

    if json {
        println!("{}", serde_json::to_string_pretty(&nav)?);
        return Ok(());
    }

    println!("{}", "Navigation manifest".green().bold());
    println!();

    for entry in &nav {
        let access = if entry.admin_only {
            "admin".red().to_string()
        } else if entry.requires_auth {
            "auth".yellow().to_string()
        } else {
            "public".to_string()
        };

        if entry.label.is_empty() {
            println!("  {} {} [{}]", "(unlabelled)".dimmed(), entry.path.cyan(), access);
        } else {
            println!("  {} {} [{}]", entry.label, entry.path.cyan(), access);
        }
    }

    println!();
    println!("{} page(s)", nav.len());

    Ok(())
}
