use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use routegate::{build_route_tree, RouteNode, RouteTable};

// Marker boundary: gated content "X" prints as "auth(X)"
fn gate(content: String) -> String {
    format!("auth({content})")
}

pub fn execute(table_path: &Path, json: bool) -> Result<()> {
    let routes = RouteTable::load(table_path)?.into_descriptors()?;
    let tree = build_route_tree(&routes, &gate);

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    println!("{}", "Route tree".green().bold());
    println!();
    print_nodes(&tree, 0);
    println!();
    println!("{} top-level route(s)", tree.len());

    Ok(())
}

fn print_nodes(nodes: &[RouteNode<String>], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth + 1);
        println!("{}{} {} {}", indent, node.path.cyan(), "->".dimmed(), node.content);

        if let Some(children) = &node.children {
            print_nodes(children, depth + 1);
        }
    }
}
