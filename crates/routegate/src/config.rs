// File: src/config.rs
// Purpose: Route table parsing from routes.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{RouteAccess, RouteDescriptor};

/// A route table as declared in TOML
///
/// ```toml
/// [[routes]]
/// path = "/"
/// label = "Main"
/// page = "Main"
/// requires_auth = true
///
/// [[routes]]
/// path = "/login"
/// label = "Login"
/// page = "Login"
/// ```
///
/// `page` and `error_page` are opaque handles: the table never knows how the
/// host renders them. [`RouteTable::into_descriptors`] turns the table into
/// `RouteDescriptor<String>` values carrying those handles as content.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteTable {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One route declaration inside a [`RouteTable`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path pattern
    pub path: String,

    /// Page handle rendered for this route
    pub page: String,

    /// Navigation label (default: empty, hidden from nav UIs)
    #[serde(default)]
    pub label: String,

    /// Page handle rendered when routing to this entry fails
    #[serde(default)]
    pub error_page: Option<String>,

    /// Whether the route requires a signed-in user (default: false)
    #[serde(default = "default_false")]
    pub requires_auth: bool,

    /// Whether the route is restricted to administrators; only valid
    /// together with `requires_auth` (default: false)
    #[serde(default = "default_false")]
    pub admin: bool,

    /// Nested child routes
    #[serde(default)]
    pub children: Vec<RouteEntry>,
}

// Default values
fn default_false() -> bool {
    false
}

impl RouteTable {
    /// Load a route table from a TOML file
    ///
    /// Unlike application settings, a route table has no sensible default:
    /// a missing or unreadable file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to load route table: {:?}", path))
    }

    /// Parse a route table from TOML text
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::RouteTable;
    ///
    /// let table = RouteTable::parse(
    ///     r#"
    ///     [[routes]]
    ///     path = "/"
    ///     page = "Main"
    ///     requires_auth = true
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.routes.len(), 1);
    /// assert!(table.routes[0].requires_auth);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let table: RouteTable =
            toml::from_str(content).context("Failed to parse route table TOML")?;

        tracing::debug!("Parsed route table with {} top-level routes", table.routes.len());
        Ok(table)
    }

    /// Convert the table into route descriptors
    ///
    /// Content is the declared `page` handle. Identifiers are assigned
    /// sequentially in declaration order. Fails when an entry has an empty
    /// `path` or `page`, or sets `admin` without `requires_auth`; the error
    /// names the offending route.
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::{RouteAccess, RouteTable};
    ///
    /// let table = RouteTable::parse(
    ///     r#"
    ///     [[routes]]
    ///     path = "/users"
    ///     page = "Users"
    ///     requires_auth = true
    ///     admin = true
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// let routes = table.into_descriptors().unwrap();
    /// assert_eq!(routes[0].content, "Users");
    /// assert_eq!(routes[0].access, RouteAccess::Admin);
    /// ```
    pub fn into_descriptors(self) -> Result<Vec<RouteDescriptor<String>>> {
        let mut next_id = 0;
        convert_entries(self.routes, &mut next_id)
    }
}

fn convert_entries(
    entries: Vec<RouteEntry>,
    next_id: &mut u32,
) -> Result<Vec<RouteDescriptor<String>>> {
    entries
        .into_iter()
        .map(|entry| convert_entry(entry, next_id))
        .collect()
}

fn convert_entry(entry: RouteEntry, next_id: &mut u32) -> Result<RouteDescriptor<String>> {
    if entry.path.is_empty() {
        bail!("Route with page '{}' has an empty path", entry.page);
    }
    if entry.page.is_empty() {
        bail!("Route '{}' has an empty page", entry.path);
    }

    let access = match RouteAccess::from_flags(entry.requires_auth, entry.admin) {
        Some(access) => access,
        None => bail!("Route '{}': admin routes must also set requires_auth", entry.path),
    };

    let id = *next_id;
    *next_id += 1;

    let children = convert_entries(entry.children, next_id)
        .with_context(|| format!("In children of route '{}'", entry.path))?;

    let mut route = RouteDescriptor::new(entry.path, entry.page)
        .with_id(id)
        .with_label(entry.label)
        .with_access(access);

    if let Some(error_page) = entry.error_page {
        route = route.with_error_content(error_page);
    }

    Ok(route.with_children(children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_empty_table() {
        let table = RouteTable::parse("").unwrap();
        assert!(table.routes.is_empty());
    }

    #[test]
    fn test_entry_defaults() {
        let table = RouteTable::parse(
            r#"
            [[routes]]
            path = "/login"
            page = "Login"
            "#,
        )
        .unwrap();

        let entry = &table.routes[0];
        assert_eq!(entry.label, "");
        assert_eq!(entry.error_page, None);
        assert!(!entry.requires_auth);
        assert!(!entry.admin);
        assert!(entry.children.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = RouteTable::parse("[[routes]\npath = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_sequential_ids_in_declaration_order() {
        let table = RouteTable::parse(
            r#"
            [[routes]]
            path = "/a"
            page = "A"

            [[routes.children]]
            path = "/a/b"
            page = "B"

            [[routes]]
            path = "/c"
            page = "C"
            "#,
        )
        .unwrap();

        let routes = table.into_descriptors().unwrap();
        assert_eq!(routes[0].id, 0);
        assert_eq!(routes[0].children[0].id, 1);
        assert_eq!(routes[1].id, 2);
    }

    #[test]
    fn test_admin_without_auth_names_the_route() {
        let table = RouteTable::parse(
            r#"
            [[routes]]
            path = "/users"
            page = "Users"
            admin = true
            "#,
        )
        .unwrap();

        let err = table.into_descriptors().unwrap_err();
        assert!(format!("{err:#}").contains("/users"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let table = RouteTable::parse(
            r#"
            [[routes]]
            path = ""
            page = "Ghost"
            "#,
        )
        .unwrap();

        assert!(table.into_descriptors().is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = RouteTable::load("definitely/not/here/routes.toml");
        assert!(result.is_err());
    }
}
