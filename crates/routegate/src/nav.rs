//! Navigation manifests derived from route tables
//!
//! Route labels exist for navigation UIs (sidebars, menus), not for the tree
//! builder. This module flattens a route table into an ordered list of
//! [`NavEntry`] values a UI can render directly, with the access level of
//! each route surfaced as plain flags.

use serde::Serialize;

use crate::RouteDescriptor;

/// One navigable page, as presented to a navigation UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Page name shown in the UI
    pub label: String,
    /// URL path the entry links to
    pub path: String,
    /// Whether the page sits behind the authentication boundary
    pub requires_auth: bool,
    /// Whether the page is restricted to administrators
    pub admin_only: bool,
}

/// Flattens a route table into navigation entries
///
/// Entries come out depth-first in table order: each route, then its
/// children, then its next sibling. Every route appears, labelled or not;
/// filtering is the UI's call.
///
/// # Examples
///
/// ```
/// use routegate::{nav_entries, RouteDescriptor};
///
/// let routes = vec![
///     RouteDescriptor::new("/", "MAIN")
///         .with_label("Main")
///         .with_auth()
///         .with_child(RouteDescriptor::new("/inbox", "INBOX").with_label("Inbox").with_auth()),
///     RouteDescriptor::new("/login", "LOGIN").with_label("Login"),
/// ];
///
/// let nav = nav_entries(&routes);
///
/// let labels: Vec<&str> = nav.iter().map(|entry| entry.label.as_str()).collect();
/// assert_eq!(labels, vec!["Main", "Inbox", "Login"]);
/// assert!(nav[0].requires_auth);
/// assert!(!nav[2].requires_auth);
/// ```
pub fn nav_entries<C>(routes: &[RouteDescriptor<C>]) -> Vec<NavEntry> {
    let mut entries = Vec::new();
    collect_entries(routes, &mut entries);
    entries
}

fn collect_entries<C>(routes: &[RouteDescriptor<C>], entries: &mut Vec<NavEntry>) {
    for route in routes {
        entries.push(NavEntry {
            label: route.label.clone(),
            path: route.path.clone(),
            requires_auth: route.access.requires_auth(),
            admin_only: route.access.is_admin(),
        });
        collect_entries(&route.children, entries);
    }
}
