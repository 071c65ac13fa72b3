//! # Routegate
//!
//! Authentication-aware route trees for client-side routers, with support
//! for:
//! - Flat, declarative route tables with arbitrarily nested children
//! - Per-route access levels (public, authenticated, admin)
//! - Pluggable authentication boundaries via the [`AuthBoundary`] trait
//! - Navigation manifests derived from route labels
//! - TOML route tables for declaring routes outside of code
//!
//! ## Gating Model
//!
//! Building the tree wraps a route's content in the authentication boundary
//! when the route itself requires auth, and wraps it again when any of its
//! direct children requires auth. The second rule means a parent route with
//! a protected child is gated as well, so navigating to the parent never
//! bypasses the child's boundary. Deeper descendants do not gate their
//! grandparents; each protected route gates exactly itself and its direct
//! parent.
//!
//! ## Design
//!
//! The builder is a pure function over a typed model:
//! - **Opaque content** — the content type `C` is a generic parameter the
//!   builder never inspects, only carries and optionally wraps
//! - **Immutable builder API** for descriptor configuration
//! - **No global state** — a route table is an explicit value, constructed
//!   in code or loaded from TOML
//! - **Total transformation** — no error path; invalid access combinations
//!   are unrepresentable in the model and rejected at the table boundary
//!
//! ## Example
//!
//! ```
//! use routegate::{build_route_tree, RouteDescriptor};
//!
//! let routes = vec![
//!     RouteDescriptor::new("/", "MAIN".to_string())
//!         .with_label("Main")
//!         .with_auth(),
//!     RouteDescriptor::new("/login", "LOGIN".to_string()).with_label("Login"),
//!     RouteDescriptor::new("/signup", "SIGNUP".to_string()).with_label("Signup"),
//! ];
//!
//! let tree = build_route_tree(&routes, &|content: String| format!("auth({content})"));
//!
//! assert_eq!(tree[0].content, "auth(MAIN)");
//! assert_eq!(tree[1].content, "LOGIN");
//! assert_eq!(tree[2].content, "SIGNUP");
//! ```

use serde::Serialize;

// ============================================================================
// Module Declarations
// ============================================================================

mod access;
mod boundary;
pub mod config;
pub mod nav;

pub use access::RouteAccess;
pub use boundary::AuthBoundary;
pub use config::{RouteEntry, RouteTable};
pub use nav::{nav_entries, NavEntry};

// ============================================================================
// Core Types
// ============================================================================

/// A single entry in a route table: one navigable path, its content, and its
/// access requirements
///
/// `C` is the renderable content type. The library never inspects it; hosts
/// plug in whatever their rendering layer consumes (a component handle, a
/// template id, a closure).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor<C> {
    /// Numeric identifier; carried for host bookkeeping, never interpreted
    pub id: u32,
    /// URL path pattern like "/" or "/settings"
    pub path: String,
    /// Page name shown in navigation UIs (see [`nav_entries`])
    pub label: String,
    /// Renderable content for this route
    pub content: C,
    /// Nested child routes, in matching/display order; empty means none
    pub children: Vec<RouteDescriptor<C>>,
    /// Renderable content shown when routing to this entry fails
    pub error_content: Option<C>,
    /// Access level required to view this route
    pub access: RouteAccess,
}

/// One node of the built route tree, ready to hand to a routing engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteNode<C> {
    /// URL path pattern, carried over from the descriptor
    pub path: String,
    /// The descriptor's content, wrapped by the authentication boundary if
    /// the route (or a direct child) requires auth
    pub content: C,
    /// Built child nodes; `None` when the descriptor had no children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode<C>>>,
}

// ============================================================================
// Descriptor Builder Methods
// ============================================================================
//
// Builder pattern with functional method chaining:
// - Consume self and return new instance (move semantics)
// - Composable via method chaining
// - Construction is infallible; access rules live in the type system

impl<C> RouteDescriptor<C> {
    /// Creates a public route with no label, no children, and no error content
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::{RouteAccess, RouteDescriptor};
    ///
    /// let route = RouteDescriptor::new("/login", "LOGIN");
    ///
    /// assert_eq!(route.path, "/login");
    /// assert_eq!(route.access, RouteAccess::Public);
    /// assert!(route.children.is_empty());
    /// ```
    pub fn new(path: impl Into<String>, content: C) -> Self {
        RouteDescriptor {
            id: 0,
            path: path.into(),
            label: String::new(),
            content,
            children: Vec::new(),
            error_content: None,
            access: RouteAccess::default(),
        }
    }

    /// Sets the numeric identifier
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Sets the navigation label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the access level for this route
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::{RouteAccess, RouteDescriptor};
    ///
    /// let route = RouteDescriptor::new("/users", "USERS")
    ///     .with_access(RouteAccess::Admin);
    ///
    /// assert!(route.access.requires_auth());
    /// assert!(route.access.is_admin());
    /// ```
    pub fn with_access(mut self, access: RouteAccess) -> Self {
        self.access = access;
        self
    }

    /// Marks this route as requiring a signed-in user
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::new("/", "MAIN").with_auth();
    ///
    /// assert!(route.access.requires_auth());
    /// ```
    pub fn with_auth(self) -> Self {
        self.with_access(RouteAccess::Authenticated)
    }

    /// Sets the content shown when routing to this entry fails
    pub fn with_error_content(mut self, content: C) -> Self {
        self.error_content = Some(content);
        self
    }

    /// Appends one child route
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::new("/settings", "SETTINGS")
    ///     .with_child(RouteDescriptor::new("/settings/profile", "PROFILE"))
    ///     .with_child(RouteDescriptor::new("/settings/billing", "BILLING"));
    ///
    /// assert_eq!(route.children.len(), 2);
    /// ```
    pub fn with_child(mut self, child: RouteDescriptor<C>) -> Self {
        self.children.push(child);
        self
    }

    /// Appends multiple child routes at once
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor<C>>,
    {
        self.children.extend(children);
        self
    }

    /// Returns true if this route requires authentication
    pub fn requires_auth(&self) -> bool {
        self.access.requires_auth()
    }
}

// ============================================================================
// Route Tree Construction
// ============================================================================

/// Builds the nested route tree a routing engine consumes
///
/// Transforms each descriptor, in input order, into a [`RouteNode`]:
///
/// 1. If the route requires auth, its content is wrapped in `boundary`
/// 2. Children are built recursively; an empty children list becomes `None`
/// 3. If any **direct** child requires auth, the content is wrapped (again),
///    whatever the route's own access level
///
/// A route that requires auth itself and also has an auth-requiring child
/// therefore ends up double-wrapped. Output length and order match the input
/// at every nesting level, and nesting depth is unbounded.
///
/// The function is pure: same input, same boundary, same tree.
///
/// # Arguments
///
/// * `routes` - The route table to transform
/// * `boundary` - The authentication boundary; see [`AuthBoundary`]
///
/// # Examples
///
/// ```
/// use routegate::{build_route_tree, RouteDescriptor};
///
/// let routes = vec![
///     RouteDescriptor::new("/", "MAIN".to_string()).with_auth(),
///     RouteDescriptor::new("/login", "LOGIN".to_string()),
/// ];
///
/// let tree = build_route_tree(&routes, &|content: String| format!("auth({content})"));
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree[0].content, "auth(MAIN)");
/// assert_eq!(tree[0].children, None);
/// assert_eq!(tree[1].content, "LOGIN");
/// ```
///
/// A public parent is still gated when a direct child requires auth:
///
/// ```
/// use routegate::{build_route_tree, RouteDescriptor};
///
/// let routes = vec![RouteDescriptor::new("/account", "ACCOUNT".to_string())
///     .with_child(RouteDescriptor::new("/account/keys", "KEYS".to_string()).with_auth())];
///
/// let tree = build_route_tree(&routes, &|content: String| format!("auth({content})"));
///
/// assert_eq!(tree[0].content, "auth(ACCOUNT)");
/// assert_eq!(tree[0].children.as_ref().unwrap()[0].content, "auth(KEYS)");
/// ```
pub fn build_route_tree<C, B>(routes: &[RouteDescriptor<C>], boundary: &B) -> Vec<RouteNode<C>>
where
    C: Clone,
    B: AuthBoundary<C> + ?Sized,
{
    routes
        .iter()
        .map(|route| {
            // Own access decides the first wrap
            let mut content = if route.access.requires_auth() {
                boundary.wrap(route.content.clone())
            } else {
                route.content.clone()
            };

            let children = if route.children.is_empty() {
                None
            } else {
                Some(build_route_tree(&route.children, boundary))
            };

            // A protected direct child gates the parent too; this wrap stacks
            // on top of the own-access wrap. Grandchildren gate only their own
            // parent, never this node.
            if route.children.iter().any(|child| child.requires_auth()) {
                content = boundary.wrap(content);
            }

            RouteNode {
                path: route.path.clone(),
                content,
                children,
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(content: String) -> String {
        format!("auth({content})")
    }

    #[test]
    fn test_new_defaults() {
        let route = RouteDescriptor::new("/", "MAIN");
        assert_eq!(route.id, 0);
        assert_eq!(route.path, "/");
        assert_eq!(route.label, "");
        assert_eq!(route.content, "MAIN");
        assert!(route.children.is_empty());
        assert_eq!(route.error_content, None);
        assert_eq!(route.access, RouteAccess::Public);
    }

    #[test]
    fn test_builder_chaining() {
        let route = RouteDescriptor::new("/", "MAIN")
            .with_id(7)
            .with_label("Main")
            .with_auth()
            .with_error_content("OOPS");

        assert_eq!(route.id, 7);
        assert_eq!(route.label, "Main");
        assert!(route.requires_auth());
        assert_eq!(route.error_content, Some("OOPS"));
    }

    #[test]
    fn test_with_children_extends() {
        let route = RouteDescriptor::new("/a", "A")
            .with_child(RouteDescriptor::new("/a/b", "B"))
            .with_children(vec![
                RouteDescriptor::new("/a/c", "C"),
                RouteDescriptor::new("/a/d", "D"),
            ]);

        let paths: Vec<&str> = route.children.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/a/b", "/a/c", "/a/d"]);
    }

    #[test]
    fn test_empty_table_builds_empty_tree() {
        let routes: Vec<RouteDescriptor<String>> = Vec::new();
        let tree = build_route_tree(&routes, &gate);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_admin_routes_are_wrapped() {
        let routes = vec![RouteDescriptor::new("/users", "USERS".to_string())
            .with_access(RouteAccess::Admin)];

        let tree = build_route_tree(&routes, &gate);
        assert_eq!(tree[0].content, "auth(USERS)");
    }

    #[test]
    fn test_build_is_pure() {
        let routes = vec![
            RouteDescriptor::new("/", "MAIN".to_string())
                .with_auth()
                .with_child(RouteDescriptor::new("/inner", "INNER".to_string())),
            RouteDescriptor::new("/login", "LOGIN".to_string()),
        ];

        let first = build_route_tree(&routes, &gate);
        let second = build_route_tree(&routes, &gate);
        assert_eq!(first, second);
    }
}
