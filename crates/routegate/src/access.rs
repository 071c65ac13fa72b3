/// Access level required to view a route
///
/// Every route declares exactly one access level. The level decides whether
/// the route's content gets wrapped in an authentication boundary when the
/// route tree is built, and how the route is tagged in navigation manifests.
///
/// Admin routes are always authenticated routes: there is no way to express
/// an admin-only page that skips the authentication boundary.
///
/// # Examples
///
/// ```
/// use routegate::RouteAccess;
///
/// // Anyone can view the route
/// let public = RouteAccess::Public;
/// assert!(!public.requires_auth());
///
/// // Only signed-in users can view the route
/// let authed = RouteAccess::Authenticated;
/// assert!(authed.requires_auth());
///
/// // Only signed-in administrators can view the route
/// let admin = RouteAccess::Admin;
/// assert!(admin.requires_auth() && admin.is_admin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteAccess {
    /// Viewable without signing in
    #[default]
    Public,
    /// Requires a signed-in user
    Authenticated,
    /// Requires a signed-in administrator
    Admin,
}

impl RouteAccess {
    /// Builds an access level from a pair of route flags
    ///
    /// Flat route declarations carry two booleans: `requires_auth` and
    /// `admin`. The admin flag only makes sense on routes that require
    /// authentication, so the combination `(false, true)` has no level and
    /// yields `None`. Callers loading route tables turn that `None` into a
    /// load error.
    ///
    /// # Examples
    ///
    /// ```
    /// use routegate::RouteAccess;
    ///
    /// assert_eq!(RouteAccess::from_flags(false, false), Some(RouteAccess::Public));
    /// assert_eq!(RouteAccess::from_flags(true, false), Some(RouteAccess::Authenticated));
    /// assert_eq!(RouteAccess::from_flags(true, true), Some(RouteAccess::Admin));
    ///
    /// // Admin without authentication is not a thing
    /// assert_eq!(RouteAccess::from_flags(false, true), None);
    /// ```
    pub fn from_flags(requires_auth: bool, admin: bool) -> Option<RouteAccess> {
        match (requires_auth, admin) {
            (false, false) => Some(RouteAccess::Public),
            (true, false) => Some(RouteAccess::Authenticated),
            (true, true) => Some(RouteAccess::Admin),
            (false, true) => None,
        }
    }

    /// Returns true if routes at this level sit behind the authentication boundary
    pub fn requires_auth(&self) -> bool {
        !matches!(self, RouteAccess::Public)
    }

    /// Returns true if routes at this level are restricted to administrators
    pub fn is_admin(&self) -> bool {
        matches!(self, RouteAccess::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_all_combinations() {
        assert_eq!(
            RouteAccess::from_flags(false, false),
            Some(RouteAccess::Public)
        );
        assert_eq!(
            RouteAccess::from_flags(true, false),
            Some(RouteAccess::Authenticated)
        );
        assert_eq!(RouteAccess::from_flags(true, true), Some(RouteAccess::Admin));
        assert_eq!(RouteAccess::from_flags(false, true), None);
    }

    #[test]
    fn test_requires_auth() {
        assert!(!RouteAccess::Public.requires_auth());
        assert!(RouteAccess::Authenticated.requires_auth());
        assert!(RouteAccess::Admin.requires_auth());
    }

    #[test]
    fn test_is_admin() {
        assert!(!RouteAccess::Public.is_admin());
        assert!(!RouteAccess::Authenticated.is_admin());
        assert!(RouteAccess::Admin.is_admin());
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(RouteAccess::default(), RouteAccess::Public);
    }
}
