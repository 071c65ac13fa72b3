/// Wraps route content in an authentication check
///
/// The route tree builder never inspects content; it only hands content to a
/// boundary when a route requires authentication. What "wrapping" means is up
/// to the caller: a UI crate can nest the content inside a login-guard
/// component, a test can tag a string, a server can attach a middleware
/// marker.
///
/// Any closure or function of shape `Fn(C) -> C` is already a boundary, so
/// most callers never implement this trait by hand.
///
/// # Examples
///
/// ```
/// use routegate::AuthBoundary;
///
/// // Closures are boundaries out of the box
/// let gate = |content: String| format!("auth({content})");
/// assert_eq!(gate.wrap("Dashboard".to_string()), "auth(Dashboard)");
///
/// // Hand-written boundaries work the same way
/// struct LoginGuard;
///
/// impl AuthBoundary<String> for LoginGuard {
///     fn wrap(&self, content: String) -> String {
///         format!("<LoginGuard>{content}</LoginGuard>")
///     }
/// }
///
/// assert_eq!(
///     LoginGuard.wrap("Dashboard".to_string()),
///     "<LoginGuard>Dashboard</LoginGuard>"
/// );
/// ```
pub trait AuthBoundary<C> {
    /// Returns the protected version of `content`
    fn wrap(&self, content: C) -> C;
}

impl<C, F> AuthBoundary<C> for F
where
    F: Fn(C) -> C,
{
    fn wrap(&self, content: C) -> C {
        self(content)
    }
}
