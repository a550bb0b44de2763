use url::Url;

use crate::identity::Identity;

/// Snapshot of an inbound request, as seen by guards.
///
/// One `RequestContext` exists per inbound request; the pipeline never
/// outlives it. The context intentionally contains simple, owned data to
/// avoid coupling to any specific framework's request types. Framework
/// integrations should build it from their own request type after
/// authentication has resolved the identity (guards never perform I/O,
/// so any identity/claims lookup must already have happened).
///
/// # Examples
///
/// ```
/// use guard_core::{Identity, RequestContext};
/// use url::Url;
///
/// let ctx = RequestContext::new(
///     Some(Identity::new("alice", ["admin"])),
///     Url::parse("https://example.com/reports?year=2026").unwrap(),
///     "GET",
/// );
///
/// assert!(ctx.identity().is_some());
/// assert!(ctx.is_secure());
/// assert!(ctx.method_is("get")); // method comparison ignores case
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    identity: Option<Identity>,
    url: Url,
    method: String,
}

impl RequestContext {
    /// Creates a context from an optional identity, request URL, and method.
    ///
    /// An absent identity means the request is unauthenticated.
    pub fn new(identity: Option<Identity>, url: Url, method: impl Into<String>) -> Self {
        Self {
            identity,
            url,
            method: method.into(),
        }
    }

    /// Returns the authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Returns the request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the request method as received from the host.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Compares the request method against `method`, ignoring ASCII case.
    pub fn method_is(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }

    /// Returns `true` if the request arrived over a secure transport.
    ///
    /// Secure means the URL scheme is exactly `https`.
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("valid test url")
    }

    #[test]
    fn context_without_identity_is_unauthenticated() {
        let ctx = RequestContext::new(None, url("http://example.com/"), "GET");
        assert!(ctx.identity().is_none());
    }

    #[test]
    fn context_exposes_identity() {
        let ctx = RequestContext::new(
            Some(Identity::new("alice", ["admin"])),
            url("http://example.com/"),
            "GET",
        );
        assert_eq!(ctx.identity().unwrap().name(), "alice");
    }

    #[test]
    fn method_comparison_ignores_case() {
        let ctx = RequestContext::new(None, url("http://example.com/"), "gEt");
        assert!(ctx.method_is("GET"));
        assert!(ctx.method_is("get"));
        assert!(!ctx.method_is("POST"));
        assert_eq!(ctx.method(), "gEt"); // original casing preserved
    }

    #[test]
    fn https_scheme_is_secure() {
        let secure = RequestContext::new(None, url("https://example.com/a"), "GET");
        let insecure = RequestContext::new(None, url("http://example.com/a"), "GET");

        assert!(secure.is_secure());
        assert!(!insecure.is_secure());
    }
}
