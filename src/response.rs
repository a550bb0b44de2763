use std::fmt;

use url::Url;

/// Status codes a guard can terminate a request with.
///
/// This is deliberately the small set the guard layer produces, not a
/// full HTTP status table; the host framework owns response rendering
/// and maps these onto its own status type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 303 See Other - used for scheme-upgrade redirects
    SeeOther,
    /// 401 Unauthorized - authentication required but missing
    Unauthorized,
    /// 403 Forbidden - authenticated but not permitted
    Forbidden,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::SeeOther => 303,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::SeeOther => write!(f, "303 See Other"),
            StatusCode::Unauthorized => write!(f, "401 Unauthorized"),
            StatusCode::Forbidden => write!(f, "403 Forbidden"),
        }
    }
}

/// Terminal outcome carried by [`GuardOutcome::Terminate`](crate::GuardOutcome::Terminate).
///
/// A response is a status code plus, for redirects, the target URL. The
/// host's dispatch layer renders it; this crate never writes bytes.
///
/// # Examples
///
/// ```
/// use guard_core::{Response, StatusCode};
/// use url::Url;
///
/// let denied = Response::forbidden();
/// assert_eq!(denied.status(), StatusCode::Forbidden);
/// assert!(denied.location().is_none());
///
/// let upgraded = Response::redirect(Url::parse("https://example.com/").unwrap());
/// assert_eq!(upgraded.status(), StatusCode::SeeOther);
/// assert!(upgraded.location().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    redirect: Option<Url>,
}

impl Response {
    /// A 401 Unauthorized response.
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::Unauthorized,
            redirect: None,
        }
    }

    /// A 403 Forbidden response.
    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::Forbidden,
            redirect: None,
        }
    }

    /// A 303 See Other redirect to `target`.
    pub fn redirect(target: Url) -> Self {
        Self {
            status: StatusCode::SeeOther,
            redirect: Some(target),
        }
    }

    /// Returns the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the redirect target, if this is a redirect response.
    pub fn location(&self) -> Option<&Url> {
        self.redirect.as_ref()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.redirect {
            Some(target) => write!(f, "{} -> {}", self.status, target),
            None => write!(f, "{}", self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_has_no_redirect() {
        let response = Response::unauthorized();
        assert_eq!(response.status(), StatusCode::Unauthorized);
        assert_eq!(response.status().as_u16(), 401);
        assert!(response.location().is_none());
    }

    #[test]
    fn forbidden_has_no_redirect() {
        let response = Response::forbidden();
        assert_eq!(response.status(), StatusCode::Forbidden);
        assert_eq!(response.status().as_u16(), 403);
    }

    #[test]
    fn redirect_carries_target_and_see_other() {
        let target = Url::parse("https://example.com/login").unwrap();
        let response = Response::redirect(target.clone());

        assert_eq!(response.status(), StatusCode::SeeOther);
        assert_eq!(response.status().as_u16(), 303);
        assert_eq!(response.location(), Some(&target));
    }

    #[test]
    fn display_includes_redirect_target() {
        let target = Url::parse("https://example.com/").unwrap();
        let rendered = format!("{}", Response::redirect(target));
        assert_eq!(rendered, "303 See Other -> https://example.com/");
    }
}
