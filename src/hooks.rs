//! Built-in guard constructors.
//!
//! Each constructor returns a [`Guard`] closed over its parameters,
//! ready to be registered on a [`Pipeline`](crate::Pipeline). The named
//! guards are all composed from two generic combinators,
//! [`unauthorized_if_not`] and [`forbidden_if_not`], which are public so
//! hosts can build their own denial guards the same way.
//!
//! Claim guards re-check identity presence even though the registration
//! helpers in [`secure`](crate::secure) always put an authentication
//! guard in front of them - a claim guard registered standalone must
//! still be safe.

use std::collections::HashSet;

use crate::error::EvaluationError;
use crate::guard::Guard;
use crate::outcome::GuardOutcome;
use crate::request::RequestContext;
use crate::response::Response;

/// Guard that terminates with 401 Unauthorized unless `test` passes.
///
/// # Examples
///
/// ```
/// use guard_core::hooks::unauthorized_if_not;
/// use guard_core::{GuardOutcome, RequestContext, StatusCode};
/// use url::Url;
///
/// let guard = unauthorized_if_not(|ctx: &RequestContext| ctx.identity().is_some());
/// let ctx = RequestContext::new(None, Url::parse("https://e.com/").unwrap(), "GET");
///
/// let outcome = guard.check(&ctx).unwrap();
/// assert_eq!(outcome.response().unwrap().status(), StatusCode::Unauthorized);
/// ```
pub fn unauthorized_if_not<F>(test: F) -> Guard
where
    F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
{
    terminate_if_not(Response::unauthorized, test)
}

/// Guard that terminates with 403 Forbidden unless `test` passes.
pub fn forbidden_if_not<F>(test: F) -> Guard
where
    F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
{
    terminate_if_not(Response::forbidden, test)
}

fn terminate_if_not<R, F>(response: R, test: F) -> Guard
where
    R: Fn() -> Response + Send + Sync + 'static,
    F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
{
    Guard::new(move |ctx| {
        if test(ctx) {
            Ok(GuardOutcome::Continue)
        } else {
            let response = response();
            tracing::debug!(
                status = %response.status(),
                method = %ctx.method(),
                path = %ctx.url().path(),
                "request terminated by guard"
            );
            Ok(GuardOutcome::Terminate(response))
        }
    })
}

/// Guard requiring an authenticated identity.
///
/// Terminates with 401 Unauthorized when the context has no identity.
/// Claims are not inspected.
pub fn requires_authentication() -> Guard {
    unauthorized_if_not(|ctx| ctx.identity().is_some())
}

/// Guard requiring every claim in `required` to be held.
///
/// Terminates with 403 Forbidden unless an identity is present and its
/// claim set is a superset of `required`. An empty `required` set is
/// trivially satisfied by any authenticated identity.
pub fn requires_claims(required: impl IntoIterator<Item = impl Into<String>>) -> Guard {
    let required: HashSet<String> = required.into_iter().map(Into::into).collect();
    forbidden_if_not(move |ctx| match ctx.identity() {
        Some(identity) => identity.has_all_claims(&required),
        None => false,
    })
}

/// Guard requiring at least one claim in `required` to be held.
///
/// Terminates with 403 Forbidden unless an identity is present and holds
/// at least one of the required claims. Note the edge case: an empty
/// `required` set is never satisfiable, so this guard then denies every
/// request ("any of nothing" is vacuously false).
pub fn requires_any_claim(required: impl IntoIterator<Item = impl Into<String>>) -> Guard {
    let required: HashSet<String> = required.into_iter().map(Into::into).collect();
    forbidden_if_not(move |ctx| match ctx.identity() {
        Some(identity) => identity.has_any_claim(&required),
        None => false,
    })
}

/// Guard delegating the claims decision to an external validator.
///
/// Terminates with 403 Forbidden unless an identity is present and
/// `is_valid` returns `Ok(true)` for its claim set. The validator is
/// opaque to this crate; if it returns `Err`, the fault is NOT treated
/// as allow or deny - it propagates out of
/// [`Pipeline::evaluate`](crate::Pipeline::evaluate) as
/// [`EvaluationError::ValidatorFault`] and aborts the request.
///
/// # Examples
///
/// ```
/// use guard_core::hooks::requires_validated_claims;
/// use guard_core::{Identity, RequestContext};
/// use url::Url;
///
/// let guard = requires_validated_claims(|claims| Ok(claims.len() >= 2));
///
/// let ctx = RequestContext::new(
///     Some(Identity::new("alice", ["a", "b"])),
///     Url::parse("https://e.com/").unwrap(),
///     "GET",
/// );
/// assert!(guard.check(&ctx).unwrap().is_continue());
/// ```
pub fn requires_validated_claims<F>(is_valid: F) -> Guard
where
    F: Fn(&HashSet<String>) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync
        + 'static,
{
    Guard::new(move |ctx| {
        let Some(identity) = ctx.identity() else {
            tracing::debug!(
                method = %ctx.method(),
                path = %ctx.url().path(),
                "claims validation without identity"
            );
            return Ok(GuardOutcome::Terminate(Response::forbidden()));
        };
        match is_valid(identity.claims()) {
            Ok(true) => Ok(GuardOutcome::Continue),
            Ok(false) => {
                tracing::debug!(
                    method = %ctx.method(),
                    path = %ctx.url().path(),
                    "claims rejected by validator"
                );
                Ok(GuardOutcome::Terminate(Response::forbidden()))
            }
            Err(source) => Err(EvaluationError::ValidatorFault(source)),
        }
    })
}

/// Guard enforcing a secure transport.
///
/// A request whose URL is already secure continues. An insecure request
/// is redirected to the same URL with the scheme rewritten to `https`
/// when `redirect` is true AND the method is GET (case-insensitive);
/// otherwise it terminates with 403 Forbidden. Only GET is redirected:
/// replaying a POST/PUT across a scheme change would silently drop the
/// body's semantics.
pub fn requires_https(redirect: bool) -> Guard {
    Guard::new(move |ctx| {
        if ctx.is_secure() {
            return Ok(GuardOutcome::Continue);
        }
        if redirect && ctx.method_is("GET") {
            let mut target = ctx.url().clone();
            if target.set_scheme("https").is_ok() {
                tracing::debug!(
                    method = %ctx.method(),
                    path = %ctx.url().path(),
                    "redirecting insecure request to https"
                );
                return Ok(GuardOutcome::Terminate(Response::redirect(target)));
            }
            // Non-http scheme that cannot be rewritten; fall through to deny.
            tracing::warn!(
                scheme = %ctx.url().scheme(),
                "cannot rewrite scheme to https, refusing request"
            );
        }
        tracing::debug!(
            method = %ctx.method(),
            path = %ctx.url().path(),
            "refusing insecure request"
        );
        Ok(GuardOutcome::Terminate(Response::forbidden()))
    })
}
