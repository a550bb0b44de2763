//! Registration helpers for securing a route module.
//!
//! These free functions are the setup-time surface of the crate: route
//! or module registration code calls them once, before any request is
//! dispatched, to attach the built-in guards to the module's
//! before-pipeline in the right order. They are convenience wrappers
//! over [`hooks`](crate::hooks) plus [`Pipeline`] mutation - no guard
//! logic lives here.
//!
//! Ordering matters and is what these helpers exist to get right:
//! authentication always precedes claim checks, so claim guards can
//! assume an identity is present (each still re-checks independently to
//! stay safe when registered standalone).

use std::collections::HashSet;

use crate::guard::Guard;
use crate::hooks;
use crate::pipeline::Pipeline;

/// A host object that owns a before-request guard pipeline.
///
/// Framework integrations implement this for their module/route type;
/// the registration helpers below work against any implementor. It is
/// also implemented for [`Pipeline`] itself, so the helpers can be used
/// directly on a bare pipeline.
pub trait SecuredModule {
    /// Returns the module's before-request pipeline.
    fn before(&mut self) -> &mut Pipeline;
}

impl SecuredModule for Pipeline {
    fn before(&mut self) -> &mut Pipeline {
        self
    }
}

/// Requires the request to be authenticated.
///
/// Appends an authentication guard to the end of the pipeline.
pub fn require_authentication<M: SecuredModule + ?Sized>(module: &mut M) {
    module.before().append(hooks::requires_authentication());
}

/// Requires authentication and all of the given claims.
///
/// Appends an authentication guard followed by an all-claims guard, so
/// an unauthenticated request is refused with 401 before claims are
/// ever inspected.
///
/// # Examples
///
/// ```
/// use guard_core::{secure, GuardOutcome, Identity, Pipeline, RequestContext, StatusCode};
/// use url::Url;
///
/// let mut pipeline = Pipeline::new();
/// secure::require_claims(&mut pipeline, ["admin"]);
///
/// let anonymous = RequestContext::new(None, Url::parse("https://e.com/").unwrap(), "GET");
/// let outcome = pipeline.evaluate(&anonymous).unwrap();
/// assert_eq!(outcome.response().unwrap().status(), StatusCode::Unauthorized);
/// ```
pub fn require_claims<M: SecuredModule + ?Sized>(
    module: &mut M,
    required: impl IntoIterator<Item = impl Into<String>>,
) {
    let before = module.before();
    before.append(hooks::requires_authentication());
    before.append(hooks::requires_claims(required));
}

/// Requires authentication and at least one of the given claims.
///
/// Symmetric with [`require_claims`]. Passing an empty claim set makes
/// the module unreachable (see
/// [`hooks::requires_any_claim`](crate::hooks::requires_any_claim)).
pub fn require_any_claim<M: SecuredModule + ?Sized>(
    module: &mut M,
    required: impl IntoIterator<Item = impl Into<String>>,
) {
    let before = module.before();
    before.append(hooks::requires_authentication());
    before.append(hooks::requires_any_claim(required));
}

/// Requires authentication and claims accepted by an external validator.
///
/// Unlike the append-based helpers, this PREPENDS the validator guard
/// and then prepends an authentication guard, so after both prepends
/// the final order is [authentication, validator, ...pre-existing...]:
/// the pair runs before any guard registered earlier, with the
/// validator immediately after authentication.
pub fn require_validated_claims<M, F>(module: &mut M, is_valid: F)
where
    M: SecuredModule + ?Sized,
    F: Fn(&HashSet<String>) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync
        + 'static,
{
    let before = module.before();
    before.prepend(hooks::requires_validated_claims(is_valid));
    before.prepend(hooks::requires_authentication());
}

/// Requires a secure transport, redirecting insecure GET requests.
///
/// Equivalent to [`require_https_with`] with `redirect` set to true.
pub fn require_https<M: SecuredModule + ?Sized>(module: &mut M) {
    require_https_with(module, true);
}

/// Requires a secure transport.
///
/// When `redirect` is true, insecure GET requests are redirected to the
/// https equivalent of their URL; everything else insecure is refused
/// with 403 Forbidden.
pub fn require_https_with<M: SecuredModule + ?Sized>(module: &mut M, redirect: bool) {
    module.before().append(hooks::requires_https(redirect));
}

/// Appends an arbitrary guard to the module's pipeline.
///
/// Escape hatch for hosts with custom guards built via
/// [`Guard::new`](crate::Guard::new) or the
/// [`hooks`](crate::hooks) combinators.
pub fn require<M: SecuredModule + ?Sized>(module: &mut M, guard: Guard) {
    module.before().append(guard);
}
