use std::fmt;

use crate::error::EvaluationError;
use crate::outcome::GuardOutcome;
use crate::request::RequestContext;

/// A single pre-request check.
///
/// A guard is a pure, synchronous function over the current
/// [`RequestContext`]: it either allows the request to proceed
/// ([`GuardOutcome::Continue`]) or short-circuits with a terminal
/// response ([`GuardOutcome::Terminate`]). Guards must not block on I/O
/// and must not mutate pipeline structure while running.
///
/// Most guards are infallible and always return `Ok`; the `Err` path
/// exists solely for external validator faults (see
/// [`EvaluationError`]).
///
/// Guards are `Send + Sync` so a registered [`Pipeline`](crate::Pipeline)
/// can be shared read-only across concurrent request tasks.
///
/// # Examples
///
/// ```
/// use guard_core::{Guard, GuardOutcome, RequestContext, Response};
/// use url::Url;
///
/// // A guard that only admits requests to /public paths.
/// let public_only = Guard::new(|ctx: &RequestContext| {
///     if ctx.url().path().starts_with("/public") {
///         Ok(GuardOutcome::Continue)
///     } else {
///         Ok(GuardOutcome::Terminate(Response::forbidden()))
///     }
/// });
///
/// let ctx = RequestContext::new(None, Url::parse("https://e.com/public/x").unwrap(), "GET");
/// assert!(public_only.check(&ctx).unwrap().is_continue());
/// ```
pub struct Guard {
    check: Box<dyn Fn(&RequestContext) -> Result<GuardOutcome, EvaluationError> + Send + Sync>,
}

impl Guard {
    /// Wraps a closure as a guard.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&RequestContext) -> Result<GuardOutcome, EvaluationError> + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    /// Runs the guard against a request context.
    pub fn check(&self, ctx: &RequestContext) -> Result<GuardOutcome, EvaluationError> {
        (self.check)(ctx)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard")
    }
}
