use crate::error::EvaluationError;
use crate::guard::Guard;
use crate::outcome::GuardOutcome;
use crate::request::RequestContext;

/// An ordered, short-circuiting sequence of guards.
///
/// Insertion order is significant: [`append`](Pipeline::append) adds to
/// the end, [`prepend`](Pipeline::prepend) inserts at the start (so the
/// last prepend ends up first). There is no deduplication; registering
/// the same kind of guard twice is tolerated, just redundant.
///
/// Registration must happen during setup, before concurrent evaluation
/// begins. Both mutators take `&mut self`, so the borrow checker
/// enforces that write-then-many-readers discipline: once a pipeline is
/// shared (e.g. behind an `Arc`), only [`evaluate`](Pipeline::evaluate)
/// is reachable.
///
/// # Examples
///
/// ```
/// use guard_core::{hooks, GuardOutcome, Identity, Pipeline, RequestContext};
/// use url::Url;
///
/// let mut pipeline = Pipeline::new();
/// pipeline.append(hooks::requires_authentication());
/// pipeline.append(hooks::requires_claims(["admin"]));
///
/// let ctx = RequestContext::new(
///     Some(Identity::new("alice", ["admin"])),
///     Url::parse("https://example.com/").unwrap(),
///     "GET",
/// );
/// assert!(matches!(pipeline.evaluate(&ctx), Ok(GuardOutcome::Continue)));
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    guards: Vec<Guard>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Inserts a guard at the end of the sequence.
    pub fn append(&mut self, guard: Guard) {
        self.guards.push(guard);
    }

    /// Inserts a guard at the start of the sequence.
    ///
    /// Used when a guard must run before already-registered guards.
    /// Successive prepends stack in reverse call order: the last
    /// prepended guard runs first.
    pub fn prepend(&mut self, guard: Guard) {
        self.guards.insert(0, guard);
    }

    /// Returns the number of registered guards.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Returns `true` if no guards are registered.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Runs the guards in sequence order against `ctx`.
    ///
    /// Returns the first [`GuardOutcome::Terminate`] encountered, or
    /// [`GuardOutcome::Continue`] if every guard continues. Evaluation
    /// is lazy: guards after a terminating guard never execute, so later
    /// guards may assume earlier guards' non-termination.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] if a guard faults (an external claims
    /// validator failed). Evaluation stops at the faulting guard and the
    /// host should abort the request.
    pub fn evaluate(&self, ctx: &RequestContext) -> Result<GuardOutcome, EvaluationError> {
        for guard in &self.guards {
            if let GuardOutcome::Terminate(response) = guard.check(ctx)? {
                return Ok(GuardOutcome::Terminate(response));
            }
        }
        Ok(GuardOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use url::Url;

    fn ctx() -> RequestContext {
        RequestContext::new(None, Url::parse("https://example.com/").unwrap(), "GET")
    }

    fn allow() -> Guard {
        Guard::new(|_| Ok(GuardOutcome::Continue))
    }

    fn deny() -> Guard {
        Guard::new(|_| Ok(GuardOutcome::Terminate(Response::forbidden())))
    }

    /// Guard that records each execution in a shared counter.
    fn spy(counter: &Arc<AtomicUsize>) -> Guard {
        let counter = Arc::clone(counter);
        Guard::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(GuardOutcome::Continue)
        })
    }

    #[test]
    fn empty_pipeline_continues() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert!(pipeline.evaluate(&ctx()).unwrap().is_continue());
    }

    #[test]
    fn all_continue_reaches_the_end() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pipeline = Pipeline::new();
        pipeline.append(spy(&counter));
        pipeline.append(spy(&counter));
        pipeline.append(spy(&counter));

        assert!(pipeline.evaluate(&ctx()).unwrap().is_continue());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn termination_short_circuits_later_guards() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pipeline = Pipeline::new();
        pipeline.append(spy(&counter));
        pipeline.append(deny());
        pipeline.append(spy(&counter));

        let outcome = pipeline.evaluate(&ctx()).unwrap();
        assert!(!outcome.is_continue());
        // Only the guard before the terminator ran.
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn first_termination_wins() {
        let mut pipeline = Pipeline::new();
        pipeline.append(Guard::new(|_| {
            Ok(GuardOutcome::Terminate(Response::unauthorized()))
        }));
        pipeline.append(deny());

        let outcome = pipeline.evaluate(&ctx()).unwrap();
        assert_eq!(outcome.response(), Some(&Response::unauthorized()));
    }

    #[test]
    fn prepend_runs_before_existing_guards() {
        let mut pipeline = Pipeline::new();
        pipeline.append(allow());
        pipeline.prepend(deny());
        assert_eq!(pipeline.len(), 2);

        // The prepended terminator runs first.
        assert!(!pipeline.evaluate(&ctx()).unwrap().is_continue());
    }

    #[test]
    fn fault_aborts_evaluation_and_skips_later_guards() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut pipeline = Pipeline::new();
        pipeline.append(Guard::new(|_| {
            Err(EvaluationError::ValidatorFault("boom".into()))
        }));
        pipeline.append(spy(&counter));

        assert!(pipeline.evaluate(&ctx()).is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn shared_pipeline_evaluates_from_multiple_threads() {
        let mut pipeline = Pipeline::new();
        pipeline.append(allow());
        let pipeline = Arc::new(pipeline);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pipeline = Arc::clone(&pipeline);
                std::thread::spawn(move || pipeline.evaluate(&ctx()).unwrap().is_continue())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
