use crate::response::Response;

/// The result of running a single guard (or a whole pipeline).
///
/// `Continue` means the check passed and the next guard (or the real
/// handler) may run. `Terminate` short-circuits: no subsequent guard
/// runs and the handler is never invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The request may proceed.
    Continue,
    /// The request is terminated with the given response.
    Terminate(Response),
}

impl GuardOutcome {
    /// Returns `true` if this outcome allows the request to proceed.
    pub fn is_continue(&self) -> bool {
        matches!(self, GuardOutcome::Continue)
    }

    /// Returns the terminal response, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            GuardOutcome::Continue => None,
            GuardOutcome::Terminate(response) => Some(response),
        }
    }
}
