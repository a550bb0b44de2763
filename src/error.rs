use std::error;
use std::fmt;

/// Boxed error type accepted from external claims validators.
pub(crate) type BoxError = Box<dyn error::Error + Send + Sync>;

/// Errors that can abort pipeline evaluation.
///
/// Guard denials are NOT errors - they are ordinary
/// [`GuardOutcome::Terminate`](crate::GuardOutcome::Terminate) outcomes.
/// The only fault path is an externally supplied claims validator
/// failing: that is neither an allow (a security hole) nor a deny
/// (masks the bug), so it propagates out of
/// [`Pipeline::evaluate`](crate::Pipeline::evaluate) and the host
/// dispatch layer turns it into a 5xx-class failure.
#[derive(Debug)]
pub enum EvaluationError {
    /// An external claims validator returned an error.
    ValidatorFault(BoxError),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::ValidatorFault(source) => {
                write!(f, "claims validator failed: {}", source)
            }
        }
    }
}

impl error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EvaluationError::ValidatorFault(source) => Some(source.as_ref()),
        }
    }
}
