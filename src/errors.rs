//! Error types for the element bypass

use element_proxy::{Failure, Thrown, UndeclaredFailure};
use thiserror::Error;

/// Invalid use of the bypass, raised before anything is delegated
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvocationError {
    /// No element handle was supplied
    #[error("element arg is absent")]
    ElementAbsent,

    /// Handle exposes no interception callback
    #[error("element is not an intercepted proxy")]
    NotIntercepted,

    /// No operation name was supplied
    #[error("method name arg is absent")]
    MethodNameAbsent,

    /// Name does not match any declared element operation
    #[error("no element operation named `{0}`")]
    OperationNotFound(String),

    /// No origin command was supplied
    #[error("origin command arg is absent")]
    CommandAbsent,
}

/// Everything a bypassed call can fail with
#[derive(Debug, Error)]
pub enum BypassError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    /// Failure of the true operation, same value the operation raised
    #[error(transparent)]
    Delegated(Failure),

    /// Interception wrapper that carried no cause
    #[error(transparent)]
    Undeclared(UndeclaredFailure),
}

pub type BypassResult<T> = Result<T, BypassError>;

impl BypassError {
    /// Whether the bypass rejected the call before delegating
    pub fn is_invalid_usage(&self) -> bool {
        matches!(self, BypassError::Invocation(_))
    }

    pub fn delegated(&self) -> Option<&Failure> {
        match self {
            BypassError::Delegated(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<Thrown> for BypassError {
    /// Strips the undeclared wrapper down to its cause when it has one.
    fn from(thrown: Thrown) -> Self {
        match thrown {
            Thrown::Undeclared(wrapper) => match wrapper.into_cause() {
                Ok(cause) => BypassError::Delegated(cause),
                Err(wrapper) => BypassError::Undeclared(wrapper),
            },
            Thrown::Raised(failure) => BypassError::Delegated(failure),
        }
    }
}
