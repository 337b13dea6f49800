//! Failures raised through element calls

use std::error::Error as StdError;
use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failure raised by a true element operation.
///
/// Kept behind an `Arc` so the same failure value can be re-raised by callers
/// further up without losing its identity.
pub type Failure = Arc<dyn StdError + Send + Sync + 'static>;

/// Generic wrapper an interception layer puts around a failure the
/// operation did not declare.
#[derive(Debug, Clone, Error)]
#[error("undeclared failure raised through element interception")]
pub struct UndeclaredFailure {
    #[source]
    cause: Option<Failure>,
}

impl UndeclaredFailure {
    pub fn new(cause: Option<Failure>) -> Self {
        Self { cause }
    }

    pub fn wrapping<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(Some(Arc::new(cause)))
    }

    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_ref()
    }

    /// The cause, or the wrapper itself when it carries none.
    pub fn into_cause(mut self) -> Result<Failure, Self> {
        match self.cause.take() {
            Some(cause) => Ok(cause),
            None => Err(self),
        }
    }
}

/// What an element call can raise.
#[derive(Debug, Clone, Error)]
pub enum Thrown {
    #[error(transparent)]
    Undeclared(#[from] UndeclaredFailure),
    #[error(transparent)]
    Raised(Failure),
}

impl Thrown {
    pub fn raised<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Raised(Arc::new(err))
    }
}

impl From<io::Error> for Thrown {
    fn from(err: io::Error) -> Self {
        Self::raised(err)
    }
}
