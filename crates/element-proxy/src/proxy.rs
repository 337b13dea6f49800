use std::sync::Arc;

use tracing::trace;

use crate::element::{Element, ElementRef};
use crate::errors::Thrown;
use crate::operation::Operation;
use crate::value::{Args, Value};

/// Interception callback behind a decorated handle.
///
/// Every call on a `ProxyElement` lands here with the proxy itself as the
/// receiver.
pub trait InvocationHandler: Send + Sync {
    fn invoke(
        &self,
        proxy: &dyn Element,
        operation: &Operation,
        args: Option<Args>,
    ) -> Result<Value, Thrown>;
}

/// Decorated element handle that exposes its interception callback.
pub struct ProxyElement {
    handler: Arc<dyn InvocationHandler>,
}

impl ProxyElement {
    pub fn new(handler: Arc<dyn InvocationHandler>) -> Self {
        Self { handler }
    }

    /// Builds the proxy and returns it as a shared handle.
    pub fn wrap(handler: Arc<dyn InvocationHandler>) -> ElementRef {
        Arc::new(Self::new(handler))
    }
}

impl Element for ProxyElement {
    fn call(&self, operation: &Operation, args: Option<Args>) -> Result<Value, Thrown> {
        trace!(operation = operation.name(), "routing element call through interception");
        self.handler.invoke(self, operation, args)
    }

    fn interception(&self) -> Option<Arc<dyn InvocationHandler>> {
        Some(Arc::clone(&self.handler))
    }
}
