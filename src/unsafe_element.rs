use std::sync::Arc;

use element_proxy::{Args, ElementRef, InvocationHandler, Value};
use tracing::trace;

use crate::errors::{BypassError, BypassResult, InvocationError};
use crate::operations::{OperationCache, ELEMENT_OPERATIONS};

/// Access to an intercepted element by operation name and arguments.
pub trait UnsafeElement {
    /// Invokes the named operation once, straight through the handle's
    /// interception callback.
    ///
    /// The result is untyped; callers downcast it to the type the operation
    /// returns. Failures of the operation come back as they were raised,
    /// with the undeclared interception wrapper stripped off.
    fn invoke(&self, method_name: Option<&str>, args: Option<Args>) -> BypassResult<Value>;

    /// The wrapped handle.
    fn as_element(&self) -> &ElementRef;
}

/// `UnsafeElement` over a handle that exposes its interception callback.
pub struct UnsafeElementOf {
    element: ElementRef,
    handler: Arc<dyn InvocationHandler>,
    operations: &'static OperationCache,
}

impl UnsafeElementOf {
    pub fn new<'e>(element: impl Into<Option<&'e ElementRef>>) -> BypassResult<Self> {
        Self::with_operations(element, &ELEMENT_OPERATIONS)
    }

    /// Resolves names against `operations` instead of the process-wide index.
    pub fn with_operations<'e>(
        element: impl Into<Option<&'e ElementRef>>,
        operations: &'static OperationCache,
    ) -> BypassResult<Self> {
        let element = element.into().ok_or(InvocationError::ElementAbsent)?;
        let handler = element
            .interception()
            .ok_or(InvocationError::NotIntercepted)?;
        Ok(Self {
            element: Arc::clone(element),
            handler,
            operations,
        })
    }
}

impl UnsafeElement for UnsafeElementOf {
    fn invoke(&self, method_name: Option<&str>, args: Option<Args>) -> BypassResult<Value> {
        let name = method_name.ok_or(InvocationError::MethodNameAbsent)?;
        let operation = self
            .operations
            .resolve(name)
            .ok_or_else(|| InvocationError::OperationNotFound(name.to_string()))?;
        trace!(operation = %operation, "invoking element operation past its decorator");
        self.handler
            .invoke(self.element.as_ref(), operation, args)
            .map_err(BypassError::from)
    }

    fn as_element(&self) -> &ElementRef {
        &self.element
    }
}
