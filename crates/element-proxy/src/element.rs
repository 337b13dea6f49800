use std::sync::Arc;

use crate::errors::Thrown;
use crate::operation::Operation;
use crate::proxy::InvocationHandler;
use crate::value::{Args, Value};

/// Browser element handle.
pub trait Element: Send + Sync {
    /// Runs a declared operation through the handle's normal call path.
    fn call(&self, operation: &Operation, args: Option<Args>) -> Result<Value, Thrown>;

    /// Interception callback of a decorated handle. Plain handles have none.
    fn interception(&self) -> Option<Arc<dyn InvocationHandler>> {
        None
    }
}

pub type ElementRef = Arc<dyn Element>;

/// Address identity of a handle, comparable between `&dyn Element` and `ElementRef`.
pub fn element_id(element: &dyn Element) -> usize {
    (element as *const _) as *const () as usize
}
