//! Element handle boundary for intercepted browser elements
//!
//! This crate describes the surface the bypass layer consumes:
//! - `Element` handles and their normal call path
//! - `ProxyElement`, a decorated handle that routes calls through an `InvocationHandler`
//! - The static table of declared element operations
//! - `Command` values executed against a handle and its `ElementSource`
//! - Type-erased `Value`s and shared `Args` arrays

pub mod command;
pub mod element;
pub mod errors;
pub mod operation;
mod proxy;
mod value;

pub use command::{Command, ElementSource};
pub use element::{element_id, Element, ElementRef};
pub use errors::{Failure, Thrown, UndeclaredFailure};
pub use operation::{declared_operations, Operation, EXECUTE};
pub use proxy::{InvocationHandler, ProxyElement};
pub use value::{args, Args, Value};
