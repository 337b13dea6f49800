//! Element invocation bypass
//!
//! Calls on a decorated element handle normally pass through its decorator,
//! which re-invokes them until they succeed or time out. This crate lets a
//! caller run one operation exactly once, straight through the handle's
//! interception callback:
//! - `UnsafeElementOf` invokes any declared operation by name with caller-chosen arguments
//! - `OuterCommandOf` packages an operation name, or a command, with fixed arguments
//! - `CustomArgsCommandOf` pins a command's arguments regardless of what it is called with

pub mod custom_args;
pub mod errors;
pub mod operations;
pub mod outer_command;
pub mod policy;
pub mod unsafe_element;

pub use custom_args::{custom_args_command, CustomArgsCommandOf};
pub use errors::{BypassError, BypassResult, InvocationError};
pub use operations::{OperationCache, OperationSource, ELEMENT_OPERATIONS};
pub use outer_command::{OuterCommand, OuterCommandOf};
pub use policy::{BypassPolicy, RestArgsLayout};
pub use unsafe_element::{UnsafeElement, UnsafeElementOf};
