use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::command::Command;

/// Shared argument array passed to operations and commands.
///
/// Cloning an `Args` shares the same array, so identity survives hand-offs.
pub type Args = Arc<[Value]>;

/// Collects values into a shared argument array.
pub fn args<I>(values: I) -> Args
where
    I: IntoIterator<Item = Value>,
{
    values.into_iter().collect()
}

/// Null-able, type-erased value exchanged with element operations.
#[derive(Clone, Default)]
pub struct Value(Option<Arc<dyn Any + Send + Sync>>);

impl Value {
    pub fn null() -> Self {
        Self(None)
    }

    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        let erased: Arc<dyn Any + Send + Sync> = value;
        Self(Some(erased))
    }

    /// Wraps a command so it can travel inside an argument array.
    pub fn command(command: Arc<dyn Command>) -> Self {
        Self::new(command)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref()?.downcast_ref::<T>()
    }

    /// Shared handle to the payload when it holds a `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.0.clone()?.downcast::<T>().ok()
    }

    pub fn as_command(&self) -> Option<&Arc<dyn Command>> {
        self.downcast_ref::<Arc<dyn Command>>()
    }

    /// Reference identity; two nulls are the same value.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.0, &other.0) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("Value(null)"),
            Some(inner) => write!(f, "Value({:p})", Arc::as_ptr(inner)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let value = Value::new(String::from("abc"));
        let copy = value.clone();
        assert!(value.ptr_eq(&copy));
        assert!(!value.ptr_eq(&Value::new(String::from("abc"))));
        assert!(Value::null().ptr_eq(&Value::default()));
        assert!(!Value::null().ptr_eq(&value));
    }

    #[test]
    fn downcast_checks_payload_type() {
        let value = Value::new(12_i32);
        assert_eq!(value.downcast_ref::<i32>(), Some(&12));
        assert!(value.downcast_ref::<i64>().is_none());
        assert!(value.downcast::<String>().is_none());
        assert!(Value::null().downcast_ref::<i32>().is_none());
    }

    #[test]
    fn from_arc_keeps_the_allocation() {
        let payload = Arc::new(4_i64);
        let value = Value::from_arc(Arc::clone(&payload));
        let back = value.downcast::<i64>().expect("i64 payload");
        assert!(Arc::ptr_eq(&payload, &back));
    }

    #[test]
    fn args_share_the_array() {
        let array = args([Value::new(123_i32), Value::null()]);
        let shared = Args::clone(&array);
        assert!(Arc::ptr_eq(&array, &shared));
        assert_eq!(array.len(), 2);
        assert!(array[1].is_null());
    }
}
