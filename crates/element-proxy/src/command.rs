use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::value::{Args, Value};

/// Reusable operation executed against an element handle.
pub trait Command: Send + Sync {
    fn execute(
        &self,
        proxy: &dyn Element,
        locator: &ElementSource,
        args: Option<Args>,
    ) -> io::Result<Value>;
}

/// Locator context a handle was resolved from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSource {
    pub selector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl ElementSource {
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            index: None,
        }
    }

    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self {
            selector: selector.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for ElementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.selector, index),
            None => f.write_str(&self.selector),
        }
    }
}
