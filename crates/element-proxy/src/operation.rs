//! Declared element operations
//!
//! The table below is the capability surface of an element handle. It lists
//! overloads as separate entries in declaration order.

use std::fmt;

/// Operation that runs a `Command` value against the handle.
pub const EXECUTE: &str = "execute";

/// Descriptor of one declared element operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    name: &'static str,
    params: &'static [&'static str],
}

impl Operation {
    pub const fn new(name: &'static str, params: &'static [&'static str]) -> Self {
        Self { name, params }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared parameter type names, in order.
    pub fn params(&self) -> &'static [&'static str] {
        self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(", "))
    }
}

static DECLARED_OPERATIONS: &[Operation] = &[
    Operation::new("click", &[]),
    Operation::new("click", &["ClickOptions"]),
    Operation::new("doubleClick", &[]),
    Operation::new("contextClick", &[]),
    Operation::new("hover", &[]),
    Operation::new("dragAndDrop", &["DragAndDropOptions"]),
    Operation::new("setValue", &["String"]),
    Operation::new("val", &[]),
    Operation::new("val", &["String"]),
    Operation::new("append", &["String"]),
    Operation::new("clear", &[]),
    Operation::new("pressEnter", &[]),
    Operation::new("pressTab", &[]),
    Operation::new("pressEscape", &[]),
    Operation::new("text", &[]),
    Operation::new("getText", &[]),
    Operation::new("innerText", &[]),
    Operation::new("innerHtml", &[]),
    Operation::new("getValue", &[]),
    Operation::new("attr", &["String"]),
    Operation::new("getAttribute", &["String"]),
    Operation::new("data", &["String"]),
    Operation::new("name", &[]),
    Operation::new("getTagName", &[]),
    Operation::new("exists", &[]),
    Operation::new("isDisplayed", &[]),
    Operation::new("isEnabled", &[]),
    Operation::new("isSelected", &[]),
    Operation::new("isImage", &[]),
    Operation::new("should", &["Condition[]"]),
    Operation::new("shouldHave", &["Condition[]"]),
    Operation::new("shouldBe", &["Condition[]"]),
    Operation::new("shouldNot", &["Condition[]"]),
    Operation::new("shouldNotHave", &["Condition[]"]),
    Operation::new("shouldNotBe", &["Condition[]"]),
    Operation::new("find", &["String"]),
    Operation::new("find", &["String", "int"]),
    Operation::new("findAll", &["String"]),
    Operation::new("parent", &[]),
    Operation::new("closest", &["String"]),
    Operation::new("sibling", &["int"]),
    Operation::new("scrollTo", &[]),
    Operation::new("scrollIntoView", &["boolean"]),
    Operation::new("selectOption", &["String", "String[]"]),
    Operation::new("selectOption", &["int", "int[]"]),
    Operation::new("getSelectedOption", &[]),
    Operation::new("highlight", &[]),
    Operation::new("screenshot", &[]),
    Operation::new("getSearchCriteria", &[]),
    Operation::new("toWebElement", &[]),
    Operation::new("getWrappedElement", &[]),
    Operation::new(EXECUTE, &["Command"]),
    Operation::new(EXECUTE, &["Command", "Duration"]),
    Operation::new("toString", &[]),
    Operation::new("hashCode", &[]),
    Operation::new("equals", &["Object"]),
];

/// All operations declared on an element handle, overloads included.
pub fn declared_operations() -> &'static [Operation] {
    DECLARED_OPERATIONS
}
