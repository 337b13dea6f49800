use std::sync::Arc;

use element_proxy::{Args, Command, ElementRef, Value};

use crate::errors::{BypassResult, InvocationError};
use crate::policy::{BypassPolicy, RestArgsLayout};
use crate::unsafe_element::{UnsafeElement, UnsafeElementOf};

/// Command that can be executed on an intercepted element.
pub trait OuterCommand {
    /// Runs the command once on `element`, bypassing its decorator.
    fn execute_on(&self, element: Option<&ElementRef>) -> BypassResult<Value>;
}

/// Operation name plus arguments, invoked through an `UnsafeElementOf`.
#[derive(Clone, Debug)]
pub struct OuterCommandOf {
    method_name: String,
    args: Option<Args>,
}

impl OuterCommandOf {
    /// Targets the operation declared under `method_name`.
    pub fn of_method<'n>(
        method_name: impl Into<Option<&'n str>>,
        args: Option<Args>,
    ) -> BypassResult<Self> {
        let method_name = method_name
            .into()
            .ok_or(InvocationError::MethodNameAbsent)?;
        Ok(Self {
            method_name: method_name.to_string(),
            args,
        })
    }

    /// Targets the run-a-command operation with `command` as its first argument.
    pub fn of_command(
        command: impl Into<Option<Arc<dyn Command>>>,
        rest: Option<Args>,
    ) -> BypassResult<Self> {
        Self::of_command_with(&BypassPolicy::default(), command, rest)
    }

    pub fn of_command_with(
        policy: &BypassPolicy,
        command: impl Into<Option<Arc<dyn Command>>>,
        rest: Option<Args>,
    ) -> BypassResult<Self> {
        let command = command.into().ok_or(InvocationError::CommandAbsent)?;
        let args = with_first(Value::command(command), rest.as_deref(), policy.rest_args);
        Ok(Self {
            method_name: policy.execute_operation.clone(),
            args: Some(args),
        })
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }
}

impl OuterCommand for OuterCommandOf {
    fn execute_on(&self, element: Option<&ElementRef>) -> BypassResult<Value> {
        UnsafeElementOf::new(element)?.invoke(Some(self.method_name.as_str()), self.args.clone())
    }
}

fn with_first(first: Value, rest: Option<&[Value]>, layout: RestArgsLayout) -> Args {
    let rest = match rest {
        Some(rest) if !rest.is_empty() => rest,
        _ => return Args::from(vec![first]),
    };
    let mut args = Vec::with_capacity(rest.len() + 1);
    args.push(first);
    match layout {
        RestArgsLayout::Legacy => {
            args.extend_from_slice(&rest[..rest.len() - 1]);
            args.push(Value::null());
        }
        RestArgsLayout::Verbatim => args.extend_from_slice(rest),
    }
    Args::from(args)
}
