use std::io;
use std::sync::Arc;

use element_proxy::{Args, Command, Element, ElementSource, Value};

use crate::errors::{BypassResult, InvocationError};

/// Command that always runs its origin with a fixed argument list.
///
/// Whatever arguments the caller supplies at execution time are dropped.
pub struct CustomArgsCommandOf {
    origin: Arc<dyn Command>,
    args: Option<Args>,
}

impl CustomArgsCommandOf {
    pub fn new(
        origin: impl Into<Option<Arc<dyn Command>>>,
        args: Option<Args>,
    ) -> BypassResult<Self> {
        let origin = origin.into().ok_or(InvocationError::CommandAbsent)?;
        Ok(Self { origin, args })
    }
}

impl Command for CustomArgsCommandOf {
    fn execute(
        &self,
        proxy: &dyn Element,
        locator: &ElementSource,
        _ignored: Option<Args>,
    ) -> io::Result<Value> {
        self.origin.execute(proxy, locator, self.args.clone())
    }
}

/// Pins `args` onto `origin`, ready to hand to code that supplies its own.
pub fn custom_args_command(
    origin: impl Into<Option<Arc<dyn Command>>>,
    args: Option<Args>,
) -> BypassResult<Arc<dyn Command>> {
    let command = CustomArgsCommandOf::new(origin, args)?;
    Ok(Arc::new(command))
}
