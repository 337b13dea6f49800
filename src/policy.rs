use serde::{Deserialize, Serialize};

use element_proxy::EXECUTE;

/// How trailing arguments are laid out after the command in a command-based
/// outer command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestArgsLayout {
    /// `[command, rest[..n - 1], null]`; length is `n + 1`.
    #[default]
    Legacy,
    /// `[command, rest..]`.
    Verbatim,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BypassPolicy {
    pub execute_operation: String,
    pub rest_args: RestArgsLayout,
}

impl Default for BypassPolicy {
    fn default() -> Self {
        Self {
            execute_operation: EXECUTE.to_string(),
            rest_args: RestArgsLayout::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_execute_with_legacy_layout() {
        let policy = BypassPolicy::default();
        assert_eq!(policy.execute_operation, "execute");
        assert_eq!(policy.rest_args, RestArgsLayout::Legacy);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let policy: BypassPolicy =
            serde_json::from_str(r#"{"rest_args":"verbatim"}"#).expect("valid policy");
        assert_eq!(policy.execute_operation, "execute");
        assert_eq!(policy.rest_args, RestArgsLayout::Verbatim);
    }
}
