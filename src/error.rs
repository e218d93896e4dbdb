//! Error types for action argument validation.

use thiserror::Error;

use crate::action::params::Flag;

/// Errors raised while turning raw flags into an action request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("missing required argument: --{flag}")]
    MissingArgument { flag: Flag },

    #[error("invalid value {value:?} for --{flag}: {reason}")]
    InvalidArgumentFormat {
        flag: Flag,
        value: String,
        reason: String,
    },

    #[error("unrecognized flag: --{name}")]
    UnrecognizedFlag { name: String },
}

impl ActionError {
    pub(crate) fn invalid(flag: Flag, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgumentFormat {
            flag,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;
