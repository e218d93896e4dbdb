//! Table maintenance action factories: validate raw command-line flags and
//! build typed action requests.

pub mod action;
pub mod error;

// Re-export commonly used types
pub use action::expire::{ExpireActionFactory, ExpireRequest};
pub use action::params::{ActionParams, Flag};
pub use action::table::TableIdentifier;
pub use action::{Action, ActionFactory, ActionRegistry, Created};
pub use error::ActionError;
