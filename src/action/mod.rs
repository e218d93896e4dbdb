pub mod expire;
pub mod params;
pub mod table;


use serde::Serialize;

use crate::error::Result;
use expire::{ExpireActionFactory, ExpireRequest};
use params::ActionParams;

/// A fully validated action request, ready for the action that executes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Expire(ExpireRequest),
}

impl Action {
    pub fn identifier(&self) -> &'static str {
        match self {
            Action::Expire(_) => expire::IDENTIFIER,
        }
    }
}

/// Outcome of offering a command to a factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    /// The factory owns the command and built its request.
    Built(Action),
    /// The command belongs to some other factory.
    NotRecognized,
}

/// Turns raw flags for one command into an [`Action`].
pub trait ActionFactory: Send + Sync {
    /// Command name routed to this factory.
    fn identifier(&self) -> &'static str;

    /// Validate `params` and build the request.
    fn create(&self, params: &ActionParams) -> Result<Action>;

    /// Usage text for the command.
    fn help(&self) -> &'static str;

    fn print_help(&self) {
        print!("{}", self.help());
    }

    /// Build the request when `command` names this factory.
    ///
    /// Validation errors only surface for commands the factory owns.
    fn try_create(&self, command: &str, params: &ActionParams) -> Result<Created> {
        if command != self.identifier() {
            return Ok(Created::NotRecognized);
        }
        self.create(params).map(Created::Built)
    }
}

/// Known action factories, looked up by identifier.
pub struct ActionRegistry {
    factories: Vec<Box<dyn ActionFactory>>,
}

impl ActionRegistry {
    pub fn new(factories: Vec<Box<dyn ActionFactory>>) -> Self {
        Self { factories }
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.identifier()).collect()
    }

    pub fn find(&self, command: &str) -> Option<&dyn ActionFactory> {
        self.factories
            .iter()
            .find(|f| f.identifier() == command)
            .map(|f| f.as_ref())
    }

    /// Offer `command` to each factory in turn.
    pub fn create(&self, command: &str, params: &ActionParams) -> Result<Created> {
        for factory in &self.factories {
            if let Created::Built(action) = factory.try_create(command, params)? {
                return Ok(Created::Built(action));
            }
        }
        Ok(Created::NotRecognized)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new(vec![Box::new(ExpireActionFactory)])
    }
}
