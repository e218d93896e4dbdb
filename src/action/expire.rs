use std::collections::BTreeMap;

use serde::Serialize;

use super::params::{ActionParams, Flag};
use super::table::TableIdentifier;
use super::{Action, ActionFactory};
use crate::error::Result;

pub const IDENTIFIER: &str = "expire";

// Printed verbatim; operator scripts match on this text, including the
// missing space before `--num-retained-max`.
const HELP: &str = concat!(
    "Action \"expire\" keep at least one snapshot so that users will not accidentally clear all snapshots.\n",
    "\n",
    "Syntax:\n",
    "  expire --warehouse <warehouse-path> --database <database-name> ",
    "--table <table-name> --num-retained-min <num-retained-min>",
    "--num-retained-max <num-retained-max> --millis-retained <millis-retained>\n",
    "\n",
);

const REQUIRED: [Flag; 3] = [
    Flag::NumRetainedMin,
    Flag::NumRetainedMax,
    Flag::MillisRetained,
];

/// Request to expire snapshots of one table under a retention policy.
///
/// `retained_max` is not checked against `retained_min`; the expiration
/// action that consumes this request owns that rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpireRequest {
    #[serde(flatten)]
    table: TableIdentifier,
    retained_min: u32,
    retained_max: u32,
    retained_millis: u64,
    catalog_config: BTreeMap<String, String>,
}

impl ExpireRequest {
    pub fn new(
        table: TableIdentifier,
        retained_min: u32,
        retained_max: u32,
        retained_millis: u64,
        catalog_config: BTreeMap<String, String>,
    ) -> Self {
        Self {
            table,
            retained_min,
            retained_max,
            retained_millis,
            catalog_config,
        }
    }

    pub fn table(&self) -> &TableIdentifier {
        &self.table
    }

    pub fn retained_min(&self) -> u32 {
        self.retained_min
    }

    pub fn retained_max(&self) -> u32 {
        self.retained_max
    }

    pub fn retained_millis(&self) -> u64 {
        self.retained_millis
    }

    pub fn catalog_config(&self) -> &BTreeMap<String, String> {
        &self.catalog_config
    }
}

/// Factory for the `expire` action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpireActionFactory;

impl ExpireActionFactory {
    /// Validate `params` and build the typed request.
    pub fn build(&self, params: &ActionParams) -> Result<ExpireRequest> {
        for flag in REQUIRED {
            params.require(flag)?;
        }

        let table = params.table_identifier()?;
        let catalog_config = params.optional_config_map(Flag::CatalogConf)?;
        let retained_min = params.parse_u32(Flag::NumRetainedMin)?;
        let retained_max = params.parse_u32(Flag::NumRetainedMax)?;
        let retained_millis = params.parse_u64(Flag::MillisRetained)?;

        Ok(ExpireRequest::new(
            table,
            retained_min,
            retained_max,
            retained_millis,
            catalog_config,
        ))
    }
}

impl ActionFactory for ExpireActionFactory {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn create(&self, params: &ActionParams) -> Result<Action> {
        self.build(params).map(Action::Expire)
    }

    fn help(&self) -> &'static str {
        HELP
    }
}
