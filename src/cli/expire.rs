use clap::{ArgAction, Parser};
use paimon_action::{ActionError, ActionParams, Flag};

/// Flags for `expire`.
///
/// Values stay strings here; `ActionParams` owns conversion so errors name
/// the flag. `--help` prints the action's fixed usage text instead of clap's.
#[derive(Parser, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct ExpireArgs {
    /// Catalog/warehouse location
    #[arg(long, value_name = "warehouse-path")]
    pub warehouse: Option<String>,

    /// Database name
    #[arg(long, value_name = "database-name")]
    pub database: Option<String>,

    /// Table name
    #[arg(long, value_name = "table-name")]
    pub table: Option<String>,

    /// Minimum number of snapshots to retain
    #[arg(long, value_name = "num-retained-min", allow_negative_numbers = true)]
    pub num_retained_min: Option<String>,

    /// Maximum number of snapshots to retain
    #[arg(long, value_name = "num-retained-max", allow_negative_numbers = true)]
    pub num_retained_max: Option<String>,

    /// Snapshot age threshold in milliseconds
    #[arg(long, value_name = "millis-retained", allow_negative_numbers = true)]
    pub millis_retained: Option<String>,

    /// Catalog connection properties, `key=value[,key=value...]` (repeatable)
    #[arg(long, value_name = "key=value", action = ArgAction::Append)]
    pub catalog_conf: Vec<String>,

    /// Print usage for this action
    #[arg(short, long)]
    pub help: bool,
}

impl ExpireArgs {
    /// Flag mapping for the action factory, holding only supplied flags.
    pub fn into_params(self) -> Result<ActionParams, ActionError> {
        let single = [
            (Flag::Warehouse, self.warehouse),
            (Flag::Database, self.database),
            (Flag::Table, self.table),
            (Flag::NumRetainedMin, self.num_retained_min),
            (Flag::NumRetainedMax, self.num_retained_max),
            (Flag::MillisRetained, self.millis_retained),
        ];

        let pairs = single
            .into_iter()
            .filter_map(|(flag, value)| value.map(|v| (flag.name(), v)))
            .chain(
                self.catalog_conf
                    .into_iter()
                    .map(|v| (Flag::CatalogConf.name(), v)),
            );
        ActionParams::from_pairs(pairs)
    }
}
