//! Flag extraction and typed conversion for action arguments.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::action::table::TableIdentifier;
use crate::error::{ActionError, Result};

/// Flags recognized by the action factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    Warehouse,
    Database,
    Table,
    NumRetainedMin,
    NumRetainedMax,
    MillisRetained,
    CatalogConf,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Flag::Warehouse,
        Flag::Database,
        Flag::Table,
        Flag::NumRetainedMin,
        Flag::NumRetainedMax,
        Flag::MillisRetained,
        Flag::CatalogConf,
    ];

    /// Name as written on the command line, without leading dashes.
    pub fn name(self) -> &'static str {
        match self {
            Flag::Warehouse => "warehouse",
            Flag::Database => "database",
            Flag::Table => "table",
            Flag::NumRetainedMin => "num-retained-min",
            Flag::NumRetainedMax => "num-retained-max",
            Flag::MillisRetained => "millis-retained",
            Flag::CatalogConf => "catalog-conf",
        }
    }

    /// Whether the flag may be given more than once.
    pub fn is_repeatable(self) -> bool {
        matches!(self, Flag::CatalogConf)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flag {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| ActionError::UnrecognizedFlag {
                name: s.to_string(),
            })
    }
}

/// Raw flag values for a single action invocation.
///
/// Values stay as strings until a factory asks for them through one of the
/// typed accessors, so conversion errors always name the flag they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionParams {
    values: BTreeMap<Flag, Vec<String>>,
}

impl ActionParams {
    /// Build from `(name, value)` pairs; names carry no leading dashes.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            let flag = name.as_ref().parse()?;
            params.insert(flag, value.into())?;
        }
        Ok(params)
    }

    fn insert(&mut self, flag: Flag, value: String) -> Result<()> {
        let values = self.values.entry(flag).or_default();
        if !values.is_empty() && !flag.is_repeatable() {
            return Err(ActionError::invalid(flag, &value, "flag given more than once"));
        }
        values.push(value);
        Ok(())
    }

    pub fn has(&self, flag: Flag) -> bool {
        self.values.contains_key(&flag)
    }

    /// Fail with [`ActionError::MissingArgument`] when `flag` was not supplied.
    pub fn require(&self, flag: Flag) -> Result<()> {
        if self.has(flag) {
            Ok(())
        } else {
            Err(ActionError::MissingArgument { flag })
        }
    }

    /// First value of `flag`, if supplied.
    pub fn get(&self, flag: Flag) -> Option<&str> {
        self.values
            .get(&flag)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn required(&self, flag: Flag) -> Result<&str> {
        self.get(flag).ok_or(ActionError::MissingArgument { flag })
    }

    /// Parse a required flag as an integer.
    pub fn parse_u32(&self, flag: Flag) -> Result<u32> {
        self.parse_number(flag)
    }

    /// Parse a required flag as a long.
    pub fn parse_u64(&self, flag: Flag) -> Result<u64> {
        self.parse_number(flag)
    }

    fn parse_number<T>(&self, flag: Flag) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.required(flag)?;
        raw.parse()
            .map_err(|e: T::Err| ActionError::invalid(flag, raw, e.to_string()))
    }

    /// Resolve `--warehouse`, `--database` and `--table` into a table reference.
    pub fn table_identifier(&self) -> Result<TableIdentifier> {
        let warehouse = self.non_empty(Flag::Warehouse)?;
        let database = self.non_empty(Flag::Database)?;
        let table = self.non_empty(Flag::Table)?;
        Ok(TableIdentifier::new(warehouse, database, table))
    }

    fn non_empty(&self, flag: Flag) -> Result<&str> {
        let value = self.required(flag)?;
        if value.trim().is_empty() {
            return Err(ActionError::invalid(flag, value, "value must not be empty"));
        }
        Ok(value)
    }

    /// Collect `key=value` pairs from every occurrence of `flag`.
    ///
    /// Each occurrence may hold several comma-separated pairs. A piece
    /// without `=` continues the previous pair's value, so
    /// `uri=thrift://a:9083,thrift://b:9083` is one entry. Later keys
    /// override earlier ones. An absent flag yields an empty map.
    pub fn optional_config_map(&self, flag: Flag) -> Result<BTreeMap<String, String>> {
        let mut config: BTreeMap<String, String> = BTreeMap::new();
        let Some(values) = self.values.get(&flag) else {
            return Ok(config);
        };

        for raw in values {
            let mut last_key: Option<&str> = None;
            for piece in raw.split(',') {
                if let Some((key, value)) = piece.split_once('=') {
                    let key = key.trim();
                    if key.is_empty() {
                        return Err(ActionError::invalid(
                            flag,
                            raw,
                            format!("empty key in {piece:?}"),
                        ));
                    }
                    config.insert(key.to_string(), value.trim().to_string());
                    last_key = Some(key);
                    continue;
                }

                let Some(value) = last_key.and_then(|key| config.get_mut(key)) else {
                    return Err(ActionError::invalid(
                        flag,
                        raw,
                        format!("expected key=value, got {piece:?}"),
                    ));
                };
                value.push(',');
                value.push_str(piece.trim());
            }
        }

        Ok(config)
    }
}
