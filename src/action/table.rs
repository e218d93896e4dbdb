use std::fmt;

use serde::Serialize;

/// Three-part reference to a table: warehouse location, database and table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableIdentifier {
    warehouse: String,
    database: String,
    table: String,
}

impl TableIdentifier {
    pub fn new(
        warehouse: impl Into<String>,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            warehouse: warehouse.into(),
            database: database.into(),
            table: table.into(),
        }
    }

    pub fn warehouse(&self) -> &str {
        &self.warehouse
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl fmt::Display for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} (warehouse: {})", self.database, self.table, self.warehouse)
    }
}
