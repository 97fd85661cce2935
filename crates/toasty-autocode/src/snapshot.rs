//! Read-only view of reflected schema metadata.

mod column;
pub use column::ColumnDescriptor;

mod fk;
pub use fk::ForeignKeyDescriptor;

mod index;
pub use index::IndexDescriptor;

mod table;
pub use table::TableDescriptor;

mod ty;
pub use ty::NativeType;

mod verify;
pub(crate) use verify::verify as verify_tables;

use crate::{Result, TableFilter};

use serde::{Deserialize, Serialize};

/// The tables of a database as seen at introspection time.
///
/// Table order is significant: generated models, and the order in which
/// naming collisions are resolved, follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub tables: Vec<TableDescriptor>,
}

impl SchemaSnapshot {
    pub fn new(tables: Vec<TableDescriptor>) -> Self {
        Self { tables }
    }

    /// Parses a snapshot from its JSON representation.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }

    pub fn tables(&self) -> &[TableDescriptor] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDescriptor> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Returns the tables matching `filter`, in snapshot order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a TableFilter,
    ) -> impl Iterator<Item = &'a TableDescriptor> + 'a {
        self.tables
            .iter()
            .filter(move |table| filter.matches(&table.name))
    }

    /// Returns a copy holding only the tables in `schema`.
    pub fn in_schema(&self, schema: &str) -> SchemaSnapshot {
        SchemaSnapshot {
            tables: self
                .tables
                .iter()
                .filter(|table| table.schema.as_deref() == Some(schema))
                .cloned()
                .collect(),
        }
    }

    /// Checks the invariants a metadata source must uphold.
    pub fn verify(&self) -> Result<()> {
        verify_tables(&self.tables)
    }
}
