use super::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor};

use serde::{Deserialize, Serialize};

/// A reflected database table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Name of the table
    pub name: String,

    /// Schema the table lives in, when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// The table's columns, in database order
    pub columns: Vec<ColumnDescriptor>,

    #[serde(default)]
    pub indexes: Vec<IndexDescriptor>,

    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            columns: vec![],
            indexes: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    pub fn index(mut self, index: IndexDescriptor) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKeyDescriptor) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    pub fn column_named(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// `schema.name`, or just `name` when the schema is unknown.
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
