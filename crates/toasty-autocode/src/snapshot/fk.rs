use serde::{Deserialize, Serialize};

/// A foreign key constraint, owned by the table holding the referencing
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDescriptor {
    /// Constraint name, when the database reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Referencing columns on the owning table
    pub columns: Vec<String>,

    /// Schema of the referenced table. `None` means the owning table's schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_schema: Option<String>,

    /// Referenced table
    pub target_table: String,

    /// Referenced columns, paired positionally with `columns`
    pub target_columns: Vec<String>,
}

impl ForeignKeyDescriptor {
    pub fn new<I, S>(columns: I, target_table: impl Into<String>, target_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            target_schema: None,
            target_table: target_table.into(),
            target_columns: target_columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for a single-column foreign key.
    pub fn single(
        column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self::new([column.into()], target_table, [target_column.into()])
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn target_schema(mut self, schema: impl Into<String>) -> Self {
        self.target_schema = Some(schema.into());
        self
    }

    /// Returns the single referencing column, if the key has exactly one.
    pub fn single_column(&self) -> Option<&str> {
        match self.columns.as_slice() {
            [column] => Some(column),
            _ => None,
        }
    }
}
