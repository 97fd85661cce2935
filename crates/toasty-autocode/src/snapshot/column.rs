use super::NativeType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// The name of the column in the database.
    pub name: String,

    /// The column type as reported by the database.
    #[serde(rename = "type")]
    pub ty: NativeType,

    /// Whether or not the column is nullable
    #[serde(default)]
    pub nullable: bool,

    /// Default value expression, kept as reported by the database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// True if the column is part of the table's primary key
    #[serde(default)]
    pub primary_key: bool,

    /// True if the database assigns the column's value on insert
    /// (`serial`, identity, `AUTO_INCREMENT`, ...).
    #[serde(default)]
    pub auto_increment: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<NativeType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            default: None,
            primary_key: false,
            auto_increment: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_expr(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }
}
