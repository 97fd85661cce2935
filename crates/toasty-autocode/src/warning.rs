use std::fmt;

/// A non-fatal condition found while generating models.
///
/// Warnings are attached to the table (and therefore the generated struct)
/// they affect. The generator never prints them; surfacing them is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Name of the table the warning is attached to
    pub table: String,

    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A foreign key targets a table (or columns) missing from the snapshot.
    /// The relationship is omitted.
    UnresolvableReference {
        columns: Vec<String>,
        target_table: String,
        target_columns: Vec<String>,
    },

    /// A column's native type has no mapping. The column falls back to
    /// `String`.
    UnmappableType { column: String, native: String },
}

impl Warning {
    pub fn is_unresolvable_reference(&self) -> bool {
        matches!(self.kind, WarningKind::UnresolvableReference { .. })
    }

    pub fn is_unmappable_type(&self) -> bool {
        matches!(self.kind, WarningKind::UnmappableType { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnresolvableReference {
                columns,
                target_table,
                target_columns,
            } => write!(
                f,
                "table `{}`: foreign key ({}) references `{}` ({}), which is not in the snapshot; relationship omitted",
                self.table,
                columns.join(", "),
                target_table,
                target_columns.join(", "),
            ),
            WarningKind::UnmappableType { column, native } => write!(
                f,
                "table `{}`: column `{}` has unrecognized type `{}`; mapped to String",
                self.table, column, native,
            ),
        }
    }
}
