use super::TableDescriptor;
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    tables: Vec<&'a TableDescriptor>,
}

pub(crate) fn verify<'a>(tables: impl IntoIterator<Item = &'a TableDescriptor>) -> Result<()> {
    Verify {
        tables: tables.into_iter().collect(),
    }
    .verify()
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_names_are_unique()?;

        for table in &self.tables {
            self.verify_column_names_are_unique(table)?;
            self.verify_indices_reference_columns(table)?;
            self.verify_foreign_keys_are_well_formed(table)?;
        }

        Ok(())
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.tables {
            if !names.insert((table.schema.as_deref(), table.name.as_str())) {
                return Err(Error::malformed_snapshot(format!(
                    "duplicate table `{}`",
                    table.qualified_name()
                )));
            }
        }

        Ok(())
    }

    fn verify_column_names_are_unique(&self, table: &TableDescriptor) -> Result<()> {
        let mut names = HashSet::new();

        for column in &table.columns {
            if !names.insert(column.name.as_str()) {
                return Err(Error::malformed_snapshot(format!(
                    "duplicate column `{}` in table `{}`",
                    column.name,
                    table.qualified_name()
                )));
            }
        }

        Ok(())
    }

    fn verify_indices_reference_columns(&self, table: &TableDescriptor) -> Result<()> {
        for index in &table.indexes {
            if index.columns.is_empty() {
                return Err(Error::malformed_snapshot(format!(
                    "index `{}` on table `{}` has no columns",
                    index.name,
                    table.qualified_name()
                )));
            }

            for column in &index.columns {
                if table.column_named(column).is_none() {
                    return Err(Error::malformed_snapshot(format!(
                        "index `{}` references unknown column `{}` in table `{}`",
                        index.name,
                        column,
                        table.qualified_name()
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_foreign_keys_are_well_formed(&self, table: &TableDescriptor) -> Result<()> {
        for fk in &table.foreign_keys {
            if fk.columns.is_empty() || fk.columns.len() != fk.target_columns.len() {
                return Err(Error::malformed_snapshot(format!(
                    "foreign key ({}) -> `{}` ({}) on table `{}` has mismatched columns",
                    fk.columns.join(", "),
                    fk.target_table,
                    fk.target_columns.join(", "),
                    table.qualified_name()
                )));
            }

            for column in &fk.columns {
                if table.column_named(column).is_none() {
                    return Err(Error::malformed_snapshot(format!(
                        "foreign key references unknown column `{}` in table `{}`",
                        column,
                        table.qualified_name()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, SchemaSnapshot, TableDescriptor,
    };

    fn users() -> TableDescriptor {
        TableDescriptor::new("users")
            .column(ColumnDescriptor::new("id", "integer").primary_key())
            .column(ColumnDescriptor::new("name", "text"))
    }

    #[test]
    fn valid_snapshot() {
        let snapshot = SchemaSnapshot::new(vec![
            users(),
            TableDescriptor::new("users").schema("audit").column(ColumnDescriptor::new("id", "integer")),
        ]);
        assert!(snapshot.verify().is_ok());
    }

    #[test]
    fn duplicate_table() {
        let snapshot = SchemaSnapshot::new(vec![users(), users()]);
        let err = snapshot.verify().unwrap_err();
        assert!(err.is_malformed_snapshot());
        assert_eq!(err.to_string(), "malformed snapshot: duplicate table `users`");
    }

    #[test]
    fn duplicate_column() {
        let snapshot =
            SchemaSnapshot::new(vec![users().column(ColumnDescriptor::new("name", "varchar(10)"))]);
        let err = snapshot.verify().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed snapshot: duplicate column `name` in table `users`"
        );
    }

    #[test]
    fn index_on_unknown_column() {
        let snapshot =
            SchemaSnapshot::new(vec![users().index(IndexDescriptor::new("ix_email", ["email"]))]);
        let err = snapshot.verify().unwrap_err();
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn foreign_key_with_mismatched_columns() {
        let snapshot = SchemaSnapshot::new(vec![users().foreign_key(ForeignKeyDescriptor::new(
            vec!["id", "name"],
            "accounts",
            vec!["id"],
        ))]);
        let err = snapshot.verify().unwrap_err();
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn foreign_key_on_unknown_column() {
        let snapshot = SchemaSnapshot::new(vec![
            users().foreign_key(ForeignKeyDescriptor::single("account_id", "accounts", "id"))
        ]);
        let err = snapshot.verify().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed snapshot: foreign key references unknown column `account_id` in table `users`"
        );
    }
}
