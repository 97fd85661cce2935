use super::{
    names::{field_ident, plural, singular},
    Generator, Relation, RelationKind, UnresolvedReference,
};
use crate::{
    snapshot::{ForeignKeyDescriptor, TableDescriptor},
    Result, Warning, WarningKind,
};

use std::collections::HashSet;

impl Generator<'_> {
    /// Marks every table that is a pure many-to-many link.
    ///
    /// A junction table has exactly two foreign keys, both resolvable, whose
    /// columns cover every column of the table. If it has a primary key, the
    /// key is exactly those columns. No foreign key in the selection may
    /// point at it, since it gets no model to point at.
    pub(super) fn classify_junctions(&mut self) {
        for i in 0..self.tables.len() {
            self.junctions[i] = self.junction_targets(i);
        }
    }

    fn junction_targets(&self, i: usize) -> Option<[usize; 2]> {
        let table = self.tables[i];
        let [a, b] = table.foreign_keys.as_slice() else {
            return None;
        };

        let covered: HashSet<&str> = a
            .columns
            .iter()
            .chain(&b.columns)
            .map(String::as_str)
            .collect();

        if !table
            .columns
            .iter()
            .all(|column| covered.contains(column.name.as_str()))
        {
            return None;
        }

        let key: HashSet<&str> = table
            .primary_key_columns()
            .map(|column| column.name.as_str())
            .collect();

        if !key.is_empty() && key != covered {
            return None;
        }

        let referenced = self.tables.iter().enumerate().any(|(j, other)| {
            other
                .foreign_keys
                .iter()
                .any(|fk| self.resolve(j, fk) == Some(i))
        });

        if referenced {
            return None;
        }

        Some([self.resolve(i, a)?, self.resolve(i, b)?])
    }

    /// Adds relation fields for every foreign key, visiting tables in
    /// snapshot order and keys in declaration order.
    pub(super) fn infer_relations(&mut self) -> Result<()> {
        for i in 0..self.tables.len() {
            match self.junctions[i] {
                Some(targets) => self.infer_many_to_many(i, targets)?,
                None => self.infer_foreign_keys(i)?,
            }
        }

        Ok(())
    }

    fn infer_foreign_keys(&mut self, i: usize) -> Result<()> {
        let table = self.tables[i];
        let Some(child) = self.model_of[i] else {
            return Ok(());
        };

        for fk in &table.foreign_keys {
            let Some((target, parent)) = self
                .resolve(i, fk)
                .and_then(|target| Some((target, self.model_of[target]?)))
            else {
                self.unresolved(child, table, fk);
                continue;
            };

            let target_table = self.tables[target];

            // Several keys to the same table need the key columns to tell the
            // relations apart.
            let ambiguous = table
                .foreign_keys
                .iter()
                .filter(|other| self.resolve(i, other) == Some(target))
                .count()
                > 1;

            let belongs_to = match fk.single_column().and_then(key_stem) {
                Some(stem) => stem.to_string(),
                None if ambiguous => {
                    format!("{}_{}", singular(&target_table.name), fk.columns.join("_"))
                }
                None => singular(&target_table.name),
            };

            let mut has_many = plural(&singular(&field_ident(&table.name)));
            if ambiguous {
                has_many = format!("{has_many}_{}", fk.columns.join("_"));
            }

            let key = self.field_names(child, &fk.columns);
            let references = self.field_names(parent, &fk.target_columns);
            let optional = fk.columns.iter().any(|column| {
                table
                    .column_named(column)
                    .is_some_and(|column| column.nullable)
            });

            let belongs_to = self.names.field(child, &belongs_to)?;
            let target_name = self.models[parent].name.clone();
            self.models[child].relations.push(Relation {
                name: belongs_to.clone(),
                target: target_name,
                kind: RelationKind::BelongsTo {
                    key,
                    references,
                    optional,
                },
            });

            let has_many = self.names.field(parent, &has_many)?;
            let child_name = self.models[child].name.clone();
            self.models[parent].relations.push(Relation {
                name: has_many,
                target: child_name,
                kind: RelationKind::HasMany { pair: belongs_to },
            });
        }

        Ok(())
    }

    fn infer_many_to_many(&mut self, i: usize, [left, right]: [usize; 2]) -> Result<()> {
        let junction = self.tables[i];
        let [a, b] = junction.foreign_keys.as_slice() else {
            return Ok(());
        };
        let (Some(l), Some(r)) = (self.model_of[left], self.model_of[right]) else {
            return Ok(());
        };

        let (left_table, right_table) = (self.tables[left], self.tables[right]);
        self.many_to_many(l, r, junction, a, b, right_table)?;
        self.many_to_many(r, l, junction, b, a, left_table)
    }

    /// Adds the many-to-many field on `model`, which the junction reaches
    /// through `local`, pointing at `target` through `remote`.
    fn many_to_many(
        &mut self,
        model: usize,
        target: usize,
        junction: &TableDescriptor,
        local: &ForeignKeyDescriptor,
        remote: &ForeignKeyDescriptor,
        target_table: &TableDescriptor,
    ) -> Result<()> {
        let stem = match remote.single_column().and_then(key_stem) {
            Some(stem) => stem.to_string(),
            None => singular(&target_table.name),
        };

        let name = self
            .names
            .field(model, &plural(&singular(&field_ident(&stem))))?;
        let target_name = self.models[target].name.clone();

        self.models[model].relations.push(Relation {
            name,
            target: target_name,
            kind: RelationKind::ManyToMany {
                table: junction.name.clone(),
                source: local.columns.clone(),
                target: remote.columns.clone(),
            },
        });

        Ok(())
    }

    fn unresolved(&mut self, model: usize, table: &TableDescriptor, fk: &ForeignKeyDescriptor) {
        let model = &mut self.models[model];

        model.unresolved.push(UnresolvedReference {
            columns: fk.columns.clone(),
            target_table: fk.target_table.clone(),
            target_columns: fk.target_columns.clone(),
        });

        model.warnings.push(Warning {
            table: table.name.clone(),
            kind: WarningKind::UnresolvableReference {
                columns: fk.columns.clone(),
                target_table: fk.target_table.clone(),
                target_columns: fk.target_columns.clone(),
            },
        });
    }

    /// Field names on `model` for the given columns.
    fn field_names(&self, model: usize, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .filter_map(|column| self.models[model].field_for_column(column))
            .map(|field| field.name.clone())
            .collect()
    }
}

/// Strips a trailing `_id` from a key column name: `author_id` -> `author`.
fn key_stem(column: &str) -> Option<&str> {
    let split = column.len().checked_sub(3)?;
    let (stem, suffix) = (column.get(..split)?, column.get(split..)?);

    (suffix.eq_ignore_ascii_case("_id") && !stem.is_empty()).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_stems() {
        assert_eq!(key_stem("author_id"), Some("author"));
        assert_eq!(key_stem("Author_ID"), Some("Author"));
        assert_eq!(key_stem("_id"), None);
        assert_eq!(key_stem("id"), None);
        assert_eq!(key_stem("author"), None);
        assert_eq!(key_stem("é_id"), Some("é"));
    }
}
