use anyhow::{anyhow, Result};
use postgres::{Client, NoTls};
use std::collections::HashSet;
use toasty_autocode::{
    ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, MetadataSource, NativeType,
    SchemaSnapshot, TableDescriptor,
};
use tracing::debug;

/// Reflects a live PostgreSQL database through `pg_catalog`
pub struct PostgresSource {
    client: Client,
}

impl std::fmt::Debug for PostgresSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresSource").finish_non_exhaustive()
    }
}

impl PostgresSource {
    /// Connects to `url`, failing right away if the database is unreachable.
    pub fn connect(url: &str) -> Result<PostgresSource> {
        let client =
            Client::connect(url, NoTls).map_err(|err| anyhow!("Could not connect to {url:?}: {err}"))?;

        debug!("connected to database");
        Ok(PostgresSource { client })
    }

    fn reflect_schema(&mut self, schema: Option<&str>) -> Result<SchemaSnapshot> {
        let schema: String = match schema {
            Some(schema) => schema.to_string(),
            None => self.client.query_one("SELECT current_schema()::text", &[])?.get(0),
        };

        let rows = self.client.query(
            "SELECT c.oid, c.relname::text
             FROM pg_catalog.pg_class c
             JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
             WHERE n.nspname = $1 AND c.relkind IN ('r', 'p') AND NOT c.relispartition
             ORDER BY c.relname",
            &[&schema],
        )?;

        let mut tables = Vec::with_capacity(rows.len());

        for row in rows {
            let oid: u32 = row.get(0);
            let name: String = row.get(1);

            let table = self.reflect_table(oid, TableDescriptor::new(name).schema(&schema))?;
            debug!(
                table = %table.name,
                columns = table.columns.len(),
                foreign_keys = table.foreign_keys.len(),
                "reflected table"
            );

            tables.push(table);
        }

        Ok(SchemaSnapshot::new(tables))
    }

    fn reflect_table(&mut self, oid: u32, mut table: TableDescriptor) -> Result<TableDescriptor> {
        let primary_key: HashSet<String> = self
            .client
            .query(
                "SELECT a.attname::text
                 FROM pg_catalog.pg_index i
                 JOIN pg_catalog.pg_attribute a
                   ON a.attrelid = i.indrelid AND a.attnum = ANY(i.indkey)
                 WHERE i.indrelid = $1 AND i.indisprimary",
                &[&oid],
            )?
            .iter()
            .map(|row| row.get(0))
            .collect();

        for row in self.client.query(
            "SELECT a.attname::text,
                    pg_catalog.format_type(a.atttypid, a.atttypmod),
                    NOT a.attnotnull,
                    pg_catalog.pg_get_expr(d.adbin, d.adrelid),
                    a.attidentity IN ('a', 'd')
             FROM pg_catalog.pg_attribute a
             LEFT JOIN pg_catalog.pg_attrdef d
               ON d.adrelid = a.attrelid AND d.adnum = a.attnum
             WHERE a.attrelid = $1 AND a.attnum > 0 AND NOT a.attisdropped
             ORDER BY a.attnum",
            &[&oid],
        )? {
            let name: String = row.get(0);
            let ty: String = row.get(1);
            let default: Option<String> = row.get(3);
            let identity: bool = row.get(4);

            let serial = default
                .as_deref()
                .is_some_and(|default| default.starts_with("nextval("));

            table.columns.push(ColumnDescriptor {
                primary_key: primary_key.contains(&name),
                name,
                ty: NativeType::parse(&ty),
                nullable: row.get(2),
                default,
                auto_increment: identity || serial,
            });
        }

        // Expression indexes have no column list to report
        for row in self.client.query(
            "SELECT ic.relname::text,
                    i.indisunique,
                    array(
                        SELECT a.attname::text
                        FROM unnest(i.indkey::int2[]) WITH ORDINALITY AS k(attnum, ord)
                        JOIN pg_catalog.pg_attribute a
                          ON a.attrelid = i.indrelid AND a.attnum = k.attnum
                        ORDER BY k.ord
                    )
             FROM pg_catalog.pg_index i
             JOIN pg_catalog.pg_class ic ON ic.oid = i.indexrelid
             WHERE i.indrelid = $1 AND NOT i.indisprimary AND i.indexprs IS NULL
             ORDER BY ic.relname",
            &[&oid],
        )? {
            table.indexes.push(IndexDescriptor {
                name: row.get(0),
                unique: row.get(1),
                columns: row.get(2),
            });
        }

        for row in self.client.query(
            "SELECT con.conname::text,
                    tn.nspname::text,
                    tc.relname::text,
                    array(
                        SELECT a.attname::text
                        FROM unnest(con.conkey) WITH ORDINALITY AS k(attnum, ord)
                        JOIN pg_catalog.pg_attribute a
                          ON a.attrelid = con.conrelid AND a.attnum = k.attnum
                        ORDER BY k.ord
                    ),
                    array(
                        SELECT a.attname::text
                        FROM unnest(con.confkey) WITH ORDINALITY AS k(attnum, ord)
                        JOIN pg_catalog.pg_attribute a
                          ON a.attrelid = con.confrelid AND a.attnum = k.attnum
                        ORDER BY k.ord
                    )
             FROM pg_catalog.pg_constraint con
             JOIN pg_catalog.pg_class tc ON tc.oid = con.confrelid
             JOIN pg_catalog.pg_namespace tn ON tn.oid = tc.relnamespace
             WHERE con.conrelid = $1 AND con.contype = 'f'
             ORDER BY con.conname",
            &[&oid],
        )? {
            table.foreign_keys.push(ForeignKeyDescriptor {
                name: row.get(0),
                target_schema: row.get(1),
                target_table: row.get(2),
                columns: row.get(3),
                target_columns: row.get(4),
            });
        }

        Ok(table)
    }
}

impl MetadataSource for PostgresSource {
    fn reflect(&mut self, schema: Option<&str>) -> toasty_autocode::Result<SchemaSnapshot> {
        Ok(self.reflect_schema(schema)?)
    }
}
