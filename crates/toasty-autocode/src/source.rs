use crate::{Result, SchemaSnapshot};

/// Produces schema metadata for the generator.
///
/// Implementations talk to a database (or read a stored snapshot); the
/// generator itself only ever sees the returned [`SchemaSnapshot`].
pub trait MetadataSource {
    /// Reflects the tables of `schema`, or of the source's default schema
    /// when `None`.
    fn reflect(&mut self, schema: Option<&str>) -> Result<SchemaSnapshot>;
}

impl MetadataSource for SchemaSnapshot {
    fn reflect(&mut self, schema: Option<&str>) -> Result<SchemaSnapshot> {
        Ok(match schema {
            Some(schema) => self.in_schema(schema),
            None => self.clone(),
        })
    }
}
