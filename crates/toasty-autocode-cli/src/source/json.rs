use anyhow::Context;
use std::{fs, path::PathBuf};
use toasty_autocode::{MetadataSource, Result, SchemaSnapshot};

/// Reads metadata from a snapshot file written with `--save-snapshot`
#[derive(Debug)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn open(path: impl Into<PathBuf>) -> JsonSource {
        JsonSource { path: path.into() }
    }
}

impl MetadataSource for JsonSource {
    fn reflect(&mut self, schema: Option<&str>) -> Result<SchemaSnapshot> {
        let src = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        SchemaSnapshot::from_json(&src)?.reflect(schema)
    }
}
