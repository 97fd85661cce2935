use crate::{Error, Result, TableFilter};

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Emit portable Rust types without `#[column(type = ...)]` storage
    /// annotations instead of preserving the database-specific types.
    pub use_generic_types: bool,

    /// Emit `#[index]` / `#[unique]` attributes for reflected indexes.
    pub include_indexes: bool,

    /// Emit a usage example doc comment above each model.
    pub include_examples: bool,

    /// Encoding of the generated text. Only UTF-8 is supported.
    pub encoding: String,

    /// Only tables matching the filter are generated.
    pub table_filter: TableFilter,
}

impl GenerationConfig {
    /// Create a new GenerationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_generic_types(mut self, value: bool) -> Self {
        self.use_generic_types = value;
        self
    }

    pub fn include_indexes(mut self, value: bool) -> Self {
        self.include_indexes = value;
        self
    }

    pub fn include_examples(mut self, value: bool) -> Self {
        self.include_examples = value;
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn table_filter(mut self, filter: TableFilter) -> Self {
        self.table_filter = filter;
        self
    }

    pub(crate) fn verify(&self) -> Result<()> {
        let normalized: String = self
            .encoding
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        if normalized == "utf8" {
            Ok(())
        } else {
            Err(Error::unsupported_encoding(&self.encoding))
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            use_generic_types: false,
            include_indexes: true,
            include_examples: false,
            encoding: "utf-8".to_string(),
            table_filter: TableFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_spellings_are_accepted() {
        for encoding in ["utf8", "UTF-8", "utf_8", "Utf8"] {
            assert!(GenerationConfig::new().encoding(encoding).verify().is_ok());
        }
    }

    #[test]
    fn other_encodings_are_rejected() {
        let err = GenerationConfig::new()
            .encoding("latin1")
            .verify()
            .unwrap_err();
        assert!(err.is_unsupported_encoding());
    }
}
