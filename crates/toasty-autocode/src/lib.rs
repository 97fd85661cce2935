//! Generates toasty model definitions from reflected database schema metadata.
//!
//! The entry point is [`generate`]: it takes a [`SchemaSnapshot`] produced by
//! some [`MetadataSource`] and a [`GenerationConfig`], and returns the
//! rendered Rust source along with any non-fatal [`Warning`]s.
//!
//! ```
//! use toasty_autocode::{generate, ColumnDescriptor, GenerationConfig, SchemaSnapshot, TableDescriptor};
//!
//! let snapshot = SchemaSnapshot::new(vec![TableDescriptor::new("users")
//!     .column(ColumnDescriptor::new("id", "integer").primary_key())
//!     .column(ColumnDescriptor::new("name", "varchar(50)"))]);
//!
//! let generated = generate(&snapshot, &GenerationConfig::default()).unwrap();
//! assert!(generated.source.contains("pub struct User {"));
//! assert!(generated.warnings.is_empty());
//! ```

mod config;
pub use config::GenerationConfig;

mod error;
pub use error::Error;

mod filter;
pub use filter::TableFilter;

pub mod gen;
pub use gen::{generate, Generated};

mod serializer;

pub mod snapshot;
pub use snapshot::{
    ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, NativeType, SchemaSnapshot,
    TableDescriptor,
};

mod source;
pub use source::MetadataSource;

mod warning;
pub use warning::{Warning, WarningKind};

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
