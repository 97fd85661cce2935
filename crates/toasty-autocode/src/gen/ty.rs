use crate::{ColumnDescriptor, NativeType};

/// How a column's type is written in the generated model.
///
/// `rust` is always present. `storage` is the `#[column(type = ...)]`
/// annotation preserving the database type; it is only set when generating
/// native types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub rust: RustType,

    pub storage: Option<StorageType>,

    /// Set to the native spelling when the type was not recognized and fell
    /// back to `String`.
    pub unmapped: Option<String>,
}

/// A Rust type used for a generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RustType {
    /// The type as written in the field declaration
    pub name: &'static str,

    /// Path to `use` in the preamble, if the type is not in the prelude
    pub import: Option<&'static str>,
}

/// A storage type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// A type toasty knows by keyword, e.g. `varchar(50)` or `numeric(10, 2)`
    Named { name: &'static str, args: Vec<u64> },

    /// Any other database type, carried as a string literal, e.g.
    /// `"double precision"`
    Literal(String),
}

impl RustType {
    const fn prelude(name: &'static str) -> RustType {
        RustType { name, import: None }
    }

    const fn imported(name: &'static str, import: &'static str) -> RustType {
        RustType {
            name,
            import: Some(import),
        }
    }
}

const BOOL: RustType = RustType::prelude("bool");
const I8: RustType = RustType::prelude("i8");
const I16: RustType = RustType::prelude("i16");
const I32: RustType = RustType::prelude("i32");
const I64: RustType = RustType::prelude("i64");
const F32: RustType = RustType::prelude("f32");
const F64: RustType = RustType::prelude("f64");
const STRING: RustType = RustType::prelude("String");
const BYTES: RustType = RustType::prelude("Vec<u8>");
const DECIMAL: RustType = RustType::imported("Decimal", "rust_decimal::Decimal");
const UUID: RustType = RustType::imported("Uuid", "uuid::Uuid");
const DATE: RustType = RustType::imported("Date", "jiff::civil::Date");
const TIME: RustType = RustType::imported("Time", "jiff::civil::Time");
const DATETIME: RustType = RustType::imported("DateTime", "jiff::civil::DateTime");
const TIMESTAMP: RustType = RustType::imported("Timestamp", "jiff::Timestamp");

/// Names of every imported type. Generated structs must not shadow them.
pub(crate) const IMPORTED_NAMES: &[&str] = &[
    DECIMAL.name,
    UUID.name,
    DATE.name,
    TIME.name,
    DATETIME.name,
    TIMESTAMP.name,
];

/// Maps a column to its field type.
///
/// Total: every column gets a type. Unrecognized native types map to
/// `String` regardless of `use_generic_types` and are flagged in
/// [`TypeExpr::unmapped`].
pub fn map_column(column: &ColumnDescriptor, use_generic_types: bool) -> TypeExpr {
    let Some(rust) = portable(&column.ty) else {
        return TypeExpr {
            rust: STRING,
            storage: None,
            unmapped: Some(column.ty.to_string()),
        };
    };

    TypeExpr {
        rust,
        storage: if use_generic_types {
            None
        } else {
            storage(&column.ty)
        },
        unmapped: None,
    }
}

/// The portable Rust type for each family of native types.
fn portable(ty: &NativeType) -> Option<RustType> {
    use NativeType::*;

    Some(match ty {
        Boolean => BOOL,
        TinyInt => I8,
        SmallInt => I16,
        Integer => I32,
        BigInt => I64,
        Real => F32,
        Double => F64,
        Numeric(_) => DECIMAL,
        Char(_) | VarChar(_) | Text | Json => STRING,
        Binary(_) | VarBinary(_) | Blob => BYTES,
        Uuid => UUID,
        Date => DATE,
        Time(_) => TIME,
        Timestamp(_) => DATETIME,
        TimestampTz(_) => TIMESTAMP,
        Custom(_) => return None,
    })
}

/// The storage annotation preserving the exact native type and parameters.
fn storage(ty: &NativeType) -> Option<StorageType> {
    use NativeType::*;

    fn named(name: &'static str, args: impl IntoIterator<Item = u64>) -> StorageType {
        StorageType::Named {
            name,
            args: args.into_iter().collect(),
        }
    }

    Some(match ty {
        Boolean => named("boolean", []),
        TinyInt => named("integer", [1]),
        SmallInt => named("integer", [2]),
        Integer => named("integer", [4]),
        BigInt => named("integer", [8]),
        Numeric(None) => named("numeric", []),
        Numeric(Some((precision, scale))) => {
            named("numeric", [u64::from(*precision), u64::from(*scale)])
        }
        VarChar(Some(size)) => named("varchar", [*size]),
        Text => named("text", []),
        Binary(Some(size)) => named("binary", [*size]),
        Blob => named("blob", []),
        Date => named("date", []),
        // toasty's time keywords only parse with an explicit precision
        Time(Some(precision)) => named("time", [u64::from(*precision)]),
        Timestamp(Some(precision)) => named("datetime", [u64::from(*precision)]),
        TimestampTz(Some(precision)) => named("timestamp", [u64::from(*precision)]),
        Real | Double | Char(_) | VarChar(None) | Binary(None) | VarBinary(_) | Uuid | Json
        | Time(None) | Timestamp(None) | TimestampTz(None) => {
            StorageType::Literal(ty.to_string())
        }
        Custom(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(ty: &str) -> TypeExpr {
        map_column(&ColumnDescriptor::new("c", ty), false)
    }

    fn generic(ty: &str) -> TypeExpr {
        map_column(&ColumnDescriptor::new("c", ty), true)
    }

    #[test]
    fn native_preserves_parameters() {
        let ty = native("varchar(50)");
        assert_eq!(ty.rust, STRING);
        assert_eq!(
            ty.storage,
            Some(StorageType::Named {
                name: "varchar",
                args: vec![50]
            })
        );

        let ty = native("numeric(10,2)");
        assert_eq!(ty.rust, DECIMAL);
        assert_eq!(
            ty.storage,
            Some(StorageType::Named {
                name: "numeric",
                args: vec![10, 2]
            })
        );

        let ty = native("timestamp(3) with time zone");
        assert_eq!(ty.rust, TIMESTAMP);
        assert_eq!(
            ty.storage,
            Some(StorageType::Named {
                name: "timestamp",
                args: vec![3]
            })
        );
    }

    #[test]
    fn native_types_without_keyword_are_literals() {
        assert_eq!(
            native("double precision").storage,
            Some(StorageType::Literal("double precision".to_string()))
        );
        assert_eq!(
            native("bpchar(3)").storage,
            Some(StorageType::Literal("char(3)".to_string()))
        );
        assert_eq!(native("uuid").rust, UUID);
    }

    #[test]
    fn generic_collapses_families() {
        for ty in ["varchar(50)", "char(2)", "text", "nvarchar(10)", "json"] {
            assert_eq!(generic(ty), TypeExpr { rust: STRING, storage: None, unmapped: None });
        }

        for ty in ["numeric(10,2)", "decimal", "numeric(5)"] {
            assert_eq!(generic(ty), TypeExpr { rust: DECIMAL, storage: None, unmapped: None });
        }

        assert_eq!(generic("bytea").rust, BYTES);
        assert_eq!(generic("varbinary(16)").rust, BYTES);
    }

    #[test]
    fn unrecognized_types_fall_back_in_both_modes() {
        for use_generic_types in [false, true] {
            let ty = map_column(&ColumnDescriptor::new("c", "citext"), use_generic_types);
            assert_eq!(ty.rust, STRING);
            assert_eq!(ty.storage, None);
            assert_eq!(ty.unmapped.as_deref(), Some("citext"));
        }
    }

    #[test]
    fn time_types_without_precision_are_literals() {
        for (sample, literal) in [
            ("time", "time"),
            ("timestamp without time zone", "timestamp"),
            ("timestamptz", "timestamptz"),
        ] {
            assert_eq!(
                native(sample).storage,
                Some(StorageType::Literal(literal.to_string())),
                "type={sample:?}"
            );
        }

        assert_eq!(
            native("time(6)").storage,
            Some(StorageType::Named {
                name: "time",
                args: vec![6]
            })
        );
    }

    #[test]
    fn mapping_is_total() {
        let samples = [
            "boolean", "tinyint", "smallint", "integer", "bigint", "real", "double", "numeric",
            "char", "varchar", "text", "binary", "varbinary(4)", "blob", "uuid", "json", "date",
            "time", "timestamp", "timestamptz", "money", "", "geometry(Point,4326)",
        ];

        for sample in samples {
            for use_generic_types in [false, true] {
                let ty = map_column(&ColumnDescriptor::new("c", sample), use_generic_types);
                assert!(!ty.rust.name.is_empty(), "type={sample:?}");
            }
        }
    }
}
