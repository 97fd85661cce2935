use std::fmt;

/// Native column types as reported by a metadata source.
///
/// Spellings from PostgreSQL, MySQL and SQLite are folded into one closed set
/// of variants by [`NativeType::parse`]. Anything not recognized is kept
/// verbatim in [`NativeType::Custom`].
///
/// Parameters are optional because most databases allow omitting them
/// (`varchar` vs `varchar(50)`), and an omitted parameter must not be
/// invented when the type is emitted again.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NativeType {
    /// A boolean value
    Boolean,

    /// 1-byte signed integer
    TinyInt,

    /// 2-byte signed integer
    SmallInt,

    /// 4-byte signed integer
    Integer,

    /// 8-byte signed integer
    BigInt,

    /// Single precision floating point
    Real,

    /// Double precision floating point
    Double,

    /// Exact decimal number with optional `(precision, scale)`
    Numeric(Option<(u32, u32)>),

    /// Fixed-length character string
    Char(Option<u64>),

    /// Variable-length character string with an optional maximum length
    VarChar(Option<u64>),

    /// Unbounded character string
    Text,

    /// Fixed-length binary string
    Binary(Option<u64>),

    /// Variable-length binary string
    VarBinary(Option<u64>),

    /// Unbounded binary string
    Blob,

    /// 128-bit universally unique identifier
    Uuid,

    /// JSON document
    Json,

    /// Calendar date
    Date,

    /// Time of day with optional fractional seconds precision
    Time(Option<u8>),

    /// Date and time without a time zone, with optional fractional seconds
    /// precision
    Timestamp(Option<u8>),

    /// An instant in time, with optional fractional seconds precision
    TimestampTz(Option<u8>),

    /// Unrecognized type, kept exactly as reported
    Custom(String),
}

impl NativeType {
    /// Parses a type as spelled by a database, e.g. `character varying(50)`,
    /// `int4`, `decimal(10,2)` or `timestamp(3) without time zone`.
    ///
    /// Never fails: unrecognized spellings become [`NativeType::Custom`].
    pub fn parse(src: &str) -> NativeType {
        let src = src.trim();
        let lower = src.to_ascii_lowercase();

        let Some((base, args)) = split_args(&lower) else {
            return NativeType::Custom(src.to_string());
        };

        parse_parts(&base, &args).unwrap_or_else(|| NativeType::Custom(src.to_string()))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, NativeType::Custom(_))
    }
}

fn parse_parts(base: &str, args: &[u64]) -> Option<NativeType> {
    use NativeType::*;

    let ty = match (base, args) {
        ("bool" | "boolean", []) => Boolean,
        ("tinyint", [] | [_]) => TinyInt,
        ("smallint" | "int2" | "smallserial" | "serial2", [] | [_]) => SmallInt,
        ("int" | "integer" | "int4" | "mediumint" | "serial" | "serial4", [] | [_]) => Integer,
        ("bigint" | "int8" | "bigserial" | "serial8", [] | [_]) => BigInt,
        ("real" | "float4", []) => Real,
        ("float", [p]) if *p <= 24 => Real,
        ("double" | "double precision" | "float8" | "float", [] | [_]) => Double,
        ("numeric" | "decimal" | "dec", []) => Numeric(None),
        ("numeric" | "decimal" | "dec", [p]) => Numeric(Some((narrow(*p)?, 0))),
        ("numeric" | "decimal" | "dec", [p, s]) => Numeric(Some((narrow(*p)?, narrow(*s)?))),
        ("char" | "character" | "bpchar" | "nchar", []) => Char(None),
        ("char" | "character" | "bpchar" | "nchar", [n]) => Char(Some(*n)),
        ("varchar" | "character varying" | "nvarchar" | "varchar2" | "nvarchar2", []) => {
            VarChar(None)
        }
        ("varchar" | "character varying" | "nvarchar" | "varchar2" | "nvarchar2", [n]) => {
            VarChar(Some(*n))
        }
        ("text" | "tinytext" | "mediumtext" | "longtext" | "ntext" | "clob", []) => Text,
        ("binary", []) => Binary(None),
        ("binary", [n]) => Binary(Some(*n)),
        ("varbinary", []) => VarBinary(None),
        ("varbinary", [n]) => VarBinary(Some(*n)),
        ("blob" | "bytea" | "tinyblob" | "mediumblob" | "longblob" | "image", []) => Blob,
        ("uuid" | "uniqueidentifier", []) => Uuid,
        ("json" | "jsonb", []) => Json,
        ("date", []) => Date,
        ("time" | "time without time zone", []) => Time(None),
        ("time" | "time without time zone", [p]) => Time(Some(narrow(*p)?)),
        ("timestamp" | "timestamp without time zone" | "datetime" | "datetime2", []) => {
            Timestamp(None)
        }
        ("timestamp" | "timestamp without time zone" | "datetime" | "datetime2", [p]) => {
            Timestamp(Some(narrow(*p)?))
        }
        ("timestamptz" | "timestamp with time zone" | "datetimeoffset", []) => TimestampTz(None),
        ("timestamptz" | "timestamp with time zone" | "datetimeoffset", [p]) => {
            TimestampTz(Some(narrow(*p)?))
        }
        _ => return None,
    };

    Some(ty)
}

fn narrow<T: TryFrom<u64>>(value: u64) -> Option<T> {
    T::try_from(value).ok()
}

/// Splits `timestamp(3) without time zone` into the base spelling
/// `timestamp without time zone` and its numeric arguments `[3]`.
///
/// Returns `None` when the parentheses are unbalanced or an argument is not
/// a plain unsigned integer.
fn split_args(src: &str) -> Option<(String, Vec<u64>)> {
    let (base, args) = match src.find('(') {
        Some(open) => {
            let close = open + src[open..].find(')')?;
            let rest = &src[close + 1..];

            if rest.contains('(') || rest.contains(')') {
                return None;
            }

            let args = src[open + 1..close]
                .split(',')
                .map(|arg| arg.trim().parse::<u64>().ok())
                .collect::<Option<Vec<_>>>()?;

            (format!("{} {}", &src[..open], rest), args)
        }
        None if src.contains(')') => return None,
        None => (src.to_string(), vec![]),
    };

    let base = base.split_whitespace().collect::<Vec<_>>().join(" ");
    Some((base, args))
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use NativeType::*;

        fn sized(f: &mut fmt::Formatter<'_>, name: &str, size: Option<impl fmt::Display>) -> fmt::Result {
            match size {
                Some(size) => write!(f, "{name}({size})"),
                None => f.write_str(name),
            }
        }

        match self {
            Boolean => f.write_str("boolean"),
            TinyInt => f.write_str("tinyint"),
            SmallInt => f.write_str("smallint"),
            Integer => f.write_str("integer"),
            BigInt => f.write_str("bigint"),
            Real => f.write_str("real"),
            Double => f.write_str("double precision"),
            Numeric(None) => f.write_str("numeric"),
            Numeric(Some((precision, scale))) => write!(f, "numeric({precision},{scale})"),
            Char(size) => sized(f, "char", *size),
            VarChar(size) => sized(f, "varchar", *size),
            Text => f.write_str("text"),
            Binary(size) => sized(f, "binary", *size),
            VarBinary(size) => sized(f, "varbinary", *size),
            Blob => f.write_str("blob"),
            Uuid => f.write_str("uuid"),
            Json => f.write_str("json"),
            Date => f.write_str("date"),
            Time(precision) => sized(f, "time", *precision),
            Timestamp(precision) => sized(f, "timestamp", *precision),
            TimestampTz(precision) => sized(f, "timestamptz", *precision),
            Custom(name) => f.write_str(name),
        }
    }
}

impl From<String> for NativeType {
    fn from(src: String) -> Self {
        NativeType::parse(&src)
    }
}

impl From<&str> for NativeType {
    fn from(src: &str) -> Self {
        NativeType::parse(src)
    }
}

impl From<NativeType> for String {
    fn from(ty: NativeType) -> Self {
        ty.to_string()
    }
}
