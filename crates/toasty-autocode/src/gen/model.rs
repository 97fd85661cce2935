use super::TypeExpr;
use crate::Warning;

/// A generated model struct, one per non-junction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Name of the struct
    pub name: String,

    /// Table the struct maps to
    pub table: String,

    /// Column fields: primary key fields first, then the remaining columns in
    /// table order.
    pub fields: Vec<Field>,

    /// Relation fields, in the order they were inferred
    pub relations: Vec<Relation>,

    /// Field names of a composite primary key. Empty when the key has at
    /// most one field, in which case the field itself is marked.
    pub composite_key: Vec<String>,

    pub indices: Vec<Index>,

    /// Foreign keys whose target could not be resolved, rendered as comments
    pub unresolved: Vec<UnresolvedReference>,

    /// Warnings attached to this model
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Name of the struct field
    pub name: String,

    /// Name of the database column
    pub column: String,

    pub ty: TypeExpr,

    pub nullable: bool,

    /// True if this is the single primary key field
    pub key: bool,

    /// True if the database assigns the value
    pub auto: bool,

    /// Database default expression
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Name of the struct field
    pub name: String,

    /// Name of the target struct
    pub target: String,

    pub kind: RelationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKind {
    /// Many-to-one side of a foreign key, on the referencing model
    BelongsTo {
        /// Local key fields
        key: Vec<String>,

        /// Referenced fields on the target
        references: Vec<String>,

        /// True when any key column is nullable
        optional: bool,
    },

    /// One-to-many side of a foreign key, on the referenced model
    HasMany {
        /// The `BelongsTo` field on the target that this relation pairs with
        pair: String,
    },

    /// A relation through a junction table that has no model of its own
    ManyToMany {
        /// The junction table
        table: String,

        /// Junction columns referencing this model
        source: Vec<String>,

        /// Junction columns referencing the target
        target: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Name of the index in the database
    pub name: String,

    /// Indexed fields, in index order
    pub fields: Vec<String>,

    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub columns: Vec<String>,
    pub target_table: String,
    pub target_columns: Vec<String>,
}

impl Model {
    /// Looks up a column field by database column name.
    pub fn field_for_column(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.column == column)
    }

    /// Iterates every field name, column and relation fields alike.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields
            .iter()
            .map(|field| field.name.as_str())
            .chain(self.relations.iter().map(|relation| relation.name.as_str()))
    }

    pub fn key_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(|field| field.key || self.composite_key.contains(&field.name))
    }
}

impl RelationKind {
    pub fn is_belongs_to(&self) -> bool {
        matches!(self, RelationKind::BelongsTo { .. })
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, RelationKind::HasMany { .. })
    }

    pub fn is_many_to_many(&self) -> bool {
        matches!(self, RelationKind::ManyToMany { .. })
    }
}
