use super::{ty::FieldType, Comment, Formatter, Indent, Lit, ToRust};
use crate::gen::{Field, Model};

/// A column field with its attributes
pub(super) struct FieldDef<'a> {
    pub(super) model: &'a Model,
    pub(super) field: &'a Field,
}

impl ToRust for FieldDef<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        let field = self.field;

        if let Some(native) = &field.ty.unmapped {
            fmt!(f, Indent "// unrecognized column type " Lit(native) "; mapped to String\n");
        }

        // Auto columns always have a sequence or identity default
        if let Some(default) = field.default.as_deref().filter(|_| !field.auto) {
            fmt!(f, Indent "// default: " Comment(default) "\n");
        }

        if field.key {
            fmt!(f, Indent "#[key]\n");
        }

        if field.auto {
            fmt!(f, Indent "#[auto]\n");
        }

        if f.config().include_indexes && !field.key {
            if let Some(attr) = self.index_attr() {
                fmt!(f, Indent attr "\n");
            }
        }

        let renamed = field.name != field.column;
        match (&field.ty.storage, renamed) {
            (None, false) => {}
            (None, true) => fmt!(f, Indent "#[column(" Lit(&field.column) ")]\n"),
            (Some(storage), false) => fmt!(f, Indent "#[column(type = " storage ")]\n"),
            (Some(storage), true) => {
                fmt!(f, Indent "#[column(" Lit(&field.column) ", type = " storage ")]\n")
            }
        }

        fmt!(f, Indent "pub " field.name.as_str() ": " FieldType(field) ",\n");
    }
}

impl FieldDef<'_> {
    /// `#[unique]` or `#[index]` when a single-column index covers this
    /// field. Unique wins when both exist.
    fn index_attr(&self) -> Option<&'static str> {
        let mut attr = None;

        for index in &self.model.indices {
            if index.fields.as_slice() != [self.field.name.as_str()] {
                continue;
            }

            if index.unique {
                return Some("#[unique]");
            }

            attr = Some("#[index]");
        }

        attr
    }
}
