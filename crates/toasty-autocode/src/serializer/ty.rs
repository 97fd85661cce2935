use super::{Comma, Formatter, Lit, ToRust};
use crate::gen::{Field, StorageType};

/// The declared type of a column field
pub(super) struct FieldType<'a>(pub(super) &'a Field);

impl ToRust for FieldType<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        let name = self.0.ty.rust.name;

        if self.0.nullable {
            fmt!(f, "Option<" name ">");
        } else {
            fmt!(f, name);
        }
    }
}

impl ToRust for &StorageType {
    fn to_rust(self, f: &mut Formatter<'_>) {
        match self {
            StorageType::Named { name, args } => {
                let name: &str = name;
                fmt!(f, name);

                if !args.is_empty() {
                    fmt!(f, "(" Comma(args.iter().copied()) ")");
                }
            }
            StorageType::Literal(ty) => fmt!(f, Lit(ty)),
        }
    }
}
