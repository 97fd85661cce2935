use super::{Formatter, ToRust};
use crate::gen::Model;

use std::collections::BTreeSet;

/// Header comment, crate-level lints and the `use` lines for every imported
/// field type.
pub(super) struct Preamble<'a>(pub(super) &'a [Model]);

impl ToRust for Preamble<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        let imports: BTreeSet<&str> = self
            .0
            .iter()
            .flat_map(|model| &model.fields)
            .filter_map(|field| field.ty.rust.import)
            .collect();

        fmt!(f,
            "// Generated by toasty-autocode. Do not edit by hand.\n"
            "\n"
            "#![allow(dead_code, non_camel_case_types)]\n"
        );

        if !imports.is_empty() {
            fmt!(f, "\n");
            for import in imports {
                fmt!(f, "use " import ";\n");
            }
        }
    }
}
