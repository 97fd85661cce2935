use super::{
    example::Example, field::FieldDef, relation::RelationDef, Comma, Comment, Formatter, Indent,
    Lit, ToRust,
};
use crate::gen::Model;

impl ToRust for &Model {
    fn to_rust(self, f: &mut Formatter<'_>) {
        if f.config().include_examples {
            fmt!(f, Example(self));
        }

        fmt!(f,
            "#[derive(Debug, toasty::Model)]\n"
            "#[table = " Lit(&self.table) "]\n"
        );

        if let [partition, local @ ..] = self.composite_key.as_slice() {
            fmt!(f, "#[key(partition = " partition);
            for field in local {
                fmt!(f, ", local = " field);
            }
            fmt!(f, ")]\n");
        }

        fmt!(f, "pub struct " self.name.as_str() " {\n");

        f.nested(|f| {
            let mut s = "";

            for unresolved in &self.unresolved {
                fmt!(f,
                    Indent "// unresolved foreign key (" comments(&unresolved.columns)
                    ") references " Comment(&unresolved.target_table)
                    " (" comments(&unresolved.target_columns) ")\n"
                );
                s = "\n";
            }

            if f.config().include_indexes {
                // Single-column indexes become field attributes
                for index in self.indices.iter().filter(|index| index.fields.len() > 1) {
                    let kind = if index.unique { "unique index " } else { "index " };
                    fmt!(f,
                        Indent "// " kind Comment(&index.name) " (" comments(&index.fields) ")\n"
                    );
                    s = "\n";
                }
            }

            for field in &self.fields {
                fmt!(f, s FieldDef { model: self, field });
                s = "\n";
            }

            for relation in &self.relations {
                fmt!(f, s RelationDef(relation));
                s = "\n";
            }
        });

        fmt!(f, "}\n");
    }
}

fn comments(names: &[String]) -> Comma<impl Iterator<Item = Comment<'_>>> {
    Comma(names.iter().map(|name| Comment(name)))
}
