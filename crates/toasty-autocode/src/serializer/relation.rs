use super::{Formatter, Indent, Lit, ToRust};
use crate::gen::{Relation, RelationKind};

/// A relation field with its attribute
pub(super) struct RelationDef<'a>(pub(super) &'a Relation);

impl ToRust for RelationDef<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        let relation = self.0;

        match &relation.kind {
            RelationKind::BelongsTo {
                key,
                references,
                optional,
            } => {
                fmt!(f, Indent "#[belongs_to(");
                let mut s = "";
                for (key, references) in key.iter().zip(references) {
                    fmt!(f, s "key = " key ", references = " references);
                    s = ", ";
                }
                fmt!(f, ")]\n" Indent "pub " relation.name.as_str() ": toasty::BelongsTo<");

                if *optional {
                    fmt!(f, "Option<" relation.target.as_str() ">");
                } else {
                    fmt!(f, relation.target.as_str());
                }

                fmt!(f, ">,\n");
            }
            RelationKind::HasMany { pair } => {
                fmt!(f,
                    Indent "#[has_many(pair = " pair ")]\n"
                    Indent "pub " relation.name.as_str() ": toasty::HasMany<" relation.target.as_str() ">,\n"
                );
            }
            RelationKind::ManyToMany {
                table,
                source,
                target,
            } => {
                fmt!(f, Indent "#[many_to_many(table = " Lit(table));
                for column in source {
                    fmt!(f, ", source = " Lit(column));
                }
                for column in target {
                    fmt!(f, ", target = " Lit(column));
                }
                fmt!(f,
                    ")]\n"
                    Indent "pub " relation.name.as_str() ": toasty::HasMany<" relation.target.as_str() ">,\n"
                );
            }
        }
    }
}
