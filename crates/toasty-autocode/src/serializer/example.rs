use super::{Formatter, ToRust};
use crate::gen::{
    names::{local_ident, plural},
    Model, RelationKind,
};

/// A doc comment showing how to query the model and walk its relations
pub(super) struct Example<'a>(pub(super) &'a Model);

impl ToRust for Example<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        let model = self.0;
        let name = model.name.as_str();
        let all = local_ident(&plural(name));

        fmt!(f,
            "/// # Examples\n"
            "///\n"
            "/// ```ignore\n"
            "/// let " all.as_str() " = " name "::all().collect::<Vec<_>>(&db).await?;\n"
        );

        let keys: Vec<_> = model.key_fields().map(|field| field.name.as_str()).collect();

        if !keys.is_empty() {
            let var = local_ident(name);

            fmt!(f, "/// let " var.as_str() " = " name "::get_by_" keys.join("_and_").as_str() "(&db");
            for key in keys.iter().copied() {
                fmt!(f, ", &" key);
            }
            fmt!(f, ").await?;\n");

            for relation in &model.relations {
                let rel = relation.name.as_str();
                let fetch = match relation.kind {
                    RelationKind::BelongsTo { .. } => "().get(&db).await?;\n",
                    RelationKind::HasMany { .. } | RelationKind::ManyToMany { .. } => {
                        "().collect::<Vec<_>>(&db).await?;\n"
                    }
                };

                fmt!(f, "/// let " rel " = " var.as_str() "." rel fetch);
            }
        }

        fmt!(f, "/// ```\n");
    }
}
