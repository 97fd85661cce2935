use super::ty::IMPORTED_NAMES;
use crate::{Error, Result};

use heck::{ToSnakeCase, ToUpperCamelCase};
use std::collections::HashSet;

/// Upper bound on numeric suffixes tried for one name
const MAX_SUFFIX: usize = 1_000;

/// Suffix appended to field names that collide with a reserved word
const FIELD_SUFFIX: &str = "_";

/// Suffix appended to struct names that collide with a reserved word
const MODEL_SUFFIX: &str = "Model";

/// Rust keywords, including reserved and edition-dependent ones.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Associated functions `#[derive(toasty::Model)]` generates on every model.
const MODEL_MEMBERS: &[&str] = &["all", "create", "delete", "filter", "reload", "update"];

/// Type names the generated module refers to besides the imported ones.
const PRELUDE_TYPES: &[&str] = &[
    "Self", "Box", "Err", "None", "Ok", "Option", "Result", "Some", "String", "Vec", "BelongsTo",
    "HasMany", "Model",
];

/// Tracks identifiers assigned during one generation run.
///
/// Struct names share one namespace; each struct has its own namespace for
/// fields. A registry is created per run and never shared between runs.
#[derive(Debug, Default)]
pub(crate) struct NameRegistry {
    models: Namespace,
    fields: Vec<Namespace>,
}

#[derive(Debug, Default)]
struct Namespace {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub(crate) fn new() -> NameRegistry {
        NameRegistry::default()
    }

    /// Assigns the struct name for a table and opens its field namespace.
    /// Models are numbered in the order they are registered.
    pub(crate) fn model(&mut self, table: &str) -> Result<String> {
        let mut name = model_ident(table);
        if is_reserved_model_name(&name) {
            name.push_str(MODEL_SUFFIX);
        }

        let name = self.models.claim(name)?;
        self.fields.push(Namespace::default());
        Ok(name)
    }

    /// Assigns a field name within the `model`-th registered struct.
    pub(crate) fn field(&mut self, model: usize, raw: &str) -> Result<String> {
        let mut name = field_ident(raw);
        if is_reserved_field_name(&name) {
            name.push_str(FIELD_SUFFIX);
        }

        self.fields[model].claim(name)
    }
}

impl Namespace {
    fn claim(&mut self, name: String) -> Result<String> {
        if self.taken.insert(name.clone()) {
            return Ok(name);
        }

        for n in 2..=MAX_SUFFIX {
            let candidate = format!("{name}_{n}");
            if self.taken.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        Err(Error::name_collision_exhausted(name, MAX_SUFFIX - 1))
    }
}

/// Converts a raw identifier to a snake_case Rust identifier, without
/// checking reserved words.
pub(crate) fn field_ident(raw: &str) -> String {
    let ident = sanitize(raw).to_snake_case();
    finish(ident, "field")
}

/// Converts a table name to an UpperCamelCase struct name: the last word is
/// singularized (`order_items` -> `OrderItem`).
pub(crate) fn model_ident(raw: &str) -> String {
    let snake = sanitize(raw).to_snake_case();
    let ident = singular(&snake).to_upper_camel_case();
    finish(ident, "Model")
}

/// Identifier for a local variable, as used in usage examples.
pub(crate) fn local_ident(raw: &str) -> String {
    let mut ident = field_ident(raw);
    if KEYWORDS.contains(&ident.as_str()) {
        ident.push_str(FIELD_SUFFIX);
    }
    ident
}

pub(crate) fn singular(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

pub(crate) fn plural(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Replaces every character that cannot appear in an identifier with `_`.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn finish(ident: String, empty: &str) -> String {
    match ident.chars().next() {
        None => empty.to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{ident}"),
        Some(_) => ident,
    }
}

fn is_reserved_field_name(name: &str) -> bool {
    KEYWORDS.contains(&name) || MODEL_MEMBERS.contains(&name)
}

fn is_reserved_model_name(name: &str) -> bool {
    PRELUDE_TYPES.contains(&name) || IMPORTED_NAMES.contains(&name)
}
