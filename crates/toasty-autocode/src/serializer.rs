#[macro_use]
mod fmt;
use fmt::{Indent, ToRust};

mod delim;
use delim::Comma;

mod lit;
use lit::{Comment, Lit};

// Fragment serializers
mod example;
mod field;
mod model;
mod preamble;
mod relation;
mod ty;

use crate::{gen::Model, GenerationConfig};

/// Serialize generated models to Rust source
#[derive(Debug)]
pub(crate) struct Serializer<'a> {
    /// Options that change what is emitted, e.g. index attributes
    config: &'a GenerationConfig,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the generated source
    dst: &'a mut String,

    /// Current nesting depth. Each level indents by four spaces.
    depth: usize,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(config: &'a GenerationConfig) -> Serializer<'a> {
        Serializer { config }
    }

    pub(crate) fn serialize(&self, models: &[Model]) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            depth: 0,
        };

        fmt!(&mut f, preamble::Preamble(models));

        for model in models {
            fmt!(&mut f, "\n" model);
        }

        ret
    }
}

impl Formatter<'_> {
    fn config(&self) -> &GenerationConfig {
        self.serializer.config
    }

    /// Runs `body` one indentation level deeper.
    fn nested(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }
}
