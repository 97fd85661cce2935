use super::{Formatter, ToRust};

/// A string literal, escaped as Rust source
pub(super) struct Lit<'a>(pub(super) &'a str);

/// Free text inside a line comment. Line breaks become spaces so the comment
/// cannot end early.
pub(super) struct Comment<'a>(pub(super) &'a str);

impl ToRust for Lit<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&format!("{:?}", self.0));
    }
}

impl ToRust for Comment<'_> {
    fn to_rust(self, f: &mut Formatter<'_>) {
        f.dst.extend(
            self.0
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c }),
        );
    }
}
