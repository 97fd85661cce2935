use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_rust($f);
        )*
    }};
}

pub(super) trait ToRust {
    fn to_rust(self, f: &mut Formatter<'_>);
}

impl ToRust for &str {
    fn to_rust(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToRust for &String {
    fn to_rust(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToRust for u64 {
    fn to_rust(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

/// Leading whitespace for the current depth
pub(super) struct Indent;

impl ToRust for Indent {
    fn to_rust(self, f: &mut Formatter<'_>) {
        for _ in 0..f.depth {
            f.dst.push_str("    ");
        }
    }
}
