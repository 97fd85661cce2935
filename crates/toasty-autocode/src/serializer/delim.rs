use super::{Formatter, ToRust};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToRust for Comma<L>
where
    L: IntoIterator,
    L::Item: ToRust,
{
    fn to_rust(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}
