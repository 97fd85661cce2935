use super::Error;

/// Error when numeric suffixing cannot produce a unique identifier.
///
/// The name registry tries a bounded number of `_2`, `_3`, ... suffixes. Running
/// out means the input is pathological or the registry has a bug, so the run
/// is aborted.
#[derive(Debug)]
pub(super) struct NameCollisionExhausted {
    name: Box<str>,
    attempts: usize,
}

impl std::error::Error for NameCollisionExhausted {}

impl core::fmt::Display for NameCollisionExhausted {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "name collision exhausted: no unique name for `{}` after {} attempts",
            self.name, self.attempts
        )
    }
}

impl Error {
    /// Creates a name collision exhausted error.
    pub fn name_collision_exhausted(name: impl Into<String>, attempts: usize) -> Error {
        Error::from(super::ErrorKind::NameCollisionExhausted(
            NameCollisionExhausted {
                name: name.into().into(),
                attempts,
            },
        ))
    }

    /// Returns `true` if this error is a name collision exhausted error.
    pub fn is_name_collision_exhausted(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NameCollisionExhausted(_))
    }
}
