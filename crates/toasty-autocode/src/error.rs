mod malformed_snapshot;
mod name_collision_exhausted;
mod unsupported_encoding;

use malformed_snapshot::MalformedSnapshot;
use name_collision_exhausted::NameCollisionExhausted;
use unsupported_encoding::UnsupportedEncoding;

/// An error that aborts a generation run.
///
/// Only conditions that make complete output impossible are errors.
/// Recoverable conditions are reported as [`Warning`](crate::Warning)s next
/// to the generated source instead.
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    MalformedSnapshot(MalformedSnapshot),
    NameCollisionExhausted(NameCollisionExhausted),
    UnsupportedEncoding(UnsupportedEncoding),
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let mut err = consequent;
        debug_assert!(
            err.inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        err.inner.cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .inner
                .cause
                .as_ref()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            MalformedSnapshot(err) => core::fmt::Display::fmt(err, f),
            NameCollisionExhausted(err) => core::fmt::Display::fmt(err, f),
            UnsupportedEncoding(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::malformed_snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_chain_display() {
        let root = Error::malformed_snapshot("duplicate column `id` in table `users`");
        let top = Error::from(anyhow::anyhow!("reading snapshot.json"));

        let chained = root.context(top);
        assert_eq!(
            chained.to_string(),
            "reading snapshot.json: malformed snapshot: duplicate column `id` in table `users`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("connection refused");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "connection refused");
    }

    #[test]
    fn std_error_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let our_err: Error = io_err.into();
        assert!(our_err.to_string().contains("file not found"));
    }

    #[test]
    fn json_error_is_malformed_snapshot() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn malformed_snapshot() {
        let err = Error::malformed_snapshot("duplicate table `users`");
        assert!(err.is_malformed_snapshot());
        assert_eq!(
            err.to_string(),
            "malformed snapshot: duplicate table `users`"
        );
    }

    #[test]
    fn name_collision_exhausted() {
        let err = Error::name_collision_exhausted("user", 1000);
        assert!(err.is_name_collision_exhausted());
        assert_eq!(
            err.to_string(),
            "name collision exhausted: no unique name for `user` after 1000 attempts"
        );
    }

    #[test]
    fn unsupported_encoding() {
        let err = Error::unsupported_encoding("latin1");
        assert!(err.is_unsupported_encoding());
        assert!(!err.is_malformed_snapshot());
        assert_eq!(
            err.to_string(),
            "unsupported encoding `latin1`: generated source is always UTF-8"
        );
    }
}
