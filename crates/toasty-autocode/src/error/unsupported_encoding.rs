use super::Error;

/// Error when the configuration asks for an output encoding other than UTF-8.
#[derive(Debug)]
pub(super) struct UnsupportedEncoding {
    encoding: Box<str>,
}

impl std::error::Error for UnsupportedEncoding {}

impl core::fmt::Display for UnsupportedEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported encoding `{}`: generated source is always UTF-8",
            self.encoding
        )
    }
}

impl Error {
    /// Creates an unsupported encoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedEncoding(UnsupportedEncoding {
            encoding: encoding.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported encoding error.
    pub fn is_unsupported_encoding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedEncoding(_))
    }
}
