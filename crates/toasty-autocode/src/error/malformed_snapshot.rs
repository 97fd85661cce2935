use super::Error;

/// Error when a metadata source hands over a snapshot that breaks its contract.
///
/// This occurs when:
/// - Two tables in the same schema share a name
/// - Two columns in one table share a name
/// - An index or foreign key names a column its table does not have
/// - A foreign key has no columns, or a different number of local and target columns
/// - A snapshot document cannot be parsed
///
/// Generation refuses to run on such input rather than emit partial output.
#[derive(Debug)]
pub(super) struct MalformedSnapshot {
    message: Box<str>,
}

impl std::error::Error for MalformedSnapshot {}

impl core::fmt::Display for MalformedSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed snapshot: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed snapshot error.
    pub fn malformed_snapshot(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedSnapshot(MalformedSnapshot {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed snapshot error.
    pub fn is_malformed_snapshot(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MalformedSnapshot(_))
    }
}
