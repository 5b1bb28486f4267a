use std::fmt;

pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Why a lookup or a file operation did not produce a value.
///
/// Lookups never surface this to the user, it is logged and the book counts as not found. Only
/// file and client setup errors reach the binary.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Broad category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading or creating the bulk search file, or sending a request, failed.
    IO,
    /// A body or URL could not be turned into the expected shape.
    Deserialize,
    /// The service answered but had nothing for the query.
    NoValue,
    /// The service answered with something other than `200 OK`.
    Status,
}

impl ErrorKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::IO => "IO error",
            Self::Deserialize => "Deserialize error",
            Self::NoValue => "No value error",
            Self::Status => "Status error",
        }
    }
}

impl Error {
    /// An error of `kind` with no underlying cause.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// An error of `kind` caused by `source`.
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Which [`ErrorKind`] this is.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.describe())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
