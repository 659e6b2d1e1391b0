use std::borrow::Cow;

use tracing::error;

/// All possible error kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A cryptographic operation failed.
    Failed,
    /// A scratch buffer is too small.
    OutOfMemory,
    /// A compact token is not made of three base64url segments.
    MalformedToken,
    /// The signing key is not certified by a trusted root key.
    WrongRootKey,
    /// The signing key certificate has an invalid signature.
    SigningKeyRejected,
    /// The manifest has an invalid signature.
    ManifestRejected,
    /// The manifest does not match its signed digest.
    DigestMismatch,
    /// Errors encountered while serializing or deserializing data.
    Serialization,
    /// A file does not match its manifest entry.
    FileMismatch,
}

impl ErrorKind {
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::OutOfMemory => "Out Of Memory",
            Self::MalformedToken => "Malformed Token",
            Self::WrongRootKey => "Wrong Root Key",
            Self::SigningKeyRejected => "Signing Key Rejected",
            Self::ManifestRejected => "Manifest Rejected",
            Self::DigestMismatch => "Digest Mismatch",
            Self::Serialization => "Serialization",
            Self::FileMismatch => "File Mismatch",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A library error.
#[derive(PartialEq)]
pub struct Error {
    kind: ErrorKind,
    description: Cow<'static, str>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.format(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.format(f)
    }
}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description.
    #[inline]
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        let description = description.into();
        error!("{}", description.as_ref());
        Self { kind, description }
    }

    /// Returns the [`ErrorKind`].
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn format(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::Serialization, e.to_string())
    }
}

impl std::error::Error for Error {}

/// A specialized [`Result`] type for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
