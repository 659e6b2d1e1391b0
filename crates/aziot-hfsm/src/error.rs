/// All possible engine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A state handler refused an event, returning a caller-defined code.
    ///
    /// The engine never interprets the code.
    Handler(i32),
    /// An event bubbled up to the root state without being handled.
    Unhandled,
    /// The source of a transition is neither the current state nor one of
    /// its ancestors.
    InactiveSource,
    /// The state used to initialize a machine has a parent.
    NotRoot,
}

impl Error {
    const fn description(self) -> &'static str {
        match self {
            Self::Handler(_) => "Handler",
            Self::Unhandled => "Unhandled Event",
            Self::InactiveSource => "Inactive Source",
            Self::NotRoot => "Not Root",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Handler(code) => write!(f, "{}: code {code}", self.description()),
            _ => f.write_str(self.description()),
        }
    }
}

impl core::error::Error for Error {}

/// A specialized [`Result`] type for [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
