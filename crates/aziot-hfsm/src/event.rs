use crate::error::{Error, Result};

/// An event dispatched to a state handler.
///
/// The reserved variants are shared by every machine, while application
/// events are carried by [`Event::App`], so they can never collide with
/// the reserved ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<E> {
    /// A state has become active.
    Entry,
    /// A state is about to become inactive.
    Exit,
    /// A generic failure reported to the machine.
    Error,
    /// A timer armed by the machine has expired.
    Timeout,
    /// An application-defined event.
    App(E),
}

impl<E> Event<E> {
    pub(crate) const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Entry | Self::Exit)
    }
}

/// The outcome of a state handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event has been consumed.
    Handled,
    /// The event has been consumed, but its processing failed.
    Failed(Error),
    /// The event must be handled by the parent state.
    Super,
}

impl Outcome {
    /// Creates a [`Outcome::Failed`] carrying a caller-defined code.
    #[must_use]
    #[inline]
    pub const fn code(code: i32) -> Self {
        Self::Failed(Error::Handler(code))
    }
}

impl From<Result<()>> for Outcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Handled,
            Err(e) => Self::Failed(e),
        }
    }
}
