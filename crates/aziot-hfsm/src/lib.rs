//! `aziot-hfsm` is a hierarchical finite state machine engine for devices
//! with tight memory constraints.
//!
//! States are identified by a closed set of values implementing [`State`],
//! whose parent relationships form a static tree. A machine owns an
//! [`Hfsm`] core and implements [`Machine::handle`], a dispatch table which
//! maps each state to its handler.
//!
//! The engine offers three transition primitives:
//!
//! - [`Machine::transition_peer`] moves between two states sharing the
//!   same parent
//! - [`Machine::transition_substate`] moves into a nested state, keeping
//!   the parent active
//! - [`Machine::transition_superstate`] moves back to an already active
//!   ancestor
//!
//! Events unhandled by a state bubble up to its ancestors when the handler
//! answers [`Outcome::Super`].
//!
//! The engine is neither thread-safe nor reentrant: each machine is driven
//! by a single thread of control and events are processed to completion.
//!
//! This crate is `no_std` and never allocates.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_docs)]

/// Engine errors.
pub mod error;
/// Events and handler outcomes.
pub mod event;

mod machine;

pub use error::{Error, Result};
pub use event::{Event, Outcome};
pub use machine::{Hfsm, Machine, State};
