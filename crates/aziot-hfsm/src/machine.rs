use log::{trace, warn};

use crate::error::{Error, Result};
use crate::event::{Event, Outcome};

/// Identifier of a state within a hierarchy.
///
/// The hierarchy is a static tree: every state but the root has exactly one
/// parent, and it never changes at runtime. Implementors usually back
/// [`State::parent`] with a constant table indexed by the state identifier.
///
/// # Example
///
/// ```rust
/// use aziot_hfsm::State;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Lamp {
///     Root,
///     Off,
///     On,
/// }
///
/// const PARENTS: [Option<Lamp>; 3] = [None, Some(Lamp::Root), Some(Lamp::Root)];
///
/// impl State for Lamp {
///     fn parent(self) -> Option<Self> {
///         PARENTS[self as usize]
///     }
/// }
/// ```
pub trait State: Copy + Eq + core::fmt::Debug {
    /// Returns the parent state, or [`None`] for the root.
    fn parent(self) -> Option<Self>;
}

/// The engine core embedded into each machine.
///
/// It only tracks the current state. Handlers and the state hierarchy
/// belong to the embedding [`Machine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hfsm<S: State> {
    current: S,
}

impl<S: State> Hfsm<S> {
    /// Creates an [`Hfsm`] positioned on the given root state.
    ///
    /// No handler is invoked until [`Machine::init`] is called.
    #[must_use]
    #[inline]
    pub const fn new(root: S) -> Self {
        Self { current: root }
    }

    /// Returns the current state.
    #[must_use]
    #[inline]
    pub const fn current(&self) -> S {
        self.current
    }
}

/// A hierarchical state machine.
///
/// Implementors provide the handler dispatch table through
/// [`Machine::handle`], while the engine provides initialization,
/// the three transition primitives and event dispatching.
///
/// Handlers run to completion. The engine never blocks, retries or
/// interprets handler failures, it only propagates them.
pub trait Machine {
    /// State identifiers.
    type State: State;
    /// Application events.
    type Event;

    /// Returns the engine core.
    fn hfsm(&self) -> &Hfsm<Self::State>;

    /// Returns the mutable engine core.
    fn hfsm_mut(&mut self) -> &mut Hfsm<Self::State>;

    /// Dispatches an event to the handler of the given state.
    fn handle(&mut self, state: Self::State, event: &Event<Self::Event>) -> Outcome;

    /// Returns the current state.
    #[inline]
    fn current_state(&self) -> Self::State {
        self.hfsm().current
    }

    /// Initializes the machine on its root state, which is then entered.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` has a parent or if its entry handler fails.
    fn init(&mut self, root: Self::State) -> Result<()> {
        if root.parent().is_some() {
            return Err(Error::NotRoot);
        }

        self.hfsm_mut().current = root;
        self.enter(root)
    }

    /// Transitions between two peer states.
    ///
    /// Every active substate of `source` is exited first, innermost first.
    /// Then `source` is exited and `destination` is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not active or if an exit or entry
    /// handler fails. On failure the current state is left where the walk
    /// stopped.
    fn transition_peer(&mut self, source: Self::State, destination: Self::State) -> Result<()> {
        self.exit_substates(source)?;
        self.exit(source)?;

        trace!("Transition (peer) {source:?} -> {destination:?}");
        self.hfsm_mut().current = destination;
        self.enter(destination)
    }

    /// Transitions from `source` into one of its children.
    ///
    /// Every active substate of `source` is exited first, then `destination`
    /// is entered. `source` stays active, so it is **not** exited.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not active or if an exit or entry
    /// handler fails.
    fn transition_substate(
        &mut self,
        source: Self::State,
        destination: Self::State,
    ) -> Result<()> {
        self.exit_substates(source)?;

        trace!("Transition (substate) {source:?} -> {destination:?}");
        self.hfsm_mut().current = destination;
        self.enter(destination)
    }

    /// Transitions from `source` to one of its ancestors.
    ///
    /// Every active substate of `source` is exited first, then `source`
    /// itself. `destination` is already active, so it is **not** entered.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not active or if an exit handler
    /// fails.
    fn transition_superstate(
        &mut self,
        source: Self::State,
        destination: Self::State,
    ) -> Result<()> {
        self.exit_substates(source)?;
        self.exit(source)?;

        trace!("Transition (superstate) {source:?} -> {destination:?}");
        self.hfsm_mut().current = destination;
        Ok(())
    }

    /// Posts an event to the current state.
    ///
    /// When a handler answers [`Outcome::Super`], the event is dispatched
    /// again to its parent, until a handler consumes it.
    ///
    /// # Errors
    ///
    /// Returns the failure of the handler which consumed the event, or
    /// [`Error::Unhandled`] when the event bubbles past the root.
    fn post_event(&mut self, event: Event<Self::Event>) -> Result<()> {
        let mut state = self.current_state();
        loop {
            match self.handle(state, &event) {
                Outcome::Handled => return Ok(()),
                Outcome::Failed(e) => return Err(e),
                Outcome::Super => {
                    let Some(parent) = state.parent() else {
                        warn!("Event unhandled by {state:?} and its ancestors");
                        return Err(Error::Unhandled);
                    };
                    state = parent;
                }
            }
        }
    }

    #[doc(hidden)]
    fn exit_substates(&mut self, source: Self::State) -> Result<()> {
        while self.current_state() != source {
            let current = self.current_state();
            self.exit(current)?;
            self.hfsm_mut().current = current.parent().ok_or(Error::InactiveSource)?;
        }
        Ok(())
    }

    #[doc(hidden)]
    fn enter(&mut self, state: Self::State) -> Result<()> {
        self.lifecycle(state, &Event::Entry)
    }

    #[doc(hidden)]
    fn exit(&mut self, state: Self::State) -> Result<()> {
        self.lifecycle(state, &Event::Exit)
    }

    #[doc(hidden)]
    fn lifecycle(&mut self, state: Self::State, event: &Event<Self::Event>) -> Result<()> {
        debug_assert!(event.is_lifecycle());
        // Entry and exit notifications are never bubbled.
        match self.handle(state, event) {
            Outcome::Handled | Outcome::Super => Ok(()),
            Outcome::Failed(e) => Err(e),
        }
    }
}
