//! A synchronous adapter for cooperative, single-threaded schedulers.
//!
//! The operation machine expects asynchronous workflows and timers. On a
//! platform offering only blocking calls, the [`SyncAdapter`] plays both
//! roles with a second machine:
//!
//! ```text
//!            AzureIotSync
//!    ┌───────────┼────────────┐
//!   Idle ──── Running ──── Timeout
//! ```
//!
//! Starting a workflow and arming a timer only queue an event. The
//! [`SyncRunner`] pump then delivers queued events one at a time, and
//! otherwise asks the active workflow to do its blocking work. Results are
//! forwarded back to the operation machine once the adapter event has been
//! processed to completion.
//!
//! Only one workflow is active at a time, so a single blocking network
//! operation runs at once.

use alloc::collections::VecDeque;

use aziot_hfsm::{Event, Hfsm, Machine, Outcome, Result, State};

use log::{debug, error, info};

use crate::operation::{IotEvent, IotMachine};
use crate::pal::{Credentials, Platform, SyncPal, TimerError, Workflow, Workflows};
use crate::retry::RetryConfig;
use crate::status::{IotError, OperationResult};

/// Code returned when the adapter is asked to work without an active
/// workflow.
pub const NO_ACTIVE_WORKFLOW: i32 = 0x4E4F_5746;

/// States of the synchronous adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Root state.
    AzureIotSync,
    /// Waiting for a workflow to start or for a delay to elapse.
    Idle,
    /// A workflow is active.
    Running,
    /// Sleeping before a retry.
    Timeout,
}

const PARENTS: [Option<SyncState>; 4] = [
    None,
    Some(SyncState::AzureIotSync),
    Some(SyncState::AzureIotSync),
    Some(SyncState::AzureIotSync),
];

impl State for SyncState {
    fn parent(self) -> Option<Self> {
        PARENTS[self as usize]
    }
}

/// Application events of the synchronous adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// Activates a workflow with the given credentials.
    Start(Workflow, Credentials),
    /// Performs the pending blocking work.
    DoWork,
    /// Waits for the recorded delay before reporting a timeout.
    DoDelay,
}

/// The timer handed to the operation machine.
///
/// Arming it records the delay and queues a [`SyncEvent::DoDelay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTimer;

/// The synchronous adapter.
pub struct SyncAdapter<P: SyncPal> {
    hfsm: Hfsm<SyncState>,
    pal: P,
    active: Option<Workflow>,
    delay_ms: u32,
    pending: VecDeque<SyncEvent>,
    notifications: VecDeque<Event<IotEvent>>,
}

impl<P: SyncPal> SyncAdapter<P> {
    /// Creates a [`SyncAdapter`] and moves it into the idle state.
    ///
    /// # Errors
    ///
    /// Returns an error if a state fails to be entered.
    pub fn initialize(pal: P) -> Result<Self> {
        let mut adapter = Self {
            hfsm: Hfsm::new(SyncState::AzureIotSync),
            pal,
            active: None,
            delay_ms: 0,
            pending: VecDeque::new(),
            notifications: VecDeque::new(),
        };

        adapter.init(SyncState::AzureIotSync)?;
        adapter.transition_substate(SyncState::AzureIotSync, SyncState::Idle)?;

        Ok(adapter)
    }

    /// Returns the blocking platform.
    #[must_use]
    #[inline]
    pub const fn pal(&self) -> &P {
        &self.pal
    }

    /// Returns the mutable blocking platform.
    #[must_use]
    #[inline]
    pub const fn pal_mut(&mut self) -> &mut P {
        &mut self.pal
    }

    /// Returns the active workflow, if any.
    #[must_use]
    #[inline]
    pub const fn active(&self) -> Option<Workflow> {
        self.active
    }

    /// Returns the number of queued events.
    #[must_use]
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn notify(&mut self, event: Event<IotEvent>) {
        self.notifications.push_back(event);
    }

    fn run_active(&mut self) -> Outcome {
        let Some(workflow) = self.active else {
            error!("No active workflow");
            return Outcome::code(NO_ACTIVE_WORKFLOW);
        };

        let result = match workflow {
            Workflow::Provisioning => self.pal.run_provisioning(),
            Workflow::Hub => self.run_hub(),
        };

        match result {
            Ok(()) => {
                debug!("{workflow:?} completed");
                self.notify(Event::App(IotEvent::ProvisioningDone));
            }
            Err(e) => {
                debug!("{workflow:?} failed: {e}");
                self.notify(Event::App(IotEvent::Error(e)));
            }
        }

        Outcome::Handled
    }

    // Hub processing is a loop by itself, it only ends on failure.
    fn run_hub(&mut self) -> OperationResult {
        loop {
            self.pal.run_hub()?;
        }
    }

    fn root(&mut self, event: &Event<SyncEvent>) -> Outcome {
        match event {
            Event::Entry => Outcome::Handled,
            _ => {
                error!("Unexpected {event:?} in {:?}", SyncState::AzureIotSync);
                self.pal.critical_error()
            }
        }
    }

    fn idle(&mut self, event: &Event<SyncEvent>) -> Outcome {
        match event {
            Event::Entry | Event::Exit => Outcome::Handled,
            Event::App(SyncEvent::Start(workflow, credentials)) => {
                info!("Running {workflow:?} with {credentials:?} credentials");
                self.active = Some(*workflow);
                self.pal.set_credentials(*credentials);
                self.transition_peer(SyncState::Idle, SyncState::Running)
                    .into()
            }
            // Failures are reported once the work is over, so the delay
            // requested in response finds the adapter already idle.
            Event::App(SyncEvent::DoDelay) => self
                .transition_peer(SyncState::Idle, SyncState::Timeout)
                .into(),
            Event::App(SyncEvent::DoWork) => Outcome::Handled,
            _ => Outcome::Super,
        }
    }

    fn running(&mut self, event: &Event<SyncEvent>) -> Outcome {
        match event {
            Event::Entry | Event::Exit => Outcome::Handled,
            Event::App(SyncEvent::DoWork) => {
                if let Outcome::Failed(e) = self.run_active() {
                    return Outcome::Failed(e);
                }
                self.transition_peer(SyncState::Running, SyncState::Idle)
                    .into()
            }
            Event::App(SyncEvent::DoDelay) => self
                .transition_peer(SyncState::Running, SyncState::Timeout)
                .into(),
            _ => Outcome::Super,
        }
    }

    fn timeout(&mut self, event: &Event<SyncEvent>) -> Outcome {
        match event {
            Event::Entry | Event::Exit => Outcome::Handled,
            Event::App(SyncEvent::DoWork) => {
                debug!("Sleeping {} ms before retrying", self.delay_ms);
                self.pal.sleep(self.delay_ms);
                self.notify(Event::Timeout);
                self.transition_peer(SyncState::Timeout, SyncState::Idle)
                    .into()
            }
            _ => Outcome::Super,
        }
    }
}

impl<P: SyncPal> Machine for SyncAdapter<P> {
    type State = SyncState;
    type Event = SyncEvent;

    fn hfsm(&self) -> &Hfsm<SyncState> {
        &self.hfsm
    }

    fn hfsm_mut(&mut self) -> &mut Hfsm<SyncState> {
        &mut self.hfsm
    }

    fn handle(&mut self, state: SyncState, event: &Event<SyncEvent>) -> Outcome {
        match state {
            SyncState::AzureIotSync => self.root(event),
            SyncState::Idle => self.idle(event),
            SyncState::Running => self.running(event),
            SyncState::Timeout => self.timeout(event),
        }
    }
}

impl<P: SyncPal> Platform for SyncAdapter<P> {
    type Timer = SyncTimer;

    fn timer_create(&mut self) -> core::result::Result<SyncTimer, TimerError> {
        Ok(SyncTimer)
    }

    fn timer_start(
        &mut self,
        _timer: &mut SyncTimer,
        delay_ms: u32,
    ) -> core::result::Result<(), TimerError> {
        self.delay_ms = delay_ms;
        self.pending.push_back(SyncEvent::DoDelay);
        Ok(())
    }

    fn timer_stop(&mut self, _timer: &mut SyncTimer) -> core::result::Result<(), TimerError> {
        self.pending.retain(|event| *event != SyncEvent::DoDelay);
        Ok(())
    }

    fn timer_destroy(&mut self, _timer: SyncTimer) {}

    fn now_ms(&self) -> u64 {
        self.pal.now_ms()
    }

    fn random_jitter_ms(&mut self) -> u32 {
        self.pal.random_jitter_ms()
    }

    fn critical_error(&mut self) -> ! {
        self.pal.critical_error()
    }
}

impl<P: SyncPal> Workflows for SyncAdapter<P> {
    fn start(&mut self, workflow: Workflow, credentials: Credentials) -> OperationResult {
        if self
            .pending
            .iter()
            .any(|event| matches!(event, SyncEvent::Start(..)))
        {
            return Err(IotError::Unknown);
        }
        self.pending
            .push_back(SyncEvent::Start(workflow, credentials));
        Ok(())
    }
}

/// The pump driving the operation machine through the [`SyncAdapter`].
pub struct SyncRunner<P: SyncPal> {
    machine: IotMachine<SyncAdapter<P>>,
}

impl<P: SyncPal> SyncRunner<P> {
    /// Creates a [`SyncRunner`] for the given blocking platform.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the machines fails to initialize.
    pub fn new(pal: P, config: RetryConfig) -> Result<Self> {
        let adapter = SyncAdapter::initialize(pal)?;
        let machine = IotMachine::initialize(adapter, config)?;

        Ok(Self { machine })
    }

    /// Returns the operation machine.
    #[must_use]
    #[inline]
    pub const fn machine(&self) -> &IotMachine<SyncAdapter<P>> {
        &self.machine
    }

    /// Returns the synchronous adapter.
    #[must_use]
    #[inline]
    pub const fn adapter(&self) -> &SyncAdapter<P> {
        self.machine.platform()
    }

    /// Starts the device operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the first workflow cannot be started.
    #[inline]
    pub fn start(&mut self) -> Result<()> {
        self.machine.start()
    }

    /// Delivers the next queued event to the adapter, or asks the active
    /// workflow to work, then forwards the results to the operation machine.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler of either machine fails.
    pub fn step(&mut self) -> Result<()> {
        let adapter = self.machine.platform_mut();
        let event = adapter.pending.pop_front().unwrap_or(SyncEvent::DoWork);
        adapter.post_event(Event::App(event))?;

        while let Some(notification) = self.machine.platform_mut().notifications.pop_front() {
            self.machine.post_event(notification)?;
        }

        Ok(())
    }

    /// Starts the device operations and pumps events forever.
    ///
    /// Any failure is escalated to [`SyncPal::critical_error`].
    pub fn run(mut self) -> ! {
        if let Err(e) = self.start() {
            error!("Unable to start the device operations: {e}");
            self.machine.platform_mut().pal_mut().critical_error();
        }

        loop {
            if let Err(e) = self.step() {
                error!("Device operations failed: {e}");
                self.machine.platform_mut().pal_mut().critical_error();
            }
        }
    }
}
