use aziot_hfsm::{Event, Hfsm, Machine, Outcome, Result, State};

use log::{error, info, warn};

use crate::pal::{Credentials, Platform, Workflow, Workflows};
use crate::retry::{RetryAttempt, RetryConfig};
use crate::status::IotError;

/// Code returned when a platform timer cannot be created or armed.
pub const TIMER_FAILURE: i32 = 0x544D_5246;

/// Code returned when a workflow refuses to restart after a credential
/// swap.
pub const WORKFLOW_FAILURE: i32 = 0x574B_4646;

#[cfg(feature = "provisioning")]
const FIRST_WORKFLOW: Workflow = Workflow::Provisioning;
#[cfg(feature = "provisioning")]
const FIRST_STATE: IotState = IotState::Provisioning;

#[cfg(not(feature = "provisioning"))]
const FIRST_WORKFLOW: Workflow = Workflow::Hub;
#[cfg(not(feature = "provisioning"))]
const FIRST_STATE: IotState = IotState::Hub;

/// States of the operation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IotState {
    /// Root state, classifying failures.
    AzureIot,
    /// Waiting for the start request.
    Idle,
    /// Registering the device.
    Provisioning,
    /// Connected to the hub.
    Hub,
}

const PARENTS: [Option<IotState>; 4] = [
    None,
    Some(IotState::AzureIot),
    Some(IotState::AzureIot),
    Some(IotState::AzureIot),
];

impl State for IotState {
    fn parent(self) -> Option<Self> {
        PARENTS[self as usize]
    }
}

/// Application events of the operation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IotEvent {
    /// Starts the device operations.
    Start,
    /// The device has been registered.
    ProvisioningDone,
    /// A workflow failed.
    Error(IotError),
}

/// The operation machine.
///
/// It drives the provisioning and hub workflows, retrying transient
/// failures with an exponential backoff and swapping credentials on
/// permanent ones. Retries never end: a device without an operator keeps
/// trying until the platform declares a critical error.
pub struct IotMachine<P>
where
    P: Platform + Workflows,
{
    hfsm: Hfsm<IotState>,
    platform: P,
    config: RetryConfig,
    credentials: Credentials,
    retry_attempt: RetryAttempt,
    start_time_ms: u64,
    // Only alive while `Provisioning` or `Hub` is active.
    timer: Option<P::Timer>,
}

impl<P> IotMachine<P>
where
    P: Platform + Workflows,
{
    /// Creates an [`IotMachine`] and moves it into the idle state.
    ///
    /// # Errors
    ///
    /// Returns an error if a state fails to be entered.
    pub fn initialize(platform: P, config: RetryConfig) -> Result<Self> {
        let mut machine = Self {
            hfsm: Hfsm::new(IotState::AzureIot),
            platform,
            config,
            credentials: Credentials::Primary,
            retry_attempt: RetryAttempt::new(),
            start_time_ms: 0,
            timer: None,
        };

        machine.init(IotState::AzureIot)?;
        machine.transition_substate(IotState::AzureIot, IotState::Idle)?;

        Ok(machine)
    }

    /// Starts the device operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the first workflow cannot be started.
    #[inline]
    pub fn start(&mut self) -> Result<()> {
        self.post_event(Event::App(IotEvent::Start))
    }

    /// Returns the platform.
    #[must_use]
    #[inline]
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Returns the mutable platform.
    #[must_use]
    #[inline]
    pub const fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Returns the credentials currently in use.
    #[must_use]
    #[inline]
    pub const fn credentials(&self) -> Credentials {
        self.credentials
    }

    /// Returns the failed attempts of the current workflow.
    #[must_use]
    #[inline]
    pub const fn retry_attempt(&self) -> RetryAttempt {
        self.retry_attempt
    }

    fn reset_operation(&mut self) {
        self.start_time_ms = self.platform.now_ms();
    }

    fn elapsed_ms(&self) -> u32 {
        let elapsed = self.platform.now_ms().saturating_sub(self.start_time_ms);
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    fn start_workflow(&mut self, workflow: Workflow) -> Outcome {
        match self.platform.start(workflow, self.credentials) {
            Ok(()) => Outcome::Handled,
            Err(e) => {
                warn!("Unable to start {workflow:?}: {e}");
                self.post_event(Event::App(IotEvent::Error(IotError::Unknown)))
                    .into()
            }
        }
    }

    fn advance(&mut self, source: IotState, workflow: Workflow, destination: IotState) -> Outcome {
        match self.platform.start(workflow, self.credentials) {
            Ok(()) => self.transition_peer(source, destination).into(),
            Err(e) => {
                warn!("Unable to start {workflow:?}: {e}");
                self.post_event(Event::App(IotEvent::Error(IotError::Unknown)))
                    .into()
            }
        }
    }

    fn on_error(&mut self, error: IotError) -> Outcome {
        let elapsed_ms = self.elapsed_ms();
        self.retry_attempt.increment();

        if error.is_retriable() {
            let jitter_ms = self.platform.random_jitter_ms();
            let delay_ms = self.config.delay(elapsed_ms, self.retry_attempt, jitter_ms);

            warn!(
                "{error} failure, attempt {} retried in {delay_ms} ms",
                self.retry_attempt.get()
            );

            let Some(timer) = self.timer.as_mut() else {
                error!("No timer available to schedule the retry");
                return Outcome::code(TIMER_FAILURE);
            };

            return match self.platform.timer_start(timer, delay_ms) {
                Ok(()) => Outcome::Handled,
                Err(e) => {
                    error!("Unable to arm the retry timer: {e}");
                    Outcome::code(TIMER_FAILURE)
                }
            };
        }

        self.credentials = self.credentials.swap();
        warn!(
            "{error} failure is permanent, switching to {:?} credentials",
            self.credentials
        );
        self.reset_operation();

        if let Err(e) = self.transition_substate(IotState::AzureIot, FIRST_STATE) {
            return Outcome::Failed(e);
        }

        match self.platform.start(FIRST_WORKFLOW, self.credentials) {
            Ok(()) => Outcome::Handled,
            Err(e) => {
                error!("Unable to restart {FIRST_WORKFLOW:?}: {e}");
                Outcome::code(WORKFLOW_FAILURE)
            }
        }
    }

    fn enter_operation(&mut self) -> Outcome {
        self.retry_attempt.reset();
        self.reset_operation();

        match self.platform.timer_create() {
            Ok(timer) => {
                if let Some(stale) = self.timer.replace(timer) {
                    self.platform.timer_destroy(stale);
                }
                Outcome::Handled
            }
            Err(e) => {
                error!("Unable to create the retry timer: {e}");
                Outcome::code(TIMER_FAILURE)
            }
        }
    }

    fn exit_operation(&mut self) -> Outcome {
        if let Some(mut timer) = self.timer.take() {
            if let Err(e) = self.platform.timer_stop(&mut timer) {
                warn!("Unable to stop the retry timer: {e}");
            }
            self.platform.timer_destroy(timer);
        }
        Outcome::Handled
    }

    fn azure_iot(&mut self, event: &Event<IotEvent>) -> Outcome {
        match event {
            Event::Entry => {
                self.credentials = Credentials::Primary;
                Outcome::Handled
            }
            Event::App(IotEvent::Error(error)) => self.on_error(*error),
            _ => {
                error!("Unexpected {event:?} in {:?}", IotState::AzureIot);
                self.platform.critical_error()
            }
        }
    }

    fn idle(&mut self, event: &Event<IotEvent>) -> Outcome {
        match event {
            Event::Entry | Event::Exit => Outcome::Handled,
            Event::App(IotEvent::Start) => {
                info!("Starting device operations");
                self.advance(IotState::Idle, FIRST_WORKFLOW, FIRST_STATE)
            }
            _ => Outcome::Super,
        }
    }

    fn provisioning(&mut self, event: &Event<IotEvent>) -> Outcome {
        match event {
            Event::Entry => self.enter_operation(),
            Event::Exit => self.exit_operation(),
            Event::Timeout => {
                self.reset_operation();
                self.start_workflow(Workflow::Provisioning)
            }
            Event::App(IotEvent::ProvisioningDone) => {
                info!("Device provisioned");
                self.advance(IotState::Provisioning, Workflow::Hub, IotState::Hub)
            }
            _ => Outcome::Super,
        }
    }

    fn hub(&mut self, event: &Event<IotEvent>) -> Outcome {
        match event {
            Event::Entry => self.enter_operation(),
            Event::Exit => self.exit_operation(),
            Event::Timeout => {
                self.reset_operation();
                self.start_workflow(Workflow::Hub)
            }
            _ => Outcome::Super,
        }
    }
}

impl<P> Machine for IotMachine<P>
where
    P: Platform + Workflows,
{
    type State = IotState;
    type Event = IotEvent;

    fn hfsm(&self) -> &Hfsm<IotState> {
        &self.hfsm
    }

    fn hfsm_mut(&mut self) -> &mut Hfsm<IotState> {
        &mut self.hfsm
    }

    fn handle(&mut self, state: IotState, event: &Event<IotEvent>) -> Outcome {
        match state {
            IotState::AzureIot => self.azure_iot(event),
            IotState::Idle => self.idle(event),
            IotState::Provisioning => self.provisioning(event),
            IotState::Hub => self.hub(event),
        }
    }
}
