use crate::status::OperationResult;

/// The workflows driven by the operation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Registration of the device through the provisioning service.
    Provisioning,
    /// Connection to the hub, telemetry and device twin processing.
    Hub,
}

/// The credential set used to authenticate the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Credentials {
    /// The primary credentials.
    #[default]
    Primary,
    /// The secondary credentials.
    Secondary,
}

impl Credentials {
    /// Returns the other credential set.
    #[must_use]
    #[inline]
    pub const fn swap(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }

    /// Whether these are the secondary credentials.
    #[must_use]
    #[inline]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Secondary)
    }
}

/// Errors reported by a platform timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerError;

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Timer")
    }
}

/// The platform services consumed by the operation machine.
///
/// An expired timer must be reported to the machine by posting
/// [`Event::Timeout`](aziot_hfsm::Event::Timeout).
pub trait Platform {
    /// A timer handle.
    type Timer;

    /// Creates a one-shot timer.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform runs out of timers.
    fn timer_create(&mut self) -> Result<Self::Timer, TimerError>;

    /// Arms a timer, which expires after `delay_ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer cannot be armed.
    fn timer_start(&mut self, timer: &mut Self::Timer, delay_ms: u32) -> Result<(), TimerError>;

    /// Disarms a timer.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer cannot be disarmed.
    fn timer_stop(&mut self, timer: &mut Self::Timer) -> Result<(), TimerError>;

    /// Releases a timer.
    fn timer_destroy(&mut self, timer: Self::Timer);

    /// Returns the time elapsed since an arbitrary epoch, in milliseconds.
    fn now_ms(&self) -> u64;

    /// Returns a random jitter, in milliseconds.
    fn random_jitter_ms(&mut self) -> u32;

    /// Reports an unrecoverable failure. Usually resets the device.
    fn critical_error(&mut self) -> !;
}

/// The provisioning and hub sub-machines.
pub trait Workflows {
    /// Starts a workflow with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow refuses to start.
    fn start(&mut self, workflow: Workflow, credentials: Credentials) -> OperationResult;
}

/// The blocking platform services driven by the synchronous adapter.
pub trait SyncPal {
    /// Returns the time elapsed since an arbitrary epoch, in milliseconds.
    fn now_ms(&self) -> u64;

    /// Returns a random jitter, in milliseconds.
    fn random_jitter_ms(&mut self) -> u32;

    /// Reports an unrecoverable failure. Usually resets the device.
    fn critical_error(&mut self) -> !;

    /// Selects the credentials used by the next operations.
    fn set_credentials(&mut self, credentials: Credentials);

    /// Registers the device, blocking until the registration completes.
    ///
    /// # Errors
    ///
    /// Returns the classified registration failure.
    fn run_provisioning(&mut self) -> OperationResult;

    /// Runs one iteration of the hub processing, blocking until it
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns the classified hub failure.
    fn run_hub(&mut self) -> OperationResult;

    /// Blocks for the given amount of milliseconds.
    fn sleep(&mut self, delay_ms: u32);
}
