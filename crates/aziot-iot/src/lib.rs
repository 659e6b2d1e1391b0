//! `aziot-iot` drives the operations of a device connected to Azure IoT:
//! registration through the provisioning service, then connection to the
//! hub.
//!
//! The [`operation::IotMachine`] is a hierarchical state machine built on
//! top of `aziot-hfsm`:
//!
//! ```text
//!                 AzureIot
//!    ┌───────────────┼───────────────┐
//!   Idle ───── Provisioning ──────── Hub
//! ```
//!
//! Failures reported by a workflow are classified by the root state.
//! Transient ones are retried with an exponential backoff and a random
//! jitter, permanent ones swap the device credentials and restart the
//! whole sequence. Retries never stop on their own.
//!
//! Timers, randomness and the workflows themselves are provided by the
//! platform through the [`pal`] traits. Platforms offering only blocking
//! calls can rely on the [`sync`] adapter and its single-threaded pump.
//!
//! The `provisioning` feature, enabled by default, compiles the
//! registration step in. Without it, devices connect to the hub directly.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

/// The operation machine.
pub mod operation;
/// Platform adaptation layer contracts.
pub mod pal;
/// Retry policy.
pub mod retry;
/// Failure classification.
pub mod status;
pub mod sync;

pub use operation::{IotEvent, IotMachine, IotState};
pub use retry::RetryConfig;
pub use status::{IotError, Status};
