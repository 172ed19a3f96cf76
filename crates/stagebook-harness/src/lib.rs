//! Deterministic simulation harness for Stagebook.
//!
//! Runs the real [`stagebook_app::Runtime`] against a simulated driver, a
//! virtual clock and the stub services, so whole sign-in and feed flows can
//! be replayed in tests without a terminal or wall-clock delays.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the segmented
//! code input. Operations are applied to both the model and the real form,
//! and their observable states are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for every App
//! invariant.
//!
//! # Fault Injection
//!
//! [`Flaky`] wraps a service and fails a seeded fraction of calls, so error
//! paths run under the same invariants as the happy path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod faults;
pub mod invariants;
pub mod model;
pub mod scenario;
pub mod sim_driver;
pub mod sim_env;

pub use faults::{FaultPlan, Flaky, INJECTED_FAULT};
pub use invariants::{
    AppSnapshot, Invariant, InvariantKind, InvariantRegistry, InvariantResult, OtpSnapshot,
    SheetSnapshot, Violation,
};
pub use model::{CodeModel, CodeObservation, CodeOp};
pub use scenario::{MAX_STEPS, RunOutcome, Scenario};
pub use sim_driver::{SimDriver, SimDriverError, SimHandle, StubBridge};
pub use sim_env::{SimEnv, SimInstant};
