//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`stagebook_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Service actions run to completion inside [`Driver::dispatch`] and their
//! completion events join the back of the pending queue, behind any input
//! that was injected earlier. Input therefore races in-flight calls the same
//! way it does in the terminal, but in a fixed order.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use stagebook_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput};
use stagebook_core::{AuthService, FeedService};
use stagebook_services::{ServiceConfig, StubAuthService, StubFeedService};
use thiserror::Error;

use crate::{
    SimEnv,
    invariants::{AppSnapshot, InvariantRegistry, Violation, report},
};

/// Bridge over the stub services on a virtual clock.
pub type StubBridge = Bridge<StubAuthService<SimEnv>, StubFeedService<SimEnv>>;

/// Error type for simulation driver.
#[derive(Debug, Clone, Error)]
pub enum SimDriverError {
    /// An invariant failed when the App was rendered.
    #[error("invariant violation after {event}:\n  {}", report(.violations))]
    InvariantViolation {
        /// Event that produced the failing state.
        event: String,
        /// Every invariant that failed.
        violations: Vec<Violation>,
    },

    /// Events kept arriving past the step limit.
    #[error("queue still busy after {steps} steps")]
    Stalled {
        /// Steps taken.
        steps: usize,
    },
}

/// Shared state for event injection.
///
/// This allows injection and inspection from outside async contexts, even
/// after the driver has moved into a runtime.
#[derive(Debug, Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    dispatched: Vec<AppAction>,
    last_event: Option<String>,
    renders: usize,
    stopped: bool,
}

/// Cloneable view of a [`SimDriver`]'s queue and records.
#[derive(Debug, Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SharedState>>,
}

impl SimHandle {
    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.state().pending_events.push_back(event);
    }

    /// Inject a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Inject one key press per character.
    pub fn inject_str(&self, text: &str) {
        let mut state = self.state();
        state.pending_events.extend(text.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
    }

    /// Inject a bracketed paste.
    pub fn inject_paste(&self, text: &str) {
        self.inject_event(AppEvent::Paste(text.to_owned()));
    }

    /// Inject `seconds` one-second ticks.
    pub fn inject_ticks(&self, seconds: u32) {
        let mut state = self.state();
        state.pending_events.extend((0..seconds).map(|_| AppEvent::Tick));
    }

    fn next_event(&self) -> Option<AppEvent> {
        let mut state = self.state();
        let event = state.pending_events.pop_front();
        state.last_event = event.as_ref().map(|e| format!("{e:?}"));
        event
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.state().pending_events.is_empty()
    }

    /// Service actions dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<AppAction> {
        self.state().dispatched.clone()
    }

    /// Take the dispatched actions, leaving the record empty.
    pub fn take_dispatched(&self) -> Vec<AppAction> {
        std::mem::take(&mut self.state().dispatched)
    }

    /// Number of renders so far.
    pub fn renders(&self) -> usize {
        self.state().renders
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.state().stopped
    }
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`stagebook_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
pub struct SimDriver<A, F> {
    handle: SimHandle,
    bridge: Bridge<A, F>,
    invariants: Option<InvariantRegistry>,
}

impl<A, F> std::fmt::Debug for SimDriver<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimDriver")
            .field("handle", &self.handle)
            .field("invariants", &self.invariants)
            .finish_non_exhaustive()
    }
}

impl SimDriver<StubAuthService<SimEnv>, StubFeedService<SimEnv>> {
    /// Driver over the stub services with their default latencies.
    ///
    /// Latency only moves `env`'s virtual clock.
    pub fn stubbed(env: &SimEnv) -> Self {
        let config = ServiceConfig::default();
        Self::new(Bridge::new(
            StubAuthService::new(env.clone(), config),
            StubFeedService::new(env.clone(), config),
        ))
    }
}

impl<A: AuthService, F: FeedService> SimDriver<A, F> {
    /// Create a driver that executes service actions through `bridge`.
    pub fn new(bridge: Bridge<A, F>) -> Self {
        Self {
            handle: SimHandle { state: Arc::new(Mutex::new(SharedState::default())) },
            bridge,
            invariants: None,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Handle for injecting input and reading records.
    pub fn handle(&self) -> SimHandle {
        self.handle.clone()
    }

    /// The bridge service actions run through.
    pub fn bridge(&self) -> &Bridge<A, F> {
        &self.bridge
    }

    /// Check invariants against App state.
    pub fn check_invariants(&self, app: &App) -> Result<(), SimDriverError> {
        let Some(registry) = &self.invariants else {
            return Ok(());
        };
        registry.check_all(&AppSnapshot::from_app(app)).map_err(|violations| {
            let event = self.handle.state().last_event.clone().unwrap_or_else(|| "start".into());
            SimDriverError::InvariantViolation { event, violations }
        })
    }
}

impl<A: AuthService, F: FeedService> Driver for SimDriver<A, F> {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.handle.next_event())
    }

    async fn dispatch(&mut self, action: AppAction) -> Result<(), Self::Error> {
        self.handle.state().dispatched.push(action.clone());
        if let Some(event) = self.bridge.execute(action).await {
            self.handle.inject_event(event);
        }
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.handle.state().renders += 1;
        self.check_invariants(app)
    }

    fn stop(&mut self) {
        self.handle.state().stopped = true;
    }
}
