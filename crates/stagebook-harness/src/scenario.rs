//! Scripted runs of the real runtime.
//!
//! A [`Scenario`] owns a [`Runtime`] over a [`SimDriver`]. Tests inject input
//! through [`Scenario::handle`] and call [`Scenario::run_until_idle`], which
//! steps the runtime until every injected event and every service completion
//! has been processed, checking invariants on each render.

use stagebook_app::{App, AppConfig, Bridge, Driver, Runtime};
use stagebook_core::{AuthService, FeedService};
use stagebook_services::{ServiceConfig, StubAuthService, StubFeedService};

use crate::{
    SimEnv,
    faults::{FaultPlan, Flaky},
    invariants::InvariantRegistry,
    sim_driver::{SimDriver, SimDriverError, SimHandle},
};

/// Upper bound on steps per [`Scenario::run_until_idle`] call.
pub const MAX_STEPS: usize = 10_000;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing left to process.
    Idle,
    /// The App asked to quit.
    Quit,
}

/// A runtime over the simulation driver, with invariants enabled.
pub struct Scenario<
    A: AuthService = StubAuthService<SimEnv>,
    F: FeedService = StubFeedService<SimEnv>,
> {
    env: SimEnv,
    handle: SimHandle,
    runtime: Runtime<SimDriver<A, F>>,
}

impl Scenario {
    /// Default app over the stub services.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// App with `config` over the stub services.
    pub fn with_config(config: AppConfig) -> Self {
        let env = SimEnv::new();
        let driver = SimDriver::stubbed(&env);
        Self::from_parts(env, driver, config)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario<Flaky<StubAuthService<SimEnv>>, Flaky<StubFeedService<SimEnv>>> {
    /// Default app over stub services that fail according to `plan`.
    pub fn flaky(plan: FaultPlan) -> Self {
        let env = SimEnv::new();
        let config = ServiceConfig::default();
        // Offset the feed seed so the two services roll independently.
        let feed_plan = FaultPlan { seed: plan.seed.wrapping_add(1), ..plan };
        let bridge = Bridge::new(
            Flaky::new(StubAuthService::new(env.clone(), config), plan),
            Flaky::new(StubFeedService::new(env.clone(), config), feed_plan),
        );
        Self::from_parts(env, SimDriver::new(bridge), AppConfig::default())
    }
}

impl<A: AuthService, F: FeedService> Scenario<A, F> {
    /// Assemble a scenario from an existing driver.
    pub fn from_parts(env: SimEnv, driver: SimDriver<A, F>, config: AppConfig) -> Self {
        let driver = driver.with_invariants(InvariantRegistry::standard());
        let handle = driver.handle();
        Self { env, handle, runtime: Runtime::new(driver, App::new(config)) }
    }

    /// Input injection and records.
    pub fn handle(&self) -> &SimHandle {
        &self.handle
    }

    /// Virtual clock shared with the services.
    pub fn env(&self) -> &SimEnv {
        &self.env
    }

    /// Current App state.
    pub fn app(&self) -> &App {
        self.runtime.app()
    }

    /// The underlying driver.
    pub fn driver(&self) -> &SimDriver<A, F> {
        self.runtime.driver()
    }

    /// Step until the queue is empty or the App quits.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation, or [`SimDriverError::Stalled`]
    /// if the queue never drains.
    pub async fn run_until_idle(&mut self) -> Result<RunOutcome, SimDriverError> {
        for _ in 0..MAX_STEPS {
            if !self.handle.has_pending() {
                return Ok(RunOutcome::Idle);
            }
            if self.runtime.step().await? {
                self.runtime.driver_mut().stop();
                return Ok(RunOutcome::Quit);
            }
        }
        Err(SimDriverError::Stalled { steps: MAX_STEPS })
    }

    /// Type `text` one key at a time, then run until idle.
    pub async fn type_str(&mut self, text: &str) -> Result<RunOutcome, SimDriverError> {
        self.handle.inject_str(text);
        self.run_until_idle().await
    }
}
