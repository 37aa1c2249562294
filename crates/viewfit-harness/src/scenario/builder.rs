//! Scenario builder API.
//!
//! Provides a declarative API for constructing scenario tests that enforce
//! the Oracle Pattern.

use viewfit_core::{event::SurfaceEvent, orientation::DeviceOrientation};

use crate::scenario::{OracleFn, World};

/// Scenario builder.
///
/// Construct a scenario by queueing rotation and tap events. Must call
/// `.oracle()` to get a RunnableScenario that can be executed.
pub struct Scenario {
    name: String,
    steps: Vec<SurfaceEvent>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), steps: Vec::new() }
    }

    /// Queue a raw orientation report.
    pub fn rotate(mut self, raw: DeviceOrientation) -> Self {
        self.steps.push(SurfaceEvent::OrientationChanged(raw));
        self
    }

    /// Queue a recognized double tap.
    pub fn double_tap(mut self) -> Self {
        self.steps.push(SurfaceEvent::DoubleTap);
        self
    }

    /// Queue a batch of events, typically drawn from an
    /// [`EventWalk`](crate::walk::EventWalk).
    pub fn steps(mut self, events: impl IntoIterator<Item = SurfaceEvent>) -> Self {
        self.steps.extend(events);
        self
    }

    /// Set the oracle function and return a runnable scenario.
    ///
    /// The oracle is mandatory - you cannot run a scenario without
    /// verification.
    pub fn oracle(self, oracle: OracleFn) -> RunnableScenario {
        RunnableScenario { scenario: self, oracle }
    }
}

/// A scenario with an oracle function that can be executed.
pub struct RunnableScenario {
    scenario: Scenario,
    oracle: OracleFn,
}

impl RunnableScenario {
    /// Execute the scenario.
    ///
    /// Replays the queued events through a fresh world in order, then runs
    /// the oracle to verify the final state. Event application is total, so
    /// the only failure path is the oracle itself; its message is prefixed
    /// with the scenario name.
    pub fn run(self) -> Result<(), String> {
        let mut world = World::new();

        for event in &self.scenario.steps {
            world.apply(event);
        }

        (self.oracle)(&world)
            .map_err(|message| format!("Scenario '{}': {}", self.scenario.name, message))?;

        Ok(())
    }
}
