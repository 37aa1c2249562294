//! Declarative scenario tests with mandatory oracles.
//!
//! A scenario is a named sequence of surface events, replayed against a
//! fresh tracker and resolver pair. The oracle inspects the resulting
//! [`World`] and decides pass or fail; a scenario cannot run without one.

pub mod builder;
pub mod oracle;
pub mod world;

pub use builder::{RunnableScenario, Scenario};
pub use world::World;

/// Verification function invoked after a scenario has replayed its events.
pub type OracleFn = Box<dyn Fn(&World) -> Result<(), String>>;
