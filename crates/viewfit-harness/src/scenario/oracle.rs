//! Oracle helper functions for common verifications.
//!
//! Each helper returns a boxed [`OracleFn`] so scenarios can compose them
//! with [`all_of`] or mix them with hand-written closures.

use viewfit_core::{orientation::Orientation, resolver::DisplaySize};

use crate::scenario::OracleFn;

/// Verify the final resolved display size.
pub fn size_is(expected: DisplaySize) -> OracleFn {
    Box::new(move |world| {
        if world.size() == expected {
            Ok(())
        } else {
            Err(format!("expected size {:?}, got {:?}", expected, world.size()))
        }
    })
}

/// Verify the final classified orientation.
pub fn orientation_is(expected: Orientation) -> OracleFn {
    Box::new(move |world| {
        if world.orientation() == expected {
            Ok(())
        } else {
            Err(format!("expected orientation {:?}, got {:?}", expected, world.orientation()))
        }
    })
}

/// Verify the full emission log, in order.
pub fn emissions_are(expected: Vec<DisplaySize>) -> OracleFn {
    Box::new(move |world| {
        if world.emissions() == expected.as_slice() {
            Ok(())
        } else {
            Err(format!("expected emissions {:?}, got {:?}", expected, world.emissions()))
        }
    })
}

/// Verify how many sizes were emitted.
pub fn emission_count(expected: usize) -> OracleFn {
    Box::new(move |world| {
        if world.emission_count() == expected {
            Ok(())
        } else {
            Err(format!("expected {} emissions, got {}", expected, world.emission_count()))
        }
    })
}

/// Verify every queued event reached the machines.
pub fn events_applied(expected: usize) -> OracleFn {
    Box::new(move |world| {
        if world.events_applied() == expected {
            Ok(())
        } else {
            Err(format!("expected {} events applied, got {}", expected, world.events_applied()))
        }
    })
}

/// Compose multiple oracles; all must pass.
pub fn all_of(oracles: Vec<OracleFn>) -> OracleFn {
    Box::new(move |world| {
        for oracle in &oracles {
            oracle(world)?;
        }
        Ok(())
    })
}
