//! World state for scenario execution.
//!
//! The World holds the tracker and resolver under test, records every
//! emitted size, and provides the accessors oracles verify against.

use viewfit_core::{
    event::SurfaceEvent,
    orientation::{Orientation, OrientationTracker},
    resolver::{DisplaySize, SizeResolver},
};

/// World state containing the machines under test and their emission log.
pub struct World {
    tracker: OrientationTracker,
    resolver: SizeResolver,
    emissions: Vec<DisplaySize>,
    events_applied: usize,
}

impl World {
    /// Create a world in the initial state.
    pub fn new() -> Self {
        Self {
            tracker: OrientationTracker::new(),
            resolver: SizeResolver::new(),
            emissions: Vec::new(),
            events_applied: 0,
        }
    }

    /// Feed one event through the tracker and resolver.
    ///
    /// Emitted sizes are appended to the emission log; silent events only
    /// bump the applied counter.
    pub fn apply(&mut self, event: &SurfaceEvent) {
        let emitted = match event {
            SurfaceEvent::OrientationChanged(raw) => {
                let orientation = self.tracker.observe(*raw);
                self.resolver.apply_orientation(orientation)
            },
            SurfaceEvent::DoubleTap => self.resolver.apply_double_tap(),
        };

        self.events_applied += 1;
        if let Some(size) = emitted {
            self.emissions.push(size);
        }
    }

    /// The currently resolved display size.
    pub fn size(&self) -> DisplaySize {
        self.resolver.size()
    }

    /// The last classified orientation.
    pub fn orientation(&self) -> Orientation {
        self.resolver.orientation()
    }

    /// Every size emitted so far, in order.
    pub fn emissions(&self) -> &[DisplaySize] {
        &self.emissions
    }

    /// Number of sizes emitted so far.
    pub fn emission_count(&self) -> usize {
        self.emissions.len()
    }

    /// Number of events applied so far, silent ones included.
    pub fn events_applied(&self) -> usize {
        self.events_applied
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
