//! Seeded random event walks.
//!
//! Generates reproducible event sequences for randomized runs: the same
//! seed always produces the same walk, so any failure can be replayed from
//! its seed alone.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use viewfit_core::{event::SurfaceEvent, orientation::DeviceOrientation};

/// Deterministic generator of surface events.
#[derive(Debug, Clone)]
pub struct EventWalk {
    seed: u64,
    rng: ChaCha8Rng,
}

impl EventWalk {
    /// Create a walk from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// The seed this walk was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next event.
    ///
    /// Rotations outweigh taps seven to three, so walks spend most of
    /// their time exercising orientation transitions while still reaching
    /// the zoom cycle regularly.
    pub fn next_event(&mut self) -> SurfaceEvent {
        match self.rng.gen_range(0..10u8) {
            0 => SurfaceEvent::OrientationChanged(DeviceOrientation::Unknown),
            1 => SurfaceEvent::OrientationChanged(DeviceOrientation::Portrait),
            2 => SurfaceEvent::OrientationChanged(DeviceOrientation::PortraitUpsideDown),
            3 => SurfaceEvent::OrientationChanged(DeviceOrientation::LandscapeLeft),
            4 => SurfaceEvent::OrientationChanged(DeviceOrientation::LandscapeRight),
            5 => SurfaceEvent::OrientationChanged(DeviceOrientation::FaceUp),
            6 => SurfaceEvent::OrientationChanged(DeviceOrientation::FaceDown),
            _ => SurfaceEvent::DoubleTap,
        }
    }

    /// Draw `len` events.
    pub fn events(&mut self, len: usize) -> Vec<SurfaceEvent> {
        let walk: Vec<SurfaceEvent> = (0..len).map(|_| self.next_event()).collect();
        tracing::debug!(seed = self.seed, len, "event walk generated");
        walk
    }
}
