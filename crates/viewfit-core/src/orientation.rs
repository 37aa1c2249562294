//! Device orientation classification and tracking.
//!
//! The hosting platform reports physical device orientation as one of seven
//! raw values; the size resolver only distinguishes three rotation classes.
//! The tracker performs that classification and records the most recent
//! result. It forwards every observation, repeats included: deduplication
//! is the resolver's emission rule, not an input-side concern.

/// Raw device orientation as delivered by the hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOrientation {
    /// Orientation cannot be determined.
    Unknown,
    /// Device upright, top of the screen up.
    Portrait,
    /// Device upright, top of the screen down.
    PortraitUpsideDown,
    /// Device on its side, top of the screen to the left.
    LandscapeLeft,
    /// Device on its side, top of the screen to the right.
    LandscapeRight,
    /// Device lying flat, screen facing up.
    FaceUp,
    /// Device lying flat, screen facing down.
    FaceDown,
}

/// Classified rotation state consumed by the size resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Either portrait variant.
    Portrait,
    /// Either landscape variant.
    Landscape,
    /// Flat, unknown, or otherwise unrecognized position.
    #[default]
    Other,
}

impl From<DeviceOrientation> for Orientation {
    fn from(raw: DeviceOrientation) -> Self {
        match raw {
            DeviceOrientation::Portrait | DeviceOrientation::PortraitUpsideDown => {
                Orientation::Portrait
            },
            DeviceOrientation::LandscapeLeft | DeviceOrientation::LandscapeRight => {
                Orientation::Landscape
            },
            DeviceOrientation::Unknown
            | DeviceOrientation::FaceUp
            | DeviceOrientation::FaceDown => Orientation::Other,
        }
    }
}

/// Tracks the most recent classified orientation.
///
/// Holds no history beyond the current value. Starts at
/// [`Orientation::Other`] before the first report arrives.
#[derive(Debug, Clone, Default)]
pub struct OrientationTracker {
    current: Orientation,
}

impl OrientationTracker {
    /// Create a tracker with no orientation observed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a raw report, record it, and hand the classification back.
    ///
    /// Every call produces a value to forward, even when the raw input
    /// repeats the previous one.
    pub fn observe(&mut self, raw: DeviceOrientation) -> Orientation {
        self.current = Orientation::from(raw);
        self.current
    }

    /// Most recently observed classification.
    #[must_use]
    pub fn current(&self) -> Orientation {
        self.current
    }
}
