//! Display-size state machine.
//!
//! This module implements the size resolver: it owns the current
//! orientation and display size and applies the two transition kinds the
//! surface reacts to.
//!
//! # State Machine
//!
//! ```text
//!              landscape             double-tap
//!   ┌───────┐ ──────────> ┌───────┐ ──────────> ┌──────┐
//!   │ Small │             │ Large │             │ Full │
//!   └───────┘ <────────── └───────┘ <────────── └──────┘
//!              portrait              double-tap
//! ```
//!
//! Orientation transitions are absolute: portrait forces `Small` and
//! landscape forces `Large` from any state, `Full` included. Other-class
//! orientations update the stored orientation but never the size.
//! Double-tap toggles within the `Large`/`Full` sub-cycle and is inert in
//! `Small`.
//!
//! # Emission contract
//!
//! Both transition methods are total. Their return value is the emission
//! decision: `Some(new_size)` exactly when the stored size changed, `None`
//! for every no-op. Callers publish on `Some` and stay silent on `None`.

use std::fmt;

use crate::orientation::Orientation;

/// Resolved size of the media surface.
///
/// Exactly one value is current at any instant. Consumers observe changes
/// through the pipeline's replay-latest channel; within the machine, a
/// transition is atomic and synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplaySize {
    /// Inline surface pinned to the top of its container.
    #[default]
    Small,
    /// Expanded surface, the landscape base state.
    Large,
    /// Zoomed stage entered from `Large` by double-tap.
    Full,
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplaySize::Small => "small",
            DisplaySize::Large => "large",
            DisplaySize::Full => "full",
        };
        f.write_str(name)
    }
}

/// Display-size state machine.
///
/// Created at session start in the `Other`/`Small` state and mutated only
/// through [`apply_orientation`](Self::apply_orientation) and
/// [`apply_double_tap`](Self::apply_double_tap). No I/O, no time, no
/// randomness.
#[derive(Debug, Clone, Default)]
pub struct SizeResolver {
    /// Current classified orientation.
    orientation: Orientation,
    /// Current display size.
    size: DisplaySize,
}

impl SizeResolver {
    /// Create a resolver in the initial `Other`/`Small` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classified orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current display size.
    #[must_use]
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Apply a classified orientation update.
    ///
    /// The stored orientation is replaced wholesale, `Other` included.
    /// Portrait forces `Small` and landscape forces `Large`, overriding
    /// whatever double-tap previously selected; `Other` leaves the size
    /// untouched.
    ///
    /// Returns the new size exactly when the stored size changed.
    pub fn apply_orientation(&mut self, orientation: Orientation) -> Option<DisplaySize> {
        self.orientation = orientation;

        let target = match orientation {
            Orientation::Portrait => DisplaySize::Small,
            Orientation::Landscape => DisplaySize::Large,
            Orientation::Other => return None,
        };

        self.transition_to(target)
    }

    /// Apply a recognized double-tap.
    ///
    /// Toggles between `Large` and `Full`. In `Small` the gesture is
    /// deliberately inert; no transition out of `Small` exists for it.
    ///
    /// Returns the new size exactly when the stored size changed.
    pub fn apply_double_tap(&mut self) -> Option<DisplaySize> {
        let target = match self.size {
            DisplaySize::Small => return None,
            DisplaySize::Large => DisplaySize::Full,
            DisplaySize::Full => DisplaySize::Large,
        };

        self.transition_to(target)
    }

    fn transition_to(&mut self, target: DisplaySize) -> Option<DisplaySize> {
        if self.size == target {
            return None;
        }

        self.size = target;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::orientation::DeviceOrientation;

    #[test]
    fn initial_state() {
        let resolver = SizeResolver::new();
        assert_eq!(resolver.orientation(), Orientation::Other);
        assert_eq!(resolver.size(), DisplaySize::Small);
    }

    #[test]
    fn portrait_forces_small() {
        let mut resolver = SizeResolver::new();

        resolver.apply_orientation(Orientation::Landscape);
        resolver.apply_double_tap();
        assert_eq!(resolver.size(), DisplaySize::Full);

        // Portrait collapses even the zoomed stage.
        assert_eq!(resolver.apply_orientation(Orientation::Portrait), Some(DisplaySize::Small));
        assert_eq!(resolver.size(), DisplaySize::Small);
    }

    #[test]
    fn landscape_forces_large() {
        let mut resolver = SizeResolver::new();

        assert_eq!(resolver.apply_orientation(Orientation::Landscape), Some(DisplaySize::Large));

        // A fresh landscape report while zoomed snaps back to Large.
        resolver.apply_double_tap();
        assert_eq!(resolver.size(), DisplaySize::Full);
        assert_eq!(resolver.apply_orientation(Orientation::Landscape), Some(DisplaySize::Large));
    }

    #[test]
    fn other_updates_orientation_but_not_size() {
        let mut resolver = SizeResolver::new();

        resolver.apply_orientation(Orientation::Landscape);
        assert_eq!(resolver.size(), DisplaySize::Large);

        assert_eq!(resolver.apply_orientation(Orientation::Other), None);
        assert_eq!(resolver.orientation(), Orientation::Other);
        assert_eq!(resolver.size(), DisplaySize::Large);
    }

    #[test]
    fn repeated_orientation_does_not_emit() {
        let mut resolver = SizeResolver::new();

        assert_eq!(resolver.apply_orientation(Orientation::Landscape), Some(DisplaySize::Large));
        assert_eq!(resolver.apply_orientation(Orientation::Landscape), None);
        assert_eq!(resolver.apply_orientation(Orientation::Portrait), Some(DisplaySize::Small));
        assert_eq!(resolver.apply_orientation(Orientation::Portrait), None);
    }

    #[test]
    fn double_tap_toggles_large_and_full() {
        let mut resolver = SizeResolver::new();

        // Inert from Small.
        assert_eq!(resolver.apply_double_tap(), None);
        assert_eq!(resolver.size(), DisplaySize::Small);

        resolver.apply_orientation(Orientation::Landscape);
        assert_eq!(resolver.apply_double_tap(), Some(DisplaySize::Full));
        assert_eq!(resolver.apply_double_tap(), Some(DisplaySize::Large));
        assert_eq!(resolver.apply_double_tap(), Some(DisplaySize::Full));
    }

    #[test]
    fn full_session_emission_log() {
        let mut resolver = SizeResolver::new();
        let mut emissions = Vec::new();

        for event in [
            Orientation::Landscape, // Small -> Large
            Orientation::Other,     // flat on a table, size untouched
        ] {
            emissions.extend(resolver.apply_orientation(event));
        }
        emissions.extend(resolver.apply_double_tap()); // Large -> Full
        emissions.extend(resolver.apply_double_tap()); // Full -> Large
        emissions.extend(resolver.apply_orientation(Orientation::Portrait)); // Large -> Small

        insta::assert_debug_snapshot!(emissions, @r###"
        [
            Large,
            Full,
            Large,
            Small,
        ]
        "###);
        assert_eq!(resolver.size(), DisplaySize::Small);
    }

    proptest! {
        /// An emission always carries a value different from the previous
        /// one, and silence always means the value is unchanged.
        #[test]
        fn emission_implies_change(steps in prop::collection::vec(0u8..8, 0..64)) {
            let mut resolver = SizeResolver::new();
            let mut last = resolver.size();

            for step in steps {
                let emitted = match step {
                    7 => resolver.apply_double_tap(),
                    0 => resolver.apply_orientation(Orientation::from(DeviceOrientation::Unknown)),
                    1 => resolver.apply_orientation(Orientation::from(DeviceOrientation::Portrait)),
                    2 => resolver.apply_orientation(
                        Orientation::from(DeviceOrientation::PortraitUpsideDown),
                    ),
                    3 => resolver.apply_orientation(
                        Orientation::from(DeviceOrientation::LandscapeLeft),
                    ),
                    4 => resolver.apply_orientation(
                        Orientation::from(DeviceOrientation::LandscapeRight),
                    ),
                    5 => resolver.apply_orientation(Orientation::from(DeviceOrientation::FaceUp)),
                    _ => resolver.apply_orientation(Orientation::from(DeviceOrientation::FaceDown)),
                };

                match emitted {
                    Some(size) => {
                        prop_assert_ne!(size, last, "emitted value must differ from previous");
                        prop_assert_eq!(size, resolver.size());
                        last = size;
                    },
                    None => prop_assert_eq!(resolver.size(), last, "silent step must not move size"),
                }
            }
        }
    }
}
