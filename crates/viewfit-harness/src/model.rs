//! Reference model for the size rules.
//!
//! An independent formulation of the machine under test: instead of
//! storing the resolved size directly, the model keeps a base size picked
//! by orientation plus a zoom flag toggled by double-tap. Property tests
//! check that this formulation and the production resolver never diverge.

use viewfit_core::{event::SurfaceEvent, orientation::DeviceOrientation, resolver::DisplaySize};

/// Base-plus-zoom formulation of the size rules.
///
/// - portrait picks the `Small` base and clears the zoom
/// - landscape picks the `Large` base and clears the zoom
/// - flat or unknown positions change nothing
/// - double-tap toggles the zoom flag, but only on the `Large` base
///
/// The observed size is `Full` while zoomed, otherwise the base.
#[derive(Debug, Clone, Default)]
pub struct ReferenceModel {
    base: DisplaySize,
    zoomed: bool,
}

impl ReferenceModel {
    /// Create a model in the initial state: `Small` base, not zoomed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observed display size.
    #[must_use]
    pub fn size(&self) -> DisplaySize {
        if self.zoomed { DisplaySize::Full } else { self.base }
    }

    /// Apply one event under the model's rules.
    ///
    /// Follows the same emission contract as the production machines:
    /// returns the new size exactly when the observed size changed.
    pub fn apply(&mut self, event: &SurfaceEvent) -> Option<DisplaySize> {
        let before = self.size();

        match event {
            SurfaceEvent::OrientationChanged(raw) => match raw {
                DeviceOrientation::Portrait | DeviceOrientation::PortraitUpsideDown => {
                    self.base = DisplaySize::Small;
                    self.zoomed = false;
                },
                DeviceOrientation::LandscapeLeft | DeviceOrientation::LandscapeRight => {
                    self.base = DisplaySize::Large;
                    self.zoomed = false;
                },
                DeviceOrientation::Unknown
                | DeviceOrientation::FaceUp
                | DeviceOrientation::FaceDown => {},
            },
            SurfaceEvent::DoubleTap => {
                if self.base == DisplaySize::Large {
                    self.zoomed = !self.zoomed;
                }
            },
        }

        let after = self.size();
        (after != before).then_some(after)
    }
}
