//! Input events for the size pipeline.
//!
//! Orientation reports and recognized double-taps share one queue, so this
//! is the single entry type for everything the surface reacts to.

use crate::orientation::DeviceOrientation;

/// One entry in the merged surface-event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The hosting platform reported a device orientation, possibly
    /// repeating the previous one.
    OrientationChanged(DeviceOrientation),

    /// The gesture layer recognized a double-tap on the surface.
    DoubleTap,
}
