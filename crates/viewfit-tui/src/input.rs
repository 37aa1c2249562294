//! Key handling for the viewfit TUI.
//!
//! Keys stand in for the inputs the hosting platform would deliver: device
//! rotation and taps on the surface. Raw tap presses go through a
//! recognizer so that only a completed double-tap reaches the pipeline,
//! matching the gesture wiring the surface expects.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use viewfit_core::orientation::DeviceOrientation;

/// Commands produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Inject this raw device orientation.
    Rotate(DeviceOrientation),

    /// Step the simulated device one cardinal orientation clockwise.
    RotateNext,

    /// One tap press on the surface; two quick presses form a double-tap.
    Tap,

    /// Toggle the base-layout presentation policy.
    TogglePolicy,

    /// Leave the application.
    Quit,
}

/// Map a key code to a command, `None` for unbound keys.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<InputCommand> {
    match code {
        KeyCode::Char('p') => Some(InputCommand::Rotate(DeviceOrientation::Portrait)),
        KeyCode::Char('P') => Some(InputCommand::Rotate(DeviceOrientation::PortraitUpsideDown)),
        KeyCode::Char('l') => Some(InputCommand::Rotate(DeviceOrientation::LandscapeLeft)),
        KeyCode::Char('L') => Some(InputCommand::Rotate(DeviceOrientation::LandscapeRight)),
        KeyCode::Char('f') => Some(InputCommand::Rotate(DeviceOrientation::FaceUp)),
        KeyCode::Char('F') => Some(InputCommand::Rotate(DeviceOrientation::FaceDown)),
        KeyCode::Char('u') => Some(InputCommand::Rotate(DeviceOrientation::Unknown)),
        KeyCode::Char('r') => Some(InputCommand::RotateNext),
        KeyCode::Char('t') => Some(InputCommand::Tap),
        KeyCode::Char('v') => Some(InputCommand::TogglePolicy),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Next cardinal orientation when rotating the device clockwise.
///
/// Non-cardinal positions (flat or unknown) re-enter the cycle at portrait.
#[must_use]
pub fn next_clockwise(current: DeviceOrientation) -> DeviceOrientation {
    match current {
        DeviceOrientation::Portrait => DeviceOrientation::LandscapeLeft,
        DeviceOrientation::LandscapeLeft => DeviceOrientation::PortraitUpsideDown,
        DeviceOrientation::PortraitUpsideDown => DeviceOrientation::LandscapeRight,
        DeviceOrientation::LandscapeRight => DeviceOrientation::Portrait,
        DeviceOrientation::Unknown | DeviceOrientation::FaceUp | DeviceOrientation::FaceDown => {
            DeviceOrientation::Portrait
        },
    }
}

/// Turns single tap presses into recognized double-taps.
///
/// Two presses within the window complete a double-tap and reset the
/// recognizer, so a third quick press starts a new pair rather than
/// chaining onto the finished one.
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    window: Duration,
    pending: Option<Instant>,
}

impl TapRecognizer {
    /// Create a recognizer with the given double-tap window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// Register a tap press at `now`.
    ///
    /// Returns `true` when this press completes a double-tap.
    pub fn press(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(first) if now.duration_since(first) <= self.window => true,
            _ => {
                self.pending = Some(now);
                false
            },
        }
    }
}
