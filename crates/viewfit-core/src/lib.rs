//! Size-resolution core for a rotating media surface
//!
//! Pure state machine logic for resolving the display size of a media
//! surface, completely decoupled from rendering and input devices. This
//! enables deterministic testing of every transition.
//!
//! # Architecture
//!
//! Two machines cooperate: the orientation tracker classifies raw device
//! orientation reports, and the size resolver turns classified orientations
//! and recognized double-taps into display-size transitions. Both are
//! deterministic and isolated from I/O; transitions return the emission
//! decision instead of performing side effects.
//!
//! The pipeline wraps the machines for live use: all inputs funnel into one
//! ordered queue, a single consumer applies them in order, and every actual
//! size change is published on a replay-latest channel. A frontend or test
//! harness owns the ends of those channels.
//!
//! # Components
//!
//! - [`orientation`]: raw orientation classification and tracking
//! - [`resolver`]: the display-size state machine
//! - [`event`]: the merged input event type
//! - [`pipeline`]: ordered delivery and replay-latest observation
//! - [`error`]: pipeline error types

pub mod error;
pub mod event;
pub mod orientation;
pub mod pipeline;
pub mod resolver;
