//! Pipeline error types.

use thiserror::Error;

/// Errors produced by the delivery pipeline.
///
/// Size transitions themselves are total functions and cannot fail; the
/// only failure mode belongs to the plumbing around them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// The pipeline consumer has shut down and no longer accepts events.
    #[error("size pipeline is closed")]
    Closed,
}
