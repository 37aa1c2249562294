//! Ordered event delivery and replay-latest size observation.
//!
//! Live wiring around the pure machines. All inputs go through a single
//! unbounded queue, which fixes one total order across the two sources and
//! never blocks a publisher. One consumer drains the queue, applies each
//! event to the tracker and the resolver in receive order, and publishes
//! every actual size change on a watch channel.
//!
//! The watch channel gives observers replay-latest semantics: a new
//! receiver reads the current size immediately and then awaits changes.
//! Rapid consecutive changes may be conflated for a slow observer, so the
//! per-change contract is counted at the writer and reported in
//! [`PipelineStats`].

use tokio::sync::{mpsc, watch};

use crate::{
    error::PipelineError,
    event::SurfaceEvent,
    orientation::{DeviceOrientation, OrientationTracker},
    resolver::{DisplaySize, SizeResolver},
};

/// Cloneable publisher handle feeding the pipeline's event queue.
///
/// Both input kinds land in the same queue; sending never blocks.
#[derive(Debug, Clone)]
pub struct SurfaceInput {
    events: mpsc::UnboundedSender<SurfaceEvent>,
}

impl SurfaceInput {
    /// Queue a raw orientation report.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the pipeline has shut down.
    pub fn orientation_changed(&self, raw: DeviceOrientation) -> Result<(), PipelineError> {
        self.events
            .send(SurfaceEvent::OrientationChanged(raw))
            .map_err(|_| PipelineError::Closed)
    }

    /// Queue a recognized double-tap.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the pipeline has shut down.
    pub fn double_tap(&self) -> Result<(), PipelineError> {
        self.events.send(SurfaceEvent::DoubleTap).map_err(|_| PipelineError::Closed)
    }
}

/// Counters describing a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// Events drained from the queue.
    pub events: u64,
    /// Size changes published to observers.
    pub emissions: u64,
}

/// Single consumer of the surface-event queue.
///
/// Owns the orientation tracker and the size resolver. Events are applied
/// strictly in queue order with no batching or coalescing.
#[derive(Debug)]
pub struct SizePipeline {
    events: mpsc::UnboundedReceiver<SurfaceEvent>,
    sizes: watch::Sender<DisplaySize>,
    tracker: OrientationTracker,
    resolver: SizeResolver,
}

impl SizePipeline {
    /// Create a pipeline together with its input handle and size observer.
    ///
    /// The observer starts at [`DisplaySize::Small`], the initial state;
    /// additional observers come from cloning it.
    #[must_use]
    pub fn new() -> (Self, SurfaceInput, watch::Receiver<DisplaySize>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (size_tx, size_rx) = watch::channel(DisplaySize::default());

        let pipeline = Self {
            events: event_rx,
            sizes: size_tx,
            tracker: OrientationTracker::new(),
            resolver: SizeResolver::new(),
        };

        (pipeline, SurfaceInput { events: event_tx }, size_rx)
    }

    /// Drain the queue until every [`SurfaceInput`] clone is dropped.
    ///
    /// Returns the run's counters so callers can verify the emission
    /// contract end to end.
    pub async fn run(mut self) -> PipelineStats {
        let mut stats = PipelineStats::default();

        while let Some(event) = self.events.recv().await {
            stats.events += 1;
            tracing::trace!(?event, "surface event");

            let emitted = match event {
                SurfaceEvent::OrientationChanged(raw) => {
                    let orientation = self.tracker.observe(raw);
                    self.resolver.apply_orientation(orientation)
                },
                SurfaceEvent::DoubleTap => self.resolver.apply_double_tap(),
            };

            if let Some(size) = emitted {
                stats.emissions += 1;
                tracing::debug!(%size, "display size changed");
                self.sizes.send_replace(size);
            }
        }

        tracing::debug!(events = stats.events, emissions = stats.emissions, "pipeline drained");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_apply_in_order() {
        let (pipeline, input, sizes) = SizePipeline::new();

        // The unbounded queue buffers everything, so the whole session can
        // be scripted before the consumer runs.
        input.orientation_changed(DeviceOrientation::LandscapeLeft).unwrap();
        input.double_tap().unwrap();
        input.double_tap().unwrap();
        input.orientation_changed(DeviceOrientation::Portrait).unwrap();
        drop(input);

        let stats = pipeline.run().await;
        assert_eq!(stats, PipelineStats { events: 4, emissions: 4 });
        assert_eq!(*sizes.borrow(), DisplaySize::Small);
    }

    #[tokio::test]
    async fn silent_events_are_counted_but_not_published() {
        let (pipeline, input, sizes) = SizePipeline::new();

        input.double_tap().unwrap();
        input.orientation_changed(DeviceOrientation::FaceUp).unwrap();
        input.orientation_changed(DeviceOrientation::LandscapeLeft).unwrap();
        input.orientation_changed(DeviceOrientation::LandscapeLeft).unwrap();
        drop(input);

        let stats = pipeline.run().await;
        assert_eq!(stats, PipelineStats { events: 4, emissions: 1 });
        assert_eq!(*sizes.borrow(), DisplaySize::Large);
    }

    #[tokio::test]
    async fn new_observers_replay_the_latest_size() {
        let (pipeline, input, sizes) = SizePipeline::new();

        input.orientation_changed(DeviceOrientation::LandscapeRight).unwrap();
        drop(input);
        pipeline.run().await;

        // A receiver cloned after the fact still reads the current value.
        let late = sizes.clone();
        assert_eq!(*late.borrow(), DisplaySize::Large);
    }

    #[tokio::test]
    async fn observer_follows_changes_while_running() {
        let (pipeline, input, mut sizes) = SizePipeline::new();
        let worker = tokio::spawn(pipeline.run());

        input.orientation_changed(DeviceOrientation::LandscapeLeft).unwrap();
        assert!(sizes.wait_for(|size| *size == DisplaySize::Large).await.is_ok());

        input.double_tap().unwrap();
        assert!(sizes.wait_for(|size| *size == DisplaySize::Full).await.is_ok());

        drop(input);
        let stats = worker.await.unwrap();
        assert_eq!(stats, PipelineStats { events: 2, emissions: 2 });
    }

    #[tokio::test]
    async fn sending_after_shutdown_reports_closed() {
        let (pipeline, input, _sizes) = SizePipeline::new();
        drop(pipeline);

        assert_eq!(
            input.orientation_changed(DeviceOrientation::Portrait),
            Err(PipelineError::Closed)
        );
        assert_eq!(input.double_tap(), Err(PipelineError::Closed));
    }
}
