//! Event boundary between the pipeline and its caller.
//!
//! Steps and the executor publish [`PipelineEvent`]s through an [`EventSink`];
//! the caller (UI, CLI, tests) reads them from the matching [`PipelineBridge`].
//! The channel is unbounded, so publishing never blocks and every event is
//! queued before the next step runs.

use crate::pipeline::id::StepId;
use crate::pipeline::step::ProcessingMode;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

/// Events emitted by the pipeline and its steps.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A step was appended to the pipeline.
    StepAdded { id: StepId, step_type: String },

    /// `add_step` was called with a name missing from the registry.
    UnknownStep { step_type: String },

    /// Snapshot of a sink's accumulated log, fired after the sink runs.
    PlotDataUpdated(Vec<f64>),

    /// A threshold step's latest flag, fired after the step runs.
    BranchTaken(bool),

    /// A generator's processing mode changed.
    ProcessingModeChanged { step: String, mode: ProcessingMode },

    /// A smoothing step's coefficient changed.
    AlphaChanged { step: String, alpha: f64 },
}

/// Publishing half of the event channel.
///
/// A detached sink drops every event.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<Sender<PipelineEvent>>,
}

impl EventSink {
    /// A sink with no receiver.
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn is_detached(&self) -> bool {
        self.tx.is_none()
    }

    /// Queue an event. Dropped if detached or if the bridge is gone.
    pub fn emit(&self, event: PipelineEvent) {
        if let Some(tx) = &self.tx {
            if tx.send(event).is_err() {
                tracing::trace!("Event dropped: bridge disconnected");
            }
        }
    }
}

/// Receiving half of the event channel, held by the caller.
pub struct PipelineBridge {
    rx: Receiver<PipelineEvent>,
}

impl PipelineBridge {
    /// Create a connected bridge/sink pair.
    pub fn new() -> (Self, EventSink) {
        let (tx, rx) = unbounded();
        (Self { rx }, EventSink { tx: Some(tx) })
    }

    /// Take the next queued event, if any.
    pub fn try_recv(&self) -> Option<PipelineEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every queued event, in emission order.
    pub fn drain(&self) -> Vec<PipelineEvent> {
        self.rx.try_iter().collect()
    }

    /// Iterate over queued events without blocking.
    pub fn iter_pending(&self) -> impl Iterator<Item = PipelineEvent> + '_ {
        self.rx.try_iter()
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (bridge, sink) = PipelineBridge::new();
        sink.emit(PipelineEvent::BranchTaken(true));
        sink.emit(PipelineEvent::PlotDataUpdated(vec![1.0]));

        assert_eq!(bridge.pending(), 2);
        assert_eq!(
            bridge.drain(),
            vec![
                PipelineEvent::BranchTaken(true),
                PipelineEvent::PlotDataUpdated(vec![1.0]),
            ]
        );
        assert!(bridge.try_recv().is_none());
    }

    #[test]
    fn test_detached_sink_drops_events() {
        let sink = EventSink::detached();
        assert!(sink.is_detached());
        sink.emit(PipelineEvent::BranchTaken(false));
    }

    #[test]
    fn test_emit_after_bridge_dropped() {
        let (bridge, sink) = PipelineBridge::new();
        drop(bridge);
        sink.emit(PipelineEvent::BranchTaken(false));
    }
}
