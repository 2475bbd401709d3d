//! Consumers of the per-tick frame feed
//!
//! The simulation core only produces [`Frame`]s; what happens to them is up to
//! the [`FrameSink`] it is handed.

use crate::error::SinkError;
use crate::simulation::frame::{Frame, FrameSnapshot};

/// Receives one frame per simulated tick, in order
pub trait FrameSink {
    fn emit(&mut self, frame: &Frame<'_>) -> Result<(), SinkError>;

    /// Called once after the last frame
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn emit(&mut self, _frame: &Frame<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Keeps an owned copy of every frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<FrameSnapshot>,
    pub finished: bool,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for FrameRecorder {
    fn emit(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        self.frames.push(frame.to_snapshot());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}
