//! Fixed-length simulation run
//!
//! `Simulation` owns a built `Scenario` and steps it `frame_count` times,
//! handing one frame per tick to a `FrameSink`. A `CancelToken` is checked
//! between ticks so a run can be stopped early without a half-written frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use super::frame::Frame;
use super::integrator::euler_integrator;
use super::scenario::Scenario;
use super::states::System;
use crate::visualization::sink::FrameSink;

const PROGRESS_EVERY: u64 = 10;

/// Cloneable stop flag, settable from any thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Setup,
    Running { frame: u64 },
    Done,
}

/// Outcome of [`Simulation::run`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_simulated: u64,
    pub frames_emitted: u64,
    pub cancelled: bool,
    pub sink_failed: bool,
    pub degenerate_skips: u64, // body-ticks where gravity was skipped
}

pub struct Simulation {
    scenario: Scenario,
    state: RunState,
    cancel: CancelToken,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            state: RunState::Setup,
            cancel: CancelToken::new(),
        }
    }

    /// Use an externally owned stop flag
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Run every remaining frame, emitting each one to `sink`
    ///
    /// A sink error is logged once and the sink is not used again; the physics
    /// still runs to the end. Running a finished simulation does nothing.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> RunSummary {
        let mut summary = RunSummary::default();
        if self.state == RunState::Done {
            return summary;
        }

        let total = self.scenario.parameters.frame_count;
        info!(frames = total, bodies = self.scenario.system.bodies.len(), "starting simulation");

        for frame in 0..total {
            if self.cancel.is_cancelled() {
                info!(frame, "simulation cancelled");
                summary.cancelled = true;
                break;
            }
            self.state = RunState::Running { frame };

            if frame % PROGRESS_EVERY == 0 {
                info!("Frame {frame}/{total}");
            }

            let Scenario { system, parameters, gravity, .. } = &mut self.scenario;
            let report = euler_integrator(system, gravity, parameters);
            summary.frames_simulated += 1;
            summary.degenerate_skips += report.skipped_gravity.len() as u64;

            if summary.sink_failed {
                continue;
            }
            match sink.emit(&Frame::new(frame, system)) {
                Ok(()) => summary.frames_emitted += 1,
                Err(err) => {
                    warn!(frame, "renderer failed, continuing without output: {err}");
                    summary.sink_failed = true;
                }
            }
        }

        if !summary.sink_failed {
            if let Err(err) = sink.finish() {
                warn!("renderer failed to finish: {err}");
                summary.sink_failed = true;
            }
        }

        self.state = RunState::Done;
        info!(
            simulated = summary.frames_simulated,
            emitted = summary.frames_emitted,
            degenerate_skips = summary.degenerate_skips,
            "Done"
        );
        summary
    }
}
