//! Per-tick snapshot handed to the renderer
//!
//! A [`Frame`] borrows the live system state; [`FrameSnapshot`] is the owned
//! copy for consumers that need to keep frames around.

use std::collections::VecDeque;

use super::states::{Body, NVec2, System};

/// Borrowed view of the system after one tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub index: u64, // 0-based frame number
    pub t: f64, // simulation time after the tick
    pub sun: NVec2, // attractor position
    pub bodies: &'a [Body], // orbiting bodies in system order
}

impl<'a> Frame<'a> {
    pub fn new(index: u64, sys: &'a System) -> Self {
        Self {
            index,
            t: sys.t,
            sun: sys.sun.x,
            bodies: &sys.bodies,
        }
    }

    /// Current positions of the orbiting bodies, in order
    pub fn positions(&self) -> impl Iterator<Item = NVec2> + 'a {
        let bodies = self.bodies;
        bodies.iter().map(|b| b.x)
    }

    /// Trails of the orbiting bodies, in order
    pub fn trails(&self) -> impl Iterator<Item = &'a VecDeque<NVec2>> + 'a {
        let bodies = self.bodies;
        bodies.iter().map(|b| &b.trail)
    }

    pub fn to_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            index: self.index,
            t: self.t,
            sun: self.sun,
            positions: self.positions().collect(),
            trails: self.trails().map(|tr| tr.iter().copied().collect()).collect(),
        }
    }
}

/// Owned copy of a [`Frame`]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub index: u64,
    pub t: f64,
    pub sun: NVec2,
    pub positions: Vec<NVec2>,
    pub trails: Vec<Vec<NVec2>>,
}
