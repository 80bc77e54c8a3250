//! Per-node animation progress.

use crate::constants::LINES;
use crate::scale::step_increment;

/// Outcome of advancing a node by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateResult {
    /// The node reached its target and went idle.
    Settled,
    /// The node is still moving.
    Continuing,
}

/// Scale, direction and last settled scale of one node.
///
/// While `dir == 0` the node is settled and `scale == prev_scale`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeState {
    scale: f64,
    dir: i32,
    prev_scale: f64,
}

impl NodeState {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// -1, 0 (idle) or 1.
    pub fn direction(&self) -> i32 {
        self.dir
    }

    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0
    }

    pub fn update(&mut self) -> UpdateResult {
        let lines = LINES as f64;
        self.scale += step_increment(self.scale, self.dir as f64, lines, 2.0 * lines);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir as f64;
            self.dir = 0;
            self.prev_scale = self.scale;
            return UpdateResult::Settled;
        }
        UpdateResult::Continuing
    }

    /// Heads toward the opposite end (0 -> 1, 1 -> 0). Returns false, changing
    /// nothing, if the node is already moving.
    pub fn start_updating(&mut self) -> bool {
        if self.dir != 0 {
            return false;
        }
        self.dir = 1 - 2 * self.prev_scale as i32;
        true
    }
}
