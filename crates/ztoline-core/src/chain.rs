//! The chain controller: which node is animating and where focus goes next.

use crate::constants::NODES;
use crate::node::{AnimNode, Neighbor};
use crate::state::UpdateResult;
use crate::surface::{Surface, Viewport};
use smallvec::SmallVec;

/// Direction the active node moves along the chain after each settle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

impl Heading {
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Result of one chain tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainStep {
    /// The current node is still animating.
    Continuing,
    /// `node` settled; `boundary` is set when the heading flipped at a chain end.
    Settled { node: usize, boundary: bool },
}

/// Ordered, eagerly built sequence of nodes with a single focus.
///
/// At most one node is non-idle at a time, and it is always the current one.
#[derive(Clone, Debug)]
pub struct NodeChain {
    nodes: SmallVec<[AnimNode; NODES]>,
    current: usize,
    heading: Heading,
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new(NODES)
    }
}

impl NodeChain {
    /// Builds `len` idle nodes (at least one) with focus on node 0.
    pub fn new(len: usize) -> Self {
        let nodes = (0..len.max(1)).map(AnimNode::new).collect();
        Self {
            nodes,
            current: 0,
            heading: Heading::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn nodes(&self) -> &[AnimNode] {
        &self.nodes
    }

    pub fn node(&self, i: usize) -> Option<&AnimNode> {
        self.nodes.get(i)
    }

    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.state().is_idle()).count()
    }

    /// Starts the current node. False if it was already animating.
    pub fn request_start(&mut self) -> bool {
        self.nodes[self.current].start_updating()
    }

    /// Advances the current node by one tick and moves focus when it settles.
    pub fn update(&mut self) -> ChainStep {
        let node = self.current;
        match self.nodes[node].update() {
            UpdateResult::Continuing => ChainStep::Continuing,
            UpdateResult::Settled => {
                let boundary = match self.nodes[node].neighbor(self.heading, self.len()) {
                    Neighbor::Node(next) => {
                        self.current = next;
                        false
                    }
                    Neighbor::Boundary(_) => {
                        self.heading = self.heading.reversed();
                        true
                    }
                };
                log::debug!(
                    "[chain] node {} settled at {}, current={} heading={:?}",
                    node,
                    self.nodes[node].state().scale(),
                    self.current,
                    self.heading
                );
                ChainStep::Settled { node, boundary }
            }
        }
    }

    pub fn draw<D: Surface + ?Sized>(&self, surface: &mut D, viewport: &Viewport) {
        for node in &self.nodes {
            node.draw(surface, viewport);
        }
    }
}
