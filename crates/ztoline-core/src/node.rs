use crate::chain::Heading;
use crate::figure;
use crate::state::{NodeState, UpdateResult};
use crate::surface::{Surface, Viewport};

/// Where a step from a node in a given heading lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    /// An adjacent node exists at this index.
    Node(usize),
    /// The step would leave the chain; carries the node's own index.
    Boundary(usize),
}

impl Neighbor {
    pub fn index(self) -> usize {
        match self {
            Self::Node(i) | Self::Boundary(i) => i,
        }
    }
}

/// One figure of the chain.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimNode {
    index: usize,
    state: NodeState,
}

impl AnimNode {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: NodeState::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn draw<D: Surface + ?Sized>(&self, surface: &mut D, viewport: &Viewport) {
        figure::draw_node(surface, viewport, self.state.scale(), self.index);
    }

    pub fn update(&mut self) -> UpdateResult {
        self.state.update()
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Neighbor in `heading` within a chain of `len` nodes.
    pub fn neighbor(&self, heading: Heading, len: usize) -> Neighbor {
        let next = match heading {
            Heading::Forward => self.index.checked_add(1).filter(|&i| i < len),
            Heading::Backward => self.index.checked_sub(1),
        };
        match next {
            Some(i) => Neighbor::Node(i),
            None => Neighbor::Boundary(self.index),
        }
    }
}
