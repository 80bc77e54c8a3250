//! The object a host shell talks to: one draw entry point and one tap handler.

use crate::animator::{Animator, Scheduler};
use crate::chain::{ChainStep, NodeChain};
use crate::constants::BACK_COLOR;
use crate::error::StageError;
use crate::surface::{Surface, Viewport};

pub struct Renderer<D: Surface, S: Scheduler> {
    surface: D,
    viewport: Viewport,
    chain: NodeChain,
    animator: Animator<S>,
}

impl<D: Surface, S: Scheduler> Renderer<D, S> {
    pub fn new(surface: D, viewport: Viewport, scheduler: S) -> Self {
        Self::with_parts(
            surface,
            viewport,
            NodeChain::default(),
            Animator::new(scheduler),
        )
    }

    pub fn with_parts(
        surface: D,
        viewport: Viewport,
        chain: NodeChain,
        animator: Animator<S>,
    ) -> Self {
        Self {
            surface,
            viewport,
            chain,
            animator,
        }
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn animator(&self) -> &Animator<S> {
        &self.animator
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Clears to the background and draws every node.
    pub fn draw(&mut self) {
        let (w, h) = (self.viewport.width(), self.viewport.height());
        self.surface.set_fill_color(BACK_COLOR);
        self.surface.fill_rect(0.0, 0.0, w, h);
        self.chain.draw(&mut self.surface, &self.viewport);
    }

    /// Starts the current node and the animator. Taps while a node is still
    /// moving are ignored and return `Ok(false)`.
    pub fn handle_tap(&mut self) -> Result<bool, StageError> {
        if !self.chain.request_start() {
            log::debug!("[tap] ignored, node {} still animating", self.chain.current());
            return Ok(false);
        }
        log::info!("[tap] animating node {}", self.chain.current());
        self.animator.start()?;
        Ok(true)
    }

    /// One animator period: redraw, then advance the active node.
    pub fn tick(&mut self) -> ChainStep {
        self.draw();
        let step = self.chain.update();
        if let ChainStep::Settled { .. } = step {
            self.animator.stop();
            self.draw();
        }
        step
    }
}
