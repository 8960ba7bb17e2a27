use std::time::Duration;

use ratatui::style::Color;
use tracing::{debug, trace};

use crate::animation::{Direction, Driver, FrameRequest, Sequence, Step};
use crate::ui::bars;
use crate::ui::surface::Surface;

/// Read-only view state for the status bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSnapshot {
    pub node: usize,
    pub scale: f32,
    pub forward: bool,
    pub running: bool,
}

/// The positional bar swap view.
///
/// Sole owner of the sequence and its driver; the host only calls in to
/// render, to deliver frames and to report taps.
#[derive(Debug, Clone)]
pub struct BarSwapView {
    sequence: Sequence,
    driver: Driver,
    background: Color,
}

impl BarSwapView {
    pub fn new(delay: Duration, background: Color) -> Self {
        Self {
            sequence: Sequence::new(),
            driver: Driver::new(delay),
            background,
        }
    }

    /// Clear to the background, then draw the current node
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_background(self.background);
        bars::draw_node(surface, self.sequence.current_node());
    }

    /// Advance the animation by one tick if it is running
    pub fn on_frame(&mut self) -> Option<FrameRequest> {
        let sequence = &mut self.sequence;
        self.driver.animate(|| match sequence.update() {
            Step::Continuing => {
                trace!("scale {:.3}", sequence.scale());
                false
            }
            Step::Settled(value) => {
                debug!("settled at {value}, stopping driver");
                true
            }
        })
    }

    /// Start the current node toward its other endpoint.
    ///
    /// Ignored while a node is already mid-swap.
    pub fn handle_tap(&mut self) -> Option<FrameRequest> {
        if !self.sequence.start_updating() {
            trace!("tap ignored, node {} still animating", self.sequence.current());
            return None;
        }
        debug!("tap: animating node {}", self.sequence.current());
        self.driver.start()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            node: self.sequence.current(),
            scale: self.sequence.scale(),
            forward: self.sequence.direction() == Direction::Forward,
            running: self.driver.is_running(),
        }
    }
}
