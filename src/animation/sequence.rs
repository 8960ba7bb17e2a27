use super::chain::Node;
use super::{Chain, Step, Traverse};
use tracing::debug;

/// Which way the sequence walks the chain after each settle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn signum(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Walks the chain one node per settle, bouncing between head and tail.
///
/// Only `curr` is ever animated or drawn.
#[derive(Debug, Clone)]
pub struct Sequence {
    chain: Chain,
    curr: usize,
    dir: Direction,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            curr: 0,
            dir: Direction::Forward,
        }
    }

    pub fn current(&self) -> usize {
        self.curr
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// The node being shown
    pub fn current_node(&self) -> &Node {
        self.chain.node(self.curr)
    }

    pub fn scale(&self) -> f32 {
        self.current_node().state.scale
    }

    /// Tick the current node; on settle, move `curr` along the chain
    pub fn update(&mut self) -> Step {
        let step = self.chain.node_mut(self.curr).state.update();
        if let Step::Settled(value) = step {
            let settled = self.curr;
            self.advance();
            debug!(
                "node {settled} settled at {value}, now on node {} heading {:?}",
                self.curr, self.dir
            );
        }
        step
    }

    /// Start animating the current node. `false` if it was already running.
    pub fn start_updating(&mut self) -> bool {
        self.chain.node_mut(self.curr).state.start_updating()
    }

    fn advance(&mut self) {
        let dir = self.dir.signum();
        match self.chain.get_next(self.curr, dir) {
            Traverse::Advanced(next) => {
                self.curr = next;
                // Turn around as soon as the walk lands on an end node
                if self.chain.get_next(next, dir) == Traverse::AtBoundary {
                    self.dir = self.dir.flip();
                }
            }
            Traverse::AtBoundary => self.dir = self.dir.flip(),
        }
    }
}

#[cfg(test)]
impl Sequence {
    fn at(curr: usize, dir: Direction) -> Self {
        Self {
            chain: Chain::new(),
            curr,
            dir,
        }
    }

    fn chain(&self) -> &Chain {
        &self.chain
    }
}
