use super::{State, PALETTE};

/// One element of the bar chain: a palette slot plus its own progress
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub index: usize,
    pub state: State,
}

/// Result of asking for a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traverse {
    Advanced(usize),
    /// No neighbor that way; the caller stays on the current node
    AtBoundary,
}

/// Fixed arena of nodes, one per palette entry.
///
/// Links are plain index arithmetic: `next(i) = i + 1`, `prev(i) = i - 1`.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub fn new() -> Self {
        let nodes = (0..PALETTE.len())
            .map(|index| Node {
                index,
                state: State::default(),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.len()).then_some(next)
    }

    pub fn prev(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    /// Neighbor of `index` in direction `dir` (`1` forward, anything else backward)
    pub fn get_next(&self, index: usize, dir: i8) -> Traverse {
        let neighbor = if dir == 1 {
            self.next(index)
        } else {
            self.prev(index)
        };
        match neighbor {
            Some(i) => Traverse::Advanced(i),
            None => Traverse::AtBoundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_has_one_node_per_color() {
        let chain = Chain::new();
        assert_eq!(chain.len(), 5);
        for i in 0..chain.len() {
            assert_eq!(chain.node(i).index, i);
            assert_eq!(chain.node(i).state, State::default());
        }
    }

    #[test]
    fn ends_have_no_outward_links() {
        let chain = Chain::new();
        assert_eq!(chain.next(4), None);
        assert_eq!(chain.prev(0), None);
        assert_eq!(chain.next(0), Some(1));
        assert_eq!(chain.prev(4), Some(3));
    }

    #[test]
    fn get_next_walks_both_ways() {
        let chain = Chain::new();
        assert_eq!(chain.get_next(2, 1), Traverse::Advanced(3));
        assert_eq!(chain.get_next(2, -1), Traverse::Advanced(1));
    }

    #[test]
    fn get_next_reports_boundary_every_call() {
        let chain = Chain::new();
        for _ in 0..3 {
            assert_eq!(chain.get_next(4, 1), Traverse::AtBoundary);
            assert_eq!(chain.get_next(0, -1), Traverse::AtBoundary);
        }
    }
}
