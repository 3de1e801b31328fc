use super::PrefixTree;
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TreeStats {
    /// Number of child slots per node
    pub branching: usize,
    /// Total number of allocated nodes, including the root
    pub nodes: usize,
    /// Number of nodes carrying a payload
    pub keys: usize,
    /// Payload nodes that also have children, i.e. keys that prefix other keys
    pub interior_keys: usize,
    /// Nodes without children
    pub leaves: usize,
    /// Length of the longest path from the root
    pub max_depth: usize,
}

impl TreeStats {
    fn new<V, const B: usize>(tree: &PrefixTree<V, B>) -> Self {
        let mut stats = Self {
            branching: B,
            ..Self::default()
        };

        let mut previous: Option<(usize, bool)> = None;
        for visit in tree.walk() {
            // Pre-order: a node is a leaf exactly when the next visit is not deeper.
            if let Some((depth, has_value)) = previous {
                let parent = visit.depth > depth;
                stats.count(parent, has_value);
            }
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(visit.depth);
            previous = Some((visit.depth, visit.value.is_some()));
        }
        if let Some((_, has_value)) = previous {
            stats.count(false, has_value);
        }

        stats
    }

    fn count(&mut self, parent: bool, has_value: bool) {
        if has_value {
            self.keys += 1;
            if parent {
                self.interior_keys += 1;
            }
        }
        if !parent {
            self.leaves += 1;
        }
    }
}

impl<V, const B: usize> From<&PrefixTree<V, B>> for TreeStats {
    fn from(tree: &PrefixTree<V, B>) -> Self {
        Self::new(tree)
    }
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "branching:     {}", self.branching)?;
        writeln!(f, "nodes:         {}", self.nodes)?;
        writeln!(f, "keys:          {}", self.keys)?;
        writeln!(f, "interior keys: {}", self.interior_keys)?;
        writeln!(f, "leaves:        {}", self.leaves)?;
        write!(f, "max depth:     {}", self.max_depth)
    }
}
