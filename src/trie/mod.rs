//! A prefix tree over a fixed alphabet of `B` symbols.
//!
//! Keys are sequences of symbols in `0..B`. Every node owns up to `B` children and may carry a
//! payload; the key of a node is the path of symbols leading to it from the root. Children are
//! only allocated when an inserted key passes through them.

pub mod iter;
mod keys;
mod node;
mod stats;
mod tree;

pub use keys::Symbols;
pub use stats::TreeStats;

use crate::Result;

/// Conversion of a key into the symbols of an alphabet of size `B`.
pub trait Key<const B: usize> {
    /// Returns the validated symbols of this key.
    ///
    /// Fails if any part of the key has no symbol in the alphabet.
    fn symbols(&self) -> Result<Symbols>;
}

pub(crate) struct Node<V, const B: usize> {
    pub value: Option<V>,
    children: [Option<Box<Node<V, B>>>; B],
}

/// Prefix tree with branching factor `B` and payloads of type `V`.
pub struct PrefixTree<V, const B: usize> {
    root: Node<V, B>,
    len: usize,
}
