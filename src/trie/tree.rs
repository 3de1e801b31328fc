use super::{
    iter::{Iter, Walk},
    Key, Node, PrefixTree, TreeStats,
};
use crate::Result;

impl<V, const B: usize> PrefixTree<V, B> {
    pub fn new() -> Self {
        PrefixTree {
            root: Node::new(),
            len: 0,
        }
    }

    /// Number of keys carrying a payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` under `key`, returning the payload it replaces.
    ///
    /// The key is validated before the tree is touched; an invalid key leaves the tree unchanged.
    pub fn insert<K: Key<B> + ?Sized>(&mut self, key: &K, value: V) -> Result<Option<V>> {
        let symbols = key.symbols()?;
        Ok(self.insert_symbols(symbols, value))
    }

    /// Inserts along already validated `symbols`.
    pub(crate) fn insert_symbols(
        &mut self,
        symbols: impl IntoIterator<Item = u8>,
        value: V,
    ) -> Option<V> {
        let mut current_node = &mut self.root;
        for symbol in symbols {
            current_node = current_node.child_or_insert(symbol);
        }
        let previous = current_node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Payload stored exactly at `key`.
    pub fn get<K: Key<B> + ?Sized>(&self, key: &K) -> Result<Option<&V>> {
        let symbols = key.symbols()?;
        Ok(self
            .root
            .descend(symbols)
            .and_then(|node| node.value.as_ref()))
    }

    pub fn get_mut<K: Key<B> + ?Sized>(&mut self, key: &K) -> Result<Option<&mut V>> {
        let mut current_node = &mut self.root;
        for symbol in key.symbols()? {
            match current_node.children[symbol as usize].as_deref_mut() {
                Some(next) => current_node = next,
                None => return Ok(None),
            }
        }
        Ok(current_node.value.as_mut())
    }

    /// Whether `key` was inserted.
    pub fn contains<K: Key<B> + ?Sized>(&self, key: &K) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Whether any path of the tree starts with `key`, whether or not it carries a payload.
    pub fn has_prefix<K: Key<B> + ?Sized>(&self, key: &K) -> Result<bool> {
        let symbols = key.symbols()?;
        Ok(self.root.descend(symbols).is_some())
    }

    /// Number of leading symbols of `key` that exist as a path in the tree.
    pub fn common_prefix_len<K: Key<B> + ?Sized>(&self, key: &K) -> Result<usize> {
        let mut current_node = &self.root;
        let mut depth = 0;
        for symbol in key.symbols()? {
            match current_node.child(symbol) {
                Some(next) => current_node = next,
                None => break,
            }
            depth += 1;
        }
        Ok(depth)
    }

    /// Deepest payload on the path of `key`, with the number of symbols leading to it.
    ///
    /// The root and the node at the end of the key are both candidates.
    pub fn longest_match<K: Key<B> + ?Sized>(&self, key: &K) -> Result<Option<(usize, &V)>> {
        let symbols = key.symbols()?;
        Ok(self.longest_match_symbols(symbols))
    }

    pub(crate) fn longest_match_symbols(
        &self,
        symbols: impl IntoIterator<Item = u8>,
    ) -> Option<(usize, &V)> {
        let mut current_node = &self.root;
        let mut best = current_node.value.as_ref().map(|value| (0, value));
        for (depth, symbol) in symbols.into_iter().enumerate() {
            match current_node.child(symbol) {
                Some(next) => current_node = next,
                None => break,
            }
            if let Some(ref value) = current_node.value {
                best = Some((depth + 1, value));
            }
        }
        best
    }

    /// Every key and payload in ascending symbol order.
    pub fn iter(&self) -> Iter<'_, V, B> {
        Iter::new(Some(&self.root), Default::default())
    }

    /// Every key starting with `prefix`, shortest first along each branch.
    ///
    /// Empty when no path starts with `prefix`.
    pub fn keys_with_prefix<K: Key<B> + ?Sized>(&self, prefix: &K) -> Result<Iter<'_, V, B>> {
        let symbols = prefix.symbols()?;
        let base = self.root.descend(symbols.iter().copied());
        Ok(Iter::new(base, symbols))
    }

    /// Pre-order visit of every node, including those without a payload.
    pub fn walk(&self) -> Walk<'_, V, B> {
        Walk::new(&self.root)
    }

    /// Releases every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::from(self)
    }

    /// Builds a tree from `(key, value)` pairs, stopping at the first invalid key.
    pub fn try_from_iter<K, I>(iter: I) -> Result<Self>
    where
        K: Key<B>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tree = PrefixTree::new();
        for (key, value) in iter {
            tree.insert(&key, value)?;
        }
        Ok(tree)
    }
}

impl<V, const B: usize> Default for PrefixTree<V, B> {
    fn default() -> Self {
        PrefixTree::new()
    }
}

impl<V, const B: usize> core::fmt::Debug for PrefixTree<V, B>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
