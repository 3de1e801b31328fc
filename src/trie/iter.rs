use super::{Node, Symbols};

/// Depth-first traversal over an explicit stack.
///
/// Children are visited in ascending symbol order and a node is visited before its children.
/// `path` always holds the symbols leading to the most recently visited node.
#[derive(Debug, Clone)]
struct Dfs<'a, V, const B: usize> {
    stack: Vec<(usize, Option<u8>, &'a Node<V, B>)>,
    path: Symbols,
    base: usize,
}

impl<'a, V, const B: usize> Dfs<'a, V, B> {
    fn new(start: Option<&'a Node<V, B>>, path: Symbols) -> Self {
        let base = path.len();
        Self {
            stack: start.map(|node| (base, None, node)).into_iter().collect(),
            path,
            base,
        }
    }

    fn advance(&mut self) -> Option<(Option<u8>, &'a Node<V, B>)> {
        let (depth, symbol, node) = self.stack.pop()?;
        self.path.truncate(depth);
        if let Some(symbol) = symbol {
            self.path.push(symbol);
        }
        let depth = self.path.len();
        self.stack.extend(
            node.children()
                .rev()
                .map(|(symbol, child)| (depth, Some(symbol), child)),
        );
        Some((symbol, node))
    }
}

/// Keys and payloads beneath a node, yielded lazily in ascending symbol order.
#[derive(Debug, Clone)]
#[must_use]
pub struct Iter<'a, V, const B: usize> {
    dfs: Dfs<'a, V, B>,
}

impl<'a, V, const B: usize> Iter<'a, V, B> {
    pub(super) fn new(start: Option<&'a Node<V, B>>, prefix: Symbols) -> Self {
        Self {
            dfs: Dfs::new(start, prefix),
        }
    }
}

impl<'a, V, const B: usize> Iterator for Iter<'a, V, B> {
    type Item = (Symbols, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, node)) = self.dfs.advance() {
            if let Some(ref value) = node.value {
                return Some((self.dfs.path.clone(), value));
            }
        }
        None
    }
}

/// A node seen by [`Walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a, V> {
    /// Distance from the root; the root itself is at depth zero.
    pub depth: usize,
    /// Symbol on the edge into this node, `None` for the root.
    pub symbol: Option<u8>,
    pub value: Option<&'a V>,
}

/// Pre-order visit of every node of a tree.
#[derive(Debug, Clone)]
#[must_use]
pub struct Walk<'a, V, const B: usize> {
    dfs: Dfs<'a, V, B>,
}

impl<'a, V, const B: usize> Walk<'a, V, B> {
    pub(super) fn new(root: &'a Node<V, B>) -> Self {
        Self {
            dfs: Dfs::new(Some(root), Default::default()),
        }
    }
}

impl<'a, V, const B: usize> Iterator for Walk<'a, V, B> {
    type Item = Visit<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.dfs.advance().map(|(symbol, node)| Visit {
            depth: self.dfs.path.len() - self.dfs.base,
            symbol,
            value: node.value.as_ref(),
        })
    }
}

impl<'a, V, const B: usize> IntoIterator for &'a super::PrefixTree<V, B> {
    type Item = (Symbols, &'a V);
    type IntoIter = Iter<'a, V, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
