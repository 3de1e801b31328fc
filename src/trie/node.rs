use super::Node;

impl<V, const B: usize> Node<V, B> {
    const ALPHABET: () = assert!(
        B > 0 && B <= u8::MAX as usize + 1,
        "Every symbol of the alphabet must fit within a u8"
    );

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ALPHABET;
        Node {
            value: None,
            children: [const { None }; B],
        }
    }

    pub fn child(&self, symbol: u8) -> Option<&Self> {
        self.children.get(symbol as usize)?.as_deref()
    }

    /// Returns the child under `symbol`, allocating it if the slot is empty.
    ///
    /// `symbol` must already be validated against the alphabet.
    pub fn child_or_insert(&mut self, symbol: u8) -> &mut Self {
        debug_assert!((symbol as usize) < B, "Unvalidated symbol {symbol}");
        self.children[symbol as usize].get_or_insert_with(|| Box::new(Node::new()))
    }

    /// Follows `symbols` from this node, stopping at the first missing child.
    pub fn descend(&self, symbols: impl IntoIterator<Item = u8>) -> Option<&Self> {
        let mut current = self;
        for symbol in symbols {
            current = current.child(symbol)?;
        }
        Some(current)
    }

    /// Children in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (u8, &Self)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(symbol, child)| child.as_deref().map(|child| (symbol as u8, child)))
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Detaches every descendant and releases them without recursing.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Self>> = self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
        self.value = None;
    }
}

impl<V, const B: usize> Drop for Node<V, B> {
    fn drop(&mut self) {
        // Each popped node is dropped childless, so this never nests.
        if self.has_children() {
            self.clear();
        }
    }
}

impl<V, const B: usize> core::fmt::Debug for Node<V, B>
where
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(std::any::type_name::<Self>())
            .field("value", &self.value)
            .field(
                "children",
                &self.children().map(|(symbol, _)| symbol).collect::<Vec<_>>(),
            )
            .finish()
    }
}
