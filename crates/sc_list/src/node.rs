// -----------------------------------------------------------------------------
// NodeKey

slotmap::new_key_type! {
    /// Generational handle of a node inside a list's arena.
    ///
    /// Removing a node bumps the slot version, so a key kept past the
    /// removal no longer resolves.
    pub(crate) struct NodeKey;
}

// -----------------------------------------------------------------------------
// Node

/// A list node. Owns its value; `prev` and `next` are navigational only.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeKey>,
    pub next: Option<NodeKey>,
}
