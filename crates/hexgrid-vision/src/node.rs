use hexgrid_core::Hex;

/// Index of a node in a [`SymmetricVisionTrie`](crate::SymmetricVisionTrie).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node, at offset `(0, 0)`.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Number of child slots: one per unit step in `{-1, 0, 1}²`.
pub const STEP_SLOTS: usize = 9;

/// Direct-address slot for the unit step `(dq, dr)`, both in `-1..=1`.
#[inline]
pub const fn step_key(dq: i32, dr: i32) -> usize {
    ((dq + 1) + (dr + 1) * 3) as usize
}

/// One hex offset from the trie origin, reached along one line.
///
/// Children continue the line one step further; the parent link walks back
/// toward the origin.
#[derive(Clone, Debug)]
pub struct TrieNode {
    pub(crate) parent: Option<NodeId>,
    pub(crate) offset: Hex,
    pub(crate) children: [Option<NodeId>; STEP_SLOTS],
}

impl TrieNode {
    pub(crate) fn new(parent: Option<NodeId>, offset: Hex) -> Self {
        Self {
            parent,
            offset,
            children: [None; STEP_SLOTS],
        }
    }

    /// `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position relative to the trie origin.
    #[inline]
    pub fn offset(&self) -> Hex {
        self.offset
    }

    /// The child reached by unit step `(dq, dr)`.
    #[inline]
    pub fn child(&self, dq: i32, dr: i32) -> Option<NodeId> {
        if !(-1..=1).contains(&dq) || !(-1..=1).contains(&dr) {
            return None;
        }
        self.children[step_key(dq, dr)]
    }

    /// Existing children in slot order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
