//! Symmetric precomputed vision trie.
//!
//! Every symmetric line from the origin to a hex within `radius` is inserted
//! into a trie of unit steps. Lines sharing a prefix share nodes, so a field
//! of view is a single pruned walk of the trie and a line-of-sight query is
//! a walk up the parent links from a node registered under the target
//! offset.

use std::collections::{HashMap, HashSet};

use hexgrid_core::{AxisPoint, Hex, bresenhams_line, circle_len};

use crate::node::{NodeId, TrieNode, step_key};

/// Precomputed line-of-sight and field-of-view structure for a fixed radius.
///
/// The trie only stores offsets, so one instance serves queries from any
/// origin. It is immutable after construction and can be shared across
/// threads.
#[derive(Clone, Debug)]
pub struct SymmetricVisionTrie {
    radius: u32,
    nodes: Vec<TrieNode>,
    /// Dense offset key to every node whose offset equals that key.
    fast_los: HashMap<usize, Vec<NodeId>>,
}

impl Default for SymmetricVisionTrie {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl SymmetricVisionTrie {
    pub const DEFAULT_RADIUS: u32 = 8;

    /// Build the trie for every target within `radius` of the origin.
    pub fn new(radius: u32) -> Self {
        let mut trie = Self {
            radius,
            nodes: vec![TrieNode::new(None, Hex::ZERO)],
            fast_los: HashMap::with_capacity(circle_len(radius)),
        };
        trie.register(Hex::ZERO, NodeId::ROOT);

        for target in Hex::ZERO.circle(radius) {
            let mut cur = NodeId::ROOT;
            let mut prev = Hex::ZERO;
            bresenhams_line(0, 0, target.q, target.r, |p| {
                if p == prev {
                    return;
                }
                cur = trie.step(cur, prev, p);
                prev = p;
            });
        }

        log::debug!(
            "vision trie radius {radius}: {} nodes, {} keys",
            trie.nodes.len(),
            trie.fast_los.len()
        );
        trie
    }

    /// Follow or create the child of `parent` for the unit step `from -> to`.
    fn step(&mut self, parent: NodeId, from: Hex, to: Hex) -> NodeId {
        let d = to - from;
        debug_assert_eq!(d.length(), 1, "line step {from} -> {to} is not adjacent");
        let slot = step_key(d.q, d.r);
        if let Some(child) = self.nodes[parent.0].children[slot] {
            return child;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(parent), to));
        self.nodes[parent.0].children[slot] = Some(id);
        self.register(to, id);
        id
    }

    fn register(&mut self, offset: Hex, id: NodeId) {
        if let Some(key) = self.los_key(offset) {
            self.fast_los.entry(key).or_default().push(id);
        }
    }

    /// Dense key of `offset` within the `(2 * radius + 1)²` bounding square,
    /// or `None` outside of it.
    pub fn los_key(&self, offset: Hex) -> Option<usize> {
        let r = self.radius as i64;
        let (dq, dr) = (offset.q as i64, offset.r as i64);
        if dq.abs() > r || dr.abs() > r {
            return None;
        }
        Some((r + dq + (2 * r + 1) * (dr + r)) as usize)
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of trie nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct offsets with at least one node.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.fast_los.len()
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to this trie. See [`get`](Self::get).
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// The node behind `id`, or `None` if `id` is out of this trie's range.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0)
    }

    /// Nodes registered under `offset`, in insertion order.
    pub fn candidates(&self, offset: Hex) -> &[NodeId] {
        self.los_key(offset)
            .and_then(|key| self.fast_los.get(&key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // ---------------------------------------------------------------------------
    // Line of sight
    // ---------------------------------------------------------------------------

    /// Whether `to` is visible from `from` within the trie radius.
    pub fn line_of_sight<P, Q, B>(&self, from: &P, to: &Q, blocks: B) -> bool
    where
        P: AxisPoint + ?Sized,
        Q: AxisPoint + ?Sized,
        B: Fn(Hex) -> bool,
    {
        self.line_of_sight_within(from, to, self.radius, blocks, |_| {})
    }

    /// Like [`line_of_sight`](Self::line_of_sight), passing the accepted line
    /// to `visit` from `from` to `to`.
    pub fn line_of_sight_with<P, Q, B, V>(&self, from: &P, to: &Q, blocks: B, visit: V) -> bool
    where
        P: AxisPoint + ?Sized,
        Q: AxisPoint + ?Sized,
        B: Fn(Hex) -> bool,
        V: FnMut(Hex),
    {
        self.line_of_sight_within(from, to, self.radius, blocks, visit)
    }

    /// Line of sight limited to `radius`.
    ///
    /// Each candidate line registered under the offset `to - from` is tried in
    /// insertion order; every hex on it, both endpoints included, is tested
    /// with `blocks`. The first clear line is passed to `visit` in order from
    /// `from` to `to` and the query returns `true`. Nothing is visited when
    /// no candidate is clear or the target is out of range.
    pub fn line_of_sight_within<P, Q, B, V>(
        &self,
        from: &P,
        to: &Q,
        radius: u32,
        blocks: B,
        mut visit: V,
    ) -> bool
    where
        P: AxisPoint + ?Sized,
        Q: AxisPoint + ?Sized,
        B: Fn(Hex) -> bool,
        V: FnMut(Hex),
    {
        let (from, to) = (from.hex(), to.hex());
        if from.distance(to) as i64 > radius as i64 {
            return false;
        }

        let mut chain = Vec::new();
        'candidates: for &id in self.candidates(to - from) {
            chain.clear();
            let mut cur = Some(id);
            while let Some(n) = cur {
                let node = &self.nodes[n.0];
                let p = from + node.offset;
                if blocks(p) {
                    continue 'candidates;
                }
                chain.push(p);
                cur = node.parent;
            }
            chain.iter().rev().for_each(|&p| visit(p));
            return true;
        }
        false
    }

    // ---------------------------------------------------------------------------
    // Field of view
    // ---------------------------------------------------------------------------

    /// Every hex visible from `from`.
    pub fn field_of_view<P, B>(&self, from: &P, blocks: B) -> HashSet<Hex>
    where
        P: AxisPoint + ?Sized,
        B: Fn(Hex) -> bool,
    {
        self.field_of_view_with(from, blocks, |_| {})
    }

    /// Every hex visible from `from`, each also passed once to `visit`.
    ///
    /// The trie is walked depth first from the root. A blocking hex is not
    /// visible and hides its whole subtree, although the same offset may
    /// still be reached through another branch.
    pub fn field_of_view_with<P, B, V>(&self, from: &P, blocks: B, mut visit: V) -> HashSet<Hex>
    where
        P: AxisPoint + ?Sized,
        B: Fn(Hex) -> bool,
        V: FnMut(Hex),
    {
        let from = from.hex();
        let mut visible = HashSet::with_capacity(circle_len(self.radius));
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            let p = from + node.offset;
            if blocks(p) {
                continue;
            }
            if visible.insert(p) {
                visit(p);
            }
            stack.extend(node.children.iter().rev().flatten().copied());
        }
        visible
    }
}
