use hexgrid_core::Hex;

/// Cached neighbour computation helper.
///
/// Lists the adjacent or diagonal hexes of a position, filtered by a
/// predicate, into a reused buffer. Handy inside [`Pather`](crate::Pather)
/// implementations.
pub struct Neighbors {
    buf: Vec<Hex>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(6),
        }
    }

    /// The six adjacent hexes of `p` for which `keep` returns `true`.
    pub fn adjacent(&mut self, p: Hex, keep: impl Fn(Hex) -> bool) -> &[Hex] {
        self.buf.clear();
        self.buf.extend(p.neighbors().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// The six diagonal hexes of `p` for which `keep` returns `true`.
    pub fn diagonal(&mut self, p: Hex, keep: impl Fn(Hex) -> bool) -> &[Hex] {
        self.buf.clear();
        self.buf
            .extend(p.diagonal_neighbors().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}
