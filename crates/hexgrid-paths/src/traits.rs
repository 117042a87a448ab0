use hexgrid_core::AxisPoint;

/// Minimal search interface: neighbour enumeration and walkability.
pub trait Pather<P: AxisPoint> {
    /// Append candidate neighbours of `p` into `buf`. The caller clears `buf`
    /// before calling. Candidates are filtered through
    /// [`is_walkable`](Self::is_walkable) by the search.
    fn neighbors(&self, p: &P, buf: &mut Vec<P>);

    /// Whether `p` may be entered.
    fn is_walkable(&self, p: &P) -> bool;
}

/// Pather with a movement cost.
pub trait WeightedPather<P: AxisPoint>: Pather<P> {
    /// Cost of stepping from `from` to `to`. `cost(p, p)` seeds the start of
    /// a search and is normally 0.
    fn cost(&self, from: &P, to: &P) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather<P: AxisPoint>: WeightedPather<P> {
    /// Estimated cost between `from` and `to`. Should be 0 when they are the
    /// same position and never negative.
    fn estimate(&self, from: &P, to: &P) -> i32;
}
