use std::collections::HashMap;

use hexgrid_core::{AxisPoint, Hex};

use crate::fn_pather::FnPather;
use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// Reusable A* state.
///
/// Owns the open set, cost map, predecessor map and neighbour buffer so
/// repeated queries reuse their allocations.
pub struct AstarSearch<P> {
    open: Frontier<P>,
    costs: HashMap<Hex, f64>,
    came_from: HashMap<Hex, P>,
    nbuf: Vec<P>,
}

impl<P> Default for AstarSearch<P> {
    fn default() -> Self {
        Self {
            open: Frontier::default(),
            costs: HashMap::new(),
            came_from: HashMap::new(),
            nbuf: Vec::with_capacity(6),
        }
    }
}

impl<P: AxisPoint + Clone> AstarSearch<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the lowest-cost path from `from` to `to`.
    ///
    /// Returns the full path, both endpoints included, or an empty vector
    /// when either endpoint is not walkable or `to` cannot be reached.
    ///
    /// The priority of a relaxed neighbour is its accumulated cost plus
    /// `estimate(current, neighbor)`. The search ends when `to` is popped.
    pub fn path<T: AstarPather<P>>(&mut self, pather: &T, from: &P, to: &P) -> Vec<P> {
        if !pather.is_walkable(from) || !pather.is_walkable(to) {
            return Vec::new();
        }
        if from.same_position(to) {
            return vec![from.clone()];
        }

        self.open.clear();
        self.costs.clear();
        self.came_from.clear();

        let start = from.hex();
        let goal = to.hex();
        let seed = pather.cost(from, from);
        self.costs.insert(start, seed);
        self.open.push(from.clone(), seed);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let cp = current.point;
            let ch = cp.hex();
            if ch == goal {
                break 'search true;
            }
            let Some(&current_cost) = self.costs.get(&ch) else {
                continue;
            };

            nbuf.clear();
            pather.neighbors(&cp, &mut nbuf);

            for np in nbuf.drain(..) {
                if !pather.is_walkable(&np) {
                    continue;
                }
                let nh = np.hex();
                let new_cost = current_cost + pather.cost(&cp, &np);
                if self.costs.get(&nh).is_some_and(|&old| new_cost >= old) {
                    continue;
                }
                self.costs.insert(nh, new_cost);
                let priority = new_cost + pather.estimate(&cp, &np) as f64;
                self.came_from.insert(nh, cp.clone());
                self.open.push(np, priority);
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::trace!("astar {start} -> {goal}: unreachable");
            return Vec::new();
        }

        let mut path = vec![to.clone()];
        let mut cur = goal;
        while cur != start {
            let Some(prev) = self.came_from.get(&cur) else {
                return Vec::new();
            };
            if path.len() > self.came_from.len() {
                // Predecessor cycle, only possible with negative costs.
                return Vec::new();
            }
            cur = prev.hex();
            path.push(prev.clone());
        }
        path.reverse();
        log::trace!("astar {start} -> {goal}: {} steps", path.len() - 1);
        path
    }
}

/// One-shot A* over caller-supplied closures.
///
/// See [`AstarSearch::path`] for the semantics.
pub fn astar<P, N, W, H, C>(
    from: &P,
    to: &P,
    neighbors: N,
    is_walkable: W,
    heuristic: H,
    movement_cost: C,
) -> Vec<P>
where
    P: AxisPoint + Clone,
    N: Fn(&P) -> Vec<P>,
    W: Fn(&P) -> bool,
    H: Fn(&P, &P) -> i32,
    C: Fn(&P, &P) -> f64,
{
    let pather = FnPather::new(neighbors, is_walkable, heuristic, movement_cost);
    astar_with(&pather, from, to)
}

/// One-shot A* over a pather.
pub fn astar_with<P, T>(pather: &T, from: &P, to: &P) -> Vec<P>
where
    P: AxisPoint + Clone,
    T: AstarPather<P>,
{
    AstarSearch::new().path(pather, from, to)
}
