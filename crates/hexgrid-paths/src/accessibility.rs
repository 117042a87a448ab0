use std::collections::{HashMap, HashSet};

use hexgrid_core::{AxisPoint, Hex};

use crate::fn_pather::FnPather;
use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// A point reached from the origin, with its predecessor on the best path.
struct Reached<P> {
    point: P,
    parent: P,
    cost: f64,
}

/// Every point reachable from one origin within a movement budget, with
/// path reconstruction.
///
/// The reachable set is computed once, at construction, by exhaustive
/// relaxation from the origin: no target, and candidates whose cumulative
/// cost exceeds the budget are dropped without stopping the search. The
/// pather's estimate only orders the open set.
///
/// Path queries then walk the stored predecessors back to the origin. Call
/// [`build`](Self::build) again after the state behind the pather changed.
pub struct AccessibilityTrie<P, T> {
    origin: P,
    origin_cost: f64,
    max_move_cost: f64,
    pather: T,
    access: HashMap<Hex, Reached<P>>,
}

impl<P, T> AccessibilityTrie<P, T>
where
    P: AxisPoint + Clone,
    T: AstarPather<P>,
{
    /// Build the reachable set of `origin` for an inclusive `max_move_cost`.
    pub fn new(origin: P, max_move_cost: f64, pather: T) -> Self {
        let mut trie = Self {
            origin,
            origin_cost: 0.0,
            max_move_cost,
            pather,
            access: HashMap::new(),
        };
        trie.build();
        trie
    }

    /// Clear and recompute the reachable set.
    pub fn build(&mut self) {
        self.access.clear();
        let origin = self.origin.hex();
        self.origin_cost = self.pather.cost(&self.origin, &self.origin);
        if !self.pather.is_walkable(&self.origin) {
            log::debug!("accessibility from {origin}: origin is not walkable");
            return;
        }

        let mut open = Frontier::default();
        open.push(self.origin.clone(), self.origin_cost);
        let mut nbuf = Vec::with_capacity(6);

        while let Some(current) = open.pop() {
            let cp = current.point;
            let ch = cp.hex();
            let current_cost = if ch == origin {
                self.origin_cost
            } else {
                match self.access.get(&ch) {
                    Some(reached) => reached.cost,
                    None => continue,
                }
            };

            nbuf.clear();
            self.pather.neighbors(&cp, &mut nbuf);

            for np in nbuf.drain(..) {
                let nh = np.hex();
                if nh == origin || !self.pather.is_walkable(&np) {
                    continue;
                }
                let new_cost = current_cost + self.pather.cost(&cp, &np);
                if new_cost > self.max_move_cost {
                    continue;
                }
                if self.access.get(&nh).is_some_and(|r| new_cost >= r.cost) {
                    continue;
                }
                let priority = new_cost + self.pather.estimate(&cp, &np) as f64;
                self.access.insert(
                    nh,
                    Reached {
                        point: np.clone(),
                        parent: cp.clone(),
                        cost: new_cost,
                    },
                );
                open.push(np, priority);
            }
        }

        log::debug!(
            "accessibility from {origin}: {} points within {}",
            self.access.len(),
            self.max_move_cost
        );
    }

    /// The path from the origin to `point`, both included.
    ///
    /// The origin alone for the origin itself. Empty when `point` is not
    /// walkable or not reachable within the budget.
    pub fn get(&self, point: &P) -> Vec<P> {
        if !self.pather.is_walkable(point) {
            return Vec::new();
        }
        let origin = self.origin.hex();
        let mut cur = point.hex();
        if cur == origin {
            return vec![self.origin.clone()];
        }

        let mut path = vec![point.clone()];
        loop {
            let Some(reached) = self.access.get(&cur) else {
                return Vec::new();
            };
            cur = reached.parent.hex();
            if cur == origin {
                break;
            }
            if path.len() > self.access.len() {
                return Vec::new();
            }
            path.push(reached.parent.clone());
        }
        path.push(self.origin.clone());
        path.reverse();
        path
    }

    /// The reachable points, origin excluded, in no particular order.
    pub fn accessible(&self) -> impl Iterator<Item = &P> + '_ {
        self.access.values().map(|r| &r.point)
    }

    /// Positions of the reachable points, origin excluded.
    pub fn accessible_set(&self) -> HashSet<Hex> {
        self.access.keys().copied().collect()
    }

    /// Whether `point` is reachable within the budget (origin excluded).
    pub fn contains(&self, point: &P) -> bool {
        self.access.contains_key(&point.hex())
    }

    /// Best cumulative cost of reaching `point`, if reachable.
    pub fn cost(&self, point: &P) -> Option<f64> {
        let h = point.hex();
        if h == self.origin.hex() {
            return Some(self.origin_cost);
        }
        self.access.get(&h).map(|r| r.cost)
    }

    /// Number of reachable points, origin excluded.
    pub fn len(&self) -> usize {
        self.access.len()
    }

    pub fn is_empty(&self) -> bool {
        self.access.is_empty()
    }

    pub fn origin(&self) -> &P {
        &self.origin
    }

    pub fn max_move_cost(&self) -> f64 {
        self.max_move_cost
    }

    pub fn pather(&self) -> &T {
        &self.pather
    }

    /// Mutable access to the pather, e.g. to update obstacles before a
    /// [`build`](Self::build).
    pub fn pather_mut(&mut self) -> &mut T {
        &mut self.pather
    }
}

impl<P, N, W, H, C> AccessibilityTrie<P, FnPather<N, W, H, C>>
where
    P: AxisPoint + Clone,
    N: Fn(&P) -> Vec<P>,
    W: Fn(&P) -> bool,
    H: Fn(&P, &P) -> i32,
    C: Fn(&P, &P) -> f64,
{
    /// Build from plain closures, see [`FnPather`].
    pub fn from_fns(
        origin: P,
        max_move_cost: f64,
        neighbors: N,
        is_walkable: W,
        heuristic: H,
        movement_cost: C,
    ) -> Self {
        Self::new(
            origin,
            max_move_cost,
            FnPather::new(neighbors, is_walkable, heuristic, movement_cost),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::traits::{Pather, WeightedPather};

    struct WallMap {
        bound: i32,
        walls: HashSet<Hex>,
        entry_costs: HashMap<Hex, f64>,
    }

    impl WallMap {
        fn open(bound: i32) -> Self {
            Self {
                bound,
                walls: HashSet::new(),
                entry_costs: HashMap::new(),
            }
        }
    }

    impl Pather<Hex> for WallMap {
        fn neighbors(&self, p: &Hex, buf: &mut Vec<Hex>) {
            buf.extend(p.neighbors());
        }

        fn is_walkable(&self, p: &Hex) -> bool {
            p.length() <= self.bound && !self.walls.contains(p)
        }
    }

    impl WeightedPather<Hex> for WallMap {
        fn cost(&self, from: &Hex, to: &Hex) -> f64 {
            if from == to {
                return 0.0;
            }
            self.entry_costs.get(to).copied().unwrap_or(1.0)
        }
    }

    impl AstarPather<Hex> for WallMap {
        fn estimate(&self, from: &Hex, to: &Hex) -> i32 {
            from.distance(*to)
        }
    }

    /// Independent unit-cost flood fill.
    fn flood_fill(map: &WallMap, origin: Hex, budget: i32) -> HashMap<Hex, i32> {
        let mut dist = HashMap::from([(origin, 0)]);
        let mut queue = VecDeque::from([origin]);
        while let Some(p) = queue.pop_front() {
            let d = dist[&p];
            if d == budget {
                continue;
            }
            for n in p.neighbors() {
                if map.is_walkable(&n) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    fn h(q: i32, r: i32) -> Hex {
        Hex::new(q, r)
    }

    #[test]
    fn open_map_reaches_exactly_the_circle() {
        let trie = AccessibilityTrie::new(Hex::ZERO, 3.0, WallMap::open(10));
        let mut expected: HashSet<Hex> = Hex::ZERO.circle(3).collect();
        expected.remove(&Hex::ZERO);
        assert_eq!(trie.len(), 36);
        assert_eq!(trie.accessible_set(), expected);
        assert!(!trie.contains(&Hex::ZERO));
    }

    #[test]
    fn paths_start_at_origin_and_are_connected() {
        let origin = h(2, -1);
        let trie = AccessibilityTrie::new(origin, 4.0, WallMap::open(10));
        for p in trie.accessible() {
            let path = trie.get(p);
            assert_eq!(path[0], origin);
            assert_eq!(path.last(), Some(p));
            assert_eq!(path.len() as i32, origin.distance(*p) + 1);
            for w in path.windows(2) {
                assert_eq!(w[0].distance(w[1]), 1);
            }
        }
    }

    #[test]
    fn origin_and_out_of_budget_queries() {
        let mut map = WallMap::open(10);
        map.walls.insert(h(1, 0));
        let trie = AccessibilityTrie::new(Hex::ZERO, 2.0, map);
        assert_eq!(trie.get(&Hex::ZERO), vec![Hex::ZERO]);
        assert_eq!(trie.cost(&Hex::ZERO), Some(0.0));
        assert!(trie.get(&h(1, 0)).is_empty(), "wall");
        assert!(trie.get(&h(3, 0)).is_empty(), "beyond budget");
        assert_eq!(trie.cost(&h(3, 0)), None);
        assert!(trie.get(&h(2, 0)).is_empty(), "detour costs 3");
        assert_eq!(trie.get(&h(2, -1)), vec![Hex::ZERO, h(1, -1), h(2, -1)]);
    }

    #[test]
    fn matches_flood_fill_with_random_walls() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut map = WallMap::open(8);
            for hex in Hex::ZERO.circle(8) {
                if hex != Hex::ZERO && rng.random_range(0..4) == 0 {
                    map.walls.insert(hex);
                }
            }
            let expected = flood_fill(&map, Hex::ZERO, 5);
            let trie = AccessibilityTrie::new(Hex::ZERO, 5.0, map);

            let mut expected_set: HashSet<Hex> = expected.keys().copied().collect();
            expected_set.remove(&Hex::ZERO);
            assert_eq!(trie.accessible_set(), expected_set);
            for (hex, d) in &expected {
                assert_eq!(trie.cost(hex), Some(*d as f64));
                let path = trie.get(hex);
                assert_eq!(path.len() as i32, d + 1);
                assert!(path.iter().all(|p| trie.pather().is_walkable(p)));
            }
        }
    }

    #[test]
    fn costly_tiles_limit_reach() {
        let mut map = WallMap::open(10);
        map.entry_costs.insert(h(1, 0), 3.0);
        let trie = AccessibilityTrie::new(Hex::ZERO, 2.0, map);
        assert!(!trie.contains(&h(1, 0)));
        assert!(trie.contains(&h(1, -1)));
        assert!(trie.contains(&h(2, -1)));
        assert!(!trie.contains(&h(2, 0)));
    }

    #[test]
    fn rebuild_picks_up_new_obstacles() {
        let mut trie = AccessibilityTrie::new(Hex::ZERO, 1.0, WallMap::open(10));
        assert_eq!(trie.len(), 6);
        trie.pather_mut().walls.insert(h(0, 1));
        assert_eq!(trie.len(), 6, "no change before rebuild");
        trie.build();
        assert_eq!(trie.len(), 5);
        assert!(!trie.contains(&h(0, 1)));
        assert!(trie.get(&h(0, 1)).is_empty());
    }

    #[test]
    fn unwalkable_origin_reaches_nothing() {
        let mut map = WallMap::open(10);
        map.walls.insert(Hex::ZERO);
        let trie = AccessibilityTrie::new(Hex::ZERO, 3.0, map);
        assert!(trie.is_empty());
        assert!(trie.get(&Hex::ZERO).is_empty());
    }

    #[test]
    fn closure_form() {
        let trie = AccessibilityTrie::from_fns(
            h(1, 1),
            2.0,
            |p: &Hex| p.neighbors().to_vec(),
            |p: &Hex| p.length() <= 10,
            |a: &Hex, b: &Hex| a.distance(*b),
            |a: &Hex, b: &Hex| if a == b { 0.0 } else { 1.0 },
        );
        assert_eq!(trie.len(), 18);
        assert_eq!(*trie.origin(), h(1, 1));
        assert_eq!(trie.max_move_cost(), 2.0);
    }
}
