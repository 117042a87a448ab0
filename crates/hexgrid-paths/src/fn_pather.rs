use hexgrid_core::AxisPoint;

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts four plain closures to the pather traits.
///
/// ```
/// use hexgrid_core::Hex;
/// use hexgrid_paths::{FnPather, astar_with};
///
/// let pather = FnPather::new(
///     |h: &Hex| h.neighbors().to_vec(),
///     |h: &Hex| h.length() <= 4,
///     |a: &Hex, b: &Hex| a.distance(*b),
///     |a: &Hex, b: &Hex| if a == b { 0.0 } else { 1.0 },
/// );
/// let path = astar_with(&pather, &Hex::new(0, 0), &Hex::new(0, 2));
/// assert_eq!(path.len(), 3);
/// ```
pub struct FnPather<N, W, H, C> {
    neighbors: N,
    is_walkable: W,
    heuristic: H,
    movement_cost: C,
}

impl<N, W, H, C> FnPather<N, W, H, C> {
    pub fn new(neighbors: N, is_walkable: W, heuristic: H, movement_cost: C) -> Self {
        Self {
            neighbors,
            is_walkable,
            heuristic,
            movement_cost,
        }
    }
}

impl<P, N, W, H, C> Pather<P> for FnPather<N, W, H, C>
where
    P: AxisPoint,
    N: Fn(&P) -> Vec<P>,
    W: Fn(&P) -> bool,
{
    fn neighbors(&self, p: &P, buf: &mut Vec<P>) {
        buf.extend((self.neighbors)(p));
    }

    fn is_walkable(&self, p: &P) -> bool {
        (self.is_walkable)(p)
    }
}

impl<P, N, W, H, C> WeightedPather<P> for FnPather<N, W, H, C>
where
    P: AxisPoint,
    N: Fn(&P) -> Vec<P>,
    W: Fn(&P) -> bool,
    C: Fn(&P, &P) -> f64,
{
    fn cost(&self, from: &P, to: &P) -> f64 {
        (self.movement_cost)(from, to)
    }
}

impl<P, N, W, H, C> AstarPather<P> for FnPather<N, W, H, C>
where
    P: AxisPoint,
    N: Fn(&P) -> Vec<P>,
    W: Fn(&P) -> bool,
    H: Fn(&P, &P) -> i32,
    C: Fn(&P, &P) -> f64,
{
    fn estimate(&self, from: &P, to: &P) -> i32 {
        (self.heuristic)(from, to)
    }
}
