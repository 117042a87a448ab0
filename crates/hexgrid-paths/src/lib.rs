//! Pathfinding on hexagonal grids.
//!
//! - **A\*** point-to-point search ([`astar`], [`astar_with`], and the
//!   reusable [`AstarSearch`])
//! - **Accessibility** single-origin reachability under a movement budget,
//!   with cheap path queries afterwards ([`AccessibilityTrie`])
//!
//! Algorithms are generic over any [`AxisPoint`](hexgrid_core::AxisPoint)
//! type and take their neighbours, walkability, movement cost and heuristic
//! from a pather. Point identity is the `(q, r)` position only.
//!
//! No path is not an error: searches return an empty vector.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbours, walkability |
//! | [`WeightedPather`] : [`Pather`] | movement cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic, required by both algorithms |
//!
//! [`FnPather`] implements all three from four closures.

mod accessibility;
mod astar;
mod fn_pather;
mod frontier;
mod neighbors;
mod traits;

pub use accessibility::AccessibilityTrie;
pub use astar::{AstarSearch, astar, astar_with};
pub use fn_pather::FnPather;
pub use neighbors::Neighbors;
pub use traits::{AstarPather, Pather, WeightedPather};
