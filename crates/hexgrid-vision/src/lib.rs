//! **hexgrid-vision**: precomputed symmetric line of sight for hex grids.
//!
//! [`SymmetricVisionTrie`] stores every symmetric line from an origin to the
//! hexes within a fixed radius as a trie of unit steps. Once built it answers
//! line-of-sight and field-of-view queries from any origin, with occlusion
//! supplied per query as a `Fn(Hex) -> bool` callback.
//!
//! ```
//! use hexgrid_core::Hex;
//! use hexgrid_vision::SymmetricVisionTrie;
//!
//! let trie = SymmetricVisionTrie::new(3);
//! let wall = Hex::new(1, 0);
//! let blocks = |p: Hex| p == wall;
//!
//! assert!(trie.line_of_sight(&Hex::ZERO, &Hex::new(0, 2), blocks));
//! assert!(!trie.line_of_sight(&Hex::ZERO, &Hex::new(2, 0), blocks));
//!
//! let fov = trie.field_of_view(&Hex::ZERO, blocks);
//! assert!(!fov.contains(&wall));
//! ```

mod node;
mod trie;

pub use node::{NodeId, STEP_SLOTS, TrieNode, step_key};
pub use trie::SymmetricVisionTrie;
