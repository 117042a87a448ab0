//! **hexgrid-core**: coordinate types and primitives for hexagonal grids.
//!
//! This crate provides the value types and pure functions shared by the
//! *hexgrid* crates:
//!
//! - [`Hex`] axial coordinates, [`Cube`] and [`FractionalHex`] cube
//!   coordinates, [`OffsetCoord`] and [`DoubledCoord`] with their bijections
//! - distance, neighbours, [`circle`] and [`ring`] enumeration
//! - the symmetric [`bresenhams_line`]
//! - pixel projection through [`Layout`]
//! - the [`AxisPoint`] capability that search and vision algorithms are
//!   generic over
//!
//! Invalid raw components (a cube triple not summing to zero, a doubled pair
//! with odd sum) are rejected at construction with a [`CoordError`].

mod cube;
mod error;
mod hex;
mod layout;
mod line;
mod offset;
mod point;
mod shapes;

pub use cube::{Cube, FractionalHex};
pub use error::CoordError;
pub use hex::{DIAGONALS, DIRECTIONS, Hex};
pub use layout::{Layout, Orientation, Pixel};
pub use line::bresenhams_line;
pub use offset::{DoubledCoord, DoubledLayout, OffsetCoord, OffsetLayout};
pub use point::AxisPoint;
pub use shapes::{CircleIter, RingIter, circle, circle_len, distance, ring};
