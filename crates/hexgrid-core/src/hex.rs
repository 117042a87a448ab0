//! The axial hex coordinate: [`Hex`].
//!
//! Axial coordinates use two axes `q` and `r` at 60 degrees. The third cube
//! component is implicit: `s = -q - r`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::shapes::{CircleIter, RingIter};

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// An axial hex coordinate.
///
/// Equality, hashing and ordering only look at `(q, r)`, ordering is
/// lexicographic on `q` then `r`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

/// The six unit directions, counter-clockwise starting east (`+q`).
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

/// The six diagonal offsets (distance 2, between two directions).
pub const DIAGONALS: [Hex; 6] = [
    Hex::new(2, -1),
    Hex::new(1, -2),
    Hex::new(-1, -1),
    Hex::new(-2, 1),
    Hex::new(-1, 2),
    Hex::new(1, 1),
];

impl Hex {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Create a new hex.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube component.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin, in hex steps.
    #[inline]
    pub fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Distance to `other`, in hex steps.
    #[inline]
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// The unit vector for `direction` (taken modulo 6).
    #[inline]
    pub fn direction(direction: usize) -> Hex {
        DIRECTIONS[direction % 6]
    }

    /// The adjacent hex in `direction` (taken modulo 6).
    #[inline]
    pub fn neighbor(self, direction: usize) -> Hex {
        self + Self::direction(direction)
    }

    /// All six adjacent hexes, in [`DIRECTIONS`] order.
    #[inline]
    pub fn neighbors(self) -> [Hex; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// The six diagonal hexes, in [`DIAGONALS`] order.
    #[inline]
    pub fn diagonal_neighbors(self) -> [Hex; 6] {
        DIAGONALS.map(|d| self + d)
    }

    /// Rotate 60 degrees counter-clockwise around the origin.
    #[inline]
    pub const fn rotate_left(self) -> Hex {
        Hex::new(-self.s(), -self.q)
    }

    /// Rotate 60 degrees clockwise around the origin.
    #[inline]
    pub const fn rotate_right(self) -> Hex {
        Hex::new(-self.r, -self.s())
    }

    /// Every hex within `radius` steps of `self`, `self` included.
    pub fn circle(self, radius: u32) -> CircleIter {
        CircleIter::new(self, radius)
    }

    /// The hexes exactly `radius` steps away from `self`.
    ///
    /// A ring of radius 0 is `self` alone.
    pub fn ring(self, radius: u32) -> RingIter {
        RingIter::new(self, radius)
    }

    /// The symmetric hex line from `self` to `other`, both endpoints included.
    ///
    /// See [`bresenhams_line`](crate::bresenhams_line).
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        let mut line = Vec::with_capacity(self.distance(other) as usize + 1);
        crate::line::trace(self, other, |h| line.push(h));
        line
    }
}

// --- trait impls for Hex ---

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add for Hex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl AddAssign for Hex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Hex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl SubAssign for Hex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Hex {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl From<Hex> for (i32, i32) {
    fn from(h: Hex) -> Self {
        (h.q, h.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_component() {
        assert_eq!(Hex::new(1, -3).s(), 2);
        assert_eq!(Hex::ZERO.s(), 0);
    }

    #[test]
    fn arithmetic() {
        let a = Hex::new(1, -3);
        let b = Hex::new(-10, 30);
        assert_eq!(a + b, Hex::new(-9, 27));
        assert_eq!(a - b, Hex::new(11, -33));
        assert_eq!(-a, Hex::new(-1, 3));
        assert_eq!(a * 3, Hex::new(3, -9));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Hex::new(1, -3);
        let b = Hex::new(-2, 5);
        assert_eq!(a.distance(b), 8);
        assert_eq!(b.distance(a), 8);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn directions_are_unit_and_opposite() {
        for (i, d) in DIRECTIONS.iter().enumerate() {
            assert_eq!(d.length(), 1);
            assert_eq!(*d + DIRECTIONS[(i + 3) % 6], Hex::ZERO);
        }
    }

    #[test]
    fn neighbors_are_adjacent_and_distinct() {
        let c = Hex::new(4, -2);
        let ns = c.neighbors();
        for (i, n) in ns.iter().enumerate() {
            assert_eq!(c.distance(*n), 1);
            assert_eq!(*n, c.neighbor(i));
            for m in &ns[i + 1..] {
                assert_ne!(n, m);
            }
        }
    }

    #[test]
    fn diagonals_are_two_away() {
        for d in Hex::ZERO.diagonal_neighbors() {
            assert_eq!(d.length(), 2);
        }
    }

    #[test]
    fn rotation_round_trip() {
        let h = Hex::new(3, -1);
        let mut r = h;
        for _ in 0..6 {
            r = r.rotate_left();
        }
        assert_eq!(r, h);
        assert_eq!(h.rotate_left().rotate_right(), h);
        assert_eq!(Hex::new(1, 0).rotate_left(), Hex::new(1, -1));
    }

    #[test]
    fn display() {
        assert_eq!(Hex::new(2, -7).to_string(), "(2, -7)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let h = Hex::new(3, -7);
        let json = serde_json::to_string(&h).unwrap();
        let back: Hex = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
