//! Cube coordinates: the validated [`Cube`] and the real-valued
//! [`FractionalHex`].

use std::fmt;

use crate::{AxisPoint, CoordError, Hex};

// ---------------------------------------------------------------------------
// Cube
// ---------------------------------------------------------------------------

/// A cube coordinate whose components always sum to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

impl Cube {
    /// Create a cube coordinate, rejecting components that do not sum to 0.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, CoordError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(CoordError::InvalidCube { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    #[inline]
    pub fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(self) -> i32 {
        self.s
    }

    /// Distance to `other`, in hex steps.
    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s - other.s).abs()) / 2
    }
}

impl From<Hex> for Cube {
    #[inline]
    fn from(h: Hex) -> Self {
        Self {
            q: h.q,
            r: h.r,
            s: h.s(),
        }
    }
}

impl From<Cube> for Hex {
    #[inline]
    fn from(c: Cube) -> Self {
        Hex::new(c.q, c.r)
    }
}

impl TryFrom<(i32, i32, i32)> for Cube {
    type Error = CoordError;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(q, r, s)
    }
}

impl AxisPoint for Cube {
    #[inline]
    fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    fn r(&self) -> i32 {
        self.r
    }

    #[inline]
    fn s(&self) -> i32 {
        self.s
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

// Deserialization goes through `new` so an invalid triple is rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cube {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            q: i32,
            r: i32,
            s: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Cube::new(raw.q, raw.r, raw.s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// FractionalHex
// ---------------------------------------------------------------------------

/// A real-valued cube position, e.g. the result of a pixel lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    #[inline]
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Linear interpolation between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        FractionalHex {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// The hex containing this position.
    ///
    /// Each component is rounded, then the one with the largest rounding
    /// error is recomputed from the other two.
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();
        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();
        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        Hex::new(q as i32, r as i32)
    }
}

impl From<Hex> for FractionalHex {
    fn from(h: Hex) -> Self {
        Self::new(h.q as f64, h.r as f64)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cube_round_trip() {
        let c = Cube::new(2, -5, 3).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Cube = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn invalid_cube_rejected() {
        let res: Result<Cube, _> = serde_json::from_str(r#"{"q":1,"r":1,"s":1}"#);
        assert!(res.is_err());
    }
}
