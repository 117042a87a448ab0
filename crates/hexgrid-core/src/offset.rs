//! Offset and doubled coordinate systems, with bijections to [`Hex`].

use crate::{CoordError, Hex};

// ---------------------------------------------------------------------------
// Offset coordinates
// ---------------------------------------------------------------------------

/// Which rows (or columns) are shoved by half a hex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetLayout {
    /// Pointy-top, even rows shoved right.
    EvenR,
    /// Pointy-top, odd rows shoved right. This is the default.
    #[default]
    OddR,
    /// Flat-top, even columns shoved down.
    EvenQ,
    /// Flat-top, odd columns shoved down.
    OddQ,
}

/// A `(col, row)` position in one of the offset layouts.
///
/// The layout is not stored; the same value means different hexes under
/// different layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Offset position of `hex` under `layout`.
    pub fn from_hex(hex: Hex, layout: OffsetLayout) -> Self {
        let Hex { q, r } = hex;
        match layout {
            OffsetLayout::EvenR => Self::new(q + (r + (r & 1)) / 2, r),
            OffsetLayout::OddR => Self::new(q + (r - (r & 1)) / 2, r),
            OffsetLayout::EvenQ => Self::new(q, r + (q + (q & 1)) / 2),
            OffsetLayout::OddQ => Self::new(q, r + (q - (q & 1)) / 2),
        }
    }

    /// The hex at this offset position under `layout`.
    pub fn to_hex(self, layout: OffsetLayout) -> Hex {
        let Self { col, row } = self;
        match layout {
            OffsetLayout::EvenR => Hex::new(col - (row + (row & 1)) / 2, row),
            OffsetLayout::OddR => Hex::new(col - (row - (row & 1)) / 2, row),
            OffsetLayout::EvenQ => Hex::new(col, row - (col + (col & 1)) / 2),
            OffsetLayout::OddQ => Hex::new(col, row - (col - (col & 1)) / 2),
        }
    }
}

// ---------------------------------------------------------------------------
// Doubled coordinates
// ---------------------------------------------------------------------------

/// Which axis is doubled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoubledLayout {
    /// Pointy-top, columns step by 2.
    #[default]
    Width,
    /// Flat-top, rows step by 2.
    Height,
}

/// A `(col, row)` position where `col + row` is always even.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DoubledCoord {
    col: i32,
    row: i32,
}

impl DoubledCoord {
    /// Create a doubled coordinate, rejecting an odd `col + row`.
    pub fn new(col: i32, row: i32) -> Result<Self, CoordError> {
        if (col as i64 + row as i64) & 1 != 0 {
            return Err(CoordError::InvalidDoubled { col, row });
        }
        Ok(Self { col, row })
    }

    #[inline]
    pub fn col(self) -> i32 {
        self.col
    }

    #[inline]
    pub fn row(self) -> i32 {
        self.row
    }

    /// Doubled position of `hex` under `layout`.
    pub fn from_hex(hex: Hex, layout: DoubledLayout) -> Self {
        match layout {
            DoubledLayout::Width => Self {
                col: 2 * hex.q + hex.r,
                row: hex.r,
            },
            DoubledLayout::Height => Self {
                col: hex.q,
                row: 2 * hex.r + hex.q,
            },
        }
    }

    /// The hex at this doubled position under `layout`.
    pub fn to_hex(self, layout: DoubledLayout) -> Hex {
        match layout {
            DoubledLayout::Width => Hex::new((self.col - self.row) / 2, self.row),
            DoubledLayout::Height => Hex::new(self.col, (self.row - self.col) / 2),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DoubledCoord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            col: i32,
            row: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        DoubledCoord::new(raw.col, raw.row).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET_LAYOUTS: [OffsetLayout; 4] = [
        OffsetLayout::EvenR,
        OffsetLayout::OddR,
        OffsetLayout::EvenQ,
        OffsetLayout::OddQ,
    ];

    #[test]
    fn offset_round_trip() {
        for layout in OFFSET_LAYOUTS {
            for h in Hex::new(1, -2).circle(6) {
                let o = OffsetCoord::from_hex(h, layout);
                assert_eq!(o.to_hex(layout), h, "{layout:?} {h}");
            }
        }
    }

    #[test]
    fn offset_known_values() {
        let h = Hex::new(1, -3);
        assert_eq!(OffsetCoord::from_hex(h, OffsetLayout::EvenR), OffsetCoord::new(0, -3));
        assert_eq!(OffsetCoord::from_hex(h, OffsetLayout::OddR), OffsetCoord::new(-1, -3));
        assert_eq!(OffsetCoord::from_hex(h, OffsetLayout::EvenQ), OffsetCoord::new(1, -2));
        assert_eq!(OffsetCoord::from_hex(h, OffsetLayout::OddQ), OffsetCoord::new(1, -3));
    }

    #[test]
    fn doubled_round_trip() {
        for layout in [DoubledLayout::Width, DoubledLayout::Height] {
            for h in Hex::new(-3, 2).circle(5) {
                let d = DoubledCoord::from_hex(h, layout);
                assert_eq!((d.col() + d.row()) & 1, 0);
                assert_eq!(d.to_hex(layout), h);
            }
        }
    }

    #[test]
    fn doubled_known_values() {
        let h = Hex::new(1, -3);
        let w = DoubledCoord::from_hex(h, DoubledLayout::Width);
        assert_eq!((w.col(), w.row()), (-1, -3));
        let t = DoubledCoord::from_hex(h, DoubledLayout::Height);
        assert_eq!((t.col(), t.row()), (1, -5));
    }

    #[test]
    fn doubled_rejects_odd_sum() {
        assert_eq!(
            DoubledCoord::new(1, 0),
            Err(CoordError::InvalidDoubled { col: 1, row: 0 })
        );
        assert!(DoubledCoord::new(-1, 3).is_ok());
    }

    #[test]
    fn doubled_parity_at_extremes() {
        assert!(DoubledCoord::new(i32::MAX, 0).is_err());
        assert!(DoubledCoord::new(i32::MAX, 1).is_ok());
        assert!(DoubledCoord::new(i32::MIN, i32::MIN).is_ok());
        assert!(DoubledCoord::new(i32::MIN, i32::MAX).is_err());
    }
}
