//! Pixel projection: hex centres, corners and pixel picking.

use std::f64::consts::PI;

use crate::{FractionalHex, Hex};

/// A point in pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Forward (`f*`) and inverse (`b*`) projection matrices plus the angle of
/// the first corner, in multiples of 60 degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

const SQRT_3: f64 = 1.732_050_807_568_877_2;

impl Orientation {
    /// Pointy-top hexes (rows line up).
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Flat-top hexes (columns line up).
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };
}

impl Default for Orientation {
    fn default() -> Self {
        Self::POINTY
    }
}

/// Screen placement of a hex grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub orientation: Orientation,
    /// Hex radius along each pixel axis.
    pub size: Pixel,
    /// Pixel position of the centre of `Hex::ZERO`.
    pub origin: Pixel,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            orientation: Orientation::POINTY,
            size: Pixel::new(1.0, 1.0),
            origin: Pixel::default(),
        }
    }
}

impl Layout {
    pub const fn new(orientation: Orientation, size: Pixel, origin: Pixel) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Pixel position of the centre of `hex`.
    pub fn hex_to_pixel(&self, hex: Hex) -> Pixel {
        let m = &self.orientation;
        let (q, r) = (hex.q as f64, hex.r as f64);
        let x = (m.f0 * q + m.f1 * r) * self.size.x;
        let y = (m.f2 * q + m.f3 * r) * self.size.y;
        Pixel::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional hex position under pixel `p`.
    pub fn pixel_to_hex_fractional(&self, p: Pixel) -> FractionalHex {
        let m = &self.orientation;
        let x = (p.x - self.origin.x) / self.size.x;
        let y = (p.y - self.origin.y) / self.size.y;
        FractionalHex::new(m.b0 * x + m.b1 * y, m.b2 * x + m.b3 * y)
    }

    /// The hex containing pixel `p`.
    #[inline]
    pub fn pixel_to_hex(&self, p: Pixel) -> Hex {
        self.pixel_to_hex_fractional(p).round()
    }

    /// Offset of corner `corner` (0..6) from a hex centre.
    pub fn corner_offset(&self, corner: usize) -> Pixel {
        let angle = 2.0 * PI * (self.orientation.start_angle + corner as f64) / 6.0;
        Pixel::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six corners of `hex`, in pixel space.
    pub fn polygon_corners(&self, hex: Hex) -> [Pixel; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|i| {
            let o = self.corner_offset(i);
            Pixel::new(center.x + o.x, center.y + o.y)
        })
    }
}
