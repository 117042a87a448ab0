use crate::Hex;

/// Anything that sits on the hex grid at an integer axial position.
///
/// Search and vision algorithms are generic over this trait so callers can
/// use their own tile types. Only the `(q, r)` projection takes part in
/// identity: two values with the same `q` and `r` are the same position to
/// every algorithm, whatever else they carry.
pub trait AxisPoint {
    /// Axial `q` component.
    fn q(&self) -> i32;

    /// Axial `r` component.
    fn r(&self) -> i32;

    /// Implicit cube `s` component.
    #[inline]
    fn s(&self) -> i32 {
        -self.q() - self.r()
    }

    /// The bare position of this point.
    #[inline]
    fn hex(&self) -> Hex {
        Hex::new(self.q(), self.r())
    }

    /// Whether `self` and `other` occupy the same position.
    #[inline]
    fn same_position<O: AxisPoint + ?Sized>(&self, other: &O) -> bool {
        self.q() == other.q() && self.r() == other.r()
    }
}

impl AxisPoint for Hex {
    #[inline]
    fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    fn r(&self) -> i32 {
        self.r
    }

    #[inline]
    fn hex(&self) -> Hex {
        *self
    }
}

impl AxisPoint for (i32, i32) {
    #[inline]
    fn q(&self) -> i32 {
        self.0
    }

    #[inline]
    fn r(&self) -> i32 {
        self.1
    }
}

impl<T: AxisPoint + ?Sized> AxisPoint for &T {
    #[inline]
    fn q(&self) -> i32 {
        (**self).q()
    }

    #[inline]
    fn r(&self) -> i32 {
        (**self).r()
    }
}
