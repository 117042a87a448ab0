//! Distance, circle and ring enumeration.
//!
//! The free functions take raw integer components and a callback; the
//! iterators back [`Hex::circle`] and [`Hex::ring`].

use crate::Hex;
use crate::hex::DIRECTIONS;

/// Hex distance between `(q1, r1)` and `(q2, r2)`.
#[inline]
pub fn distance(q1: i32, r1: i32, q2: i32, r2: i32) -> i32 {
    Hex::new(q1, r1).distance(Hex::new(q2, r2))
}

/// Number of hexes within `radius` steps of a centre, centre included.
#[inline]
pub const fn circle_len(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

/// Call `f` with every hex within `radius` steps of `(origin_q, origin_r)`.
///
/// Order: increasing `q` offset, then increasing `r` offset.
pub fn circle(origin_q: i32, origin_r: i32, radius: u32, mut f: impl FnMut(Hex)) {
    for h in CircleIter::new(Hex::new(origin_q, origin_r), radius) {
        f(h);
    }
}

/// Call `f` with every hex exactly `radius` steps from `(origin_q, origin_r)`.
pub fn ring(origin_q: i32, origin_r: i32, radius: u32, mut f: impl FnMut(Hex)) {
    for h in RingIter::new(Hex::new(origin_q, origin_r), radius) {
        f(h);
    }
}

// ---------------------------------------------------------------------------
// CircleIter
// ---------------------------------------------------------------------------

/// Iterator over a filled hexagon, see [`Hex::circle`].
#[derive(Clone, Debug)]
pub struct CircleIter {
    center: Hex,
    radius: i32,
    dq: i32,
    dr: i32,
    remaining: usize,
}

impl CircleIter {
    pub(crate) fn new(center: Hex, radius: u32) -> Self {
        let radius = radius as i32;
        Self {
            center,
            radius,
            dq: -radius,
            dr: 0,
            remaining: circle_len(radius as u32),
        }
        .start_column()
    }

    fn start_column(mut self) -> Self {
        self.dr = (-self.radius).max(-self.dq - self.radius);
        self
    }
}

impl Iterator for CircleIter {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.center + Hex::new(self.dq, self.dr);
        self.remaining -= 1;
        if self.dr < self.radius.min(-self.dq + self.radius) {
            self.dr += 1;
        } else {
            self.dq += 1;
            self.dr = (-self.radius).max(-self.dq - self.radius);
        }
        Some(h)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CircleIter {}

// ---------------------------------------------------------------------------
// RingIter
// ---------------------------------------------------------------------------

/// Iterator over a hex ring, see [`Hex::ring`].
///
/// Starts at `center + DIRECTIONS[4] * radius` and walks the six edges, so
/// consecutive items are adjacent.
#[derive(Clone, Debug)]
pub struct RingIter {
    next: Hex,
    radius: u32,
    direction: usize,
    edge_index: u32,
    remaining: usize,
}

impl RingIter {
    pub(crate) fn new(center: Hex, radius: u32) -> Self {
        Self {
            next: center + DIRECTIONS[4] * radius as i32,
            radius,
            direction: 0,
            edge_index: 0,
            remaining: if radius == 0 { 1 } else { 6 * radius as usize },
        }
    }
}

impl Iterator for RingIter {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let h = self.next;
        if self.radius > 0 {
            self.next = h + DIRECTIONS[self.direction];
            self.edge_index += 1;
            if self.edge_index == self.radius {
                self.edge_index = 0;
                self.direction += 1;
            }
        }
        Some(h)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn distance_free_function() {
        assert_eq!(distance(1, -3, -2, 5), 8);
        assert_eq!(distance(0, 0, 0, 2), 2);
    }

    #[test]
    fn circle_has_hexagon_count() {
        for radius in 0..8u32 {
            let center = Hex::new(3, -4);
            let hexes: Vec<Hex> = center.circle(radius).collect();
            assert_eq!(hexes.len(), circle_len(radius));
            let unique: HashSet<Hex> = hexes.iter().copied().collect();
            assert_eq!(unique.len(), hexes.len());
            assert!(hexes.iter().all(|h| h.distance(center) <= radius as i32));
        }
    }

    #[test]
    fn circle_callback_matches_iterator() {
        let mut seen = Vec::new();
        circle(1, 1, 3, |h| seen.push(h));
        let iter: Vec<Hex> = Hex::new(1, 1).circle(3).collect();
        assert_eq!(seen, iter);
        assert_eq!(seen.len(), 37);
    }

    #[test]
    fn ring_zero_is_center() {
        let c = Hex::new(-2, 7);
        assert_eq!(c.ring(0).collect::<Vec<_>>(), vec![c]);
    }

    #[test]
    fn ring_is_contiguous_and_exact() {
        for radius in 1..6u32 {
            let c = Hex::new(2, 2);
            let hexes: Vec<Hex> = c.ring(radius).collect();
            assert_eq!(hexes.len(), 6 * radius as usize);
            for h in &hexes {
                assert_eq!(h.distance(c), radius as i32);
            }
            for w in hexes.windows(2) {
                assert_eq!(w[0].distance(w[1]), 1);
            }
            assert_eq!(hexes[0].distance(*hexes.last().unwrap()), 1);
        }
    }

    #[test]
    fn ring_one_order() {
        let mut seen = Vec::new();
        ring(0, 0, 1, |h| seen.push(h));
        assert_eq!(
            seen,
            vec![
                Hex::new(-1, 1),
                Hex::new(0, 1),
                Hex::new(1, 0),
                Hex::new(1, -1),
                Hex::new(0, -1),
                Hex::new(-1, 0),
            ]
        );
    }

    #[test]
    fn rings_partition_circle() {
        let c = Hex::ZERO;
        let from_rings: HashSet<Hex> = (0..=4).flat_map(|r| c.ring(r)).collect();
        let from_circle: HashSet<Hex> = c.circle(4).collect();
        assert_eq!(from_rings, from_circle);
    }
}
