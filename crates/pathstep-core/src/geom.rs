//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Grid coordinates are integers. X grows right, Y grows down, and every
//! grid in this workspace covers the square `[0, N) x [0, N)`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: rows first, then columns within a row.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, o: Point) -> Point {
        self.shift(o.x, o.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, o: Point) -> Point {
        self.shift(-o.x, -o.y)
    }
}

/// Scales both coordinates, e.g. from tile coordinates to world positions.
impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, k: i32) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// The square `[0, side) x [0, side)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    side: i32,
}

impl Range {
    /// Negative sides are treated as empty.
    #[inline]
    pub const fn square(side: i32) -> Self {
        Self {
            side: if side < 0 { 0 } else { side },
        }
    }

    #[inline]
    pub const fn side(self) -> i32 {
        self.side
    }

    #[inline]
    pub const fn len(self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.side == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.side).contains(&p.x) && (0..self.side).contains(&p.y)
    }

    /// Every point of the square in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            side: self.side as usize,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side)
    }
}

/// Row-major iterator over a [`Range`], walking flat indices.
#[derive(Clone, Debug)]
pub struct RangeIter {
    side: usize,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Point::new((i % self.side) as i32, (i / self.side) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_shift() {
        let a = Point::new(1, 2);
        assert_eq!(a + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(3, 4) - a, Point::new(2, 2));
        assert_eq!(a * 10, Point::new(10, 20));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
        assert_eq!(Point::from((5, 6)), Point::new(5, 6));
    }

    #[test]
    fn points_sort_row_major() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]);
        assert_eq!(Point::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn square_contains() {
        let r = Range::square(4);
        assert_eq!(r.side(), 4);
        assert_eq!(r.len(), 16);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 0)));
        assert!(!r.contains(Point::new(0, -1)));
        assert_eq!(r.to_string(), "4x4");
    }

    #[test]
    fn iter_is_row_major() {
        let pts: Vec<_> = Range::square(3).iter().collect();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[8], Point::new(2, 2));

        let mut it = Range::square(3).iter();
        it.next();
        assert_eq!(it.len(), 8);
    }

    #[test]
    fn negative_side_is_empty() {
        let r = Range::square(-2);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}
