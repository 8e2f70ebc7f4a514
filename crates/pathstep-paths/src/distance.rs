use pathstep_core::Point;

/// Euclidean (L2) distance between two points, truncated toward zero.
///
/// Costs are integers, so a diagonal step at world scale 10 costs 14.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    ((dx * dx + dy * dy) as f64).sqrt() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_and_diagonal_steps() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(10, 0)), 10);
        assert_eq!(euclidean(Point::new(0, 0), Point::new(0, -10)), 10);
        assert_eq!(euclidean(Point::new(0, 0), Point::new(10, 10)), 14);
        assert_eq!(euclidean(Point::new(10, 0), Point::new(20, 20)), 22);
        assert_eq!(euclidean(Point::new(3, 4), Point::new(3, 4)), 0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(-5, 7);
        let b = Point::new(12, 1);
        assert_eq!(euclidean(a, b), euclidean(b, a));
    }

    #[test]
    fn far_apart_points_do_not_overflow() {
        let a = Point::new(-1_000_000_000, 0);
        let b = Point::new(1_000_000_000, 0);
        assert_eq!(euclidean(a, b), 2_000_000_000);
        // Beyond i32 the cast saturates.
        assert_eq!(euclidean(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)), i32::MAX);
    }
}
