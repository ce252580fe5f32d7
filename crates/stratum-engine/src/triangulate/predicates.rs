use crate::coords::Point;

/// Twice the signed area of triangle `abc`.
///
/// Negative when `a → b → c` turns clockwise (+Y up), positive when it turns
/// counter-clockwise, zero when the points are collinear.
#[inline]
pub(crate) fn turn_sign(a: Point, b: Point, c: Point) -> f32 {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// Returns true when `p` lies inside triangle `abc` or on one of its edges.
///
/// A point equal to one of the corners is never contained: the corners are
/// the ear's own vertices (or duplicates of them).
pub(crate) fn triangle_contains(p: Point, a: Point, b: Point, c: Point) -> bool {
    if p == a || p == b || p == c {
        return false;
    }

    let s1 = turn_sign(p, a, b);
    let s2 = turn_sign(p, b, c);
    let s3 = turn_sign(p, c, a);

    let has_negative = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
    let has_positive = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;

    // Edge points produce a zero sign and still count as inside.
    !(has_negative && has_positive)
}

/// Ear test for the triple `(a, b, c)` of vertex indices.
///
/// The middle vertex must turn clockwise, and no vertex of the whole original
/// polygon may sit inside (or on the border of) the candidate triangle.
pub(crate) fn is_ear(vertices: &[Point], a: u32, b: u32, c: u32) -> bool {
    let (pa, pb, pc) = (vertices[a as usize], vertices[b as usize], vertices[c as usize]);

    if turn_sign(pa, pb, pc) >= 0.0 {
        return false;
    }

    !vertices.iter().any(|&p| triangle_contains(p, pa, pb, pc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point { Point::new(x, y) }

    #[test]
    fn turn_sign_orientation() {
        // +Y up: (0,0) → (0,1) → (1,0) is clockwise.
        assert!(turn_sign(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)) < 0.0);
        assert!(turn_sign(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)) > 0.0);
        assert_eq!(turn_sign(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn contains_interior_point() {
        let (a, b, c) = (p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0));
        assert!(triangle_contains(p(2.0, 2.0), a, b, c));
        assert!(!triangle_contains(p(8.0, 8.0), a, b, c));
    }

    #[test]
    fn contains_edge_point_but_not_corner() {
        let (a, b, c) = (p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0));
        assert!(triangle_contains(p(5.0, 5.0), a, b, c));
        assert!(triangle_contains(p(0.0, 4.0), a, b, c));
        assert!(!triangle_contains(p(0.0, 10.0), a, b, c));
    }

    #[test]
    fn reflex_vertex_is_not_an_ear() {
        let v = [p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0)];
        // (0,0) → (5,5) → (10,0) turns clockwise; reversed it does not.
        assert!(is_ear(&v, 0, 1, 2));
        assert!(!is_ear(&v, 2, 1, 0));
    }

    #[test]
    fn ear_blocked_by_inner_vertex() {
        let v = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0), p(1.0, 1.0)];
        assert!(!is_ear(&v, 0, 1, 2));
    }
}
