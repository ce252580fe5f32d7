use crate::coords::Point;

/// Rotational direction of a vertex list, measured with +Y up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Zero signed area: collinear points, or a figure whose lobes cancel out.
    Degenerate,
}

/// Shoelace signed area. Negative for clockwise order, positive for counter-clockwise.
pub fn signed_area(points: &[Point]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let twice: f32 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

pub fn winding(points: &[Point]) -> Winding {
    let area = signed_area(points);
    if area < 0.0 {
        Winding::Clockwise
    } else if area > 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Degenerate
    }
}
