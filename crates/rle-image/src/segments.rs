//! # Segment reconstruction
//!
//! Turns transition indices back into horizontal line segments. Every pair
//! of consecutive points in the output is one segment on a single row,
//! from `start.x` (inclusive) to `end.x` (exclusive).

/// A point in drawing space
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Point {
    /// The column
    pub x: u32,
    /// The row
    pub y: u32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Reconstruct the segment points for the transition `indices` of an image
/// that is `width` pixels wide
///
/// A run that spans several rows is split at the row ends, so every row it
/// covers gets its own full-width segment. An end index on column 0 marks a
/// run that stopped at the right edge of the previous row.
pub fn reconstruct(indices: &[u32], width: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(indices.len());
    if width == 0 {
        return points;
    }

    let mut prev_row = 0;
    for (i, &index) in indices.iter().enumerate() {
        let mut point = Point::new(index % width, index / width);

        if i % 2 == 1 {
            if point.x == 0 && point.y > prev_row {
                point = Point::new(width, point.y - 1);
            }
            // bridge the rows in between
            while prev_row < point.y {
                points.push(Point::new(width, prev_row));
                prev_row += 1;
                points.push(Point::new(0, prev_row));
            }
        }

        prev_row = point.y;
        points.push(point);
    }
    points
}

/// Iterate the segments of a point sequence as `(start, end)` pairs
///
/// An unpaired trailing point is skipped.
pub fn pairs(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}

/// The mean of all points, if there are any
pub fn centroid(points: &[Point]) -> Option<(f32, f32)> {
    if points.is_empty() {
        return None;
    }
    let (x, y) = points.iter().fold((0.0f64, 0.0f64), |(x, y), p| {
        (x + f64::from(p.x), y + f64::from(p.y))
    });
    let n = points.len() as f64;
    Some(((x / n) as f32, (y / n) as f32))
}
