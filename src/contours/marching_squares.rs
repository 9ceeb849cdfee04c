use std::collections::HashMap;

use log::debug;
use ndarray::Array2;

use crate::error::CoreError;
use crate::geometry::{Point2d, Polygon};
use crate::Result;

/// One oriented iso-line segment inside a facet.
#[derive(Debug, Clone, Copy)]
struct Segment {
    from: Point2d,
    to: Point2d,
}

/// Crossing slots on the four facet edges.
#[derive(Debug, Clone, Copy)]
struct Crossings {
    south: Option<Point2d>,
    north: Option<Point2d>,
    west: Option<Point2d>,
    east: Option<Point2d>,
}

fn inside(v: f64, level: f64, negative: bool) -> bool {
    if negative {
        v < level
    } else {
        v > level
    }
}

/// Crossing position between two samples, linear in the values.
fn cross_point(p0: Point2d, p1: Point2d, v0: f64, v1: f64, level: f64) -> Point2d {
    let t = (level - v0) / (v1 - v0);
    p0 + t * (p1 - p0)
}

fn point_key(p: Point2d) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Extract iso-level polygons from a regular grid of samples.
///
/// `values` is addressed as (row, col) with rows following `y` and columns
/// following `x`. Segments are oriented with the enclosed region on their
/// left, then chained into closed contours; chains that terminate on the
/// grid boundary are closed by the polygon constructor. With `negative` the
/// enclosed region is where values fall below the level instead of above.
pub fn contours(
    x: &[f64],
    y: &[f64],
    values: &Array2<f64>,
    level: f64,
    negative: bool,
) -> Result<Vec<Polygon>> {
    if values.nrows() != y.len() || values.ncols() != x.len() {
        return Err(CoreError::OutOfRange(format!(
            "contour grid is {}x{} but the value matrix is {}x{}",
            y.len(),
            x.len(),
            values.nrows(),
            values.ncols()
        )));
    }
    if y.len() < 2 || x.len() < 2 {
        return Ok(Vec::new());
    }

    let mut segments: Vec<Segment> = Vec::new();

    for r in 0..y.len() - 1 {
        for c in 0..x.len() - 1 {
            // Corner naming in (x, y): 00 = (c, r), 01 = (c+1, r),
            // 11 = (c+1, r+1), 10 = (c, r+1).
            let v00 = values[(r, c)];
            let v01 = values[(r, c + 1)];
            let v11 = values[(r + 1, c + 1)];
            let v10 = values[(r + 1, c)];

            let p00 = Point2d::new(x[c], y[r]);
            let p01 = Point2d::new(x[c + 1], y[r]);
            let p11 = Point2d::new(x[c + 1], y[r + 1]);
            let p10 = Point2d::new(x[c], y[r + 1]);

            let mut code = 0u8;
            if inside(v00, level, negative) {
                code |= 1;
            }
            if inside(v01, level, negative) {
                code |= 2;
            }
            if inside(v11, level, negative) {
                code |= 4;
            }
            if inside(v10, level, negative) {
                code |= 8;
            }
            if code == 0 || code == 15 {
                continue;
            }

            let crossing = |pa: Point2d, pb: Point2d, va: f64, vb: f64| {
                if inside(va, level, negative) != inside(vb, level, negative) {
                    Some(cross_point(pa, pb, va, vb, level))
                } else {
                    None
                }
            };
            let cr = Crossings {
                south: crossing(p00, p01, v00, v01),
                north: crossing(p10, p11, v10, v11),
                west: crossing(p00, p10, v00, v10),
                east: crossing(p01, p11, v01, v11),
            };

            emit_facet_segments(code, &cr, (v00 + v01 + v11 + v10) / 4.0, level, negative, &mut segments);
        }
    }

    Ok(chain_segments(segments))
}

/// Dispatch the 16 facet cases into oriented segments. The two ambiguous
/// diagonal cases are resolved by the center value interpolated from the
/// corners.
fn emit_facet_segments(
    code: u8,
    cr: &Crossings,
    center: f64,
    level: f64,
    negative: bool,
    segments: &mut Vec<Segment>,
) {
    let mut push = |from: Option<Point2d>, to: Option<Point2d>| {
        if let (Some(from), Some(to)) = (from, to) {
            segments.push(Segment { from, to });
        }
    };

    match code {
        1 => push(cr.south, cr.west),
        2 => push(cr.east, cr.south),
        4 => push(cr.north, cr.east),
        8 => push(cr.west, cr.north),
        14 => push(cr.west, cr.south),
        13 => push(cr.south, cr.east),
        11 => push(cr.east, cr.north),
        7 => push(cr.north, cr.west),
        3 => push(cr.east, cr.west),
        12 => push(cr.west, cr.east),
        6 => push(cr.north, cr.south),
        9 => push(cr.south, cr.north),
        5 => {
            if inside(center, level, negative) {
                push(cr.south, cr.east);
                push(cr.north, cr.west);
            } else {
                push(cr.south, cr.west);
                push(cr.north, cr.east);
            }
        }
        10 => {
            if inside(center, level, negative) {
                push(cr.west, cr.south);
                push(cr.east, cr.north);
            } else {
                push(cr.east, cr.south);
                push(cr.west, cr.north);
            }
        }
        _ => unreachable!("facet codes 0 and 15 are filtered out"),
    }
}

/// Link oriented segments into contours and wrap them into polygons.
///
/// Crossing points on shared facet edges are computed from the same sample
/// pair in both facets, so endpoints match bit for bit and a hash map keyed
/// on the raw coordinates chains them exactly.
fn chain_segments(segments: Vec<Segment>) -> Vec<Polygon> {
    let mut by_from: HashMap<(u64, u64), Vec<usize>> = HashMap::new();
    let mut by_to: HashMap<(u64, u64), Vec<usize>> = HashMap::new();
    for (i, s) in segments.iter().enumerate() {
        by_from.entry(point_key(s.from)).or_default().push(i);
        by_to.entry(point_key(s.to)).or_default().push(i);
    }

    let mut used = vec![false; segments.len()];
    let mut polygons = Vec::new();

    let take = |map: &mut HashMap<(u64, u64), Vec<usize>>, key: (u64, u64), used: &[bool]| {
        map.get_mut(&key)
            .and_then(|candidates| {
                candidates.retain(|&i| !used[i]);
                candidates.pop()
            })
    };

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let mut points = vec![segments[start].from, segments[start].to];

        // Walk forward from the tail.
        loop {
            let key = point_key(*points.last().unwrap());
            match take(&mut by_from, key, &used) {
                Some(next) => {
                    used[next] = true;
                    points.push(segments[next].to);
                }
                None => break,
            }
        }

        let closed = points.first() == points.last();
        if closed {
            points.pop();
        } else {
            // Open chain: extend backward from the head until the boundary.
            loop {
                let key = point_key(points[0]);
                match take(&mut by_to, key, &used) {
                    Some(prev) => {
                        used[prev] = true;
                        points.insert(0, segments[prev].from);
                    }
                    None => break,
                }
            }
        }

        match Polygon::new(&points) {
            Ok(polygon) => polygons.push(polygon),
            Err(_) => debug!(
                "dropping degenerate contour fragment with {} point(s)",
                points.len()
            ),
        }
    }

    polygons
}
