use std::f64::consts::{FRAC_PI_2, TAU};

use super::value_objects::{CurveSegment, PieArc, PieChartData, PlotArea, Point};

/// Scale values into the plot area. X is spread evenly, Y grows downwards.
///
/// A single value sits in the horizontal centre and a flat series in the
/// vertical centre.
pub fn line_points(values: &[f64], area: &PlotArea) -> Vec<Point> {
    let Some((min, max)) = value_bounds(values) else {
        return Vec::new();
    };
    let span = max - min;
    let step = if values.len() > 1 {
        area.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if values.len() == 1 {
                area.left() + area.inner_width() / 2.0
            } else {
                area.left() + step * i as f64
            };
            let y = if span == 0.0 {
                area.top() + area.inner_height() / 2.0
            } else {
                area.bottom() - (v - min) / span * area.inner_height()
            };
            Point { x, y }
        })
        .collect()
}

/// Cardinal-spline control points for a smoothed polyline.
///
/// Control points are capped to the plot area so the curve never overshoots it.
pub fn curve_segments(points: &[Point], tension: f64, area: &PlotArea) -> Vec<CurveSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    let cap = |p: Point| Point {
        x: p.x.clamp(area.left(), area.right()),
        y: p.y.clamp(area.top(), area.bottom()),
    };

    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            CurveSegment {
                cp1: cap(Point {
                    x: p1.x + (p2.x - p0.x) * tension,
                    y: p1.y + (p2.y - p0.y) * tension,
                }),
                cp2: cap(Point {
                    x: p2.x - (p3.x - p1.x) * tension,
                    y: p2.y - (p3.y - p1.y) * tension,
                }),
                to: p2,
            }
        })
        .collect()
}

/// Angles for every non-empty slice, starting at 12 o'clock
pub fn pie_arcs(data: &PieChartData) -> Vec<PieArc> {
    let total = data.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    data.slices
        .iter()
        .filter(|slice| slice.value > 0)
        .map(|slice| {
            let sweep = slice.value as f64 / total as f64 * TAU;
            let arc = PieArc {
                label: slice.label.clone(),
                color: slice.color.clone(),
                start_angle: start,
                end_angle: start + sweep,
            };
            start += sweep;
            arc
        })
        .collect()
}

fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
