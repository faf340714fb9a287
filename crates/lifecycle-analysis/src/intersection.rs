//! Break-even point between two accumulated emission curves.

use serde::Serialize;

use crate::projection::AccumulatedSeries;

/// Point on an emissions chart: `x` in years, `y` in kg CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Time in years.
    pub x: f64,
    /// Accumulated emissions in kg CO₂.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Returns the intersection point of segments `p1 -> p2` and `p3 -> p4`.
///
/// Follows [Paul Bourke's formulation](https://paulbourke.net/geometry/pointlineplane/).
/// Returns `None` if either segment has zero length, if the segments are parallel or collinear
/// (overlaps are not reported), or if the lines cross outside of either segment.
/// Crossings exactly at segment endpoints are reported.
pub fn segment_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    if p1 == p2 || p3 == p4 {
        return None;
    }

    let denominator = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denominator == 0. {
        return None;
    }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denominator;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denominator;
    if !(0. ..=1.).contains(&ua) || !(0. ..=1.).contains(&ub) {
        return None;
    }

    Some(Point::new(p1.x + ua * (p2.x - p1.x), p1.y + ua * (p2.y - p1.y)))
}

// Straight line from the first to the last sample of a series.
fn end_points(series: &AccumulatedSeries, len: usize) -> Option<(Point, Point)> {
    let first = series.first()?;
    let last = series.get(len.checked_sub(1)?)?;
    Some((Point::new(0., first), Point::new((len - 1) as f64, last)))
}

/// Finds the break-even point of two accumulated curves.
///
/// Each curve is approximated by the segment between its first sample and the sample at year `L - 1`,
/// where `L` is the length of `old`. This is exact for linear opex with a constant capex offset.
pub fn find_break_even(old: &AccumulatedSeries, new: &AccumulatedSeries) -> Option<Point> {
    let len = old.len();
    let (p1, p2) = end_points(old, len)?;
    let (p3, p4) = end_points(new, len)?;
    segment_intersect(p1, p2, p3, p4)
}

/// Finds the year when the accumulated curve reaches `level`,
/// e.g. when the operational emissions of a system catch up with its embodied emissions.
pub fn find_level_crossing(series: &AccumulatedSeries, level: f64) -> Option<Point> {
    let len = series.len();
    let (p1, p2) = end_points(series, len)?;
    segment_intersect(p1, p2, Point::new(p1.x, level), Point::new(p2.x, level))
}
