use serde::Serialize;

/// Dataset for the "Portfolio Growth" line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub series: LineSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<f64>,
    pub color: String,
    pub tension: f64,
}

impl LineChartData {
    pub fn is_empty(&self) -> bool {
        self.series.points.is_empty()
    }

    /// (min, max) of the plotted values
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut points = self.series.points.iter().copied();
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Dataset for the "Market Cap Allocation" pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    pub color: String,
}

impl PieChartData {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Drawable region of a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    pub fn left(&self) -> f64 {
        self.padding
    }

    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn top(&self) -> f64 {
        self.padding
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Cubic segment from the previous point to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub cp1: Point,
    pub cp2: Point,
    pub to: Point,
}

/// One pie slice in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
}
