//! Bin-domain alignment against user-set X axis bounds
//!
//! When the user moves the X axis start or end away from the natural bin
//! edges, the edge sequence driving the axis ticks is extended with extra
//! grid points of the same bin width or trimmed down to the grid point
//! closest to the requested bound. Trimming compares *formatted* edge
//! values (format, then parse back) so floating-point noise below display
//! precision never flips an edge in or out.

use histo_bins::{edges_of, Bin, BorderValues};
use histo_core::{parse_leading_float, ValueFormatter};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::resolve::AxisRange;

/// Upper bound on grid steps taken while extending or trimming one side
pub const MAX_ALIGNMENT_STEPS: usize = 10_000;

/// Edge sequence after alignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedDomain {
    /// Ascending edge points for axis ticks
    pub points: Vec<f64>,
    /// Lowest edge settled on, when the start side was adjusted
    pub corrected_min: Option<f64>,
    /// Highest edge settled on, when the end side was adjusted
    pub corrected_max: Option<f64>,
}

impl AlignedDomain {
    fn unchanged(points: Vec<f64>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Whether either side was extended or trimmed
    pub fn is_corrected(&self) -> bool {
        self.corrected_min.is_some() || self.corrected_max.is_some()
    }
}

/// Aligns the bin edge sequence with a resolved X axis range
pub struct DomainAligner<'a> {
    formatter: &'a dyn ValueFormatter,
}

impl<'a> DomainAligner<'a> {
    /// Create an aligner comparing edges through `formatter`
    pub fn new(formatter: &'a dyn ValueFormatter) -> Self {
        Self { formatter }
    }

    /// Align the edges of `bins` with `range`
    ///
    /// Does nothing when the range already matches the border, when there
    /// is at most one edge point, or when the bin width is not positive.
    pub fn align(&self, range: &AxisRange, border: &BorderValues, bins: &[Bin]) -> AlignedDomain {
        let points = edges_of(bins);
        let Some(first) = bins.first() else {
            return AlignedDomain::unchanged(points);
        };
        let interval = first.x1 - first.x0;

        let overridden = border.max_x != range.end || border.min_x != range.start;
        if !overridden || points.len() <= 1 {
            return AlignedDomain::unchanged(points);
        }
        if !(interval > 0.0) {
            debug!(interval, "skipping alignment of a degenerate domain");
            return AlignedDomain::unchanged(points);
        }

        let (points, corrected_min) = self.align_start(points, range.start, border.min_x, interval);
        let (points, corrected_max) = self.align_end(points, range.end, border.max_x, interval);

        debug!(
            points = points.len(),
            ?corrected_min,
            ?corrected_max,
            "aligned bin domain"
        );

        AlignedDomain {
            points,
            corrected_min,
            corrected_max,
        }
    }

    fn align_start(
        &self,
        points: Vec<f64>,
        start: f64,
        min_x: f64,
        interval: f64,
    ) -> (Vec<f64>, Option<f64>) {
        if start > min_x {
            let limit = self.closest_min_to_start(min_x, start, interval);
            let points: Vec<f64> = points
                .into_iter()
                .filter(|&p| self.reparse(p) >= limit)
                .collect();
            let corrected = points.first().copied();
            return (points, corrected);
        }

        let mut before = Vec::new();
        let mut current = min_x;
        while start < current {
            if before.len() >= MAX_ALIGNMENT_STEPS {
                warn!(start, interval, "axis start too far from the data; extension cut short");
                break;
            }
            current -= interval;
            before.push(current);
        }

        let corrected = before.last().copied();
        before.reverse();
        before.extend(points);
        (before, corrected)
    }

    fn align_end(
        &self,
        mut points: Vec<f64>,
        end: f64,
        max_x: f64,
        interval: f64,
    ) -> (Vec<f64>, Option<f64>) {
        if end < max_x {
            let limit = self.closest_max_to_end(max_x, end, interval);
            points.retain(|&p| self.reparse(p) <= limit);
            let corrected = points.last().copied();
            return (points, corrected);
        }

        let mut corrected = None;
        let mut current = max_x;
        let mut steps = 0;
        while end > current {
            if steps >= MAX_ALIGNMENT_STEPS {
                warn!(end, interval, "axis end too far from the data; extension cut short");
                break;
            }
            current += interval;
            points.push(current);
            corrected = Some(current);
            steps += 1;
        }

        (points, corrected)
    }

    /// Step right from `border_min` by `interval` while the next grid
    /// point does not pass `start`; returns the formatted grid point
    fn closest_min_to_start(&self, border_min: f64, start: f64, interval: f64) -> f64 {
        let mut current = border_min;
        let mut steps = 0;
        while current < start && start >= current + interval {
            if steps >= MAX_ALIGNMENT_STEPS {
                warn!(start, interval, "axis start too far from the data; trimming cut short");
                break;
            }
            current += interval;
            steps += 1;
        }

        self.reparse(current)
    }

    /// Step left from `border_max` by `interval` while the next grid
    /// point does not pass `end`; returns the formatted grid point
    fn closest_max_to_end(&self, border_max: f64, end: f64, interval: f64) -> f64 {
        let mut current = border_max;
        let mut steps = 0;
        while current > end && end <= current - interval {
            if steps >= MAX_ALIGNMENT_STEPS {
                warn!(end, interval, "axis end too far from the data; trimming cut short");
                break;
            }
            current -= interval;
            steps += 1;
        }

        self.reparse(current)
    }

    fn reparse(&self, value: f64) -> f64 {
        parse_leading_float(&self.formatter.format(value))
    }
}
