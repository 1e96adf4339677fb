//! Core types for histogram representation

use std::fmt;

use histo_core::AggregationMode;

use crate::sample::Sample;

/// Membership test for bin `x0..x1`
///
/// A value belongs to a bin when it lies past the bin's right edge by at
/// most one bin width: `(x1, x1 + width]`, closed on the left for the
/// first bin. This is the convention the tooltips and selections are built
/// on, so it is kept as is rather than the usual `[x0, x1)`.
pub fn in_shifted_range(value: f64, x0: f64, x1: f64, is_first: bool) -> bool {
    ((is_first && value >= x1) || value > x1) && value <= x1 + (x1 - x0)
}

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Left edge of the bin
    pub x0: f64,
    /// Right edge of the bin
    pub x1: f64,
    /// Aggregated weight (frequency or density)
    pub y: f64,
    /// Samples assigned to this bin
    pub members: Vec<Sample>,
}

impl Bin {
    /// Create an empty bin
    pub fn new(x0: f64, x1: f64) -> Self {
        Self {
            x0,
            x1,
            y: 0.0,
            members: Vec::new(),
        }
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// The bin's edges as a pair
    pub fn range(&self) -> [f64; 2] {
        [self.x0, self.x1]
    }

    /// Check if a value is a member of this bin, given its position
    pub fn contains(&self, value: f64, is_first: bool) -> bool {
        in_shifted_range(value, self.x0, self.x1, is_first)
    }

    /// Summed weight of the members
    pub fn member_weight(&self) -> f64 {
        self.members.iter().map(|s| s.weight).sum()
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}]: y={:.3}, members={}",
            self.x0,
            self.x1,
            self.y,
            self.members.len()
        )
    }
}

/// A histogram of weighted samples
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<Bin>,
    /// Sum of all sample weights
    total_weight: f64,
    /// Number of samples binned
    sample_count: usize,
    /// Minimum sample value
    min: f64,
    /// Maximum sample value
    max: f64,
    mode: AggregationMode,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(
        bins: Vec<Bin>,
        total_weight: f64,
        sample_count: usize,
        min: f64,
        max: f64,
        mode: AggregationMode,
    ) -> Self {
        Self {
            bins,
            total_weight,
            sample_count,
            min,
            max,
            mode,
        }
    }

    /// A histogram without bins
    pub fn empty(mode: AggregationMode) -> Self {
        Self::new(vec![], 0.0, 0, 0.0, 0.0, mode)
    }

    /// Get the bins
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Take ownership of the bins
    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total sample weight
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Get the number of samples
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Width of the first bin; zero when empty
    pub fn bin_width(&self) -> f64 {
        self.bins.first().map_or(0.0, Bin::width)
    }

    /// Find which bin a value is assigned to
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        self.bins
            .iter()
            .enumerate()
            .position(|(i, bin)| bin.contains(value, i == 0))
    }

    /// Get bin heights as a vector
    pub fn values(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.y).collect()
    }

    /// Get bin edges (first left edge followed by every right edge)
    pub fn edges(&self) -> Vec<f64> {
        edges_of(&self.bins)
    }

    /// Get the largest bin height
    pub fn max_value(&self) -> f64 {
        self.bins.iter().map(|bin| bin.y).fold(0.0, f64::max)
    }
}

/// Edge sequence of contiguous bins: `x0` of the first bin, then each `x1`
pub fn edges_of(bins: &[Bin]) -> Vec<f64> {
    let Some(first) = bins.first() else {
        return vec![];
    };

    let mut edges = Vec::with_capacity(bins.len() + 1);
    edges.push(first.x0);
    edges.extend(bins.iter().map(|bin| bin.x1));
    edges
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, weight={:.3}, range=[{:.3}, {:.3}])",
            self.len(),
            self.sample_count,
            self.total_weight,
            self.min,
            self.max
        )
    }
}
