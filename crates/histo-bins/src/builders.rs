//! Equal-width histogram construction

use histo_core::{AggregationMode, BinCount, Result};
use tracing::debug;

use crate::sample::{total_weight, Sample};
use crate::traits::HistogramBuilder;
use crate::types::{in_shifted_range, Bin, Histogram};

/// Equal-width histogram builder
///
/// Splits `[min, max]` of the sample values into a number of contiguous
/// bins of the same width and aggregates sample weights per bin.
#[derive(Debug, Clone, Copy)]
pub struct EqualWidthBuilder {
    bin_count: BinCount,
    mode: AggregationMode,
}

impl EqualWidthBuilder {
    /// Create a frequency builder with the given bin count
    pub fn new(bin_count: BinCount) -> Self {
        Self {
            bin_count,
            mode: AggregationMode::Frequency,
        }
    }

    /// Set the aggregation mode
    pub fn mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }
}

impl HistogramBuilder for EqualWidthBuilder {
    fn build(&self, samples: &[Sample]) -> Result<Histogram> {
        if samples.is_empty() {
            return Ok(Histogram::empty(self.mode));
        }

        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.value), hi.max(s.value))
            });

        let num_bins = self.bin_count.resolve(samples.len());
        let edges = equal_width_edges(min, max, num_bins);
        let total = total_weight(samples);

        debug!(
            samples = samples.len(),
            requested = ?self.bin_count,
            bins = edges.len() - 1,
            total_weight = total,
            "binning samples"
        );

        let bins = aggregate(samples, &edges, total, self.mode);
        Ok(Histogram::new(bins, total, samples.len(), min, max, self.mode))
    }

    fn mode(&self) -> AggregationMode {
        self.mode
    }

    fn target_bins(&self, sample_len: usize) -> Option<usize> {
        Some(self.bin_count.resolve(sample_len))
    }
}

/// Edges of `num_bins` equal-width bins spanning `[min, max]`
///
/// The last edge is pinned to `max`. When the extent is zero (all values
/// identical) or the width underflows, a single zero-width bin `[min, max]`
/// is returned instead of dividing by zero.
///
/// When the extent is too narrow for the magnitude of the values, adjacent
/// edges would round to the same float. The bin count is then lowered until
/// every edge strictly increases, down to a single `[min, max]` bin.
pub fn equal_width_edges(min: f64, max: f64, num_bins: usize) -> Vec<f64> {
    let requested = num_bins.max(1);
    let extent = max - min;

    if !(extent > 0.0) {
        return vec![min, max];
    }

    if !extent.is_finite() {
        return edges_with_count(min, max, requested);
    }

    let mut num_bins = requested.min(max_distinct_bins(min, max));
    loop {
        let edges = edges_with_count(min, max, num_bins);
        if num_bins == 1 || edges.windows(2).all(|w| w[0] < w[1]) {
            if num_bins < requested {
                debug!(
                    requested,
                    bins = num_bins,
                    min,
                    max,
                    "extent too narrow for float precision; fewer bins"
                );
            }
            return edges;
        }
        num_bins -= 1;
    }
}

/// Largest bin count whose width is at least the float spacing near the
/// larger-magnitude end of `[min, max]`
fn max_distinct_bins(min: f64, max: f64) -> usize {
    let spacing = min.abs().max(max.abs()) * f64::EPSILON;
    if !(spacing > 0.0) {
        return usize::MAX;
    }
    // saturating cast
    ((max - min) / spacing).floor().max(1.0) as usize
}

fn edges_with_count(min: f64, max: f64, num_bins: usize) -> Vec<f64> {
    let width = (max - min) / num_bins as f64;
    let mut edges = Vec::with_capacity(num_bins + 1);
    for i in 0..num_bins {
        edges.push(min + i as f64 * width);
    }
    // Ensure last edge is exactly max
    edges.push(max);
    edges
}

/// Assign samples to the bins delimited by `edges` and aggregate their weight
///
/// Membership follows [`in_shifted_range`]. In density mode each bin's
/// summed weight is divided by `total_weight`, the weight of the whole
/// dataset rather than of the binned part.
pub fn aggregate(
    samples: &[Sample],
    edges: &[f64],
    total_weight: f64,
    mode: AggregationMode,
) -> Vec<Bin> {
    edges
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (x0, x1) = (pair[0], pair[1]);
            let members: Vec<Sample> = samples
                .iter()
                .filter(|s| in_shifted_range(s.value, x0, x1, index == 0))
                .cloned()
                .collect();

            let weight: f64 = members.iter().fold(0.0, |acc, s| acc + s.weight);
            let y = match mode {
                AggregationMode::Frequency => weight,
                AggregationMode::Density if total_weight > 0.0 => weight / total_weight,
                AggregationMode::Density => 0.0,
            };

            Bin { x0, x1, y, members }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{samples_from_values, RawValue};
    use approx::assert_relative_eq;

    fn samples(values: &[f64]) -> Vec<Sample> {
        let raw: Vec<RawValue> = values.iter().map(|&v| v.into()).collect();
        samples_from_values(&raw, None, None)
    }

    #[test]
    fn test_equal_width_edges() {
        assert_eq!(equal_width_edges(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(equal_width_edges(3.0, 3.0, 4), vec![3.0, 3.0]);
        assert_eq!(equal_width_edges(0.0, 1.0, 0), vec![0.0, 1.0]);
    }

    #[test]
    fn test_narrow_extent_at_large_magnitude() {
        // float spacing near 1e15 is 0.125, so 100 bins over an extent of 1 collapse
        let edges = equal_width_edges(1e15, 1e15 + 1.0, 100);

        assert_eq!(edges, vec![1e15, 1e15 + 0.25, 1e15 + 0.5, 1e15 + 0.75, 1e15 + 1.0]);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_extent_of_one_ulp_is_a_single_bin() {
        let min = 1e15;
        let max = min + 0.125;
        assert_eq!(equal_width_edges(min, max, 50), vec![min, max]);
    }

    #[test]
    fn test_narrow_extent_builds_positive_width_bins() {
        let data = samples(&[1e15, 1e15 + 0.5, 1e15 + 1.0]);
        let hist = EqualWidthBuilder::new(BinCount::Fixed(100)).build(&data).unwrap();

        assert_eq!(hist.len(), 4);
        assert!(hist.bins().iter().all(|b| b.x0 < b.x1));
        assert!(hist.bins().iter().all(|b| b.width() == hist.bin_width()));
        assert_eq!(hist.bin_width(), 0.25);
    }

    #[test]
    fn test_fixed_bins() {
        let data = samples(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let hist = EqualWidthBuilder::new(BinCount::Fixed(5)).build(&data).unwrap();

        assert_eq!(hist.len(), 5);
        assert_eq!(hist.edges(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        // [2, 4], (4, 6], (6, 8], (8, 10], (10, 12]
        assert_eq!(hist.values(), vec![3.0, 2.0, 2.0, 2.0, 0.0]);
        assert_eq!(hist.total_weight(), 11.0);
    }

    #[test]
    fn test_density_divides_by_total_weight() {
        let data = samples(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let hist = EqualWidthBuilder::new(BinCount::Fixed(2))
            .mode(AggregationMode::Density)
            .build(&data)
            .unwrap();

        // edges 0, 2, 4; bin 0 holds [2, 4]
        assert_relative_eq!(hist.values()[0], 3.0 / 5.0);
        assert_relative_eq!(hist.values()[1], 0.0);
        assert_eq!(hist.mode(), AggregationMode::Density);
    }

    #[test]
    fn test_identical_values() {
        let data = samples(&[5.0, 5.0, 5.0]);
        let hist = EqualWidthBuilder::new(BinCount::Fixed(10)).build(&data).unwrap();

        assert_eq!(hist.len(), 1);
        assert_eq!(hist.bins()[0].range(), [5.0, 5.0]);
        assert_eq!(hist.bins()[0].y, 3.0);
        assert_eq!(hist.bin_width(), 0.0);
    }

    #[test]
    fn test_single_sample() {
        let data = samples(&[1.0]);
        let builder = EqualWidthBuilder::new(BinCount::Auto);
        let hist = builder.build(&data).unwrap();

        assert_eq!(builder.target_bins(1), Some(1));
        assert!(!hist.is_empty());
        assert_eq!(hist.bins()[0].y, 1.0);
        assert!(hist.values().iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_empty_samples() {
        let hist = EqualWidthBuilder::new(BinCount::Auto).build(&[]).unwrap();
        assert!(hist.is_empty());
    }

    #[test]
    fn test_aggregate_with_explicit_edges_captures_everything() {
        // edges start one width below the data so every value has a window
        let data = samples(&[0.0, 0.5, 2.0, 3.0, 5.5, 6.0]);
        let bins = aggregate(&data, &[-2.0, 0.0, 2.0, 4.0, 6.0], 6.0, AggregationMode::Density);

        let members: usize = bins.iter().map(|b| b.members.len()).sum();
        assert_eq!(members, data.len());
        assert_relative_eq!(bins.iter().map(|b| b.y).sum::<f64>(), 1.0);
    }
}
