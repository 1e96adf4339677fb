//! Core traits for histogram building

use histo_core::{AggregationMode, Result};

use crate::sample::Sample;
use crate::types::Histogram;

/// Trait for building histograms from weighted samples
pub trait HistogramBuilder {
    /// Build a histogram from the given samples
    fn build(&self, samples: &[Sample]) -> Result<Histogram>;

    /// How bin heights are aggregated
    fn mode(&self) -> AggregationMode;

    /// Get the number of bins that would be built for `sample_len` samples (if known)
    fn target_bins(&self, _sample_len: usize) -> Option<usize> {
        None
    }
}
