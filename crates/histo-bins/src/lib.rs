//! Weighted sample extraction and equal-width binning
//!
//! This crate covers the first half of the histogram pipeline: turning the
//! host's raw category column into weighted [`Sample`]s, partitioning them
//! into contiguous equal-width [`Bin`]s, and measuring the
//! [`BorderValues`] of the result.
//!
//! # Key Features
//!
//! - **Tolerant extraction**: non-numeric cells become a zero sentinel,
//!   invalid weights fall back to one
//! - **Weighted aggregation**: frequency (summed weight) or density
//!   (summed weight over total weight)
//! - **Identity threading**: every bin keeps the samples it was built from
//!
//! # Examples
//!
//! ```rust
//! use histo_bins::{CategoryColumn, EqualWidthBuilder, HistogramBuilder, SampleExtractor};
//! use histo_bins::BorderValues;
//! use histo_core::BinCount;
//!
//! let column = CategoryColumn::numeric([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
//! let samples = SampleExtractor::new().extract(Some(&column), None).unwrap();
//!
//! let histogram = EqualWidthBuilder::new(BinCount::Fixed(4)).build(&samples).unwrap();
//! assert_eq!(histogram.len(), 4);
//!
//! let border = BorderValues::from(&histogram);
//! assert_eq!(border.min_x, 1.0);
//! assert_eq!(border.max_x, 9.0);
//! ```

pub mod bounds;
pub mod builders;
pub mod sample;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use bounds::BorderValues;
pub use builders::{aggregate, equal_width_edges, EqualWidthBuilder};
pub use sample::{
    are_values_numbers, samples_from_values, total_weight, CategoryColumn, ColumnType, RawValue,
    Sample, SampleExtractor, SelectionId,
};
pub use traits::HistogramBuilder;
pub use types::{edges_of, in_shifted_range, Bin, Histogram};

// Convenience functions
/// Create a frequency histogram with a fixed number of equal-width bins
pub fn fixed_histogram(samples: &[Sample], num_bins: usize) -> histo_core::Result<Histogram> {
    EqualWidthBuilder::new(histo_core::BinCount::Fixed(num_bins)).build(samples)
}

pub use histo_core::Result;
