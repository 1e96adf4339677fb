//! Property-based tests for equal-width binning

use histo_bins::*;
use histo_core::{AggregationMode, BinCount};
use proptest::prelude::*;
use std::collections::HashSet;

fn to_samples(values: &[f64], weights: &[f64]) -> Vec<Sample> {
    let raw: Vec<RawValue> = values.iter().map(|&v| v.into()).collect();
    let raw_weights: Vec<RawValue> = weights.iter().map(|&w| w.into()).collect();
    samples_from_values(&raw, Some(raw_weights.as_slice()), Some("t.v"))
}

proptest! {
    // Property: identical input produces identical bins
    #[test]
    fn prop_binning_is_deterministic(
        values in prop::collection::vec(-1e6f64..1e6, 1..300),
        bins in 1usize..64
    ) {
        let samples = to_samples(&values, &[]);
        let builder = EqualWidthBuilder::new(BinCount::Fixed(bins));

        let first = builder.build(&samples).unwrap();
        let second = builder.build(&samples).unwrap();

        prop_assert_eq!(first.edges(), second.edges());
        prop_assert_eq!(first.values(), second.values());
    }

    // Property: every bin has the same width, up to rounding of the edges
    #[test]
    fn prop_constant_bin_width(
        values in prop::collection::vec(-1e6f64..1e6, 2..300),
        bins in 1usize..200
    ) {
        let samples = to_samples(&values, &[]);
        let histogram = EqualWidthBuilder::new(BinCount::Fixed(bins)).build(&samples).unwrap();

        let width = histogram.bin_width();
        let tolerance = 1e-9 * (histogram.min().abs() + histogram.max().abs() + 1.0);
        for bin in histogram.bins() {
            prop_assert!((bin.width() - width).abs() <= tolerance,
                "bin {} has width {}, expected {}", bin, bin.width(), width);
        }
        for pair in histogram.bins().windows(2) {
            prop_assert_eq!(pair[0].x1, pair[1].x0);
        }
    }

    // Property: bins keep a positive width even when the extent is narrow
    // against the magnitude of the values
    #[test]
    fn prop_narrow_extent_bins_have_positive_width(
        base in 1e12f64..1e17,
        offsets in prop::collection::vec(0f64..4.0, 2..50),
        bins in 1usize..500
    ) {
        let values: Vec<f64> = offsets.iter().map(|&o| base + o).collect();
        let samples = to_samples(&values, &[]);
        let histogram = EqualWidthBuilder::new(BinCount::Fixed(bins)).build(&samples).unwrap();

        if histogram.max() > histogram.min() {
            prop_assert!(histogram.len() <= bins);
            for bin in histogram.bins() {
                prop_assert!(bin.x0 < bin.x1, "bin {} has no width", bin);
            }
        } else {
            prop_assert_eq!(histogram.len(), 1);
        }
    }

    // Property: no sample is assigned to two bins
    //
    // Values are quarter steps and bin counts powers of two so every edge is exact.
    #[test]
    fn prop_membership_is_exclusive(
        quarters in prop::collection::vec(-400i32..400, 2..200),
        shift in 0u32..6
    ) {
        let values: Vec<f64> = quarters.iter().map(|&q| q as f64 / 4.0).collect();
        let samples = to_samples(&values, &[]);
        let histogram = EqualWidthBuilder::new(BinCount::Fixed(1 << shift)).build(&samples).unwrap();

        let mut seen = HashSet::new();
        for bin in histogram.bins() {
            for member in &bin.members {
                prop_assert!(seen.insert(member.identity.index()),
                    "sample {} assigned twice", member.identity.index());
            }
        }

        let binned: f64 = histogram.values().iter().sum();
        prop_assert!(binned <= histogram.total_weight());
    }

    // Property: density over edges that cover the data sums to one
    #[test]
    fn prop_density_sums_to_one_when_everything_is_binned(
        quarters in prop::collection::vec(0i32..64, 1..100),
        weights in prop::collection::vec(0.5f64..10.0, 100)
    ) {
        let values: Vec<f64> = quarters.iter().map(|&q| q as f64 / 4.0).collect();
        let samples = to_samples(&values, &weights[..values.len()]);
        let total = total_weight(&samples);

        // windows [0, 4], (4, 8], (8, 12], (12, 16], (16, 20]
        let edges = [-4.0, 0.0, 4.0, 8.0, 12.0, 16.0];
        let bins = aggregate(&samples, &edges, total, AggregationMode::Density);

        let sum: f64 = bins.iter().map(|b| b.y).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);

        let frequency = aggregate(&samples, &edges, total, AggregationMode::Frequency);
        let weight: f64 = frequency.iter().map(|b| b.y).sum();
        prop_assert!((weight - total).abs() < 1e-9 * total);
    }
}
