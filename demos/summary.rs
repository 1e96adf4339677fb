//! Histogram summary example
//!
//! Run with: RUST_LOG=debug cargo run --example summary

use histo_visual::histo_core::{AxisStyle, HistogramSettings};
use histo_visual::prelude::*;
use rand::prelude::*;
use rand_distr::{LogNormal, Poisson};
use tracing_subscriber::EnvFilter;

fn print_histogram(data: &HistogramData) {
    let widest = data
        .data_points
        .iter()
        .map(|p| p.y)
        .fold(0.0, f64::max)
        .max(f64::MIN_POSITIVE);

    println!("  {} by {}", data.y_legend, data.x_legend);
    for point in &data.data_points {
        let bar = "#".repeat((point.y / widest * 40.0).round() as usize);
        println!("  {:>22} {:>8} {}", point.tooltip[1].value, point.label, bar);
    }
    println!(
        "  x axis {}, y axis {}, ticks {:?}",
        data.x_axis, data.y_axis, data.domain.points
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Histogram Examples ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let mut visual = HistogramVisual::new();

    // Example 1: unweighted incomes, default bin count
    println!("1. Log-normal incomes, Sturges bins");
    let incomes = LogNormal::new(10.5, 0.6)?;
    let values: Vec<f64> = (0..500).map(|_| incomes.sample(&mut rng)).collect();

    let mut settings = HistogramSettings::default();
    settings.x_axis.display_units = 1000.0;
    settings.x_axis.style = AxisStyle::ShowBoth;
    settings.labels.precision = Some(0.0);

    let view = DataView::new(CategoryColumn::numeric(values.clone()).with_display_name("Income"))
        .with_settings(settings);
    println!("  status: {}", visual.update(&view));
    if let Some(data) = visual.data() {
        print_histogram(data);
    }

    // Example 2: weighted counts as density, with a widened X axis
    println!("\n2. Poisson counts weighted by household size, density");
    let counts = Poisson::new(4.0)?;
    let values: Vec<f64> = (0..200).map(|_| counts.sample(&mut rng)).collect();
    let weights: Vec<RawValue> = (0..200).map(|_| rng.gen_range(1i64..=6).into()).collect();

    let settings = HistogramSettings::from_json(
        r#"{
            "general": {"bins": 8, "frequency": false},
            "xAxis": {"start": -4, "end": 20},
            "yAxis": {"precision": 3}
        }"#,
    )?;
    let view = DataView::new(CategoryColumn::numeric(values).with_display_name("Visits"))
        .with_weights(weights)
        .with_settings(settings);
    println!("  status: {}", visual.update(&view));
    if let Some(data) = visual.data() {
        print_histogram(data);
        println!(
            "  corrected domain: {:?} .. {:?}",
            data.domain.corrected_min, data.domain.corrected_max
        );
    }

    // Example 3: a text column has nothing to render
    println!("\n3. Text column");
    let view = DataView::new(CategoryColumn {
        values: vec!["north".into(), "south".into()],
        ..Default::default()
    });
    println!("  status: {}", visual.update(&view));
    println!("  rendered data kept: {}", visual.data().is_some());

    Ok(())
}
