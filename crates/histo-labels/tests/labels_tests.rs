//! Label helpers driven through host-style formatters

use histo_core::{
    AggregationMode, AxisStyle, DisplayUnit, EnglishLocalizer, FormatterFactory, FormatterOptions,
    ValueFormatter,
};
use histo_labels::*;

/// Formats with a trailing percent sign and never reports a unit
struct PercentFormatter;

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        format!("{}%", value * 100.0)
    }
}

/// Always scales into a fixed custom unit
struct ScoreFactory;

const SCORE_UNIT: DisplayUnit = DisplayUnit {
    value: 10.0,
    label: "pts",
    title: "Points",
};

struct ScoreFormatter;

impl ValueFormatter for ScoreFormatter {
    fn format(&self, value: f64) -> String {
        format!("{}pts", value / SCORE_UNIT.value)
    }

    fn display_unit(&self) -> Option<&DisplayUnit> {
        Some(&SCORE_UNIT)
    }
}

impl FormatterFactory for ScoreFactory {
    fn create(&self, _options: &FormatterOptions) -> Box<dyn ValueFormatter> {
        Box::new(ScoreFormatter)
    }
}

#[test]
fn test_range_with_custom_formatter() {
    assert_eq!(range_to_string([0.25, 0.5], true, &PercentFormatter), "[25%, 50%]");
    assert_eq!(range_to_string([0.5, 0.75], false, &PercentFormatter), "(50%, 75%]");
}

#[test]
fn test_axis_legend_with_custom_factory() {
    assert_eq!(
        axis_legend_with(&ScoreFactory, "Score", AxisStyle::ShowBoth, 10.0),
        "Score (Points)"
    );
    // auto and none never show a unit, whatever the factory says
    assert_eq!(
        axis_legend_with(&ScoreFactory, "Score", AxisStyle::ShowUnitOnly, 0.0),
        "Score"
    );
    assert_eq!(
        axis_legend_with(&ScoreFactory, "Score", AxisStyle::ShowUnitOnly, 1.0),
        "Score"
    );
}

#[test]
fn test_axis_legend_nan_falls_back_to_title() {
    for style in [AxisStyle::ShowTitleOnly, AxisStyle::ShowUnitOnly, AxisStyle::ShowBoth] {
        assert_eq!(axis_legend("Sales", style, f64::NAN), "Sales");
    }
}

#[test]
fn test_tooltip_with_custom_formatters() {
    let builder = TooltipBuilder::new(
        AggregationMode::Frequency,
        &EnglishLocalizer,
        &ScoreFormatter,
        &PercentFormatter,
    );
    let items = builder.items(40.0, [0.25, 0.5], 3);

    assert_eq!(items[0], TooltipItem::new("Frequency", "4pts"));
    assert_eq!(items[1], TooltipItem::new("Range", "(25%, 50%]"));
}
