//! Axis legend text

use histo_core::{
    AggregationMode, AxisSettings, AxisStyle, FormatterFactory, FormatterOptions, LocalizedText,
    Localizer, StandardFormatterFactory,
};

/// Caption of the aggregated value: "Frequency" or "Density"
pub fn legend_text(mode: AggregationMode, localizer: &dyn Localizer) -> String {
    let key = match mode {
        AggregationMode::Frequency => LocalizedText::Frequency,
        AggregationMode::Density => LocalizedText::Density,
    };
    localizer.text(key).into_owned()
}

/// Legend for an axis titled `title` showing values in `display_unit`
///
/// Uses the standard display units; see [`axis_legend_with`].
pub fn axis_legend(title: &str, style: AxisStyle, display_unit: f64) -> String {
    axis_legend_with(&StandardFormatterFactory, title, style, display_unit)
}

/// Legend for an axis, resolving the unit through `factory`
///
/// A display unit of 0 (auto) or 1 (none), or one the formatter has no
/// unit for, leaves just the title. NaN is treated as "no unit".
pub fn axis_legend_with(
    factory: &dyn FormatterFactory,
    title: &str,
    style: AxisStyle,
    display_unit: f64,
) -> String {
    let formatter = factory.create(&FormatterOptions::new(display_unit));
    let unit = formatter
        .display_unit()
        .filter(|_| !(display_unit == 0.0 || display_unit == 1.0));

    match (style, unit) {
        (AxisStyle::ShowTitleOnly, _) | (_, None) => title.to_string(),
        (AxisStyle::ShowUnitOnly, Some(unit)) => unit.title.to_string(),
        (AxisStyle::ShowBoth, Some(unit)) => format!("{title} ({})", unit.title),
    }
}

/// X axis legend
///
/// The column's display name wins over the configured one; the axis
/// style then decides whether the unit is shown.
pub fn x_legend(
    column_display_name: Option<&str>,
    configured_display_name: Option<&str>,
    x_axis: &AxisSettings,
    factory: &dyn FormatterFactory,
) -> String {
    let title = column_display_name
        .filter(|name| !name.is_empty())
        .or(configured_display_name)
        .unwrap_or_default();

    axis_legend_with(factory, title, x_axis.style, x_axis.display_units)
}

/// Y axis legend: the aggregation caption with the Y axis unit applied
pub fn y_legend(
    mode: AggregationMode,
    y_axis: &AxisSettings,
    localizer: &dyn Localizer,
    factory: &dyn FormatterFactory,
) -> String {
    let title = legend_text(mode, localizer);
    axis_legend_with(factory, &title, y_axis.style, y_axis.display_units)
}
