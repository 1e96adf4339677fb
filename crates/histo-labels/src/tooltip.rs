//! Per-bin tooltip payload

use std::fmt;

use histo_core::{AggregationMode, LocalizedText, Localizer, ValueFormatter};
use serde::{Deserialize, Serialize};

use crate::legend::legend_text;
use crate::range::range_to_string;

/// One caption/value row of a tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

impl TooltipItem {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TooltipItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.value)
    }
}

/// Formatters and captions shared by every tooltip of one histogram
pub struct TooltipBuilder<'a> {
    legend: String,
    range_caption: String,
    y_formatter: &'a dyn ValueFormatter,
    x_formatter: &'a dyn ValueFormatter,
}

impl<'a> TooltipBuilder<'a> {
    pub fn new(
        mode: AggregationMode,
        localizer: &dyn Localizer,
        y_formatter: &'a dyn ValueFormatter,
        x_formatter: &'a dyn ValueFormatter,
    ) -> Self {
        Self {
            legend: legend_text(mode, localizer),
            range_caption: localizer.text(LocalizedText::TooltipRange).into_owned(),
            y_formatter,
            x_formatter,
        }
    }

    /// Tooltip rows for the bin at `index` with height `y` over `range`
    pub fn items(&self, y: f64, range: [f64; 2], index: usize) -> Vec<TooltipItem> {
        vec![
            TooltipItem::new(self.legend.as_str(), self.y_formatter.format(y)),
            TooltipItem::new(
                self.range_caption.as_str(),
                range_to_string(range, index == 0, self.x_formatter),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use histo_core::{EnglishLocalizer, FormatterOptions, StandardValueFormatter};

    #[test]
    fn test_tooltip_rows() {
        let y = StandardValueFormatter::new(&FormatterOptions::new(0.0).with_precision(Some(2)));
        let x = StandardValueFormatter::plain();
        let builder = TooltipBuilder::new(AggregationMode::Density, &EnglishLocalizer, &y, &x);

        let first = builder.items(0.43, [10.0, 20.0], 0);
        assert_eq!(
            first,
            vec![
                TooltipItem::new("Density", "0.43"),
                TooltipItem::new("Range", "[10, 20]"),
            ]
        );

        let second = builder.items(0.11, [20.0, 30.0], 1);
        assert_eq!(second[1].to_string(), "Range: (20, 30]");
    }
}
