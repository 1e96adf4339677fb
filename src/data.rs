//! The engine's output record

use histo_axis::{AlignedDomain, AxisRange};
use histo_bins::{BorderValues, Sample};
use histo_core::HistogramSettings;
use histo_labels::TooltipItem;
use serde::Serialize;

/// One rendered column, built once with every display field populated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramDataPoint {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
    pub range: [f64; 2],
    pub tooltip: Vec<TooltipItem>,
    /// Samples counted in this column, for selection and highlighting
    #[serde(skip)]
    pub members: Vec<Sample>,
    /// Data label text
    pub label: String,
    pub label_font_size_px: f64,
}

impl HistogramDataPoint {
    /// Whether both borders of the range are finite
    pub fn has_finite_range(&self) -> bool {
        self.range.iter().all(|v| v.is_finite())
    }
}

/// Everything the rendering layer needs for one update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramData {
    pub data_points: Vec<HistogramDataPoint>,
    pub border_values: BorderValues,
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    /// Edge points for X axis ticks, with the corrected min/max
    pub domain: AlignedDomain,
    pub x_legend: String,
    pub y_legend: String,
    pub total_weight: f64,
    #[serde(skip)]
    pub settings: HistogramSettings,
}

impl HistogramData {
    /// At least one column and no NaN or infinite range border
    pub fn is_valid(&self) -> bool {
        !self.data_points.is_empty() && self.data_points.iter().all(HistogramDataPoint::has_finite_range)
    }

    /// Left border of the first column: the corrected minimum when the
    /// domain was aligned, otherwise the natural minimum
    pub fn first_column_start(&self) -> f64 {
        self.domain.corrected_min.unwrap_or(self.border_values.min_x)
    }

    /// Right border of the last column, preferring the corrected maximum
    pub fn last_column_end(&self) -> f64 {
        self.domain.corrected_max.unwrap_or(self.border_values.max_x)
    }

    pub fn shows_y_axis_on_right(&self) -> bool {
        self.settings.shows_y_axis_on_right()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}
