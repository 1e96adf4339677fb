//! Host-supplied settings
//!
//! The host persists these as JSON with camelCase keys. Every field has a
//! default so partial objects decode. Normalisation (bin count, precision)
//! happens through read-only accessors; the decoded values are never
//! rewritten during a computation.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Bin counts at or below this value fall back to the default
pub const MIN_NUMBER_OF_BINS: f64 = 0.0;
/// Upper bound for a user-configured bin count
pub const MAX_NUMBER_OF_BINS: usize = 5000;
/// Lowest accepted precision
pub const MIN_PRECISION: usize = 0;
/// Highest accepted precision
pub const MAX_PRECISION: usize = 17;

/// How bin heights are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Summed weight per bin
    Frequency,
    /// Summed weight per bin divided by the total weight
    Density,
}

/// Number of bins to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCount {
    /// Sturges' rule: `ceil(log2(n)) + 1`
    Auto,
    /// Exactly this many bins
    Fixed(usize),
}

impl BinCount {
    /// Resolve to a concrete bin count for `sample_len` samples
    ///
    /// # Examples
    ///
    /// ```rust
    /// use histo_core::BinCount;
    ///
    /// assert_eq!(BinCount::Auto.resolve(18), 6);
    /// assert_eq!(BinCount::Auto.resolve(1), 1);
    /// assert_eq!(BinCount::Fixed(3).resolve(1000), 3);
    /// ```
    pub fn resolve(self, sample_len: usize) -> usize {
        match self {
            BinCount::Fixed(n) => n.max(1),
            BinCount::Auto if sample_len <= 1 => 1,
            BinCount::Auto => (sample_len as f64).log2().ceil() as usize + 1,
        }
    }
}

/// Which labels an axis legend shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisStyle {
    /// Title only
    #[default]
    ShowTitleOnly,
    /// Display unit name only, falling back to the title
    ShowUnitOnly,
    /// Title followed by the display unit name
    ShowBoth,
}

/// Side of the chart an axis is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
}

/// General histogram settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    /// Requested bin count; may be fractional or out of range
    pub bins: Option<f64>,
    /// Frequency (true) or density (false) aggregation
    pub frequency: bool,
    /// Persisted chart title
    pub display_name: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            bins: None,
            frequency: true,
            display_name: None,
        }
    }
}

impl GeneralSettings {
    /// The validated bin count
    pub fn bin_count(&self) -> BinCount {
        let Some(bins) = self.bins else {
            return BinCount::Auto;
        };

        let rounded = bins.round();
        if rounded.is_nan() || rounded <= MIN_NUMBER_OF_BINS {
            BinCount::Auto
        } else if rounded >= MAX_NUMBER_OF_BINS as f64 {
            BinCount::Fixed(MAX_NUMBER_OF_BINS)
        } else {
            BinCount::Fixed(rounded as usize)
        }
    }

    /// The aggregation mode
    pub fn mode(&self) -> AggregationMode {
        if self.frequency {
            AggregationMode::Frequency
        } else {
            AggregationMode::Density
        }
    }
}

/// Settings shared by both axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisSettings {
    pub show: bool,
    /// User override for the axis start
    pub start: Option<f64>,
    /// User override for the axis end
    pub end: Option<f64>,
    /// Display unit value; 0 means automatic
    pub display_units: f64,
    pub precision: Option<f64>,
    /// Whether the axis title is shown
    pub title: bool,
    pub style: AxisStyle,
    pub position: AxisPosition,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            show: true,
            start: None,
            end: None,
            display_units: 0.0,
            precision: None,
            title: true,
            style: AxisStyle::ShowTitleOnly,
            position: AxisPosition::Left,
        }
    }
}

impl AxisSettings {
    /// Precision clamped into the accepted range
    pub fn precision(&self) -> Option<usize> {
        clamp_precision(self.precision)
    }
}

/// Data label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelSettings {
    pub show: bool,
    pub display_units: f64,
    pub precision: Option<f64>,
    /// Font size in points
    pub font_size: f64,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            show: false,
            display_units: 0.0,
            precision: None,
            font_size: 9.0,
        }
    }
}

impl LabelSettings {
    /// Precision clamped into the accepted range
    pub fn precision(&self) -> Option<usize> {
        clamp_precision(self.precision)
    }
}

/// All settings the host supplies for one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistogramSettings {
    pub general: GeneralSettings,
    pub x_axis: AxisSettings,
    pub y_axis: AxisSettings,
    pub labels: LabelSettings,
}

impl HistogramSettings {
    /// Decode settings from the host's JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the Y axis is drawn on the right
    pub fn shows_y_axis_on_right(&self) -> bool {
        self.y_axis.position == AxisPosition::Right
    }
}

fn clamp_precision(precision: Option<f64>) -> Option<usize> {
    let precision = precision.filter(|p| !p.is_nan())?;
    Some(precision.clamp(MIN_PRECISION as f64, MAX_PRECISION as f64).round() as usize)
}
