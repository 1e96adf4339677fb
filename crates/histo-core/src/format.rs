//! Value formatting collaborators
//!
//! Tick text, tooltip values and the aligner's edge comparisons all go
//! through a [`ValueFormatter`]. Hosts with their own number formatting
//! plug in a [`FormatterFactory`]; [`StandardFormatterFactory`] covers the
//! common case of display-unit scaling with an optional fixed precision.

use std::fmt;

/// A display unit that values are scaled into before formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayUnit {
    /// Divisor applied to formatted values
    pub value: f64,
    /// Short suffix appended to formatted values
    pub label: &'static str,
    /// Long name used in axis legends
    pub title: &'static str,
}

/// Display units in ascending order
pub const DISPLAY_UNITS: [DisplayUnit; 4] = [
    DisplayUnit { value: 1e3, label: "K", title: "Thousands" },
    DisplayUnit { value: 1e6, label: "M", title: "Millions" },
    DisplayUnit { value: 1e9, label: "bn", title: "Billions" },
    DisplayUnit { value: 1e12, label: "T", title: "Trillions" },
];

/// Pick the largest display unit not exceeding `magnitude`
///
/// Zero, values below one thousand and non-finite magnitudes have no unit.
pub fn display_unit_for(magnitude: f64) -> Option<&'static DisplayUnit> {
    if !magnitude.is_finite() {
        return None;
    }

    DISPLAY_UNITS.iter().rev().find(|unit| magnitude >= unit.value)
}

/// Formats numbers for display
pub trait ValueFormatter {
    /// Format a single value
    fn format(&self, value: f64) -> String;

    /// The display unit this formatter scales into, if any
    fn display_unit(&self) -> Option<&DisplayUnit> {
        None
    }
}

impl<F: ValueFormatter + ?Sized> ValueFormatter for Box<F> {
    fn format(&self, value: f64) -> String {
        (**self).format(value)
    }

    fn display_unit(&self) -> Option<&DisplayUnit> {
        (**self).display_unit()
    }
}

/// Options used to create a formatter
///
/// There is no separate display-units field: the histogram passes an axis'
/// configured `displayUnits` (1000, 1e6, ...) as `value`, and a formatter
/// scales by the unit whose magnitude `value` falls in. A display-units
/// setting of 0 (auto) passes a representative data value instead, or 0 for
/// no scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatterOptions {
    /// Representative value used to pick the unit; doubles as the
    /// display-unit selector
    pub value: f64,
    /// Optional second representative value; the larger magnitude wins
    pub value2: Option<f64>,
    /// Fixed number of decimal places
    pub precision: Option<usize>,
}

impl FormatterOptions {
    /// Options keyed on a single representative value
    pub fn new(value: f64) -> Self {
        Self {
            value,
            value2: None,
            precision: None,
        }
    }

    /// Set the second representative value
    pub fn with_value2(mut self, value2: f64) -> Self {
        self.value2 = Some(value2);
        self
    }

    /// Set the fixed precision
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    fn magnitude(&self) -> f64 {
        match self.value2 {
            Some(value2) => self.value.abs().max(value2.abs()),
            None => self.value.abs(),
        }
    }
}

/// Creates formatters from options
pub trait FormatterFactory {
    /// Create a formatter for the given options
    fn create(&self, options: &FormatterOptions) -> Box<dyn ValueFormatter>;
}

/// Display-unit aware formatter with optional fixed precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardValueFormatter {
    unit: Option<&'static DisplayUnit>,
    precision: Option<usize>,
}

impl StandardValueFormatter {
    /// Create a formatter for the given options
    pub fn new(options: &FormatterOptions) -> Self {
        Self {
            unit: display_unit_for(options.magnitude()),
            precision: options.precision,
        }
    }

    /// A formatter that prints values unchanged
    pub fn plain() -> Self {
        Self {
            unit: None,
            precision: None,
        }
    }
}

impl ValueFormatter for StandardValueFormatter {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let scaled = match self.unit {
            Some(unit) => value / unit.value,
            None => value,
        };
        // avoid "-0"
        let scaled = if scaled == 0.0 { 0.0 } else { scaled };

        let mut text = match self.precision {
            Some(precision) => format!("{scaled:.precision$}"),
            None => scaled.to_string(),
        };

        if let Some(unit) = self.unit {
            text.push_str(unit.label);
        }

        text
    }

    fn display_unit(&self) -> Option<&DisplayUnit> {
        self.unit
    }
}

impl fmt::Display for StandardValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.unit, self.precision) {
            (Some(unit), Some(p)) => write!(f, "StandardValueFormatter({}, precision={p})", unit.title),
            (Some(unit), None) => write!(f, "StandardValueFormatter({})", unit.title),
            (None, Some(p)) => write!(f, "StandardValueFormatter(precision={p})"),
            (None, None) => write!(f, "StandardValueFormatter"),
        }
    }
}

/// Factory producing [`StandardValueFormatter`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormatterFactory;

impl FormatterFactory for StandardFormatterFactory {
    fn create(&self, options: &FormatterOptions) -> Box<dyn ValueFormatter> {
        Box::new(StandardValueFormatter::new(options))
    }
}

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped and trailing unit suffixes are ignored,
/// so `"12.5K"` parses as `12.5`. Returns NaN when no prefix is numeric.
///
/// # Examples
///
/// ```rust
/// use histo_core::format::parse_leading_float;
///
/// assert_eq!(parse_leading_float(" 12.5K"), 12.5);
/// assert_eq!(parse_leading_float("-3e2 units"), -300.0);
/// assert!(parse_leading_float("bn").is_nan());
/// ```
pub fn parse_leading_float(text: &str) -> f64 {
    let trimmed = text.trim_start();

    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    if unsigned.starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let candidate_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..candidate_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
