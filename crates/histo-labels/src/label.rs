//! Data labels drawn above the columns

use histo_core::ValueFormatter;

const PX_PER_INCH: f64 = 96.0;
const PT_PER_INCH: f64 = 72.0;

/// Convert a font size in points to pixels
pub fn px_from_point(pt: f64) -> f64 {
    pt * PX_PER_INCH / PT_PER_INCH
}

/// Text of a column's data label
pub fn data_label_text(y: f64, formatter: &dyn ValueFormatter) -> String {
    formatter.format(y)
}
