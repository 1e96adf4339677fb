//! Display text for histogram bins and axes
//!
//! Pure helpers that turn bin geometry into the strings a chart shows:
//! interval notation for bin ranges, axis legends with display units,
//! per-bin tooltip rows and data label text.

pub mod label;
pub mod legend;
pub mod range;
pub mod tooltip;

pub use label::{data_label_text, px_from_point};
pub use legend::{axis_legend, axis_legend_with, legend_text, x_legend, y_legend};
pub use range::range_to_string;
pub use tooltip::{TooltipBuilder, TooltipItem};
