//! Weighted histogram engine for interactive charts
//!
//! `histo-visual` turns a host's raw numeric column (with optional weights)
//! into everything a histogram chart draws: equal-width bins with their
//! frequency or density, safe axis ranges, a tick grid aligned with the
//! bin width, and per-column tooltip and label text.
//!
//! ## Pipeline
//!
//! Data flows strictly forward, one fresh computation per host update:
//!
//! 1. [`SampleExtractor`](histo_bins::SampleExtractor) validates the column
//!    and builds weighted samples
//! 2. [`EqualWidthBuilder`](histo_bins::EqualWidthBuilder) bins them
//! 3. [`BorderValues`](histo_bins::BorderValues) bounds the bins
//! 4. [`AxisDomainResolver`](histo_axis::AxisDomainResolver) merges user
//!    axis overrides with the bounds
//! 5. [`DomainAligner`](histo_axis::DomainAligner) extends or trims the
//!    edge grid to the X axis range
//! 6. `histo-labels` formats tooltips, legends and data labels
//!
//! [`converter`] runs the whole pipeline; [`HistogramVisual`] wraps it at
//! the host-update boundary.
//!
//! ## Example
//!
//! ```rust
//! use histo_visual::prelude::*;
//!
//! let column = CategoryColumn::numeric([10.0, 20.0, 25.0, 30.0, 40.0, 70.0])
//!     .with_display_name("Age");
//! let view = DataView::new(column).with_weights(vec![2.0.into(); 6]);
//!
//! let mut visual = HistogramVisual::new();
//! assert_eq!(visual.update(&view), UpdateStatus::Rendered);
//!
//! let data = visual.data().unwrap();
//! assert_eq!(data.total_weight, 12.0);
//! assert_eq!(data.x_legend, "Age");
//! assert_eq!(data.data_points[0].tooltip[1].value, "[10, 25]");
//! ```

pub mod data;
pub mod engine;
pub mod pipeline;

pub use data::{HistogramData, HistogramDataPoint};
pub use engine::{HistogramVisual, UpdateStatus};
pub use pipeline::{converter, DataView};

// Re-export the workspace crates
pub use histo_axis;
pub use histo_bins;
pub use histo_core;
pub use histo_labels;

pub use histo_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{converter, DataView, HistogramData, HistogramVisual, UpdateStatus};

    pub use histo_axis::{AlignedDomain, AxisDomainResolver, AxisRange, DomainAligner};
    pub use histo_bins::{
        BorderValues, CategoryColumn, EqualWidthBuilder, HistogramBuilder, RawValue, Sample,
        SampleExtractor,
    };
    pub use histo_core::{
        AggregationMode, BinCount, EnglishLocalizer, Error, FormatterFactory, HistogramSettings,
        Localizer, Result, StandardFormatterFactory, ValueFormatter,
    };
    pub use histo_labels::{range_to_string, TooltipItem};
}
