//! Axis domains for histogram charts
//!
//! Two stages sit between the binned histogram and the rendered axes:
//!
//! - [`AxisDomainResolver`] merges user-set axis bounds with the natural
//!   [`BorderValues`](histo_bins::BorderValues), clamping the result and
//!   never letting NaN through
//! - [`DomainAligner`] extends or trims the bin edge grid so the X axis
//!   ticks stay on multiples of the bin width
//!
//! # Example
//!
//! ```rust
//! use histo_axis::{AxisDomainResolver, DomainAligner};
//! use histo_bins::{fixed_histogram, samples_from_values, BorderValues, RawValue};
//! use histo_core::StandardValueFormatter;
//!
//! let values: Vec<RawValue> = (0..=10).map(|v| (v as f64).into()).collect();
//! let samples = samples_from_values(&values, None, None);
//! let histogram = fixed_histogram(&samples, 5).unwrap();
//! let border = BorderValues::from(&histogram);
//!
//! let x = AxisDomainResolver::new().resolve_x(Some(-4.0), None, &border);
//! let formatter = StandardValueFormatter::plain();
//! let domain = DomainAligner::new(&formatter).align(&x, &border, histogram.bins());
//!
//! assert_eq!(domain.points[..3], [-4.0, -2.0, 0.0]);
//! assert_eq!(domain.corrected_min, Some(-4.0));
//! ```

pub mod align;
pub mod resolve;

pub use align::{AlignedDomain, DomainAligner, MAX_ALIGNMENT_STEPS};
pub use resolve::{
    correct_x_axis_value, correct_y_axis_value, AxisDomainResolver, AxisRange, ResolvedAxes,
    MAX_X_AXIS_END_VALUE, MIN_X_AXIS_START_VALUE,
};
