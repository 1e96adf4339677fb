//! Core types shared by the histogram engine crates
//!
//! This crate holds the pieces every stage of the engine needs but none of
//! them owns:
//!
//! - **Errors**: one [`Error`] type and [`Result`] alias for all histo crates
//! - **Settings**: the host-supplied [`HistogramSettings`], decoded from JSON
//! - **Formatting**: the [`ValueFormatter`] / [`FormatterFactory`] collaborators
//! - **Localization**: display strings behind the [`Localizer`] trait
//!
//! # Example
//!
//! ```rust
//! use histo_core::{BinCount, FormatterFactory, FormatterOptions, HistogramSettings,
//!     StandardFormatterFactory};
//!
//! let settings = HistogramSettings::from_json(r#"{"general": {"bins": 12}}"#).unwrap();
//! assert_eq!(settings.general.bin_count(), BinCount::Fixed(12));
//!
//! let formatter = StandardFormatterFactory.create(&FormatterOptions::new(1000.0));
//! assert_eq!(formatter.format(2500.0), "2.5K");
//! ```

pub mod error;
pub mod format;
pub mod localization;
pub mod settings;

// Re-export core types
pub use error::{Error, Result};

pub use format::{
    display_unit_for, parse_leading_float, DisplayUnit, FormatterFactory, FormatterOptions,
    StandardFormatterFactory, StandardValueFormatter, ValueFormatter,
};
pub use localization::{EnglishLocalizer, LocalizedText, Localizer};
pub use settings::{
    AggregationMode, AxisPosition, AxisSettings, AxisStyle, BinCount, GeneralSettings,
    HistogramSettings, LabelSettings,
};
