//! Host-update boundary

use std::fmt;

use histo_core::{EnglishLocalizer, FormatterFactory, Localizer, Result, StandardFormatterFactory};
use tracing::{debug, error, warn};

use crate::data::HistogramData;
use crate::pipeline::{converter, DataView};

/// Outcome of one host update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// A fresh result replaced the previous one
    Rendered,
    /// The input had nothing to render; the previous result was dropped
    Cleared,
    /// The computation failed; the previous result is kept
    Failed,
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Rendered => write!(f, "rendered"),
            UpdateStatus::Cleared => write!(f, "cleared"),
            UpdateStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Owns the last successful histogram and recomputes it on every update
///
/// Each update runs the full pipeline on fresh input; nothing carries over
/// from the previous computation except the result handed to the renderer.
pub struct HistogramVisual<F = StandardFormatterFactory, L = EnglishLocalizer> {
    factory: F,
    localizer: L,
    current: Option<HistogramData>,
}

impl HistogramVisual {
    /// A visual with the standard formatter and English strings
    pub fn new() -> Self {
        Self::with_collaborators(StandardFormatterFactory, EnglishLocalizer)
    }
}

impl Default for HistogramVisual {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormatterFactory, L: Localizer> HistogramVisual<F, L> {
    /// A visual using the host's formatter factory and localizer
    pub fn with_collaborators(factory: F, localizer: L) -> Self {
        Self {
            factory,
            localizer,
            current: None,
        }
    }

    /// Recompute from `view`
    pub fn update(&mut self, view: &DataView) -> UpdateStatus {
        let result = converter(view, &self.factory, &self.localizer);
        self.apply(result)
    }

    /// Recompute from a data view in the host's JSON
    pub fn update_json(&mut self, json: &str) -> UpdateStatus {
        let result = DataView::from_json(json)
            .and_then(|view| converter(&view, &self.factory, &self.localizer));
        self.apply(result)
    }

    fn apply(&mut self, result: Result<HistogramData>) -> UpdateStatus {
        match result {
            Ok(data) => {
                debug!("Rendering {} columns", data.len());
                self.current = Some(data);
                UpdateStatus::Rendered
            }
            Err(err) if err.is_invalid_input() => {
                warn!("Nothing to render: {}", err);
                self.current = None;
                UpdateStatus::Cleared
            }
            Err(err) => {
                error!("Histogram update failed: {}", err);
                UpdateStatus::Failed
            }
        }
    }

    /// The last successful result, if any
    pub fn data(&self) -> Option<&HistogramData> {
        self.current.as_ref()
    }

    /// Drop the current result
    pub fn clear(&mut self) {
        self.current = None;
    }
}
