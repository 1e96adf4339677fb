//! The forward pipeline: extract, bin, bound, resolve, align, label

use histo_axis::{AxisDomainResolver, DomainAligner};
use histo_bins::{
    BorderValues, CategoryColumn, EqualWidthBuilder, HistogramBuilder, RawValue, SampleExtractor,
};
use histo_core::{
    Error, FormatterFactory, FormatterOptions, HistogramSettings, Localizer, Result,
};
use histo_labels::{data_label_text, px_from_point, x_legend, y_legend, TooltipBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::data::{HistogramData, HistogramDataPoint};

/// One host update: the bound columns and the current settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataView {
    pub category: Option<CategoryColumn>,
    /// Parallel weight column
    pub weights: Option<Vec<RawValue>>,
    pub settings: HistogramSettings,
}

impl DataView {
    /// Decode a data view from the host's JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn new(category: CategoryColumn) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    pub fn with_weights(mut self, weights: Vec<RawValue>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_settings(mut self, settings: HistogramSettings) -> Self {
        self.settings = settings;
        self
    }

    fn value_count(&self) -> usize {
        self.category.as_ref().map_or(0, |c| c.values.len())
    }
}

/// Run the whole pipeline over a data view
///
/// Returns an invalid-input error when the columns cannot be binned or the
/// resulting bins have non-finite ranges. Settings are never written back;
/// every derived value is part of the returned [`HistogramData`].
#[instrument(skip_all, fields(values = view.value_count(), weighted = view.weights.is_some()))]
pub fn converter(
    view: &DataView,
    factory: &dyn FormatterFactory,
    localizer: &dyn Localizer,
) -> Result<HistogramData> {
    let settings = &view.settings;
    let mode = settings.general.mode();

    let samples = SampleExtractor::new().extract(view.category.as_ref(), view.weights.as_deref())?;

    let histogram = EqualWidthBuilder::new(settings.general.bin_count())
        .mode(mode)
        .build(&samples)?;
    debug!("Built {}", histogram);

    let border = BorderValues::from(&histogram);
    let axes = AxisDomainResolver::new().resolve(&settings.x_axis, &settings.y_axis, &border);

    let last_value = samples.last().map_or(0.0, |s| s.value);
    let x_unit = if settings.x_axis.display_units == 0.0 {
        last_value
    } else {
        settings.x_axis.display_units
    };
    let x_formatter =
        factory.create(&FormatterOptions::new(x_unit).with_precision(settings.x_axis.precision()));
    let y_formatter = factory.create(
        &FormatterOptions::new(settings.y_axis.display_units)
            .with_precision(settings.y_axis.precision()),
    );
    let label_formatter = factory.create(
        &FormatterOptions::new(settings.labels.display_units)
            .with_precision(settings.labels.precision()),
    );

    let domain = DomainAligner::new(&*x_formatter).align(&axes.x, &border, histogram.bins());

    let tooltips = TooltipBuilder::new(mode, localizer, &*y_formatter, &*x_formatter);
    let label_font_size_px = px_from_point(settings.labels.font_size);
    let total_weight = histogram.total_weight();

    let data_points: Vec<HistogramDataPoint> = histogram
        .into_bins()
        .into_iter()
        .enumerate()
        .map(|(index, bin)| {
            let range = bin.range();
            HistogramDataPoint {
                x0: bin.x0,
                x1: bin.x1,
                y: bin.y,
                range,
                tooltip: tooltips.items(bin.y, range, index),
                label: data_label_text(bin.y, &*label_formatter),
                label_font_size_px,
                members: bin.members,
            }
        })
        .collect();

    let column_name = view.category.as_ref().and_then(|c| c.display_name.as_deref());
    let data = HistogramData {
        data_points,
        border_values: border,
        x_axis: axes.x,
        y_axis: axes.y,
        domain,
        x_legend: x_legend(
            column_name,
            settings.general.display_name.as_deref(),
            &settings.x_axis,
            factory,
        ),
        y_legend: y_legend(mode, &settings.y_axis, localizer, factory),
        total_weight,
        settings: settings.clone(),
    };

    if !data.is_valid() {
        return Err(Error::non_finite("bin ranges"));
    }

    debug!(
        "Converted {} samples into {} columns, x={}, y={}",
        samples.len(),
        data.len(),
        data.x_axis,
        data.y_axis
    );

    Ok(data)
}
