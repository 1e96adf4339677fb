//! Turning host columns into weighted samples

use std::fmt;
use std::sync::Arc;

use histo_core::{Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Columns with fewer values than this are rejected
pub const MIN_AMOUNT_OF_VALUES: usize = 2;
/// Substituted for values that are not finite numbers
pub const DEFAULT_VALUE: f64 = 0.0;
/// Weight used when the weight column has no valid entry
pub const DEFAULT_WEIGHT: f64 = 1.0;
/// Weights must be strictly greater than this
pub const MIN_WEIGHT: f64 = 0.0;
/// Starting point of the total weight sum
pub const BASE_TOTAL_WEIGHT: f64 = 0.0;

/// A single cell as the host delivers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

/// Numeric conversion of host cells
///
/// `Null` converts to zero and booleans to zero or one. Text converts when
/// it parses as a number (blank text is zero); anything else has no
/// numeric value.
impl ToPrimitive for RawValue {
    fn to_i64(&self) -> Option<i64> {
        self.to_f64().and_then(|v| v.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_f64().and_then(|v| v.to_u64())
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            RawValue::Null => Some(0.0),
            RawValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            RawValue::Integer(i) => Some(*i as f64),
            RawValue::Number(n) => Some(*n),
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(0.0)
                } else {
                    text.parse::<f64>().ok()
                }
            }
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Type metadata of a host column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnType {
    pub numeric: bool,
    pub integer: bool,
}

impl ColumnType {
    /// Floating point column
    pub fn numeric() -> Self {
        Self { numeric: true, integer: false }
    }

    /// Integer column
    pub fn integer() -> Self {
        Self { numeric: false, integer: true }
    }

    /// Whether values in this column can be binned
    pub fn is_numeric(&self) -> bool {
        self.numeric || self.integer
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.numeric, self.integer) {
            (true, _) => write!(f, "numeric"),
            (false, true) => write!(f, "integer"),
            (false, false) => write!(f, "non-numeric"),
        }
    }
}

/// The category column the histogram is built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryColumn {
    pub display_name: Option<String>,
    pub query_name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub values: Vec<RawValue>,
}

impl CategoryColumn {
    /// Numeric column with the given values
    pub fn numeric<V: Into<RawValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            column_type: ColumnType::numeric(),
            values: values.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the query name used to build row identities
    pub fn with_query_name(mut self, query_name: &str) -> Self {
        self.query_name = Some(query_name.to_string());
        self
    }

    /// Set the column display name
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }
}

/// Opaque identity of one input row
///
/// Carried through binning untouched so selection can map bins back to rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionId {
    query_name: Option<Arc<str>>,
    index: usize,
}

impl SelectionId {
    /// Identity for row `index` of the column named `query_name`
    pub fn for_category(query_name: Option<Arc<str>>, index: usize) -> Self {
        Self { query_name, index }
    }

    pub fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A numeric reading with its weight and row identity
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub weight: f64,
    pub identity: SelectionId,
}

/// Whether the column carries numeric or integer type metadata
pub fn are_values_numbers(column: &CategoryColumn) -> bool {
    column.column_type.is_numeric()
}

/// Coerce a raw cell; non-finite results become [`DEFAULT_VALUE`]
pub fn coerce_value(raw: &RawValue) -> f64 {
    raw.to_f64().filter(|v| v.is_finite()).unwrap_or(DEFAULT_VALUE)
}

/// Weight for a raw weight cell; only finite positive weights are kept
pub fn coerce_weight(raw: Option<&RawValue>) -> f64 {
    raw.and_then(ToPrimitive::to_f64)
        .filter(|w| w.is_finite() && *w > MIN_WEIGHT)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Build one sample per value, preserving input order
///
/// `weights` is the parallel weight column; missing or invalid entries
/// weigh [`DEFAULT_WEIGHT`].
pub fn samples_from_values(
    values: &[RawValue],
    weights: Option<&[RawValue]>,
    query_name: Option<&str>,
) -> Vec<Sample> {
    let query_name: Option<Arc<str>> = query_name.map(Arc::from);

    values
        .iter()
        .enumerate()
        .map(|(index, raw)| Sample {
            value: coerce_value(raw),
            weight: coerce_weight(weights.and_then(|w| w.get(index))),
            identity: SelectionId::for_category(query_name.clone(), index),
        })
        .collect()
}

/// Grand total of all sample weights
pub fn total_weight(samples: &[Sample]) -> f64 {
    samples.iter().fold(BASE_TOTAL_WEIGHT, |acc, s| acc + s.weight)
}

/// Validates host columns and extracts samples from them
#[derive(Debug, Clone)]
pub struct SampleExtractor {
    min_values: usize,
}

impl Default for SampleExtractor {
    fn default() -> Self {
        Self {
            min_values: MIN_AMOUNT_OF_VALUES,
        }
    }
}

impl SampleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of values a column must hold
    pub fn with_min_values(mut self, min_values: usize) -> Self {
        self.min_values = min_values;
        self
    }

    /// Validate the category column and extract its samples
    ///
    /// Fails when the column is absent, empty, not numeric, or shorter
    /// than the configured minimum.
    pub fn extract(
        &self,
        column: Option<&CategoryColumn>,
        weights: Option<&[RawValue]>,
    ) -> Result<Vec<Sample>> {
        let column =
            column.ok_or_else(|| Error::InvalidInput("category column is missing".to_string()))?;

        if column.values.is_empty() {
            return Err(Error::empty_input("category column"));
        }

        if !are_values_numbers(column) {
            return Err(Error::InvalidColumnType {
                expected: "numeric or integer".to_string(),
                got: column.column_type.to_string(),
            });
        }

        if column.values.len() < self.min_values {
            return Err(Error::InsufficientData {
                expected: self.min_values,
                actual: column.values.len(),
            });
        }

        Ok(samples_from_values(
            &column.values,
            weights,
            column.query_name.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_coercion() {
        assert_eq!(coerce_value(&RawValue::Number(4.5)), 4.5);
        assert_eq!(coerce_value(&RawValue::Integer(-3)), -3.0);
        assert_eq!(coerce_value(&RawValue::Text(" 12 ".into())), 12.0);
        assert_eq!(coerce_value(&RawValue::Text("twelve".into())), DEFAULT_VALUE);
        assert_eq!(coerce_value(&RawValue::Number(f64::NAN)), DEFAULT_VALUE);
        assert_eq!(coerce_value(&RawValue::Number(f64::INFINITY)), DEFAULT_VALUE);
        assert_eq!(coerce_value(&RawValue::Null), 0.0);
        assert_eq!(coerce_value(&RawValue::Bool(true)), 1.0);
    }

    #[test]
    fn test_weight_coercion() {
        assert_eq!(coerce_weight(None), DEFAULT_WEIGHT);
        assert_eq!(coerce_weight(Some(&RawValue::Number(7.0))), 7.0);
        assert_eq!(coerce_weight(Some(&RawValue::Number(0.0))), DEFAULT_WEIGHT);
        assert_eq!(coerce_weight(Some(&RawValue::Number(-2.0))), DEFAULT_WEIGHT);
        assert_eq!(coerce_weight(Some(&RawValue::Number(f64::NAN))), DEFAULT_WEIGHT);
        assert_eq!(coerce_weight(Some(&RawValue::Null)), DEFAULT_WEIGHT);
        assert_eq!(coerce_weight(Some(&RawValue::Text("2.5".into()))), 2.5);
    }

    #[test]
    fn test_samples_preserve_order_and_identity() {
        let values: Vec<RawValue> = vec![3.0.into(), "x".into(), 1.0.into()];
        let weights: Vec<RawValue> = vec![2.0.into(), 0.0.into()];
        let samples = samples_from_values(&values, Some(&weights), Some("Table.Amount"));

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].value, 3.0);
        assert_eq!(samples[0].weight, 2.0);
        assert_eq!(samples[1].value, DEFAULT_VALUE);
        assert_eq!(samples[1].weight, DEFAULT_WEIGHT);
        // shorter weight column
        assert_eq!(samples[2].weight, DEFAULT_WEIGHT);
        assert_eq!(samples[2].identity.index(), 2);
        assert_eq!(samples[2].identity.query_name(), Some("Table.Amount"));
        assert_eq!(total_weight(&samples), 4.0);
    }

    #[test]
    fn test_single_value_without_weights() {
        let samples = samples_from_values(&[RawValue::Number(1.0)], None, None);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].weight, 1.0);
        assert_eq!(samples[0].identity.query_name(), None);
    }

    #[test]
    fn test_extractor_rejections() {
        let extractor = SampleExtractor::new();

        assert!(matches!(extractor.extract(None, None), Err(Error::InvalidInput(_))));

        let empty = CategoryColumn { column_type: ColumnType::numeric(), ..Default::default() };
        assert!(matches!(extractor.extract(Some(&empty), None), Err(Error::InvalidInput(_))));

        let text = CategoryColumn {
            values: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        match extractor.extract(Some(&text), None) {
            Err(Error::InvalidColumnType { got, .. }) => assert_eq!(got, "non-numeric"),
            other => panic!("unexpected result: {other:?}"),
        }

        let single = CategoryColumn::numeric([1.0]);
        match extractor.extract(Some(&single), None) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let relaxed = SampleExtractor::new().with_min_values(1);
        assert_eq!(relaxed.extract(Some(&single), None).unwrap().len(), 1);
    }

    #[test]
    fn test_integer_column_accepted() {
        let column = CategoryColumn {
            column_type: ColumnType::integer(),
            values: vec![1i64.into(), 2i64.into()],
            ..Default::default()
        };
        assert!(are_values_numbers(&column));
        assert_eq!(SampleExtractor::new().extract(Some(&column), None).unwrap().len(), 2);
    }

    #[test]
    fn test_raw_values_from_json() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[1, 2.5, null, "7", true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Integer(1),
                RawValue::Number(2.5),
                RawValue::Null,
                RawValue::Text("7".into()),
                RawValue::Bool(true),
            ]
        );
    }
}
