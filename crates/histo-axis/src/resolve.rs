//! Effective axis ranges from user overrides and natural bounds

use std::fmt;

use histo_bins::BorderValues;
use histo_core::AxisSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest value either axis may start or end at
pub const MAX_X_AXIS_END_VALUE: f64 = 1e25;

/// Smallest value the X axis may start at
pub const MIN_X_AXIS_START_VALUE: f64 = -1e25;

/// Resolved `[start, end]` of one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Distance between start and end
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Clamp an X axis value into `[MIN_X_AXIS_START_VALUE, MAX_X_AXIS_END_VALUE]`
///
/// NaN becomes zero.
pub fn correct_x_axis_value(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    value.min(MAX_X_AXIS_END_VALUE).max(MIN_X_AXIS_START_VALUE)
}

/// Clamp a Y axis value into `[0, MAX_X_AXIS_END_VALUE]`
///
/// NaN becomes zero. The floor is zero whatever the sign of the input.
pub fn correct_y_axis_value(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    value.min(MAX_X_AXIS_END_VALUE).max(0.0)
}

/// Both resolved axis ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxes {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Resolves the effective axis domains
///
/// User overrides win when they are set and consistent with the data;
/// otherwise the natural [`BorderValues`] are used. The result never
/// carries NaN and is clamped to the absolute axis limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisDomainResolver;

impl AxisDomainResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve both axes from their settings sections
    pub fn resolve(
        &self,
        x_axis: &AxisSettings,
        y_axis: &AxisSettings,
        border: &BorderValues,
    ) -> ResolvedAxes {
        let axes = ResolvedAxes {
            x: self.resolve_x(x_axis.start, x_axis.end, border),
            y: self.resolve_y(y_axis.start, y_axis.end, border),
        };

        debug!(x = %axes.x, y = %axes.y, %border, "resolved axis domains");
        axes
    }

    /// X axis: the end must lie right of the data minimum, the start left of
    /// the resolved end
    pub fn resolve_x(&self, start: Option<f64>, end: Option<f64>, border: &BorderValues) -> AxisRange {
        let end = match end {
            Some(end) if end > border.min_x => end,
            _ => border.max_x,
        };

        let start = match start {
            Some(start) if start < end => start,
            _ => border.min_x,
        };

        AxisRange::new(correct_x_axis_value(start), correct_x_axis_value(end))
    }

    /// Y axis: an unset start counts as zero; the end must lie above the start
    pub fn resolve_y(&self, start: Option<f64>, end: Option<f64>, border: &BorderValues) -> AxisRange {
        let user_start = start.unwrap_or(0.0);

        let end = match end {
            Some(end) if end > user_start => end,
            _ => border.max_y,
        };

        let start = if user_start < end { user_start } else { 0.0 };

        AxisRange::new(correct_y_axis_value(start), correct_y_axis_value(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border() -> BorderValues {
        BorderValues {
            min_x: 10.0,
            max_x: 70.0,
            min_y: 0.0,
            max_y: 43.0,
        }
    }

    #[test]
    fn test_correct_y_axis_value() {
        assert_eq!(correct_y_axis_value(f64::NAN), 0.0);
        assert_eq!(correct_y_axis_value(-5.0), 0.0);
        assert_eq!(correct_y_axis_value(1e300), MAX_X_AXIS_END_VALUE);
        assert_eq!(correct_y_axis_value(f64::INFINITY), MAX_X_AXIS_END_VALUE);
        assert_eq!(correct_y_axis_value(12.5), 12.5);
    }

    #[test]
    fn test_correct_x_axis_value() {
        assert_eq!(correct_x_axis_value(f64::MAX), MAX_X_AXIS_END_VALUE);
        assert_eq!(correct_x_axis_value(f64::MIN), MIN_X_AXIS_START_VALUE);
        assert_eq!(correct_x_axis_value(42.0), 42.0);
        assert_eq!(correct_x_axis_value(-42.0), -42.0);
        assert_eq!(correct_x_axis_value(f64::NAN), 0.0);
    }

    #[test]
    fn test_x_without_overrides_uses_border() {
        let range = AxisDomainResolver::new().resolve_x(None, None, &border());
        assert_eq!(range, AxisRange::new(10.0, 70.0));
    }

    #[test]
    fn test_x_overrides() {
        let resolver = AxisDomainResolver::new();

        assert_eq!(
            resolver.resolve_x(Some(-20.0), Some(100.0), &border()),
            AxisRange::new(-20.0, 100.0)
        );
        // end left of the data minimum is ignored
        assert_eq!(
            resolver.resolve_x(None, Some(5.0), &border()),
            AxisRange::new(10.0, 70.0)
        );
        // start right of the resolved end is ignored
        assert_eq!(
            resolver.resolve_x(Some(80.0), None, &border()),
            AxisRange::new(10.0, 70.0)
        );
        // NaN overrides fall back to the border
        assert_eq!(
            resolver.resolve_x(Some(f64::NAN), Some(f64::NAN), &border()),
            AxisRange::new(10.0, 70.0)
        );
    }

    #[test]
    fn test_y_inverted_override() {
        let range = AxisDomainResolver::new().resolve_y(Some(65.0), Some(33.0), &border());
        // end is not above start, so the natural maximum wins and start drops to zero
        assert_eq!(range, AxisRange::new(0.0, 43.0));
    }

    #[test]
    fn test_y_overrides() {
        let resolver = AxisDomainResolver::new();

        assert_eq!(resolver.resolve_y(None, None, &border()), AxisRange::new(0.0, 43.0));
        assert_eq!(
            resolver.resolve_y(Some(5.0), Some(50.0), &border()),
            AxisRange::new(5.0, 50.0)
        );
        assert_eq!(
            resolver.resolve_y(Some(-10.0), None, &border()),
            AxisRange::new(0.0, 43.0)
        );
        assert_eq!(
            resolver.resolve_y(Some(f64::NAN), Some(f64::NAN), &border()),
            AxisRange::new(0.0, 43.0)
        );
    }

    #[test]
    fn test_resolve_from_settings() {
        let x_axis = AxisSettings {
            start: Some(0.0),
            ..Default::default()
        };
        let y_axis = AxisSettings {
            end: Some(100.0),
            ..Default::default()
        };

        let axes = AxisDomainResolver::new().resolve(&x_axis, &y_axis, &border());
        assert_eq!(axes.x, AxisRange::new(0.0, 70.0));
        assert_eq!(axes.y, AxisRange::new(0.0, 100.0));
        assert_eq!(axes.y.span(), 100.0);
    }
}
