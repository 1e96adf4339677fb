//! Interval notation for bin ranges

use histo_core::ValueFormatter;

/// Bracket opening a range whose left border is included
pub const INCLUDE_LEFT_BRACKET: char = '[';
/// Bracket opening a range whose left border is excluded
pub const EXCLUDE_LEFT_BRACKET: char = '(';
/// Bracket closing every range; the right border is always included
pub const RIGHT_BRACKET: char = ']';
/// Separator between the two borders
pub const SEPARATOR: &str = ", ";

/// Format `[x0, x1]` as interval notation
///
/// Only the first bin includes its left border, matching the shifted bin
/// membership rule.
///
/// # Examples
///
/// ```rust
/// use histo_core::StandardValueFormatter;
/// use histo_labels::range_to_string;
///
/// let formatter = StandardValueFormatter::plain();
/// assert_eq!(range_to_string([5.0, 10.0], true, &formatter), "[5, 10]");
/// assert_eq!(range_to_string([5.0, 10.0], false, &formatter), "(5, 10]");
/// ```
pub fn range_to_string(
    range: [f64; 2],
    include_left_border: bool,
    formatter: &dyn ValueFormatter,
) -> String {
    let left_bracket = if include_left_border {
        INCLUDE_LEFT_BRACKET
    } else {
        EXCLUDE_LEFT_BRACKET
    };

    format!(
        "{left_bracket}{}{SEPARATOR}{}{RIGHT_BRACKET}",
        formatter.format(range[0]),
        formatter.format(range[1])
    )
}
