//! Bounding rectangle of a set of bins

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Bin, Histogram};

/// Tightest rectangle enclosing every bin edge (X) and bin height (Y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderValues {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BorderValues {
    /// Scan the bins for their extrema
    ///
    /// Starts from `±f64::MAX` so any finite bin overwrites the sentinels;
    /// an empty slice returns the sentinels unchanged.
    pub fn from_bins(bins: &[Bin]) -> Self {
        let mut border = Self {
            min_x: f64::MAX,
            max_x: -f64::MAX,
            min_y: f64::MAX,
            max_y: -f64::MAX,
        };

        for bin in bins {
            for x in [bin.x0, bin.x1] {
                if x < border.min_x {
                    border.min_x = x;
                }
                if x > border.max_x {
                    border.max_x = x;
                }
            }

            if bin.y < border.min_y {
                border.min_y = bin.y;
            }
            if bin.y > border.max_y {
                border.max_y = bin.y;
            }
        }

        border
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl From<&Histogram> for BorderValues {
    fn from(histogram: &Histogram) -> Self {
        Self::from_bins(histogram.bins())
    }
}

impl fmt::Display for BorderValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=[{:.3}, {:.3}], y=[{:.3}, {:.3}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
