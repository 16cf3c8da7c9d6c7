//! Axis option strings.
//!
//! Callers describe an axis with a short string, one character per switch,
//! as in PGPLOT (`"BCNST"`, `"ABCGLNST"`, ...). The string is parsed once
//! into [`AxisOptions`]; characters that mean nothing are ignored.

use crate::format::NumberFormat;
use std::convert::Infallible;
use std::str::FromStr;

/// Switches parsed from an axis option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisOptions {
    /// `A`: draw the zero axis (y = 0 for X options, x = 0 for Y options).
    pub axis: bool,
    /// `B`: draw the bottom (X) or left (Y) edge of the box.
    pub low_edge: bool,
    /// `C`: draw the top (X) or right (Y) edge of the box.
    pub high_edge: bool,
    /// `G`: draw grid lines at the major ticks.
    pub grid: bool,
    /// `I`: draw ticks outside the box instead of inside.
    pub invert_ticks: bool,
    /// `L`: logarithmic labelling; axis values are powers of ten.
    pub log: bool,
    /// `M`: numeric labels on the top (X) or right (Y) edge.
    pub labels_high: bool,
    /// `N`: numeric labels on the bottom (X) or left (Y) edge.
    pub labels_low: bool,
    /// `P`: extend major ticks outside the box.
    pub project_ticks: bool,
    /// `S`: draw minor ticks.
    pub minor_ticks: bool,
    /// `T`: draw major ticks.
    pub major_ticks: bool,
    /// `V`: write Y labels perpendicular to the axis.
    pub vertical_labels: bool,
    /// `1` forces decimal labels, `2` exponential labels.
    pub format: NumberFormat,
}

impl AxisOptions {
    /// Parse an option string. Matching is case-insensitive.
    ///
    /// ```
    /// use giza::options::AxisOptions;
    ///
    /// let opts = AxisOptions::parse("bcnst");
    /// assert!(opts.low_edge && opts.high_edge && opts.labels_low);
    /// assert!(!opts.log);
    /// ```
    #[must_use]
    pub fn parse(options: &str) -> Self {
        let mut parsed = Self::default();
        for c in options.chars() {
            match c.to_ascii_uppercase() {
                'A' => parsed.axis = true,
                'B' => parsed.low_edge = true,
                'C' => parsed.high_edge = true,
                'G' => parsed.grid = true,
                'I' => parsed.invert_ticks = true,
                'L' => parsed.log = true,
                'M' => parsed.labels_high = true,
                'N' => parsed.labels_low = true,
                'P' => parsed.project_ticks = true,
                'S' => parsed.minor_ticks = true,
                'T' => parsed.major_ticks = true,
                'V' => parsed.vertical_labels = true,
                '1' => parsed.format = NumberFormat::Decimal,
                '2' => parsed.format = NumberFormat::Exponential,
                _ => {}
            }
        }
        parsed
    }

    /// Whether any numeric labels are requested.
    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.labels_low || self.labels_high
    }

    /// Whether any ticks are requested.
    #[must_use]
    pub fn has_ticks(&self) -> bool {
        self.major_ticks || self.minor_ticks
    }
}

impl FromStr for AxisOptions {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for AxisOptions {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
