//! Tick interval selection.
//!
//! Chooses "nice" major tick spacings (1, 2 or 5 times a power of ten), the
//! number of minor subdivisions between majors, and the integer index range
//! of ticks covering an axis.

use crate::error::{Error, Result};

/// `log10(1..=9)`: positions of the nine sub-steps inside one decade.
pub const LOG_OFFSETS: [f64; 9] = [
    0.0,
    std::f64::consts::LOG10_2,
    0.477_121_254_719_662_4,
    0.602_059_991_327_962_4,
    0.698_970_004_336_018_8,
    0.778_151_250_383_643_6,
    0.845_098_040_014_256_8,
    0.903_089_986_991_943_6,
    0.954_242_509_439_324_9,
];

/// Candidate multipliers paired with their minor-subdivision hint.
const NICE: [(f64, i32); 3] = [(2.0, 2), (5.0, 5), (10.0, 5)];

/// Axis values at the start and end of an axis.
///
/// `min` is the value at the start and `max` the value at the end; reversed
/// axes have `min > max`. The two ends never coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Value at the start of the axis.
    pub min: f64,
    /// Value at the end of the axis.
    pub max: f64,
}

impl AxisRange {
    /// Create a new axis range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateRange`] if the ends coincide or are not finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(Error::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The default `[0, 1]` range substituted for degenerate input.
    #[must_use]
    pub const fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Absolute width of the range.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.max - self.min).abs()
    }

    /// Bounds sorted as `(low, high)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Position of `value` along the axis: 0 at the start, 1 at the end.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Whether `value` lies inside the range, allowing `tolerance` as a
    /// fraction of the width.
    #[must_use]
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        let f = self.fraction(value);
        f >= -tolerance && f <= 1.0 + tolerance
    }
}

/// Major tick spacing and the number of minor intervals per major interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpacing {
    /// Distance between major ticks, in axis units.
    pub major_interval: f64,
    /// Minor intervals per major interval (at least 1).
    pub minor_subdivisions: i32,
}

impl TickSpacing {
    /// Distance between consecutive (minor or major) ticks.
    #[must_use]
    pub fn minor_interval(&self) -> f64 {
        self.major_interval / f64::from(self.minor_subdivisions.max(1))
    }
}

/// Inputs to [`select_major_interval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalRequest {
    /// Logarithmic axis (values are powers of ten).
    pub log: bool,
    /// Requested major interval; 0 selects one automatically.
    pub tick: f64,
    /// Requested minor subdivisions, used with an explicit `tick`.
    pub subdivisions: i32,
    /// Whether minor ticks will be drawn.
    pub minor: bool,
    /// Approximate extent of one label along the axis, in device units.
    pub label_width: f64,
    /// Length of the axis, in the same device units.
    pub viewport_width: f64,
}

impl Default for IntervalRequest {
    fn default() -> Self {
        Self {
            log: false,
            tick: 0.0,
            subdivisions: 0,
            minor: true,
            label_width: 0.0,
            viewport_width: 0.0,
        }
    }
}

/// Round `x` up to 2, 5 or 10 times a power of ten.
///
/// Returns the rounded value (with the sign of `x`) and the suggested number
/// of minor subdivisions: 2 when the multiplier is 2, otherwise 5.
///
/// ```
/// use giza::ticks::nice_number;
///
/// assert_eq!(nice_number(0.0), (0.0, 2));
/// assert_eq!(nice_number(3.0), (5.0, 5));
/// ```
#[must_use]
pub fn nice_number(x: f64) -> (f64, i32) {
    if x.abs() < f64::MIN_POSITIVE {
        return (0.0, 2);
    }

    let xx = x.abs();
    let xlog = xx.log10();
    let mut ilog = xlog.trunc() as i32;
    if xlog < 0.0 {
        ilog -= 1;
    }

    let mut pwr = 10f64.powi(ilog);
    let mut frac = xx / pwr;
    if frac > 10.0 {
        pwr *= 10.0;
        frac /= 10.0;
    }

    let (multiplier, nsub) = NICE
        .iter()
        .copied()
        .find(|&(nice, _)| frac <= nice)
        .unwrap_or(NICE[2]);

    ((pwr * multiplier).copysign(x), nsub)
}

/// Choose the major tick interval and minor subdivision count for an axis.
///
/// Logarithmic axes always tick once per decade. Automatic spacing aims for a
/// major interval of 7 label widths, clamped to 5-20% of the axis.
#[must_use]
pub fn select_major_interval(range: &AxisRange, request: &IntervalRequest) -> TickSpacing {
    if request.log {
        return TickSpacing {
            major_interval: 1.0,
            minor_subdivisions: 1,
        };
    }

    if request.tick == 0.0 {
        let f = if request.viewport_width > 0.0 {
            7.0 * request.label_width / request.viewport_width
        } else {
            0.2
        };
        let f = f.clamp(0.05, 0.2);
        let (major, nsub) = nice_number(f * range.width());
        return TickSpacing {
            major_interval: major.abs(),
            minor_subdivisions: nsub,
        };
    }

    let minor_subdivisions = if request.subdivisions >= 1 && request.minor {
        request.subdivisions
    } else {
        1
    };
    TickSpacing {
        major_interval: request.tick.abs(),
        minor_subdivisions,
    }
}

/// Integer index range `(i1, i2)` of ticks at multiples of `spacing`.
///
/// The ends are `lo / spacing` and `hi / spacing` rounded to the nearest
/// integer (halves away from zero), so the range may reach one step past
/// either end; callers keep only indices whose value falls inside the axis.
/// A zero or non-finite spacing yields an empty range (`i1 > i2`).
#[must_use]
pub fn tick_index_range(range: &AxisRange, spacing: f64) -> (i64, i64) {
    if spacing == 0.0 || !spacing.is_finite() {
        tracing::warn!(spacing, "tick spacing is zero or not finite; no ticks drawn");
        return (1, 0);
    }

    let spacing = spacing.abs();
    let (lo, hi) = range.bounds();
    ((lo / spacing).round() as i64, (hi / spacing).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_offsets() {
        for (i, offset) in LOG_OFFSETS.iter().enumerate() {
            assert_relative_eq!(*offset, ((i + 1) as f64).log10(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_axis_range_rejects_degenerate() {
        assert!(AxisRange::new(1.0, 1.0).is_err());
        assert!(AxisRange::new(f64::NAN, 1.0).is_err());
        assert!(AxisRange::new(0.0, f64::INFINITY).is_err());
        assert!(AxisRange::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_axis_range_reversed() {
        let range = AxisRange::new(10.0, 0.0).unwrap();
        assert_eq!(range.bounds(), (0.0, 10.0));
        assert_relative_eq!(range.width(), 10.0);
        assert_relative_eq!(range.fraction(10.0), 0.0);
        assert_relative_eq!(range.fraction(2.5), 0.75);
        assert!(range.contains(0.0, 0.0));
        assert!(!range.contains(-1.0, 1e-9));
    }

    #[test]
    fn test_nice_number_zero() {
        assert_eq!(nice_number(0.0), (0.0, 2));
    }

    #[test]
    fn test_nice_number_values() {
        let cases = [
            (1.0, 2.0, 2),
            (1.5, 2.0, 2),
            (3.0, 5.0, 5),
            (7.0, 10.0, 5),
            (0.3, 0.5, 5),
            (0.015, 0.02, 2),
            (130.0, 200.0, 2),
            (4500.0, 5000.0, 5),
        ];
        for (x, expected, nsub) in cases {
            let (rounded, hint) = nice_number(x);
            assert_relative_eq!(rounded, expected, max_relative = 1e-12);
            assert_eq!(hint, nsub, "hint for {x}");
        }
    }

    #[test]
    fn test_nice_number_negative() {
        let (rounded, nsub) = nice_number(-7.0);
        assert_relative_eq!(rounded, -10.0);
        assert_eq!(nsub, 5);
    }

    #[test]
    fn test_select_log_interval() {
        let range = AxisRange::new(-2.0, 5.0).unwrap();
        let request = IntervalRequest {
            log: true,
            tick: 3.0,
            subdivisions: 4,
            ..IntervalRequest::default()
        };
        let spacing = select_major_interval(&range, &request);
        assert_relative_eq!(spacing.major_interval, 1.0);
        assert_eq!(spacing.minor_subdivisions, 1);
    }

    #[test]
    fn test_select_automatic_interval() {
        let range = AxisRange::new(0.0, 1.0).unwrap();
        let request = IntervalRequest {
            label_width: 50.0,
            viewport_width: 500.0,
            ..IntervalRequest::default()
        };
        let spacing = select_major_interval(&range, &request);
        assert!([0.05, 0.1, 0.2, 0.5]
            .iter()
            .any(|v| (v - spacing.major_interval).abs() < 1e-12));
        assert_eq!(tick_index_range(&range, spacing.major_interval).0, 0);
    }

    #[test]
    fn test_select_automatic_interval_lower_clamp() {
        // Narrow labels would give 0.7% spacing; clamped to 5%.
        let range = AxisRange::new(0.0, 100.0).unwrap();
        let request = IntervalRequest {
            label_width: 1.0,
            viewport_width: 1000.0,
            ..IntervalRequest::default()
        };
        let spacing = select_major_interval(&range, &request);
        assert_relative_eq!(spacing.major_interval, 5.0, max_relative = 1e-12);
        assert_eq!(spacing.minor_subdivisions, 5);
    }

    #[test]
    fn test_select_automatic_without_viewport() {
        let range = AxisRange::new(0.0, 7.0).unwrap();
        let spacing = select_major_interval(&range, &IntervalRequest::default());
        assert_relative_eq!(spacing.major_interval, 2.0, max_relative = 1e-12);
        assert_eq!(spacing.minor_subdivisions, 2);
    }

    #[test]
    fn test_select_explicit_interval() {
        let range = AxisRange::new(0.0, 10.0).unwrap();
        let request = IntervalRequest {
            tick: -2.5,
            subdivisions: 5,
            minor: true,
            ..IntervalRequest::default()
        };
        let spacing = select_major_interval(&range, &request);
        assert_relative_eq!(spacing.major_interval, 2.5);
        assert_eq!(spacing.minor_subdivisions, 5);
        assert_relative_eq!(spacing.minor_interval(), 0.5);

        let no_minor = IntervalRequest {
            minor: false,
            ..request
        };
        assert_eq!(select_major_interval(&range, &no_minor).minor_subdivisions, 1);

        let zero_sub = IntervalRequest {
            subdivisions: 0,
            ..request
        };
        assert_eq!(select_major_interval(&range, &zero_sub).minor_subdivisions, 1);
    }

    #[test]
    fn test_tick_index_range() {
        let range = AxisRange::new(0.0, 10.0).unwrap();
        assert_eq!(tick_index_range(&range, 2.0), (0, 5));
    }

    #[test]
    fn test_tick_index_range_rounds_half_away() {
        let range = AxisRange::new(-2.5, 2.5).unwrap();
        assert_eq!(tick_index_range(&range, 1.0), (-3, 3));
    }

    #[test]
    fn test_tick_index_range_reversed_axis() {
        let range = AxisRange::new(10.0, 0.0).unwrap();
        assert_eq!(tick_index_range(&range, 2.0), (0, 5));
    }

    #[test]
    fn test_tick_index_range_zero_spacing_is_empty() {
        let range = AxisRange::new(0.0, 10.0).unwrap();
        let (i1, i2) = tick_index_range(&range, 0.0);
        assert!(i1 > i2);
    }
}
