//! Tick and label positions along one axis.
//!
//! Positions are fractions of the axis length (0 at the start, 1 at the end)
//! so the same marks serve every edge that shows the axis.

use crate::format::{decade_label, format_number, NumberFormat};
use crate::ticks::{tick_index_range, AxisRange, TickSpacing, LOG_OFFSETS};

/// Largest number of candidate ticks or labels computed in one pass.
pub const MAX_MARKS: i64 = 10_000;

/// Fractional slack used when comparing positions with the axis ends.
const END_TOLERANCE: f64 = 1e-6;

/// Which positions at the very ends of the axis are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ends {
    /// Keep only positions strictly inside the axis.
    Exclude,
    /// Keep positions at the ends too.
    Include,
}

impl Ends {
    fn accepts(self, fraction: f64) -> bool {
        match self {
            Self::Exclude => fraction > END_TOLERANCE && fraction < 1.0 - END_TOLERANCE,
            Self::Include => fraction >= -END_TOLERANCE && fraction <= 1.0 + END_TOLERANCE,
        }
    }
}

/// One tick position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Axis value at the tick.
    pub value: f64,
    /// Position along the axis, 0 at the start and 1 at the end.
    pub fraction: f64,
    /// Whether this is a major tick.
    pub major: bool,
}

/// One numeric label position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMark {
    /// Axis value at the label.
    pub value: f64,
    /// Position along the axis, 0 at the start and 1 at the end.
    pub fraction: f64,
    /// Formatted label, possibly with exponent markup.
    pub text: String,
}

fn too_many(count: i64, what: &str) -> bool {
    if count > MAX_MARKS {
        tracing::warn!(count, limit = MAX_MARKS, "too many {what}; skipped");
        true
    } else {
        false
    }
}

/// Tick positions for `spacing` over `range`.
///
/// Linear axes tick every `major / nsub` and mark every `nsub`th tick as
/// major. Logarithmic axes (values are powers of ten) tick at `log10(1..=9)`
/// within each decade, with the decade itself major.
#[must_use]
pub fn tick_marks(range: &AxisRange, spacing: &TickSpacing, log: bool, ends: Ends) -> Vec<TickMark> {
    let mut marks = Vec::new();

    if log {
        let (i1, i2) = tick_index_range(range, 1.0);
        if too_many((i2 - i1 + 2).saturating_mul(LOG_OFFSETS.len() as i64), "log ticks") {
            return marks;
        }
        for decade in (i1 - 1)..=i2 {
            for (j, offset) in LOG_OFFSETS.iter().enumerate() {
                let value = decade as f64 + offset;
                let fraction = range.fraction(value);
                if ends.accepts(fraction) {
                    marks.push(TickMark {
                        value,
                        fraction,
                        major: j == 0,
                    });
                }
            }
        }
        return marks;
    }

    let nsub = i64::from(spacing.minor_subdivisions.max(1));
    let step = spacing.minor_interval();
    let (i1, i2) = tick_index_range(range, step);
    if too_many(i2.saturating_sub(i1).saturating_add(1), "ticks") {
        return marks;
    }
    for i in i1..=i2 {
        let value = i as f64 * step;
        let fraction = range.fraction(value);
        if ends.accepts(fraction) {
            marks.push(TickMark {
                value,
                fraction,
                major: i.rem_euclid(nsub) == 0,
            });
        }
    }
    marks
}

/// Numeric labels at the major ticks of a linear axis, or at the decades of
/// a logarithmic one. Labels at the axis ends are kept.
///
/// Linear labels are `format_number(i * nv, np)` where `major == nv * 10^np`
/// for integer `nv`, so every label of one axis shares a power of ten. A logarithmic axis spanning less than two
/// decades also gets labels at 2 and 5 times each decade.
#[must_use]
pub fn label_marks(range: &AxisRange, major: f64, log: bool, format: NumberFormat) -> Vec<LabelMark> {
    let mut marks = Vec::new();

    if log {
        let (i1, i2) = tick_index_range(range, 1.0);
        if too_many(i2.saturating_sub(i1).saturating_add(2), "labels") {
            return marks;
        }
        for decade in i1..=i2 {
            let value = decade as f64;
            let fraction = range.fraction(value);
            if Ends::Include.accepts(fraction) {
                marks.push(LabelMark {
                    value,
                    fraction,
                    text: decade_label(decade),
                });
            }
        }
        if range.width() < 2.0 {
            for decade in (i1 - 1)..=i2 {
                for j in [2_i64, 5] {
                    let value = decade as f64 + (j as f64).log10();
                    let fraction = range.fraction(value);
                    if Ends::Include.accepts(fraction) {
                        marks.push(LabelMark {
                            value,
                            fraction,
                            text: format_number(j, decade as i32, format),
                        });
                    }
                }
            }
        }
        return marks;
    }

    let major = major.abs();
    if major == 0.0 || !major.is_finite() {
        tracing::warn!(major, "label interval is zero or not finite; no labels drawn");
        return marks;
    }
    let (nv, np) = label_scale(major);

    let (i1, i2) = tick_index_range(range, major);
    if too_many(i2.saturating_sub(i1).saturating_add(1), "labels") {
        return marks;
    }
    for i in i1..=i2 {
        let value = i as f64 * major;
        let fraction = range.fraction(value);
        if Ends::Include.accepts(fraction) {
            marks.push(LabelMark {
                value,
                fraction,
                text: format_number(i.saturating_mul(nv), np, format),
            });
        }
    }
    marks
}

/// Extra decimal places searched for an integer label mantissa.
const MAX_EXTRA_DIGITS: i32 = 6;

/// Split `major` into an integer mantissa and a power of ten.
///
/// Starts from the leading digit and moves the point right until the
/// mantissa is whole, so 2.5 becomes `(25, -1)`.
fn label_scale(major: f64) -> (i64, i32) {
    let lead = major.log10().floor() as i32;
    for np in (lead - MAX_EXTRA_DIGITS..=lead).rev() {
        let scaled = major / 10f64.powi(np);
        if (scaled - scaled.round()).abs() <= scaled * 1e-9 {
            return (scaled.round() as i64, np);
        }
    }
    let np = lead - MAX_EXTRA_DIGITS;
    ((major / 10f64.powi(np)).round() as i64, np)
}
