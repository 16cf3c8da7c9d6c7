//! Per-plot axis state.
//!
//! [`AxisContext`] carries everything the axis renderer reads: the world
//! window, the viewport it maps onto, the character height and the style.
//! Invalid settings are logged and replaced or ignored, never fatal.

use crate::config::AxisStyle;
use crate::geometry::{Point, Rect};
use crate::ticks::AxisRange;

/// World window, viewport and text size for one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisContext {
    x_range: AxisRange,
    y_range: AxisRange,
    viewport: Rect,
    char_height: f64,
    style: AxisStyle,
}

impl AxisContext {
    /// Create a context with the unit window mapped onto `viewport`.
    ///
    /// An invalid viewport is replaced by the unit square.
    #[must_use]
    pub fn new(viewport: Rect, char_height: f64) -> Self {
        let mut ctx = Self {
            x_range: AxisRange::unit(),
            y_range: AxisRange::unit(),
            viewport: Rect::new(0.0, 0.0, 1.0, 1.0),
            char_height: 1.0,
            style: AxisStyle::default(),
        };
        ctx.set_viewport(viewport);
        ctx.set_char_height(char_height);
        ctx
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the world coordinates at the viewport edges.
    ///
    /// An axis whose two ends coincide (or are not finite) is replaced by
    /// `[0, 1]`.
    pub fn set_window(&mut self, x1: f64, x2: f64, y1: f64, y2: f64) {
        self.x_range = AxisRange::new(x1, x2).unwrap_or_else(|_| {
            tracing::warn!(x1, x2, "degenerate x window; using [0, 1]");
            AxisRange::unit()
        });
        self.y_range = AxisRange::new(y1, y2).unwrap_or_else(|_| {
            tracing::warn!(y1, y2, "degenerate y window; using [0, 1]");
            AxisRange::unit()
        });
    }

    /// Set the viewport in device units. Invalid rectangles are ignored.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport.is_valid() {
            self.viewport = viewport;
        } else {
            tracing::warn!(?viewport, "invalid viewport ignored");
        }
    }

    /// Set the character height in device units. Non-positive values are ignored.
    pub fn set_char_height(&mut self, char_height: f64) {
        if char_height > 0.0 && char_height.is_finite() {
            self.char_height = char_height;
        } else {
            tracing::warn!(char_height, "invalid character height ignored");
        }
    }

    /// Mutable access to the style.
    pub fn style_mut(&mut self) -> &mut AxisStyle {
        &mut self.style
    }

    /// The style.
    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    /// World range along x (left to right).
    #[must_use]
    pub const fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// World range along y (bottom to top).
    #[must_use]
    pub const fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// The viewport in device units.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Character height in device units.
    #[must_use]
    pub const fn char_height(&self) -> f64 {
        self.char_height
    }

    /// Map world coordinates to device coordinates.
    #[must_use]
    pub fn world_to_device(&self, x: f64, y: f64) -> Point {
        let vp = self.viewport;
        Point::new(
            vp.x + self.x_range.fraction(x) * vp.width,
            vp.y + self.y_range.fraction(y) * vp.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ctx() -> AxisContext {
        AxisContext::new(Rect::new(100.0, 50.0, 400.0, 200.0), 10.0)
    }

    #[test]
    fn test_defaults() {
        let ctx = ctx();
        assert_eq!(ctx.x_range(), AxisRange::unit());
        assert_eq!(ctx.y_range(), AxisRange::unit());
        assert_relative_eq!(ctx.char_height(), 10.0);
    }

    #[test]
    fn test_world_to_device() {
        let mut ctx = ctx();
        ctx.set_window(0.0, 10.0, -1.0, 1.0);
        let p = ctx.world_to_device(5.0, 0.0);
        assert_relative_eq!(p.x, 300.0);
        assert_relative_eq!(p.y, 150.0);
        let corner = ctx.world_to_device(10.0, 1.0);
        assert_relative_eq!(corner.x, 500.0);
        assert_relative_eq!(corner.y, 250.0);
    }

    #[test]
    fn test_reversed_window() {
        let mut ctx = ctx();
        ctx.set_window(10.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(ctx.world_to_device(10.0, 0.0).x, 100.0);
        assert_relative_eq!(ctx.world_to_device(0.0, 0.0).x, 500.0);
    }

    #[test]
    fn test_degenerate_window_substituted() {
        let mut ctx = ctx();
        ctx.set_window(3.0, 3.0, 2.0, 8.0);
        assert_eq!(ctx.x_range(), AxisRange::unit());
        assert_relative_eq!(ctx.y_range().max, 8.0);
    }

    #[test]
    fn test_invalid_settings_ignored() {
        let mut ctx = ctx();
        ctx.set_viewport(Rect::new(0.0, 0.0, -5.0, 10.0));
        assert_relative_eq!(ctx.viewport().width, 400.0);
        ctx.set_char_height(0.0);
        ctx.set_char_height(f64::NAN);
        assert_relative_eq!(ctx.char_height(), 10.0);
    }

    #[test]
    fn test_invalid_initial_viewport() {
        let ctx = AxisContext::new(Rect::new(0.0, 0.0, 0.0, 0.0), -1.0);
        assert_eq!(ctx.viewport(), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_relative_eq!(ctx.char_height(), 1.0);
    }

    #[test]
    fn test_style_access() {
        let mut style = AxisStyle::default();
        style.major_tick = 1.0;
        let mut ctx = ctx().with_style(style);
        assert_relative_eq!(ctx.style().major_tick, 1.0);
        ctx.style_mut().label_colour = Some(3);
        assert_eq!(ctx.style().label_colour, Some(3));
    }
}
