//! Procedural plotting session.
//!
//! [`Session`] owns an [`AxisContext`] and a sink and exposes the classic
//! call sequence: set up the window and viewport, then draw boxes, axes
//! and labels.
//!
//! ```
//! use giza::prelude::*;
//!
//! let mut session = Session::new(Recorder::new(), Rect::new(80.0, 60.0, 480.0, 360.0), 12.0);
//! session.env(0.0, 10.0, -1.0, 1.0, 0, 1);
//! session.line(&[0.0, 5.0, 10.0], &[0.0, 1.0, -1.0]);
//! session.draw_labels("x", "sin x", "A plot");
//!
//! let recorder = session.into_sink();
//! assert!(recorder.labels().contains(&"A plot"));
//! ```

use crate::axis::{AxisRenderer, BoxAxis, TickLengths, TickSpec};
use crate::config::AxisStyle;
use crate::context::AxisContext;
use crate::geometry::{Point, Rect};
use crate::render::DrawSink;

/// Axis option strings for each `env` axis code.
fn env_options(axis: i32) -> Option<(&'static str, &'static str)> {
    let options = match axis {
        -2 => ("", ""),
        -1 => ("BC", "BC"),
        0 => ("BCNST", "BCNST"),
        1 => ("ABCNST", "ABCNST"),
        2 => ("ABCGNST", "ABCGNST"),
        10 => ("BCLNST", "BCNST"),
        20 => ("BCNST", "BCLNST"),
        30 => ("BCLNST", "BCLNST"),
        _ => return None,
    };
    Some(options)
}

/// Largest viewport inside `frame` that gives both axes the same scale.
fn equal_scale_viewport(frame: Rect, dx: f64, dy: f64) -> Rect {
    let (dx, dy) = (dx.abs(), dy.abs());
    if !(dx > 0.0 && dy > 0.0 && dx.is_finite() && dy.is_finite()) {
        return frame;
    }
    let scale = (frame.width / dx).min(frame.height / dy);
    let width = scale * dx;
    let height = scale * dy;
    Rect::new(
        frame.x + (frame.width - width) / 2.0,
        frame.y + (frame.height - height) / 2.0,
        width,
        height,
    )
}

/// A drawing session: axis state plus the sink it draws into.
#[derive(Debug)]
pub struct Session<S: DrawSink> {
    ctx: AxisContext,
    sink: S,
    /// Viewport last set by the caller; `env` fits equal-scale plots inside it.
    frame: Rect,
}

impl<S: DrawSink> Session<S> {
    /// Start a session drawing into `sink`.
    #[must_use]
    pub fn new(sink: S, viewport: Rect, char_height: f64) -> Self {
        let ctx = AxisContext::new(viewport, char_height);
        let frame = ctx.viewport();
        Self { ctx, sink, frame }
    }

    /// Replace the axis style.
    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.ctx = self.ctx.with_style(style);
        self
    }

    /// Set the world coordinates at the viewport edges.
    pub fn set_window(&mut self, x1: f64, x2: f64, y1: f64, y2: f64) {
        self.ctx.set_window(x1, x2, y1, y2);
    }

    /// Set the viewport in device units.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.ctx.set_viewport(viewport);
        self.frame = self.ctx.viewport();
    }

    /// Set the character height in device units.
    pub fn set_char_height(&mut self, char_height: f64) {
        self.ctx.set_char_height(char_height);
    }

    /// Select the colour index for subsequent drawing.
    pub fn set_colour_index(&mut self, ci: usize) {
        self.sink.set_colour_index(ci);
    }

    /// Current colour index.
    #[must_use]
    pub fn colour_index(&self) -> usize {
        self.sink.colour_index()
    }

    /// Draw a polyline through world points.
    ///
    /// Extra points in the longer slice are ignored.
    pub fn line(&mut self, xs: &[f64], ys: &[f64]) {
        if xs.len() != ys.len() {
            tracing::warn!(
                xs = xs.len(),
                ys = ys.len(),
                "coordinate slices differ in length; extra points ignored"
            );
        }
        let points: Vec<Point> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.ctx.world_to_device(x, y))
            .collect();
        for pair in points.windows(2) {
            self.sink.line(pair[0], pair[1]);
        }
    }

    /// Draw a labelled box; see [`AxisRenderer::draw_box`].
    pub fn draw_box(
        &mut self,
        xopt: &str,
        xtick: f64,
        nxsub: i32,
        yopt: &str,
        ytick: f64,
        nysub: i32,
    ) {
        self.renderer().draw_box(xopt, xtick, nxsub, yopt, ytick, nysub);
    }

    /// Draw a labelled box from parsed axis requests.
    pub fn draw_box_with(&mut self, x: &BoxAxis, y: &BoxAxis) {
        self.renderer().draw_box_with(x, y);
    }

    /// Draw a labelled axis between two world points; see
    /// [`AxisRenderer::draw_axis`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_axis(
        &mut self,
        options: &str,
        start: Point,
        end: Point,
        v1: f64,
        v2: f64,
        tick: TickSpec,
        lengths: TickLengths,
        disp: f64,
        orient: f64,
    ) {
        self.renderer()
            .draw_axis(options, start, end, v1, v2, tick, lengths, disp, orient);
    }

    /// Draw one labelled tick; see [`AxisRenderer::draw_single_tick`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_single_tick(
        &mut self,
        start: Point,
        end: Point,
        fraction: f64,
        left: f64,
        right: f64,
        disp: f64,
        orient: f64,
        label: &str,
    ) {
        self.renderer()
            .draw_single_tick(start, end, fraction, left, right, disp, orient, label);
    }

    /// Write text relative to a viewport edge; see [`AxisRenderer::mtext`].
    pub fn mtext(&mut self, side: &str, disp: f64, coord: f64, fjust: f64, text: &str) {
        self.renderer().mtext(side, disp, coord, fjust, text);
    }

    /// Write the axis labels and title.
    pub fn draw_labels(&mut self, x_label: &str, y_label: &str, title: &str) {
        self.renderer().draw_labels(x_label, y_label, title);
    }

    /// Set up a window and draw a standard box in one call.
    ///
    /// With `just == 1` the viewport shrinks inside the caller's viewport
    /// so both axes share one scale. `axis` selects the decorations:
    ///
    /// | code | drawn |
    /// |------|-------|
    /// | -2 | nothing |
    /// | -1 | box only |
    /// | 0 | box, ticks and labels |
    /// | 1 | as 0, plus the zero axes |
    /// | 2 | as 1, plus a grid |
    /// | 10 / 20 / 30 | as 0, logarithmic x / y / both |
    ///
    /// An unknown code is logged and treated as 0.
    pub fn env(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, just: i32, axis: i32) {
        let (xopt, yopt) = env_options(axis).unwrap_or_else(|| {
            tracing::warn!(axis, "unknown axis code; using 0");
            ("BCNST", "BCNST")
        });

        let viewport = if just == 1 {
            equal_scale_viewport(self.frame, xmax - xmin, ymax - ymin)
        } else {
            self.frame
        };
        self.ctx.set_viewport(viewport);
        self.ctx.set_window(xmin, xmax, ymin, ymax);

        if !xopt.is_empty() || !yopt.is_empty() {
            self.draw_box(xopt, 0.0, 0, yopt, 0.0, 0);
        }
    }

    /// The axis state.
    #[must_use]
    pub fn context(&self) -> &AxisContext {
        &self.ctx
    }

    /// Mutable access to the axis state.
    pub fn context_mut(&mut self) -> &mut AxisContext {
        &mut self.ctx
    }

    /// The sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session, returning the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn renderer(&mut self) -> AxisRenderer<'_, S> {
        AxisRenderer::new(&self.ctx, &mut self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;
    use approx::assert_relative_eq;

    fn session() -> Session<Recorder> {
        Session::new(Recorder::new(), Rect::new(0.0, 0.0, 200.0, 200.0), 10.0)
    }

    #[test]
    fn test_env_equal_scales() {
        let mut s = session();
        s.env(0.0, 10.0, 0.0, 5.0, 1, -2);
        assert_eq!(s.context().viewport(), Rect::new(0.0, 50.0, 200.0, 100.0));
        assert!(s.sink().commands().is_empty());

        // The caller's viewport is kept as the frame for the next call
        s.env(0.0, 5.0, 0.0, 10.0, 1, -2);
        assert_eq!(s.context().viewport(), Rect::new(50.0, 0.0, 100.0, 200.0));

        s.env(0.0, 5.0, 0.0, 10.0, 0, -2);
        assert_eq!(s.context().viewport(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_env_box_only() {
        let mut s = session();
        s.env(0.0, 1.0, 0.0, 1.0, 0, -1);
        assert_eq!(s.sink().lines().count(), 4);
        assert!(s.sink().labels().is_empty());
    }

    #[test]
    fn test_env_axis_codes() {
        assert_eq!(env_options(0), Some(("BCNST", "BCNST")));
        assert_eq!(env_options(2), Some(("ABCGNST", "ABCGNST")));
        assert_eq!(env_options(20), Some(("BCNST", "BCLNST")));
        assert_eq!(env_options(7), None);
    }

    #[test]
    fn test_env_unknown_code_draws_standard_box() {
        let mut a = session();
        a.env(0.0, 10.0, 0.0, 10.0, 0, 7);
        let mut b = session();
        b.env(0.0, 10.0, 0.0, 10.0, 0, 0);
        assert_eq!(a.sink().commands(), b.sink().commands());
        assert!(!a.sink().labels().is_empty());
    }

    #[test]
    fn test_env_log_axis_labels() {
        let mut s = session();
        s.env(0.0, 3.0, 0.0, 1.0, 0, 10);
        let labels = s.sink().labels();
        assert!(labels.contains(&"10^{3}"));
    }

    #[test]
    fn test_line_maps_world_points() {
        let mut s = session();
        s.set_window(0.0, 10.0, 0.0, 10.0);
        s.line(&[0.0, 5.0, 10.0, 99.0], &[0.0, 5.0, 0.0]);

        let lines: Vec<_> = s.sink().lines().copied().collect();
        assert_eq!(lines.len(), 2);
        assert_relative_eq!(lines[0].end.x, 100.0);
        assert_relative_eq!(lines[1].end.y, 0.0);
        assert_relative_eq!(lines[1].end.x, 200.0);
    }

    #[test]
    fn test_single_point_line_draws_nothing() {
        let mut s = session();
        s.line(&[1.0], &[1.0]);
        s.line(&[], &[]);
        assert!(s.sink().commands().is_empty());
    }

    #[test]
    fn test_colour_index_and_into_sink() {
        let mut s = session();
        s.set_colour_index(3);
        assert_eq!(s.colour_index(), 3);
        s.mtext("T", 1.0, 0.5, 0.5, "hello");
        let rec = s.into_sink();
        assert_eq!(rec.labels(), vec!["hello"]);
    }

    #[test]
    fn test_invalid_viewport_keeps_frame() {
        let mut s = session();
        s.set_viewport(Rect::new(0.0, 0.0, -1.0, 1.0));
        assert_eq!(s.context().viewport(), Rect::new(0.0, 0.0, 200.0, 200.0));
        s.set_viewport(Rect::new(10.0, 10.0, 100.0, 100.0));
        s.env(0.0, 1.0, 0.0, 2.0, 1, -2);
        assert_eq!(s.context().viewport(), Rect::new(35.0, 10.0, 50.0, 100.0));
    }

    #[test]
    fn test_with_style_and_char_height() {
        let mut style = AxisStyle::default();
        style.label_colour = Some(4);
        let mut s = session().with_style(style);
        s.set_char_height(20.0);
        assert_relative_eq!(s.context().char_height(), 20.0);
        assert_eq!(s.context().style().label_colour, Some(4));
        s.context_mut().style_mut().label_colour = None;
        assert!(s.context().style().label_colour.is_none());
        s.sink_mut().clear();
    }
}
