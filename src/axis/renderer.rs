//! Box, axis and tick drawing.

use super::marks::{label_marks, tick_marks, Ends, TickMark};
use crate::context::AxisContext;
use crate::geometry::{AxisLocalFrame, Point, Rect};
use crate::options::AxisOptions;
use crate::render::{DrawSink, TextCommand};
use crate::ticks::{select_major_interval, AxisRange, IntervalRequest, TickSpacing};

/// Downward shift, in character heights, that centres horizontal text on a point.
const HALF_CAP: f64 = 0.35;

/// Displacements used by [`AxisRenderer::draw_labels`], in character heights.
const X_LABEL_DISP: f64 = 3.2;
const Y_LABEL_DISP: f64 = 2.2;
const TITLE_DISP: f64 = 2.0;

/// Options and tick request for one axis of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxAxis {
    /// Parsed option string.
    pub options: AxisOptions,
    /// Major tick interval; 0 chooses one automatically.
    pub tick: f64,
    /// Minor intervals per major interval; ignored when `tick` is 0.
    pub subdivisions: i32,
}

impl BoxAxis {
    /// Create an axis request.
    #[must_use]
    pub fn new(options: impl Into<AxisOptions>, tick: f64, subdivisions: i32) -> Self {
        Self {
            options: options.into(),
            tick,
            subdivisions,
        }
    }
}

/// Tick interval request for [`AxisRenderer::draw_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickSpec {
    /// Major tick interval in axis units; 0 chooses one automatically.
    pub step: f64,
    /// Minor intervals per major interval.
    pub subdivisions: i32,
}

/// Tick lengths for [`AxisRenderer::draw_axis`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLengths {
    /// Major tick length left of the axis, in character heights.
    pub major_left: f64,
    /// Major tick length right of the axis, in character heights.
    pub major_right: f64,
    /// Minor tick length as a fraction of the major tick length.
    pub minor_fraction: f64,
}

impl Default for TickLengths {
    fn default() -> Self {
        Self {
            major_left: 0.6,
            major_right: 0.0,
            minor_fraction: 0.5,
        }
    }
}

/// Where [`AxisRenderer::mtext`] places text relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `B`: below the bottom edge.
    Bottom,
    /// `T`: above the top edge.
    Top,
    /// `L`: left of the left edge, reading upwards.
    Left,
    /// `R`: right of the right edge, reading upwards.
    Right,
    /// `LV`: left of the left edge, horizontal.
    LeftHorizontal,
    /// `RV`: right of the right edge, horizontal.
    RightHorizontal,
}

impl Side {
    /// Parse a side code (case-insensitive).
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "B" => Some(Self::Bottom),
            "T" => Some(Self::Top),
            "L" => Some(Self::Left),
            "R" => Some(Self::Right),
            "LV" => Some(Self::LeftHorizontal),
            "RV" => Some(Self::RightHorizontal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

impl Edge {
    /// Local frame running left to right or bottom to top along the edge.
    fn frame(self, vp: Rect) -> AxisLocalFrame {
        let (start, end) = match self {
            Self::Bottom => ((vp.left(), vp.bottom()), (vp.right(), vp.bottom())),
            Self::Top => ((vp.left(), vp.top()), (vp.right(), vp.top())),
            Self::Left => ((vp.left(), vp.bottom()), (vp.left(), vp.top())),
            Self::Right => ((vp.right(), vp.bottom()), (vp.right(), vp.top())),
        };
        AxisLocalFrame::new(Point::new(start.0, start.1), Point::new(end.0, end.1))
    }

    /// Sign of the across coordinate that points into the box.
    fn inside(self) -> f64 {
        match self {
            Self::Bottom | Self::Right => 1.0,
            Self::Top | Self::Left => -1.0,
        }
    }

    fn length(self, vp: Rect) -> f64 {
        match self {
            Self::Bottom | Self::Top => vp.width,
            Self::Left | Self::Right => vp.height,
        }
    }
}

/// Justification for labels rotated `orient` degrees from the axis and
/// displaced `disp` to its left.
fn label_justification(orient: f64, disp: f64) -> f64 {
    let orient = orient.to_radians();
    if orient.cos().abs() > 0.5 {
        0.5
    } else if orient.sin() * disp > 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Whether 0 lies strictly inside `range`.
fn spans_zero(range: &AxisRange) -> bool {
    let f = range.fraction(0.0);
    f > 0.0 && f < 1.0
}

/// Draws axes described by an [`AxisContext`] into a [`DrawSink`].
///
/// Drawing never fails: invalid input is logged and the offending element
/// is skipped.
pub struct AxisRenderer<'a, S: DrawSink + ?Sized> {
    ctx: &'a AxisContext,
    sink: &'a mut S,
}

impl<'a, S: DrawSink + ?Sized> AxisRenderer<'a, S> {
    /// Create a renderer drawing into `sink`.
    #[must_use]
    pub fn new(ctx: &'a AxisContext, sink: &'a mut S) -> Self {
        Self { ctx, sink }
    }

    /// Draw a labelled box around the viewport.
    ///
    /// `xopt` and `yopt` are option strings such as `"BCNST"`. A tick
    /// interval of 0 chooses one automatically, in which case the
    /// subdivision count is also automatic.
    pub fn draw_box(
        &mut self,
        xopt: &str,
        xtick: f64,
        nxsub: i32,
        yopt: &str,
        ytick: f64,
        nysub: i32,
    ) {
        self.draw_box_with(&BoxAxis::new(xopt, xtick, nxsub), &BoxAxis::new(yopt, ytick, nysub));
    }

    /// Draw a labelled box from parsed axis requests.
    ///
    /// Grid lines come first, then ticks, then numeric labels, then the box
    /// edges and zero axes.
    pub fn draw_box_with(&mut self, x: &BoxAxis, y: &BoxAxis) {
        let vp = self.ctx.viewport();
        let x_range = self.ctx.x_range();
        let y_range = self.ctx.y_range();

        let x_extent = self.label_extent(false);
        let y_extent = self.label_extent(y.options.vertical_labels);
        let x_spacing = self.box_spacing("x", &x_range, x, vp.width, x_extent);
        let y_spacing = self.box_spacing("y", &y_range, y, vp.height, y_extent);

        // x options draw y = 0, y options draw x = 0
        let x_zero = x.options.axis && spans_zero(&y_range);
        let y_zero = y.options.axis && spans_zero(&x_range);

        let x_ticks = Self::box_ticks(&x_range, &x_spacing, &x.options, y_zero);
        let y_ticks = Self::box_ticks(&y_range, &y_spacing, &y.options, x_zero);

        self.draw_grid(vp, x, &x_ticks, y, &y_ticks);

        let edges = [
            (Edge::Bottom, x, &x_ticks, x.options.low_edge),
            (Edge::Top, x, &x_ticks, x.options.high_edge),
            (Edge::Left, y, &y_ticks, y.options.low_edge),
            (Edge::Right, y, &y_ticks, y.options.high_edge),
        ];
        for (edge, axis, marks, drawn) in edges {
            if drawn && axis.options.has_ticks() {
                self.edge_ticks(edge, &axis.options, marks);
            }
        }

        let x_zero_frame = x_zero.then(|| {
            let y0 = vp.bottom() + y_range.fraction(0.0) * vp.height;
            AxisLocalFrame::new(Point::new(vp.left(), y0), Point::new(vp.right(), y0))
        });
        let y_zero_frame = y_zero.then(|| {
            let x0 = vp.left() + x_range.fraction(0.0) * vp.width;
            AxisLocalFrame::new(Point::new(x0, vp.bottom()), Point::new(x0, vp.top()))
        });
        if let Some(frame) = x_zero_frame {
            self.zero_axis_ticks(frame, vp.width, &x.options, &x_ticks);
        }
        if let Some(frame) = y_zero_frame {
            self.zero_axis_ticks(frame, vp.height, &y.options, &y_ticks);
        }

        self.box_labels(x, &x_range, &x_spacing, y, &y_range, &y_spacing);

        for (edge, _, _, drawn) in edges {
            if drawn {
                let frame = edge.frame(vp);
                self.sink
                    .line(frame.to_device(0.0, 0.0), frame.to_device(edge.length(vp), 0.0));
            }
        }
        if let Some(frame) = x_zero_frame {
            self.sink.line(frame.origin(), frame.to_device(vp.width, 0.0));
        }
        if let Some(frame) = y_zero_frame {
            self.sink.line(frame.origin(), frame.to_device(vp.height, 0.0));
        }
    }

    /// Draw a labelled axis between two world points.
    ///
    /// `v1` and `v2` are the axis values at `start` and `end`. Options are
    /// `N` (numeric labels), `L` (logarithmic) and `1`/`2` (decimal or
    /// exponential labels). Labels sit `disp` character heights to the left
    /// of the direction of travel (negative for the right) and are rotated
    /// `orient` degrees from the axis. Ticks at the end points are drawn.
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
        let opts = AxisOptions::parse(options);
        let Some((frame, length)) = self.world_frame(start, end) else {
            return;
        };
        let range = match AxisRange::new(v1, v2) {
            Ok(range) => range,
            Err(err) => {
                tracing::warn!(%err, "axis not drawn");
                return;
            }
        };

        let ch = self.ctx.char_height();
        let parallel = orient.to_radians().cos().abs() > 0.5;
        let spacing = select_major_interval(
            &range,
            &IntervalRequest {
                log: opts.log,
                tick: tick.step,
                subdivisions: tick.subdivisions,
                minor: true,
                label_width: self.label_extent(!parallel),
                viewport_width: length,
            },
        );
        tracing::debug!(
            major = spacing.major_interval,
            nsub = spacing.minor_subdivisions,
            "axis tick spacing"
        );

        for mark in tick_marks(&range, &spacing, opts.log, Ends::Include) {
            let scale = if mark.major { ch } else { ch * lengths.minor_fraction };
            let left = lengths.major_left * scale;
            let right = lengths.major_right * scale;
            if left != 0.0 || right != 0.0 {
                self.draw_tick(&frame, mark.fraction * length, left, right);
            }
        }

        if opts.labels_low {
            let justification = label_justification(orient, disp);
            let angle = frame.angle_degrees() + orient;
            let labels = label_marks(&range, spacing.major_interval, opts.log, opts.format);
            self.with_label_colour(|this| {
                for label in labels {
                    this.sink.text(&TextCommand {
                        anchor: frame.to_device(label.fraction * length, disp * ch),
                        angle,
                        justification,
                        height: ch,
                        text: label.text,
                    });
                }
            });
        }

        self.sink.line(frame.origin(), frame.to_device(length, 0.0));
    }

    /// Draw one tick on the axis between two world points.
    ///
    /// `fraction` is the position along the axis (0 at `start`, 1 at `end`).
    /// Lengths and `disp` are in character heights; `left` is the length to
    /// the left of the direction of travel. An empty `label` draws no text.
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
        if !fraction.is_finite() {
            tracing::warn!(fraction, "tick position not finite; skipped");
            return;
        }
        let Some((frame, length)) = self.world_frame(start, end) else {
            return;
        };

        let ch = self.ctx.char_height();
        let along = fraction * length;
        if left != 0.0 || right != 0.0 {
            self.draw_tick(&frame, along, left * ch, right * ch);
        }

        if !label.is_empty() {
            let text = TextCommand {
                anchor: frame.to_device(along, disp * ch),
                angle: frame.angle_degrees() + orient,
                justification: label_justification(orient, disp),
                height: ch,
                text: label.to_string(),
            };
            self.with_label_colour(|this| this.sink.text(&text));
        }
    }

    /// Write text relative to the viewport edge named by `side`.
    ///
    /// `disp` is the distance from the edge in character heights (positive
    /// away from the box), `coord` the position along the edge as a
    /// fraction and `fjust` the justification. Unknown sides draw nothing.
    pub fn mtext(&mut self, side: &str, disp: f64, coord: f64, fjust: f64, text: &str) {
        match Side::parse(side) {
            Some(side) => self.place(side, disp, coord, fjust, text),
            None => tracing::warn!(side, "unknown text side; nothing drawn"),
        }
    }

    /// Write the x-axis label, y-axis label and title around the viewport.
    /// Empty strings are skipped.
    pub fn draw_labels(&mut self, x_label: &str, y_label: &str, title: &str) {
        let placements = [
            (Side::Bottom, X_LABEL_DISP, x_label),
            (Side::Left, Y_LABEL_DISP, y_label),
            (Side::Top, TITLE_DISP, title),
        ];
        for (side, disp, text) in placements {
            if !text.is_empty() {
                self.place(side, disp, 0.5, 0.5, text);
            }
        }
    }

    fn place(&mut self, side: Side, disp: f64, coord: f64, fjust: f64, text: &str) {
        let vp = self.ctx.viewport();
        let ch = self.ctx.char_height();
        let along_x = vp.left() + coord * vp.width;
        let along_y = vp.bottom() + coord * vp.height;

        let (anchor, angle) = match side {
            Side::Bottom => (Point::new(along_x, vp.bottom() - disp * ch), 0.0),
            Side::Top => (Point::new(along_x, vp.top() + disp * ch), 0.0),
            Side::Left => (Point::new(vp.left() - disp * ch, along_y), 90.0),
            Side::Right => (Point::new(vp.right() + disp * ch, along_y), 90.0),
            Side::LeftHorizontal => (
                Point::new(vp.left() - disp * ch, along_y - HALF_CAP * ch),
                0.0,
            ),
            Side::RightHorizontal => (
                Point::new(vp.right() + disp * ch, along_y - HALF_CAP * ch),
                0.0,
            ),
        };

        self.sink.text(&TextCommand {
            anchor,
            angle,
            justification: fjust,
            height: ch,
            text: text.to_string(),
        });
    }

    /// Device frame and length of the axis between two world points.
    fn world_frame(&self, start: Point, end: Point) -> Option<(AxisLocalFrame, f64)> {
        let p1 = self.ctx.world_to_device(start.x, start.y);
        let p2 = self.ctx.world_to_device(end.x, end.y);
        let length = p1.distance(p2);
        if length > 0.0 && length.is_finite() {
            Some((AxisLocalFrame::new(p1, p2), length))
        } else {
            tracing::warn!(?start, ?end, "axis has no length; nothing drawn");
            None
        }
    }

    /// Extent of a typical label along the axis: its width when it reads
    /// along the axis, its height when it reads across.
    fn label_extent(&self, across: bool) -> f64 {
        let ch = self.ctx.char_height();
        if across {
            ch
        } else {
            self.sink.text_width(&self.ctx.style().sample_label, ch)
        }
    }

    fn box_spacing(
        &self,
        name: &str,
        range: &AxisRange,
        axis: &BoxAxis,
        axis_length: f64,
        label_width: f64,
    ) -> TickSpacing {
        let spacing = select_major_interval(
            range,
            &IntervalRequest {
                log: axis.options.log,
                tick: axis.tick,
                subdivisions: axis.subdivisions,
                minor: axis.options.minor_ticks,
                label_width,
                viewport_width: axis_length,
            },
        );
        tracing::debug!(
            axis = name,
            major = spacing.major_interval,
            nsub = spacing.minor_subdivisions,
            "box tick spacing"
        );
        spacing
    }

    /// Tick marks strictly inside the box, without the one under the other
    /// axis's zero line.
    fn box_ticks(
        range: &AxisRange,
        spacing: &TickSpacing,
        options: &AxisOptions,
        zero_line: bool,
    ) -> Vec<TickMark> {
        if !options.has_ticks() && !options.grid && !options.axis {
            return Vec::new();
        }
        let tolerance = spacing.minor_interval() * 1e-6;
        tick_marks(range, spacing, options.log, Ends::Exclude)
            .into_iter()
            .filter(|m| !(zero_line && !options.log && m.value.abs() <= tolerance))
            .collect()
    }

    fn draw_grid(
        &mut self,
        vp: Rect,
        x: &BoxAxis,
        x_ticks: &[TickMark],
        y: &BoxAxis,
        y_ticks: &[TickMark],
    ) {
        if !x.options.grid && !y.options.grid {
            return;
        }
        let saved = self.sink.colour_index();
        let grid_colour = self.ctx.style().grid_colour;
        if let Some(ci) = grid_colour {
            self.sink.set_colour_index(ci);
        }

        if x.options.grid {
            for mark in x_ticks.iter().filter(|m| m.major) {
                let xd = vp.left() + mark.fraction * vp.width;
                self.sink.line(Point::new(xd, vp.bottom()), Point::new(xd, vp.top()));
            }
        }
        if y.options.grid {
            for mark in y_ticks.iter().filter(|m| m.major) {
                let yd = vp.bottom() + mark.fraction * vp.height;
                self.sink.line(Point::new(vp.left(), yd), Point::new(vp.right(), yd));
            }
        }

        if grid_colour.is_some() {
            self.sink.set_colour_index(saved);
        }
    }

    /// Lengths inside and outside the box for one tick.
    fn tick_extent(&self, options: &AxisOptions, major: bool) -> Option<(f64, f64)> {
        let style = self.ctx.style();
        let ch = self.ctx.char_height();
        let major_len = style.major_tick * ch;
        let len = if major && options.major_ticks {
            major_len
        } else if !major && options.minor_ticks {
            style.minor_tick() * ch
        } else {
            return None;
        };

        let (mut inside, mut outside) = if options.invert_ticks {
            (0.0, len)
        } else {
            (len, 0.0)
        };
        if options.project_ticks && major {
            if options.invert_ticks {
                inside = major_len;
            } else {
                outside = major_len;
            }
        }
        Some((inside, outside))
    }

    fn edge_ticks(&mut self, edge: Edge, options: &AxisOptions, marks: &[TickMark]) {
        let vp = self.ctx.viewport();
        let frame = edge.frame(vp);
        let length = edge.length(vp);

        for mark in marks {
            let Some((inside, outside)) = self.tick_extent(options, mark.major) else {
                continue;
            };
            let (left, right) = if edge.inside() > 0.0 {
                (inside, outside)
            } else {
                (outside, inside)
            };
            self.draw_tick(&frame, mark.fraction * length, left, right);
        }
    }

    fn zero_axis_ticks(
        &mut self,
        frame: AxisLocalFrame,
        length: f64,
        options: &AxisOptions,
        marks: &[TickMark],
    ) {
        for mark in marks {
            if let Some((inside, _)) = self.tick_extent(options, mark.major) {
                self.draw_tick(&frame, mark.fraction * length, inside, inside);
            }
        }
    }

    fn box_labels(
        &mut self,
        x: &BoxAxis,
        x_range: &AxisRange,
        x_spacing: &TickSpacing,
        y: &BoxAxis,
        y_range: &AxisRange,
        y_spacing: &TickSpacing,
    ) {
        if !x.options.has_labels() && !y.options.has_labels() {
            return;
        }
        let style = self.ctx.style();
        let (bottom, top) = (style.bottom_label_disp, style.top_label_disp);
        let (left, right) = (style.left_label_disp, style.right_label_disp);

        let x_labels = if x.options.has_labels() {
            label_marks(x_range, x_spacing.major_interval, x.options.log, x.options.format)
        } else {
            Vec::new()
        };
        let y_labels = if y.options.has_labels() {
            label_marks(y_range, y_spacing.major_interval, y.options.log, y.options.format)
        } else {
            Vec::new()
        };

        let (low_side, high_side, low_just, high_just, high_disp) = if y.options.vertical_labels {
            (Side::LeftHorizontal, Side::RightHorizontal, 1.0, 0.0, left)
        } else {
            (Side::Left, Side::Right, 0.5, 0.5, right)
        };

        self.with_label_colour(|this| {
            for label in &x_labels {
                if x.options.labels_low {
                    this.place(Side::Bottom, bottom, label.fraction, 0.5, &label.text);
                }
                if x.options.labels_high {
                    this.place(Side::Top, top, label.fraction, 0.5, &label.text);
                }
            }
            for label in &y_labels {
                if y.options.labels_low {
                    this.place(low_side, left, label.fraction, low_just, &label.text);
                }
                if y.options.labels_high {
                    this.place(high_side, high_disp, label.fraction, high_just, &label.text);
                }
            }
        });
    }

    /// Run `draw` with the label colour selected, restoring the current
    /// colour afterwards.
    fn with_label_colour(&mut self, draw: impl FnOnce(&mut Self)) {
        let saved = self.sink.colour_index();
        let colour = self.ctx.style().label_colour.unwrap_or(saved);
        self.sink.set_colour_index(colour);
        draw(self);
        self.sink.set_colour_index(saved);
    }

    /// Tick segment at `along`, reaching `left` and `right` of the axis.
    fn draw_tick(&mut self, frame: &AxisLocalFrame, along: f64, left: f64, right: f64) {
        self.sink.line(frame.to_device(along, -right), frame.to_device(along, left));
    }
}
