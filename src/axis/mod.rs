//! Axis drawing: boxes, free-standing axes, single ticks and margin text.
//!
//! [`AxisRenderer`] lays out ticks and labels for the window and viewport
//! in an [`AxisContext`](crate::context::AxisContext) and emits lines and
//! text into a [`DrawSink`](crate::render::DrawSink). The position
//! arithmetic lives in [`marks`] and is usable on its own.

pub mod marks;
mod renderer;

pub use marks::{label_marks, tick_marks, Ends, LabelMark, TickMark, MAX_MARKS};
pub use renderer::{AxisRenderer, BoxAxis, Side, TickLengths, TickSpec};
