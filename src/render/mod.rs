//! Drawing sinks and rasterisation.
//!
//! The axis renderer emits lines, text and colour changes through the
//! [`DrawSink`] trait; sinks decide what to do with them (record them, write
//! SVG, rasterise into a framebuffer).
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: Smooth line rendering with sub-pixel accuracy
//! - **Bresenham's Line**: Fast non-antialiased line drawing
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod markup;
mod primitives;
mod sink;

pub use markup::{approx_width, parse_markup, plain_text, Span, SpanKind};
pub use primitives::{draw_line, draw_line_aa, Drawable};
pub use sink::{DrawCommand, DrawSink, Recorder, TextCommand};
