//! # Giza
//!
//! PGPLOT-style axes for Rust: nice tick intervals, numeric labels and
//! labelled boxes, drawn through a small sink trait into SVG, PNG or an
//! in-memory display list.
//!
//! ## Features
//!
//! - **PGPLOT conventions**: option strings (`"BCNST"`, `"ABCGLNST"`, ...),
//!   `draw_box`, `draw_axis`, `draw_single_tick`, `mtext` and `env`
//! - **Nice ticks**: 1, 2 or 5 times a power of ten, sized to the labels
//! - **Consistent labels**: every label of an axis shares one power of ten,
//!   with `\times10^{n}` markup for large and small magnitudes
//! - **Logarithmic axes**: decade labels and 2..9 sub-ticks
//! - **Outputs**: vector SVG, rasterised PNG, or a [`render::Recorder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use giza::prelude::*;
//!
//! let mut session = Session::new(SvgDevice::new(640, 480), Rect::new(80.0, 60.0, 520.0, 380.0), 14.0);
//! session.env(0.0, 100.0, -2.0, 2.0, 0, 1);
//! session.draw_labels("time (s)", "amplitude", "Response");
//!
//! let svg = session.into_sink().render();
//! assert!(svg.contains("Response"));
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): load [`config::AxisStyle`] from YAML
//!
//! ## Logging
//!
//! Invalid input never aborts a drawing call. It is reported through
//! [`tracing`] at `warn` level and the offending element is skipped; the
//! chosen tick spacing is logged at `debug`. No subscriber is installed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the colour-index palette.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles, axis frames).
pub mod geometry;

// ============================================================================
// Axis Layout
// ============================================================================

/// Tick interval selection.
pub mod ticks;

/// Numeric label formatting.
pub mod format;

/// Axis option strings.
pub mod options;

/// Axis style configuration.
pub mod config;

/// Per-plot window, viewport and text size.
pub mod context;

/// Box, axis and tick drawing.
pub mod axis;

/// Procedural plotting session.
pub mod session;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Drawing sinks, label markup and rasterization.
pub mod render;

/// Output encoders and devices (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for giza operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use giza::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{AxisRenderer, BoxAxis, Side, TickLengths, TickSpec};
    pub use crate::color::{Palette, Rgba};
    pub use crate::config::AxisStyle;
    pub use crate::context::AxisContext;
    pub use crate::error::{Error, Result};
    pub use crate::format::{format_number, NumberFormat};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::options::AxisOptions;
    pub use crate::output::{PngEncoder, RasterDevice, SvgDevice, SvgEncoder};
    pub use crate::render::{DrawCommand, DrawSink, Recorder, TextCommand};
    pub use crate::session::Session;
    pub use crate::ticks::{AxisRange, TickSpacing};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

// ============================================================================
// Tests
// ============================================================================
