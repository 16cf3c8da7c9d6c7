//! Output encoders (PNG, SVG) and the file devices built on them.

mod device;
mod png_encoder;
mod svg;

pub use device::{RasterDevice, SvgDevice};
pub use png_encoder::PngEncoder;
pub use svg::{SvgElement, SvgEncoder, TextAnchor};
