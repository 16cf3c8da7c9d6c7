//! Drawing sinks that produce files.
//!
//! Both devices take device coordinates with y growing upwards and flip to
//! image rows on output. Colour indices resolve through a [`Palette`].

use super::{PngEncoder, SvgElement, SvgEncoder, TextAnchor};
use crate::color::{Palette, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use crate::render::{DrawSink, Drawable, TextCommand};
use std::path::Path;

/// Vector device writing an SVG document.
#[derive(Debug, Clone)]
pub struct SvgDevice {
    encoder: SvgEncoder,
    palette: Palette,
    colour_index: usize,
    stroke_width: f32,
}

impl SvgDevice {
    /// Create a device of the given size with the light palette.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_palette(width, height, Palette::light())
    }

    /// Create a device with an explicit palette.
    #[must_use]
    pub fn with_palette(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            encoder: SvgEncoder::new(width, height).background(Some(palette.background())),
            palette,
            colour_index: 1,
            stroke_width: 1.0,
        }
    }

    /// Set the stroke width for subsequent lines.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// The palette used to resolve colour indices.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The document built so far.
    #[must_use]
    pub fn encoder(&self) -> &SvgEncoder {
        &self.encoder
    }

    /// Render the document.
    #[must_use]
    pub fn render(&self) -> String {
        self.encoder.render()
    }

    /// Write the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.encoder.write_to_file(path)
    }

    fn flip(&self, y: f64) -> f32 {
        (f64::from(self.encoder.height()) - y) as f32
    }

    fn current(&self) -> Rgba {
        self.palette.resolve(self.colour_index)
    }
}

impl DrawSink for SvgDevice {
    fn line(&mut self, from: Point, to: Point) {
        let element = SvgElement::Line {
            x1: from.x as f32,
            y1: self.flip(from.y),
            x2: to.x as f32,
            y2: self.flip(to.y),
            stroke: self.current(),
            stroke_width: self.stroke_width,
        };
        self.encoder.add_element(element);
    }

    fn text(&mut self, text: &TextCommand) {
        let element = SvgElement::Text {
            x: text.anchor.x as f32,
            y: self.flip(text.anchor.y),
            text: text.text.clone(),
            font_size: text.height as f32,
            fill: self.current(),
            anchor: TextAnchor::from_justification(text.justification),
            // SVG rotates clockwise with y down
            rotation: -text.angle as f32,
        };
        self.encoder.add_element(element);
    }

    fn colour_index(&self) -> usize {
        self.colour_index
    }

    fn set_colour_index(&mut self, ci: usize) {
        self.colour_index = ci;
    }
}

/// Raster device drawing lines into a [`Framebuffer`].
///
/// Text is not rasterised; text commands are dropped.
#[derive(Debug, Clone)]
pub struct RasterDevice {
    framebuffer: Framebuffer,
    palette: Palette,
    colour_index: usize,
    antialias: bool,
}

impl RasterDevice {
    /// Create a device cleared to the light palette's background.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_palette(width, height, Palette::light())
    }

    /// Create a device with an explicit palette.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_palette(width: u32, height: u32, palette: Palette) -> Result<Self> {
        let mut framebuffer = Framebuffer::new(width, height)?;
        framebuffer.clear(palette.background());
        Ok(Self {
            framebuffer,
            palette,
            colour_index: 1,
            antialias: true,
        })
    }

    /// Enable or disable anti-aliased lines.
    #[must_use]
    pub fn antialias(mut self, enabled: bool) -> Self {
        self.antialias = enabled;
        self
    }

    /// The pixels drawn so far.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Consume the device, returning its pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Fraction of pixels that are not background.
    #[must_use]
    pub fn ink_coverage(&self) -> f32 {
        self.framebuffer.ink_coverage(self.palette.background())
    }

    /// Encode the image as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.framebuffer)
    }

    /// Write the image to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.framebuffer, path)
    }

    fn flip(&self, p: Point) -> Point {
        Point::new(p.x, f64::from(self.framebuffer.height()) - 1.0 - p.y)
    }
}

impl DrawSink for RasterDevice {
    fn line(&mut self, from: Point, to: Point) {
        let line = Line::new(self.flip(from), self.flip(to));
        let colour = self.palette.resolve(self.colour_index);
        if self.antialias {
            line.draw_aa(&mut self.framebuffer, colour);
        } else {
            line.draw(&mut self.framebuffer, colour);
        }
    }

    fn text(&mut self, text: &TextCommand) {
        tracing::trace!(text = %text.text, "raster device skips text");
    }

    fn colour_index(&self) -> usize {
        self.colour_index
    }

    fn set_colour_index(&mut self, ci: usize) {
        self.colour_index = ci;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str, angle: f64, justification: f64) -> TextCommand {
        TextCommand {
            anchor: Point::new(10.0, 20.0),
            angle,
            justification,
            height: 12.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_svg_device_flips_y() {
        let mut dev = SvgDevice::new(100, 50);
        dev.line(Point::new(0.0, 0.0), Point::new(100.0, 10.0));
        match &dev.encoder().elements()[0] {
            SvgElement::Line { y1, y2, .. } => {
                assert!((y1 - 50.0).abs() < 1e-6);
                assert!((y2 - 40.0).abs() < 1e-6);
            }
            other => panic!("unexpected element {other:?}"),
        }
    }

    #[test]
    fn test_svg_device_text_rotation_and_anchor() {
        let mut dev = SvgDevice::new(100, 50);
        dev.text(&label("y", 90.0, 1.0));
        match &dev.encoder().elements()[0] {
            SvgElement::Text {
                y, rotation, anchor, ..
            } => {
                assert!((y - 30.0).abs() < 1e-6);
                assert!((rotation + 90.0).abs() < 1e-6);
                assert_eq!(*anchor, TextAnchor::End);
            }
            other => panic!("unexpected element {other:?}"),
        }
    }

    #[test]
    fn test_svg_device_colour_index() {
        let mut dev = SvgDevice::new(10, 10);
        dev.set_colour_index(2);
        dev.line(Point::ORIGIN, Point::new(5.0, 5.0));
        assert_eq!(dev.colour_index(), 2);
        assert!(dev.render().contains("stroke=\"rgb(255,0,0)\""));
    }

    #[test]
    fn test_raster_device_draws_lines_not_text() {
        let mut dev = RasterDevice::new(20, 20).unwrap().antialias(false);
        dev.text(&label("skipped", 0.0, 0.0));
        assert!(dev.ink_coverage().abs() < 1e-6);

        dev.line(Point::new(0.0, 0.0), Point::new(19.0, 0.0));
        // device y = 0 is the bottom image row
        assert_eq!(dev.framebuffer().get_pixel(5, 19), Some(Rgba::BLACK));
        assert!(dev.ink_coverage() > 0.0);
    }

    #[test]
    fn test_raster_device_png() {
        let mut dev = RasterDevice::new(8, 8).unwrap();
        dev.line(Point::new(0.0, 4.0), Point::new(7.0, 4.0));
        let bytes = dev.to_png_bytes().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.png");
        dev.write_png(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_raster_zero_size() {
        assert!(RasterDevice::new(0, 5).is_err());
    }
}
