//! SVG output encoder.
//!
//! Builds a vector document from lines and text. Coordinates are SVG
//! coordinates (y down); [`super::SvgDevice`] does the flip from device
//! space.

use crate::color::Rgba;
use crate::error::Result;
use crate::render::{parse_markup, SpanKind};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Text, possibly with `^{}` / `_{}` markup
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        /// Clockwise rotation about (x, y) in degrees.
        rotation: f32,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl TextAnchor {
    /// Nearest anchor for a justification fraction (0 start, 1 end).
    #[must_use]
    pub fn from_justification(fjust: f64) -> Self {
        if fjust < 0.25 {
            Self::Start
        } else if fjust > 0.75 {
            Self::End
        } else {
            Self::Middle
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Elements added so far.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Add a line.
    #[must_use]
    pub fn line(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add unrotated text with anchor.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            rotation: 0.0,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(&bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: &Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Text content with raised and lowered runs as `tspan`s.
fn text_content(text: &str) -> String {
    parse_markup(text)
        .iter()
        .map(|span| {
            let escaped = escape_xml(&span.text);
            match span.kind {
                SpanKind::Normal => escaped,
                SpanKind::Superscript => {
                    format!(r#"<tspan baseline-shift="super" font-size="70%">{escaped}</tspan>"#)
                }
                SpanKind::Subscript => {
                    format!(r#"<tspan baseline-shift="sub" font-size="70%">{escaped}</tspan>"#)
                }
            }
        })
        .collect()
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                rgba_to_css(stroke)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            rotation,
        } => {
            let transform = if rotation.abs() > f32::EPSILON {
                format!(r#" transform="rotate({rotation} {x} {y})""#)
            } else {
                String::new()
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{}" font-family="sans-serif"{transform}>{}</text>"#,
                rgba_to_css(fill),
                anchor.as_str(),
                text_content(text)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_encoder_new() {
        let encoder = SvgEncoder::new(800, 600);
        let svg = encoder.render();

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_svg_line() {
        let svg = SvgEncoder::new(100, 100)
            .line(0.0, 0.0, 100.0, 100.0, Rgba::BLACK, 1.0)
            .render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("x2=\"100\""));
        assert!(svg.contains("stroke=\"rgb(0,0,0)\""));
    }

    #[test]
    fn test_svg_transparent_background() {
        let svg = SvgEncoder::new(10, 10).background(None).render();
        assert!(!svg.contains("<rect"));

        let svg = SvgEncoder::new(10, 10)
            .background(Some(Rgba::BLACK.with_alpha(128)))
            .render();
        assert!(svg.contains("rgba(0,0,0,0.502)"));
    }

    #[test]
    fn test_svg_text_escaping() {
        let svg = SvgEncoder::new(100, 100)
            .text_anchored(50.0, 50.0, "a<b & c", 12.0, Rgba::BLACK, TextAnchor::Middle)
            .render();
        assert!(svg.contains("a&lt;b &amp; c"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(!svg.contains("transform"));
    }

    #[test]
    fn test_svg_text_markup_and_rotation() {
        let mut encoder = SvgEncoder::new(100, 100);
        encoder.add_element(SvgElement::Text {
            x: 10.0,
            y: 90.0,
            text: "10^{-3}".to_string(),
            font_size: 10.0,
            fill: Rgba::BLACK,
            anchor: TextAnchor::End,
            rotation: -90.0,
        });
        let svg = encoder.render();
        assert!(svg.contains(r#"10<tspan baseline-shift="super" font-size="70%">-3</tspan>"#));
        assert!(svg.contains(r#"transform="rotate(-90 10 90)""#));
        assert!(svg.contains("text-anchor=\"end\""));
    }

    #[test]
    fn test_anchor_from_justification() {
        assert_eq!(TextAnchor::from_justification(0.0), TextAnchor::Start);
        assert_eq!(TextAnchor::from_justification(0.5), TextAnchor::Middle);
        assert_eq!(TextAnchor::from_justification(1.0), TextAnchor::End);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.svg");
        SvgEncoder::new(20, 20)
            .line(0.0, 10.0, 20.0, 10.0, Rgba::BLACK, 1.0)
            .write_to_file(&path)
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<line"));
    }
}
