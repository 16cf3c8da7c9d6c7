//! The drawing-sink seam between layout and output.

use super::markup::approx_width;
use crate::geometry::{Line, Point};

/// A string to draw at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Reference point on the baseline, in device units.
    pub anchor: Point,
    /// Baseline direction in degrees, counter-clockwise from +x.
    pub angle: f64,
    /// Which part of the string sits on the anchor: 0 = start, 0.5 = centre,
    /// 1 = end.
    pub justification: f64,
    /// Character height in device units.
    pub height: f64,
    /// Label text, possibly with markup.
    pub text: String,
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Straight line segment.
    Line(Line),
    /// Text string.
    Text(TextCommand),
    /// Change of the current colour index.
    ColourIndex(usize),
}

/// Receiver of drawing operations, in device units.
pub trait DrawSink {
    /// Draw a line segment in the current colour.
    fn line(&mut self, from: Point, to: Point);

    /// Draw a string in the current colour.
    fn text(&mut self, text: &TextCommand);

    /// Current colour index.
    fn colour_index(&self) -> usize;

    /// Change the current colour index.
    fn set_colour_index(&mut self, ci: usize);

    /// Width of `text` at character height `height`, in device units.
    fn text_width(&self, text: &str, height: f64) -> f64 {
        approx_width(text, height)
    }
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
    fn line(&mut self, from: Point, to: Point) {
        (**self).line(from, to);
    }

    fn text(&mut self, text: &TextCommand) {
        (**self).text(text);
    }

    fn colour_index(&self) -> usize {
        (**self).colour_index()
    }

    fn set_colour_index(&mut self, ci: usize) {
        (**self).set_colour_index(ci);
    }

    fn text_width(&self, text: &str, height: f64) -> f64 {
        (**self).text_width(text, height)
    }
}

/// Sink that keeps every operation as a display list.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    colour_index: usize,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Create an empty recorder drawing in colour index 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            colour_index: 1,
        }
    }

    /// All recorded operations in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Recorded strings.
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Text of every recorded string, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.texts().map(|t| t.text.as_str()).collect()
    }

    /// Drop all recorded operations.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the display list into another sink.
    pub fn replay<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => sink.line(line.start, line.end),
                DrawCommand::Text(text) => sink.text(text),
                DrawCommand::ColourIndex(ci) => sink.set_colour_index(*ci),
            }
        }
    }
}

impl DrawSink for Recorder {
    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line(Line::new(from, to)));
    }

    fn text(&mut self, text: &TextCommand) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }

    fn colour_index(&self) -> usize {
        self.colour_index
    }

    fn set_colour_index(&mut self, ci: usize) {
        self.colour_index = ci;
        self.commands.push(DrawCommand::ColourIndex(ci));
    }
}
