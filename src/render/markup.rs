//! Label markup.
//!
//! Labels use a small TeX-like subset: `^{...}` raises, `_{...}` lowers and
//! `\times` is the multiplication sign. A bare `^x` or `_x` applies to one
//! character. Anything else is literal text.

/// Average glyph advance as a fraction of the character height.
const GLYPH_ADVANCE: f64 = 0.6;

/// Size of raised or lowered text relative to normal text.
pub(crate) const SCRIPT_SCALE: f64 = 0.7;

/// Vertical placement of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Text on the baseline.
    Normal,
    /// Raised, smaller text.
    Superscript,
    /// Lowered, smaller text.
    Subscript,
}

/// A run of text with one placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Placement of the run.
    pub kind: SpanKind,
    /// Text with escapes already replaced.
    pub text: String,
}

/// Split a label into runs of normal, raised and lowered text.
///
/// ```
/// use giza::render::{parse_markup, SpanKind};
///
/// let spans = parse_markup("1.2\\times10^{4}");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].text, "1.2×10");
/// assert_eq!(spans[1].kind, SpanKind::Superscript);
/// ```
#[must_use]
pub fn parse_markup(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '^' | '_' => {
                let kind = if c == '^' {
                    SpanKind::Superscript
                } else {
                    SpanKind::Subscript
                };
                let mut script = String::new();
                if chars.peek() == Some(&'{') {
                    chars.next();
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            break;
                        }
                        script.push(inner);
                    }
                } else if let Some(single) = chars.next() {
                    script.push(single);
                }
                push_span(&mut spans, SpanKind::Normal, std::mem::take(&mut current));
                push_span(&mut spans, kind, replace_escapes(&script));
            }
            _ => current.push(c),
        }
    }
    push_span(&mut spans, SpanKind::Normal, current);

    for span in &mut spans {
        if span.kind == SpanKind::Normal {
            span.text = replace_escapes(&span.text);
        }
    }
    spans
}

fn push_span(spans: &mut Vec<Span>, kind: SpanKind, text: String) {
    if !text.is_empty() {
        spans.push(Span { kind, text });
    }
}

fn replace_escapes(text: &str) -> String {
    text.replace("\\times", "×")
}

/// The label with markup removed.
#[must_use]
pub fn plain_text(text: &str) -> String {
    parse_markup(text).into_iter().map(|s| s.text).collect()
}

/// Approximate rendered width of a label at character height `height`.
#[must_use]
pub fn approx_width(text: &str, height: f64) -> f64 {
    parse_markup(text)
        .iter()
        .map(|span| {
            let scale = match span.kind {
                SpanKind::Normal => 1.0,
                SpanKind::Superscript | SpanKind::Subscript => SCRIPT_SCALE,
            };
            span.text.chars().count() as f64 * GLYPH_ADVANCE * height * scale
        })
        .sum()
}
