//! Colour types and the PGPLOT colour-index palette.
//!
//! Drawing code refers to colours by index (0 = background, 1 = foreground,
//! 2-15 the standard PGPLOT colours); devices resolve indices through a
//! [`Palette`].

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque colour from unit-interval components.
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Unit-interval RGB values of PGPLOT colour indices 2-15.
const STANDARD_COLOURS: [(f32, f32, f32); 14] = [
    (1.0, 0.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (0.0, 1.0, 1.0),
    (1.0, 0.0, 1.0),
    (1.0, 1.0, 0.0),
    (1.0, 0.5, 0.0),
    (0.5, 1.0, 0.0),
    (0.0, 1.0, 0.5),
    (0.0, 0.5, 1.0),
    (0.5, 0.0, 1.0),
    (1.0, 0.0, 0.5),
    (0.333, 0.333, 0.333),
    (0.667, 0.667, 0.667),
];

/// Colour-index lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Rgba>,
}

impl Palette {
    /// Palette for file devices: white background, black foreground.
    #[must_use]
    pub fn light() -> Self {
        Self::with_ends(Rgba::WHITE, Rgba::BLACK)
    }

    /// Classic PGPLOT palette: black background, white foreground.
    #[must_use]
    pub fn dark() -> Self {
        Self::with_ends(Rgba::BLACK, Rgba::WHITE)
    }

    fn with_ends(background: Rgba, foreground: Rgba) -> Self {
        let mut colours = Vec::with_capacity(16);
        colours.push(background);
        colours.push(foreground);
        colours.extend(STANDARD_COLOURS.iter().map(|&(r, g, b)| Rgba::from_unit(r, g, b)));
        Self { colours }
    }

    /// Number of defined colour indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Whether the palette is empty (never true for the built-in tables).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Colour for index `ci`, if defined.
    #[must_use]
    pub fn get(&self, ci: usize) -> Option<Rgba> {
        self.colours.get(ci).copied()
    }

    /// Colour for index `ci`, falling back to the foreground colour.
    #[must_use]
    pub fn resolve(&self, ci: usize) -> Rgba {
        self.get(ci).unwrap_or(self.foreground())
    }

    /// Background colour (index 0).
    #[must_use]
    pub fn background(&self) -> Rgba {
        self.colours[0]
    }

    /// Foreground colour (index 1).
    #[must_use]
    pub fn foreground(&self) -> Rgba {
        self.colours[1]
    }

    /// Redefine colour index `ci`, growing the table if needed.
    pub fn set(&mut self, ci: usize, colour: Rgba) {
        if ci >= self.colours.len() {
            let fill = self.foreground();
            self.colours.resize(ci + 1, fill);
        }
        self.colours[ci] = colour;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
