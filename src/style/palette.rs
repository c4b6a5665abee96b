use crate::foundation::core::Rgb8;

/// Paper tones offered by the randomizer.
pub const BACKGROUND_SWATCHES: [Rgb8; 5] = [
    Rgb8::new(0xF5, 0xF2, 0xE3), // vintage paper
    Rgb8::new(0xE8, 0xE4, 0xD5), // aged parchment
    Rgb8::new(0xD9, 0xD2, 0xBD), // antique paper
    Rgb8::new(0xF0, 0xEB, 0xD8), // old document
    Rgb8::new(0xFF, 0xFF, 0xFF),
];

/// Ink tones offered by the randomizer.
pub const FOREGROUND_SWATCHES: [Rgb8; 4] = [
    Rgb8::new(0x00, 0x00, 0x00),
    Rgb8::new(0x1A, 0x1A, 0x1A),
    Rgb8::new(0x2D, 0x2D, 0x2D),
    Rgb8::new(0x3B, 0x3B, 0x3B),
];

/// Resolved paint roles for one redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Canvas fill, also used for motif details cut out of the ink.
    pub background: Rgb8,
    /// Motif ink.
    pub foreground: Rgb8,
}

impl ColorScheme {
    /// Resolve canvas/border colors, swapping the roles when `invert` is set.
    pub fn resolve(canvas: Rgb8, border: Rgb8, invert: bool) -> Self {
        if invert {
            Self {
                background: border,
                foreground: canvas,
            }
        } else {
            Self {
                background: canvas,
                foreground: border,
            }
        }
    }

    /// The same scheme with background and foreground exchanged.
    pub fn inverted(self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
        }
    }

    /// Color for a motif ink role.
    pub fn ink(self, ink: Ink) -> Rgb8 {
        match ink {
            Ink::Primary => self.foreground,
            Ink::Secondary => self.background,
        }
    }
}

/// Paint role of a motif primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Foreground ink.
    Primary,
    /// Background color, used to cut details out of the ink.
    Secondary,
}
