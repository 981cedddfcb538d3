//! Colors used by the table view.

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named colors for every part of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    /// Background of selected rows.
    pub selected: Rgb,
    /// Background of the row under the cursor.
    pub cursor: Rgb,
    pub warning: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::new(26, 26, 46),   // Dark blue
            surface: Rgb::new(40, 40, 70),      // Lighter blue
            text: Rgb::new(232, 232, 232),      // Off-white
            text_muted: Rgb::new(127, 140, 141), // Gray
            primary: Rgb::new(78, 204, 163),    // Teal
            secondary: Rgb::new(100, 150, 255), // Light blue
            selected: Rgb::new(34, 70, 84),
            cursor: Rgb::new(60, 60, 100),
            warning: Rgb::new(241, 196, 15), // Yellow
        }
    }
}
