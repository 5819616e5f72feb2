//! RGBA color type and predefined ink color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use gridnote::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

// ============================================================================
// Predefined Ink Colors (default notebook palette)
// ============================================================================

/// Predefined black ink (default pen color)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue ink
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.2,
    b: 0.9,
    a: 1.0,
};

/// Predefined red ink
pub const RED: Color = Color {
    r: 0.9,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

/// Predefined green ink
pub const GREEN: Color = Color {
    r: 0.0,
    g: 0.6,
    b: 0.2,
    a: 1.0,
};

/// Predefined orange ink
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.55,
    b: 0.0,
    a: 1.0,
};

/// Predefined purple ink
pub const PURPLE: Color = Color {
    r: 0.55,
    g: 0.1,
    b: 0.75,
    a: 1.0,
};

/// Pale blue used for the grid-paper background rules
pub const GRID_BLUE: Color = Color {
    r: 0.71,
    g: 0.82,
    b: 0.92,
    a: 1.0,
};
