use macroquad::prelude::Color;

/// Visual theme colors for UI widgets.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary text color
    pub text_color: Color,
    /// Text color for values the engine had to default
    pub highlight_color: Color,
    /// Widget color while focused or just pressed
    pub active: Color,
    /// Widget color otherwise
    pub passive: Color,
    /// Screen background
    pub window_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text_color: Color::from_rgba(255, 255, 255, 255), // white
            highlight_color: Color::from_rgba(255, 214, 10, 255), // amber
            active: Color::from_rgba(250, 88, 182, 255),      // pink
            passive: Color::from_rgba(122, 11, 192, 255),     // purple
            window_bg: Color::from_rgba(26, 26, 64, 255),     // navy
        }
    }
}

impl Theme {
    pub fn palette(&self) -> Palette {
        Palette {
            active: self.active,
            passive: self.passive,
        }
    }
}

/// The two colors a widget alternates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub active: Color,
    pub passive: Color,
}
