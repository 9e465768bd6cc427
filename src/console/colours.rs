use crossterm::style::Color;

/// The terminal colours messages can be printed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Colour {
    Cyan,
    Green,
    Magenta,
    Red,
}

impl Colour {
    /// The standard (non-bright) ANSI colour for this variant.
    pub fn as_terminal_colour(self) -> Color {
        match self {
            Colour::Cyan => Color::DarkCyan,
            Colour::Green => Color::DarkGreen,
            Colour::Magenta => Color::DarkMagenta,
            Colour::Red => Color::DarkRed,
        }
    }
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        colour.as_terminal_colour()
    }
}
