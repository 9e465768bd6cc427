use crate::console::Colour;

/// The capability of rendering coloured text.
///
/// Implementors never fail: a backend that can't colour simply returns the text as-is.
pub trait ColouringBackend {
    /// Wrap `text` so that it is displayed in `colour`.
    fn colourize(&self, text: &str, colour: Colour) -> String;

    /// Whether this backend actually emits colour.
    fn is_colouring(&self) -> bool;
}
