use crossterm::style::Stylize;

use crate::console::{Colour, ColouringBackend};
use crate::{colouring_impl_direct_from, enumdispatch_impl_colouring};

/// Colours text with terminal escape sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColourCapableBackend;

impl ColouringBackend for ColourCapableBackend {
    fn colourize(&self, text: &str, colour: Colour) -> String {
        text.to_string()
            .with(colour.as_terminal_colour())
            .to_string()
    }

    fn is_colouring(&self) -> bool {
        true
    }
}


/// Leaves text exactly as it is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainBackend;

impl ColouringBackend for PlainBackend {
    fn colourize(&self, text: &str, _colour: Colour) -> String {
        text.to_string()
    }

    fn is_colouring(&self) -> bool {
        false
    }
}


/// The colouring backend a reporter was created with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Colouring {
    ColourCapable(ColourCapableBackend),
    Plain(PlainBackend),
}

colouring_impl_direct_from!(
    on
        Colouring,
    do conversions
        ColourCapableBackend => Colouring::ColourCapable,
        PlainBackend => Colouring::Plain
);

enumdispatch_impl_colouring!(
    on
        Colouring,
    implement variants
        Colouring::ColourCapable,
        Colouring::Plain
);
