/// This macro implements `From` on the given enum
/// by directly constructing the given variant(s) from the given colouring backend.
///
/// ## Usage
///
/// The first argument is the enum you want to implement this for.
/// The rest are variadic (but there must be at least one). Each is delimited by a comma
/// and the format is `YourStruct => EnumVariantItFitsIn`.
///
/// ## Example
///
/// ```ignore
/// colouring_impl_direct_from!(
///     on
///         Colouring,
///     do conversions
///         ColourCapableBackend => Colouring::ColourCapable,
///         PlainBackend => Colouring::Plain
/// );
/// ```
///
/// expands to one `impl From<ColourCapableBackend> for Colouring` and one
/// `impl From<PlainBackend> for Colouring`, so we can write:
///
/// ```ignore
/// let colouring: Colouring = PlainBackend.into();
/// ```
#[macro_export]
macro_rules! colouring_impl_direct_from {
    (
        on $implementation_target: ty,
        do conversions $($backend: ty => $target_variant: path),+
    ) => {
        $(
            impl From<$backend> for $implementation_target {
                fn from(item: $backend) -> Self {
                    $target_variant(item)
                }
            }
        )+
    };
}


/// This macro implements [enum dispatching](https://docs.rs/enum_dispatch/latest/enum_dispatch/) behavior
/// for the `ColouringBackend` trait: every call is forwarded to the backend inside the given variants.
#[macro_export]
macro_rules! enumdispatch_impl_colouring {
    (
        on $t: ty,
        implement variants $($variant: path),+
    ) => {
        impl $crate::console::ColouringBackend for $t {
            fn colourize(
                &self,
                text: &str,
                colour: $crate::console::Colour,
            ) -> String {
                match self {
                    $($variant(backend) => backend.colourize(text, colour)),+
                }
            }

            fn is_colouring(&self) -> bool {
                match self {
                    $($variant(backend) => backend.is_colouring()),+
                }
            }
        }
    };
}
