// src/nn/losses/macros.rs
// Declares a loss option record: private fields with defaults, by-value
// accessors, fluent `with_*` setters and the by-name `LossOptions` surface.

/// Declares one loss option record.
///
/// ```text
/// loss_options! {
///     /// docs
///     pub struct HingeEmbeddingLossOptions as "HingeEmbeddingLoss" {
///         /// field docs
///         margin: f64 = 1.0 => with_margin;
///         reduction: Reduction = Reduction::Mean => with_reduction;
///     }
/// }
/// ```
macro_rules! loss_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $loss:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $default:expr => $setter:ident;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $field: $ty, )+
        }

        impl $name {
            /// Creates the options with every field at its default.
            pub fn new() -> Self {
                Self {
                    $( $field: $default, )+
                }
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> <$ty as $crate::nn::losses::args::OptionField>::View<'_> {
                    $crate::nn::losses::args::OptionField::view(&self.$field)
                }

                #[doc = concat!("Sets `", stringify!($field), "`; every other field is left untouched.")]
                pub fn $setter(mut self, $field: impl Into<$ty>) -> Self {
                    self.$field = $field.into();
                    self
                }
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::nn::losses::LossOptions for $name {
            const NAME: &'static str = $loss;

            fn argument_names() -> &'static [&'static str] {
                &[$( stringify!($field) ),+]
            }

            fn get(&self, name: &str) -> $crate::error::Result<$crate::nn::losses::ArgValue> {
                $(
                    if name == stringify!($field) {
                        return Ok($crate::nn::losses::args::OptionField::to_arg(&self.$field));
                    }
                )+
                Err($crate::nn::losses::unknown_argument::<Self>(name, None))
            }

            fn set(
                &mut self,
                name: &str,
                value: $crate::nn::losses::ArgValue,
            ) -> $crate::error::Result<()> {
                $(
                    if name == stringify!($field) {
                        // Convert before assigning so a rejected value leaves the record intact
                        self.$field =
                            <$ty as $crate::nn::losses::args::OptionField>::from_arg(&value, name)?;
                        log::trace!("{}: {} = {}", $loss, name, value);
                        return Ok(());
                    }
                )+
                Err($crate::nn::losses::unknown_argument::<Self>(name, Some(&value)))
            }
        }
    };
}
