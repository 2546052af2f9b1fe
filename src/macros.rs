//! macros used by themeshop

/// make a theme preset
#[macro_export]
macro_rules! impl_theme {
    (
        $name:ident, $id:expr, $display_name:expr, $layout:expr,
        colors: $colors:expr,
        fonts: $fonts:expr $(,)?
    ) => {
        /// a theme preset
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $crate::theme::Theme for $name {
            fn id() -> $crate::theme::ThemeId {
                $id
            }

            fn name() -> &'static str {
                $display_name
            }

            fn colors() -> $crate::theme::palette::ThemeColors {
                $colors
            }

            fn fonts() -> $crate::theme::palette::ThemeFonts {
                $fonts
            }

            fn layout() -> $crate::theme::LayoutVariant {
                $layout
            }
        }
    };
}

/// helper macro for generating validators
#[macro_export]
macro_rules! validator {
    ($struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// get the current value of a given setting
#[macro_export]
macro_rules! getopt {
    ($field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$field.clone(),
            $crate::config::options::ShopConfig::default()
                .$field
                .expect(concat!("Default value missing for: ", stringify!($field))),
        )
    }};

    ($lvl1:ident . $field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()),
            $crate::config::options::ShopConfig::default()
                .$lvl1
                .and_then(|sub| sub.$field)
                .expect(concat!(
                    "Default value missing for: ",
                    stringify!($lvl1),
                    ".",
                    stringify!($field)
                )),
        )
    }};
}
