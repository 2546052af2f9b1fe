//! menus and prompt styling
use {
    crate::{route::Route, theme::definition::ThemeDefinition, ui::paint::parse_color},
    inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled},
    owo_colors::DynColors,
    std::fmt,
};

/// what the user can do from a page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MainMenu {
    /// go to another page
    Navigate(Route),
    /// open the theme picker
    ChangeTheme,
    /// fill in and send the contact form
    SendMessage,
    /// draw the page again
    Refresh,
    /// exit themeshop
    Exit,
}

impl MainMenu {
    /// the choices offered on `route`
    pub fn options(route: Route) -> Vec<Self> {
        let mut options: Vec<Self> = Route::ALL
            .into_iter()
            .filter(|other| *other != route)
            .map(Self::Navigate)
            .collect();

        options.push(Self::ChangeTheme);

        match route {
            Route::Contact => options.push(Self::SendMessage),
            Route::Home => options.push(Self::Refresh),
            Route::About => {}
        }

        options.push(Self::Exit);
        options
    }
}

impl fmt::Display for MainMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigate(route) => write!(f, "Go to {}", route.label()),
            Self::ChangeTheme => f.write_str("Choose theme"),
            Self::SendMessage => f.write_str("Send us a message"),
            Self::Refresh => f.write_str("Refresh"),
            Self::Exit => f.write_str("Exit"),
        }
    }
}

/// convert a theme hex color for inquire
fn prompt_color(hex: &str) -> Color {
    match parse_color(hex) {
        Some(DynColors::Rgb(r, g, b)) => Color::Rgb { r, g, b },
        _ => Color::Grey,
    }
}

/// style the prompts after a theme
pub fn render_config(theme: &ThemeDefinition) -> RenderConfig<'static> {
    let primary = prompt_color(theme.colors.primary);
    let accent = prompt_color(theme.colors.accent);
    let muted = prompt_color(theme.colors.text_secondary);

    RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(primary))
        .with_highlighted_option_prefix(Styled::new("❯").with_fg(accent))
        .with_selected_option(Some(
            StyleSheet::new()
                .with_fg(primary)
                .with_attr(Attributes::BOLD),
        ))
        .with_answer(StyleSheet::new().with_fg(primary))
        .with_help_message(StyleSheet::new().with_fg(muted))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::theme::{ThemeId, registry::CATALOG},
    };

    #[test]
    fn test_options_skip_the_current_page() {
        let options = MainMenu::options(Route::About);

        assert_eq!(
            options,
            vec![
                MainMenu::Navigate(Route::Home),
                MainMenu::Navigate(Route::Contact),
                MainMenu::ChangeTheme,
                MainMenu::Exit,
            ]
        );
    }

    #[test]
    fn test_page_specific_options() {
        assert!(MainMenu::options(Route::Contact).contains(&MainMenu::SendMessage));
        assert!(MainMenu::options(Route::Home).contains(&MainMenu::Refresh));
        assert!(!MainMenu::options(Route::Home).contains(&MainMenu::SendMessage));
        assert_eq!(MainMenu::Navigate(Route::About).to_string(), "Go to About");
    }

    #[test]
    fn test_prompt_colors_follow_the_theme() {
        let theme = CATALOG.resolve(ThemeId::Theme1);

        assert_eq!(
            prompt_color(theme.colors.primary),
            Color::Rgb {
                r: 0x25,
                g: 0x63,
                b: 0xeb
            }
        );
        assert_eq!(prompt_color("not a color"), Color::Grey);
    }
}
