//! the header shared by every page, and the theme picker
use {
    crate::{
        route::Route,
        theme::{ThemeId, definition::ThemeDefinition, palette::ColorRole},
        ui::{
            paint::Painter,
            text::{Block, Line, Span},
        },
    },
    std::fmt,
};

/// the brand shown in the header
pub const BRAND: &str = "ThemeApp";

/// draw the header for `current`
pub fn render(theme: &ThemeDefinition, current: Route, width: usize) -> Block {
    let mut nav = Line::from_span(Span::colored("◆ ", ColorRole::Primary).bold());
    nav.push(Span::colored(BRAND, ColorRole::Text).bold());
    nav.push(Span::plain("   "));

    for route in Route::ALL {
        if route == current {
            nav.push(Span::colored(format!("[{}]", route.label()), ColorRole::Primary).bold());
        } else {
            nav.push(Span::colored(
                format!(" {} ", route.label()),
                ColorRole::TextSecondary,
            ));
        }

        nav.push(Span::plain(" "));
    }

    let picker = Span::colored(format!("Theme: {} ▾", theme.display_name), ColorRole::Text);
    let used = nav.width() + picker.width();
    nav.push(Span::plain(" ".repeat(width.saturating_sub(used).max(1))));
    nav.push(picker);

    vec![
        nav,
        Line::colored("─".repeat(width), ColorRole::TextSecondary),
    ]
}

/// an entry of the theme picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// the theme the entry selects
    pub id: ThemeId,
    /// the display name of the theme
    pub label: &'static str,
    /// the painted swatch of the theme's primary color
    pub swatch: String,
    /// whether this is the active theme
    pub active: bool,
}

impl fmt::Display for PickerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.swatch, self.label)?;

        if self.active {
            write!(f, " ✓")?;
        }

        Ok(())
    }
}

/// list the picker entries for `themes`, marking `active`
pub fn picker_entries(
    themes: &[ThemeDefinition],
    active: ThemeId,
    painter: &Painter<'_>,
) -> Vec<PickerEntry> {
    themes
        .iter()
        .map(|theme| PickerEntry {
            id: theme.id,
            label: theme.display_name,
            swatch: painter.swatch(theme.colors.primary),
            active: theme.id == active,
        })
        .collect()
}
