//! resolved theme definitions
use crate::theme::{
    LayoutVariant, Theme, ThemeId,
    palette::{ThemeColors, ThemeFonts},
};

/// the fully resolved configuration of a catalog theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// the id of the theme
    pub id: ThemeId,
    /// the theme name shown in the picker
    pub display_name: &'static str,
    /// the color palette
    pub colors: ThemeColors,
    /// the font stacks
    pub fonts: ThemeFonts,
    /// the landing page layout
    pub layout: LayoutVariant,
}

impl ThemeDefinition {
    /// resolve a preset into a definition
    pub fn of<T: Theme>() -> Self {
        Self {
            id: T::id(),
            display_name: T::name(),
            colors: T::colors(),
            fonts: T::fonts(),
            layout: T::layout(),
        }
    }

    /// the colors and fonts of the theme as CSS custom properties
    pub fn to_css_vars(&self) -> String {
        let mut vars = self.colors.to_css_vars();
        vars.push_str(&self.fonts.to_css_vars());
        vars
    }
}
