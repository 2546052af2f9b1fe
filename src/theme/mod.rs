//! themeing stuff for the storefront
pub mod definition;
pub mod palette;
pub mod presets;
pub mod registry;

use {
    crate::{
        error::ShopError,
        theme::palette::{ThemeColors, ThemeFonts},
    },
    std::{fmt, str::FromStr},
};

/// a theme
pub trait Theme {
    /// the catalog id of the theme
    fn id() -> ThemeId;
    /// the human readable name of the theme
    fn name() -> &'static str;
    /// the colors of the theme
    fn colors() -> ThemeColors;
    /// the font stacks of the theme
    fn fonts() -> ThemeFonts;
    /// the landing page layout of the theme
    fn layout() -> LayoutVariant;
}

/// the id of a theme in the compiled-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeId {
    /// the minimalist theme
    Theme1,
    /// the dark professional theme
    Theme2,
    /// the colorful creative theme
    Theme3,
}

impl ThemeId {
    /// the number of themes in the catalog
    pub const COUNT: usize = 3;

    /// every id in the catalog, in catalog order
    pub const ALL: [ThemeId; Self::COUNT] = [Self::Theme1, Self::Theme2, Self::Theme3];

    /// the id used when nothing (valid) has been persisted
    pub const DEFAULT: ThemeId = Self::Theme1;

    /// the raw id string, as persisted
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme1 => "theme1",
            Self::Theme2 => "theme2",
            Self::Theme3 => "theme3",
        }
    }

    /// the position of the id in the catalog
    pub const fn index(self) -> usize {
        match self {
            Self::Theme1 => 0,
            Self::Theme2 => 1,
            Self::Theme3 => 2,
        }
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ShopError::InvalidThemeId(s.to_string()))
    }
}

/// the structural arrangement of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutVariant {
    /// hero, feature grid and product grid in a single column
    #[default]
    Default,
    /// fixed side navigation next to the main content column
    Sidebar,
    /// hero and a denser multi-column product grid
    Grid,
}

impl LayoutVariant {
    /// the variant name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sidebar => "sidebar",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
