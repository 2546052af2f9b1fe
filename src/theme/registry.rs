//! theme registry stuff
use {
    crate::{
        error::Result,
        theme::{ThemeId, definition::ThemeDefinition, presets::*},
    },
    std::sync::LazyLock,
};

/// the compiled-in catalog
pub static CATALOG: LazyLock<ThemeRegistry> = LazyLock::new(ThemeRegistry::new);

/// the closed theme catalog
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    /// the installed themes, indexed by [`ThemeId::index`]
    themes: [ThemeDefinition; ThemeId::COUNT],
}

impl ThemeRegistry {
    /// make a new registry
    pub fn new() -> Self {
        Self {
            themes: [
                ThemeDefinition::of::<Minimalist>(),
                ThemeDefinition::of::<DarkProfessional>(),
                ThemeDefinition::of::<ColorfulCreative>(),
            ],
        }
    }

    /// get the definition of a theme, always present since the catalog is closed
    pub fn resolve(&self, id: ThemeId) -> &ThemeDefinition {
        &self.themes[id.index()]
    }

    /// get a theme by its raw id string
    ///
    /// # Errors
    ///
    /// returns [`crate::error::ShopError::InvalidThemeId`] if `raw` isn't in the catalog
    pub fn lookup(&self, raw: &str) -> Result<&ThemeDefinition> {
        raw.parse::<ThemeId>().map(|id| self.resolve(id))
    }

    /// whether a raw id string names a catalog theme
    pub fn contains(&self, raw: &str) -> bool {
        self.lookup(raw).is_ok()
    }

    /// list available themes in catalog order
    pub fn list_themes(&self) -> &[ThemeDefinition] {
        &self.themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::theme::LayoutVariant};

    #[test]
    fn test_catalog_has_exactly_three_themes() {
        let ids: Vec<_> = CATALOG.list_themes().iter().map(|t| t.id).collect();
        assert_eq!(ids, ThemeId::ALL.to_vec());
    }

    #[test]
    fn test_resolve_matches_id() {
        for id in ThemeId::ALL {
            assert_eq!(CATALOG.resolve(id).id, id);
        }
    }

    #[test]
    fn test_catalog_contents() {
        let dark = CATALOG.resolve(ThemeId::Theme2);
        assert_eq!(dark.display_name, "Dark Professional");
        assert_eq!(dark.layout, LayoutVariant::Sidebar);
        assert_eq!(dark.colors.background, "#0f0f23");
        assert_eq!(dark.fonts.primary, "Georgia, serif");

        let creative = CATALOG.resolve(ThemeId::Theme3);
        assert_eq!(creative.display_name, "Colorful Creative");
        assert_eq!(creative.layout, LayoutVariant::Grid);
        assert_eq!(creative.fonts.secondary, "system-ui, sans-serif");

        assert_eq!(CATALOG.resolve(ThemeId::DEFAULT).display_name, "Minimalist");
    }

    #[test]
    fn test_lookup_raw_ids() {
        assert!(CATALOG.contains("theme3"));
        assert!(!CATALOG.contains("theme0"));
        assert_eq!(CATALOG.lookup("theme1").unwrap().layout, LayoutVariant::Default);
    }
}
