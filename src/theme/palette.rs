//! pallete stuff

/// the seven named colors every theme carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// brand color, used for prices, highlights and buttons
    pub primary: &'static str,
    /// secondary brand color
    pub secondary: &'static str,
    /// page background
    pub background: &'static str,
    /// slightly elevated surface color (cards, header, sidebar)
    pub surface: &'static str,
    /// main text color
    pub text: &'static str,
    /// muted text color for less important text
    pub text_secondary: &'static str,
    /// accent color (rating stars)
    pub accent: &'static str,
}

/// the named font stacks of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeFonts {
    /// headings
    pub primary: &'static str,
    /// body copy
    pub secondary: &'static str,
}

/// a named slot in [`ThemeColors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// [`ThemeColors::primary`]
    Primary,
    /// [`ThemeColors::secondary`]
    Secondary,
    /// [`ThemeColors::background`]
    Background,
    /// [`ThemeColors::surface`]
    Surface,
    /// [`ThemeColors::text`]
    Text,
    /// [`ThemeColors::text_secondary`]
    TextSecondary,
    /// [`ThemeColors::accent`]
    Accent,
}

impl ColorRole {
    /// every role, in declaration order
    pub const ALL: [ColorRole; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::TextSecondary,
        Self::Accent,
    ];

    /// the css custom property name of the role
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::Secondary => "--secondary",
            Self::Background => "--background",
            Self::Surface => "--surface",
            Self::Text => "--text",
            Self::TextSecondary => "--text-secondary",
            Self::Accent => "--accent",
        }
    }
}

impl ThemeColors {
    /// get the color assigned to a role
    pub const fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::Accent => self.accent,
        }
    }

    /// convert the pallete to CSS
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        for role in ColorRole::ALL {
            vars.push_str(&format!("{}: {};\n", role.css_name(), self.get(role)));
        }

        vars
    }
}

impl ThemeFonts {
    /// convert the font stacks to CSS
    pub fn to_css_vars(&self) -> String {
        format!(
            "--font-primary: {};\n--font-secondary: {};\n",
            self.primary, self.secondary
        )
    }
}
