//! the compiled-in theme presets
use crate::{
    impl_theme,
    theme::{
        LayoutVariant, ThemeId,
        palette::{ThemeColors, ThemeFonts},
    },
};

impl_theme!(Minimalist, ThemeId::Theme1, "Minimalist", LayoutVariant::Default,
    colors: ThemeColors {
        primary: "#2563eb",
        secondary: "#64748b",
        background: "#ffffff",
        surface: "#f8fafc",
        text: "#1e293b",
        text_secondary: "#64748b",
        accent: "#3b82f6",
    },
    fonts: ThemeFonts {
        primary: "Inter, system-ui, sans-serif",
        secondary: "Inter, system-ui, sans-serif",
    },
);

impl_theme!(DarkProfessional, ThemeId::Theme2, "Dark Professional", LayoutVariant::Sidebar,
    colors: ThemeColors {
        primary: "#8b5cf6",
        secondary: "#06b6d4",
        background: "#0f0f23",
        surface: "#1e1b4b",
        text: "#f1f5f9",
        text_secondary: "#cbd5e1",
        accent: "#10b981",
    },
    fonts: ThemeFonts {
        primary: "Georgia, serif",
        secondary: "Georgia, serif",
    },
);

impl_theme!(ColorfulCreative, ThemeId::Theme3, "Colorful Creative", LayoutVariant::Grid,
    colors: ThemeColors {
        primary: "#ec4899",
        secondary: "#8b5cf6",
        background: "#f8f2d8ff",
        surface: "#ffffff",
        text: "#1f2937",
        text_secondary: "#6b7280",
        accent: "#10b981",
    },
    fonts: ThemeFonts {
        primary: "Comic Sans MS, cursive",
        secondary: "system-ui, sans-serif",
    },
);
