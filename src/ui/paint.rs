//! drawing styled text with the active theme's colors
use {
    crate::{
        theme::{definition::ThemeDefinition, palette::ColorRole},
        ui::text::{Line, Span},
    },
    owo_colors::{DynColors, OwoColorize},
};

/// convert a `#rgb`, `#rrggbb` or `#rrggbbaa` hex code into a `DynColors`
///
/// the alpha channel of 8 digit codes is ignored, a terminal can't blend
pub fn parse_color(color_str: &str) -> Option<DynColors> {
    let hex = color_str.strip_prefix('#')?;

    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        6 | 8 => Some(DynColors::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => Some(DynColors::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => None,
    }
}

/// paints spans with the colors of a theme
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    /// the theme whose colors are used
    theme: &'a ThemeDefinition,
    /// whether to emit color codes at all
    enabled: bool,
}

impl<'a> Painter<'a> {
    /// make a painter for a theme
    pub fn new(theme: &'a ThemeDefinition, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    /// a painter that never emits color codes
    pub fn plain(theme: &'a ThemeDefinition) -> Self {
        Self::new(theme, false)
    }

    /// whether color codes are emitted
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// the terminal color of a role
    pub fn color(&self, role: ColorRole) -> Option<DynColors> {
        parse_color(self.theme.colors.get(role))
    }

    /// draw one span
    pub fn span(&self, span: &Span) -> String {
        if !self.enabled {
            return span.text.clone();
        }

        let fg = span.fg.and_then(|role| self.color(role));
        let bg = span.bg.and_then(|role| self.color(role));

        match (fg, bg, span.bold) {
            (None, None, false) => span.text.clone(),
            (None, None, true) => span.text.bold().to_string(),
            (Some(fg), None, bold) => {
                if bold {
                    span.text.color(fg).bold().to_string()
                } else {
                    span.text.color(fg).to_string()
                }
            }
            (None, Some(bg), bold) => {
                if bold {
                    span.text.on_color(bg).bold().to_string()
                } else {
                    span.text.on_color(bg).to_string()
                }
            }
            (Some(fg), Some(bg), bold) => {
                if bold {
                    span.text.color(fg).on_color(bg).bold().to_string()
                } else {
                    span.text.color(fg).on_color(bg).to_string()
                }
            }
        }
    }

    /// draw one line
    pub fn line(&self, line: &Line) -> String {
        line.spans.iter().map(|span| self.span(span)).collect()
    }

    /// draw a block of lines, newline terminated
    pub fn lines<'l>(&self, lines: impl IntoIterator<Item = &'l Line>) -> String {
        let mut out = String::new();

        for line in lines {
            out.push_str(&self.line(line));
            out.push('\n');
        }

        out
    }

    /// a small block in the given hex color, for the theme picker
    pub fn swatch(&self, hex: &str) -> String {
        match parse_color(hex).filter(|_| self.enabled) {
            Some(color) => "■".color(color).to_string(),
            None => "■".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::theme::{ThemeId, registry::CATALOG},
    };

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#2563eb"), Some(DynColors::Rgb(0x25, 0x63, 0xeb)));
        assert_eq!(parse_color("#F00"), Some(DynColors::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#f8f2d8ff"), Some(DynColors::Rgb(0xf8, 0xf2, 0xd8)));
        assert_eq!(parse_color("#GG0000"), None);
        assert_eq!(parse_color("2563eb"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_every_catalog_color_parses() {
        for theme in CATALOG.list_themes() {
            for role in ColorRole::ALL {
                assert!(
                    parse_color(theme.colors.get(role)).is_some(),
                    "{} {:?}",
                    theme.id,
                    role
                );
            }
        }
    }

    #[test]
    fn test_disabled_painter_emits_plain_text() {
        let theme = CATALOG.resolve(ThemeId::Theme2);
        let painter = Painter::plain(theme);
        let line = Line::from_span(Span::colored("$9.99", ColorRole::Primary).bold());

        assert_eq!(painter.line(&line), "$9.99");
        assert_eq!(painter.swatch(theme.colors.primary), "■");
    }

    #[test]
    fn test_enabled_painter_uses_truecolor() {
        let theme = CATALOG.resolve(ThemeId::Theme1);
        let painter = Painter::new(theme, true);
        let painted = painter.span(&Span::colored("x", ColorRole::Primary));

        // #2563eb
        assert!(painted.contains("38;2;37;99;235"));
        assert!(painted.contains('x'));
    }
}
