//! the terminal pages
pub mod about;
pub mod contact;
pub mod header;
pub mod home;
pub mod paint;
pub mod text;

use crate::{
    loader::FetchState,
    models::Product,
    route::Route,
    theme::{definition::ThemeDefinition, palette::ColorRole},
    ui::{
        contact::ContactForm,
        home::HomeView,
        paint::Painter,
        text::{Block, Line, Span},
    },
};

/// the width pages are drawn at when the terminal size is unknown
pub const DEFAULT_WIDTH: usize = 100;

/// everything needed to draw one screen
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// the page to draw
    pub route: Route,
    /// the active theme
    pub theme: &'a ThemeDefinition,
    /// the state of the product fetch (only read on the home page)
    pub products: &'a FetchState<Product>,
    /// the contact form (only read on the contact page)
    pub contact: &'a ContactForm,
    /// how many columns to use
    pub width: usize,
    /// whether to paint with the theme's colors
    pub color: bool,
}

impl Frame<'_> {
    /// the header, page and footer, unstyled by the terminal
    pub fn lines(&self) -> Block {
        let mut lines = Vec::new();

        for line in header::render(self.theme, self.route, self.width) {
            lines.push(with_background(line, ColorRole::Surface));
        }

        lines.push(Line::blank());

        let page = match self.route {
            Route::Home => HomeView::build(self.theme, self.products).render(self.width),
            Route::About => about::render(self.width),
            Route::Contact => contact::render(self.contact, self.width),
        };

        lines.extend(page);
        lines.push(Line::blank());
        lines.extend(footer(self.theme, self.width));

        lines
    }

    /// draw the screen
    pub fn render(&self) -> String {
        let painter = Painter::new(self.theme, self.color);

        if !painter.is_enabled() {
            return painter.lines(&self.lines());
        }

        let lines: Vec<Line> = self
            .lines()
            .into_iter()
            .map(|line| with_background(line.pad_to(self.width), ColorRole::Background))
            .collect();

        painter.lines(&lines)
    }
}

/// put every span that has no background of its own on `role`
fn with_background(mut line: Line, role: ColorRole) -> Line {
    for span in &mut line.spans {
        span.bg.get_or_insert(role);
    }

    line
}

/// the theme summary at the bottom of every page
///
/// a terminal can't switch fonts, so the font stacks are listed instead
fn footer(theme: &ThemeDefinition, width: usize) -> Block {
    vec![
        Line::colored("─".repeat(width), ColorRole::TextSecondary),
        Line::from_span(Span::colored(
            format!("{} · {} layout", theme.display_name, theme.layout),
            ColorRole::TextSecondary,
        )),
        Line::from_span(Span::colored(
            text::truncate(
                &format!(
                    "fonts: {} / {}",
                    theme.fonts.primary, theme.fonts.secondary
                ),
                width,
            ),
            ColorRole::TextSecondary,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            client::{CatalogClient, testing},
            config::options::HttpConfig,
            loader::ProductLoader,
            store::{ThemeStore, prefs::MemoryPreferences},
            theme::ThemeId,
        },
        std::sync::Arc,
    };

    fn frame<'a>(
        route: Route,
        theme: &'a ThemeDefinition,
        products: &'a FetchState<Product>,
        contact: &'a ContactForm,
    ) -> Frame<'a> {
        Frame {
            route,
            theme,
            products,
            contact,
            width: DEFAULT_WIDTH,
            color: false,
        }
    }

    async fn settle(status: &'static str, body: String) -> FetchState<Product> {
        let url = testing::serve(status, body).await;
        let client = CatalogClient::new(url, &HttpConfig::default()).unwrap();
        let loader = ProductLoader::activate(Arc::new(client));

        loader.wait_settled().await
    }

    #[tokio::test]
    async fn test_home_renders_fetched_product() {
        let store = ThemeStore::new(MemoryPreferences::new());
        let state = settle("200 OK", testing::one_product_body()).await;
        let contact = ContactForm::default();

        let view = HomeView::build(store.get_active(), &state);
        assert_eq!(view.products.card_count(), 1);

        let screen = frame(Route::Home, store.get_active(), &state, &contact).render();
        assert!(screen.contains("Featured Products"));
        assert!(screen.contains("$9.99"));
        assert!(screen.contains("★ 4.5"));
        assert!(screen.lines().any(|line| line.trim() == "A"));
        assert!(screen.contains("Inter, system-ui, sans-serif"));
    }

    #[tokio::test]
    async fn test_failed_fetch_still_navigates_and_switches_themes() {
        let mut store = ThemeStore::new(MemoryPreferences::new());
        let state = settle("500 Internal Server Error", String::new()).await;
        let contact = ContactForm::default();

        let view = HomeView::build(store.get_active(), &state);
        assert_eq!(view.products.card_count(), 0);

        let home = frame(Route::Home, store.get_active(), &state, &contact).render();
        assert!(home.contains("Error loading products: Failed to fetch products"));
        assert!(!home.contains("Add to Cart"));

        let theme = store.select("theme2").unwrap();
        assert_eq!(theme.id, ThemeId::Theme2);

        let about = frame(Route::About, store.get_active(), &state, &contact).render();
        assert!(about.contains("About ThemeApp"));
        assert!(about.contains("[About]"));
        assert!(about.contains("Dark Professional"));

        let home = frame(Route::Home, store.get_active(), &state, &contact).render();
        assert!(home.contains("Categories"));
        assert!(home.contains("Error loading products"));
    }

    #[test]
    fn test_colored_frame_paints_the_background() {
        let theme = crate::theme::registry::CATALOG.resolve(ThemeId::Theme2);
        let state = FetchState::Pending;
        let contact = ContactForm::default();
        let mut screen = frame(Route::Contact, theme, &state, &contact);
        screen.color = true;

        // #0f0f23 as a truecolor background
        assert!(screen.render().contains("48;2;15;15;35"));
    }
}
