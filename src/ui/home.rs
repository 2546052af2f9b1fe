//! the landing page
use {
    crate::{
        layout::{self, Arrangement, LandingLayout},
        loader::FetchState,
        models::Product,
        theme::{definition::ThemeDefinition, palette::ColorRole},
        ui::text::{self, Block, Line, Span},
    },
    std::borrow::Cow,
};

/// the hero heading
pub const HERO_TITLE: &str = "Welcome to ThemeApp";

/// the line under the hero heading
pub const HERO_TAGLINE: &str = "Experience the power of dynamic theming with beautiful layouts, smooth animations, and real-time product data.";

/// the heading of the products section
pub const PRODUCTS_HEADING: &str = "Featured Products";

/// the width of the sidebar column
const SIDEBAR_WIDTH: usize = 18;

/// the space between grid cells
const GAP: usize = 2;

/// a selling point shown in the features section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// the feature name
    pub title: &'static str,
    /// one sentence about it
    pub description: &'static str,
}

/// the features section
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Beautiful Themes",
        description: "Switch between stunning themes with unique layouts and styles",
    },
    Feature {
        title: "Fast Performance",
        description: "Optimized for speed with smooth animations and transitions",
    },
    Feature {
        title: "Product Showcase",
        description: "Browse products with real-time API integration",
    },
];

/// the price as shown on a card, e.g. `$9.99` or `$10`
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}

/// the rating as shown on a card, e.g. `★ 4.5`
pub fn rating_label(rate: f64) -> String {
    format!("★ {}", rate)
}

/// the image url of a product, or a placeholder naming it when there's none
pub fn image_src(product: &Product) -> Cow<'_, str> {
    if product.image.trim().is_empty() {
        Cow::Owned(format!(
            "/placeholder.svg?height=300&width=300&text={}",
            urlencoding::encode(&product.title)
        ))
    } else {
        Cow::Borrowed(&product.image)
    }
}

/// a product card
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    /// the product name
    pub title: &'a str,
    /// the product description
    pub description: &'a str,
    /// the rating label
    pub rating: String,
    /// the price label
    pub price: String,
    /// the image url
    pub image: Cow<'a, str>,
}

impl<'a> ProductCard<'a> {
    /// make the card of a product
    pub fn new(product: &'a Product) -> Self {
        Self {
            title: &product.title,
            description: &product.description,
            rating: rating_label(product.rating.rate),
            price: price_label(product.price),
            image: image_src(product),
        }
    }

    /// draw the card into a cell `width` columns wide
    pub fn render(&self, width: usize) -> Block {
        let mut block = vec![Line::colored(
            text::truncate(&format!("▣ {}", self.image), width),
            ColorRole::TextSecondary,
        )];

        for line in text::clamp(self.title, width, 2) {
            block.push(Line::from_span(Span::colored(line, ColorRole::Text).bold()));
        }

        for line in text::clamp(self.description, width, 2) {
            block.push(Line::colored(line, ColorRole::TextSecondary));
        }

        let mut footer = Line::from_span(Span::colored("★", ColorRole::Accent))
            .with(Span::colored(
                self.rating.trim_start_matches('★').to_string(),
                ColorRole::TextSecondary,
            ));
        let pad = width.saturating_sub(footer.width() + self.price.chars().count());
        footer.push(Span::plain(" ".repeat(pad.max(1))));
        footer.push(Span::colored(self.price.clone(), ColorRole::Primary).bold());
        block.push(footer);

        block.push(Line::from_span(
            Span::colored("[ Add to Cart ]", ColorRole::Primary).bold(),
        ));

        block
    }
}

/// what the products section shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsSection<'a> {
    /// the fetch is still in flight
    Loading,
    /// the fetch failed
    Error(&'a str),
    /// the cards of the visible products
    Cards(Vec<ProductCard<'a>>),
}

impl ProductsSection<'_> {
    /// how many product cards are shown
    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// the landing page, resolved for a theme and a fetch state
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    /// the resolved arrangement
    pub layout: LandingLayout<'a, Product>,
    /// the products section
    pub products: ProductsSection<'a>,
}

impl<'a> HomeView<'a> {
    /// resolve the landing page
    pub fn build(theme: &ThemeDefinition, state: &'a FetchState<Product>) -> Self {
        let layout = layout::resolve(theme.layout, state.items().unwrap_or_default());

        let products = match state {
            FetchState::Pending => ProductsSection::Loading,
            FetchState::Failed(msg) => ProductsSection::Error(msg),
            FetchState::Succeeded(_) => {
                ProductsSection::Cards(layout.products.iter().map(ProductCard::new).collect())
            }
        };

        Self { layout, products }
    }

    /// draw the page `width` columns wide
    pub fn render(&self, width: usize) -> Block {
        match self.layout.arrangement {
            Arrangement::SidebarAndMain => {
                let main_width = width.saturating_sub(SIDEBAR_WIDTH + GAP);
                let mut main = hero(main_width);
                main.extend(self.render_products(main_width));

                text::beside(self.sidebar(), SIDEBAR_WIDTH, main, GAP)
            }
            Arrangement::Stacked | Arrangement::DenseGrid => {
                let mut page = hero(width);

                if self.layout.show_features {
                    page.extend(features(width));
                }

                page.extend(self.render_products(width));
                page
            }
        }
    }

    /// the category navigation of the sidebar layout
    fn sidebar(&self) -> Block {
        let mut block = vec![
            Line::from_span(Span::colored("Categories", ColorRole::Text).bold()),
            Line::blank(),
        ];

        for category in self.layout.categories {
            block.push(Line::colored(format!("  {}", category), ColorRole::TextSecondary));
        }

        block
    }

    /// the products section
    fn render_products(&self, width: usize) -> Block {
        let mut block = vec![
            Line::blank(),
            Line::from_span(Span::colored(PRODUCTS_HEADING, ColorRole::Text).bold()),
            Line::blank(),
        ];

        match &self.products {
            ProductsSection::Loading => {
                block.push(Line::colored("⟳ Loading products...", ColorRole::Primary));
            }
            ProductsSection::Error(msg) => {
                block.push(Line::colored(
                    format!("Error loading products: {}", msg),
                    ColorRole::Primary,
                ));
            }
            ProductsSection::Cards(cards) => {
                let cell = text::cell_width(self.layout.columns, width, GAP);
                let blocks = cards.iter().map(|card| card.render(cell)).collect();

                block.extend(text::grid(blocks, self.layout.columns, width, GAP));
            }
        }

        block
    }
}

/// the hero section
fn hero(width: usize) -> Block {
    let mut block = vec![Line::from_span(
        Span::colored(HERO_TITLE, ColorRole::Text).bold(),
    )];

    for line in text::wrap(HERO_TAGLINE, width) {
        block.push(Line::colored(line, ColorRole::TextSecondary));
    }

    block.push(Line::blank());
    block.push(
        Line::from_span(Span::colored("[ Explore Products ]", ColorRole::Primary).bold())
            .with(Span::plain("  "))
            .with(Span::colored("[ Learn More ]", ColorRole::Primary)),
    );

    block
}

/// the features section
fn features(width: usize) -> Block {
    let cell = text::cell_width(FEATURES.len(), width, GAP);
    let blocks = FEATURES
        .iter()
        .map(|feature| {
            let mut block = vec![Line::from_span(
                Span::colored(feature.title, ColorRole::Text).bold(),
            )];

            for line in text::wrap(feature.description, cell) {
                block.push(Line::colored(line, ColorRole::TextSecondary));
            }

            block
        })
        .collect();

    let mut block = vec![
        Line::blank(),
        Line::from_span(Span::colored("Features", ColorRole::Text).bold()),
        Line::blank(),
    ];
    block.extend(text::grid(blocks, FEATURES.len(), width, GAP));
    block
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            models::Rating,
            theme::{ThemeId, registry::CATALOG},
        },
    };

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 9.99,
            description: "d".to_string(),
            category: "c".to_string(),
            image: "u".to_string(),
            rating: Rating { rate: 4.5, count: 3 },
        }
    }

    fn plain(block: &Block) -> String {
        block.iter().map(|line| line.plain() + "\n").collect()
    }

    #[test]
    fn test_price_and_rating_labels() {
        assert_eq!(price_label(9.99), "$9.99");
        assert_eq!(price_label(10.0), "$10");
        assert_eq!(price_label(109.95), "$109.95");
        assert_eq!(rating_label(4.0), "★ 4");
        assert_eq!(rating_label(3.9), "★ 3.9");
    }

    #[test]
    fn test_placeholder_for_missing_image() {
        let mut p = product(1, "Blue Mug & Co");
        p.image = String::new();

        assert_eq!(
            image_src(&p),
            "/placeholder.svg?height=300&width=300&text=Blue%20Mug%20%26%20Co"
        );
        assert_eq!(image_src(&product(2, "x")), "u");
    }

    #[test]
    fn test_pending_shows_loading() {
        let state = FetchState::Pending;
        let view = HomeView::build(CATALOG.resolve(ThemeId::Theme1), &state);

        assert_eq!(view.products, ProductsSection::Loading);
        assert!(plain(&view.render(80)).contains("Loading products"));
    }

    #[test]
    fn test_sidebar_layout_caps_cards_and_hides_features() {
        let state = FetchState::Succeeded((0..10).map(|i| product(i, "p")).collect());
        let view = HomeView::build(CATALOG.resolve(ThemeId::Theme2), &state);
        let page = plain(&view.render(100));

        assert_eq!(view.products.card_count(), 6);
        assert!(page.contains("Categories"));
        assert!(page.contains("Jewelry"));
        assert!(!page.contains("Beautiful Themes"));
    }

    #[test]
    fn test_grid_layout_shows_eight() {
        let state = FetchState::Succeeded((0..10).map(|i| product(i, "p")).collect());
        let view = HomeView::build(CATALOG.resolve(ThemeId::Theme3), &state);

        assert_eq!(view.products.card_count(), 8);
        assert_eq!(view.layout.columns, 4);
        assert!(plain(&view.render(120)).contains("Fast Performance"));
    }

    #[test]
    fn test_card_renders_every_field() {
        let p = product(1, "A");
        let card = plain(&ProductCard::new(&p).render(30));

        assert!(card.contains("▣ u"));
        assert!(card.contains("★ 4.5"));
        assert!(card.contains("$9.99"));
        assert!(card.contains("Add to Cart"));
    }
}
