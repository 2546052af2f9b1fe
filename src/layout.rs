//! maps a layout variant and the fetched products onto the landing page arrangement
use crate::theme::LayoutVariant;

/// the categories listed in the sidebar layout
pub const SIDEBAR_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Jewelry", "Books"];

/// the sections of the landing page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// hero, features and products in one column
    Stacked,
    /// a category sidebar next to a column with the hero and products
    SidebarAndMain,
    /// hero, features and a denser product grid
    DenseGrid,
}

/// the resolved landing page
#[derive(Debug, Clone, PartialEq)]
pub struct LandingLayout<'a, T> {
    /// the section arrangement
    pub arrangement: Arrangement,
    /// the products to show, in catalog order
    pub products: &'a [T],
    /// how many product cards go on a row
    pub columns: usize,
    /// whether the features section is shown
    pub show_features: bool,
    /// the side navigation entries (empty when there's no sidebar)
    pub categories: &'static [&'static str],
}

/// the most products a layout shows
pub const fn max_products(layout: LayoutVariant) -> usize {
    match layout {
        LayoutVariant::Sidebar => 6,
        LayoutVariant::Default | LayoutVariant::Grid => 8,
    }
}

/// the number of product columns of a layout
pub const fn columns(layout: LayoutVariant) -> usize {
    match layout {
        LayoutVariant::Grid => 4,
        LayoutVariant::Default | LayoutVariant::Sidebar => 3,
    }
}

/// resolve the landing page for a layout
pub fn resolve<T>(layout: LayoutVariant, products: &[T]) -> LandingLayout<'_, T> {
    let visible = products.len().min(max_products(layout));

    let (arrangement, categories): (_, &'static [&'static str]) = match layout {
        LayoutVariant::Default => (Arrangement::Stacked, &[]),
        LayoutVariant::Sidebar => (Arrangement::SidebarAndMain, &SIDEBAR_CATEGORIES),
        LayoutVariant::Grid => (Arrangement::DenseGrid, &[]),
    };

    LandingLayout {
        arrangement,
        products: &products[..visible],
        columns: columns(layout),
        show_features: arrangement != Arrangement::SidebarAndMain,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUTS: [LayoutVariant; 3] = [
        LayoutVariant::Default,
        LayoutVariant::Sidebar,
        LayoutVariant::Grid,
    ];

    #[test]
    fn test_caps_hold_for_every_length() {
        for layout in LAYOUTS {
            for n in 0..=20 {
                let products: Vec<usize> = (0..n).collect();
                let resolved = resolve(layout, &products);

                assert_eq!(resolved.products.len(), n.min(max_products(layout)));
                assert_eq!(resolved.products, &products[..resolved.products.len()]);
            }
        }
    }

    #[test]
    fn test_sidebar_arrangement() {
        let products: Vec<u8> = (0..10).collect();
        let resolved = resolve(LayoutVariant::Sidebar, &products);

        assert_eq!(resolved.arrangement, Arrangement::SidebarAndMain);
        assert_eq!(resolved.products.len(), 6);
        assert_eq!(resolved.columns, 3);
        assert!(!resolved.show_features);
        assert_eq!(resolved.categories, SIDEBAR_CATEGORIES);
    }

    #[test]
    fn test_grid_is_denser() {
        let products = [1, 2, 3];
        let grid = resolve(LayoutVariant::Grid, &products);
        let default = resolve(LayoutVariant::Default, &products);

        assert_eq!(grid.columns, 4);
        assert_eq!(default.columns, 3);
        assert_eq!(grid.products, &[1, 2, 3]);
        assert!(grid.show_features && default.show_features);
        assert!(grid.categories.is_empty());
    }
}
