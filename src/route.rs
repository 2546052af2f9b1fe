//! page routing
use std::fmt;

/// a page of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// the landing page
    #[default]
    Home,
    /// the about page
    About,
    /// the contact page
    Contact,
}

impl Route {
    /// every route, in navigation order
    pub const ALL: [Route; 3] = [Self::Home, Self::About, Self::Contact];

    /// resolve a path, unknown paths land on the home page
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.trim_end_matches('/');

        match path {
            "/about" | "about" => Self::About,
            "/contact" | "contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    /// whether `path` names a known page
    pub fn is_known(path: &str) -> bool {
        let path = path.trim();
        Self::ALL.iter().any(|route| route.path() == path)
            || Self::parse(path) != Self::Home
    }

    /// the path of the route
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// the navigation label of the route
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/contact/"), Route::Contact);
        assert_eq!(Route::parse("contact"), Route::Contact);
    }

    #[test]
    fn test_unknown_paths_land_home() {
        for path in ["/cart", "/about/team", "", "/ABOUT"] {
            assert_eq!(Route::parse(path), Route::Home);
        }

        assert!(!Route::is_known("/cart"));
        assert!(Route::is_known("/"));
        assert!(Route::is_known("/about"));
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
