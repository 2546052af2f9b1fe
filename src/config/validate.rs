//! configuration validation stuff
use {
    crate::{config::options::*, route::Route, theme::registry::CATALOG, validator},
    color_eyre::Result,
};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;
}

/// whether a string looks like an http(s) url
fn is_http_url(v: &str) -> bool {
    v.starts_with("http://") || v.starts_with("https://")
}

validator! { CatalogCfg,
    url => |v: &String| is_http_url(v),
        "must be an http:// or https:// url";
}

validator! { HttpConfig,
    connect_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    pool_idle_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    user_agent => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

validator! { ThemeCfg,
    default => |v: &String| CATALOG.contains(v),
        "must be one of: theme1, theme2, theme3";
}

validator! { UiConfig,
    settle_wait_ms => |v: &u64| *v <= 60_000,
        "must be at most 60000";
    start_page => |v: &String| Route::is_known(v),
        "must be one of: /, /about, /contact";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($field), err));
                            }
                        }
                    }
                )*
            };
        }

        validate_nested!(catalog, http, theme, ui, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_errors_are_prefixed() {
        let cfg = ShopConfig {
            catalog: Some(CatalogCfg {
                url: Some("ftp://example.com/products".to_string()),
            }),
            ui: Some(UiConfig {
                start_page: Some("/cart".to_string()),
                ..UiConfig::default()
            }),
            ..ShopConfig::default()
        };

        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("catalog.url:"));
        assert!(errors[1].starts_with("ui.start_page:"));
    }

    #[test]
    fn test_missing_sections_are_not_errors() {
        let cfg = ShopConfig {
            http: None,
            logging: None,
            ..ShopConfig::default()
        };

        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_format_validation_errors() {
        let formatted = format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]);
        assert_eq!(
            formatted,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
