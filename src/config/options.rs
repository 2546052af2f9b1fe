//! every single available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// the name of the config file, both global and local
const CONFIG_FILE_NAME: &str = "themeshop.toml";

/// Settings for the remote product catalog
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct CatalogCfg {
    /// The endpoint returning the full product catalog as a JSON array
    #[schemars(url)]
    #[default(Some("https://fakestoreapi.com/products".to_string()))]
    pub url: Option<String>,
}

/// Configuration options for making HTTP requests
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct HttpConfig {
    /// Connection timeout in seconds
    #[default(Some(10))]
    pub connect_timeout_secs: Option<u64>,

    /// Request timeout in seconds (0 disables the timeout, a hung request stays pending)
    #[default(Some(0))]
    pub timeout_secs: Option<u64>,

    /// Connection pool idle timeout in seconds
    #[default(Some(90))]
    pub pool_idle_timeout_secs: Option<u64>,

    /// User agent string sent with catalog requests
    #[default(Some(format!(
        "{}/v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )))]
    pub user_agent: Option<String>,
}

/// Settings for theme selection and its persistence
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ThemeCfg {
    /// The theme used when no valid choice has been remembered
    ///
    /// Possible values:
    /// - theme1 (Minimalist, default)
    /// - theme2 (Dark Professional)
    /// - theme3 (Colorful Creative)
    #[default(Some("theme1".to_string()))]
    pub default: Option<String>,

    /// Remember the chosen theme between runs
    #[default(Some(true))]
    pub persist: Option<bool>,

    /// Where to store the remembered theme (empty for the platform data directory)
    #[default(Some(String::new()))]
    pub storage_path: Option<String>,
}

/// Settings for the terminal UI
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct UiConfig {
    /// Paint pages with the active theme's colors
    #[default(Some(true))]
    pub color: Option<bool>,

    /// How long the home page waits for products before drawing the loading state
    #[default(Some(1500))]
    pub settle_wait_ms: Option<u64>,

    /// The page to open on startup (`/`, `/about` or `/contact`)
    #[default(Some("/".to_string()))]
    pub start_page: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema, SmartDefault)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use an excessively pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// The log output format
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// themeshop configuration options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ShopConfig {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// Product catalog settings
    #[default(Some(CatalogCfg::default()))]
    pub catalog: Option<CatalogCfg>,

    /// HTTP client configuration
    #[default(Some(HttpConfig::default()))]
    pub http: Option<HttpConfig>,

    /// Theme settings
    #[default(Some(ThemeCfg::default()))]
    pub theme: Option<ThemeCfg>,

    /// UI settings
    #[default(Some(UiConfig::default()))]
    pub ui: Option<UiConfig>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl ShopConfig {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::load_defaults()?;
        let mut builder = Self::create_builder(&defaults)?;

        builder = builder.add_source(config::File::from(global_config_path.as_path()).required(false));

        if let Some(local_config) = Self::find_local_config()? {
            builder = builder.add_source(config::File::from(local_config.as_path()).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THEMESHOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: ShopConfig = settings
            .try_deserialize::<ShopConfig>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// get the global config file path
    fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// load default config from embedded default config file
    pub fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/themeshop.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &ShopConfig) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let builder = Config::builder();
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default config struct to config source")?;

        Ok(builder.add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| {
                let formatted = format_validation_errors(&errors);
                eyre!(formatted)
            })
            .wrap_err("config validation failed")
            .suggestion("Check your themeshop.toml for invalid values")
            .suggestion("Run with --gen-default to see valid options")
    }

    /// find the local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(curr_dir
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists()))
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &ShopConfig) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))?;

        Ok(())
    }
}
