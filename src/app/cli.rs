//! cli stuff
use {
    crate::{config::options::ShopConfig, theme::registry::CATALOG},
    clap::Parser,
    color_eyre::{
        Report, Section,
        eyre::{Context, Result},
    },
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
    },
};

/// the CLI
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Cli {
    /// The page to open (`/`, `/about` or `/contact`)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Switch to a theme on startup (`theme1`, `theme2` or `theme3`), it's remembered like a picker choice
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Render the start page once (waiting for the products) and exit
    #[arg(long)]
    pub print: bool,

    /// Print the colors and fonts of a theme as CSS custom properties
    #[arg(long, value_name = "THEME")]
    pub css: Option<String>,

    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile based on the defaults
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,

    /// Generate both the schema and the default config file
    #[arg(short = 'a', long)]
    pub gen_all: bool,
}

impl Cli {
    /// parse the arguments and run the one-shot commands
    ///
    /// exits the process after a one-shot command, otherwise returns the arguments
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    /// returns an error if `--css` names a theme that doesn't exist
    pub fn run() -> Result<Self> {
        let argv = Self::parse();

        if argv.gen_schema || argv.gen_all {
            Self::gen_schema(argv.save)?;
        }

        if argv.gen_default || argv.gen_all {
            Self::gen_defaults(argv.save)?;
        }

        if let Some(theme) = argv.css.as_deref() {
            println!("{}", Self::css(theme)?);
        }

        if argv.is_one_shot() {
            std::process::exit(0);
        }

        Ok(argv)
    }

    /// whether the arguments ask for a one-shot command instead of the storefront
    pub fn is_one_shot(&self) -> bool {
        self.gen_default || self.gen_all || self.gen_schema || self.save || self.css.is_some()
    }

    /// the `:root` block of a theme
    ///
    /// # Errors
    ///
    /// returns an error if `raw` isn't a catalog theme id
    pub fn css(raw: &str) -> Result<String> {
        let theme = CATALOG
            .lookup(raw)
            .wrap_err("Failed to generate theme CSS")
            .suggestion("Valid themes are theme1, theme2 and theme3")?;

        let vars: String = theme
            .to_css_vars()
            .lines()
            .map(|var| format!("  {}\n", var))
            .collect();

        Ok(format!(
            "/* {} ({} layout) */\n:root {{\n{}}}",
            theme.display_name, theme.layout, vars
        ))
    }

    /// save a string to a file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open `path`
    pub fn write_to_file(path: &str, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes()).map_err(Report::new)
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `resources/themeshop.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<ShopConfig>();
        let schema_str = serde_json::to_string_pretty(&schema)?;

        if save {
            Self::write_to_file("resources/themeshop.schema.json", &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `resources/themeshop.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&ShopConfig::default())?;

        if save {
            Self::write_to_file("resources/themeshop.default.toml", &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_for_catalog_theme() {
        let css = Cli::css("theme3").unwrap();

        assert!(css.starts_with("/* Colorful Creative (grid layout) */\n:root {\n"));
        assert!(css.contains("  --background: #f8f2d8ff;\n"));
        assert!(css.contains("  --font-primary: Comic Sans MS, cursive;\n"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_css_rejects_unknown_theme() {
        assert!(Cli::css("theme0").is_err());
    }

    #[test]
    fn test_parses_storefront_flags() {
        let argv = Cli::parse_from(["themeshop", "--page", "/about", "-t", "theme2", "--print"]);

        assert_eq!(argv.page.as_deref(), Some("/about"));
        assert_eq!(argv.theme.as_deref(), Some("theme2"));
        assert!(argv.print);
        assert!(!argv.is_one_shot());
        assert!(Cli::parse_from(["themeshop", "--css", "theme1"]).is_one_shot());
    }
}
