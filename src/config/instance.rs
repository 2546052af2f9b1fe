//! config singleton management stuff
use {
    crate::config::options::ShopConfig,
    color_eyre::{Result, eyre::Context},
    std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// global config instance, the built-in defaults until [`init_config`] runs
static CONFIG: LazyLock<RwLock<ShopConfig>> = LazyLock::new(|| RwLock::new(ShopConfig::default()));

/// load the config from disk and the environment into the global instance
///
/// # Errors
///
/// returns an error if any config file can't be read or parsed
/// returns an error if the merged config fails validation
pub fn init_config() -> Result<()> {
    let loaded = ShopConfig::load().wrap_err("Failed to load configuration")?;
    replace_config(loaded)
}

/// swap the global instance for `cfg`
fn replace_config(cfg: ShopConfig) -> Result<()> {
    let mut config = config_mut().wrap_err("failed to acquire write lock for cfg init")?;
    *config = cfg;

    Ok(())
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, ShopConfig>> {
    CONFIG
        .read()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a rw ref to the config
fn config_mut() -> Result<RwLockWriteGuard<'static, ShopConfig>> {
    CONFIG
        .write()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&ShopConfig) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}
