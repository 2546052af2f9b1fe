//! the theme store, the single source of truth for the active theme
pub mod prefs;

use {
    crate::{
        error::{Result, ShopError},
        store::prefs::PreferenceStore,
        theme::{
            ThemeId,
            definition::ThemeDefinition,
            registry::{CATALOG, ThemeRegistry},
        },
    },
    std::fmt,
    tracing::{debug, info, warn},
};

/// the key the active theme id is persisted under
pub const THEME_STORAGE_KEY: &str = "app-theme";

/// a callback run whenever the active theme changes
pub type ThemeObserver = Box<dyn Fn(&ThemeDefinition) + Send>;

/// a callback run whenever the preference storage fails
pub type StorageErrorHook = Box<dyn Fn(&ShopError) + Send>;

/// a handle to a registered [`ThemeObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// holds the active theme, notifies observers about changes and remembers the choice
pub struct ThemeStore {
    /// the active theme
    active: ThemeId,
    /// the theme used when nothing valid was persisted
    default: ThemeId,
    /// the closed catalog every id is checked against
    registry: &'static ThemeRegistry,
    /// where the choice is remembered
    storage: Box<dyn PreferenceStore>,
    /// the registered observers, in registration order
    observers: Vec<(SubscriptionId, ThemeObserver)>,
    /// the id handed to the next subscriber
    next_subscription: u64,
    /// reports storage failures
    storage_error_hook: StorageErrorHook,
}

impl ThemeStore {
    /// make a store using the compiled-in default theme
    pub fn new(storage: impl PreferenceStore + 'static) -> Self {
        Self {
            active: ThemeId::DEFAULT,
            default: ThemeId::DEFAULT,
            registry: &CATALOG,
            storage: Box::new(storage),
            observers: Vec::new(),
            next_subscription: 0,
            storage_error_hook: Box::new(|e| {
                warn!(error = %e, "theme preference will not survive a restart");
            }),
        }
    }

    /// use a different theme as the fallback (and the initial active theme)
    pub fn with_default(mut self, id: ThemeId) -> Self {
        self.default = id;
        self.active = id;
        self
    }

    /// adopt the persisted theme, if there is a valid one
    ///
    /// an absent, unrecognized or unreadable value keeps the default theme
    pub fn initialize(&mut self) -> ThemeId {
        let restored = match self.storage.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemeId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(value = %raw, "ignoring unrecognized persisted theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                self.report_storage_error(e);
                None
            }
        };

        let id = restored.unwrap_or(self.default);
        info!(theme = %id, restored = restored.is_some(), "theme store initialized");

        if id != self.active {
            self.active = id;
            self.notify();
        }

        id
    }

    /// the fully resolved active theme
    pub fn get_active(&self) -> &'static ThemeDefinition {
        self.registry.resolve(self.active)
    }

    /// the id of the active theme
    pub fn active_id(&self) -> ThemeId {
        self.active
    }

    /// every theme that can be selected, in catalog order
    pub fn themes(&self) -> &'static [ThemeDefinition] {
        self.registry.list_themes()
    }

    /// make the theme named by `raw` the active one
    ///
    /// observers are notified before the choice is written to storage, and a failed write
    /// keeps the new theme active (it only won't be remembered)
    ///
    /// # Errors
    ///
    /// returns [`ShopError::InvalidThemeId`] if `raw` isn't in the catalog, in which case
    /// nothing changes and nothing is written
    pub fn select(&mut self, raw: &str) -> Result<&'static ThemeDefinition> {
        let id = raw.parse::<ThemeId>().inspect_err(|_| {
            debug!(raw, "rejected theme outside the catalog");
        })?;

        Ok(self.select_id(id))
    }

    /// make a catalog theme the active one
    pub fn select_id(&mut self, id: ThemeId) -> &'static ThemeDefinition {
        let previous = self.active;
        self.active = id;
        debug!(from = %previous, to = %id, "theme selected");

        self.notify();

        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, id.as_str()) {
            self.report_storage_error(e);
        }

        self.get_active()
    }

    /// register an observer for theme changes
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&ThemeDefinition) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// remove an observer, returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// replace the hook that reports storage failures
    pub fn on_storage_error<F>(&mut self, hook: F)
    where
        F: Fn(&ShopError) + Send + 'static,
    {
        self.storage_error_hook = Box::new(hook);
    }

    /// run every observer with the active theme
    fn notify(&self) {
        let active = self.get_active();

        for (_, observer) in &self.observers {
            observer(active);
        }
    }

    /// hand a storage failure to the hook as [`ShopError::StorageUnavailable`]
    fn report_storage_error(&self, e: ShopError) {
        let e = match e {
            ShopError::StorageUnavailable(_) => e,
            other => ShopError::StorageUnavailable(other.to_string()),
        };

        (self.storage_error_hook)(&e);
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("active", &self.active)
            .field("default", &self.default)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{store::prefs::MemoryPreferences, theme::LayoutVariant},
        std::sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    /// a storage backend where every access fails
    struct BrokenPreferences;

    impl PreferenceStore for BrokenPreferences {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(ShopError::StorageUnavailable("storage disabled".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ShopError::IO(std::io::Error::other("quota exceeded")))
        }
    }

    #[test]
    fn test_starts_on_default_theme() {
        let store = ThemeStore::new(MemoryPreferences::new());

        assert_eq!(store.active_id(), ThemeId::Theme1);
        assert_eq!(store.get_active().layout, LayoutVariant::Default);
        assert_eq!(store.themes().len(), 3);
    }

    #[test]
    fn test_select_outside_catalog_changes_nothing() {
        let prefs = MemoryPreferences::new();
        let mut store = ThemeStore::new(prefs.clone());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        for raw in ["theme4", "", "THEME2", "Dark Professional"] {
            let err = store.select(raw).unwrap_err();
            assert!(matches!(err, ShopError::InvalidThemeId(_)));
        }

        assert_eq!(store.active_id(), ThemeId::Theme1);
        assert!(prefs.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_selection_survives_reload() {
        let prefs = MemoryPreferences::new();
        let mut store = ThemeStore::new(prefs.clone());
        store.initialize();
        store.select("theme2").unwrap();

        let mut reloaded = ThemeStore::new(prefs.clone());
        assert_eq!(reloaded.initialize(), ThemeId::Theme2);
        assert_eq!(reloaded.get_active().display_name, "Dark Professional");
    }

    #[test]
    fn test_corrupt_persisted_value_falls_back() {
        let prefs = MemoryPreferences::with_entry(THEME_STORAGE_KEY, "theme-purple");
        let mut store = ThemeStore::new(prefs);

        assert_eq!(store.initialize(), ThemeId::DEFAULT);
        assert_eq!(store.get_active().id, ThemeId::DEFAULT);
    }

    #[test]
    fn test_configured_default_is_the_fallback() {
        let prefs = MemoryPreferences::with_entry(THEME_STORAGE_KEY, "nope");
        let mut store = ThemeStore::new(prefs).with_default(ThemeId::Theme3);

        assert_eq!(store.initialize(), ThemeId::Theme3);
    }

    #[test]
    fn test_observers_see_the_same_theme_in_order() {
        let mut store = ThemeStore::new(MemoryPreferences::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        for name in ["header", "home", "footer"] {
            let log = log.clone();
            store.subscribe(move |theme| {
                log.lock().unwrap().push((name, theme.id));
            });
        }

        store.select("theme3").unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("header", ThemeId::Theme3),
                ("home", ThemeId::Theme3),
                ("footer", ThemeId::Theme3),
            ]
        );
    }

    #[test]
    fn test_unsubscribed_observer_is_not_called() {
        let mut store = ThemeStore::new(MemoryPreferences::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let sub = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.select("theme2").unwrap();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.select("theme3").unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observers_run_before_persisting() {
        let prefs = MemoryPreferences::new();
        let mut store = ThemeStore::new(prefs.clone());
        let persisted_during_notify = Arc::new(Mutex::new(None));
        let slot = persisted_during_notify.clone();
        let handle = prefs.clone();
        store.subscribe(move |_| {
            *slot.lock().unwrap() = Some(handle.read(THEME_STORAGE_KEY).unwrap());
        });

        store.select("theme2").unwrap();

        assert_eq!(*persisted_during_notify.lock().unwrap(), Some(None));
        assert_eq!(
            prefs.read(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("theme2")
        );
    }

    #[test]
    fn test_storage_failures_degrade_without_rollback() {
        let mut store = ThemeStore::new(BrokenPreferences);
        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = reported.clone();
        store.on_storage_error(move |e| sink.lock().unwrap().push(e.to_string()));

        assert_eq!(store.initialize(), ThemeId::DEFAULT);
        let active = store.select("theme3").unwrap();

        assert_eq!(active.id, ThemeId::Theme3);
        assert_eq!(store.active_id(), ThemeId::Theme3);

        let reported = reported.lock().unwrap();
        assert_eq!(reported.len(), 2);
        assert!(
            reported
                .iter()
                .all(|e| e.starts_with("preference storage unavailable"))
        );
    }
}
