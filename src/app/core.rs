//! the core app
use {
    super::{
        cli::Cli,
        logging,
        menus::{self, MainMenu},
    },
    crate::{
        client::{CatalogClient, CatalogSource},
        config::instance::init_config,
        error::{Result, ShopError},
        getopt,
        loader::{FetchState, ProductLoader},
        models::Product,
        route::Route,
        store::{
            ThemeStore,
            prefs::{MemoryPreferences, RedbPreferences},
        },
        theme::ThemeId,
        ui::{
            DEFAULT_WIDTH, Frame,
            contact::{ContactField, ContactForm},
            header,
            paint::Painter,
        },
    },
    crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{self, Clear, ClearType},
    },
    inquire::{InquireError, Select, Text},
    std::{
        io::{IsTerminal, stdout},
        sync::Arc,
        time::Duration,
    },
    tracing::{debug, info, warn},
};

/// the themeshop app
pub struct ShopApp {
    /// the active theme and its persistence
    store: ThemeStore,
    /// where products come from
    source: Arc<dyn CatalogSource>,
    /// the page being shown
    route: Route,
    /// the contact form
    contact: ContactForm,
    /// the product fetch of the mounted home page
    loader: Option<ProductLoader>,
    /// a message shown once under the next frame
    notice: Option<String>,
    /// paint with theme colors
    color: bool,
    /// how long the home page waits for products before drawing
    settle_wait: Duration,
    /// render once and exit
    print_once: bool,
}

impl ShopApp {
    /// initialize themeshop
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. handles any cli arguments if any
    /// - 3. loads and validates the config, then sets up logging
    /// - 4. sets up the theme store and restores the remembered theme
    /// - 5. applies `--theme`, if given
    /// - 6. sets up the catalog client
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook can't be installed
    /// returns an error if the cli fails to run
    /// returns an error if the config can't be loaded or is invalid
    /// returns an error if it fails to setup logging
    /// returns an error if the catalog client can't be built
    pub async fn init() -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        color_eyre::install()?;

        let argv = Cli::run()?;
        init_config()?;

        if getopt!(logging.enable) {
            logging::setup()?;
        }

        let mut store = Self::setup_store();

        store.subscribe(|theme| {
            inquire::set_global_render_config(menus::render_config(theme));
        });

        store.initialize();
        inquire::set_global_render_config(menus::render_config(store.get_active()));

        let mut notice = None;

        if let Some(raw) = argv.theme.as_deref()
            && let Err(e) = store.select(raw)
        {
            warn!(error = %e, "ignoring --theme");
            notice = Some(format!("{}, keeping {}", e, store.active_id()));
        }

        let source: Arc<dyn CatalogSource> = Arc::new(CatalogClient::from_config()?);
        let start = argv.page.unwrap_or_else(|| getopt!(ui.start_page));

        info!(
            "Starting {} v{} using {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            getopt!(catalog.url)
        );

        Ok(Self {
            store,
            source,
            route: Route::parse(&start),
            contact: ContactForm::default(),
            loader: None,
            notice,
            color: getopt!(ui.color) && stdout().is_terminal(),
            settle_wait: Duration::from_millis(getopt!(ui.settle_wait_ms)),
            print_once: argv.print,
        })
    }

    /// make the theme store, falling back to in-memory storage when there's nowhere to persist
    fn setup_store() -> ThemeStore {
        let default = getopt!(theme.default)
            .parse::<ThemeId>()
            .unwrap_or_default();

        let store = if getopt!(theme.persist) {
            let path = getopt!(theme.storage_path);
            let prefs = if path.is_empty() {
                RedbPreferences::in_data_dir()
            } else {
                Ok(RedbPreferences::new(path))
            };

            match prefs {
                Ok(prefs) => {
                    debug!(path = %prefs.path().display(), "using preference file");
                    ThemeStore::new(prefs)
                }
                Err(e) => {
                    warn!(error = %e, "theme choice will not be remembered");
                    ThemeStore::new(MemoryPreferences::new())
                }
            }
        } else {
            ThemeStore::new(MemoryPreferences::new())
        };

        store.with_default(default)
    }

    /// run the main loop
    ///
    /// # Errors
    ///
    /// returns an error if the screen can't be drawn
    /// returns an error if a prompt fails for any reason other than the user backing out
    pub async fn run(&mut self) -> Result<()> {
        if self.print_once {
            return self.print_page().await;
        }

        loop {
            self.mount();

            let products = self.products().await;
            self.draw(&products)?;

            let selection = match self.prompt_menu().await {
                Ok(selection) => selection,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(e),
            };

            let outcome = match selection {
                MainMenu::Navigate(route) => {
                    self.navigate(route);
                    Ok(())
                }
                MainMenu::ChangeTheme => self.pick_theme().await,
                MainMenu::SendMessage => self.send_message().await,
                MainMenu::Refresh => Ok(()),
                MainMenu::Exit => break,
            };

            match outcome {
                Err(e) if is_cancel(&e) => continue,
                other => other?,
            }
        }

        self.loader = None;
        Ok(())
    }

    /// draw the start page once, after the products settle
    async fn print_page(&mut self) -> Result<()> {
        self.mount();

        let products = match &self.loader {
            Some(loader) => loader.wait_settled().await,
            None => FetchState::Pending,
        };

        println!("{}", self.frame(&products, DEFAULT_WIDTH).render());
        Ok(())
    }

    /// mount a loader when the home page is shown, tear it down when it's not
    fn mount(&mut self) {
        match Mount::plan(self.route, self.loader.is_some()) {
            Mount::Activate => {
                self.loader = Some(ProductLoader::activate(self.source.clone()));
            }
            Mount::Teardown => self.loader = None,
            Mount::Keep => {}
        }
    }

    /// go to another page
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        debug!(from = %self.route, to = %route, "navigating");

        if self.route == Route::Contact {
            self.contact.reset();
        }

        self.route = route;
    }

    /// the state of the product fetch, waiting a bit for it to settle
    async fn products(&self) -> FetchState<Product> {
        match &self.loader {
            Some(loader) => loader.wait_settled_for(self.settle_wait).await,
            None => FetchState::Pending,
        }
    }

    /// everything needed to draw the current page
    fn frame<'a>(&'a self, products: &'a FetchState<Product>, width: usize) -> Frame<'a> {
        Frame {
            route: self.route,
            theme: self.store.get_active(),
            products,
            contact: &self.contact,
            width,
            color: self.color,
        }
    }

    /// clear the screen and draw the current page
    fn draw(&mut self, products: &FetchState<Product>) -> Result<()> {
        let width = terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(DEFAULT_WIDTH)
            .clamp(60, 160);

        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        print!("{}", self.frame(products, width).render());

        if let Some(notice) = self.notice.take() {
            println!("\n{}", notice);
        }

        Ok(())
    }

    /// ask what to do next
    async fn prompt_menu(&self) -> Result<MainMenu> {
        let options = MainMenu::options(self.route);

        blocking(move || Select::new("What would you like to do?", options).prompt()).await
    }

    /// show the theme picker and apply the choice
    async fn pick_theme(&mut self) -> Result<()> {
        let painter = Painter::new(self.store.get_active(), self.color);
        let entries = header::picker_entries(self.store.themes(), self.store.active_id(), &painter);
        let cursor = self.store.active_id().index();

        let entry = blocking(move || {
            Select::new("Choose Theme", entries)
                .with_starting_cursor(cursor)
                .prompt()
        })
        .await?;

        let theme = self.store.select_id(entry.id);
        info!(theme = %theme.id, name = theme.display_name, "theme changed");

        Ok(())
    }

    /// fill in the contact form and submit it
    async fn send_message(&mut self) -> Result<()> {
        let mut form = self.contact.clone();
        form.submitted = false;

        let mut form = blocking(move || {
            for field in ContactField::ALL {
                let label = format!("{}:", field.label());
                let value = Text::new(&label)
                    .with_placeholder(field.placeholder())
                    .with_initial_value(form.get(field))
                    .prompt()?;

                form.set(field, value);
            }

            Ok(form)
        })
        .await?;

        match form.submit() {
            Ok(()) => self.notice = None,
            Err(errors) => self.notice = Some(errors.join("\n")),
        }

        self.contact = form;
        Ok(())
    }
}

/// what happens to the product loader before a page is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mount {
    /// start a fresh fetch
    Activate,
    /// leave things as they are
    Keep,
    /// cancel and drop the running fetch
    Teardown,
}

impl Mount {
    /// only the home page holds a loader, and every visit to it starts a new one
    fn plan(route: Route, mounted: bool) -> Self {
        match (route, mounted) {
            (Route::Home, false) => Self::Activate,
            (Route::Home, true) | (_, false) => Self::Keep,
            (_, true) => Self::Teardown,
        }
    }
}

/// run a blocking prompt off the async runtime
async fn blocking<T, F>(prompt: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, InquireError> + Send + 'static,
{
    tokio::task::spawn_blocking(prompt)
        .await
        .map_err(|e| ShopError::Other(format!("prompt task failed: {}", e)))?
        .map_err(ShopError::from)
}

/// whether the user backed out of a prompt
fn is_cancel(e: &ShopError) -> bool {
    matches!(
        e,
        ShopError::Inquire(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}
