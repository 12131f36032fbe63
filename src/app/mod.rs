// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showroom sections.
//!
//! The `App` struct owns every component state (gallery, lightbox, hero,
//! header, toasts) plus the shared rendition cache, and translates component
//! effects into tasks: catalog loads, rendition fetches, persistence of the
//! last-viewed pointer and page scrolling.

pub mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, Credentials};
use crate::i18n::fluent::I18n;
use crate::media::prefetch::CacheLimits;
use crate::media::{
    known_placeholders, load_catalog, CatalogRequest, CategoryKey, CategorySet,
    CloudinaryClient, MediaSource, PlaceholderHandles, Preloader, RenditionCache,
    UnavailableSource, UrlBuilder,
};
use crate::ui::gallery;
use crate::ui::lightbox::{self, input::Bindings};
use crate::ui::notifications::{self, Notification};
use crate::ui::photo_modal::PhotoModal;
use crate::ui::showcase::{Contacts, HeaderState, HeroCarousel};
use crate::ui::theming::ThemeMode;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Identifier of the page scrollable, used for scroll-to operations.
pub const PAGE_SCROLLABLE_ID: &str = "page";

pub const WINDOW_DEFAULT_WIDTH: f32 = 1440.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 650.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    refresh_interval: Duration,
    hero_interval: Duration,
    catalog_request: CatalogRequest,
    source: Arc<dyn MediaSource>,
    urls: UrlBuilder,
    preloader: Preloader,
    /// Shared by thumbnails, lightbox images, preloads and hero slides.
    cache: RenditionCache,
    catalog: CategorySet,
    placeholders: PlaceholderHandles,
    /// Whether a catalog load is running.
    catalog_loading: bool,
    /// Set once the first catalog load has been applied.
    catalog_ready: bool,
    gallery: gallery::State,
    lightbox: lightbox::State,
    bindings: Bindings,
    photo_modal: Option<PhotoModal>,
    /// `--photo` identifier waiting for the first catalog load.
    pending_photo: Option<String>,
    hero: HeroCarousel,
    header: HeaderState,
    contacts: Contacts,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.catalog.len())
            .field("active_category", &self.gallery.active())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn media_source(config: &Config) -> Arc<dyn MediaSource> {
    match CloudinaryClient::new(&config.media_host, Credentials::from_env()) {
        Ok(client) => {
            tracing::debug!(?client, "media host client ready");
            Arc::new(client)
        }
        Err(err) => {
            tracing::error!("media host client unavailable: {err}");
            Arc::new(UnavailableSource::new(err))
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first catalog load
    /// and the hero slide fetches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();
        let source = media_source(&config);

        let mut app = Self::assemble(flags, &config, app_state, source);
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = Task::batch([app.start_catalog_load(), app.fetch_hero_slides()]);
        (app, task)
    }

    /// Builds the state from already loaded settings, without starting any
    /// background work.
    fn assemble(
        flags: Flags,
        config: &Config,
        app_state: persisted_state::AppState,
        source: Arc<dyn MediaSource>,
    ) -> Self {
        let urls = UrlBuilder::new(
            config.media_host.delivery_base.clone(),
            config.media_host.resolved_cloud_name(),
        );
        let default_category = config
            .gallery
            .default_category
            .as_deref()
            .and_then(CategoryKey::from_key)
            .filter(|key| key.has_gallery())
            .unwrap_or(CategoryKey::Aluminium);
        let cache_limits = CacheLimits::for_catalog(
            &config.cache,
            config.media_host.max_results() as usize,
            config.showcase.hero_images.len(),
        );
        tracing::debug!(?cache_limits, "rendition cache limits");

        App {
            i18n: I18n::new(flags.lang.clone(), config),
            theme_mode: config.general.theme_mode,
            refresh_interval: config.gallery.refresh_interval(),
            hero_interval: config.showcase.hero_interval(),
            catalog_request: CatalogRequest {
                folder_prefix: config.media_host.folder_prefix.clone(),
                urls: urls.clone(),
                generate_placeholders: config.gallery.generate_placeholders,
            },
            preloader: Preloader::new(Arc::clone(&source), urls.clone()),
            source,
            urls,
            cache: RenditionCache::new(cache_limits),
            catalog: CategorySet::new(),
            placeholders: PlaceholderHandles::default(),
            catalog_loading: false,
            catalog_ready: false,
            gallery: gallery::State::new(default_category),
            lightbox: lightbox::State::new(),
            bindings: Bindings::default(),
            photo_modal: None,
            pending_photo: flags.photo.filter(|id| !id.trim().is_empty()),
            hero: HeroCarousel::new(config.showcase.hero_images.clone()),
            header: HeaderState::default(),
            contacts: Contacts::from(&config.showcase),
            app_state,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_input_subscription(self.overlay_open()),
            subscription::create_refresh_subscription(self.refresh_interval),
            subscription::create_hero_subscription(self.hero.is_rotating(), self.hero_interval),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    /// Starts a catalog load unless one is already running.
    fn start_catalog_load(&mut self) -> Task<Message> {
        if self.catalog_loading {
            return Task::none();
        }
        self.catalog_loading = true;
        Task::perform(
            load_catalog(
                Arc::clone(&self.source),
                self.catalog_request.clone(),
                known_placeholders(&self.catalog),
            ),
            Message::CatalogLoaded,
        )
    }

    /// Fetches hero slides that are missing. Cached ones are marked as
    /// recently used so the rotation never loses them to older renditions.
    fn fetch_hero_slides(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for url in self.hero.slide_urls(&self.urls) {
            if self.cache.get(&url).is_none() && self.cache.begin_fetch(&url) {
                tasks.push(self.preloader.fetch(url).map(Message::HeroFetched));
            }
        }
        Task::batch(tasks)
    }
}
