// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component states return effects; the handlers here turn those effects into
//! fetches, persistence and scroll operations, and feed background results
//! back into the components.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::media::{CatalogLoad, CategoryKey, Fetched, PlaceholderHandles, Transform};
use crate::ui::gallery;
use crate::ui::lightbox::{
    self,
    input::{BindingChange, Command},
};
use crate::ui::notifications::Notification;
use crate::ui::photo_modal::{self, PhotoModal};
use crate::ui::showcase;
use iced::widget::operation::{self, AbsoluteOffset};
use iced::widget::Id;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(load) => self.handle_catalog_loaded(load),
            Message::RefreshCatalog => {
                Task::batch([self.start_catalog_load(), self.refill_thumbnails()])
            }
            Message::Gallery(message) => {
                let effect = self.gallery.handle(message, &self.catalog);
                self.handle_gallery_effect(effect)
            }
            Message::ThumbnailFetched {
                generation,
                fetched,
            } => self.handle_thumbnail_fetched(generation, fetched),
            Message::Lightbox(message) => self.handle_lightbox_message(message),
            Message::LightboxKey(command) => self.handle_key(command),
            Message::FullImageFetched {
                identifier,
                fetched,
            } => {
                if self.complete_fetch(fetched) {
                    self.lightbox.image_loaded(&identifier);
                } else if self.lightbox.identifier() == Some(identifier.as_str()) {
                    tracing::warn!(%identifier, "focused photo failed to load");
                    self.notifications
                        .replace(Notification::warning("notification-image-load-error"));
                }
                Task::none()
            }
            Message::Preloaded(fetched) => {
                self.complete_fetch(fetched);
                self.mark_focus_if_cached();
                Task::none()
            }
            Message::PhotoModal(photo_modal::Message::Close) => self.close_photo_modal(),
            Message::PreviewFetched(fetched) | Message::HeroFetched(fetched) => {
                self.complete_fetch(fetched);
                Task::none()
            }
            Message::Showcase(message) => self.handle_showcase(message),
            Message::HeroTick => {
                self.hero.tick();
                // Slides are fetched at startup; retry the one coming up if that failed.
                self.fetch_hero_slides()
            }
            Message::PageScrolled(offset) => {
                if self.header.on_scroll(offset) {
                    tracing::trace!(offset, scrolled = self.header.is_scrolled(), "header style");
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick_at(now);
                Task::none()
            }
        }
    }

    fn handle_catalog_loaded(&mut self, load: CatalogLoad) -> Task<Message> {
        self.catalog_loading = false;
        if !load.has_failures() {
            self.notifications.clear_prefixed("notification-catalog-");
        }
        let CatalogLoad {
            mut categories,
            failures,
        } = load;

        for (key, err) in &failures {
            tracing::warn!(category = %key, "catalog load failed: {err}");
            // A transient failure on refresh keeps what was already on screen.
            let previous = self.catalog.items(*key);
            if !previous.is_empty() {
                categories.insert(*key, previous.to_vec());
            }
        }
        if let Some((_, err)) = failures.first() {
            self.notifications.replace(
                Notification::warning("notification-catalog-load-error")
                    .with_arg("reason", self.i18n.tr(err.i18n_key())),
            );
        }

        if categories == self.catalog && self.catalog_ready {
            tracing::debug!("catalog unchanged");
            return Task::none();
        }

        tracing::info!(photos = categories.len(), "catalog loaded");
        self.catalog = categories;
        self.placeholders = PlaceholderHandles::from_catalog(&self.catalog);

        let mut tasks = Vec::new();

        if let Some(category) = self.lightbox.category() {
            let effect = self.lightbox.catalog_replaced(self.catalog.items(category));
            tasks.push(self.handle_lightbox_effect(effect));
        }

        tasks.push(self.select_category(self.gallery.active()));

        if !self.catalog_ready {
            self.catalog_ready = true;
            tasks.push(match self.pending_photo.take() {
                Some(identifier) => self.open_photo_modal(&identifier),
                None => self.restore_last_viewed(),
            });
        }

        Task::batch(tasks)
    }

    // -------------------------------------------------------------------------
    // Gallery
    // -------------------------------------------------------------------------

    fn select_category(&mut self, key: CategoryKey) -> Task<Message> {
        let effect = self
            .gallery
            .handle(gallery::Message::SelectCategory(key), &self.catalog);
        self.handle_gallery_effect(effect)
    }

    fn handle_gallery_effect(&mut self, effect: gallery::Effect) -> Task<Message> {
        match effect {
            gallery::Effect::None => Task::none(),
            gallery::Effect::Ready => {
                tracing::debug!(
                    category = %self.gallery.active(),
                    thumbnails = self.gallery.expected(),
                    "gallery ready"
                );
                Task::none()
            }
            gallery::Effect::LoadThumbnails {
                category,
                generation,
            } => self.load_thumbnails(category, generation),
            gallery::Effect::OpenLightbox { category, index } => {
                self.handle_lightbox_message(lightbox::Message::Open { category, index })
            }
        }
    }

    fn thumbnail_urls(&self, category: CategoryKey) -> Vec<String> {
        self.catalog
            .items(category)
            .iter()
            .map(|item| self.urls.for_item(item, &Transform::thumbnail()))
            .collect()
    }

    fn fetch_thumbnail(&self, url: String, generation: u64) -> Task<Message> {
        self.preloader
            .fetch(url)
            .map(move |fetched| Message::ThumbnailFetched {
                generation,
                fetched,
            })
    }

    /// Fetches the thumbnails of `category`. Cached ones settle immediately
    /// and move to the front of the cache; ones already in flight settle when
    /// their fetch returns.
    fn load_thumbnails(&mut self, category: CategoryKey, generation: u64) -> Task<Message> {
        let mut tasks = Vec::new();
        for url in self.thumbnail_urls(category) {
            if self.cache.get(&url).is_some() {
                self.gallery.thumbnail_settled(generation, true);
            } else if self.cache.begin_fetch(&url) {
                tasks.push(self.fetch_thumbnail(url, generation));
            }
        }
        Task::batch(tasks)
    }

    /// Requests active-category thumbnails that are neither cached nor in
    /// flight, such as ones evicted while the lightbox was open.
    fn refill_thumbnails(&mut self) -> Task<Message> {
        if !self.catalog_ready {
            return Task::none();
        }
        let generation = self.gallery.generation();
        let missing = self
            .cache
            .urls_to_fetch(&self.thumbnail_urls(self.gallery.active()));
        if missing.is_empty() {
            return Task::none();
        }

        tracing::debug!(
            category = %self.gallery.active(),
            count = missing.len(),
            "refetching evicted thumbnails"
        );
        let mut tasks = Vec::new();
        for url in missing {
            if self.cache.begin_fetch(&url) {
                tasks.push(self.fetch_thumbnail(url, generation));
            }
        }
        Task::batch(tasks)
    }

    fn handle_thumbnail_fetched(&mut self, generation: u64, fetched: Fetched) -> Task<Message> {
        let url = fetched.url.clone();
        let success = self.complete_fetch(fetched);

        let current = self.gallery.generation();
        let belongs = generation == current
            || self
                .gallery
                .items(&self.catalog)
                .iter()
                .any(|item| self.urls.for_item(item, &Transform::thumbnail()) == url);
        if !belongs {
            return Task::none();
        }

        let effect = self.gallery.handle(
            gallery::Message::ThumbnailSettled {
                generation: current,
                success,
            },
            &self.catalog,
        );
        self.handle_gallery_effect(effect)
    }

    // -------------------------------------------------------------------------
    // Lightbox
    // -------------------------------------------------------------------------

    fn handle_lightbox_message(&mut self, message: lightbox::Message) -> Task<Message> {
        let category = match &message {
            lightbox::Message::Open { category, .. } => Some(*category),
            _ => self.lightbox.category(),
        };
        let items = category.map_or(&[][..], |key| self.catalog.items(key));
        let effect = self.lightbox.handle(message, items);
        self.handle_lightbox_effect(effect)
    }

    fn handle_lightbox_effect(&mut self, effect: lightbox::Effect) -> Task<Message> {
        let task = match effect {
            lightbox::Effect::None => Task::none(),
            lightbox::Effect::Focus { category, index } => self.focus_photo(category, index),
            lightbox::Effect::Closed { last_viewed } => {
                tracing::debug!(%last_viewed, "lightbox closed");
                self.remember_last_viewed(last_viewed);
                self.refill_thumbnails()
            }
        };
        self.sync_bindings();
        task
    }

    /// Fetches the focused photo and preloads its neighbours.
    fn focus_photo(&mut self, category: CategoryKey, index: usize) -> Task<Message> {
        let items = self.catalog.items(category);
        let Some(item) = items.get(index) else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        let full_url = self.urls.for_item(item, &Transform::full());
        if self.cache.get(&full_url).is_some() {
            self.lightbox.image_loaded(&item.identifier);
        } else if self.cache.begin_fetch(&full_url) {
            let identifier = item.identifier.clone();
            tasks.push(self.preloader.fetch(full_url).map(move |fetched| {
                Message::FullImageFetched {
                    identifier: identifier.clone(),
                    fetched,
                }
            }));
        }

        tasks.push(
            self.preloader
                .preload(&mut self.cache, items, index)
                .map(Message::Preloaded),
        );
        Task::batch(tasks)
    }

    /// Marks the focused photo loaded once its full rendition is cached,
    /// whichever fetch brought it in.
    fn mark_focus_if_cached(&mut self) {
        let (Some(category), Some(index)) = (self.lightbox.category(), self.lightbox.index())
        else {
            return;
        };
        let Some(item) = self.catalog.items(category).get(index) else {
            return;
        };
        if self
            .cache
            .get(&self.urls.for_item(item, &Transform::full()))
            .is_some()
        {
            self.lightbox.image_loaded(&item.identifier);
        }
    }

    fn handle_key(&mut self, command: Command) -> Task<Message> {
        if self.photo_modal.is_some() {
            return match command {
                Command::Close => self.close_photo_modal(),
                Command::Previous | Command::Next => Task::none(),
            };
        }

        let message = match command {
            Command::Close => lightbox::Message::Close,
            Command::Previous => lightbox::Message::Previous,
            Command::Next => lightbox::Message::Next,
        };
        self.handle_lightbox_message(message)
    }

    /// Whether the lightbox or the photo modal covers the page.
    pub(super) fn overlay_open(&self) -> bool {
        self.lightbox.is_open() || self.photo_modal.is_some()
    }

    fn sync_bindings(&mut self) {
        match self.bindings.sync(self.overlay_open()) {
            Some(BindingChange::Installed { generation }) => {
                tracing::debug!(
                    generation,
                    installs = self.bindings.installs(),
                    "overlay key bindings installed"
                );
            }
            Some(BindingChange::TornDown { generation }) => {
                tracing::debug!(
                    generation,
                    teardowns = self.bindings.teardowns(),
                    "overlay key bindings torn down"
                );
            }
            None => {}
        }
    }

    // -------------------------------------------------------------------------
    // Photo modal and last-viewed pointer
    // -------------------------------------------------------------------------

    fn open_photo_modal(&mut self, identifier: &str) -> Task<Message> {
        let Some(modal) = PhotoModal::open(identifier, &self.catalog) else {
            tracing::warn!(%identifier, "requested photo is not in the catalog");
            self.notifications.push(
                Notification::warning("notification-photo-not-found")
                    .with_arg("identifier", identifier),
            );
            return Task::none();
        };

        let url = modal.preview_url(&self.urls);
        self.photo_modal = Some(modal);
        self.sync_bindings();

        if self.cache.begin_fetch(&url) {
            self.preloader.fetch(url).map(Message::PreviewFetched)
        } else {
            Task::none()
        }
    }

    /// Closes the modal, records its photo as last viewed and scrolls the
    /// gallery to it. The pointer stays on disk for the next start.
    fn close_photo_modal(&mut self) -> Task<Message> {
        let Some(modal) = self.photo_modal.take() else {
            return Task::none();
        };
        let identifier = modal.close();
        self.remember_last_viewed(identifier.clone());
        self.sync_bindings();
        Task::batch([self.scroll_to_photo(&identifier), self.refill_thumbnails()])
    }

    fn remember_last_viewed(&mut self, identifier: String) {
        self.app_state.set_last_viewed(identifier);
        if let Some(key) = self.app_state.save() {
            self.notifications.push(Notification::warning(key));
        }
    }

    /// Consumes the last-viewed pointer and scrolls the gallery back to it.
    fn restore_last_viewed(&mut self) -> Task<Message> {
        let Some(identifier) = self.app_state.take_last_viewed() else {
            return Task::none();
        };
        if let Some(key) = self.app_state.save() {
            self.notifications.push(Notification::warning(key));
        }
        self.scroll_to_photo(&identifier)
    }

    /// Shows the category holding `identifier` and scrolls to its row.
    fn scroll_to_photo(&mut self, identifier: &str) -> Task<Message> {
        let Some((category, index)) = self.catalog.locate(identifier) else {
            tracing::debug!(%identifier, "photo is no longer in the catalog");
            return Task::none();
        };

        let mut tasks = Vec::new();
        if category != self.gallery.active() {
            tasks.push(self.select_category(category));
        }
        tasks.push(scroll_page_to(
            showcase::grid_top() + gallery::row_offset(index),
        ));
        Task::batch(tasks)
    }

    // -------------------------------------------------------------------------
    // Showcase
    // -------------------------------------------------------------------------

    fn handle_showcase(&mut self, message: showcase::Message) -> Task<Message> {
        match message {
            showcase::Message::Contact(contact) => {
                let link = self.contacts.link(contact);
                tracing::info!(?contact, %link, "contact link copied");
                self.notifications.push(
                    Notification::info("notification-link-copied").with_arg("link", link.clone()),
                );
                iced::clipboard::write(link)
            }
            showcase::Message::Service(key) if key.has_gallery() => Task::batch([
                self.select_category(key),
                scroll_page_to(showcase::gallery_top()),
            ]),
            showcase::Message::Service(_) => Task::none(),
        }
    }

    /// Completes a fetch in the shared cache, which logs failures. Returns
    /// whether it succeeded.
    fn complete_fetch(&mut self, fetched: Fetched) -> bool {
        let Fetched { url, result } = fetched;
        self.cache.complete(&url, result).is_some()
    }
}

fn scroll_page_to(y: f32) -> Task<Message> {
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        AbsoluteOffset {
            x: None,
            y: Some(y.max(0.0)),
        },
    )
}
