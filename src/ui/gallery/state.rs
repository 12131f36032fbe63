// SPDX-License-Identifier: MPL-2.0
//! Gallery filter: which category's photos the grid shows, and whether its
//! thumbnails are still arriving.
//!
//! Switching category raises `loading` and starts a new generation. Thumbnail
//! results are tagged with the generation they were requested for; results
//! from an older generation are ignored. The flag drops on the first thumbnail
//! that renders, or once every expected thumbnail has settled (success or
//! failure), so a category whose images all fail never spins forever.

use crate::media::{CategoryKey, CategorySet, MediaItem};

/// Gallery messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectCategory(CategoryKey),
    ThumbnailSettled { generation: u64, success: bool },
    /// A tile of the active category was clicked.
    OpenPhoto(usize),
}

/// Side effects requested by the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A new category is active: fetch its thumbnails for `generation`.
    LoadThumbnails {
        category: CategoryKey,
        generation: u64,
    },
    /// The loading overlay went away.
    Ready,
    OpenLightbox { category: CategoryKey, index: usize },
}

#[derive(Debug, Clone)]
pub struct State {
    active: CategoryKey,
    loading: bool,
    generation: u64,
    expected: usize,
    settled: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new(CategoryKey::Aluminium)
    }
}

impl State {
    #[must_use]
    pub fn new(active: CategoryKey) -> Self {
        Self {
            active,
            loading: true,
            generation: 0,
            expected: 0,
            settled: 0,
        }
    }

    /// Applies a message against the current catalog.
    pub fn handle(&mut self, message: Message, catalog: &CategorySet) -> Effect {
        match message {
            Message::SelectCategory(key) => {
                self.select_category(key, catalog);
                if self.loading {
                    Effect::LoadThumbnails {
                        category: key,
                        generation: self.generation,
                    }
                } else {
                    Effect::Ready
                }
            }
            Message::ThumbnailSettled {
                generation,
                success,
            } => {
                if self.thumbnail_settled(generation, success) {
                    Effect::Ready
                } else {
                    Effect::None
                }
            }
            Message::OpenPhoto(index) if index < catalog.count(self.active) => {
                Effect::OpenLightbox {
                    category: self.active,
                    index,
                }
            }
            Message::OpenPhoto(_) => Effect::None,
        }
    }

    /// Activates `key` and returns its photos; empty when the key is absent.
    ///
    /// Always starts a new generation, so reselecting the active category
    /// (after a refresh, for instance) re-arms the loading flag too.
    pub fn select_category<'a>(
        &mut self,
        key: CategoryKey,
        catalog: &'a CategorySet,
    ) -> &'a [MediaItem] {
        let items = catalog.items(key);
        self.active = key;
        self.generation += 1;
        self.expected = items.len();
        self.settled = 0;
        self.loading = !items.is_empty();
        items
    }

    /// Records one thumbnail outcome. Returns `true` when this cleared the flag.
    pub fn thumbnail_settled(&mut self, generation: u64, success: bool) -> bool {
        if generation != self.generation || !self.loading {
            return false;
        }
        self.settled += 1;
        if success || self.settled >= self.expected {
            self.loading = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn active(&self) -> CategoryKey {
        self.active
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Photos of the active category.
    #[must_use]
    pub fn items<'a>(&self, catalog: &'a CategorySet) -> &'a [MediaItem] {
        catalog.items(self.active)
    }
}
