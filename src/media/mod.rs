// SPDX-License-Identifier: MPL-2.0
//! Media catalog: the photos fetched from the media host, grouped by service.
//!
//! Items are immutable once fetched. The catalog is rebuilt wholesale on every
//! refresh and swapped into the application state in one message.

pub mod catalog;
pub mod host;
pub mod placeholder;
pub mod prefetch;
pub mod url;

use std::collections::HashSet;
use std::fmt;

pub use catalog::{load_catalog, CatalogLoad, CatalogRequest};
pub use host::{CloudinaryClient, MediaSource, SearchResource, UnavailableSource};
pub use placeholder::{known_placeholders, KnownPlaceholders, PlaceholderHandles};
pub use prefetch::{preload_targets, Fetched, Preloader, RenditionCache};
pub use url::{Crop, Format, Quality, Transform, UrlBuilder};

/// One photo as delivered by the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Media-host public identifier (e.g. `services/aluminium/window-12`).
    pub identifier: String,
    /// Source format extension without the dot (`jpg`, `png`, ...).
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Tiny blurred preview as a `data:` URL, when one could be generated.
    pub placeholder: Option<String>,
}

impl MediaItem {
    pub fn new(identifier: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            format: format.into(),
            width: 0,
            height: 0,
            placeholder: None,
        }
    }
}

impl From<SearchResource> for MediaItem {
    fn from(resource: SearchResource) -> Self {
        Self {
            identifier: resource.public_id,
            format: resource.format,
            width: resource.width,
            height: resource.height,
            placeholder: None,
        }
    }
}

/// Service categories offered by the business.
///
/// Six of them have a gallery folder on the media host. Design work and
/// modular kitchens only appear as service cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryKey {
    DesignWork,
    Aluminium,
    TuffanPartition,
    FurnitureSofaSet,
    LedMirror,
    RalingKathera,
    ProfileShutter,
    Modular,
}

impl CategoryKey {
    /// Service catalog order.
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::DesignWork,
        CategoryKey::Aluminium,
        CategoryKey::TuffanPartition,
        CategoryKey::FurnitureSofaSet,
        CategoryKey::LedMirror,
        CategoryKey::RalingKathera,
        CategoryKey::ProfileShutter,
        CategoryKey::Modular,
    ];

    /// Gallery tab order.
    pub const GALLERY: [CategoryKey; 6] = [
        CategoryKey::Aluminium,
        CategoryKey::TuffanPartition,
        CategoryKey::FurnitureSofaSet,
        CategoryKey::LedMirror,
        CategoryKey::RalingKathera,
        CategoryKey::ProfileShutter,
    ];

    /// Stable key used in folder names and config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::DesignWork => "designwork",
            CategoryKey::Aluminium => "aluminium",
            CategoryKey::TuffanPartition => "tuffanpartition",
            CategoryKey::FurnitureSofaSet => "furnituresofaset",
            CategoryKey::LedMirror => "ledmirror",
            CategoryKey::RalingKathera => "ralingkathera",
            CategoryKey::ProfileShutter => "profileshutter",
            CategoryKey::Modular => "modular",
        }
    }

    /// Parses a key as written in config files. Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(key.trim()))
    }

    #[must_use]
    pub fn has_gallery(self) -> bool {
        !matches!(self, CategoryKey::DesignWork | CategoryKey::Modular)
    }

    /// Title shown on the gallery tab.
    #[must_use]
    pub fn gallery_title(self) -> &'static str {
        match self {
            CategoryKey::Aluminium => "Aluminium Works",
            CategoryKey::TuffanPartition => "Tuffan Partition",
            CategoryKey::FurnitureSofaSet => "Furniture & Sofa Set",
            CategoryKey::LedMirror => "LED Mirror",
            CategoryKey::RalingKathera => "Railing & Kathera",
            CategoryKey::ProfileShutter => "Profile Shutter",
            other => other.service_title(),
        }
    }

    /// Title shown on the service card.
    #[must_use]
    pub fn service_title(self) -> &'static str {
        match self {
            CategoryKey::DesignWork => "Design Work",
            CategoryKey::Aluminium => "Aluminium Section",
            CategoryKey::TuffanPartition => "Tuffan door & Partition",
            CategoryKey::FurnitureSofaSet => "Furniture & Sofa Set",
            CategoryKey::LedMirror => "LED Mirror",
            CategoryKey::RalingKathera => "Railing & Kathera",
            CategoryKey::ProfileShutter => "Profile Shutter",
            CategoryKey::Modular => "Modular Kitchen",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from category to its photos.
///
/// Categories keep the order they were inserted in; photos keep the order the
/// media host returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    entries: Vec<(CategoryKey, Vec<MediaItem>)>,
}

impl CategorySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a category. Duplicate identifiers keep their first
    /// occurrence so indices stay unambiguous.
    pub fn insert(&mut self, key: CategoryKey, items: Vec<MediaItem>) {
        let mut seen = HashSet::with_capacity(items.len());
        let items: Vec<MediaItem> = items
            .into_iter()
            .filter(|item| seen.insert(item.identifier.clone()))
            .collect();

        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = items;
        } else {
            self.entries.push((key, items));
        }
    }

    #[must_use]
    pub fn with(mut self, key: CategoryKey, items: Vec<MediaItem>) -> Self {
        self.insert(key, items);
        self
    }

    /// Items of a category; empty when the category is absent.
    #[must_use]
    pub fn items(&self, key: CategoryKey) -> &[MediaItem] {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(&[], |(_, items)| items.as_slice())
    }

    #[must_use]
    pub fn contains(&self, key: CategoryKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    #[must_use]
    pub fn count(&self, key: CategoryKey) -> usize {
        self.items(key).len()
    }

    pub fn keys(&self) -> impl Iterator<Item = CategoryKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Every item across categories, in category order.
    pub fn flattened(&self) -> impl Iterator<Item = &MediaItem> + '_ {
        self.entries.iter().flat_map(|(_, items)| items.iter())
    }

    /// Finds the category and index holding `identifier`.
    #[must_use]
    pub fn locate(&self, identifier: &str) -> Option<(CategoryKey, usize)> {
        self.entries.iter().find_map(|(key, items)| {
            items
                .iter()
                .position(|item| item.identifier == identifier)
                .map(|index| (*key, index))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, items)| items.is_empty())
    }

    /// Total number of photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(id, "jpg")
    }

    #[test]
    fn category_keys_round_trip_through_strings() {
        for key in CategoryKey::ALL {
            assert_eq!(CategoryKey::from_key(key.as_str()), Some(key));
        }
        assert_eq!(CategoryKey::from_key(" LEDMirror "), Some(CategoryKey::LedMirror));
        assert_eq!(CategoryKey::from_key("windows"), None);
    }

    #[test]
    fn only_six_categories_have_galleries() {
        let with_gallery: Vec<_> = CategoryKey::ALL
            .into_iter()
            .filter(|key| key.has_gallery())
            .collect();
        assert_eq!(with_gallery, CategoryKey::GALLERY.to_vec());
    }

    #[test]
    fn absent_category_is_empty() {
        let set = CategorySet::new().with(CategoryKey::Aluminium, vec![item("a")]);
        assert!(set.items(CategoryKey::LedMirror).is_empty());
        assert!(!set.contains(CategoryKey::LedMirror));
    }

    #[test]
    fn insert_drops_duplicate_identifiers() {
        let set = CategorySet::new().with(
            CategoryKey::Aluminium,
            vec![item("c"), item("b"), item("c"), item("a")],
        );
        let ids: Vec<_> = set
            .items(CategoryKey::Aluminium)
            .iter()
            .map(|i| i.identifier.as_str())
            .collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn insert_replaces_existing_category_in_place() {
        let mut set = CategorySet::new()
            .with(CategoryKey::Aluminium, vec![item("a")])
            .with(CategoryKey::LedMirror, vec![item("d")]);
        set.insert(CategoryKey::Aluminium, vec![item("x"), item("y")]);

        assert_eq!(
            set.keys().collect::<Vec<_>>(),
            [CategoryKey::Aluminium, CategoryKey::LedMirror]
        );
        assert_eq!(set.count(CategoryKey::Aluminium), 2);
    }

    #[test]
    fn locate_finds_category_and_index() {
        let set = CategorySet::new()
            .with(CategoryKey::Aluminium, vec![item("a"), item("b")])
            .with(CategoryKey::LedMirror, vec![item("d")]);
        assert_eq!(set.locate("b"), Some((CategoryKey::Aluminium, 1)));
        assert_eq!(set.locate("d"), Some((CategoryKey::LedMirror, 0)));
        assert_eq!(set.locate("zz"), None);
        assert_eq!(set.len(), 3);
    }
}
