// SPDX-License-Identifier: MPL-2.0
//! Catalog loading: one folder search per gallery category.
//!
//! A category whose search fails is stored empty and reported alongside the
//! result. The gallery keeps working with whatever did load. Placeholders are
//! attached once every search has returned.

use super::host::MediaSource;
use super::placeholder::{attach_to_catalog, KnownPlaceholders};
use super::url::UrlBuilder;
use super::{CategoryKey, CategorySet, MediaItem};
use crate::error::Error;
use std::sync::Arc;

/// Parameters for a catalog load that do not change between refreshes.
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub folder_prefix: String,
    pub urls: UrlBuilder,
    pub generate_placeholders: bool,
}

impl CatalogRequest {
    fn folder_for(&self, key: CategoryKey) -> String {
        let prefix = self.folder_prefix.trim_matches('/');
        if prefix.is_empty() {
            key.as_str().to_string()
        } else {
            format!("{prefix}/{}", key.as_str())
        }
    }
}

/// Outcome of a catalog load.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub categories: CategorySet,
    pub failures: Vec<(CategoryKey, Error)>,
}

impl CatalogLoad {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

async fn search_category(
    source: &dyn MediaSource,
    request: &CatalogRequest,
    key: CategoryKey,
) -> Result<Vec<MediaItem>, Error> {
    let folder = request.folder_for(key);
    Ok(source
        .search(&folder)
        .await?
        .into_iter()
        .map(MediaItem::from)
        .collect())
}

/// Loads every gallery category concurrently.
///
/// `known` holds the placeholders of the catalog being replaced; their
/// identifiers are not fetched again.
pub async fn load_catalog(
    source: Arc<dyn MediaSource>,
    request: CatalogRequest,
    known: KnownPlaceholders,
) -> CatalogLoad {
    let results = futures_util::future::join_all(
        CategoryKey::GALLERY
            .into_iter()
            .map(|key| search_category(source.as_ref(), &request, key)),
    )
    .await;

    let mut load = CatalogLoad::default();
    for (key, result) in CategoryKey::GALLERY.into_iter().zip(results) {
        match result {
            Ok(items) => load.categories.insert(key, items),
            Err(err) => {
                tracing::warn!(category = %key, "category load failed: {err}");
                load.categories.insert(key, Vec::new());
                load.failures.push((key, err));
            }
        }
    }

    if request.generate_placeholders {
        load.categories =
            attach_to_catalog(source.as_ref(), &request.urls, load.categories, &known).await;
    }

    tracing::info!(
        photos = load.categories.len(),
        failed = load.failures.len(),
        "catalog loaded"
    );
    load
}
