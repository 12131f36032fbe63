// SPDX-License-Identifier: MPL-2.0
//! Rendition cache and neighbour preloading.
//!
//! Every image the kiosk shows is fetched by URL and kept here as an Iced
//! image handle, so moving back and forth in the lightbox never re-downloads
//! or re-uploads a texture.
//!
//! # Design
//!
//! - **URL-keyed**: the URL builder is deterministic, so a URL names exactly
//!   one rendition
//! - **LRU eviction**: least recently shown renditions go first
//! - **Byte-bounded**: total encoded size is capped, as is the entry count
//! - **In-flight tracking**: a URL being fetched is not requested again
//!
//! The preloader and the renderers share one cache. Both only read through
//! and insert; eviction belongs to the cache. Views look entries up with
//! [`RenditionCache::peek`]; the update path marks what is on screen as
//! recently used with [`RenditionCache::get`].

use super::host::MediaSource;
use super::url::{Transform, UrlBuilder};
use super::MediaItem;
use crate::config::{
    CacheConfig, DEFAULT_CACHE_BYTES, DEFAULT_CACHE_ENTRIES, MAX_CACHE_BYTES, MAX_CACHE_ENTRIES,
    MIN_CACHE_BYTES, MIN_CACHE_ENTRIES, RESERVED_CACHE_ENTRIES,
};
use crate::error::Result;
use iced::widget::image::Handle;
use iced::Task;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Cache limits after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    pub max_bytes: usize,
    pub max_entries: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_entries: DEFAULT_CACHE_ENTRIES,
        }
    }
}

impl CacheLimits {
    #[must_use]
    pub fn new(max_bytes: usize, max_entries: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_BYTES, MAX_CACHE_BYTES),
            max_entries: max_entries.clamp(MIN_CACHE_ENTRIES, MAX_CACHE_ENTRIES),
        }
    }

    /// Limits from `config`, with the entry bound raised so that a full
    /// category of thumbnails, the hero slides and the lightbox working set
    /// fit at once.
    #[must_use]
    pub fn for_catalog(config: &CacheConfig, max_results: usize, hero_slides: usize) -> Self {
        let limits = Self::from(config);
        let floor = max_results
            .saturating_add(hero_slides)
            .saturating_add(RESERVED_CACHE_ENTRIES);
        Self {
            max_entries: limits.max_entries.max(floor.min(MAX_CACHE_ENTRIES)),
            ..limits
        }
    }
}

impl From<&CacheConfig> for CacheLimits {
    fn from(config: &CacheConfig) -> Self {
        Self::new(
            config.max_bytes.unwrap_or(DEFAULT_CACHE_BYTES),
            config.max_entries.unwrap_or(DEFAULT_CACHE_ENTRIES),
        )
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    handle: Handle,
    size_bytes: usize,
}

/// Counters for the status line and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of fetched renditions, keyed by URL.
pub struct RenditionCache {
    cache: LruCache<String, CacheEntry>,
    in_flight: HashSet<String>,
    limits: CacheLimits,
    current_bytes: usize,
    stats: CacheStats,
}

impl RenditionCache {
    #[must_use]
    pub fn new(limits: CacheLimits) -> Self {
        let capacity = NonZeroUsize::new(limits.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            in_flight: HashSet::new(),
            limits,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheLimits::default())
    }

    /// Marks `url` as being fetched. Returns `false` when it is already cached
    /// or already in flight, in which case no request should be issued.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if self.cache.contains(url) || self.in_flight.contains(url) {
            return false;
        }
        self.in_flight.insert(url.to_string());
        true
    }

    /// Records the outcome of a fetch started with [`begin_fetch`](Self::begin_fetch).
    ///
    /// Returns the handle on success. Renditions larger than half the cache
    /// are returned but not kept.
    pub fn complete(&mut self, url: &str, result: Result<Vec<u8>>) -> Option<Handle> {
        self.in_flight.remove(url);
        match result {
            Ok(bytes) => Some(self.insert(url.to_string(), bytes)),
            Err(err) => {
                tracing::debug!(url, "rendition fetch failed: {err}");
                None
            }
        }
    }

    /// Inserts encoded bytes under `url` and returns the handle to display.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> Handle {
        let size_bytes = bytes.len();
        let handle = Handle::from_bytes(bytes);

        if size_bytes > self.limits.max_bytes / 2 {
            return handle;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.limits.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // The entry bound evicts inside `push`.
        if let Some((evicted_url, evicted)) = self.cache.push(
            url.clone(),
            CacheEntry {
                handle: handle.clone(),
                size_bytes,
            },
        ) {
            if evicted_url != url {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }
        self.current_bytes += size_bytes;
        self.stats.insertions += 1;

        handle
    }

    /// Looks up a rendition and marks it as recently used.
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        if let Some(entry) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(entry.handle.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Looks up a rendition without touching LRU order. Used by views.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.cache.peek(url).map(|entry| &entry.handle)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// URLs from `urls` that are neither cached nor in flight.
    #[must_use]
    pub fn urls_to_fetch(&self, urls: &[String]) -> Vec<String> {
        urls.iter()
            .filter(|url| !self.cache.contains(url.as_str()) && !self.in_flight.contains(*url))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn limits(&self) -> CacheLimits {
        self.limits
    }
}

impl std::fmt::Debug for RenditionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenditionCache")
            .field("entries", &self.cache.len())
            .field("in_flight", &self.in_flight.len())
            .field("memory_usage", &self.current_bytes)
            .field("limits", &self.limits)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Full-resolution URLs of the items right before and after `index`.
///
/// Only neighbours that exist are returned; `index` itself never is.
#[must_use]
pub fn preload_targets(urls: &UrlBuilder, items: &[MediaItem], index: usize) -> Vec<String> {
    let previous = index.checked_sub(1).and_then(|i| items.get(i));
    let next = index.checked_add(1).and_then(|i| items.get(i));

    previous
        .into_iter()
        .chain(next)
        .map(|item| urls.for_item(item, &Transform::full()))
        .collect()
}

/// Result of a background rendition fetch.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub url: String,
    pub result: Result<Vec<u8>>,
}

/// Fetches one URL through the media source.
pub async fn fetch_rendition(source: Arc<dyn MediaSource>, url: String) -> Fetched {
    let result = source.fetch(&url).await;
    Fetched { url, result }
}

/// Issues fire-and-forget fetches for the neighbours of the focused photo.
#[derive(Clone)]
pub struct Preloader {
    source: Arc<dyn MediaSource>,
    urls: UrlBuilder,
}

impl Preloader {
    pub fn new(source: Arc<dyn MediaSource>, urls: UrlBuilder) -> Self {
        Self { source, urls }
    }

    #[must_use]
    pub fn source(&self) -> Arc<dyn MediaSource> {
        Arc::clone(&self.source)
    }

    /// Starts fetches for `index-1` and `index+1`, skipping anything cached
    /// or already in flight. Repeating the call is harmless.
    pub fn preload(
        &self,
        cache: &mut RenditionCache,
        items: &[MediaItem],
        index: usize,
    ) -> Task<Fetched> {
        let tasks: Vec<Task<Fetched>> = preload_targets(&self.urls, items, index)
            .into_iter()
            .filter(|url| cache.begin_fetch(url))
            .map(|url| self.fetch(url))
            .collect();

        Task::batch(tasks)
    }

    /// Fetch task for one URL. Does not consult the cache.
    pub fn fetch(&self, url: String) -> Task<Fetched> {
        Task::perform(fetch_rendition(self.source(), url), |fetched| fetched)
    }
}

impl std::fmt::Debug for Preloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preloader").field("urls", &self.urls).finish()
    }
}
