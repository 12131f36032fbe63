// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Media host**: account endpoints and search limits
//! - **Gallery**: refresh cadence and default category
//! - **Showcase**: hero carousel timing and contact links
//! - **Cache**: rendition cache bounds

// ==========================================================================
// Media Host Defaults
// ==========================================================================

/// Delivery base for renditions (`<base>/<cloud>/image/upload/...`).
pub const DEFAULT_DELIVERY_BASE: &str = "https://res.cloudinary.com";

/// Base of the administrative search API (`<base>/<cloud>/resources/search`).
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Folder under which every category folder lives (`services/<key>`).
pub const DEFAULT_FOLDER_PREFIX: &str = "services";

/// Maximum number of resources returned per folder search.
pub const DEFAULT_MAX_RESULTS: u32 = 400;

/// Upper bound accepted by the search API for a single page.
pub const MAX_MAX_RESULTS: u32 = 500;

/// HTTP timeout for media host requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Interval between catalog refreshes (staleness bound), in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Minimum refresh interval, in seconds.
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 15;

/// Maximum refresh interval, in seconds.
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

/// Category shown when the kiosk starts.
pub const DEFAULT_CATEGORY: &str = "aluminium";

// ==========================================================================
// Showcase Defaults
// ==========================================================================

/// Delay between hero slides, in milliseconds.
pub const DEFAULT_HERO_INTERVAL_MS: u64 = 3500;

/// Minimum delay between hero slides, in milliseconds.
pub const MIN_HERO_INTERVAL_MS: u64 = 1000;

/// Maximum delay between hero slides, in milliseconds.
pub const MAX_HERO_INTERVAL_MS: u64 = 60_000;

/// Media-host identifiers of the hero slides.
pub const DEFAULT_HERO_IMAGES: [&str; 6] = [
    "showcase/hero",
    "showcase/hero2",
    "showcase/hero3",
    "showcase/hero4",
    "showcase/hero5",
    "showcase/hero6",
];

pub const DEFAULT_PHONE: &str = "+918273647861";
pub const DEFAULT_WHATSAPP: &str = "https://wa.me/919998314246";
pub const DEFAULT_INSTAGRAM: &str = "https://www.instagram.com/superglass70";

// ==========================================================================
// Rendition Cache Defaults
// ==========================================================================

/// Default rendition cache size in bytes (48 MB of encoded images).
pub const DEFAULT_CACHE_BYTES: usize = 48 * 1024 * 1024;

/// Minimum rendition cache size in bytes.
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum rendition cache size in bytes.
pub const MAX_CACHE_BYTES: usize = 512 * 1024 * 1024;

/// Default number of cached renditions.
pub const DEFAULT_CACHE_ENTRIES: usize = 256;

/// Minimum number of cached renditions.
pub const MIN_CACHE_ENTRIES: usize = 16;

/// Maximum number of cached renditions.
pub const MAX_CACHE_ENTRIES: usize = 4096;

/// Entries kept on top of one category of thumbnails and the hero slides:
/// the focused lightbox photo, its two neighbours and the photo modal preview,
/// with room for a few renditions still settling after navigation.
pub const RESERVED_CACHE_ENTRIES: usize = 8;

/// Blur placeholder fetches allowed in flight during one catalog load.
pub const PLACEHOLDER_CONCURRENCY: usize = 8;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REFRESH_INTERVAL_SECS <= DEFAULT_REFRESH_INTERVAL_SECS);
    assert!(DEFAULT_REFRESH_INTERVAL_SECS <= MAX_REFRESH_INTERVAL_SECS);
    assert!(MIN_HERO_INTERVAL_MS <= DEFAULT_HERO_INTERVAL_MS);
    assert!(DEFAULT_HERO_INTERVAL_MS <= MAX_HERO_INTERVAL_MS);
    assert!(MIN_CACHE_BYTES <= DEFAULT_CACHE_BYTES);
    assert!(DEFAULT_CACHE_BYTES <= MAX_CACHE_BYTES);
    assert!(MIN_CACHE_ENTRIES <= DEFAULT_CACHE_ENTRIES);
    assert!(DEFAULT_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);
    assert!(DEFAULT_MAX_RESULTS <= MAX_MAX_RESULTS);
    assert!(PLACEHOLDER_CONCURRENCY > 0);
    assert!(MAX_MAX_RESULTS as usize + RESERVED_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);
};
