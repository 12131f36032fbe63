// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::{CatalogLoad, Fetched};
use crate::ui::gallery;
use crate::ui::lightbox::{self, input::Command};
use crate::ui::notifications;
use crate::ui::photo_modal;
use crate::ui::showcase;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages and carry the results of background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// A catalog load (startup or refresh) finished.
    CatalogLoaded(CatalogLoad),
    /// The refresh timer fired.
    RefreshCatalog,
    Gallery(gallery::Message),
    /// A thumbnail requested for gallery `generation` arrived or failed.
    ThumbnailFetched {
        generation: u64,
        fetched: Fetched,
    },
    Lightbox(lightbox::Message),
    /// Key press routed while the lightbox or the photo modal is open.
    LightboxKey(Command),
    /// The full-resolution rendition of `identifier` arrived or failed.
    FullImageFetched {
        identifier: String,
        fetched: Fetched,
    },
    /// A neighbour rendition finished preloading.
    Preloaded(Fetched),
    PhotoModal(photo_modal::Message),
    PreviewFetched(Fetched),
    Showcase(showcase::Message),
    HeroTick,
    HeroFetched(Fetched),
    /// Vertical offset of the page scrollable.
    PageScrolled(f32),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `en-US`).
    pub lang: Option<String>,
    /// Photo identifier to open in the full-page modal once the catalog loads.
    pub photo: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `SUPERGLASS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SUPERGLASS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
