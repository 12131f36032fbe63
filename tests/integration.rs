// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use iced::keyboard::{key::Named, Key};
use std::sync::Arc;
use superglass::app::persisted_state::AppState;
use superglass::config::{self, Config};
use superglass::error::{HttpError, Result};
use superglass::i18n::fluent::I18n;
use superglass::media::{
    load_catalog, preload_targets, CatalogRequest, CategoryKey, CategorySet, KnownPlaceholders,
    MediaItem, MediaSource, SearchResource, Transform, UrlBuilder,
};
use superglass::ui::gallery;
use superglass::ui::lightbox::{
    self,
    input::{self, Bindings, Command},
    ViewerState,
};
use tempfile::tempdir;

fn items(ids: &[&str]) -> Vec<MediaItem> {
    ids.iter().map(|id| MediaItem::new(*id, "jpg")).collect()
}

fn showroom() -> CategorySet {
    CategorySet::new()
        .with(CategoryKey::Aluminium, items(&["A", "B", "C"]))
        .with(CategoryKey::LedMirror, items(&["D"]))
}

#[test]
fn lightbox_walkthrough_records_last_viewed() {
    let catalog = showroom();
    let urls = UrlBuilder::for_cloud("demo");
    let aluminium = catalog.items(CategoryKey::Aluminium);
    let mut viewer = lightbox::State::new();

    let effect = viewer.open(CategoryKey::Aluminium, 1, aluminium);
    assert_eq!(
        effect,
        lightbox::Effect::Focus {
            category: CategoryKey::Aluminium,
            index: 1
        }
    );
    assert_eq!(
        preload_targets(&urls, aluminium, 1),
        vec![
            urls.build("A", "jpg", &Transform::full()),
            urls.build("C", "jpg", &Transform::full()),
        ]
    );

    viewer.next(aluminium);
    assert_eq!(viewer.index(), Some(2));
    assert_eq!(viewer.next(aluminium), lightbox::Effect::None);
    assert_eq!(viewer.index(), Some(2));

    let closed = viewer.close();
    assert_eq!(
        closed,
        lightbox::Effect::Closed {
            last_viewed: "C".to_string()
        }
    );
    assert_eq!(viewer.viewer(), &ViewerState::Closed);

    let dir = tempdir().expect("temp dir");
    let mut state = AppState::default();
    state.set_last_viewed("C");
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (mut restored, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(restored.take_last_viewed().as_deref(), Some("C"));
    assert_eq!(catalog.locate("C"), Some((CategoryKey::Aluminium, 2)));
}

#[test]
fn keys_drive_the_lightbox_only_while_bound() {
    let catalog = showroom();
    let aluminium = catalog.items(CategoryKey::Aluminium);
    let mut viewer = lightbox::State::new();
    let mut bindings = Bindings::default();

    for _ in 0..3 {
        viewer.open(CategoryKey::Aluminium, 0, aluminium);
        bindings.sync(viewer.is_open());

        for key in [Key::Named(Named::ArrowRight), Key::Named(Named::ArrowRight)] {
            if let Some(Command::Next) = input::route(&key) {
                viewer.next(aluminium);
            }
        }
        assert_eq!(viewer.index(), Some(2));

        assert_eq!(
            input::route(&Key::Named(Named::Escape)),
            Some(Command::Close)
        );
        viewer.close();
        bindings.sync(viewer.is_open());
        assert_eq!(bindings.live_count(), 0);
    }

    assert_eq!(bindings.installs(), 3);
    assert_eq!(bindings.teardowns(), 3);
}

#[test]
fn gallery_tile_opens_the_lightbox_on_its_category() {
    let catalog = showroom();
    let mut gallery = gallery::State::default();

    let effect = gallery.handle(
        gallery::Message::SelectCategory(CategoryKey::LedMirror),
        &catalog,
    );
    let generation = match effect {
        gallery::Effect::LoadThumbnails {
            category,
            generation,
        } => {
            assert_eq!(category, CategoryKey::LedMirror);
            generation
        }
        other => panic!("unexpected effect {other:?}"),
    };
    assert!(gallery.is_loading());

    assert_eq!(
        gallery.handle(
            gallery::Message::ThumbnailSettled {
                generation,
                success: true
            },
            &catalog
        ),
        gallery::Effect::Ready
    );

    assert_eq!(
        gallery.handle(gallery::Message::OpenPhoto(0), &catalog),
        gallery::Effect::OpenLightbox {
            category: CategoryKey::LedMirror,
            index: 0
        }
    );
    assert_eq!(
        gallery.handle(gallery::Message::OpenPhoto(1), &catalog),
        gallery::Effect::None
    );
}

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("hi".to_string());
    initial.media_host.cloud_name = Some("superglass".to_string());
    initial.gallery.default_category = Some("ledmirror".to_string());
    config::save_to_path(&initial, &path).expect("write config");

    let loaded = config::load_from_path(&path).expect("read config");
    assert_eq!(loaded, initial);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "hi");

    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.current_locale().to_string(), "en-US");
    assert_eq!(english.tr("section-services"), "Our Services");
}

/// Media host with one live folder; every other folder is unreachable.
struct PartialHost;

#[async_trait]
impl MediaSource for PartialHost {
    async fn search(&self, folder: &str) -> Result<Vec<SearchResource>> {
        if folder == "services/aluminium" {
            Ok(vec![SearchResource {
                public_id: "services/aluminium/door".to_string(),
                format: "png".to_string(),
                width: 1200,
                height: 900,
            }])
        } else {
            Err(HttpError::Unreachable("offline".to_string()).into())
        }
    }

    async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        Err(HttpError::Status(404).into())
    }
}

#[tokio::test]
async fn partial_outage_keeps_loaded_categories() {
    let request = CatalogRequest {
        folder_prefix: "services".to_string(),
        urls: UrlBuilder::for_cloud("demo"),
        generate_placeholders: true,
    };

    let load = load_catalog(Arc::new(PartialHost), request, KnownPlaceholders::new()).await;

    assert_eq!(load.categories.count(CategoryKey::Aluminium), 1);
    assert_eq!(load.failures.len(), CategoryKey::GALLERY.len() - 1);
    let door = &load.categories.items(CategoryKey::Aluminium)[0];
    assert_eq!(door.format, "png");
    assert!(door.placeholder.is_none());
}
