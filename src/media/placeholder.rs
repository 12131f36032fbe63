// SPDX-License-Identifier: MPL-2.0
//! Blur placeholders shown while thumbnails and lightbox images load.
//!
//! The host renders an 8 px wide JPEG of each photo; it is normalised to JPEG
//! and inlined as a `data:` URL on the item, so the view never waits on the
//! network to show something in a tile.
//!
//! A catalog load fetches placeholders for the whole catalog through one
//! bounded stream. Identifiers that already had one in the previous catalog
//! reuse it, so a periodic refresh only fetches for new uploads.

use super::host::MediaSource;
use super::url::{Transform, UrlBuilder};
use super::{CategorySet, MediaItem};
use crate::config::PLACEHOLDER_CONCURRENCY;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::stream::{self, StreamExt};
use iced::widget::image::Handle;
use image_rs::ImageFormat;
use std::collections::HashMap;
use std::io::Cursor;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Wraps encoded image bytes as a JPEG data URL, re-encoding when the host
/// answered with another format.
pub fn encode_data_url(bytes: &[u8]) -> Result<String> {
    let jpeg = match image_rs::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => bytes.to_vec(),
        _ => {
            let decoded = image_rs::load_from_memory(bytes)?;
            let mut output = Cursor::new(Vec::new());
            image_rs::DynamicImage::ImageRgb8(decoded.to_rgb8())
                .write_to(&mut output, ImageFormat::Jpeg)?;
            output.into_inner()
        }
    };
    Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(jpeg)))
}

/// Extracts the JPEG bytes from a placeholder data URL.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| Error::Decode("not a JPEG data URL".to_string()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| Error::Decode(format!("placeholder base64 decode failed: {e}")))
}

/// Fetches the blur rendition of `item` and returns it as a data URL.
pub async fn generate_placeholder(
    source: &dyn MediaSource,
    urls: &UrlBuilder,
    item: &MediaItem,
) -> Result<String> {
    let url = urls.for_item(item, &Transform::placeholder());
    let bytes = source.fetch(&url).await?;
    encode_data_url(&bytes)
}

/// Data URLs by identifier, carried over from the previous catalog.
pub type KnownPlaceholders = HashMap<String, String>;

/// Placeholders already attached to items of `catalog`.
#[must_use]
pub fn known_placeholders(catalog: &CategorySet) -> KnownPlaceholders {
    catalog
        .flattened()
        .filter_map(|item| {
            item.placeholder
                .as_ref()
                .map(|data_url| (item.identifier.clone(), data_url.clone()))
        })
        .collect()
}

/// Attaches placeholders to every item, keeping item order.
///
/// Known identifiers reuse their data URL. The rest are fetched with at most
/// [`PLACEHOLDER_CONCURRENCY`] requests in flight. Failures leave
/// `placeholder` unset.
pub async fn attach_placeholders(
    source: &dyn MediaSource,
    urls: &UrlBuilder,
    items: Vec<MediaItem>,
    known: &KnownPlaceholders,
) -> Vec<MediaItem> {
    let items_ref = &items;
    let generated: Vec<Option<String>> = stream::iter(0..items.len())
        .map(|index| async move {
            let item = &items_ref[index];
            if let Some(data_url) = known.get(&item.identifier) {
                return Some(data_url.clone());
            }
            match generate_placeholder(source, urls, item).await {
                Ok(data_url) => Some(data_url),
                Err(err) => {
                    tracing::debug!(identifier = %item.identifier, "no placeholder: {err}");
                    None
                }
            }
        })
        .buffered(PLACEHOLDER_CONCURRENCY)
        .collect()
        .await;

    items
        .into_iter()
        .zip(generated)
        .map(|(mut item, placeholder)| {
            item.placeholder = placeholder;
            item
        })
        .collect()
}

/// Attaches placeholders across every category of `catalog` in one bounded
/// stream.
pub async fn attach_to_catalog(
    source: &dyn MediaSource,
    urls: &UrlBuilder,
    catalog: CategorySet,
    known: &KnownPlaceholders,
) -> CategorySet {
    let counts: Vec<_> = catalog.keys().map(|key| (key, catalog.count(key))).collect();
    let items: Vec<MediaItem> = catalog.flattened().cloned().collect();
    let mut attached = attach_placeholders(source, urls, items, known)
        .await
        .into_iter();

    let mut result = CategorySet::new();
    for (key, count) in counts {
        result.insert(key, attached.by_ref().take(count).collect());
    }
    result
}

/// Decoded placeholder images keyed by identifier.
///
/// Built once per catalog load so every frame reuses the same handles
/// instead of decoding data URLs while drawing.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderHandles {
    handles: HashMap<String, Handle>,
}

impl PlaceholderHandles {
    /// Decodes every placeholder in the catalog. Undecodable ones are skipped.
    pub fn from_catalog(catalog: &CategorySet) -> Self {
        let handles = catalog
            .flattened()
            .filter_map(|item| {
                let data_url = item.placeholder.as_deref()?;
                match decode_data_url(data_url) {
                    Ok(bytes) => Some((item.identifier.clone(), Handle::from_bytes(bytes))),
                    Err(err) => {
                        tracing::debug!(identifier = %item.identifier, "bad placeholder: {err}");
                        None
                    }
                }
            })
            .collect();
        Self { handles }
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Handle> {
        self.handles.get(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage};

    fn tiny_png() -> Vec<u8> {
        let img = RgbImage::from_pixel(8, 6, Rgb([120, 90, 60]));
        let mut out = Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn png_is_reencoded_as_jpeg() {
        let data_url = encode_data_url(&tiny_png()).unwrap();
        assert!(data_url.starts_with(DATA_URL_PREFIX));

        let bytes = decode_data_url(&data_url).unwrap();
        assert_eq!(image_rs::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image_rs::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[test]
    fn garbage_bytes_fail_to_encode() {
        assert!(matches!(
            encode_data_url(b"definitely not an image"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn handles_skip_items_without_valid_placeholders() {
        let mut good = MediaItem::new("services/aluminium/a", "jpg");
        good.placeholder = Some(encode_data_url(&tiny_png()).unwrap());
        let mut broken = MediaItem::new("services/aluminium/b", "jpg");
        broken.placeholder = Some("data:text/plain,hello".to_string());
        let bare = MediaItem::new("services/aluminium/c", "jpg");

        let catalog = CategorySet::new().with(
            crate::media::CategoryKey::Aluminium,
            vec![good, broken, bare],
        );
        let handles = PlaceholderHandles::from_catalog(&catalog);
        assert_eq!(handles.len(), 1);
        assert!(handles.get("services/aluminium/a").is_some());
        assert!(handles.get("services/aluminium/b").is_none());
    }

    #[test]
    fn known_placeholders_skip_items_without_one() {
        let mut with = MediaItem::new("a", "jpg");
        with.placeholder = Some("data:image/jpeg;base64,AAAA".to_string());
        let catalog = CategorySet::new().with(
            crate::media::CategoryKey::LedMirror,
            vec![with, MediaItem::new("b", "jpg")],
        );

        let known = known_placeholders(&catalog);
        assert_eq!(known.len(), 1);
        assert_eq!(
            known.get("a").map(String::as_str),
            Some("data:image/jpeg;base64,AAAA")
        );
    }

    #[test]
    fn decode_rejects_foreign_data_urls() {
        assert!(decode_data_url("data:image/png;base64,AAAA").is_err());
    }
}
