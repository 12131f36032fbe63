// SPDX-License-Identifier: MPL-2.0
//! Rendition URLs on the media host.
//!
//! Every image on screen is a transformed rendition of a source upload,
//! addressed purely by URL:
//!
//! ```text
//! <delivery_base>/<cloud_name>/image/upload/<transforms>/<identifier>.<format>
//! ```
//!
//! Transforms are comma-joined in a fixed order (`f_`, `q_`, `c_`, `w_`, `h_`)
//! so that the same request always produces the same URL. The rendition cache
//! and the preloader are keyed by that string.

use crate::config::DEFAULT_DELIVERY_BASE;
use std::fmt::Write as _;

/// How the source is fitted into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    /// Fill the box exactly, cropping overflow.
    Fill,
    /// Fit inside the box, keeping the aspect ratio.
    Fit,
}

/// Encoder quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Auto,
    Value(u8),
}

/// Output format. Leaving it unset keeps the source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Let the host negotiate the best format.
    Auto,
    /// Force baseline JPEG.
    Jpeg,
}

/// A set of transform options. `None` fields emit nothing, so every distinct
/// transform has a distinct segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Transform {
    pub crop: Option<Crop>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<Quality>,
    pub format: Option<Format>,
}

impl Transform {
    /// Grid tile: `c_fill,w_600,h_450`.
    #[must_use]
    pub const fn thumbnail() -> Self {
        Self {
            crop: Some(Crop::Fill),
            width: Some(600),
            height: Some(450),
            quality: None,
            format: None,
        }
    }

    /// Lightbox image and preload target: `c_fit,w_1600`.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            crop: Some(Crop::Fit),
            width: Some(1600),
            height: None,
            quality: None,
            format: None,
        }
    }

    /// Lighter hint rendition: `f_auto,q_60,c_fit,w_1200`.
    #[must_use]
    pub const fn preview() -> Self {
        Self {
            crop: Some(Crop::Fit),
            width: Some(1200),
            height: None,
            quality: Some(Quality::Value(60)),
            format: Some(Format::Auto),
        }
    }

    /// Blur source: `f_jpg,q_70,w_8`.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            crop: None,
            width: Some(8),
            height: None,
            quality: Some(Quality::Value(70)),
            format: Some(Format::Jpeg),
        }
    }

    /// Hero slide: `c_fill,w_1300,h_1040`.
    #[must_use]
    pub const fn hero() -> Self {
        Self {
            crop: Some(Crop::Fill),
            width: Some(1300),
            height: Some(1040),
            quality: None,
            format: None,
        }
    }

    /// Comma-joined transform segment, empty when no option is set.
    #[must_use]
    pub fn segment(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);

        match self.format {
            Some(Format::Auto) => parts.push("f_auto".to_string()),
            Some(Format::Jpeg) => parts.push("f_jpg".to_string()),
            None => {}
        }
        match self.quality {
            Some(Quality::Auto) => parts.push("q_auto".to_string()),
            Some(Quality::Value(q)) => parts.push(format!("q_{q}")),
            None => {}
        }
        match self.crop {
            Some(Crop::Fill) => parts.push("c_fill".to_string()),
            Some(Crop::Fit) => parts.push("c_fit".to_string()),
            None => {}
        }
        if let Some(w) = self.width {
            parts.push(format!("w_{w}"));
        }
        if let Some(h) = self.height {
            parts.push(format!("h_{h}"));
        }

        parts.join(",")
    }
}

/// Builds delivery URLs for one media-host account.
///
/// Pure and infallible: identifiers are not validated, that is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    delivery_base: String,
    cloud_name: String,
}

impl UrlBuilder {
    pub fn new(delivery_base: impl Into<String>, cloud_name: impl Into<String>) -> Self {
        let delivery_base: String = delivery_base.into();
        Self {
            delivery_base: delivery_base.trim_end_matches('/').to_string(),
            cloud_name: cloud_name.into(),
        }
    }

    /// Builder against the default delivery host.
    pub fn for_cloud(cloud_name: impl Into<String>) -> Self {
        Self::new(DEFAULT_DELIVERY_BASE, cloud_name)
    }

    #[must_use]
    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    /// Rendition URL for `identifier` in the source `format`.
    ///
    /// An empty `format` leaves the identifier as the last path segment. The
    /// host reads the text after the last dot as the delivery extension, so
    /// `("a.jpg", "")` and `("a", "jpg")` address the same rendition and get
    /// the same URL. Search results always carry a format.
    #[must_use]
    pub fn build(&self, identifier: &str, format: &str, transform: &Transform) -> String {
        let segment = transform.segment();
        let mut url = String::with_capacity(
            self.delivery_base.len()
                + self.cloud_name.len()
                + segment.len()
                + identifier.len()
                + format.len()
                + 24,
        );

        let _ = write!(url, "{}/{}/image/upload/", self.delivery_base, self.cloud_name);
        if !segment.is_empty() {
            url.push_str(&segment);
            url.push('/');
        }
        url.push_str(identifier);
        if !format.is_empty() {
            url.push('.');
            url.push_str(format);
        }
        url
    }

    /// Rendition URL for a catalog item.
    #[must_use]
    pub fn for_item(&self, item: &super::MediaItem, transform: &Transform) -> String {
        self.build(&item.identifier, &item.format, transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UrlBuilder {
        UrlBuilder::for_cloud("demo")
    }

    #[test]
    fn thumbnail_url_matches_delivery_convention() {
        assert_eq!(
            builder().build("services/aluminium/a", "jpg", &Transform::thumbnail()),
            "https://res.cloudinary.com/demo/image/upload/c_fill,w_600,h_450/services/aluminium/a.jpg"
        );
    }

    #[test]
    fn named_renditions_emit_fixed_order() {
        assert_eq!(Transform::full().segment(), "c_fit,w_1600");
        assert_eq!(Transform::preview().segment(), "f_auto,q_60,c_fit,w_1200");
        assert_eq!(Transform::placeholder().segment(), "f_jpg,q_70,w_8");
        assert_eq!(Transform::hero().segment(), "c_fill,w_1300,h_1040");
    }

    #[test]
    fn unset_format_emits_nothing() {
        let t = Transform {
            quality: Some(Quality::Auto),
            ..Transform::default()
        };
        assert_eq!(t.segment(), "q_auto");
        let forced = Transform {
            format: Some(Format::Jpeg),
            ..t
        };
        assert_ne!(forced.segment(), t.segment());
    }

    #[test]
    fn extension_in_identifier_addresses_the_same_rendition() {
        let b = builder();
        let t = Transform::thumbnail();
        assert_eq!(b.build("a.jpg", "", &t), b.build("a", "jpg", &t));
        assert_ne!(b.build("a", "png", &t), b.build("a", "jpg", &t));
    }

    #[test]
    fn empty_transform_has_no_double_slash() {
        let url = builder().build("x", "png", &Transform::default());
        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/x.png");
    }

    #[test]
    fn build_is_deterministic() {
        let b = builder();
        let t = Transform::full();
        assert_eq!(b.build("id", "jpg", &t), b.build("id", "jpg", &t));
    }

    #[test]
    fn distinct_inputs_give_distinct_urls() {
        let b = builder();
        let a = b.build("a", "jpg", &Transform::full());
        let other_id = b.build("b", "jpg", &Transform::full());
        let other_transform = b.build("a", "jpg", &Transform::thumbnail());
        assert_ne!(a, other_id);
        assert_ne!(a, other_transform);
    }

    #[test]
    fn malformed_identifier_still_yields_url() {
        let url = builder().build("", "", &Transform::full());
        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/c_fit,w_1600/");
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        let b = UrlBuilder::new("https://cdn.example/", "demo");
        assert!(b
            .build("a", "jpg", &Transform::full())
            .starts_with("https://cdn.example/demo/"));
    }
}
