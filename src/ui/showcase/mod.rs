// SPDX-License-Identifier: MPL-2.0
//! Marketing sections around the gallery: header, hero carousel, service
//! cards and footer.
//!
//! Section heights are fixed by design tokens, so scroll targets inside the
//! page can be computed without measuring the layout.

pub mod footer;
pub mod header;
pub mod hero;
pub mod services;

use crate::config::ShowcaseConfig;
use crate::media::CategoryKey;
use crate::ui::design_tokens::{sizing, spacing, typography};

pub use header::HeaderState;
pub use hero::HeroCarousel;

/// Rendered height of a line of text at `size`.
pub(crate) fn line_height(size: f32) -> f32 {
    (size * 1.3).ceil()
}

/// Contact channels advertised in the header and hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Phone,
    WhatsApp,
    Instagram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Contact(Contact),
    Service(CategoryKey),
}

/// Contact targets taken from the `[showcase]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contacts {
    pub phone: String,
    pub whatsapp: String,
    pub instagram: String,
}

impl From<&ShowcaseConfig> for Contacts {
    fn from(config: &ShowcaseConfig) -> Self {
        Self {
            phone: config.phone.clone(),
            whatsapp: config.whatsapp.clone(),
            instagram: config.instagram.clone(),
        }
    }
}

impl Contacts {
    /// Link handed to the clipboard when a contact is pressed.
    #[must_use]
    pub fn link(&self, contact: Contact) -> String {
        match contact {
            Contact::Phone => format!("tel:{}", self.phone),
            Contact::WhatsApp => self.whatsapp.clone(),
            Contact::Instagram => self.instagram.clone(),
        }
    }
}

/// Offset of the gallery section from the top of the scrolled page.
#[must_use]
pub fn gallery_top() -> f32 {
    hero::SECTION_HEIGHT + services::section_height()
}

/// Offset of the first grid row from the top of the scrolled page.
#[must_use]
pub fn grid_top() -> f32 {
    gallery_top()
        + spacing::SECTION
        + line_height(typography::TITLE_LG)
        + spacing::LG
        + sizing::TAB_BAR_HEIGHT
        + spacing::LG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_link_uses_tel_scheme() {
        let contacts = Contacts::from(&ShowcaseConfig::default());
        assert!(contacts.link(Contact::Phone).starts_with("tel:+"));
        assert!(contacts.link(Contact::WhatsApp).starts_with("https://wa.me/"));
    }

    #[test]
    fn grid_sits_below_gallery_heading() {
        assert!(grid_top() > gallery_top());
        assert!(gallery_top() > hero::SECTION_HEIGHT);
    }
}
