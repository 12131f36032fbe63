// SPDX-License-Identifier: MPL-2.0
//! Full-page photo modal opened from the `--photo` startup flag.
//!
//! Unlike the lightbox it shows a single photo looked up across every
//! category, with no stepping. Closing it records the photo as last viewed.

use crate::i18n::fluent::I18n;
use crate::media::{CategorySet, MediaItem, RenditionCache, Transform, UrlBuilder};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, image, mouse_area, text, Column, Space, Stack};
use iced::{alignment, mouse, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoModal {
    item: MediaItem,
}

impl PhotoModal {
    /// Opens on `identifier` if any category holds it.
    #[must_use]
    pub fn open(identifier: &str, catalog: &CategorySet) -> Option<Self> {
        catalog
            .flattened()
            .find(|item| item.identifier == identifier)
            .map(|item| Self { item: item.clone() })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.item.identifier
    }

    /// Rendition shown in the modal.
    #[must_use]
    pub fn preview_url(&self, urls: &UrlBuilder) -> String {
        urls.for_item(&self.item, &Transform::preview())
    }

    /// Consumes the modal, yielding the identifier to store as last viewed.
    #[must_use]
    pub fn close(self) -> String {
        self.item.identifier
    }

    pub fn view<'a>(
        &self,
        i18n: &I18n,
        urls: &UrlBuilder,
        cache: &RenditionCache,
    ) -> Element<'a, Message> {
        let picture: Element<'a, Message> = match cache.peek(&self.preview_url(urls)) {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => center(text(i18n.tr("lightbox-loading")).size(typography::BODY)).into(),
        };

        let close = button(text("✕").size(typography::GLYPH).center())
            .width(Length::Fixed(sizing::CLOSE_BUTTON))
            .height(Length::Fixed(sizing::CLOSE_BUTTON))
            .on_press(Message::Close)
            .style(styles::button::lightbox_control);

        let chrome = Column::new()
            .padding(spacing::MD)
            .push(
                container(close)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        let backdrop = mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Close);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(
                container(mouse_area(picture).interaction(mouse::Interaction::Idle))
                    .padding(spacing::XXL)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(chrome)
            .into()
    }
}
