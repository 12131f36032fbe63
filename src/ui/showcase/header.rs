// SPDX-License-Identifier: MPL-2.0
//! Sticky header with the brand and quick contact actions.

use super::{Contact, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space};
use iced::{alignment, Element, Length};

/// Page offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderState {
    scrolled: bool,
    offset: f32,
}

impl HeaderState {
    /// Records the page offset. Returns `true` when the style flipped.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        self.offset = offset_y;
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Last reported page offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let height = if self.scrolled {
            sizing::HEADER_HEIGHT_COMPACT
        } else {
            sizing::HEADER_HEIGHT
        };

        let brand = text(i18n.tr("brand-name")).size(typography::TITLE_MD);

        let call = button(text(format!("☎ {}", i18n.tr("header-call"))).size(typography::BODY))
            .on_press(Message::Contact(Contact::Phone))
            .style(styles::button::link);

        let whatsapp = button(text(i18n.tr("contact-whatsapp")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::Contact(Contact::WhatsApp))
            .style(styles::button::pill);

        let bar = Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(call)
            .push(whatsapp);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .padding([0.0, spacing::LG])
            .align_y(alignment::Vertical::Center)
            .style(styles::container::header(self.scrolled))
            .into()
    }
}
