// SPDX-License-Identifier: MPL-2.0
//! "Our Services" section: one numbered card per service.

use super::{line_height, Message};
use crate::i18n::fluent::I18n;
use crate::media::CategoryKey;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Element, Length};

/// Cards per row.
pub const CARDS_PER_ROW: usize = 4;

/// Two-digit card number, starting at `01`.
#[must_use]
pub fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

fn card_rows() -> usize {
    CategoryKey::ALL.len().div_ceil(CARDS_PER_ROW)
}

/// Total height of the services section.
#[must_use]
pub fn section_height() -> f32 {
    let rows = card_rows() as f32;
    2.0 * spacing::SECTION
        + line_height(typography::TITLE_LG)
        + spacing::XXL
        + rows * sizing::SERVICE_CARD_HEIGHT
        + (rows - 1.0).max(0.0) * spacing::LG
}

fn card<'a>(index: usize, key: CategoryKey) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .push(text(card_number(index)).size(typography::CAPTION))
        .push(text(key.service_title()).size(typography::TITLE_SM));

    let card = button(body)
        .width(Length::Fixed(sizing::SERVICE_CARD_WIDTH))
        .height(Length::Fixed(sizing::SERVICE_CARD_HEIGHT))
        .padding(spacing::LG)
        .style(styles::button::service_card);

    // Services without a gallery folder are listed but lead nowhere.
    if key.has_gallery() {
        card.on_press(Message::Service(key)).into()
    } else {
        card.into()
    }
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);
    for (row_index, keys) in CategoryKey::ALL.chunks(CARDS_PER_ROW).enumerate() {
        let row = keys
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::LG), |row, (i, key)| {
                row.push(card(row_index * CARDS_PER_ROW + i, *key))
            });
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("section-services")).size(typography::TITLE_LG))
        .push(grid);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(section_height()))
        .padding([spacing::SECTION, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .into()
}
