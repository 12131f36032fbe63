// SPDX-License-Identifier: MPL-2.0
//! Footer strip with the copyright line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{container, text};
use iced::{alignment, Element, Length};

#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright(i18n: &I18n, year: i32) -> String {
    i18n.tr_with_args("footer-copyright", &[("year", &year.to_string())])
}

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    container(text(copyright(i18n, current_year())).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::footer)
        .into()
}
