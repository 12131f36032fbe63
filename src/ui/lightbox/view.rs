// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox overlay.

use super::state::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::{MediaItem, PlaceholderHandles, RenditionCache, Transform, UrlBuilder};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{FilterMethod, Handle};
use iced::widget::{button, center, container, image, mouse_area, text, Column, Row, Space, Stack};
use iced::{alignment, mouse, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Photos of the open category.
    pub items: &'a [MediaItem],
    pub urls: &'a UrlBuilder,
    pub cache: &'a RenditionCache,
    pub placeholders: &'a PlaceholderHandles,
}

/// What the image slot shows for the focused photo.
#[derive(Debug, Clone)]
enum Slot {
    Full(Handle),
    Placeholder(Handle),
    Empty,
}

fn slot(state: &State, item: &MediaItem, ctx: &ViewContext<'_>) -> Slot {
    let full_url = ctx.urls.for_item(item, &Transform::full());
    match ctx.cache.peek(&full_url) {
        Some(handle) if state.is_loaded() => Slot::Full(handle.clone()),
        _ => match ctx.placeholders.get(&item.identifier) {
            Some(handle) => Slot::Placeholder(handle.clone()),
            None => Slot::Empty,
        },
    }
}

fn control<'a>(glyph: &'a str, message: Message, size: f32) -> Element<'a, Message> {
    button(text(glyph).size(typography::GLYPH).center())
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .on_press(message)
    .style(styles::button::lightbox_control)
    .into()
}

/// Renders the overlay. Returns an empty element when the lightbox is closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(item) = state.index().and_then(|index| ctx.items.get(index)) else {
        return Space::new().into();
    };

    let picture: Element<'a, Message> = match slot(state, item, &ctx) {
        Slot::Full(handle) => image(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Slot::Placeholder(handle) => Stack::new()
            .push(
                image(handle)
                    .filter_method(FilterMethod::Linear)
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(center(text(ctx.i18n.tr("lightbox-loading")).size(typography::BODY)))
            .into(),
        Slot::Empty => center(text(ctx.i18n.tr("lightbox-loading")).size(typography::BODY)).into(),
    };

    // Clicks on the photo must not reach the backdrop underneath.
    let picture = mouse_area(picture).interaction(mouse::Interaction::Idle);

    let previous: Element<'a, Message> = if state.has_previous() {
        control("‹", Message::Previous, sizing::NAV_BUTTON)
    } else {
        Space::new().width(Length::Fixed(sizing::NAV_BUTTON)).into()
    };
    let next: Element<'a, Message> = if state.has_next(ctx.items) {
        control("›", Message::Next, sizing::NAV_BUTTON)
    } else {
        Space::new().width(Length::Fixed(sizing::NAV_BUTTON)).into()
    };

    let stage = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(container(picture).width(Length::Fill).height(Length::Fill))
        .push(next);

    let counter = state.index().map_or_else(String::new, |index| {
        ctx.i18n.tr_with_args(
            "lightbox-counter",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &ctx.items.len().to_string()),
            ],
        )
    });

    let chrome = Column::new()
        .padding(spacing::MD)
        .push(
            container(control("✕", Message::Close, sizing::CLOSE_BUTTON))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        )
        .push(Space::new().height(Length::Fill))
        .push(
            container(text(counter).size(typography::CAPTION))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
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
        .push(stage)
        .push(chrome)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::CategoryKey;

    fn fixture() -> (Vec<MediaItem>, UrlBuilder) {
        let items = vec![
            MediaItem::new("services/aluminium/b", "jpg"),
            MediaItem::new("services/aluminium/a", "jpg"),
        ];
        (items, UrlBuilder::for_cloud("demo"))
    }

    #[test]
    fn placeholder_is_shown_until_loaded() {
        let (items, urls) = fixture();
        let i18n = I18n::default();
        let mut cache = RenditionCache::with_defaults();
        cache.insert(urls.for_item(&items[0], &Transform::full()), vec![1, 2, 3]);
        let placeholders = PlaceholderHandles::default();

        let mut state = State::new();
        state.open(CategoryKey::Aluminium, 0, &items);
        let ctx = ViewContext {
            i18n: &i18n,
            items: &items,
            urls: &urls,
            cache: &cache,
            placeholders: &placeholders,
        };
        assert!(matches!(slot(&state, &items[0], &ctx), Slot::Empty));

        state.image_loaded("services/aluminium/b");
        assert!(matches!(slot(&state, &items[0], &ctx), Slot::Full(_)));
    }

    #[test]
    fn closed_lightbox_still_builds_an_element() {
        let (items, urls) = fixture();
        let i18n = I18n::default();
        let cache = RenditionCache::with_defaults();
        let placeholders = PlaceholderHandles::default();
        let state = State::new();
        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                items: &items,
                urls: &urls,
                cache: &cache,
                placeholders: &placeholders,
            },
        );
    }
}
