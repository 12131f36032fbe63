// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a fixed header over one scrollable column (hero, services,
//! gallery, footer). The lightbox or the photo modal and the toasts are
//! stacked on top.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::i18n::fluent::I18n;
use crate::media::{CategorySet, PlaceholderHandles, RenditionCache, UrlBuilder};
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::notifications::{self, Toast};
use crate::ui::photo_modal::PhotoModal;
use crate::ui::showcase::{footer, services, HeaderState, HeroCarousel};
use iced::widget::{scrollable, Column, Container, Id, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub header: &'a HeaderState,
    pub hero: &'a HeroCarousel,
    pub gallery: &'a gallery::State,
    pub lightbox: &'a lightbox::State,
    pub photo_modal: Option<&'a PhotoModal>,
    pub notifications: &'a notifications::Manager,
    pub catalog: &'a CategorySet,
    pub urls: &'a UrlBuilder,
    pub cache: &'a RenditionCache,
    pub placeholders: &'a PlaceholderHandles,
}

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        view(ViewContext {
            i18n: &self.i18n,
            header: &self.header,
            hero: &self.hero,
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            photo_modal: self.photo_modal.as_ref(),
            notifications: &self.notifications,
            catalog: &self.catalog,
            urls: &self.urls,
            cache: &self.cache,
            placeholders: &self.placeholders,
        })
    }
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx));

    if let Some(overlay) = view_overlay(&ctx) {
        layers = layers.push(overlay);
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery = gallery::view(
        ctx.gallery,
        gallery::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            urls: ctx.urls,
            cache: ctx.cache,
            placeholders: ctx.placeholders,
        },
    )
    .map(Message::Gallery);

    let sections = Column::new()
        .width(Length::Fill)
        .push(
            ctx.hero
                .view(ctx.i18n, ctx.urls, ctx.cache)
                .map(Message::Showcase),
        )
        .push(services::view(ctx.i18n).map(Message::Showcase))
        .push(gallery)
        .push(footer::view(ctx.i18n));

    let page = scrollable(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(
        Column::new()
            .push(ctx.header.view(ctx.i18n).map(Message::Showcase))
            .push(page),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if let Some(category) = ctx.lightbox.category() {
        let overlay = lightbox::view(
            ctx.lightbox,
            lightbox::ViewContext {
                i18n: ctx.i18n,
                items: ctx.catalog.items(category),
                urls: ctx.urls,
                cache: ctx.cache,
                placeholders: ctx.placeholders,
            },
        );
        return Some(overlay.map(Message::Lightbox));
    }

    ctx.photo_modal.map(|modal| {
        modal
            .view(ctx.i18n, ctx.urls, ctx.cache)
            .map(Message::PhotoModal)
    })
}
