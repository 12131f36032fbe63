// SPDX-License-Identifier: MPL-2.0
//! Gallery section: category tabs and the thumbnail grid.

use super::state::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::{
    CategoryKey, CategorySet, MediaItem, PlaceholderHandles, RenditionCache, Transform, UrlBuilder,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, text, Column, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

/// Skeleton tiles drawn while a category's thumbnails arrive.
pub const SKELETON_TILES: usize = 8;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a CategorySet,
    pub urls: &'a UrlBuilder,
    pub cache: &'a RenditionCache,
    pub placeholders: &'a PlaceholderHandles,
}

/// Vertical offset of the grid row holding `index`, relative to the top
/// of the grid.
#[must_use]
pub fn row_offset(index: usize) -> f32 {
    let row = index / sizing::GRID_COLUMNS;
    row as f32 * (sizing::TILE_HEIGHT + spacing::MD)
}

fn tab<'a>(key: CategoryKey, count: usize, active: bool) -> Element<'a, Message> {
    let badge = container(text(count.to_string()).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::count_badge(active));

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(text(key.gallery_title()).size(typography::BODY))
        .push(badge);

    button(label)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::SelectCategory(key))
        .style(styles::button::tab(active))
        .into()
}

fn tabs<'a>(state: &State, catalog: &CategorySet) -> Element<'a, Message> {
    CategoryKey::GALLERY
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, key| {
            row.push(tab(key, catalog.count(key), key == state.active()))
        })
        .wrap()
        .into()
}

fn skeleton<'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .style(styles::container::skeleton)
        .into()
}

fn tile<'a>(index: usize, item: &MediaItem, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let thumbnail_url = ctx.urls.for_item(item, &Transform::thumbnail());
    let handle = ctx
        .cache
        .peek(&thumbnail_url)
        .or_else(|| ctx.placeholders.get(&item.identifier))
        .cloned();

    let content: Element<'a, Message> = match handle {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => skeleton(),
    };

    button(content)
        .width(Length::Fixed(sizing::TILE_WIDTH))
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .padding(0)
        .on_press(Message::OpenPhoto(index))
        .style(styles::button::tile)
        .into()
}

fn rows<'a>(tiles: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;
    for tile in tiles {
        row = row.push(tile);
        in_row += 1;
        if in_row == sizing::GRID_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }
    grid.into()
}

fn grid<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if state.is_loading() {
        return rows((0..SKELETON_TILES).map(|_| skeleton()).collect());
    }

    let items = state.items(ctx.catalog);
    if items.is_empty() {
        return container(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
            .padding(spacing::XXL)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    rows(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| tile(index, item, ctx))
            .collect(),
    )
}

pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = text(ctx.i18n.tr("section-gallery")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(tabs(state, ctx.catalog))
        .push(grid(state, &ctx));

    container(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::gallery_section)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_offset_steps_per_full_row() {
        assert_eq!(row_offset(0), 0.0);
        assert_eq!(row_offset(sizing::GRID_COLUMNS - 1), 0.0);
        assert_eq!(
            row_offset(sizing::GRID_COLUMNS),
            sizing::TILE_HEIGHT + spacing::MD
        );
    }

    #[test]
    fn loading_grid_builds_skeletons() {
        let i18n = I18n::default();
        let catalog = CategorySet::new().with(
            CategoryKey::Aluminium,
            vec![MediaItem::new("a", "jpg")],
        );
        let urls = UrlBuilder::for_cloud("demo");
        let cache = RenditionCache::with_defaults();
        let placeholders = PlaceholderHandles::default();
        let mut state = State::default();
        state.select_category(CategoryKey::Aluminium, &catalog);
        assert!(state.is_loading());

        let _element = view(
            &state,
            ViewContext {
                i18n: &i18n,
                catalog: &catalog,
                urls: &urls,
                cache: &cache,
                placeholders: &placeholders,
            },
        );
    }
}
