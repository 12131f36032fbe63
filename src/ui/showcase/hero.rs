// SPDX-License-Identifier: MPL-2.0
//! Hero band: headline, contact links and a rotating photo.

use super::{Contact, Message};
use crate::i18n::fluent::I18n;
use crate::media::{RenditionCache, Transform, UrlBuilder};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, text, Column, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

/// Hero slides are delivered as JPEG.
const SLIDE_FORMAT: &str = "jpg";

/// Total height of the hero band.
pub const SECTION_HEIGHT: f32 = sizing::HERO_HEIGHT + 2.0 * spacing::XXL;

/// Rotating hero slides. Advancing wraps around to the first slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroCarousel {
    slides: Vec<String>,
    current: usize,
}

impl HeroCarousel {
    pub fn new(slides: Vec<String>) -> Self {
        Self { slides, current: 0 }
    }

    /// Advances to the next slide. Returns the new index.
    pub fn tick(&mut self) -> usize {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
        self.current
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&str> {
        self.slides.get(self.current).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Rotation is pointless with fewer than two slides.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.slides.len() > 1
    }

    /// Rendition URLs of every slide, in order.
    #[must_use]
    pub fn slide_urls(&self, urls: &UrlBuilder) -> Vec<String> {
        self.slides
            .iter()
            .map(|slide| urls.build(slide, SLIDE_FORMAT, &Transform::hero()))
            .collect()
    }

    pub fn view<'a>(
        &self,
        i18n: &I18n,
        urls: &UrlBuilder,
        cache: &RenditionCache,
    ) -> Element<'a, Message> {
        let headline = text(i18n.tr("hero-title")).size(typography::DISPLAY);
        let tagline = text(i18n.tr("hero-tagline")).size(typography::BODY_LG);

        let link = |key: &str, contact: Contact| {
            button(text(i18n.tr(key)).size(typography::BODY))
                .padding([spacing::XXS, 0.0])
                .on_press(Message::Contact(contact))
                .style(styles::button::link)
        };

        let contacts = Row::new()
            .spacing(spacing::LG)
            .push(link("contact-call-now", Contact::Phone))
            .push(link("contact-whatsapp", Contact::WhatsApp))
            .push(link("contact-instagram", Contact::Instagram));

        let copy = Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::HERO_WIDTH)
            .push(headline)
            .push(tagline)
            .push(Space::new().height(Length::Fixed(spacing::MD)))
            .push(contacts);

        let slide = self
            .current_slide()
            .map(|id| urls.build(id, SLIDE_FORMAT, &Transform::hero()))
            .and_then(|url| cache.peek(&url).cloned());

        let picture: Element<'a, Message> = match slide {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new().into(),
        };

        let frame = container(picture)
            .width(Length::Fixed(sizing::HERO_WIDTH))
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .clip(true)
            .style(styles::container::hero_frame);

        let band = Row::new()
            .spacing(spacing::XXL)
            .align_y(alignment::Vertical::Center)
            .push(container(copy).width(Length::Fill))
            .push(frame);

        container(container(band).max_width(sizing::CONTENT_MAX_WIDTH))
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_HEIGHT))
            .padding([spacing::XXL, spacing::LG])
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::hero)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> HeroCarousel {
        HeroCarousel::new((0..n).map(|i| format!("showcase/hero{i}")).collect())
    }

    #[test]
    fn tick_wraps_around() {
        let mut hero = carousel(6);
        for expected in [1, 2, 3, 4, 5, 0, 1] {
            assert_eq!(hero.tick(), expected);
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut hero = carousel(0);
        assert_eq!(hero.tick(), 0);
        assert_eq!(hero.current_slide(), None);
        assert!(!hero.is_rotating());
    }

    #[test]
    fn slide_urls_use_hero_rendition() {
        let hero = carousel(2);
        let urls = hero.slide_urls(&UrlBuilder::for_cloud("demo"));
        assert_eq!(
            urls[0],
            "https://res.cloudinary.com/demo/image/upload/c_fill,w_1300,h_1040/showcase/hero0.jpg"
        );
    }
}
