// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine: `Closed` or `Open` on one photo of one category.
//!
//! The machine never owns the photo list; every operation receives the items
//! of the category it is (or will be) showing. Transitions mutate `self` in
//! message order, so a burst of arrow-key presses is applied one step at a
//! time against the result of the previous step.

use crate::media::{CategoryKey, MediaItem};

/// Where the lightbox is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        category: CategoryKey,
        index: usize,
        /// Identifier at `index` when the state was entered.
        identifier: String,
        /// Whether the full-resolution image has signalled completion.
        loaded: bool,
    },
}

/// Lightbox messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open { category: CategoryKey, index: usize },
    Next,
    Previous,
    Close,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A new photo is focused: fetch it and preload its neighbours.
    Focus { category: CategoryKey, index: usize },
    /// The lightbox closed on this identifier; store it as last viewed.
    Closed { last_viewed: String },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    viewer: ViewerState,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a message. `items` must be the photos of the category the
    /// message concerns: the target category for `Open`, the open one otherwise.
    pub fn handle(&mut self, message: Message, items: &[MediaItem]) -> Effect {
        match message {
            Message::Open { category, index } => self.open(category, index, items),
            Message::Next => self.next(items),
            Message::Previous => self.prev(items),
            Message::Close => self.close(),
        }
    }

    /// Opens on `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, category: CategoryKey, index: usize, items: &[MediaItem]) -> Effect {
        let Some(item) = items.get(index) else {
            return Effect::None;
        };
        self.focus(category, index, item)
    }

    /// Steps forward. No-op on the last photo or when closed.
    pub fn next(&mut self, items: &[MediaItem]) -> Effect {
        match self.viewer {
            ViewerState::Open {
                category, index, ..
            } => match index.checked_add(1).and_then(|i| items.get(i).map(|item| (i, item))) {
                Some((next, item)) => self.focus(category, next, item),
                None => Effect::None,
            },
            ViewerState::Closed => Effect::None,
        }
    }

    /// Steps back. No-op on the first photo or when closed.
    pub fn prev(&mut self, items: &[MediaItem]) -> Effect {
        match self.viewer {
            ViewerState::Open {
                category, index, ..
            } => match index.checked_sub(1).and_then(|i| items.get(i).map(|item| (i, item))) {
                Some((previous, item)) => self.focus(category, previous, item),
                None => Effect::None,
            },
            ViewerState::Closed => Effect::None,
        }
    }

    /// Closes the lightbox, yielding the focused identifier.
    pub fn close(&mut self) -> Effect {
        match std::mem::take(&mut self.viewer) {
            ViewerState::Open { identifier, .. } => Effect::Closed {
                last_viewed: identifier,
            },
            ViewerState::Closed => Effect::None,
        }
    }

    /// Marks the focused image as loaded. Signals for any other identifier
    /// (a photo navigated away from, or a closed lightbox) are discarded.
    /// Returns whether the signal was accepted.
    pub fn image_loaded(&mut self, loaded_identifier: &str) -> bool {
        match &mut self.viewer {
            ViewerState::Open {
                identifier, loaded, ..
            } if identifier == loaded_identifier => {
                *loaded = true;
                true
            }
            _ => false,
        }
    }

    /// Re-anchors the open lightbox after the catalog was replaced.
    ///
    /// The focused photo is followed to its new position. If it disappeared
    /// the index is clamped, and an emptied category closes the lightbox.
    pub fn catalog_replaced(&mut self, items: &[MediaItem]) -> Effect {
        let ViewerState::Open {
            category,
            index,
            identifier,
            ..
        } = &self.viewer
        else {
            return Effect::None;
        };
        let (category, index) = (*category, *index);

        if let Some(position) = items.iter().position(|item| &item.identifier == identifier) {
            if let ViewerState::Open { index, .. } = &mut self.viewer {
                *index = position;
            }
            return Effect::None;
        }

        let clamped = index.min(items.len().saturating_sub(1));
        match items.get(clamped) {
            Some(item) => self.focus(category, clamped, item),
            None => self.close(),
        }
    }

    fn focus(&mut self, category: CategoryKey, index: usize, item: &MediaItem) -> Effect {
        self.viewer = ViewerState::Open {
            category,
            index,
            identifier: item.identifier.clone(),
            loaded: false,
        };
        Effect::Focus { category, index }
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.viewer, ViewerState::Open { .. })
    }

    #[must_use]
    pub fn category(&self) -> Option<CategoryKey> {
        match self.viewer {
            ViewerState::Open { category, .. } => Some(category),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.viewer {
            ViewerState::Open { index, .. } => Some(index),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.viewer {
            ViewerState::Open { identifier, .. } => Some(identifier),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.viewer, ViewerState::Open { loaded: true, .. })
    }

    /// Whether the "previous" control should be shown.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        matches!(self.viewer, ViewerState::Open { index, .. } if index > 0)
    }

    /// Whether the "next" control should be shown.
    #[must_use]
    pub fn has_next(&self, items: &[MediaItem]) -> bool {
        matches!(self.viewer, ViewerState::Open { index, .. } if index + 1 < items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<MediaItem> {
        ids.iter().map(|id| MediaItem::new(*id, "jpg")).collect()
    }

    fn open_at(index: usize, list: &[MediaItem]) -> State {
        let mut state = State::new();
        state.open(CategoryKey::Aluminium, index, list);
        state
    }

    #[test]
    fn starts_closed() {
        let state = State::new();
        assert_eq!(state.viewer(), &ViewerState::Closed);
        assert!(!state.has_previous());
    }

    #[test]
    fn open_then_close_yields_focused_identifier() {
        let list = items(&["a", "b", "c"]);
        for index in 0..list.len() {
            let mut state = State::new();
            assert_eq!(
                state.open(CategoryKey::Aluminium, index, &list),
                Effect::Focus {
                    category: CategoryKey::Aluminium,
                    index
                }
            );
            assert_eq!(
                state.close(),
                Effect::Closed {
                    last_viewed: list[index].identifier.clone()
                }
            );
            assert_eq!(state.viewer(), &ViewerState::Closed);
        }
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let list = items(&["a"]);
        let mut state = State::new();
        assert_eq!(state.open(CategoryKey::Aluminium, 1, &list), Effect::None);
        assert_eq!(state.open(CategoryKey::LedMirror, 0, &[]), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn next_steps_and_stops_at_end() {
        let list = items(&["a", "b", "c"]);
        let mut state = open_at(1, &list);

        assert!(matches!(state.next(&list), Effect::Focus { index: 2, .. }));
        assert_eq!(state.index(), Some(2));

        let before = state.viewer().clone();
        assert_eq!(state.next(&list), Effect::None);
        assert_eq!(state.viewer(), &before);
    }

    #[test]
    fn prev_stops_at_start() {
        let list = items(&["a", "b"]);
        let mut state = open_at(0, &list);
        let before = state.viewer().clone();
        assert_eq!(state.prev(&list), Effect::None);
        assert_eq!(state.viewer(), &before);

        let mut state = open_at(1, &list);
        assert!(matches!(state.prev(&list), Effect::Focus { index: 0, .. }));
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let list = items(&["a", "b"]);
        let mut state = State::new();
        assert_eq!(state.next(&list), Effect::None);
        assert_eq!(state.prev(&list), Effect::None);
        assert_eq!(state.close(), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn every_step_resets_loaded() {
        let list = items(&["a", "b", "c"]);
        let mut state = open_at(0, &list);
        assert!(state.image_loaded("a"));
        assert!(state.is_loaded());

        state.next(&list);
        assert!(!state.is_loaded());
    }

    #[test]
    fn stale_loaded_signal_is_discarded() {
        let list = items(&["a", "b", "c"]);
        let mut state = open_at(0, &list);
        state.next(&list);

        assert!(!state.image_loaded("a"));
        assert!(!state.is_loaded());
        assert!(state.image_loaded("b"));
    }

    #[test]
    fn loaded_signal_after_close_is_discarded() {
        let list = items(&["a"]);
        let mut state = open_at(0, &list);
        state.close();
        assert!(!state.image_loaded("a"));
        assert!(!state.is_open());
    }

    #[test]
    fn rapid_next_lands_on_index_plus_count() {
        let list = items(&["a", "b", "c", "d", "e", "f"]);
        for (start, presses) in [(0, 3), (1, 10), (5, 1), (2, 0)] {
            let mut state = open_at(start, &list);
            for _ in 0..presses {
                state.handle(Message::Next, &list);
            }
            assert_eq!(state.index(), Some((start + presses).min(list.len() - 1)));
        }
    }

    #[test]
    fn controls_follow_boundaries() {
        let list = items(&["a", "b", "c"]);
        let state = open_at(0, &list);
        assert!(!state.has_previous());
        assert!(state.has_next(&list));

        let state = open_at(2, &list);
        assert!(state.has_previous());
        assert!(!state.has_next(&list));
    }

    #[test]
    fn aluminium_scenario() {
        let aluminium = items(&["A", "B", "C"]);
        let mut state = State::new();

        assert_eq!(
            state.handle(
                Message::Open {
                    category: CategoryKey::Aluminium,
                    index: 1
                },
                &aluminium
            ),
            Effect::Focus {
                category: CategoryKey::Aluminium,
                index: 1
            }
        );
        assert!(matches!(state.handle(Message::Next, &aluminium), Effect::Focus { index: 2, .. }));
        assert_eq!(state.handle(Message::Next, &aluminium), Effect::None);
        assert_eq!(state.index(), Some(2));
        assert_eq!(
            state.handle(Message::Close, &aluminium),
            Effect::Closed {
                last_viewed: "C".to_string()
            }
        );
    }

    #[test]
    fn catalog_refresh_follows_focused_photo() {
        let mut state = open_at(1, &items(&["c", "b", "a"]));
        let refreshed = items(&["d", "c", "b", "a"]);
        assert_eq!(state.catalog_replaced(&refreshed), Effect::None);
        assert_eq!(state.index(), Some(2));
        assert_eq!(state.identifier(), Some("b"));
    }

    #[test]
    fn catalog_refresh_clamps_or_closes() {
        let mut state = open_at(2, &items(&["c", "b", "a"]));
        assert!(matches!(
            state.catalog_replaced(&items(&["z"])),
            Effect::Focus { index: 0, .. }
        ));
        assert_eq!(state.identifier(), Some("z"));

        assert!(matches!(state.catalog_replaced(&[]), Effect::Closed { .. }));
        assert!(!state.is_open());
    }
}
