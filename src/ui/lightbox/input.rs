// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing for the lightbox.
//!
//! The listener exists only while the lightbox is open. It is expressed as an
//! Iced subscription that is returned when open and omitted otherwise; the
//! runtime installs it on the first frame it appears and tears it down on the
//! first frame it is missing, whichever path closed the lightbox. Re-opening
//! yields the same subscription identity, so listeners never stack up.
//!
//! [`Bindings`] mirrors that lifecycle as an explicit install/teardown pair so
//! the application can log it and tests can assert on it.

use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

/// Lightbox command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Close,
    Previous,
    Next,
}

/// Maps a key to a lightbox command. Unbound keys map to nothing.
#[must_use]
pub fn route(key: &Key) -> Option<Command> {
    match key {
        Key::Named(Named::Escape) => Some(Command::Close),
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        _ => None,
    }
}

fn route_event(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Command> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => route(&key),
        _ => None,
    }
}

/// Keyboard listener, present only while `is_open`.
pub fn subscription(is_open: bool) -> Subscription<Command> {
    if is_open {
        event::listen_with(route_event)
    } else {
        Subscription::none()
    }
}

/// Change reported by [`Bindings::sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingChange {
    Installed { generation: u64 },
    TornDown { generation: u64 },
}

/// Install/teardown bookkeeping for the lightbox key bindings.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    active: Option<u64>,
    next_generation: u64,
    installs: u64,
    teardowns: u64,
}

impl Bindings {
    /// Installs a fresh binding, tearing down any active one first.
    pub fn install(&mut self) -> u64 {
        self.teardown();
        let generation = self.next_generation;
        self.next_generation += 1;
        self.active = Some(generation);
        self.installs += 1;
        generation
    }

    /// Releases the active binding, if any. Returns its generation.
    pub fn teardown(&mut self) -> Option<u64> {
        let released = self.active.take();
        if released.is_some() {
            self.teardowns += 1;
        }
        released
    }

    /// Aligns the bindings with the lightbox after a state change.
    pub fn sync(&mut self, is_open: bool) -> Option<BindingChange> {
        match (is_open, self.active) {
            (true, None) => Some(BindingChange::Installed {
                generation: self.install(),
            }),
            (false, Some(_)) => self
                .teardown()
                .map(|generation| BindingChange::TornDown { generation }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_generation(&self) -> Option<u64> {
        self.active
    }

    /// Installs minus teardowns. Never exceeds one.
    #[must_use]
    pub fn live_count(&self) -> u64 {
        self.installs - self.teardowns
    }

    #[must_use]
    pub fn installs(&self) -> u64 {
        self.installs
    }

    #[must_use]
    pub fn teardowns(&self) -> u64 {
        self.teardowns
    }
}
