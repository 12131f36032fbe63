// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Every subscription here is conditional: it is returned only while the
//! state that needs it exists, and the runtime tears it down on the first
//! frame it is omitted.

use super::Message;
use crate::ui::lightbox::input;
use iced::{time, Subscription};
use std::time::Duration;

/// Toast auto-dismiss resolution.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Arrow keys and Escape, routed only while an overlay is open.
pub fn create_input_subscription(overlay_open: bool) -> Subscription<Message> {
    input::subscription(overlay_open).map(Message::LightboxKey)
}

/// Periodic catalog refresh.
pub fn create_refresh_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|_| Message::RefreshCatalog)
}

/// Hero slide rotation. A single slide never rotates.
pub fn create_hero_subscription(rotating: bool, interval: Duration) -> Subscription<Message> {
    if rotating {
        time::every(interval).map(|_| Message::HeroTick)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
