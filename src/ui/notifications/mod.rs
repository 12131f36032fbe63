// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Background failures (catalog refresh, state persistence, config parse)
//! surface here instead of blocking the showroom. Up to three toasts are
//! visible in the bottom-right corner; more are queued.
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-catalog-load-error"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
