// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Each component follows the Elm-style "state down, messages up" pattern:
//! a state struct, a `Message` enum, and a `handle` returning an `Effect`
//! the application turns into tasks.
//!
//! # Components
//!
//! - [`gallery`] - Category tabs, loading flag and thumbnail grid
//! - [`lightbox`] - Full-window viewer with keyboard navigation
//! - [`photo_modal`] - Single-photo modal opened from the `--photo` flag
//! - [`showcase`] - Header, hero carousel, service cards and footer
//! - [`notifications`] - Toast notifications for background failures
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Colors, spacing and sizing constants
//! - [`styles`] - Widget style functions
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod notifications;
pub mod photo_modal;
pub mod showcase;
pub mod styles;
pub mod theming;
