// SPDX-License-Identifier: MPL-2.0
//! `superglass` is the showroom kiosk of Super Glass Aluminium & PVC Furniture,
//! built with the Iced GUI framework.
//!
//! It presents the service catalog, a gallery of completed work streamed from
//! a Cloudinary-style media host, and a full-window lightbox with keyboard
//! navigation and neighbour preloading. Text is localized with Fluent and
//! preferences live in a sectioned `settings.toml`.

#![doc(html_root_url = "https://docs.rs/superglass/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
