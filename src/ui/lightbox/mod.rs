// SPDX-License-Identifier: MPL-2.0
//! Lightbox: full-window viewer over one gallery category.
//!
//! - [`state`] holds the `Closed`/`Open` machine and its effects
//! - [`input`] routes Escape and the arrow keys while the lightbox is open
//! - [`view`] draws the overlay

pub mod input;
pub mod state;
mod view;

pub use state::{Effect, Message, State, ViewerState};
pub use view::{view, ViewContext};
