// SPDX-License-Identifier: MPL-2.0
//! Gallery: category filter state and the tabbed thumbnail grid.

pub mod state;
mod view;

pub use state::{Effect, Message, State};
pub use view::{row_offset, view, ViewContext, SKELETON_TILES};
