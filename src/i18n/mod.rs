// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations are embedded from `assets/i18n/*.ftl`. The locale comes from
//! the `--lang` flag, then the config file, then the OS, then en-US.

pub mod fluent;
