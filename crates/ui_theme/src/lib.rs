//! Shared design tokens and the per-application style configuration layer.
//!
//! The token table is authored in `theme.toml`, validated by the build script,
//! and compiled into the crate. [`theme`] hands every consumer the same
//! immutable [`Theme`]; applications merge it into a [`StyleConfig`] that
//! derives utility classes and emits their stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod style_config;
mod theme;

pub use style_config::{ContentSource, StyleConfig, StyleConfigBuilder, StyleConfigError, Utility};
pub use theme::{theme, Theme, ThemeError, TokenGroup, TokenKey, TokenValue};
