//! Style configuration for app two.

use std::sync::OnceLock;

use ui_theme::{theme, ContentSource, StyleConfig, StyleConfigError, TokenGroup};

use crate::page::home_markup;

/// Application name used in style diagnostics.
pub const APP_NAME: &str = "site-app-two";

static STYLE_CONFIG: OnceLock<Result<StyleConfig, StyleConfigError>> = OnceLock::new();

fn build_style_config() -> Result<StyleConfig, StyleConfigError> {
    StyleConfig::builder(APP_NAME)
        .theme(theme())
        .local_token(TokenGroup::Radius, "xl", "0.75rem")
        .content(ContentSource::rust(concat!(env!("CARGO_MANIFEST_DIR"), "/src")))
        .content(ContentSource::rust(shared_ui::SOURCE_DIR))
        .build()
}

/// Resolved style configuration: local tokens merged with the shared theme.
pub fn style_config() -> Result<&'static StyleConfig, &'static StyleConfigError> {
    STYLE_CONFIG.get_or_init(build_style_config).as_ref()
}

/// Stylesheet covering every utility used by the home page.
pub fn page_stylesheet() -> Result<String, &'static StyleConfigError> {
    let markup = home_markup();
    Ok(style_config()?.stylesheet(markup.class_names()))
}
