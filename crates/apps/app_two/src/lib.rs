//! Second consumer application.
//!
//! Uses the themed variant of the shared wrapper and styles its own content
//! with utilities derived from the shared theme.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod page;
mod style;

use leptos::*;
use leptos_meta::*;
use shared_ui::{ContractVersion, SharedUi};

pub use page::{greeting, home_markup, GREETING, VARIANT};
pub use style::{page_stylesheet, style_config, APP_NAME};

/// Shared component contract this application was written against.
pub const REQUIRED_CONTRACT: ContractVersion = ContractVersion::new(1, 0);

/// Shared components this application imports.
pub const USED_COMPONENTS: &[&str] = &["SharedUi"];

#[component]
/// Application root: metadata, generated stylesheet, and the home page.
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stylesheet = match page_stylesheet() {
        Ok(css) => css,
        Err(err) => {
            logging::warn!("{APP_NAME} stylesheet unavailable: {err}");
            String::new()
        }
    };

    view! {
        <Title text="App Two" />
        <Style>{stylesheet}</Style>
        <HomePage />
    }
}

#[component]
/// Home page contents.
pub fn HomePage() -> impl IntoView {
    view! {
        <main class=page::MAIN_CLASS>
            <SharedUi variant=VARIANT>
                <p class=page::GREETING_CLASS>{GREETING}</p>
            </SharedUi>
        </main>
    }
}

/// Mounts [`App`] to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    logging::log!("mounting {APP_NAME}");
    leptos::mount_to_body(|| view! { <App /> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_ui::{find_export, ACCENT_TOKEN, CONTRACT_VERSION, LABEL_TEXT};

    #[test]
    fn home_page_wraps_themed_paragraph() {
        let page = home_markup();
        let wrapper = page.find_kind("shared-ui").expect("shared wrapper");
        assert_eq!(wrapper.get_attr("data-ui-variant"), Some("themed"));
        assert_eq!(page.count_slot("label"), 1);
        assert_eq!(
            page.find_slot("label").map(|label| label.text_content()),
            Some(LABEL_TEXT.to_string())
        );

        let content = page.find_slot("content").expect("content slot");
        assert_eq!(content.children(), &[greeting()]);
        assert!(page.find_kind("shared-button").is_none());
    }

    #[test]
    fn imports_match_the_provided_contract() {
        assert!(CONTRACT_VERSION.is_compatible_with(REQUIRED_CONTRACT));
        for name in USED_COMPONENTS {
            assert!(find_export(name).is_some(), "{name} is not exported");
        }
    }

    #[test]
    fn themed_classes_resolve_against_shared_accent() {
        let config = style_config().expect("style config");
        for class in home_markup().class_names() {
            assert!(config.resolve(class).is_some(), "unresolved class {class}");
        }
        let accent = format!("bg-{ACCENT_TOKEN}");
        assert_eq!(
            config.resolve(&accent).map(|utility| utility.css_rule()),
            Some(format!(".{accent} {{ background-color: var(--colors-{ACCENT_TOKEN}); }}"))
        );
    }

    #[test]
    fn local_radius_token_is_available() {
        let config = style_config().expect("style config");
        assert!(config.resolve("rounded-xl").is_some());
        assert!(config.theme().get(ui_theme::TokenGroup::Radius, "xl").is_none());
    }

    #[test]
    fn stylesheet_includes_accent_rules() {
        let css = page_stylesheet().expect("stylesheet");
        assert!(css.contains(".bg-my-green {"));
        assert!(css.contains(".text-my-green {"));
        assert!(css.contains("--radius-xl: 0.75rem;"));
    }
}
