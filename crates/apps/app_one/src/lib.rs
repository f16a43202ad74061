//! First consumer application.
//!
//! Renders the shared wrapper in its bare variant around a plain greeting and
//! places the shared button next to it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod page;
mod style;

use leptos::*;
use leptos_meta::*;
use shared_ui::{Button, ContractVersion, SharedUi};

pub use page::{home_markup, BUTTON_LABEL, GREETING, VARIANT};
pub use style::{page_stylesheet, style_config, APP_NAME};

/// Shared component contract this application was written against.
pub const REQUIRED_CONTRACT: ContractVersion = ContractVersion::new(1, 0);

/// Shared components this application imports.
pub const USED_COMPONENTS: &[&str] = &["SharedUi", "Button"];

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
        <Title text="App One" />
        <Style>{stylesheet}</Style>
        <HomePage />
    }
}

#[component]
/// Home page contents.
pub fn HomePage() -> impl IntoView {
    view! {
        <main class=page::MAIN_CLASS>
            <SharedUi variant=VARIANT>{GREETING}</SharedUi>
            <Button>{BUTTON_LABEL}</Button>
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
    use shared_ui::{
        find_export, ButtonComponent, RecordingNotifier, BUTTON_ALERT_MESSAGE, CONTRACT_VERSION,
        LABEL_TEXT,
    };

    #[test]
    fn home_page_wraps_greeting_in_bare_shared_ui() {
        let page = home_markup();
        let wrapper = page.find_kind("shared-ui").expect("shared wrapper");
        assert_eq!(wrapper.get_attr("data-ui-variant"), Some("bare"));
        assert_eq!(
            page.find_slot("label").map(|label| label.text_content()),
            Some(LABEL_TEXT.to_string())
        );
        assert_eq!(
            page.find_slot("content").map(|slot| slot.text_content()),
            Some(GREETING.to_string())
        );
    }

    #[test]
    fn home_page_button_alerts_once() {
        let page = home_markup();
        let button = page.find_kind("shared-button").expect("shared button");
        assert_eq!(button.text_content(), BUTTON_LABEL);

        let notifier = RecordingNotifier::new();
        ButtonComponent.activate(&notifier).expect("alert");
        assert_eq!(notifier.messages(), vec![BUTTON_ALERT_MESSAGE]);
    }

    #[test]
    fn imports_match_the_provided_contract() {
        assert!(CONTRACT_VERSION.is_compatible_with(REQUIRED_CONTRACT));
        for name in USED_COMPONENTS {
            assert!(find_export(name).is_some(), "{name} is not exported");
        }
    }

    #[test]
    fn every_page_class_resolves() {
        let config = style_config().expect("style config");
        for class in home_markup().class_names() {
            assert!(config.resolve(class).is_some(), "unresolved class {class}");
        }
    }

    #[test]
    fn content_scan_covers_page_and_shared_templates() {
        let config = style_config().expect("style config");
        let used = config.scan_used_utilities().expect("scan content sources");
        for class in home_markup().class_names() {
            assert!(used.contains(class), "scan missed {class}");
        }
        for class in shared_ui::template_classes() {
            assert!(used.contains(class), "scan missed shared class {class}");
        }
    }

    #[test]
    fn stylesheet_has_rule_per_page_utility() {
        let css = page_stylesheet().expect("stylesheet");
        for class in ["flex", "min-h-screen", "p-24", "bg-gray-100", "rounded-lg"] {
            assert!(css.contains(&format!(".{class} {{")), "missing rule for {class}");
        }
        assert!(css.contains("--colors-slate-900: #0f172a;"));
        assert!(!css.contains(".text-my-green {"));
    }
}
