//! Page content for app one, shared by the Leptos view and the headless markup.

use shared_ui::{ButtonComponent, Element, Node, SharedComponent, SharedUiComponent, SharedUiVariant};

/// Greeting placed inside the shared wrapper.
pub const GREETING: &str = "Hello! I am app 1";
/// Label of the shared button.
pub const BUTTON_LABEL: &str = "Click me";
/// Wrapper variant chosen by this application.
pub const VARIANT: SharedUiVariant = SharedUiVariant::Bare;

pub(crate) const MAIN_CLASS: &str = "flex min-h-screen flex-col items-center justify-between p-24";

/// Home page rendered as an inspectable markup tree.
pub fn home_markup() -> Node {
    Element::new("main")
        .class(MAIN_CLASS)
        .child(SharedUiComponent::new(VARIANT).render(GREETING.into()))
        .child(ButtonComponent.render(BUTTON_LABEL.into()))
        .into()
}
