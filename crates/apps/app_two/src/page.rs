//! Page content for app two.

use shared_ui::prelude::*;

/// Paragraph text placed inside the shared wrapper.
pub const GREETING: &str = "Hello! I am app 2 and now I use the shared theme!";
/// Wrapper variant chosen by this application.
pub const VARIANT: SharedUiVariant = SharedUiVariant::Themed;

pub(crate) const MAIN_CLASS: &str = "flex min-h-screen flex-col items-center justify-between p-24";
pub(crate) const GREETING_CLASS: &str = "bg-my-green p-5 rounded-md";

/// Application content handed to the shared wrapper.
pub fn greeting() -> Content {
    Element::new("p").class(GREETING_CLASS).child(GREETING).into()
}

/// Home page rendered as an inspectable markup tree.
pub fn home_markup() -> Node {
    Element::new("main")
        .class(MAIN_CLASS)
        .child(SharedUiComponent::new(VARIANT).render(greeting()))
        .into()
}
