//! Headless component templates.
//!
//! Each shared component is a pure function of its content: it renders a
//! fixed template around whatever [`Content`] the application supplies. The
//! Leptos views in [`crate::view`] reuse the class and slot constants below so
//! both renderings stay identical.

use crate::contract::{ComponentDescriptor, BUTTON, SHARED_UI};
use crate::node::{Content, Element, Node};
use crate::notify::{Notifier, NotifyError};

/// Fixed label text rendered by [`SharedUiComponent`].
pub const LABEL_TEXT: &str = "Shared UI component!";
/// Message shown when a shared button is activated.
pub const BUTTON_ALERT_MESSAGE: &str = "This is a shared component!";
/// Theme color token used by the themed label.
pub const ACCENT_TOKEN: &str = "my-green";

pub(crate) const WRAPPER_CLASS: &str = "flex flex-col";
pub(crate) const BUTTON_CLASS: &str = "p-5 rounded-lg bg-gray-100";
const BARE_LABEL_CLASS: &str = "text-3xl bg-gray-100 p-2 rounded-md";
const THEMED_LABEL_CLASS: &str = "text-3xl text-my-green bg-gray-100 p-2 rounded-md";

/// Render capability shared by every exported component.
pub trait SharedComponent {
    /// Stable contract this component implements.
    fn descriptor(&self) -> &'static ComponentDescriptor;

    /// Renders the fixed template around `content`.
    fn render(&self, content: Content) -> Node;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Label styling selected by the consuming application.
pub enum SharedUiVariant {
    /// Neutral label.
    Bare,
    /// Label tinted with the theme accent color.
    #[default]
    Themed,
}

impl SharedUiVariant {
    /// Stable `data-ui-variant` token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Themed => "themed",
        }
    }

    pub(crate) const fn label_class(self) -> &'static str {
        match self {
            Self::Bare => BARE_LABEL_CLASS,
            Self::Themed => THEMED_LABEL_CLASS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Wrapper that shows the fixed label above the supplied content.
pub struct SharedUiComponent {
    /// Label styling.
    pub variant: SharedUiVariant,
}

impl SharedUiComponent {
    /// Creates the component with `variant`.
    pub const fn new(variant: SharedUiVariant) -> Self {
        Self { variant }
    }
}

impl SharedComponent for SharedUiComponent {
    fn descriptor(&self) -> &'static ComponentDescriptor {
        &SHARED_UI
    }

    fn render(&self, content: Content) -> Node {
        Element::new("div")
            .class(WRAPPER_CLASS)
            .attr("data-ui-kind", "shared-ui")
            .attr("data-ui-variant", self.variant.token())
            .child(
                Element::new("div")
                    .class(self.variant.label_class())
                    .attr("data-ui-slot", "label")
                    .child(LABEL_TEXT),
            )
            .child(
                Element::new("div")
                    .attr("data-ui-slot", "content")
                    .child(content),
            )
            .into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Clickable element that raises a fixed alert when activated.
pub struct ButtonComponent;

impl ButtonComponent {
    /// Runs the activation side effect: exactly one alert, independent of content.
    pub fn activate(&self, notifier: &dyn Notifier) -> Result<(), NotifyError> {
        notifier.alert(BUTTON_ALERT_MESSAGE)
    }
}

impl SharedComponent for ButtonComponent {
    fn descriptor(&self) -> &'static ComponentDescriptor {
        &BUTTON
    }

    fn render(&self, content: Content) -> Node {
        Element::new("button")
            .attr("type", "button")
            .class(BUTTON_CLASS)
            .attr("data-ui-kind", "shared-button")
            .child(content)
            .into()
    }
}

/// Every class name the shared templates can emit.
pub fn template_classes() -> Vec<&'static str> {
    [
        WRAPPER_CLASS,
        BARE_LABEL_CLASS,
        THEMED_LABEL_CLASS,
        BUTTON_CLASS,
    ]
    .iter()
    .flat_map(|classes| classes.split_whitespace())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use pretty_assertions::assert_eq;

    fn sample_contents() -> Vec<Content> {
        vec![
            Node::text("X"),
            Node::empty(),
            Node::text(LABEL_TEXT),
            Node::text("<script>alert(1)</script>"),
            Element::new("p")
                .class("bg-my-green p-5 rounded-md")
                .child(Element::new("strong").child("nested"))
                .into(),
            Node::Fragment(vec![Node::text("a"), Node::text("b")]),
        ]
    }

    #[test]
    fn shared_ui_wraps_label_and_content() {
        let tree = SharedUiComponent::default().render("X".into());
        let wrapper = tree.find_kind("shared-ui").expect("wrapper node");
        assert_eq!(wrapper.tag(), "div");
        assert_eq!(wrapper.children().len(), 2);

        let label = tree.find_slot("label").expect("label node");
        assert_eq!(label.text_content(), LABEL_TEXT);

        let content = tree.find_slot("content").expect("content node");
        assert_eq!(content.children(), &[Node::text("X")]);
    }

    #[test]
    fn shared_ui_keeps_any_content_unmodified_with_one_label() {
        for variant in [SharedUiVariant::Bare, SharedUiVariant::Themed] {
            for content in sample_contents() {
                let tree = SharedUiComponent::new(variant).render(content.clone());
                assert!(tree.contains(&content));
                assert_eq!(tree.count_slot("label"), 1);
                assert_eq!(
                    tree.find_slot("content").map(|slot| slot.children().to_vec()),
                    Some(vec![content])
                );
            }
        }
    }

    #[test]
    fn only_themed_variant_uses_accent_color() {
        let accent = format!("text-{ACCENT_TOKEN}");
        let themed = SharedUiComponent::new(SharedUiVariant::Themed).render(Node::empty());
        let bare = SharedUiComponent::new(SharedUiVariant::Bare).render(Node::empty());

        assert!(themed.class_names().contains(&accent.as_str()));
        assert!(!bare.class_names().contains(&accent.as_str()));
        assert_eq!(
            bare.find_kind("shared-ui").and_then(|el| el.get_attr("data-ui-variant")),
            Some("bare")
        );
    }

    #[test]
    fn button_renders_content_inside_clickable_element() {
        for content in sample_contents() {
            let tree = ButtonComponent.render(content.clone());
            let button = tree.find_kind("shared-button").expect("button node");
            assert_eq!(button.tag(), "button");
            assert_eq!(button.get_attr("type"), Some("button"));
            assert!(tree.contains(&content));
        }
    }

    #[test]
    fn button_activation_alerts_exactly_once_regardless_of_content() {
        for content in sample_contents() {
            let notifier = RecordingNotifier::new();
            let _ = ButtonComponent.render(content);
            ButtonComponent.activate(&notifier).expect("alert");
            assert_eq!(notifier.messages(), vec![BUTTON_ALERT_MESSAGE]);
        }
    }

    #[test]
    fn click_scenario_produces_single_alert() {
        let notifier = RecordingNotifier::new();
        let tree = ButtonComponent.render("Click".into());
        assert_eq!(tree.text_content(), "Click");
        ButtonComponent.activate(&notifier).expect("alert");
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn html_output_escapes_content_but_keeps_template() {
        let html = SharedUiComponent::new(SharedUiVariant::Bare).render("<b>".into()).to_html();
        assert_eq!(
            html,
            "<div class=\"flex flex-col\" data-ui-kind=\"shared-ui\" data-ui-variant=\"bare\">\
<div class=\"text-3xl bg-gray-100 p-2 rounded-md\" data-ui-slot=\"label\">Shared UI component!</div>\
<div data-ui-slot=\"content\">&lt;b&gt;</div></div>"
        );
    }

    #[test]
    fn template_classes_cover_every_variant() {
        let classes = template_classes();
        for class in ["flex-col", "text-3xl", "text-my-green", "rounded-lg", "p-5"] {
            assert!(classes.contains(&class), "missing {class}");
        }
    }
}
