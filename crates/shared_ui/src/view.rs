//! Leptos renderings of the shared components.

use leptos::*;

use crate::component::{
    ButtonComponent, SharedUiVariant, BUTTON_CLASS, LABEL_TEXT, WRAPPER_CLASS,
};
use crate::notify::{use_notifier, Notifier};

#[component]
/// Labelled wrapper around arbitrary application content.
pub fn SharedUi(
    /// Label styling selected by the application.
    #[prop(default = SharedUiVariant::Themed)]
    variant: SharedUiVariant,
    /// Content rendered below the label.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=WRAPPER_CLASS data-ui-kind="shared-ui" data-ui-variant=variant.token()>
            <div class=variant.label_class() data-ui-slot="label">
                {LABEL_TEXT}
            </div>
            <div data-ui-slot="content">{children.map(|children| children())}</div>
        </div>
    }
}

fn activate_button(notifier: &dyn Notifier) {
    if let Err(err) = ButtonComponent.activate(notifier) {
        logging::warn!("shared button notification failed: {err}");
    }
}

#[component]
/// Clickable element that raises the shared alert on activation.
pub fn Button(children: Children) -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <button
            type="button"
            class=BUTTON_CLASS
            data-ui-kind="shared-button"
            on:click=move |_| activate_button(notifier.as_ref())
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::component::BUTTON_ALERT_MESSAGE;
    use crate::notify::{provide_notifier, NotifyError, RecordingNotifier};
    use pretty_assertions::assert_eq;

    #[test]
    fn click_handler_alerts_through_provided_notifier() {
        let runtime = create_runtime();
        let recorder = Rc::new(RecordingNotifier::new());
        provide_notifier(recorder.clone());

        let notifier = use_notifier();
        activate_button(notifier.as_ref());
        assert_eq!(recorder.messages(), vec![BUTTON_ALERT_MESSAGE]);

        notifier.alert("direct").expect("record");
        assert_eq!(recorder.count(), 2);
        runtime.dispose();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_context_falls_back_to_browser_alert() {
        let runtime = create_runtime();
        let notifier = use_notifier();
        assert_eq!(notifier.alert("hi"), Err(NotifyError::HostUnavailable));

        // Logged and swallowed rather than panicking.
        activate_button(notifier.as_ref());
        runtime.dispose();
    }
}
