//! Shared presentational components consumed by every application.
//!
//! The export surface is versioned by [`CONTRACT_VERSION`] and consists of two
//! named components, `SharedUi` and `Button`. Each exists as a Leptos view for
//! browser rendering and as a headless [`SharedComponent`] that renders the
//! same template into an inspectable [`Node`] tree.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod component;
mod contract;
mod node;
mod notify;
mod view;

pub use component::{
    template_classes, ButtonComponent, SharedComponent, SharedUiComponent, SharedUiVariant,
    ACCENT_TOKEN, BUTTON_ALERT_MESSAGE, LABEL_TEXT,
};
pub use contract::{
    component_by_name, exports, find_export, ComponentDescriptor, ContractVersion,
    InputDescriptor, BUTTON, CONTRACT_VERSION, SHARED_UI,
};
pub use node::{Content, Element, Node};
pub use notify::{
    provide_notifier, BrowserAlertNotifier, NoopNotifier, Notifier, NotifyError,
    RecordingNotifier,
};
pub use view::{Button, ButtonProps, SharedUi, SharedUiProps};

/// Source directory of this crate, declared as a content source by
/// application style configurations so template classes are picked up.
pub const SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{
        provide_notifier, Button, ButtonComponent, Content, Element, Node, SharedComponent,
        SharedUi, SharedUiComponent, SharedUiVariant,
    };
}
