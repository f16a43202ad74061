//! User-visible notification adapters for component side effects.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{provide_context, use_context};
use thiserror::Error;

/// Errors raised while dispatching a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// No host environment (browser window) is available.
    #[error("notification host unavailable")]
    HostUnavailable,
    /// The host rejected the notification.
    #[error("notification dispatch failed: {0}")]
    Dispatch(String),
}

/// Synchronous, modal user notification.
pub trait Notifier {
    /// Shows `message` to the user.
    fn alert(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser adapter backed by `window.alert`.
pub struct BrowserAlertNotifier;

impl Notifier for BrowserAlertNotifier {
    fn alert(&self, message: &str) -> Result<(), NotifyError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or(NotifyError::HostUnavailable)?;
            return window
                .alert_with_message(message)
                .map_err(|err| NotifyError::Dispatch(format!("{err:?}")));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            Err(NotifyError::HostUnavailable)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Adapter that accepts and drops every notification.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn alert(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
/// Adapter that records messages instead of showing them.
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of messages received.
    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn alert(&self, message: &str) -> Result<(), NotifyError> {
        (**self).alert(message)
    }
}

#[derive(Clone)]
struct NotifierContext(Rc<dyn Notifier>);

/// Installs `notifier` for shared components rendered below the current owner.
pub fn provide_notifier(notifier: impl Notifier + 'static) {
    provide_context(NotifierContext(Rc::new(notifier)));
}

pub(crate) fn use_notifier() -> Rc<dyn Notifier> {
    use_context::<NotifierContext>()
        .map(|context| context.0)
        .unwrap_or_else(|| Rc::new(BrowserAlertNotifier))
}
