//! Transient notification queue rendered by the `Toaster` component.
//!
//! DESIGN
//! ======
//! Pages push messages through the `Toasts` handle; the toaster schedules
//! removal after `config::TOAST_TTL_MS`. Ids are monotonic so a late dismiss
//! never removes a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Context handle used by pages to raise notifications.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastState>);

impl Toasts {
    pub fn new(signal: RwSignal<ToastState>) -> Self {
        Self(signal)
    }

    pub fn state(&self) -> RwSignal<ToastState> {
        self.0
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        self.0.update(|state| {
            state.push(ToastKind::Success, message);
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("toast: {message}");
        self.0.update(|state| {
            state.push(ToastKind::Error, message);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|state| state.dismiss(id));
    }
}
