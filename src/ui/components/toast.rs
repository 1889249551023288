use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    /// Validation failures; stays until dismissed.
    Error,
}

impl ToastKind {
    fn sticky(&self) -> bool {
        matches!(self, ToastKind::Error)
    }

    /// Screen-reader role; alerts interrupt, status updates wait.
    fn role(&self) -> &'static str {
        if self.sticky() {
            "alert"
        } else {
            "status"
        }
    }

    fn palette(&self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
            ToastKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            ToastKind::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-100",
            ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    match kind {
        ToastKind::Error => log::info!("alert: {}", message.text),
        _ => log::debug!("toast: {}", message.text),
    }
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends `message`, evicting the oldest entry once the queue is full.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let queued = toasts();

    if queued.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in queued {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|items| items.retain(|toast| toast.id != id));
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let kind = message.kind;
    let id = message.id.clone();

    // Alerts stay until the user closes them.
    let _auto_dismiss = use_future({
        let id = id.clone();
        move || {
            let id = id.clone();
            async move {
                if kind.sticky() {
                    return;
                }
                tokio::time::sleep(TOAST_AUTO_DISMISS).await;
                dismiss(toasts, &id);
            }
        }
    });

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {kind.palette()}",
            role: kind.role(),
            span { class: "text-lg", "{kind.icon()}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| dismiss(toasts, &id),
                "Dismiss"
            }
        }
    }
}
