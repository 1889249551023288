//! Text input with debounced geocoding suggestions.

use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::{is_postal_code, normalize_postal_code, Field, InputHandler, Location, Session};
use crate::infra::geocoder::GeocodingClient;
use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};
use crate::ui::theme;

/// Quiet period before a keystroke turns into a lookup.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Shorter queries clear the suggestion list instead of searching.
pub const MIN_QUERY_CHARS: usize = 3;

pub fn should_lookup(text: &str) -> bool {
    text.trim().chars().count() >= MIN_QUERY_CHARS
}

#[component]
pub fn LocationInput(field: Field, placeholder: String) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let geocoder = use_context::<Option<GeocodingClient>>();

    let (text, suggestions, selected) = session.with(|s| {
        let state = s.field(field);
        (
            state.text.clone(),
            state.suggestions.clone(),
            state.selected.clone(),
        )
    });

    let postal_hint = (selected.is_none() && is_postal_code(&text))
        .then(|| normalize_postal_code(&text))
        .flatten();

    let on_input = move |evt: FormEvent| {
        let text = evt.value();
        let ticket = session.with_mut(|s| s.on_text_input(field, &text));
        if !should_lookup(&text) {
            session.with_mut(|s| s.clear_suggestions(field));
            return;
        }

        let Some(geocoder) = geocoder.clone() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            if !session.with(|s| s.is_current(ticket)) {
                return;
            }
            let results = geocoder.search(&text).await;
            session.with_mut(|s| s.accept_suggestions(ticket, results));
        });
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if !field.is_stop_entry() || evt.key() != Key::Enter {
            return;
        }
        evt.prevent_default();

        let already_queued = session.with(|s| {
            s.field(field)
                .suggestions
                .first()
                .is_some_and(|first| s.stops.contains(&first.id))
        });
        match session.with_mut(|s| s.submit_entry(field)) {
            Some(location) => announce_stop(toasts, &location, already_queued),
            None => push_toast(
                toasts,
                ToastKind::Warning,
                "No matching places yet. Keep typing or wait for suggestions.",
            ),
        }
    };

    rsx! {
        div { class: "relative",
            label { class: "{theme::LABEL}", "{field.label()}" }
            input {
                class: "{theme::INPUT}",
                r#type: "text",
                autocomplete: "off",
                value: "{text}",
                placeholder: "{placeholder}",
                oninput: on_input,
                onkeydown: on_keydown,
            }
            if let Some(postal) = postal_hint {
                p { class: "mt-1 text-xs text-slate-500", "Searching postal code {postal}" }
            }
            if let Some(location) = selected {
                p { class: "mt-1 truncate text-xs text-emerald-400",
                    title: "{location.full_address}",
                    "✓ {location.full_address}"
                }
            }
            if !suggestions.is_empty() {
                ul { class: "{theme::SUGGESTION_LIST}",
                    for location in suggestions {
                        SuggestionItem {
                            key: "{location.id}",
                            location: location.clone(),
                            on_pick: move |picked: Location| pick(session, toasts, field, picked),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionItem(location: Location, on_pick: EventHandler<Location>) -> Element {
    let subtitle = location.postal_code.clone().unwrap_or_default();
    rsx! {
        li {
            class: "{theme::SUGGESTION_ITEM}",
            onclick: move |_| on_pick.call(location.clone()),
            div { class: "font-medium", "{location.display_name}" }
            div { class: "truncate text-xs text-slate-500", "{location.full_address}" }
            if !subtitle.is_empty() {
                div { class: "text-xs text-slate-600", "{subtitle}" }
            }
        }
    }
}

fn pick(
    mut session: Signal<Session>,
    toasts: Signal<Vec<ToastMessage>>,
    field: Field,
    location: Location,
) {
    let already_queued = field.is_stop_entry() && session.with(|s| s.stops.contains(&location.id));
    session.with_mut(|s| s.select_suggestion(field, location.clone()));
    if field.is_stop_entry() {
        announce_stop(toasts, &location, already_queued);
    }
}

fn announce_stop(toasts: Signal<Vec<ToastMessage>>, location: &Location, already_queued: bool) {
    let name = &location.display_name;
    if already_queued {
        push_toast(
            toasts,
            ToastKind::Warning,
            format!("{name} is already on the route."),
        );
    } else {
        push_toast(toasts, ToastKind::Success, format!("Added stop {name}."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_skip_lookup() {
        assert!(!should_lookup(""));
        assert!(!should_lookup(" To "));
        assert!(should_lookup("Tor"));
        assert!(should_lookup("Île"));
    }
}
