use dioxus::prelude::*;

use crate::domain::Location;
use crate::ui::theme;

#[component]
pub fn StopList(stops: Vec<Location>, on_remove: EventHandler<String>) -> Element {
    let is_empty = stops.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            ul {
                class: "divide-y divide-slate-800 text-sm",
                for (idx, stop) in stops.into_iter().enumerate() {
                    StopRow { key: "{stop.id}", position: idx + 1, stop, on_remove }
                }
                if is_empty {
                    li {
                        class: "px-4 py-6 text-center text-sm text-slate-500",
                        "Type a stop and press Enter, or pick a suggestion."
                    }
                }
            }
        }
    }
}

#[component]
fn StopRow(position: usize, stop: Location, on_remove: EventHandler<String>) -> Element {
    let remove_id = stop.id.clone();
    rsx! {
        li {
            class: "flex items-center gap-3 px-4 py-3 hover:bg-slate-800/40",
            span { class: "w-6 text-xs text-slate-500", "{position}." }
            div { class: "min-w-0 flex-1",
                p { class: "truncate font-medium text-slate-200", "{stop.display_name}" }
                p { class: "truncate text-xs text-slate-500", "{stop.point}" }
            }
            button {
                class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                r#type: "button",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_remove.call(remove_id.clone());
                },
                "Remove"
            }
        }
    }
}
