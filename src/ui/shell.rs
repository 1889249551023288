use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-5xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                        p { class: "text-xs text-slate-500 italic", "Canadian addresses only" }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Shipping {}),
                            onclick: move |_| { nav.push(Route::Shipping {}); },
                            label: "📦 Estimate",
                        }
                        NavButton {
                            active: matches!(current_route, Route::RoutePlanner {}),
                            onclick: move |_| { nav.push(Route::RoutePlanner {}); },
                            label: "🗺️ Route",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-5xl px-6 pb-6 text-xs text-slate-600",
                "{version_label()} · geocoding © OpenStreetMap contributors"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
