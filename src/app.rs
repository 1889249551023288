use dioxus::prelude::*;

use crate::{
    domain::Session,
    infra::geocoder::GeocodingClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{RoutePlannerPage, ShippingPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Shipping {},
    #[route("/route")]
    RoutePlanner {},
}

#[component]
pub fn App() -> Element {
    let session = use_signal(Session::new);
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    // One client per app so every input shares the same lookup cache.
    let geocoder = use_hook(|| {
        GeocodingClient::new()
            .inspect_err(|err| log::error!("failed to initialise geocoder: {err}"))
            .ok()
    });
    let unavailable = geocoder.is_none();
    use_effect(move || {
        if unavailable {
            push_toast(
                toasts,
                ToastKind::Error,
                "Address search is unavailable; restart the app to retry.",
            );
        }
    });
    use_context_provider(|| geocoder.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Shipping() -> Element {
    rsx! { Shell { ShippingPage {} } }
}

#[component]
pub fn RoutePlanner() -> Element {
    rsx! { Shell { RoutePlannerPage {} } }
}
