//! Multi-stop route plan, priced leg by leg at the standard tier.

use dioxus::prelude::*;

use crate::domain::{Field, RoutePlan, Session, ShippingTier};
use crate::infra::geocoder::GeocodingClient;
use crate::ui::components::{
    kpi_card::KpiCard,
    location_input::LocationInput,
    route_table::{leg_rows, RouteTable},
    stop_list::StopList,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;

const ROUTE_TIER: ShippingTier = ShippingTier::Standard;

#[component]
pub fn RoutePlannerPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let geocoder = use_context::<Option<GeocodingClient>>();

    let mut weight_input = use_signal(String::new);
    let mut plan = use_signal(|| None::<RoutePlan>);

    let stops = session.with(|s| s.stops.as_slice().to_vec());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match session.with(|s| s.plan_stops(&weight_input())) {
            Ok(result) => {
                log::info!(
                    "planned {} leg(s), {} km, {:.2}",
                    result.legs.len(),
                    result.route.total_distance_km,
                    result.total_cost
                );
                plan.set(Some(result));
            }
            Err(err) => {
                plan.set(None);
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    let on_remove = move |id: String| {
        if let Some(removed) = session.with_mut(|s| s.remove_stop(&id)) {
            plan.set(None);
            push_toast(
                toasts,
                ToastKind::Info,
                format!("Removed stop {}.", removed.display_name),
            );
        }
    };

    let on_reset = move |_: MouseEvent| {
        session.with_mut(|s| s.reset());
        weight_input.set(String::new());
        plan.set(None);
        // A fresh session also forgets every earlier lookup.
        if let Some(geocoder) = geocoder.clone() {
            spawn(async move {
                geocoder.clear_cache().await;
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            form {
                class: "{theme::PANEL} space-y-4 px-4 py-4",
                onsubmit: on_submit,
                div { class: "grid gap-4 md:grid-cols-2",
                    LocationInput { field: Field::Start, placeholder: "Where the route begins".to_string() }
                    div {
                        label { class: "{theme::LABEL}", "Weight per leg (kg)" }
                        input {
                            class: "{theme::INPUT}",
                            inputmode: "decimal",
                            value: weight_input(),
                            oninput: move |evt| weight_input.set(evt.value()),
                            placeholder: "5",
                        }
                    }
                }
                LocationInput { field: Field::Stop, placeholder: "Add a stop and press Enter".to_string() }
                StopList { stops, on_remove }
                div { class: "flex items-center justify-between",
                    button {
                        class: "{theme::BTN_GHOST}",
                        r#type: "button",
                        onclick: on_reset,
                        "Reset"
                    }
                    button {
                        class: "{theme::btn_primary(ROUTE_TIER)}",
                        r#type: "submit",
                        "Plan route"
                    }
                }
            }

            if let Some(result) = plan() {
                section { class: "space-y-4",
                    div { class: "grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Total cost".to_string(),
                            value: format!("${:.2}", result.total_cost),
                            description: Some(format!("{} leg(s), {} rates", result.legs.len(), ROUTE_TIER.label())),
                            tier: ROUTE_TIER,
                        }
                        KpiCard {
                            title: "Total distance".to_string(),
                            value: format!("{} km", result.route.total_distance_km),
                            description: Some("Nearest-neighbor order".to_string()),
                            tier: ROUTE_TIER,
                        }
                        KpiCard {
                            title: "Delivery".to_string(),
                            value: format!("up to {} days", result.delivery_days_max),
                            description: Some("Slowest leg".to_string()),
                            tier: ROUTE_TIER,
                        }
                    }
                    RouteTable { rows: leg_rows(&result) }
                }
            }
        }
    }
}
