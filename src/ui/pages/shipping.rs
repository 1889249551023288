//! Single-leg shipping estimate.

use dioxus::prelude::*;

use crate::domain::{Field, Session, ShippingEstimate, ShippingTier};
use crate::ui::components::{
    kpi_card::KpiCard,
    location_input::LocationInput,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;

#[component]
pub fn ShippingPage() -> Element {
    let session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut weight_input = use_signal(String::new);
    let mut tier_input = use_signal(|| ShippingTier::default().key().to_string());
    let mut estimate = use_signal(|| None::<ShippingEstimate>);

    // Unknown values fall back to standard styling; submission still rejects them.
    let tier = tier_input().parse::<ShippingTier>().unwrap_or_default();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = session.with(|s| s.quote_shipment(&weight_input(), &tier_input()));
        match result {
            Ok(quote) => {
                log::info!(
                    "quoted {} km {} shipment at {:.2}",
                    quote.distance_km,
                    quote.tier.key(),
                    quote.cost
                );
                estimate.set(Some(quote));
            }
            Err(err) => {
                estimate.set(None);
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    let route_label = session.with(|s| {
        match (s.selected(Field::Origin), s.selected(Field::Destination)) {
            (Some(origin), Some(destination)) => {
                Some(format!("{} → {}", origin.display_name, destination.display_name))
            }
            _ => None,
        }
    });

    rsx! {
        div { class: "space-y-8",
            form {
                class: "{theme::PANEL} grid gap-4 px-4 py-4 md:grid-cols-2",
                onsubmit: on_submit,
                LocationInput { field: Field::Origin, placeholder: "City or postal code, e.g. Toronto".to_string() }
                LocationInput { field: Field::Destination, placeholder: "City or postal code, e.g. H2X 1Y4".to_string() }
                div {
                    label { class: "{theme::LABEL}", "Weight (kg)" }
                    input {
                        class: "{theme::INPUT}",
                        inputmode: "decimal",
                        value: weight_input(),
                        oninput: move |evt| weight_input.set(evt.value()),
                        placeholder: "10",
                    }
                }
                div {
                    label { class: "{theme::LABEL}", "Service" }
                    div { class: "mt-1 flex gap-2",
                        for choice in ShippingTier::ALL {
                            button {
                                key: "{choice.key()}",
                                r#type: "button",
                                class: "{theme::btn_tier(choice, choice == tier)}",
                                onclick: move |_| tier_input.set(choice.key().to_string()),
                                "{choice.label()}"
                            }
                        }
                    }
                }
                div { class: "md:col-span-2 flex justify-end",
                    button {
                        class: "{theme::btn_primary(tier)}",
                        r#type: "submit",
                        "Estimate cost"
                    }
                }
            }

            if let Some(quote) = estimate() {
                section { class: "space-y-3",
                    if let Some(label) = route_label {
                        p { class: "text-sm text-slate-400", "{label}" }
                    }
                    div { class: "grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Estimated cost".to_string(),
                            value: format!("${:.2}", quote.cost),
                            description: Some(format!("{} service", quote.tier.label())),
                            tier: quote.tier,
                        }
                        KpiCard {
                            title: "Distance".to_string(),
                            value: format!("{} km", quote.distance_km),
                            description: Some("Great-circle distance".to_string()),
                            tier: quote.tier,
                        }
                        KpiCard {
                            title: "Delivery".to_string(),
                            value: quote.delivery_days.to_string(),
                            description: Some("Business days".to_string()),
                            tier: quote.tier,
                        }
                    }
                }
            }
        }
    }
}
