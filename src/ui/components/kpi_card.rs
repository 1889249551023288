use dioxus::prelude::*;

use crate::domain::ShippingTier;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tier: ShippingTier) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: "{theme::LABEL}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::accent_text(tier)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs text-slate-500", "{desc}" }
            }
        }
    }
}
