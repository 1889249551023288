use dioxus::prelude::*;

use crate::domain::RoutePlan;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct LegRow {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub distance_km: u32,
    pub cumulative_km: u32,
    pub cost: f64,
}

/// Flattens a plan into table rows with a running distance.
pub fn leg_rows(plan: &RoutePlan) -> Vec<LegRow> {
    let mut cumulative_km = 0;
    plan.legs
        .iter()
        .enumerate()
        .map(|(idx, leg)| {
            cumulative_km += leg.distance_km;
            LegRow {
                index: idx + 1,
                from: leg.from.display_name.clone(),
                to: leg.to.display_name.clone(),
                distance_km: leg.distance_km,
                cumulative_km,
                cost: leg.cost,
            }
        })
        .collect()
}

#[component]
pub fn RouteTable(rows: Vec<LegRow>) -> Element {
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "#" }
                        th { class: "px-4 py-3 font-medium", "From" }
                        th { class: "px-4 py-3 font-medium", "To" }
                        th { class: "px-4 py-3 font-medium text-right", "Leg (km)" }
                        th { class: "px-4 py-3 font-medium text-right", "Total (km)" }
                        th { class: "px-4 py-3 font-medium text-right", "Cost ($)" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        tr {
                            key: "{row.index}",
                            class: "hover:bg-slate-800/40",
                            td { class: "px-4 py-3 text-slate-500", "{row.index}" }
                            td { class: "px-4 py-3 text-slate-300", "{row.from}" }
                            td { class: "px-4 py-3 font-medium text-slate-200", "{row.to}" }
                            td { class: "px-4 py-3 text-right text-slate-300", "{row.distance_km}" }
                            td { class: "px-4 py-3 text-right text-slate-500", "{row.cumulative_km}" }
                            td { class: "px-4 py-3 text-right text-slate-200", {format!("{:.2}", row.cost)} }
                        }
                    }
                }
            }
        }
    }
}
