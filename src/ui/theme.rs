//! Tier-specific theme helpers for consistent styling across pages.

use crate::domain::ShippingTier;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(tier: ShippingTier) -> &'static str {
    match tier {
        ShippingTier::Standard => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
        ShippingTier::Express => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-amber-400",
        ShippingTier::Overnight => "rounded-lg bg-rose-500 px-4 py-2 text-sm font-semibold text-white hover:bg-rose-400",
    }
}

pub fn btn_tier(tier: ShippingTier, active: bool) -> &'static str {
    match (tier, active) {
        (ShippingTier::Standard, true) => "rounded-lg px-4 py-2 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
        (ShippingTier::Express, true) => "rounded-lg px-4 py-2 text-sm font-semibold bg-amber-500/20 text-amber-300 border border-amber-500/40",
        (ShippingTier::Overnight, true) => "rounded-lg px-4 py-2 text-sm font-semibold bg-rose-500/20 text-rose-300 border border-rose-500/40",
        (_, false) => "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-slate-500 hover:text-slate-200",
    }
}

pub const BTN_GHOST: &str =
    "text-xs font-semibold uppercase tracking-wide text-slate-400 hover:text-slate-100";

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const SUGGESTION_LIST: &str = "absolute z-20 mt-1 max-h-64 w-full overflow-y-auto rounded-lg border border-slate-700 bg-slate-900 shadow-xl";

pub const SUGGESTION_ITEM: &str =
    "cursor-pointer px-3 py-2 text-sm text-slate-200 hover:bg-slate-800";

// ============================================
// PANELS & TABLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_CONTAINER: &str = "overflow-hidden rounded-xl border border-slate-800";

pub const TABLE_HEADER: &str = "bg-slate-900/80 text-xs uppercase text-slate-400";

// ============================================
// ACCENTS
// ============================================

pub fn accent_text(tier: ShippingTier) -> &'static str {
    match tier {
        ShippingTier::Standard => "text-sky-300",
        ShippingTier::Express => "text-amber-300",
        ShippingTier::Overnight => "text-rose-300",
    }
}
