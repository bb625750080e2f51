//! Shared class strings so pages stay visually consistent.

use crate::domain::PinchFlatRisk;

// ============================================
// LAYOUT
// ============================================

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 p-6"
}

pub fn page_title() -> &'static str {
    "text-3xl font-bold tracking-tight text-slate-100"
}

pub fn section_heading() -> &'static str {
    "mb-4 text-xl font-bold text-slate-200"
}

pub fn body_text() -> &'static str {
    "text-sm leading-relaxed text-slate-300"
}

pub fn text_muted() -> &'static str {
    "text-slate-400"
}

// ============================================
// FORM CONTROLS
// ============================================

pub fn label_class() -> &'static str {
    "block text-sm font-semibold text-slate-300"
}

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
}

pub fn unit_select_class() -> &'static str {
    "mt-1 w-24 rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
}

pub fn link_class() -> &'static str {
    "text-xs text-sky-400 hover:text-sky-300 hover:underline"
}

pub fn field_error() -> &'static str {
    "rounded-lg border border-rose-500/40 bg-rose-500/10 px-3 py-2 text-sm text-rose-200"
}

// ============================================
// BUTTONS
// ============================================

pub fn btn_primary() -> &'static str {
    "w-full rounded-lg bg-sky-500 px-4 py-3 text-sm font-semibold text-white hover:bg-sky-400"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

// ============================================
// RESULTS
// ============================================

pub fn pressure_value(front: bool) -> &'static str {
    if front {
        "mt-2 text-3xl font-bold text-sky-300"
    } else {
        "mt-2 text-3xl font-bold text-violet-300"
    }
}

pub fn risk_panel(risk: PinchFlatRisk) -> &'static str {
    match risk {
        PinchFlatRisk::Extreme => {
            "mt-6 rounded-lg border border-rose-500/40 bg-rose-500/10 p-4 text-sm text-rose-200"
        }
        PinchFlatRisk::Increased => {
            "mt-6 rounded-lg border border-amber-500/40 bg-amber-500/10 p-4 text-sm text-amber-200"
        }
        PinchFlatRisk::None => "hidden",
    }
}
