use dioxus::prelude::*;

use crate::domain::{AxlePair, CalculationResult, PinchFlatRisk};
use crate::ui::theme;

#[component]
pub fn ResultPanel(result: CalculationResult) -> Element {
    let risk = result.pinch_flat_risk;

    rsx! {
        section { class: "mt-8 {theme::panel()}",
            h3 { class: "mb-4 text-center text-xl font-bold text-slate-100", "Recommended Tire Pressures" }
            div { class: "grid grid-cols-2 gap-8",
                PressureCard { title: "Front", psi: result.front, front: true }
                PressureCard { title: "Rear", psi: result.back, front: false }
            }
            if risk.is_at_risk() {
                RiskWarning {
                    risk,
                    recommended_width: result.recommended_width,
                    alternative: result.alternative_pressures,
                }
            }
        }
    }
}

#[component]
fn PressureCard(title: &'static str, psi: f64, front: bool) -> Element {
    rsx! {
        div { class: "rounded-lg border border-slate-800 bg-slate-950/60 p-4 text-center",
            p { class: "text-sm font-medium {theme::text_muted()}", "{title}" }
            p { class: "{theme::pressure_value(front)}", "{psi} PSI" }
        }
    }
}

#[component]
fn RiskWarning(
    risk: PinchFlatRisk,
    recommended_width: Option<u32>,
    alternative: Option<AxlePair>,
) -> Element {
    rsx! {
        div { class: "{theme::risk_panel(risk)}",
            p { class: "font-medium", "Warning: {risk} risk of pinch flats" }
            if let Some(width) = recommended_width {
                p { class: "mt-2", "Recommended minimum tire width: {width}mm" }
            }
            if let Some(pair) = alternative {
                p { class: "mt-2",
                    "To keep your current tire, run at least {pair.front} PSI front and {pair.back} PSI rear."
                }
            }
        }
    }
}
