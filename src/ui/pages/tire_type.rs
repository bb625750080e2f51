use dioxus::prelude::*;

use crate::{
    domain::{
        reference::{casing_pressure_drop_pct, TIRE_CASING, TIRE_CASING_TITLE},
        TireType,
    },
    ui::{
        components::back_button::BackButton,
        pages::measured_width::GuideBlock,
        theme,
    },
};

#[component]
pub fn TireTypePage() -> Element {
    rsx! {
        div { class: "space-y-6",
            BackButton {}
            article { class: "space-y-6 {theme::panel()}",
                h1 { class: "{theme::page_title()}", "{TIRE_CASING_TITLE}" }
                GuideBlock { section: TIRE_CASING }
                table { class: "w-full text-left text-sm",
                    thead {
                        tr { class: "border-b border-slate-800 {theme::text_muted()}",
                            th { class: "py-2", "Tire type" }
                            th { class: "py-2 text-right", "Pressure vs. best casing" }
                        }
                    }
                    tbody {
                        for tire_type in TireType::ALL {
                            tr { key: "{tire_type.key()}", class: "border-b border-slate-800/60",
                                td { class: "py-2 text-slate-200", "{tire_type.label()}" }
                                td { class: "py-2 text-right text-slate-300",
                                    {drop_label(tire_type)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn drop_label(tire_type: TireType) -> String {
    match casing_pressure_drop_pct(tire_type) {
        0 => "baseline".to_string(),
        pct => format!("-{pct}%"),
    }
}
