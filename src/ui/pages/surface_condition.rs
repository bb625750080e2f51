use dioxus::prelude::*;

use crate::{
    domain::{
        reference::{surface_description, SURFACE_CONDITION_TITLE},
        SurfaceCondition,
    },
    ui::{components::back_button::BackButton, theme},
};

#[component]
pub fn SurfaceConditionPage() -> Element {
    rsx! {
        div { class: "space-y-6",
            BackButton {}
            article { class: "space-y-6 {theme::panel()}",
                h1 { class: "{theme::page_title()}", "{SURFACE_CONDITION_TITLE}" }
                dl { class: "space-y-4",
                    for surface in SurfaceCondition::ALL {
                        div { key: "{surface.key()}",
                            dt { class: "text-sm font-semibold text-slate-200", "{surface.label()}" }
                            dd { class: "mt-1 {theme::body_text()}", "{surface_description(surface)}" }
                        }
                    }
                }
            }
        }
    }
}
