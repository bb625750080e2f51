use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4",
                div { class: "mx-auto flex max-w-3xl items-center justify-between gap-4",
                    Link {
                        class: "text-xl font-semibold tracking-tight text-slate-100",
                        to: Route::Calculator {},
                        "🚲 {APP_NAME}"
                    }
                    p { class: "text-xs {theme::text_muted()}", "Calculate optimal tire pressure for your bicycle" }
                }
            }
            main { class: "mx-auto max-w-3xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-3xl px-6 pb-8 text-center text-xs {theme::text_muted()}",
                "{version}"
            }
        }
    }
}
