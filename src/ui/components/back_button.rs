use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn BackButton() -> Element {
    let nav = use_navigator();

    rsx! {
        button {
            class: "{theme::btn_secondary()}",
            onclick: move |_| nav.go_back(),
            "← Back"
        }
    }
}
