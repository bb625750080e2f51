use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Labelled dropdown with an empty placeholder entry and an optional
/// "What is this?" link to an info page.
#[component]
pub fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    value: String,
    options: Vec<SelectOption>,
    info: Option<Route>,
    on_change: EventHandler<String>,
) -> Element {
    let nothing_selected = value.is_empty();
    let entries = options
        .into_iter()
        .map(|entry| {
            let selected = entry.value == value;
            (entry, selected)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "space-y-1",
            div { class: "flex items-center justify-between",
                label { class: "{theme::label_class()}", "{label}" }
                if let Some(route) = info {
                    Link { class: "{theme::link_class()}", to: route, "What is this?" }
                }
            }
            select {
                class: "{theme::input_class()}",
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", disabled: true, selected: nothing_selected, "{placeholder}" }
                for (entry, selected) in entries {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        selected: selected,
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
