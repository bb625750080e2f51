use dioxus::prelude::*;

use crate::{
    domain::reference::{GuideSection, MEASURED_WIDTH, MEASURED_WIDTH_TITLE},
    ui::{components::back_button::BackButton, theme},
};

#[component]
pub fn MeasuredWidthPage() -> Element {
    rsx! {
        div { class: "space-y-6",
            BackButton {}
            article { class: "space-y-6 {theme::panel()}",
                h1 { class: "{theme::page_title()}", "{MEASURED_WIDTH_TITLE}" }
                for (index, section) in MEASURED_WIDTH.iter().enumerate() {
                    GuideBlock { key: "{index}", section: *section }
                }
            }
        }
    }
}

#[component]
pub fn GuideBlock(section: GuideSection) -> Element {
    rsx! {
        section { class: "space-y-3",
            if let Some(heading) = section.heading {
                h2 { class: "{theme::section_heading()}", "{heading}" }
            }
            for paragraph in section.paragraphs.iter() {
                p { class: "{theme::body_text()}", "{paragraph}" }
            }
        }
    }
}
