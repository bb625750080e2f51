use dioxus::{prelude::*, signals::Signal};
use tracing::warn;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, MeasuredWidthPage, SurfaceConditionPage, TireTypePage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/measured-width-info")]
    MeasuredWidthInfo {},
    #[route("/tire-type-info")]
    TireTypeInfo {},
    #[route("/surface-condition-info")]
    SurfaceConditionInfo {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::utilities_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the current form so the next launch starts from it.
pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!("failed to persist calculator form: {err}");
        push_toast(
            toasts,
            ToastKind::Warning,
            "Your inputs could not be saved for next time.",
        );
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn MeasuredWidthInfo() -> Element {
    rsx! { Shell { MeasuredWidthPage {} } }
}

#[component]
pub fn TireTypeInfo() -> Element {
    rsx! { Shell { TireTypePage {} } }
}

#[component]
pub fn SurfaceConditionInfo() -> Element {
    rsx! { Shell { SurfaceConditionPage {} } }
}
