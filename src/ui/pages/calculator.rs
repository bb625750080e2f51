use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route},
    domain::{
        AppState, CalculatorForm, RidingSpeed, SubmitError, SurfaceCondition, TireType,
        TireWidth, WeightDistribution, WeightUnit, WheelDiameter,
    },
    ui::{
        components::{
            result_panel::ResultPanel,
            select_field::{SelectField, SelectOption},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut errors = use_signal(Vec::<String>::new);

    let form = state.with(|st| st.form.clone());
    let result = state.with(|st| st.result.clone());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = state.with_mut(|st| st.submit().cloned());
        match outcome {
            Ok(result) => {
                errors.set(Vec::new());
                persist_user_state(&state, toasts);
                if result.pinch_flat_risk.is_at_risk() {
                    push_toast(
                        toasts,
                        ToastKind::Warning,
                        format!("Warning: {} risk of pinch flats", result.pinch_flat_risk),
                    );
                }
            }
            Err(SubmitError::Form(_)) => {
                let messages = state.with(|st| st.form.errors());
                errors.set(messages.iter().map(ToString::to_string).collect());
            }
            Err(err) => errors.set(vec![err.to_string()]),
        }
    };

    let on_reset = move |_| {
        state.with_mut(|st| st.reset());
        errors.set(Vec::new());
        persist_user_state(&state, toasts);
        push_toast(toasts, ToastKind::Info, "Cleared the calculator.");
    };

    rsx! {
        div { class: "space-y-8",
            form {
                class: "space-y-8 {theme::panel()}",
                onsubmit: on_submit,
                div { class: "grid gap-8 sm:grid-cols-2",
                    WeightField { form: form.clone() }
                    SelectField {
                        label: "Surface Condition",
                        placeholder: "Select Surface Condition",
                        value: form.surface_condition.clone(),
                        options: surface_options(),
                        info: Route::SurfaceConditionInfo {},
                        on_change: move |value| state.with_mut(|st| st.form.surface_condition = value),
                    }
                    SelectField {
                        label: "Measured Tire Width",
                        placeholder: "Select Measured Tire Width",
                        value: form.tire_width.clone(),
                        options: width_options(),
                        info: Route::MeasuredWidthInfo {},
                        on_change: move |value| state.with_mut(|st| st.form.tire_width = value),
                    }
                    SelectField {
                        label: "Wheel Diameter",
                        placeholder: "Select Wheel Diameter",
                        value: form.tire_diameter.clone(),
                        options: wheel_options(),
                        on_change: move |value| state.with_mut(|st| st.form.tire_diameter = value),
                    }
                    SelectField {
                        label: "Tire Type",
                        placeholder: "Select Tire Type",
                        value: form.tire_type.clone(),
                        options: tire_type_options(),
                        info: Route::TireTypeInfo {},
                        on_change: move |value| state.with_mut(|st| st.form.tire_type = value),
                    }
                    SelectField {
                        label: "Average Speed",
                        placeholder: "Select Average Speed",
                        value: form.speed.clone(),
                        options: speed_options(),
                        on_change: move |value| state.with_mut(|st| st.form.speed = value),
                    }
                    SelectField {
                        label: "Weight Distribution",
                        placeholder: "Select Weight Distribution",
                        value: form.weight_distribution.clone(),
                        options: distribution_options(),
                        on_change: move |value| state.with_mut(|st| st.form.weight_distribution = value),
                    }
                }
                if !errors.read().is_empty() {
                    div { class: "space-y-1 {theme::field_error()}",
                        for message in errors() {
                            p { "{message}" }
                        }
                    }
                }
                div { class: "space-y-3",
                    button { r#type: "submit", class: "{theme::btn_primary()}", "Calculate Pressure" }
                    button { r#type: "button", class: "{theme::btn_secondary()}", onclick: on_reset, "Reset" }
                }
            }
            if let Some(result) = result {
                ResultPanel { result }
            }
        }
    }
}

#[component]
fn WeightField(form: CalculatorForm) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "space-y-1",
            label { class: "{theme::label_class()}", "Total System Weight" }
            div { class: "flex gap-2",
                select {
                    class: "{theme::unit_select_class()}",
                    onchange: move |evt| state.with_mut(|st| st.form.weight_unit = evt.value()),
                    for unit in WeightUnit::ALL {
                        option {
                            value: unit.key(),
                            selected: form.weight_unit == unit.key(),
                            "{unit.key()}"
                        }
                    }
                }
                input {
                    r#type: "number",
                    step: "any",
                    class: "{theme::input_class()}",
                    value: "{form.weight}",
                    oninput: move |evt| state.with_mut(|st| st.form.weight = evt.value()),
                }
            }
            p { class: "text-xs {theme::text_muted()}", "Rider plus bike and gear, 75-450 lbs or 34-205 kg" }
        }
    }
}

fn surface_options() -> Vec<SelectOption> {
    SurfaceCondition::ALL
        .iter()
        .map(|surface| SelectOption::new(surface.key(), surface.label()))
        .collect()
}

fn width_options() -> Vec<SelectOption> {
    TireWidth::options()
        .map(|width| SelectOption::new(width.0.to_string(), width.to_string()))
        .collect()
}

fn wheel_options() -> Vec<SelectOption> {
    WheelDiameter::ALL
        .iter()
        .map(|wheel| SelectOption::new(wheel.key(), wheel.label()))
        .collect()
}

fn tire_type_options() -> Vec<SelectOption> {
    TireType::ALL
        .iter()
        .map(|tire_type| SelectOption::new(tire_type.key(), tire_type.label()))
        .collect()
}

fn speed_options() -> Vec<SelectOption> {
    RidingSpeed::ALL
        .iter()
        .map(|speed| SelectOption::new(speed.key(), speed.label()))
        .collect()
}

fn distribution_options() -> Vec<SelectOption> {
    WeightDistribution::ALL
        .iter()
        .map(|dist| SelectOption::new(dist.key(), dist.label()))
        .collect()
}
