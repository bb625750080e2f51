use serde::{Deserialize, Serialize};

use super::{
    entities::CalculationResult,
    form::{CalculatorForm, SubmitError},
};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Live field values of the calculator form.
    pub form: CalculatorForm,
    /// Result of the last successful submission.
    pub result: Option<CalculationResult>,
}

impl AppState {
    /// Calculates from the current form. A rejected submission leaves the
    /// previous result on screen.
    pub fn submit(&mut self) -> Result<&CalculationResult, SubmitError> {
        let result = self.form.submit()?;
        Ok(self.result.insert(result))
    }

    pub fn reset(&mut self) {
        self.form = CalculatorForm::default();
        self.result = None;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.form = persisted.form;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            form: self.form.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: CalculatorForm,
}
