//! Pressure calculation and the typed values that feed it live here.

pub mod app_state;
pub mod entities;
pub mod form;
pub mod pressure;
pub mod reference;

pub use app_state::{AppState, PersistedState};
pub use entities::{
    AxlePair, CalculationResult, CalculatorInput, PinchFlatRisk, RidingSpeed, SurfaceCondition,
    TireType, TireWidth, UnknownOption, WeightDistribution, WeightUnit, WheelDiameter,
};
pub use form::{CalculatorForm, FormError, SubmitError};
pub use pressure::{calculate, CalculationError};
