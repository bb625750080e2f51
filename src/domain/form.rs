use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    entities::{
        CalculationResult, CalculatorInput, RidingSpeed, SurfaceCondition, TireType, TireWidth,
        UnknownOption, WeightDistribution, WeightUnit, WheelDiameter,
    },
    pressure::{calculate, validate_weight, CalculationError},
};

/// Calculator fields exactly as the form holds them: unparsed strings, with
/// an empty string meaning "nothing selected yet".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorForm {
    pub weight: String,
    pub weight_unit: String,
    pub surface_condition: String,
    pub tire_width: String,
    pub tire_diameter: String,
    pub tire_type: String,
    pub speed: String,
    pub weight_distribution: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            weight_unit: WeightUnit::default().key().to_string(),
            surface_condition: String::new(),
            tire_width: String::new(),
            tire_diameter: String::new(),
            tire_type: String::new(),
            speed: String::new(),
            weight_distribution: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),
    #[error(transparent)]
    Weight(CalculationError),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

impl CalculatorForm {
    /// Parses every field and checks the weight range, reporting the first
    /// problem in form order.
    pub fn parse(&self) -> Result<CalculatorInput, FormError> {
        let weight = parse_number("Weight", &self.weight)?;
        let weight_unit: WeightUnit = parse_select("Weight unit", &self.weight_unit)?;
        validate_weight(weight_unit.to_kg(weight)).map_err(FormError::Weight)?;

        let surface: SurfaceCondition = parse_select("Surface condition", &self.surface_condition)?;
        let tire_width = parse_tire_width(&self.tire_width)?;
        let wheel: WheelDiameter = parse_select("Wheel diameter", &self.tire_diameter)?;
        let tire_type: TireType = parse_select("Tire type", &self.tire_type)?;
        let speed: RidingSpeed = parse_select("Average speed", &self.speed)?;
        let weight_distribution: WeightDistribution =
            parse_select("Weight distribution", &self.weight_distribution)?;

        Ok(CalculatorInput {
            weight,
            weight_unit,
            surface,
            tire_width,
            wheel,
            tire_type,
            speed,
            weight_distribution,
        })
    }

    /// Every field problem at once, in form order. Empty when `parse` succeeds.
    pub fn errors(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        let weight = parse_number("Weight", &self.weight);
        let weight_unit = parse_select::<WeightUnit>("Weight unit", &self.weight_unit);
        match (weight, weight_unit) {
            (Ok(weight), Ok(unit)) => {
                if let Err(err) = validate_weight(unit.to_kg(weight)) {
                    errors.push(FormError::Weight(err));
                }
            }
            (weight, unit) => errors.extend(weight.err().into_iter().chain(unit.err())),
        }

        errors.extend(
            parse_select::<SurfaceCondition>("Surface condition", &self.surface_condition).err(),
        );
        errors.extend(parse_tire_width(&self.tire_width).err());
        errors.extend(parse_select::<WheelDiameter>("Wheel diameter", &self.tire_diameter).err());
        errors.extend(parse_select::<TireType>("Tire type", &self.tire_type).err());
        errors.extend(parse_select::<RidingSpeed>("Average speed", &self.speed).err());
        errors.extend(
            parse_select::<WeightDistribution>("Weight distribution", &self.weight_distribution)
                .err(),
        );
        errors
    }

    pub fn submit(&self) -> Result<CalculationResult, SubmitError> {
        let input = self.parse()?;
        Ok(calculate(&input)?)
    }
}

impl From<&CalculatorInput> for CalculatorForm {
    fn from(input: &CalculatorInput) -> Self {
        Self {
            weight: input.weight.to_string(),
            weight_unit: input.weight_unit.key().to_string(),
            surface_condition: input.surface.key().to_string(),
            tire_width: input.tire_width.0.to_string(),
            tire_diameter: input.wheel.key().to_string(),
            tire_type: input.tire_type.key().to_string(),
            speed: input.speed.key().to_string(),
            weight_distribution: input.weight_distribution.key().to_string(),
        }
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing { field })
    } else {
        Ok(trimmed)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
    let raw = required(field, value)?;
    raw.parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

fn parse_select<T>(field: &'static str, value: &str) -> Result<T, FormError>
where
    T: FromStr<Err = UnknownOption>,
{
    let raw = required(field, value)?;
    Ok(raw.parse()?)
}

fn parse_tire_width(value: &str) -> Result<TireWidth, FormError> {
    let raw = required("Tire width", value)?;
    let width = raw
        .parse::<u32>()
        .map(TireWidth)
        .map_err(|_| FormError::InvalidNumber {
            field: "Tire width",
            value: raw.to_string(),
        })?;
    if width.is_offered() {
        Ok(width)
    } else {
        Err(UnknownOption::new("tire width", raw).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CalculatorForm {
        CalculatorForm {
            weight: "154.324".to_string(),
            weight_unit: "lbs".to_string(),
            surface_condition: "new-pavement".to_string(),
            tire_width: "28".to_string(),
            tire_diameter: "622".to_string(),
            tire_type: "high-perf-tubeless-latex".to_string(),
            speed: "17.5".to_string(),
            weight_distribution: "road".to_string(),
        }
    }

    #[test]
    fn default_form_uses_pounds() {
        let form = CalculatorForm::default();
        assert_eq!(form.weight_unit, "lbs");
        assert_eq!(
            form.parse(),
            Err(FormError::Missing { field: "Weight" })
        );
    }

    #[test]
    fn missing_select_reports_field() {
        let form = CalculatorForm {
            tire_type: String::new(),
            ..filled()
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.to_string(), "Tire type is required");
    }

    #[test]
    fn missing_speed_uses_field_label() {
        let form = CalculatorForm {
            speed: String::new(),
            ..filled()
        };
        assert_eq!(
            form.parse().unwrap_err().to_string(),
            "Average speed is required"
        );
    }

    #[test]
    fn errors_lists_every_field_after_weight_range() {
        let form = CalculatorForm {
            weight: "500".to_string(),
            surface_condition: String::new(),
            speed: String::new(),
            ..filled()
        };
        let messages: Vec<String> = form.errors().iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), 3, "{messages:?}");
        assert!(messages[0].starts_with("Weight must be between"));
        assert_eq!(messages[1], "Surface condition is required");
        assert_eq!(messages[2], "Average speed is required");
    }

    #[test]
    fn errors_is_empty_for_valid_form() {
        assert_eq!(filled().errors(), Vec::new());
        assert!(filled().parse().is_ok());
    }

    #[test]
    fn errors_reports_missing_weight_and_selects_together() {
        let errors = CalculatorForm::default().errors();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors[0], FormError::Missing { field: "Weight" });
        assert_eq!(
            errors[6],
            FormError::Missing {
                field: "Weight distribution"
            }
        );
    }

    #[test]
    fn width_outside_offered_options_is_rejected() {
        let form = CalculatorForm {
            tire_width: "19".to_string(),
            ..filled()
        };
        assert!(matches!(form.parse(), Err(FormError::UnknownOption(_))));

        let form = CalculatorForm {
            tire_width: "28.5".to_string(),
            ..filled()
        };
        assert!(matches!(form.parse(), Err(FormError::InvalidNumber { .. })));
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let form = CalculatorForm {
            weight: "heavy".to_string(),
            ..filled()
        };
        assert_eq!(
            form.parse(),
            Err(FormError::InvalidNumber {
                field: "Weight",
                value: "heavy".to_string()
            })
        );
    }

    #[test]
    fn whitespace_around_values_is_ignored() {
        let form = CalculatorForm {
            weight: " 70 ".to_string(),
            weight_unit: "kg".to_string(),
            surface_condition: " new-pavement".to_string(),
            ..filled()
        };
        let input = form.parse().unwrap();
        assert_eq!(input.weight, 70.0);
        assert_eq!(input.surface, SurfaceCondition::NewPavement);
    }
}
