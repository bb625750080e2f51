//! Closed-form tire pressure model.
//!
//! The model estimates a center-point pressure from tire geometry and a
//! combined stiffness (surface roughness plus system weight), scales it by
//! speed, load split and casing quality, and then checks the impact energy at
//! speed against what the casing can absorb before the rim bottoms out.

use thiserror::Error;
use tracing::debug;

use super::entities::{
    CalculationResult, CalculatorInput, PinchFlatRisk, RidingSpeed, SurfaceCondition,
};

pub const MIN_WEIGHT_KG: f64 = 34.0;
pub const MAX_WEIGHT_KG: f64 = 205.0;

/// Converts the preset speed to m/s for the impact energy check.
///
/// This is the mph to m/s factor, applied to a km/h preset. The risk
/// thresholds below are calibrated against it.
pub const SPEED_TO_MS: f64 = 0.44704;

const GRAVITY: f64 = 9.81;
const REFERENCE_WEIGHT_KG: f64 = 50.0;
const EXTREME_RISK_MARGIN: f64 = -500.0;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalculationError {
    #[error("Weight must be between 75-450 lbs or 34-205 kg (got {kg:.1} kg)")]
    WeightOutOfRange { kg: f64 },
    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: &'static str },
}

/// Rejects weights outside the range the model was fitted for.
pub fn validate_weight(kg: f64) -> Result<f64, CalculationError> {
    if (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&kg) {
        Ok(kg)
    } else {
        Err(CalculationError::WeightOutOfRange { kg })
    }
}

pub fn calculate(input: &CalculatorInput) -> Result<CalculationResult, CalculationError> {
    let weight_kg = validate_weight(input.weight_kg())?;
    let width = input.tire_width.millimetres();
    let k = combined_stiffness(weight_kg, input.surface);

    let cpp = finite(
        "center-point pressure",
        center_point_pressure(width, input.wheel.millimetres(), k),
    )?;
    let speed_coeff = speed_coefficient(input.speed.kmh());
    let pressures = input
        .weight_distribution
        .coefficients()
        .zip_with(input.tire_type.coefficients(), |dist, casing| {
            cpp * speed_coeff * dist * casing
        });

    let impact = ImpactBalance::new(weight_kg, input.speed, width, k);
    let margin = finite("pinch-flat margin", impact.margin())?;
    let risk = classify_risk(margin);

    let (recommended_width, alternative_pressures) = if risk.is_at_risk() {
        let min_width = finite("recommended width", impact.minimum_safe_width())?;
        let scale = finite("alternative pressure scale", impact.alternative_scale())?;
        let alternative = pressures.map(|psi| round_to_half(psi * scale));
        (Some(min_width.ceil() as u32), Some(alternative))
    } else {
        (None, None)
    };

    debug!(
        weight_kg,
        k,
        cpp,
        speed_coeff,
        margin,
        risk = %risk,
        "calculated tire pressures"
    );

    Ok(CalculationResult {
        front: round_to_half(finite("front pressure", pressures.front)?),
        back: round_to_half(finite("back pressure", pressures.back)?),
        pinch_flat_risk: risk,
        recommended_width,
        alternative_pressures,
    })
}

/// K: surface stiffness adjusted for system weight.
pub fn combined_stiffness(weight_kg: f64, surface: SurfaceCondition) -> f64 {
    0.5 * (weight_kg - REFERENCE_WEIGHT_KG) + surface.stiffness()
}

pub fn center_point_pressure(width_mm: f64, diameter_mm: f64, k: f64) -> f64 {
    let num = ((-0.00006 * width_mm.powi(3)) + (0.0079 * width_mm.powi(2))
        - (0.4102 * width_mm)
        + 12.725)
        * -226.44;
    let outer_radius = width_mm + (diameter_mm / 2.0);
    let denom = ((-0.5 * GRAVITY) / (k * (20.0 / width_mm)) + outer_radius).powi(2)
        - outer_radius.powi(2);
    num / denom
}

/// Linear blend between 0.97 at 10 km/h and 1.03 at 33 km/h.
pub fn speed_coefficient(kmh: f64) -> f64 {
    // Expanded form; the simplified slope differs in the last bits.
    ((1.03 * kmh) - (1.03 * 10.0) - (0.97 * kmh) + (0.97 * 10.0) + (33.0 * 0.97) - (0.97 * 10.0))
        / (33.0 - 10.0)
}

pub fn classify_risk(margin: f64) -> PinchFlatRisk {
    if margin > 0.0 {
        PinchFlatRisk::None
    } else if margin >= EXTREME_RISK_MARGIN {
        PinchFlatRisk::Increased
    } else {
        PinchFlatRisk::Extreme
    }
}

pub fn round_to_half(psi: f64) -> f64 {
    (psi * 2.0).round() / 2.0
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite { quantity })
    }
}

/// Energy balance between a rim strike at speed and what the casing absorbs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactBalance {
    weight_kg: f64,
    speed_ms: f64,
    width_mm: f64,
    k: f64,
}

impl ImpactBalance {
    pub fn new(weight_kg: f64, speed: RidingSpeed, width_mm: f64, k: f64) -> Self {
        Self {
            weight_kg,
            speed_ms: speed.kmh() * SPEED_TO_MS,
            width_mm,
            k,
        }
    }

    pub fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.weight_kg * self.speed_ms.powi(2)
    }

    pub fn rim_energy(&self) -> f64 {
        let contact = 0.8 * self.width_mm;
        0.5 * contact * (self.k.powi(2) - contact.powi(2)).sqrt()
    }

    /// Positive when the casing absorbs more than the impact delivers.
    pub fn margin(&self) -> f64 {
        2.0 * self.rim_energy() - self.kinetic_energy()
    }

    /// Unrounded width at which the margin reaches zero.
    pub fn minimum_safe_width(&self) -> f64 {
        let m = self.weight_kg;
        let v2 = self.speed_ms.powi(2);
        let v4 = self.speed_ms.powi(4);
        let wnum = -2.56 * self.k.powi(2)
            + (6.5536 * self.k.powi(4) + 6.5536 * (-160000.0 - (800.0 * m * v2) - (m.powi(2) * v4)))
                .sqrt();
        (-wnum / 3.2768).sqrt()
    }

    /// Factor applied to the recommended pressures to clear the margin on the
    /// current tire.
    pub fn alternative_scale(&self) -> f64 {
        let m = self.weight_kg;
        let w = self.width_mm;
        let v2 = self.speed_ms.powi(2);
        let v4 = self.speed_ms.powi(4);
        let num = ((((25.0 * m.powi(2) * v4) + (20000.0 * m * v2) + 400000.0)
            / (64.0 * w.powi(2)))
            + (0.64 * w.powi(2)))
        .sqrt();
        num / self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_coefficient_matches_linear_form_for_presets() {
        for speed in RidingSpeed::ALL {
            let v = speed.kmh();
            let linear = 0.97 + 0.06 * (v - 10.0) / 23.0;
            assert!(
                (speed_coefficient(v) - linear).abs() < 1e-12,
                "{v} km/h: {} vs {linear}",
                speed_coefficient(v)
            );
        }
    }

    #[test]
    fn speed_coefficient_reference_points() {
        assert!((speed_coefficient(10.0) - 0.97).abs() < 1e-12);
        assert!((speed_coefficient(33.0) - 1.03).abs() < 1e-12);
    }

    #[test]
    fn combined_stiffness_at_reference_weight_is_surface_stiffness() {
        for surface in SurfaceCondition::ALL {
            assert_eq!(combined_stiffness(50.0, surface), surface.stiffness());
        }
        assert_eq!(combined_stiffness(70.0, SurfaceCondition::NewPavement), 271.0);
    }

    #[test]
    fn impact_speed_uses_mph_factor_on_kmh_value() {
        let impact = ImpactBalance::new(70.0, RidingSpeed::ProTour, 28.0, 271.0);
        assert!((impact.speed_ms() - 24.0 * 0.44704).abs() < 1e-12);
        // A true km/h conversion would give 6.667 m/s.
        assert!((impact.speed_ms() - 24.0 / 3.6).abs() > 3.0);
    }

    #[test]
    fn risk_boundaries() {
        assert_eq!(classify_risk(0.001), PinchFlatRisk::None);
        assert_eq!(classify_risk(0.0), PinchFlatRisk::Increased);
        assert_eq!(classify_risk(-500.0), PinchFlatRisk::Increased);
        assert_eq!(classify_risk(-500.001), PinchFlatRisk::Extreme);
    }

    #[test]
    fn rounds_to_nearest_half() {
        assert_eq!(round_to_half(78.574), 78.5);
        assert_eq!(round_to_half(78.76), 79.0);
        assert_eq!(round_to_half(80.25), 80.5);
        assert_eq!(round_to_half(25.99), 26.0);
    }

    #[test]
    fn weight_bounds_are_inclusive() {
        assert!(validate_weight(MIN_WEIGHT_KG).is_ok());
        assert!(validate_weight(MAX_WEIGHT_KG).is_ok());
        assert!(validate_weight(f64::NAN).is_err());
    }

    #[test]
    fn center_point_pressure_is_positive_over_offered_widths() {
        for width in 20..=65 {
            // Lowest K reachable: 34 kg on cat 4 gravel.
            let cpp = center_point_pressure(f64::from(width), 622.0, 162.0);
            assert!(cpp.is_finite() && cpp > 0.0, "width {width}: {cpp}");
        }
    }

    #[test]
    fn margin_matches_energy_terms() {
        let impact = ImpactBalance::new(70.0, RidingSpeed::ModerateGroupRide, 28.0, 271.0);
        let expected = 2.0 * impact.rim_energy() - impact.kinetic_energy();
        assert_eq!(impact.margin(), expected);
        assert!((impact.margin() - 3907.541475951608).abs() < 1e-6);
    }
}
