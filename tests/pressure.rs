//! End-to-end pressure calculations against known-good outputs.

use pretty_assertions::assert_eq;
use tire_pressure_calculator::domain::{
    calculate, AxlePair, CalculationError, CalculationResult, CalculatorInput, PinchFlatRisk,
    RidingSpeed, SurfaceCondition, TireType, TireWidth, WeightDistribution, WeightUnit,
    WheelDiameter,
};

fn road_input(weight: f64, weight_unit: WeightUnit) -> CalculatorInput {
    CalculatorInput {
        weight,
        weight_unit,
        surface: SurfaceCondition::NewPavement,
        tire_width: TireWidth(28),
        wheel: WheelDiameter::Iso622,
        tire_type: TireType::HighPerfTubelessLatex,
        speed: RidingSpeed::ModerateGroupRide,
        weight_distribution: WeightDistribution::Road,
    }
}

fn track_input(weight_kg: f64, speed: RidingSpeed, tire_type: TireType) -> CalculatorInput {
    CalculatorInput {
        weight: weight_kg,
        weight_unit: WeightUnit::Kg,
        surface: SurfaceCondition::TrackIndoorWood,
        tire_width: TireWidth(20),
        wheel: WheelDiameter::Iso622,
        tire_type,
        speed,
        weight_distribution: WeightDistribution::Road,
    }
}

fn safe(front: f64, back: f64) -> CalculationResult {
    CalculationResult {
        front,
        back,
        pinch_flat_risk: PinchFlatRisk::None,
        recommended_width: None,
        alternative_pressures: None,
    }
}

#[test]
fn test_typical_road_setup_in_pounds() {
    let result = calculate(&road_input(154.324, WeightUnit::Lbs)).unwrap();
    assert_eq!(result, safe(78.5, 80.5));
}

#[test]
fn test_same_rider_in_kilograms() {
    let result = calculate(&road_input(70.0, WeightUnit::Kg)).unwrap();
    assert_eq!(result, safe(78.5, 80.5));
}

#[test]
fn test_heavy_track_rider_has_increased_risk() {
    let input = track_input(150.0, RidingSpeed::AmateurRacing, TireType::HighPerfTubelessLatex);
    let result = calculate(&input).unwrap();
    assert_eq!(
        result,
        CalculationResult {
            front: 200.0,
            back: 205.0,
            pinch_flat_risk: PinchFlatRisk::Increased,
            recommended_width: Some(23),
            alternative_pressures: Some(AxlePair::new(220.5, 226.0)),
        }
    );
}

#[test]
fn test_maximum_weight_on_track_has_extreme_risk() {
    let input = track_input(205.0, RidingSpeed::FastGroupRide, TireType::HighPerfTubelessLatex);
    let result = calculate(&input).unwrap();
    assert_eq!(
        result,
        CalculationResult {
            front: 212.5,
            back: 217.5,
            pinch_flat_risk: PinchFlatRisk::Extreme,
            recommended_width: Some(24),
            alternative_pressures: Some(AxlePair::new(246.0, 252.0)),
        }
    );
}

#[test]
fn test_casing_quality_scales_pressures_but_not_risk() {
    let expected = [
        (TireType::HighPerfTubelessLatex, (212.5, 217.5), (246.0, 252.0)),
        (TireType::MidRangeTubelessLatex, (206.0, 211.0), (238.5, 244.5)),
        (TireType::MidRangeButyl, (199.5, 204.5), (231.0, 237.0)),
        (TireType::PunctureResistantTubelessLatex, (193.0, 198.0), (223.5, 229.5)),
    ];
    for (tire_type, (front, back), (alt_front, alt_back)) in expected {
        let result = calculate(&track_input(205.0, RidingSpeed::FastGroupRide, tire_type)).unwrap();
        assert_eq!((result.front, result.back), (front, back), "{tire_type:?}");
        assert_eq!(result.pinch_flat_risk, PinchFlatRisk::Extreme);
        assert_eq!(result.recommended_width, Some(24));
        assert_eq!(
            result.alternative_pressures,
            Some(AxlePair::new(alt_front, alt_back)),
            "{tire_type:?}"
        );
    }
}

#[test]
fn test_gravel_mountain_and_cobbles() {
    let gravel = CalculatorInput {
        weight: 80.0,
        weight_unit: WeightUnit::Kg,
        surface: SurfaceCondition::Cat3Gravel,
        tire_width: TireWidth(45),
        wheel: WheelDiameter::Iso622,
        tire_type: TireType::MidRangeTubelessLatex,
        speed: RidingSpeed::FastSingleTrack,
        weight_distribution: WeightDistribution::Gravel,
    };
    assert_eq!(calculate(&gravel).unwrap(), safe(26.0, 27.0));

    let mountain = CalculatorInput {
        weight: 205.0,
        weight_unit: WeightUnit::Kg,
        surface: SurfaceCondition::Cat4Gravel,
        tire_width: TireWidth(65),
        wheel: WheelDiameter::Iso559,
        tire_type: TireType::MidRangeButyl,
        speed: RidingSpeed::Recreational,
        weight_distribution: WeightDistribution::Mountain,
    };
    assert_eq!(calculate(&mountain).unwrap(), safe(13.5, 14.5));

    let cobbles = CalculatorInput {
        weight: 75.0,
        weight_unit: WeightUnit::Kg,
        surface: SurfaceCondition::Cobblestone,
        tire_width: TireWidth(30),
        wheel: WheelDiameter::Iso584,
        tire_type: TireType::PunctureResistantTubelessLatex,
        speed: RidingSpeed::FastGroupRide,
        weight_distribution: WeightDistribution::Road,
    };
    assert_eq!(calculate(&cobbles).unwrap(), safe(53.5, 54.5));
}

#[test]
fn test_even_split_gives_equal_axles() {
    let input = CalculatorInput {
        weight: 34.0,
        weight_unit: WeightUnit::Kg,
        surface: SurfaceCondition::NewPavement,
        tire_width: TireWidth(25),
        wheel: WheelDiameter::Iso622,
        tire_type: TireType::HighPerfTubelessLatex,
        speed: RidingSpeed::ProTour,
        weight_distribution: WeightDistribution::TrTtTrack,
    };
    assert_eq!(calculate(&input).unwrap(), safe(90.5, 90.5));
}

#[test]
fn test_weight_bounds_are_inclusive() {
    assert!(calculate(&road_input(34.0, WeightUnit::Kg)).is_ok());
    assert!(calculate(&road_input(205.0, WeightUnit::Kg)).is_ok());
    assert_eq!(calculate(&road_input(75.0, WeightUnit::Lbs)).unwrap(), safe(73.5, 75.0));
    assert_eq!(calculate(&road_input(450.0, WeightUnit::Lbs)).unwrap(), safe(98.0, 100.5));

    for (weight, unit) in [
        (33.9, WeightUnit::Kg),
        (205.1, WeightUnit::Kg),
        (74.0, WeightUnit::Lbs),
        (452.0, WeightUnit::Lbs),
    ] {
        assert!(
            matches!(
                calculate(&road_input(weight, unit)),
                Err(CalculationError::WeightOutOfRange { .. })
            ),
            "{weight} {unit:?}"
        );
    }
}

#[test]
fn test_out_of_range_message_names_both_units() {
    let err = calculate(&road_input(20.0, WeightUnit::Kg)).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Weight must be between 75-450 lbs or 34-205 kg"));
}

#[test]
fn test_every_combination_rounds_to_half_psi() {
    for surface in SurfaceCondition::ALL {
        for wheel in WheelDiameter::ALL {
            for speed in RidingSpeed::ALL {
                for width in [20, 28, 40, 65] {
                    for weight in [34.0, 90.0, 205.0] {
                        let input = CalculatorInput {
                            weight,
                            weight_unit: WeightUnit::Kg,
                            surface,
                            tire_width: TireWidth(width),
                            wheel,
                            tire_type: TireType::MidRangeButyl,
                            speed,
                            weight_distribution: WeightDistribution::Gravel,
                        };
                        let result = calculate(&input).unwrap();
                        for psi in [result.front, result.back] {
                            assert!(psi > 0.0, "{input:?}");
                            assert_eq!((psi * 2.0).fract(), 0.0, "{input:?}");
                        }
                        assert_eq!(
                            result.pinch_flat_risk.is_at_risk(),
                            result.recommended_width.is_some(),
                            "{input:?}"
                        );
                        assert_eq!(
                            result.pinch_flat_risk.is_at_risk(),
                            result.alternative_pressures.is_some(),
                            "{input:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_rear_never_below_front() {
    for distribution in WeightDistribution::ALL {
        let input = CalculatorInput {
            weight_distribution: distribution,
            ..road_input(80.0, WeightUnit::Kg)
        };
        let result = calculate(&input).unwrap();
        assert!(result.back >= result.front, "{distribution:?}");
    }
}

#[test]
fn test_distribution_shifts_load_to_rear_in_listed_order() {
    let results: Vec<(f64, f64)> = WeightDistribution::ALL
        .iter()
        .map(|distribution| {
            let input = CalculatorInput {
                weight_distribution: *distribution,
                ..road_input(80.0, WeightUnit::Kg)
            };
            let result = calculate(&input).unwrap();
            (result.front, result.back)
        })
        .collect();
    assert!(
        results.windows(2).all(|pair| pair[0].0 >= pair[1].0),
        "front: {results:?}"
    );
    assert!(
        results.windows(2).all(|pair| pair[0].1 <= pair[1].1),
        "back: {results:?}"
    );

    let fronts: Vec<f64> = WeightDistribution::ALL
        .iter()
        .map(|distribution| distribution.coefficients().front)
        .collect();
    assert_eq!(fronts, vec![1.0, 0.985, 0.975, 0.97]);
}

#[test]
fn test_zero_width_is_a_non_finite_center_point_pressure() {
    let input = CalculatorInput {
        tire_width: TireWidth(0),
        ..road_input(70.0, WeightUnit::Kg)
    };
    assert_eq!(
        calculate(&input),
        Err(CalculationError::NonFinite {
            quantity: "center-point pressure"
        })
    );
}

#[test]
fn test_width_beyond_stiffness_is_a_non_finite_margin() {
    // 0.8 * 400 mm exceeds K = 271, so the rim energy takes a negative root.
    let input = CalculatorInput {
        tire_width: TireWidth(400),
        ..road_input(70.0, WeightUnit::Kg)
    };
    assert_eq!(
        calculate(&input),
        Err(CalculationError::NonFinite {
            quantity: "pinch-flat margin"
        })
    );
}

#[test]
fn test_better_casing_never_lowers_pressure() {
    let pressures: Vec<f64> = TireType::ALL
        .iter()
        .map(|tire_type| {
            let input = CalculatorInput {
                tire_type: *tire_type,
                ..road_input(80.0, WeightUnit::Kg)
            };
            calculate(&input).unwrap().front
        })
        .collect();
    assert!(pressures.windows(2).all(|pair| pair[0] >= pair[1]), "{pressures:?}");
}

#[test]
fn test_calculation_is_deterministic() {
    let input = track_input(150.0, RidingSpeed::AmateurRacing, TireType::MidRangeButyl);
    assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
}
