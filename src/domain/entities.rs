use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A form value that does not name any variant of the option it was meant for.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {field} '{value}'")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

impl UnknownOption {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

fn parse_option<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    key: fn(&T) -> &'static str,
) -> Result<T, UnknownOption> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|option| key(option) == trimmed)
        .ok_or_else(|| UnknownOption::new(field, trimmed))
}

/// Front and rear values of anything that is computed per axle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxlePair {
    pub front: f64,
    pub back: f64,
}

impl AxlePair {
    pub const fn new(front: f64, back: f64) -> Self {
        Self { front, back }
    }

    pub const fn uniform(value: f64) -> Self {
        Self {
            front: value,
            back: value,
        }
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            front: f(self.front),
            back: f(self.back),
        }
    }

    pub fn zip_with(self, other: AxlePair, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            front: f(self.front, other.front),
            back: f(self.back, other.back),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Lbs, WeightUnit::Kg];

    pub const KG_PER_LB: f64 = 0.453592;

    pub fn key(&self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }

    pub fn to_kg(&self, weight: f64) -> f64 {
        match self {
            WeightUnit::Lbs => weight * Self::KG_PER_LB,
            WeightUnit::Kg => weight,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("weight unit", s, &Self::ALL, Self::key)
    }
}

/// Riding surface, ordered from smoothest to roughest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceCondition {
    TrackIndoorWood,
    TrackOutdoorWood,
    NewPavement,
    WornPavement,
    Cat1Gravel,
    PoorPavement,
    Cat2Gravel,
    Cobblestone,
    Cat3Gravel,
    Cat4Gravel,
}

impl SurfaceCondition {
    pub const ALL: [SurfaceCondition; 10] = [
        SurfaceCondition::TrackIndoorWood,
        SurfaceCondition::TrackOutdoorWood,
        SurfaceCondition::NewPavement,
        SurfaceCondition::WornPavement,
        SurfaceCondition::Cat1Gravel,
        SurfaceCondition::PoorPavement,
        SurfaceCondition::Cat2Gravel,
        SurfaceCondition::Cobblestone,
        SurfaceCondition::Cat3Gravel,
        SurfaceCondition::Cat4Gravel,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SurfaceCondition::TrackIndoorWood => "track-indoor-wood",
            SurfaceCondition::TrackOutdoorWood => "track-outdoor-wood",
            SurfaceCondition::NewPavement => "new-pavement",
            SurfaceCondition::WornPavement => "worn-pavement",
            SurfaceCondition::Cat1Gravel => "cat1-gravel",
            SurfaceCondition::PoorPavement => "poor-pavement",
            SurfaceCondition::Cat2Gravel => "cat2-gravel",
            SurfaceCondition::Cobblestone => "cobblestone",
            SurfaceCondition::Cat3Gravel => "cat3-gravel",
            SurfaceCondition::Cat4Gravel => "cat4-gravel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SurfaceCondition::TrackIndoorWood => "Track (Indoor Wood)",
            SurfaceCondition::TrackOutdoorWood => "Track (Outdoor Concrete)",
            SurfaceCondition::NewPavement => "New Pavement",
            SurfaceCondition::WornPavement => "Worn Pavement / Some Cracks",
            SurfaceCondition::Cat1Gravel => "Category 1 Gravel",
            SurfaceCondition::PoorPavement => "Poor Pavement / Chipseal",
            SurfaceCondition::Cat2Gravel => "Category 2 Gravel",
            SurfaceCondition::Cobblestone => "Cobblestone",
            SurfaceCondition::Cat3Gravel => "Category 3 Gravel",
            SurfaceCondition::Cat4Gravel => "Category 4 Gravel",
        }
    }

    /// Surface stiffness K1. Rougher surfaces get lower values.
    pub fn stiffness(&self) -> f64 {
        match self {
            SurfaceCondition::TrackIndoorWood => 354.0,
            SurfaceCondition::TrackOutdoorWood => 294.0,
            SurfaceCondition::NewPavement => 261.0,
            SurfaceCondition::WornPavement => 246.5,
            SurfaceCondition::Cat1Gravel => 235.5,
            SurfaceCondition::PoorPavement => 225.0,
            SurfaceCondition::Cat2Gravel => 212.5,
            SurfaceCondition::Cobblestone => 199.0,
            SurfaceCondition::Cat3Gravel => 187.0,
            SurfaceCondition::Cat4Gravel => 170.0,
        }
    }
}

impl FromStr for SurfaceCondition {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("surface condition", s, &Self::ALL, Self::key)
    }
}

/// Bead seat diameter of the rim (ISO size).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelDiameter {
    #[serde(rename = "622")]
    Iso622,
    #[serde(rename = "571")]
    Iso571,
    #[serde(rename = "584")]
    Iso584,
    #[serde(rename = "559")]
    Iso559,
}

impl WheelDiameter {
    pub const ALL: [WheelDiameter; 4] = [
        WheelDiameter::Iso622,
        WheelDiameter::Iso571,
        WheelDiameter::Iso584,
        WheelDiameter::Iso559,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WheelDiameter::Iso622 => "622",
            WheelDiameter::Iso571 => "571",
            WheelDiameter::Iso584 => "584",
            WheelDiameter::Iso559 => "559",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WheelDiameter::Iso622 => "700C/29\"",
            WheelDiameter::Iso571 => "650C",
            WheelDiameter::Iso584 => "650B/27.5\"",
            WheelDiameter::Iso559 => "26\"",
        }
    }

    pub fn millimetres(&self) -> f64 {
        match self {
            WheelDiameter::Iso622 => 622.0,
            WheelDiameter::Iso571 => 571.0,
            WheelDiameter::Iso584 => 584.0,
            WheelDiameter::Iso559 => 559.0,
        }
    }
}

impl FromStr for WheelDiameter {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("wheel diameter", s, &Self::ALL, Self::key)
    }
}

/// Tire casing and sealing setup, ordered from most to least supple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TireType {
    HighPerfTubelessLatex,
    MidRangeTubelessLatex,
    MidRangeButyl,
    PunctureResistantTubelessLatex,
}

impl TireType {
    pub const ALL: [TireType; 4] = [
        TireType::HighPerfTubelessLatex,
        TireType::MidRangeTubelessLatex,
        TireType::MidRangeButyl,
        TireType::PunctureResistantTubelessLatex,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TireType::HighPerfTubelessLatex => "high-perf-tubeless-latex",
            TireType::MidRangeTubelessLatex => "mid-range-tubeless-latex",
            TireType::MidRangeButyl => "mid-range-butyl",
            TireType::PunctureResistantTubelessLatex => "puncture-resistant-tubeless-latex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TireType::HighPerfTubelessLatex => "High performance tire tubeless/latex tube",
            TireType::MidRangeTubelessLatex => "Mid Range casing tubeless/latex tube",
            TireType::MidRangeButyl => "Mid-Range casing butyl tube",
            TireType::PunctureResistantTubelessLatex => {
                "Puncture resistant tire tubeless/latex tube"
            }
        }
    }

    pub fn coefficients(&self) -> AxlePair {
        match self {
            TireType::HighPerfTubelessLatex => AxlePair::uniform(1.0),
            TireType::MidRangeTubelessLatex => AxlePair::uniform(0.97),
            TireType::MidRangeButyl => AxlePair::uniform(0.94),
            TireType::PunctureResistantTubelessLatex => AxlePair::uniform(0.91),
        }
    }
}

impl FromStr for TireType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("tire type", s, &Self::ALL, Self::key)
    }
}

/// Typical riding speed, offered as named presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RidingSpeed {
    #[serde(rename = "14")]
    Recreational,
    #[serde(rename = "15.5")]
    FastSingleTrack,
    #[serde(rename = "17.5")]
    ModerateGroupRide,
    #[serde(rename = "19.5")]
    FastGroupRide,
    #[serde(rename = "21.5")]
    AmateurRacing,
    #[serde(rename = "24")]
    ProTour,
}

impl RidingSpeed {
    pub const ALL: [RidingSpeed; 6] = [
        RidingSpeed::Recreational,
        RidingSpeed::FastSingleTrack,
        RidingSpeed::ModerateGroupRide,
        RidingSpeed::FastGroupRide,
        RidingSpeed::AmateurRacing,
        RidingSpeed::ProTour,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RidingSpeed::Recreational => "14",
            RidingSpeed::FastSingleTrack => "15.5",
            RidingSpeed::ModerateGroupRide => "17.5",
            RidingSpeed::FastGroupRide => "19.5",
            RidingSpeed::AmateurRacing => "21.5",
            RidingSpeed::ProTour => "24",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RidingSpeed::Recreational => "Recreational",
            RidingSpeed::FastSingleTrack => "Fast Single Track",
            RidingSpeed::ModerateGroupRide => "Moderate Group Ride",
            RidingSpeed::FastGroupRide => "Fast Group Ride",
            RidingSpeed::AmateurRacing => "Cat. 1 / Cat. 2 / Cat. 3 Racing",
            RidingSpeed::ProTour => "Pro Tour",
        }
    }

    pub fn kmh(&self) -> f64 {
        match self {
            RidingSpeed::Recreational => 14.0,
            RidingSpeed::FastSingleTrack => 15.5,
            RidingSpeed::ModerateGroupRide => 17.5,
            RidingSpeed::FastGroupRide => 19.5,
            RidingSpeed::AmateurRacing => 21.5,
            RidingSpeed::ProTour => 24.0,
        }
    }
}

impl FromStr for RidingSpeed {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("speed", s, &Self::ALL, Self::key)
    }
}

/// Front/rear load split of the bike category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightDistribution {
    TrTtTrack,
    Road,
    Gravel,
    Mountain,
}

impl WeightDistribution {
    pub const ALL: [WeightDistribution; 4] = [
        WeightDistribution::TrTtTrack,
        WeightDistribution::Road,
        WeightDistribution::Gravel,
        WeightDistribution::Mountain,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WeightDistribution::TrTtTrack => "tr-tt-track",
            WeightDistribution::Road => "road",
            WeightDistribution::Gravel => "gravel",
            WeightDistribution::Mountain => "mountain",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightDistribution::TrTtTrack => "50/50 (Triathlon/TT/Track Bikes)",
            WeightDistribution::Road => "48/52 (Road Bikes)",
            WeightDistribution::Gravel => "47/53 (Gravel Bikes)",
            WeightDistribution::Mountain => "46.5/53.5 (Mountain Bikes)",
        }
    }

    pub fn coefficients(&self) -> AxlePair {
        match self {
            WeightDistribution::TrTtTrack => AxlePair::new(1.0, 1.0),
            WeightDistribution::Road => AxlePair::new(0.985, 1.01),
            WeightDistribution::Gravel => AxlePair::new(0.975, 1.02),
            WeightDistribution::Mountain => AxlePair::new(0.97, 1.03),
        }
    }
}

impl FromStr for WeightDistribution {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("weight distribution", s, &Self::ALL, Self::key)
    }
}

/// Measured (installed and inflated) tire width in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TireWidth(pub u32);

impl TireWidth {
    pub const MIN: TireWidth = TireWidth(20);
    pub const MAX: TireWidth = TireWidth(65);

    /// Every width the calculator form offers.
    pub fn options() -> impl Iterator<Item = TireWidth> {
        (Self::MIN.0..=Self::MAX.0).map(TireWidth)
    }

    pub fn is_offered(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }

    pub fn millimetres(&self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for TireWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Total system weight (rider plus bike and gear) in `weight_unit`.
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub surface: SurfaceCondition,
    pub tire_width: TireWidth,
    pub wheel: WheelDiameter,
    pub tire_type: TireType,
    pub speed: RidingSpeed,
    pub weight_distribution: WeightDistribution,
}

impl CalculatorInput {
    pub fn weight_kg(&self) -> f64 {
        self.weight_unit.to_kg(self.weight)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinchFlatRisk {
    #[default]
    None,
    Increased,
    Extreme,
}

impl PinchFlatRisk {
    pub fn label(&self) -> &'static str {
        match self {
            PinchFlatRisk::None => "none",
            PinchFlatRisk::Increased => "increased",
            PinchFlatRisk::Extreme => "extreme",
        }
    }

    pub fn is_at_risk(&self) -> bool {
        !matches!(self, PinchFlatRisk::None)
    }
}

impl fmt::Display for PinchFlatRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended pressures in PSI, each rounded to the nearest half PSI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub front: f64,
    pub back: f64,
    pub pinch_flat_risk: PinchFlatRisk,
    /// Narrowest tire that clears the pinch-flat margin, when at risk.
    pub recommended_width: Option<u32>,
    /// Pressures for the current tire that would clear the margin, when at risk.
    pub alternative_pressures: Option<AxlePair>,
}
