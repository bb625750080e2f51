//! Explanatory text behind the "What is this?" links of the calculator.

use super::entities::{SurfaceCondition, TireType};

/// A titled block of paragraphs on an info page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideSection {
    pub heading: Option<&'static str>,
    pub paragraphs: &'static [&'static str],
}

pub fn surface_description(surface: SurfaceCondition) -> &'static str {
    match surface {
        SurfaceCondition::TrackIndoorWood => {
            "Smooth, consistent wooden surface typically found in indoor velodromes"
        }
        SurfaceCondition::TrackOutdoorWood => {
            "Smooth concrete surface commonly used in outdoor velodromes"
        }
        SurfaceCondition::NewPavement => "Fresh, smooth asphalt with minimal wear or imperfections",
        SurfaceCondition::WornPavement => {
            "Asphalt showing signs of wear with occasional cracks and minor imperfections"
        }
        SurfaceCondition::Cat1Gravel => {
            "Well-maintained gravel roads with fine, compact surface material"
        }
        SurfaceCondition::PoorPavement => "Rough asphalt surface or chipseal with noticeable texture",
        SurfaceCondition::Cat2Gravel => "Medium-grade gravel with occasional loose sections",
        SurfaceCondition::Cobblestone => "Traditional cobbled surface with regular gaps and variations",
        SurfaceCondition::Cat3Gravel => {
            "Rough gravel with larger stones and frequent loose sections"
        }
        SurfaceCondition::Cat4Gravel => {
            "Very rough terrain with large loose stones and challenging surfaces"
        }
    }
}

pub const TIRE_CASING_TITLE: &str = "Tire Casing and Tire Pressure";

pub const TIRE_CASING: GuideSection = GuideSection {
    heading: None,
    paragraphs: &[
        "Most of our previous data has been tested with World Tour riders who are using some of the \
         fastest tires available. Tires with extremely supple casing are significantly more efficient \
         at absorbing road vibrations so they are able to run higher pressures more efficiently. The \
         lower quality casing, the lower the breakpoint pressure will be. The optimal pressure can be \
         as much as 20% lower on a low quality casing vs the highest quality available.",
    ],
};

/// How much lower the breakpoint pressure sits for a casing, relative to the
/// best casing available, as a whole percentage.
pub fn casing_pressure_drop_pct(tire_type: TireType) -> u32 {
    ((1.0 - tire_type.coefficients().front) * 100.0).round() as u32
}

pub const MEASURED_WIDTH_TITLE: &str = "Measured Width";

pub const MEASURED_WIDTH: &[GuideSection] = &[
    GuideSection {
        heading: Some("What it is and why it matters:"),
        paragraphs: &[
            "Measured width does not equate to the number printed on the sidewall; rather, it refers \
             to the width of the tire when it is fully installed and inflated on the rim. Even dealing \
             with this stuff every day, it can be hard keeping it straight as we continue to call the \
             tires by their casing numbers. That said, we have seen 23mm GP4000SII on a 21.5mm inner \
             bead measure at 28.9mm wide, so would be 29mm in this calculator.",
            "Opposite of that, many of the gravel and mtn tires measure at or below the casing number \
             which seems to be a combination of assuming wide bead seat rims and/or measuring to tread \
             and not casing, for example WTB Riddler 29x2.25 (57mm) actually measure 51mm at the \
             casing (56-57mm at the tread) on the ENVE G23 rim... so the measured casing number is \
             critical.",
            "Measured width drives the volume of air in the tire as well as the size of your contact \
             patch with the ground. For this reason, it is critical to get an accurate width \
             measurement before you attempt to optimize your pressure. The penalty of getting these \
             things wrong is 3-5x more than you would save by dropping hundreds of dollars on ceramic \
             bearings or the like!",
        ],
    },
    GuideSection {
        heading: Some("How to measure it:"),
        paragraphs: &[
            "Calipers are the best/easiest way to measure your tire and to verify the rule of 105. \
             Having a set will help ensure that you aren't making some simple size and pressure \
             errors with your tire choice.",
        ],
    },
    GuideSection {
        heading: None,
        paragraphs: &[
            "For a DIY approach, you can also measure casing width by bending a paperclip to fit \
             around your tire. Once it is accurately bent, remove the paperclip and line it up on \
             metric ruler to gauge your approximate width in millimeters.",
        ],
    },
];

pub const SURFACE_CONDITION_TITLE: &str = "Surface Conditions";
