//! Per-specialist validation and formulas.
//!
//! Each specialist maps to a `Rule`: a domain check that runs first, and a
//! formula that only ever sees a value inside that domain.

use crate::domain::Specialist;
use crate::engine::rounding::{fmt_amount, fmt_value};

/// Neutral pH.
pub const NEUTRAL_PH: f64 = 7.0;
pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// g/L of sulfuric acid per pH unit above neutral.
pub const ACID_PER_PH: f64 = 0.05;
/// g/L of sodium hydroxide per pH unit below neutral.
pub const BASE_PER_PH: f64 = 0.04;
/// g/L of alum per mg/L of BOD.
pub const ALUM_PER_BOD: f64 = 0.1;
pub const BOD_REDUCTION: f64 = 0.6;
/// g/L of potassium permanganate per mg/L of COD.
pub const PERMANGANATE_PER_COD: f64 = 0.15;
pub const COD_REDUCTION: f64 = 0.7;
/// Primary / secondary / tertiary shares of the total volume.
pub const DISTRIBUTION: [f64; 3] = [0.3, 0.4, 0.3];

/// Range a measurement must fall in before a formula is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `0 <= v <= 14`.
    PhScale,
    /// `v >= 0`; `quantity` names the measurement in the rejection message.
    NonNegative { quantity: &'static str },
}

impl Domain {
    /// Returns the rejection message when `v` is out of range.
    pub fn check(self, v: f64) -> Result<(), String> {
        match self {
            Domain::PhScale => {
                if (PH_MIN..=PH_MAX).contains(&v) {
                    Ok(())
                } else {
                    Err("pH must be between 0 and 14.".to_string())
                }
            }
            Domain::NonNegative { quantity } => {
                if v >= 0.0 {
                    Ok(())
                } else {
                    Err(format!("{quantity} cannot be negative."))
                }
            }
        }
    }
}

/// Validation plus formula for one specialist.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub domain: Domain,
    pub formula: fn(f64) -> String,
}

impl Specialist {
    pub fn rule(self) -> Rule {
        match self {
            Specialist::Squirtle => Rule {
                domain: Domain::PhScale,
                formula: acid_dosage,
            },
            Specialist::Bulbasaur => Rule {
                domain: Domain::PhScale,
                formula: base_dosage,
            },
            Specialist::Charmander => Rule {
                domain: Domain::NonNegative { quantity: "BOD" },
                formula: alum_dosage,
            },
            Specialist::Pikachu => Rule {
                domain: Domain::NonNegative { quantity: "COD" },
                formula: permanganate_dosage,
            },
            Specialist::Vaporeon => Rule {
                domain: Domain::NonNegative { quantity: "Volume" },
                formula: volume_distribution,
            },
        }
    }
}

fn acid_dosage(v: f64) -> String {
    if v <= NEUTRAL_PH {
        return "The water is already acidic or neutral. No sulfuric acid needed.".to_string();
    }
    let acid = fmt_amount((v - NEUTRAL_PH) * ACID_PER_PH);
    format!(
        "To reduce pH from {} to 7 (neutral), add approximately {acid} g/L of sulfuric acid. \
         Squirtle's Water Gun helps mix the solution evenly!",
        fmt_value(v)
    )
}

fn base_dosage(v: f64) -> String {
    if v >= NEUTRAL_PH {
        return "The water is already neutral or alkaline. No sodium hydroxide needed.".to_string();
    }
    let base = fmt_amount((NEUTRAL_PH - v) * BASE_PER_PH);
    format!(
        "To increase pH from {} to 7 (neutral), add approximately {base} g/L of sodium hydroxide. \
         Bulbasaur's Vine Whip ensures thorough mixing!",
        fmt_value(v)
    )
}

fn alum_dosage(v: f64) -> String {
    let alum = fmt_amount(v * ALUM_PER_BOD);
    let reduction = fmt_amount(v * BOD_REDUCTION);
    format!(
        "To reduce BOD from {} mg/L, add {alum} g/L of alum. \
         This should reduce BOD by approximately {reduction} mg/L. \
         Charmander's heat accelerates the flocculation process!",
        fmt_value(v)
    )
}

fn permanganate_dosage(v: f64) -> String {
    let reagent = fmt_amount(v * PERMANGANATE_PER_COD);
    let reduction = fmt_amount(v * COD_REDUCTION);
    format!(
        "To reduce COD from {} mg/L, add {reagent} g/L of potassium permanganate. \
         This should reduce COD by approximately {reduction} mg/L. \
         Pikachu's electric charge enhances the oxidation reaction!",
        fmt_value(v)
    )
}

fn volume_distribution(v: f64) -> String {
    let [primary, secondary, tertiary] = DISTRIBUTION.map(|share| fmt_amount(v * share));
    format!(
        "For optimal treatment of {} m³ of water, distribute as follows:\n\
         - Primary treatment: {primary} m³\n\
         - Secondary treatment: {secondary} m³\n\
         - Tertiary treatment: {tertiary} m³\n\
         Vaporeon's Water Absorption ability helps regulate flow between reservoirs!",
        fmt_value(v)
    )
}
