//! Calculation engine: parse, validate, apply the specialist's formula.
//!
//! The engine is a pure function of `(Specialist, raw input)`. It never fails:
//! bad input yields `CalculationOutcome::Error` with a displayable message.
//!
//! Order of checks:
//! 1) parse the raw text as a finite `f64` (same message for every specialist)
//! 2) the specialist's domain check
//! 3) the specialist's formula

use tracing::debug;

use crate::domain::{CalculationOutcome, Specialist};

pub mod rounding;
pub mod rules;

pub use rounding::{fmt_amount, fmt_value};
pub use rules::{Domain, Rule};

pub const INVALID_NUMBER: &str = "Please enter a valid number.";

/// Parse a measurement.
///
/// Accepts surrounding whitespace, an optional sign, a fraction, and an
/// exponent (`" 7.5 "`, `"-1"`, `"1e2"`). Empty text, anything non-numeric, and
/// non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let v: f64 = trimmed.parse().ok()?;
    v.is_finite().then_some(v)
}

/// Run one calculation.
pub fn calculate(specialist: Specialist, raw_input: &str) -> CalculationOutcome {
    let Some(v) = parse_measurement(raw_input) else {
        debug!(specialist = %specialist, raw_input, "rejected unparseable input");
        return CalculationOutcome::error(INVALID_NUMBER);
    };

    let rule = specialist.rule();
    if let Err(message) = rule.domain.check(v) {
        debug!(specialist = %specialist, value = v, "value outside domain");
        return CalculationOutcome::error(message);
    }

    CalculationOutcome::success((rule.formula)(v))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn success(specialist: Specialist, raw: &str) -> String {
        match calculate(specialist, raw) {
            CalculationOutcome::Success { message } => message,
            CalculationOutcome::Error { message } => panic!("expected success, got error: {message}"),
        }
    }

    fn error(specialist: Specialist, raw: &str) -> String {
        match calculate(specialist, raw) {
            CalculationOutcome::Error { message } => message,
            CalculationOutcome::Success { message } => panic!("expected error, got success: {message}"),
        }
    }

    #[test]
    fn parse_accepts_standard_decimal_forms() {
        assert_eq!(parse_measurement("7"), Some(7.0));
        assert_eq!(parse_measurement("  7.5\t"), Some(7.5));
        assert_eq!(parse_measurement("-1"), Some(-1.0));
        assert_eq!(parse_measurement("+3"), Some(3.0));
        assert_eq!(parse_measurement("1e2"), Some(100.0));
        assert_eq!(parse_measurement(".5"), Some(0.5));
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite() {
        for raw in ["", "   ", "abc", "7abc", "1,5", "inf", "-inf", "NaN", "infinity"] {
            assert_eq!(parse_measurement(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn invalid_number_for_every_specialist() {
        for s in Specialist::ALL {
            for raw in ["abc", "", "  "] {
                assert_eq!(error(s, raw), INVALID_NUMBER);
            }
        }
    }

    #[test]
    fn squirtle_neutral_and_alkaline() {
        assert_eq!(
            success(Specialist::Squirtle, "7"),
            "The water is already acidic or neutral. No sulfuric acid needed."
        );
        assert_eq!(
            success(Specialist::Squirtle, "10"),
            "To reduce pH from 10 to 7 (neutral), add approximately 0.15 g/L of sulfuric acid. \
             Squirtle's Water Gun helps mix the solution evenly!"
        );
    }

    #[test]
    fn bulbasaur_acidic_and_neutral() {
        assert_eq!(
            success(Specialist::Bulbasaur, "5"),
            "To increase pH from 5 to 7 (neutral), add approximately 0.08 g/L of sodium hydroxide. \
             Bulbasaur's Vine Whip ensures thorough mixing!"
        );
        assert_eq!(
            success(Specialist::Bulbasaur, "7"),
            "The water is already neutral or alkaline. No sodium hydroxide needed."
        );
    }

    #[test]
    fn charmander_alum_and_reduction() {
        assert_eq!(
            success(Specialist::Charmander, "100"),
            "To reduce BOD from 100 mg/L, add 10.00 g/L of alum. \
             This should reduce BOD by approximately 60.00 mg/L. \
             Charmander's heat accelerates the flocculation process!"
        );
    }

    #[test]
    fn pikachu_reagent_and_reduction() {
        let text = success(Specialist::Pikachu, "50");
        assert!(text.starts_with("To reduce COD from 50 mg/L, add 7.50 g/L of potassium permanganate."));
        assert!(text.contains("approximately 35.00 mg/L"));
    }

    #[test]
    fn vaporeon_distribution() {
        let text = success(Specialist::Vaporeon, "90");
        assert_eq!(
            text,
            "For optimal treatment of 90 m³ of water, distribute as follows:\n\
             - Primary treatment: 27.00 m³\n\
             - Secondary treatment: 36.00 m³\n\
             - Tertiary treatment: 27.00 m³\n\
             Vaporeon's Water Absorption ability helps regulate flow between reservoirs!"
        );
    }

    #[test]
    fn vaporeon_parts_sum_to_total() {
        for v in [0.0, 0.01, 1.0, 3.33, 90.0, 1234.567, 1e6] {
            let text = success(Specialist::Vaporeon, &v.to_string());
            let parts: Vec<f64> = text
                .lines()
                .filter_map(|line| line.strip_prefix("- "))
                .filter_map(|line| line.split(": ").nth(1))
                .filter_map(|amount| amount.trim_end_matches(" m³").parse().ok())
                .collect();
            assert_eq!(parts.len(), 3);
            let total: f64 = parts.iter().sum();
            assert_abs_diff_eq!(total, v, epsilon = 0.015 + v * 1e-12);
        }
    }

    #[test]
    fn range_violations() {
        for s in [Specialist::Squirtle, Specialist::Bulbasaur] {
            assert_eq!(error(s, "-1"), "pH must be between 0 and 14.");
            assert_eq!(error(s, "15"), "pH must be between 0 and 14.");
        }
        assert_eq!(error(Specialist::Charmander, "-1"), "BOD cannot be negative.");
        assert_eq!(error(Specialist::Pikachu, "-1"), "COD cannot be negative.");
        assert_eq!(error(Specialist::Vaporeon, "-1"), "Volume cannot be negative.");
    }

    #[test]
    fn ph_bounds_are_valid() {
        assert!(!calculate(Specialist::Squirtle, "14").is_error());
        assert!(!calculate(Specialist::Bulbasaur, "0").is_error());
        assert!(success(Specialist::Bulbasaur, "0").contains("0.28 g/L"));
        assert!(success(Specialist::Squirtle, "14").contains("0.35 g/L"));
    }

    #[test]
    fn huge_valid_inputs_stay_finite() {
        for s in [Specialist::Charmander, Specialist::Pikachu, Specialist::Vaporeon] {
            let text = success(s, "1e307");
            assert!(!text.contains("inf"), "{s}: {text}");
            assert!(text.contains("from 1e+307") || text.contains("of 1e+307"), "{s}: {text}");
        }
    }

    #[test]
    fn dosage_rounds_the_stored_product() {
        // 0.15 * 0.1 is stored just below 0.015.
        assert!(success(Specialist::Charmander, "0.15").contains("add 0.01 g/L of alum"));
        // (9.5 - 7) * 0.05 is stored as exactly 0.125, a half that rounds up.
        assert!(success(Specialist::Squirtle, "9.5").contains("approximately 0.13 g/L"));
    }

    #[test]
    fn negative_zero_is_treated_as_zero() {
        assert!(success(Specialist::Charmander, "-0").starts_with("To reduce BOD from 0 mg/L"));
    }

    #[test]
    fn calculation_is_idempotent() {
        for s in Specialist::ALL {
            for raw in ["0", "7.25", "-3", "x", "1e3"] {
                assert_eq!(calculate(s, raw), calculate(s, raw));
            }
        }
    }
}
