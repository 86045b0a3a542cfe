//! Shared "lookup + calculate" workflow used by both CLI and TUI front-ends.
//!
//! The CLI arrives with a string id and raw text (`run_request`); the TUI's
//! `Session::submit` already holds a `Specialist` (`run_specialist`). Both end
//! up in `run_specialist`, so the calculation log event is emitted once.

use tracing::{debug, warn};

use crate::domain::{CalculationOutcome, CalculationRequest, Specialist, SpecialistDescriptor};
use crate::error::AppError;
use crate::registry;

/// Outputs of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub descriptor: &'static SpecialistDescriptor,
    pub outcome: CalculationOutcome,
}

/// Resolve the specialist id and run the engine.
///
/// Only an unknown id is an `Err`; rejected input is an `Ok` carrying
/// `CalculationOutcome::Error`.
pub fn run_request(request: &CalculationRequest) -> Result<RunOutput, AppError> {
    let descriptor = registry::lookup(&request.specialist_id).map_err(|err| {
        warn!(id = %request.specialist_id, "unknown specialist");
        AppError::from(err)
    })?;

    Ok(run_specialist(descriptor.specialist, &request.raw_input))
}

/// Run the engine for an already-resolved specialist.
pub fn run_specialist(specialist: Specialist, raw_input: &str) -> RunOutput {
    let descriptor = specialist.descriptor();
    let outcome = crate::engine::calculate(specialist, raw_input);
    debug!(
        specialist = descriptor.id,
        outcome = outcome.kind(),
        "calculation finished"
    );

    RunOutput {
        descriptor,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_USAGE;

    #[test]
    fn known_id_runs_engine() {
        let run = run_request(&CalculationRequest::new("pikachu", "50")).unwrap();
        assert_eq!(run.descriptor.specialist, Specialist::Pikachu);
        assert!(run.outcome.message().contains("7.50 g/L"));
    }

    #[test]
    fn rejected_input_is_not_an_err() {
        let run = run_request(&CalculationRequest::new("squirtle", "15")).unwrap();
        assert_eq!(
            run.outcome,
            CalculationOutcome::error("pH must be between 0 and 14.")
        );
    }

    #[test]
    fn string_and_enum_entry_points_agree() {
        for s in Specialist::ALL {
            for raw in ["7", "9.5", "-1", "abc"] {
                let by_id = run_request(&CalculationRequest::new(s.id(), raw)).unwrap();
                assert_eq!(by_id, run_specialist(s, raw));
            }
        }
    }

    #[test]
    fn unknown_id_is_usage_error() {
        let err = run_request(&CalculationRequest::new("mewtwo", "1")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }
}
