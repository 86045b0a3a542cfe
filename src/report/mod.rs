//! Plain-text formatting for the CLI.
//!
//! The TUI renders the same content with widgets; these functions produce the
//! printable form so output changes stay in one place.

use crate::app::pipeline::RunOutput;
use crate::domain::{CalculationOutcome, SpecialistDescriptor};

/// One step of the "How Wastewater Treatment Works" primer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreatmentStage {
    pub name: &'static str,
    pub description: &'static str,
}

pub const GUIDE_TITLE: &str = "How Wastewater Treatment Works";

pub const GUIDE_INTRO: &str =
    "Wastewater treatment is a multi-stage process that removes contaminants from sewage and wastewater:";

pub const TREATMENT_STAGES: [TreatmentStage; 5] = [
    TreatmentStage {
        name: "Primary Treatment",
        description: "Physical removal of solids through screening and sedimentation",
    },
    TreatmentStage {
        name: "Secondary Treatment",
        description: "Biological processes to remove dissolved organic matter",
    },
    TreatmentStage {
        name: "Tertiary Treatment",
        description: "Advanced filtration and chemical processes for final polishing",
    },
    TreatmentStage {
        name: "pH Adjustment",
        description: "Using acids or bases to neutralize water to protect aquatic life",
    },
    TreatmentStage {
        name: "BOD/COD Reduction",
        description: "Removing oxygen-demanding substances to prevent water pollution",
    },
];

/// Heading above a successful or rejected calculation.
pub fn outcome_heading(outcome: &CalculationOutcome) -> &'static str {
    match outcome {
        CalculationOutcome::Success { .. } => "Treatment Results:",
        CalculationOutcome::Error { .. } => "Error:",
    }
}

/// Format a `ww calc` run.
pub fn format_run(run: &RunOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} - {} ===\n",
        run.descriptor.display_name, run.descriptor.treatment_label
    ));
    out.push_str(outcome_heading(&run.outcome));
    out.push('\n');
    out.push_str(run.outcome.message());
    out
}

/// Format the registry as an aligned table.
pub fn format_registry(descriptors: &[SpecialistDescriptor]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<12} {:<12} {:<40} {}\n",
            "id", "name", "treatment", "prompt"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<12} {:-<40} {:-<6}\n", "", "", "", "").trim_end());
    out.push('\n');

    for d in descriptors {
        out.push_str(
            format!(
                "{:<12} {:<12} {:<40} {}\n",
                d.id, d.display_name, d.treatment_label, d.input_label
            )
            .trim_end(),
        );
        out.push('\n');
        out.push_str(&format!("{:<12} image: {}\n", "", d.image_ref));
    }

    out
}

/// Format the treatment primer.
pub fn format_guide() -> String {
    let mut out = String::new();
    out.push_str(GUIDE_TITLE);
    out.push('\n');
    out.push_str(GUIDE_INTRO);
    out.push('\n');
    for stage in &TREATMENT_STAGES {
        out.push_str(&format!("- {}: {}\n", stage.name, stage.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Specialist;
    use crate::registry;

    #[test]
    fn run_block_has_heading_and_message() {
        let run = RunOutput {
            descriptor: Specialist::Charmander.descriptor(),
            outcome: CalculationOutcome::error("BOD cannot be negative."),
        };
        let text = format_run(&run);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "=== Charmander - BOD Reduction (Alum) ===");
        assert_eq!(lines[1], "Error:");
        assert_eq!(lines[2], "BOD cannot be negative.");
    }

    #[test]
    fn registry_table_lists_every_specialist() {
        let text = format_registry(registry::all());
        for d in registry::all() {
            assert!(text.contains(d.id));
            assert!(text.contains(d.image_ref));
        }
        // header + rule + two lines per specialist
        assert_eq!(text.lines().count(), 2 + 2 * 5);
        assert!(text.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn guide_lists_five_stages() {
        let text = format_guide();
        assert!(text.starts_with(GUIDE_TITLE));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 5);
        assert!(text.contains("- pH Adjustment: Using acids or bases"));
    }
}
