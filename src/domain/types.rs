//! Specialist, descriptor, request, and outcome types.

use std::fmt;

/// One of the five treatment specialists.
///
/// The set is closed: every dispatch over a specialist is an exhaustive `match`,
/// so adding a profile is a compile error everywhere it needs handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialist {
    /// pH reduction with sulfuric acid.
    Squirtle,
    /// pH increase with sodium hydroxide.
    Bulbasaur,
    /// BOD reduction with alum.
    Charmander,
    /// COD reduction with potassium permanganate.
    Pikachu,
    /// Volume distribution across treatment stages.
    Vaporeon,
}

impl Specialist {
    /// All specialists in display order.
    pub const ALL: [Specialist; 5] = [
        Specialist::Squirtle,
        Specialist::Bulbasaur,
        Specialist::Charmander,
        Specialist::Pikachu,
        Specialist::Vaporeon,
    ];

    /// Stable lowercase identifier (registry key).
    pub fn id(self) -> &'static str {
        match self {
            Specialist::Squirtle => "squirtle",
            Specialist::Bulbasaur => "bulbasaur",
            Specialist::Charmander => "charmander",
            Specialist::Pikachu => "pikachu",
            Specialist::Vaporeon => "vaporeon",
        }
    }

    /// Parse an exact registry key.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            Specialist::Squirtle => 0,
            Specialist::Bulbasaur => 1,
            Specialist::Charmander => 2,
            Specialist::Pikachu => 3,
            Specialist::Vaporeon => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static metadata shown next to a specialist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistDescriptor {
    pub specialist: Specialist,
    pub id: &'static str,
    pub display_name: &'static str,
    pub treatment_label: &'static str,
    /// Decorative image URL; only ever displayed as text.
    pub image_ref: &'static str,
    /// Prompt shown when asking for the measurement.
    pub input_label: &'static str,
}

/// A single user submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    pub specialist_id: String,
    pub raw_input: String,
}

impl CalculationRequest {
    pub fn new(specialist_id: impl Into<String>, raw_input: impl Into<String>) -> Self {
        Self {
            specialist_id: specialist_id.into(),
            raw_input: raw_input.into(),
        }
    }
}

/// Terminal, displayable result of one calculation.
///
/// Both variants are ordinary values: a rejected input is not a Rust error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationOutcome {
    Error { message: String },
    Success { message: String },
}

impl CalculationOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        CalculationOutcome::Error {
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        CalculationOutcome::Success {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CalculationOutcome::Error { message } | CalculationOutcome::Success { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CalculationOutcome::Error { .. })
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationOutcome::Error { .. } => "error",
            CalculationOutcome::Success { .. } => "success",
        }
    }
}
