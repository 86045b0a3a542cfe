//! Interactive session state.
//!
//! The screen is driven by a single `SessionState` value instead of a handful
//! of independent flags, so combinations such as "result shown with nothing
//! selected" cannot be represented.
//!
//! ```text
//! Idle ──select──▶ Selected ──calculate──▶ AwaitingInput ──submit──▶ Result
//!  ▲ │                ▲                                                 │
//!  └─┘ calculate      └──────────────────── select ─────────────────────┘
//!     (raise notice)
//! ```
//!
//! Time is passed in explicitly (`Instant`) so the notice expiry is testable.

use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::{CalculationOutcome, Specialist};

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

pub const MISSING_SELECTION: &str = "Please select a specialist first!";

/// Transient "nothing selected" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub raised_at: Instant,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        MISSING_SELECTION
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle {
        notice: Option<Notice>,
    },
    Selected {
        specialist: Specialist,
    },
    AwaitingInput {
        specialist: Specialist,
        input: String,
    },
    Result {
        specialist: Specialist,
        input: String,
        outcome: CalculationOutcome,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle { .. } => "idle",
            SessionState::Selected { .. } => "selected",
            SessionState::AwaitingInput { .. } => "awaiting_input",
            SessionState::Result { .. } => "result",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    notice_ttl: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Session {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            state: SessionState::Idle { notice: None },
            notice_ttl,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn specialist(&self) -> Option<Specialist> {
        match &self.state {
            SessionState::Idle { .. } => None,
            SessionState::Selected { specialist }
            | SessionState::AwaitingInput { specialist, .. }
            | SessionState::Result { specialist, .. } => Some(*specialist),
        }
    }

    /// Current text in the measurement field, if the field is shown.
    pub fn input(&self) -> Option<&str> {
        match &self.state {
            SessionState::AwaitingInput { input, .. } | SessionState::Result { input, .. } => {
                Some(input)
            }
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&CalculationOutcome> {
        match &self.state {
            SessionState::Result { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.state {
            SessionState::Idle { notice } => notice.as_ref(),
            _ => None,
        }
    }

    /// Choose a specialist. Always lands in `Selected`, discarding input and result.
    pub fn select(&mut self, specialist: Specialist) {
        info!(from = self.state.name(), specialist = %specialist, "specialist selected");
        self.state = SessionState::Selected { specialist };
    }

    /// The "Calculate" action: open the input field, or raise the notice when
    /// nothing is selected. Returns `true` when the notice was raised.
    pub fn request_calculation(&mut self, now: Instant) -> bool {
        match &self.state {
            SessionState::Idle { .. } => {
                info!("calculation requested without a selection");
                self.state = SessionState::Idle {
                    notice: Some(Notice { raised_at: now }),
                };
                true
            }
            SessionState::Selected { specialist } => {
                let specialist = *specialist;
                info!(specialist = %specialist, "awaiting input");
                self.state = SessionState::AwaitingInput {
                    specialist,
                    input: String::new(),
                };
                false
            }
            SessionState::AwaitingInput { .. } | SessionState::Result { .. } => false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.input_mut() {
            input.pop();
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        if let Some(input) = self.input_mut() {
            *input = text.into();
        }
    }

    /// Calculate from the current input. No-op unless the input field is shown.
    pub fn submit(&mut self) -> Option<&CalculationOutcome> {
        let (specialist, input) = match &self.state {
            SessionState::AwaitingInput { specialist, input }
            | SessionState::Result {
                specialist, input, ..
            } => (*specialist, input.clone()),
            _ => return None,
        };

        let outcome = crate::app::pipeline::run_specialist(specialist, &input).outcome;
        info!(specialist = %specialist, outcome = outcome.kind(), "result shown");
        self.state = SessionState::Result {
            specialist,
            input,
            outcome,
        };
        self.outcome()
    }

    /// Drop an expired notice. Returns `true` when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let SessionState::Idle { notice } = &mut self.state {
            if notice.is_some_and(|n| n.is_expired(now, self.notice_ttl)) {
                *notice = None;
                return true;
            }
        }
        false
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match &mut self.state {
            SessionState::AwaitingInput { input, .. } | SessionState::Result { input, .. } => {
                Some(input)
            }
            _ => None,
        }
    }
}
