use thiserror::Error;

use super::state::Step;

/// Raised when a planner step is completed or edited before it is unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step '{}' is locked until '{}' is completed", step.label(), requires.label())]
pub struct SequenceError {
    pub step: Step,
    pub requires: Step,
}
