use serde::Serialize;

use super::error::SequenceError;
use super::state::DifficultyTier;
use super::state::PlannerState;
use super::state::Step;
use super::state::WizardProgress;
use super::trails::TrailSuggestion;
use super::trails::SAMPLE_TRAILS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSpec {
    pub step: Step,
    pub number: u8,
    pub title: &'static str,
}

pub static PLANNER_STEPS: [StepSpec; 4] = [
    StepSpec {
        step: Step::Basics,
        number: 1,
        title: "Dates & Difficulty",
    },
    StepSpec {
        step: Step::StartPoint,
        number: 2,
        title: "Starting Point",
    },
    StepSpec {
        step: Step::Team,
        number: 3,
        title: "Team Members",
    },
    StepSpec {
        step: Step::Search,
        number: 4,
        title: "Find Trails",
    },
];

pub fn step_spec(step: Step) -> &'static StepSpec {
    match step {
        Step::Basics => &PLANNER_STEPS[0],
        Step::StartPoint => &PLANNER_STEPS[1],
        Step::Team => &PLANNER_STEPS[2],
        Step::Search => &PLANNER_STEPS[3],
    }
}

/// Sequential trip-planning wizard. A step unlocks once its predecessor is
/// completed; completion is never revoked.
#[derive(Debug, Clone)]
pub struct Wizard {
    progress: WizardProgress,
    planner: PlannerState,
}

impl Wizard {
    pub fn new(owner_name: &str) -> Self {
        Self {
            progress: WizardProgress::default(),
            planner: PlannerState::new(owner_name),
        }
    }

    pub fn progress(&self) -> &WizardProgress {
        &self.progress
    }

    pub fn planner_state(&self) -> &PlannerState {
        &self.planner
    }

    pub fn open_step(&self) -> Step {
        self.progress.open
    }

    pub fn is_step_completed(&self, step: Step) -> bool {
        self.progress.completed.contains(&step)
    }

    pub fn is_step_enabled(&self, step: Step) -> bool {
        match step.prev() {
            None => true,
            Some(prev) => self.is_step_completed(prev),
        }
    }

    pub fn is_finished(&self) -> bool {
        Step::ALL.iter().all(|step| self.is_step_completed(*step))
    }

    pub fn ensure_enabled(&self, step: Step) -> Result<(), SequenceError> {
        match step.prev() {
            Some(requires) if !self.is_step_completed(requires) => {
                Err(SequenceError { step, requires })
            }
            _ => Ok(()),
        }
    }

    /// Marks `step` done and opens its successor. Repeating the call is
    /// harmless.
    pub fn complete_step(&mut self, step: Step) -> Result<(), SequenceError> {
        self.ensure_enabled(step)?;
        self.progress.completed.insert(step);
        if let Some(next) = step.next() {
            self.progress.open = next;
        }
        Ok(())
    }

    /// Viewing is always allowed, even for locked steps.
    pub fn set_open_step(&mut self, step: Step) {
        self.progress.open = step;
    }

    /// Accordion header click: collapsing the open step falls back to basics.
    pub fn toggle_step(&mut self, step: Step) {
        self.progress.open = if self.progress.open == step {
            Step::Basics
        } else {
            step
        };
    }

    pub fn set_dates(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<(), SequenceError> {
        self.ensure_enabled(Step::Basics)?;
        self.planner.date_range.start = start.into();
        self.planner.date_range.end = end.into();
        Ok(())
    }

    pub fn set_difficulty(&mut self, tier: DifficultyTier) -> Result<(), SequenceError> {
        self.ensure_enabled(Step::Basics)?;
        self.planner.difficulty = Some(tier);
        Ok(())
    }

    pub fn set_start_point(&mut self, label: impl Into<String>) -> Result<(), SequenceError> {
        self.ensure_enabled(Step::StartPoint)?;
        self.planner.start_point = label.into();
        Ok(())
    }

    /// Roster edits made through the planner screen belong to the team step.
    pub fn add_member(&mut self, raw_name: &str) -> Result<Option<String>, SequenceError> {
        self.ensure_enabled(Step::Team)?;
        Ok(self.planner.team.add_member(raw_name))
    }

    pub fn remove_member(&mut self, id: &str) -> Result<bool, SequenceError> {
        self.ensure_enabled(Step::Team)?;
        Ok(self.planner.team.remove_member(id))
    }

    pub fn trail_suggestions(&self) -> &'static [TrailSuggestion] {
        if self.is_step_completed(Step::Search) {
            SAMPLE_TRAILS
        } else {
            &[]
        }
    }
}
