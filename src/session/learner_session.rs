use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::journal::{JournalError, JournalState, TransferOutcome};
use crate::models::{Action, ActionType, Centralizer, Feedback, JournalTotals, Scenario};
use crate::session::{ScenarioResult, SessionError, SessionReport};
use crate::types::{parse_amount, LearnerId, LineId, ScenarioId};
use crate::validation::{validate, ValidationVerdict};

const SUCCESS_MESSAGE: &str = "Well done! The centralization is perfect.";
const FAILURE_MESSAGE: &str = "Careful, there are errors:";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Progress {
    /// Moved on to the scenario with this id.
    Next(ScenarioId),
    /// The last scenario was recorded, the report is final.
    Completed
}

/// Everything one learner does between logging in and restarting.
///
/// The session owns the journal of the active scenario and the results of the
/// scenarios already completed. It is the only mutator of that state.
#[derive(Debug, Clone)]
pub struct Session {
    learner: LearnerId,
    catalog: Arc<Catalog>,
    scenario_index: usize,
    selection: BTreeSet<String>,
    journal: JournalState,
    feedback: Option<Feedback>,
    results: Vec<ScenarioResult>,
    completed: bool
}

impl Session {
    pub fn new(learner: LearnerId, catalog: Arc<Catalog>) -> Self {
        Self {
            learner,
            catalog,
            scenario_index: 0,
            selection: BTreeSet::new(),
            journal: JournalState::new(),
            feedback: None,
            results: Vec::new(),
            completed: false
        }
    }

    pub fn learner(&self) -> &str {
        &self.learner
    }

    pub fn scenario(&self) -> &Scenario {
        &self.catalog.scenarios()[self.scenario_index]
    }

    pub fn journal(&self) -> &JournalState {
        &self.journal
    }

    pub fn totals(&self) -> JournalTotals {
        self.journal.totals()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn into_report(self) -> SessionReport {
        SessionReport {
            learner: self.learner,
            results: self.results
        }
    }

    /// Replays a recorded action.
    ///
    /// # Errors
    /// Returns `SessionError` when the action is refused. A refused action leaves
    /// the session untouched.
    pub fn apply(&mut self, action: &Action) -> Result<(), SessionError> {
        let target = || {
            action.target.as_deref()
                .ok_or(SessionError::MissingTarget { action_type: action.action_type })
        };

        match action.action_type {
            ActionType::Select => self.toggle_selection(target()?).map(|_| ()),
            ActionType::Transfer => self.transfer_selected().map(|_| ()),
            ActionType::Reverse => self.reverse(target()?),
            ActionType::Add => self.add_centralizer(target()?, action.amount.as_deref().unwrap_or_default()).map(|_| ()),
            ActionType::Remove => self.remove(target()?),
            ActionType::Reset => self.reset(),
            ActionType::Validate => self.validate().map(|_| ()),
            ActionType::Next => self.advance().map(|_| ()),
            ActionType::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Adds a balance row to the selection, or removes it if already selected.
    /// Returns whether the row is selected afterwards.
    pub fn toggle_selection(&mut self, code: &str) -> Result<bool, SessionError> {
        self.check_mutable()?;

        if self.scenario().row(code).is_none() {
            return Err(SessionError::UnknownRow { code: code.to_string() })
        }

        if self.selection.remove(code) {
            return Ok(false)
        }

        self.selection.insert(code.to_string());

        Ok(true)
    }

    /// Transfers the selected rows, in balance order, to the journal.
    pub fn transfer_selected(&mut self) -> Result<TransferOutcome, SessionError> {
        self.check_active()?;

        let scenario = &self.catalog.scenarios()[self.scenario_index];
        let selected = scenario.rows.iter().filter(|row| self.selection.contains(&row.code));
        let outcome = self.journal.transfer(selected)?;

        self.feedback = outcome.notice().map(Feedback::neutral);
        debug!("Learner [{}] transfer: {outcome:?}", self.learner);

        Ok(outcome)
    }

    pub fn reverse(&mut self, code: &str) -> Result<(), SessionError> {
        self.check_active()?;

        let line_id = self.line_id(code)?;
        self.journal.reverse(line_id)?;
        self.feedback = None;

        Ok(())
    }

    /// Adds a centralizing line from the account code and the amount text typed by the learner.
    pub fn add_centralizer(&mut self, code: &str, amount: &str) -> Result<LineId, SessionError> {
        self.check_active()?;

        let account = Centralizer::from_code(code)
            .ok_or_else(|| SessionError::UnknownCentralizer { code: code.to_string() })?;
        let amount = parse_amount(amount)?;
        let line_id = self.journal.add_centralizer(account, amount)?;

        self.feedback = None;

        Ok(line_id)
    }

    pub fn remove(&mut self, code: &str) -> Result<(), SessionError> {
        self.check_active()?;

        let line_id = self.line_id(code)?;
        self.journal.remove(line_id)?;
        self.feedback = None;

        Ok(())
    }

    /// Clears the journal and the selection. Refused once the scenario is validated.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.check_active()?;

        self.journal.reset()?;
        self.selection.clear();
        self.feedback = None;

        Ok(())
    }

    /// Grades the current entry. A passing verdict locks the journal.
    pub fn validate(&mut self) -> Result<ValidationVerdict, SessionError> {
        self.check_active()?;

        let verdict = validate(&self.scenario().rows, self.journal.lines());

        if verdict.passed {
            self.journal.lock();
            self.feedback = Some(Feedback::success(SUCCESS_MESSAGE));
            info!("Learner [{}] passed scenario [{}]", self.learner, self.scenario().id);
        } else {
            self.feedback = Some(Feedback::error(FAILURE_MESSAGE, verdict.messages()));
            debug!("Learner [{}] failed scenario [{}] with {} violations", self.learner, self.scenario().id, verdict.violations.len());
        }

        Ok(verdict)
    }

    /// Records the validated scenario and moves to the next one.
    ///
    /// # Errors
    /// Returns `SessionError::NotValidated` until the current entry has passed.
    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        self.check_active()?;

        if !self.journal.is_locked() {
            return Err(SessionError::NotValidated { scenario_id: self.scenario().id })
        }

        let result = ScenarioResult::capture(self.scenario(), &self.journal);
        self.results.push(result);

        if self.scenario_index + 1 >= self.catalog.len() {
            self.completed = true;
            info!("Learner [{}] completed all {} scenarios", self.learner, self.results.len());
            return Ok(Progress::Completed)
        }

        self.scenario_index += 1;
        self.start_scenario();

        Ok(Progress::Next(self.scenario().id))
    }

    /// Discards every result and starts over from the first scenario.
    pub fn restart(&mut self) {
        self.results.clear();
        self.scenario_index = 0;
        self.completed = false;
        self.start_scenario();
    }

    fn start_scenario(&mut self) {
        self.journal = JournalState::new();
        self.selection.clear();
        self.feedback = None;
    }

    fn line_id(&self, code: &str) -> Result<LineId, SessionError> {
        self.journal.find_line(code)
            .map(|line| line.line_id)
            .ok_or_else(|| SessionError::UnknownLine { code: code.to_string() })
    }

    fn check_active(&self) -> Result<(), SessionError> {
        if self.completed {
            return Err(SessionError::Completed)
        }

        Ok(())
    }

    fn check_mutable(&self) -> Result<(), SessionError> {
        self.check_active()?;

        if self.journal.is_locked() {
            return Err(SessionError::from(JournalError::Locked))
        }

        Ok(())
    }
}
