use crate::session::SessionReport;
use crate::storage::Storage;
use crate::types::LearnerId;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory destination for finished sessions, keyed by learner.
///
/// Lives for one process run only; nothing is persisted.
pub struct ReportStorage {
    reports: Arc<DashMap<LearnerId, SessionReport>>
}

impl ReportStorage {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(DashMap::new())
        }
    }

    /// All stored reports, ordered by learner.
    pub fn reports(&self) -> Vec<SessionReport> {
        let mut reports: Vec<SessionReport> = self.reports.iter().map(|item| item.value().clone()).collect();
        reports.sort_by(|left, right| left.learner.cmp(&right.learner));
        reports
    }
}

impl Default for ReportStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for ReportStorage {
    fn load(&self, learner: &str) -> Option<SessionReport> {
        self.reports.get(learner).map(|item| item.value().clone())
    }

    fn save(&self, report: SessionReport) {
        self.reports.insert(report.learner.clone(), report);
    }
}
