mod report_storage;

use crate::session::SessionReport;

pub use report_storage::ReportStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, learner: &str) -> Option<SessionReport>;
    fn save(&self, report: SessionReport);
}
