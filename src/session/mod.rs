mod errors;
mod learner_session;
mod result;

pub use errors::SessionError;
pub use result::{ScenarioResult, SessionReport};
pub use learner_session::{Progress, Session};
