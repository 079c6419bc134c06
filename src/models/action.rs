use serde::Deserialize;

use crate::types::LearnerId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Select,
    Transfer,
    Reverse,
    Add,
    Remove,
    Reset,
    Validate,
    Next,
    Restart
}

/// A single recorded learner action, as read from an actions CSV file.
///
/// `target` names a balance row for `select`, a journal line for `reverse` and `remove`,
/// and a centralizer account for `add`. `amount` is the raw text typed for `add`.
#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    pub learner: LearnerId,
    #[serde(rename = "action")]
    pub action_type: ActionType,
    pub target: Option<String>,
    pub amount: Option<String>
}
