use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::{Action, ActionType, FeedbackKind};
use crate::session::Session;
use crate::storage::Storage;
use crate::types::LearnerId;

pub struct SessionActor;

impl SessionActor {
    /// Spawns the task owning one learner's session and returns its input channel.
    ///
    /// Actions are applied one at a time in arrival order. When the channel closes the
    /// session report is saved and `guard_sender` is dropped.
    pub fn spawn<S: Storage>(learner: LearnerId, catalog: Arc<Catalog>, storage: Arc<S>, guard_sender: mpsc::Sender<()>) -> mpsc::UnboundedSender<Action> {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Action>();

        spawn(async move {
            let mut session = Session::new(learner, catalog);

            while let Some(action) = receiver.recv().await {
                match session.apply(&action) {
                    Ok(_) => {
                        debug!("Action [{:?}] for learner [{}] applied", action.action_type, action.learner);
                    },
                    Err(error) => {
                        //NOTE: Refused actions leave the session untouched, the learner just carries on
                        warn!("Action [{:?}] for learner [{}] ignored: {error}", action.action_type, action.learner);
                    }
                }

                if action.action_type == ActionType::Validate {
                    if let Some(feedback) = session.feedback().filter(|feedback| feedback.kind == FeedbackKind::Error) {
                        for detail in &feedback.details {
                            info!("Learner [{}] scenario [{}]: {detail}", session.learner(), session.scenario().id);
                        }
                    }
                }
            }

            storage.save(session.into_report());

            drop(guard_sender);
        });

        sender
    }
}
