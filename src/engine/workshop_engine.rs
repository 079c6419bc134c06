use crate::actors::SessionActor;
use crate::catalog::Catalog;
use crate::models::Action;
use crate::storage::ReportStorage;
use crate::types::LearnerId;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error};

/// Replays recorded learner actions against the scenario catalog.
///
/// Each learner gets its own session, driven by a dedicated actor. Sessions never
/// share state; the only common destination is the report storage.
pub struct WorkshopEngine {
    catalog: Arc<Catalog>,
    storage: Arc<ReportStorage>,
    backpressure: usize
}

impl WorkshopEngine {
    /// Creates a new engine instance with the provided catalog and storage.
    pub fn new(catalog: Arc<Catalog>, storage: Arc<ReportStorage>) -> Self {
        Self {
            catalog,
            storage,
            backpressure: 256
        }
    }

    /// Sets how many parsed actions may wait between the CSV reader and the dispatcher.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Orchestrates the end-to-end replay of an actions CSV file.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<Action>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_actions(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<Action>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Action>() {
                match result {
                    Ok(action) => {
                        if sender.blocking_send(action).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_actions(&self, mut receiver: mpsc::Receiver<Action>) -> anyhow::Result<()> {
        let (guard_sender, mut guard_receiver) = mpsc::channel::<()>(1);
        let mut actors = HashMap::<LearnerId, mpsc::UnboundedSender<Action>>::new();

        //NOTE: Partitioning by learner keeps every session single-writer and its actions in file order
        while let Some(action) = receiver.recv().await {
            let learner = action.learner.clone();
            let actor = actors.entry(learner.clone()).or_insert_with(|| {
                debug!("Starting session for learner [{learner}]");
                SessionActor::spawn(learner.clone(), self.catalog.clone(), self.storage.clone(), guard_sender.clone())
            });

            if actor.send(action).is_err() {
                error!("Session actor for learner [{learner}] could not accept action");
            }
        }

        //NOTE: Closing every input lets the actors drain their queues, recv resolves once all guards are dropped
        drop(actors);
        drop(guard_sender);
        let _ = guard_receiver.recv().await;

        Ok(())
    }
}
