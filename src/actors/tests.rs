use super::SessionActor;
use crate::catalog::Catalog;
use crate::models::{Action, ActionType};
use crate::storage::{ReportStorage, Storage};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

fn create_action(learner: &str, action_type: ActionType, target: Option<&str>, amount: Option<&str>) -> Action {
    Action {
        learner: learner.to_string(),
        action_type,
        target: target.map(str::to_string),
        amount: amount.map(str::to_string)
    }
}

fn solve_scenario_five(learner: &str) -> Vec<Action> {
    let mut actions: Vec<Action> = ["4110", "4111", "4510", "4511"].into_iter()
        .map(|code| create_action(learner, ActionType::Select, Some(code), None))
        .collect();

    actions.push(create_action(learner, ActionType::Transfer, None, None));

    for code in ["4110", "4111", "4510", "4511"] {
        actions.push(create_action(learner, ActionType::Reverse, Some(code), None));
    }

    actions.push(create_action(learner, ActionType::Add, Some("4519"), Some("1000")));
    actions.push(create_action(learner, ActionType::Validate, None, None));
    actions.push(create_action(learner, ActionType::Next, None, None));
    actions
}

#[tokio::test]
async fn test_actor_isolation_and_storage_persistence() -> Result<()> {
    let builtin = Catalog::builtin()?;
    let catalog = Arc::new(Catalog::new(vec![builtin.scenarios()[4].clone()])?);
    let storage = Arc::new(ReportStorage::new());
    let (guard_sender, mut guard_receiver) = mpsc::channel::<()>(1);

    let actor_1 = SessionActor::spawn("jane.doe".to_string(), catalog.clone(), storage.clone(), guard_sender.clone());
    let actor_2 = SessionActor::spawn("john.smith".to_string(), catalog.clone(), storage.clone(), guard_sender.clone());

    for action in solve_scenario_five("jane.doe") {
        actor_1.send(action)?;
    }
    actor_2.send(create_action("john.smith", ActionType::Select, Some("4110"), None))?;
    actor_2.send(create_action("john.smith", ActionType::Transfer, None, None))?;

    drop(actor_1);
    drop(actor_2);
    drop(guard_sender);
    let _ = guard_receiver.recv().await;

    let jane = storage.load("jane.doe").ok_or_else(|| anyhow!("jane.doe missing from storage"))?;
    let john = storage.load("john.smith").ok_or_else(|| anyhow!("john.smith missing from storage"))?;

    assert_eq!(jane.results.len(), 1);
    assert!(jane.results[0].passed);
    assert!(john.results.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_actor_maintains_resilience_to_refused_actions() -> Result<()> {
    let builtin = Catalog::builtin()?;
    let catalog = Arc::new(Catalog::new(vec![builtin.scenarios()[4].clone()])?);
    let storage = Arc::new(ReportStorage::new());
    let (guard_sender, mut guard_receiver) = mpsc::channel::<()>(1);

    let actor = SessionActor::spawn("jane.doe".to_string(), catalog, storage.clone(), guard_sender);

    // Refused: nothing validated yet, unknown row, garbage amount
    actor.send(create_action("jane.doe", ActionType::Next, None, None))?;
    actor.send(create_action("jane.doe", ActionType::Select, Some("9999"), None))?;
    actor.send(create_action("jane.doe", ActionType::Add, Some("4519"), Some("abc")))?;

    for action in solve_scenario_five("jane.doe") {
        actor.send(action)?;
    }

    drop(actor);
    let _ = guard_receiver.recv().await;

    let report = storage.load("jane.doe").ok_or_else(|| anyhow!("Report missing from storage"))?;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].lines.len(), 5);

    Ok(())
}
