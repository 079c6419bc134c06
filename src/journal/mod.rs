mod errors;
mod journal_state;
#[cfg(test)]
mod tests;

pub use errors::JournalError;
pub use journal_state::{JournalState, TransferOutcome};
