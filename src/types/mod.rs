mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::{format_currency, parse_amount, within, BALANCE_TOLERANCE, CENTRALIZER_TOLERANCE};

pub type ScenarioId = u16;
pub type LineId = u32;
pub type LearnerId = String;
