mod engine;
mod net_position;
mod violation;

pub use engine::{validate, ValidationVerdict};
pub use net_position::NetPosition;
pub use violation::Violation;
