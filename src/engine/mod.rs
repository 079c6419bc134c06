mod workshop_engine;

pub use workshop_engine::WorkshopEngine;
