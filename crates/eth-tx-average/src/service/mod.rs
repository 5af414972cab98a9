//! Service layer: orchestrates a collection cycle over the ports.

pub mod collector;

pub use collector::BlockWindowAverageCollector;
