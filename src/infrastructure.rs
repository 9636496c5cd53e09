pub mod catalog;
pub mod telemetry;
