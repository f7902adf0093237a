pub mod label;
pub mod markers;
pub mod telemetry;
