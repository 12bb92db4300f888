pub mod config;
pub mod deliveries;
pub mod error;
pub mod telemetry;
