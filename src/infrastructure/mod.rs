pub mod telemetry;
pub mod time;
