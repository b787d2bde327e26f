pub mod configuration;
pub mod domain;
pub mod startup;
pub mod telemetry;
pub mod transport;
