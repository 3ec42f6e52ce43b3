//! Infrastructure layer - Adapters and wiring
//!
//! This layer contains:
//! - Tables: bundled SRD reference tables
//! - Catalog: in-memory monster catalog
//! - Random: RNG adapters for RandomPort
//! - Config: Application configuration
//! - Telemetry: tracing subscriber setup
//! - State: Shared application state

pub mod catalog;
pub mod config;
pub mod random;
pub mod state;
pub mod tables;
pub mod telemetry;
