//! src/lib.rs
pub mod configuration;
pub mod error;
pub mod fetcher;
pub mod organizer;
pub mod pipeline;
pub mod report;
pub mod startup;
pub mod telemetry;
pub mod tokenizer;
