//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod submission_form;
pub mod telemetry;
pub mod waitlist_client;
