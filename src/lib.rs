//! gesture-processor - serverless intake for hand-landmark events
//!
//! Receives the hand landmarks captured by a client, acknowledges them with a
//! fixed response, and is the place the managed inference call will live once
//! it is enabled. Runs under the AWS Lambda runtime or as a local HTTP server.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod telemetry;
pub mod types;

pub use error::{Error, Result};
