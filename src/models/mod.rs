//! Request and Response models for the cache server API
//!
//! This module defines the DTOs used for decoding query parameters and
//! serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{KeyParams, PutParams};
pub use responses::{DeleteResponse, GetResponse, HealthResponse, PutResponse, StatsResponse};
