//! Core types for the pingpong service.
//!
//! Holds the response payload model shared by the API server and its
//! integration tests. No I/O and no async here.

pub mod payload;

pub use payload::ResponsePayload;
