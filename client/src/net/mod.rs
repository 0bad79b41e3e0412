//! Networking modules for the `/auth` HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the requests, `types` defines the wire schema, and `error`
//! is the single failure type both transports report.

pub mod api;
pub mod error;
pub mod types;
