//! Interfaces Layer
//!
//! Inbound adapters exposing the application layer.

pub mod http;
