//! Core client modules
//!
//! This module contains configuration, logging, the request-option
//! builder, the transport interceptors, error handling, and the HTTP
//! client the endpoint methods dispatch through.

pub mod client;
pub mod config;
pub mod error;
pub mod interceptors;
pub mod logging;
pub mod options;
