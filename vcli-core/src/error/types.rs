//! Core error types for vcli
//!
//! This module contains the VcliError enum with all error variants
//! and the associated Result alias.

use thiserror::Error;

/// Error type for every appliance and UI operation
///
/// Variants follow the order in which a request can fail: locally before
/// any I/O (validation, files), in transit, on the HTTP status, while
/// decoding, and finally inside the appliance's own result envelope.
#[derive(Error, Debug)]
pub enum VcliError {
    // Client-side input errors, raised before any network call
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] Box<std::io::Error>),

    // Transport
    #[error("500 | {message}")]
    Transport { message: String },

    #[error("{code} | {message}")]
    Status { code: u16, message: String },

    #[error("{code} | failed to decode {operation} response")]
    Decode {
        code: u16,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Appliance envelope
    #[error("{operation} failed: {info}")]
    Operation {
        operation: String,
        status_id: i64,
        info: String,
    },

    #[error("room {room} references program {library_id} which is not in the library")]
    UnresolvedProgram { room: String, library_id: String },

    // Local system
    #[error("Configuration error in {component}: {message}")]
    ConfigurationError { component: String, message: String },

    #[error("Service command '{command}' failed: {details}")]
    Service { command: String, details: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type VcliResult<T> = std::result::Result<T, VcliError>;
