//! Core library for vcli: configuration, errors, domain types and the
//! Virtual Control appliance client.

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use client::{ApplianceApi, ApplianceClient};
pub use config::{Endpoint, VcliConfig};
pub use error::{VcliError, VcliResult};
