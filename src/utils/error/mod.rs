//! Error handling for the service
//!
//! This module defines the error type shared by the storage layer, the
//! configuration loader and the HTTP handlers.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
