//! Core building blocks for the AdGrid API client: configuration,
//! the error model, resource-name helpers, field masks and retry tuning.

pub mod config;
pub mod error;
pub mod field_mask;
pub mod resource_names;
pub mod retry;

pub use config::AdGridConfig;
pub use error::{AdGridError, AdGridResult, ApiFailure, FieldError};
pub use field_mask::FieldMask;
pub use retry::RetryPolicy;
