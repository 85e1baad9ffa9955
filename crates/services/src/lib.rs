//! Service clients for the AdGrid API: operation envelopes, the mutate
//! request/response pair, the HTTP transport and one thin handle per
//! resource collection.

pub mod client;
pub mod operation;
pub mod services;
pub mod transport;

pub use client::AdGridClient;
pub use operation::{MutateResponse, MutateResult, Operation};
pub use services::*;
pub use transport::{HttpTransport, Transport};
