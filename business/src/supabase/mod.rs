//! Client handle for the managed database and its auth endpoints.
//!
//! The handle is constructed explicitly from a [`BusinessConfig`] and
//! passed to its users; there is no process-wide client.
//!
//! [`BusinessConfig`]: crate::BusinessConfig

mod client;
mod error;

pub use client::{Credentials, SessionScope, SupabaseClient};
pub use error::SupabaseError;
