//! Business layer of the EyeSentry admin console.
//!
//! Platform-independent pieces (table model, auth state, endpoints) are
//! shared with the wasm console; the database client and the migration
//! runner are native only.

mod auth_state;
mod config;
mod session;
pub mod table;

#[cfg(not(target_arch = "wasm32"))]
pub mod migration;
#[cfg(not(target_arch = "wasm32"))]
pub mod supabase;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use auth_state::{AuthProvider, AuthState, AuthStatus, PageAccess};
pub use config::BusinessConfig;
pub use session::{AuthUser, ProviderErrorBody, Session, TokenResponse};
pub use table::{Column, DataTable, FilterState, Record, TableRecord};
