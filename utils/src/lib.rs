//! Shared utilities for the EyeSentry admin workspace.
//!
//! Holds build metadata that the console, the email service and the
//! migration tool all report in the same format.

pub mod version_info;
