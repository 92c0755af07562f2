//! Schema migrations for the EyeSentry database, as a command line tool.

pub mod cli;
pub mod commands;
pub mod connection;
pub mod output;
pub mod timing;
