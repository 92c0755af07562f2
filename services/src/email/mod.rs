//! Email dispatch endpoint.
//!
//! Browsers post `{to, subject, html}` here and the service forwards it to
//! the email provider with the server-side API key. The endpoint answers
//! CORS preflights itself and never calls the provider for them.

mod error;
mod handler;
mod message;
mod sender;

pub use error::EmailError;
pub use handler::{EMAIL_ROUTE, send_email};
pub use message::{EmailMessage, EmailRequest, Recipients};
pub use sender::{EmailSender, ResendSender, SendError};
