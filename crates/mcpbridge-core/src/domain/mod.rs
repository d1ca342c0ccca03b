//! Domain types
//!
//! - Server records and transport/scope value objects
//! - Request and response shapes exchanged with the routing layer

mod request;
mod server;

pub use request::*;
pub use server::*;
