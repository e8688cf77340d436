//! Data Transfer Objects
//!
//! Request and response bodies exchanged with HTTP clients.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
