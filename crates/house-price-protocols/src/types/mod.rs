//! Request and response shapes.

mod request;
mod response;

pub use request::*;
pub use response::*;
