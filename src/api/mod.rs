//! Client side of the detection server's HTTP API.

pub mod detection;
pub mod error;
pub mod models;

pub use detection::*;
pub use error::ApiError;
pub use models::*;
