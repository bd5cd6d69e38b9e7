//! Data Transfer Objects for API requests and responses.

pub mod common;
pub mod risk;

pub use common::*;
pub use risk::*;
