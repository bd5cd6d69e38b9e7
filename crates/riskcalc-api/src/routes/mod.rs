//! Route handlers.

pub mod health;
pub mod risk;
pub mod root;
