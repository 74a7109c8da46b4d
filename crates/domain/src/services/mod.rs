//! Business logic services.

pub mod gateway;
pub mod template;
