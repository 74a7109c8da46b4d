//! Domain layer for the Photo Portal backend.
//!
//! This crate contains:
//! - Domain models (Deal, PhotoGroup, Photo, NotificationTemplate, User)
//! - The gallery/lightbox viewer state machine
//! - The multi-select order/share flow
//! - Business logic services (notification gateway, template rendering)

pub mod gallery;
pub mod models;
pub mod selection;
pub mod services;
pub mod validation;
