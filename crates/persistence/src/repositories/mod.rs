//! Repository implementations over the in-memory catalog store.

pub mod deal;
pub mod notification;
pub mod photo_group;
pub mod user;

pub use deal::DealRepository;
pub use notification::{NotificationTestRepository, TemplateRepository};
pub use photo_group::PhotoGroupRepository;
pub use user::UserRepository;
