//! Entity models and DTOs, one module per table.

pub mod api_settings;
pub mod content_item;
pub mod creator;
pub mod role;
pub mod session;
pub mod starter_pack;
pub mod user;
pub mod voice_note;
