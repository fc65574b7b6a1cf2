//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod api_settings_repo;
pub mod content_item_repo;
pub mod creator_repo;
pub mod role_repo;
pub mod session_repo;
pub mod starter_pack_repo;
pub mod user_repo;
pub mod voice_note_repo;

pub use api_settings_repo::ApiSettingsRepo;
pub use content_item_repo::ContentItemRepo;
pub use creator_repo::CreatorRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use starter_pack_repo::StarterPackRepo;
pub use user_repo::UserRepo;
pub use voice_note_repo::VoiceNoteRepo;
