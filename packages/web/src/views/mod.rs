mod home;
pub use home::Home;

mod saved;
pub use saved::Saved;

mod archive;
pub use archive::{Archive, ArchiveArticle};

mod admin;
pub use admin::Admin;
