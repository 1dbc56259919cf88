pub mod admin;
pub mod content;
pub mod diagnostics;

pub use admin::AdminService;
pub use content::ContentService;
