pub mod auth;

pub use auth::require_auth;
pub use auth::CredentialTable;
