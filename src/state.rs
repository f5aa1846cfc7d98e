use sea_orm::DatabaseConnection;

use crate::middleware::CredentialTable;

/// Database connection type alias
pub type DbConn = DatabaseConnection;

/// Application state containing all shared resources.
///
/// The credential table is parsed once at startup; per-request state
/// (catalog maps, transactions) is built inside each handler instead.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub credentials: CredentialTable,
}

impl AppState {
    pub fn new(db: DbConn, credentials: CredentialTable) -> Self {
        Self { db, credentials }
    }
}
