pub mod catalog;
pub mod ledger;
pub mod registry;

pub use catalog::Catalog;
pub use ledger::{update_status, StatusUpdate};
pub use registry::{create_push, list_unhandled, mark_handled, NewPush, PushView};
