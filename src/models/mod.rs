pub mod netconfig;
pub mod operating_system;
pub mod push;
pub mod push_netconfig;
pub mod push_operating_system;
pub mod push_status;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::netconfig::{self, Entity as NetConfig};
    pub use super::operating_system::{self, Entity as OperatingSystem};
    pub use super::push::{self, Entity as Push};
    pub use super::push_netconfig::{self, Entity as PushNetConfig};
    pub use super::push_operating_system::{self, Entity as PushOperatingSystem};
    pub use super::push_status::{self, Entity as PushStatus};
}
