use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One cell of a push's rollout matrix.
///
/// The composite primary key guarantees at most one row per
/// (push, netconfig, os) combination. `status` is opaque text; the
/// recognized values are `waiting` and `done` but agents may report
/// anything.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "push_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub push_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub netconfig_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub os_id: i64,
    pub status: String,
}

/// Initial status for every cell created at push time
pub const STATUS_WAITING: &str = "waiting";

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::push::Entity",
        from = "Column::PushId",
        to = "super::push::Column::Id"
    )]
    Push,
    #[sea_orm(
        belongs_to = "super::netconfig::Entity",
        from = "Column::NetconfigId",
        to = "super::netconfig::Column::Id"
    )]
    NetConfig,
    #[sea_orm(
        belongs_to = "super::operating_system::Entity",
        from = "Column::OsId",
        to = "super::operating_system::Column::Id"
    )]
    OperatingSystem,
}

impl Related<super::push::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Push.def()
    }
}

impl Related<super::netconfig::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NetConfig.def()
    }
}

impl Related<super::operating_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperatingSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
