use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction row recording one chosen operating system for a push
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "push_operating_systems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub push_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub os_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::push::Entity",
        from = "Column::PushId",
        to = "super::push::Column::Id"
    )]
    Push,
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

impl Related<super::operating_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperatingSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
