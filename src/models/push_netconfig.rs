use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction row recording one chosen netconfig for a push
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "push_netconfigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub push_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub netconfig_id: i64,
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
        belongs_to = "super::netconfig::Entity",
        from = "Column::NetconfigId",
        to = "super::netconfig::Column::Id"
    )]
    NetConfig,
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

impl ActiveModelBehavior for ActiveModel {}
