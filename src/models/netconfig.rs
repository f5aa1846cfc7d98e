use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Static vocabulary of network environments (broadband, umts, gsm, ...)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "netconfigs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::push_netconfig::Entity")]
    PushNetConfigs,
    #[sea_orm(has_many = "super::push_status::Entity")]
    PushStatuses,
}

impl ActiveModelBehavior for ActiveModel {}
