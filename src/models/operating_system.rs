use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Static vocabulary of target platforms (windows, mac, linux, ...)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "operating_systems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::push_operating_system::Entity")]
    PushOperatingSystems,
    #[sea_orm(has_many = "super::push_status::Entity")]
    PushStatuses,
}

impl ActiveModelBehavior for ActiveModel {}
