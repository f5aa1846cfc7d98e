use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One rollout request for a specific commit.
///
/// Immutable after creation except `handled`, which only ever moves
/// from false to true.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pushes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub srid: String,
    pub ldap: String,
    pub sha: String,
    pub handled: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::push_netconfig::Entity")]
    PushNetConfigs,
    #[sea_orm(has_many = "super::push_operating_system::Entity")]
    PushOperatingSystems,
    #[sea_orm(has_many = "super::push_status::Entity")]
    PushStatuses,
}

impl ActiveModelBehavior for ActiveModel {}
