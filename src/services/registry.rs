//! Push registry: creation, listing, and the handled flag
//!
//! Creating a push fans out the full netconfig x OS cross product into
//! push_status inside a single transaction, so the matrix is complete
//! the instant the push becomes visible.

use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::push_status::STATUS_WAITING;
use crate::models::{push, push_netconfig, push_operating_system, push_status};
use crate::services::Catalog;

/// Validated input for push creation
#[derive(Debug)]
pub struct NewPush {
    pub srid: String,
    pub ldap: String,
    pub sha: String,
    pub netconfigs: Vec<String>,
    pub operating_systems: Vec<String>,
}

/// An unhandled push with its dimension ids resolved back to names
#[derive(Debug, Serialize)]
pub struct PushView {
    pub pushid: i64,
    pub srid: String,
    pub ldap: String,
    pub sha: String,
    pub netconfigs: Vec<String>,
    pub operating_systems: Vec<String>,
}

/// Create a push together with its join rows and the full cross
/// product of `waiting` status cells. All-or-nothing.
///
/// Rejects a srid that still has an unhandled push, keeping srid an
/// unambiguous lookup key for status updates.
pub async fn create_push(
    db: &DatabaseConnection,
    catalog: &Catalog,
    new: NewPush,
) -> Result<i64> {
    if new.srid.is_empty() || new.ldap.is_empty() || new.sha.is_empty() {
        return Err(AppError::BadRequest(
            "srid, ldap and sha are all required".to_string(),
        ));
    }
    if new.netconfigs.is_empty() || new.operating_systems.is_empty() {
        return Err(AppError::BadRequest(
            "at least one netconfig and one operating_system are required".to_string(),
        ));
    }

    let netconfig_ids = resolve_names(&new.netconfigs, |name| catalog.netconfig_id(name))
        .map_err(|name| AppError::BadRequest(format!("Unknown netconfig: {}", name)))?;
    let os_ids = resolve_names(&new.operating_systems, |name| catalog.os_id(name))
        .map_err(|name| AppError::BadRequest(format!("Unknown operating system: {}", name)))?;

    let open = Push::find()
        .filter(push::Column::Srid.eq(new.srid.as_str()))
        .filter(push::Column::Handled.eq(false))
        .one(db)
        .await?;
    if open.is_some() {
        return Err(AppError::Conflict(format!(
            "An unhandled push for srid {} already exists",
            new.srid
        )));
    }

    let txn = db.begin().await?;

    let created = push::ActiveModel {
        srid: Set(new.srid),
        ldap: Set(new.ldap),
        sha: Set(new.sha),
        handled: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for &netconfig_id in &netconfig_ids {
        push_netconfig::ActiveModel {
            push_id: Set(created.id),
            netconfig_id: Set(netconfig_id),
        }
        .insert(&txn)
        .await?;
    }

    for &os_id in &os_ids {
        push_operating_system::ActiveModel {
            push_id: Set(created.id),
            os_id: Set(os_id),
        }
        .insert(&txn)
        .await?;
    }

    for &netconfig_id in &netconfig_ids {
        for &os_id in &os_ids {
            push_status::ActiveModel {
                push_id: Set(created.id),
                netconfig_id: Set(netconfig_id),
                os_id: Set(os_id),
                status: Set(STATUS_WAITING.to_string()),
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    tracing::info!(
        pushid = created.id,
        cells = netconfig_ids.len() * os_ids.len(),
        "Created push"
    );

    Ok(created.id)
}

/// Resolve a list of names through the catalog, deduplicating as we
/// go. Returns the first unresolvable name on failure.
fn resolve_names<F>(names: &[String], resolve: F) -> std::result::Result<BTreeSet<i64>, String>
where
    F: Fn(&str) -> Option<i64>,
{
    let mut ids = BTreeSet::new();
    for name in names {
        match resolve(name) {
            Some(id) => {
                ids.insert(id);
            }
            None => return Err(name.clone()),
        }
    }
    Ok(ids)
}

/// Every push still waiting on an operator, with resolved names
pub async fn list_unhandled(db: &DatabaseConnection, catalog: &Catalog) -> Result<Vec<PushView>> {
    let pushes = Push::find()
        .filter(push::Column::Handled.eq(false))
        .all(db)
        .await?;

    let mut views = Vec::with_capacity(pushes.len());
    for p in pushes {
        let netconfigs = PushNetConfig::find()
            .filter(push_netconfig::Column::PushId.eq(p.id))
            .all(db)
            .await?
            .into_iter()
            .filter_map(|row| catalog.netconfig_name(row.netconfig_id).map(str::to_string))
            .collect();

        let operating_systems = PushOperatingSystem::find()
            .filter(push_operating_system::Column::PushId.eq(p.id))
            .all(db)
            .await?
            .into_iter()
            .filter_map(|row| catalog.os_name(row.os_id).map(str::to_string))
            .collect();

        views.push(PushView {
            pushid: p.id,
            srid: p.srid,
            ldap: p.ldap,
            sha: p.sha,
            netconfigs,
            operating_systems,
        });
    }

    Ok(views)
}

/// Flip `handled` to true for each given push id.
///
/// Unknown ids match nothing and are silently skipped; repeating the
/// call is always safe. Status cells are left untouched.
pub async fn mark_handled(db: &DatabaseConnection, ids: &[i64]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }

    Push::update_many()
        .col_expr(push::Column::Handled, Expr::value(true))
        .filter(push::Column::Id.is_in(ids.to_vec()))
        .exec(db)
        .await?;

    Ok(())
}
