//! Status ledger: applies agent-reported statuses to matrix cells
//!
//! One update call touches every cell matching the predicate, so an
//! agent can report "everything done" without enumerating the matrix.
//! The status string itself is opaque and last write wins.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::{push, push_status};
use crate::services::Catalog;

/// One status report from a deployment agent
#[derive(Debug)]
pub struct StatusUpdate {
    pub srid: String,
    pub status: String,
    pub netconfig: Option<String>,
    pub os: Option<String>,
}

/// Apply a status to every cell of the matching push's matrix,
/// narrowed by the optional netconfig and OS filters.
///
/// The srid must resolve to exactly one push. Zero matches is a
/// not-found error; several matches (possible once a handled push's
/// srid is reused) is a conflict rather than a silent pick of the
/// first row. Returns the number of cells written.
pub async fn update_status(
    db: &DatabaseConnection,
    catalog: &Catalog,
    update: StatusUpdate,
) -> Result<u64> {
    if update.srid.is_empty() || update.status.is_empty() {
        return Err(AppError::BadRequest(
            "srid and status are both required".to_string(),
        ));
    }

    let matches = Push::find()
        .filter(push::Column::Srid.eq(update.srid.as_str()))
        .all(db)
        .await?;

    let push_id = match matches.as_slice() {
        [] => {
            return Err(AppError::NotFound(format!(
                "No push for srid {}",
                update.srid
            )))
        }
        [only] => only.id,
        _ => {
            return Err(AppError::Conflict(format!(
                "srid {} matches {} pushes; cannot pick one",
                update.srid,
                matches.len()
            )))
        }
    };

    let mut query = PushStatus::update_many()
        .col_expr(
            push_status::Column::Status,
            Expr::value(update.status.clone()),
        )
        .filter(push_status::Column::PushId.eq(push_id));

    if let Some(name) = update.netconfig.as_deref() {
        let netconfig_id = catalog
            .netconfig_id(name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown netconfig: {}", name)))?;
        query = query.filter(push_status::Column::NetconfigId.eq(netconfig_id));
    }

    if let Some(name) = update.os.as_deref() {
        let os_id = catalog
            .os_id(name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown operating system: {}", name)))?;
        query = query.filter(push_status::Column::OsId.eq(os_id));
    }

    // A resolvable filter that was never chosen for this push simply
    // matches zero rows. That is not an error.
    let result = query.exec(db).await?;

    tracing::info!(
        pushid = push_id,
        status = %update.status,
        cells = result.rows_affected,
        "Applied status update"
    );

    Ok(result.rows_affected)
}
