//! Push registry endpoints
//!
//! Form-encoded bodies because the deployment agents are curl scripts;
//! `netconfig`, `operating_system` and `id` may repeat.

use axum::{extract::State, Json};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::error::Result;
use crate::services::{self, Catalog, NewPush, PushView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SrPushForm {
    #[serde(default)]
    pub srid: String,
    #[serde(default)]
    pub ldap: String,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub netconfig: Vec<String>,
    #[serde(default)]
    pub operating_system: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarkHandledForm {
    #[serde(default)]
    pub id: Vec<i64>,
}

/// POST /srpush
pub async fn srpush(
    State(state): State<AppState>,
    Form(form): Form<SrPushForm>,
) -> Result<Json<serde_json::Value>> {
    let catalog = Catalog::load(&state.db).await?;

    let pushid = services::create_push(
        &state.db,
        &catalog,
        NewPush {
            srid: form.srid,
            ldap: form.ldap,
            sha: form.sha,
            netconfigs: form.netconfig,
            operating_systems: form.operating_system,
        },
    )
    .await?;

    Ok(Json(serde_json::json!({ "pushid": pushid })))
}

/// GET /list_unhandled
pub async fn list_unhandled(State(state): State<AppState>) -> Result<Json<Vec<PushView>>> {
    let catalog = Catalog::load(&state.db).await?;
    let views = services::list_unhandled(&state.db, &catalog).await?;
    Ok(Json(views))
}

/// POST /mark_handled
pub async fn mark_handled(
    State(state): State<AppState>,
    Form(form): Form<MarkHandledForm>,
) -> Result<&'static str> {
    services::mark_handled(&state.db, &form.id).await?;
    Ok("ok")
}
