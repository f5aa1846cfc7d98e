//! Status ledger endpoint

use axum::{extract::State, Json};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::error::Result;
use crate::services::{self, Catalog, StatusUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    #[serde(default)]
    pub srid: String,
    #[serde(default)]
    pub status: String,
    pub nc: Option<String>,
    pub os: Option<String>,
}

/// POST /status/update
pub async fn update_status(
    State(state): State<AppState>,
    Form(form): Form<UpdateStatusForm>,
) -> Result<Json<serde_json::Value>> {
    let catalog = Catalog::load(&state.db).await?;

    let updated = services::update_status(
        &state.db,
        &catalog,
        StatusUpdate {
            srid: form.srid,
            status: form.status,
            netconfig: form.nc.filter(|s| !s.is_empty()),
            os: form.os.filter(|s| !s.is_empty()),
        },
    )
    .await?;

    Ok(Json(serde_json::json!({ "updated": updated })))
}
