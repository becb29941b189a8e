use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogOption;
use crate::service::{ProgressQuery, ProgressService, ProgressView};

#[derive(Clone)]
pub struct ProgressState {
    pub service: ProgressService,
}

pub async fn show(
    State(state): State<ProgressState>,
    Query(query): Query<ProgressQuery>,
) -> Json<ProgressView> {
    let today = chrono::Local::now().date_naive();
    Json(state.service.progress(&query, today).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default)]
    muscle_group: Option<String>,
    #[serde(default)]
    pinned: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    muscle_group: String,
    options: Vec<CatalogOption>,
}

pub async fn catalog(
    State(state): State<ProgressState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let muscle_group = query.muscle_group.unwrap_or_default();
    let options = state
        .service
        .catalog_options(&muscle_group, query.pinned.as_deref())
        .await;

    Json(CatalogResponse {
        muscle_group,
        options,
    })
}
