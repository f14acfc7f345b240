use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    api::pagination::{ListParams, Page},
    domain::entities::{PermissionKey, Role, RoleDraft},
};

/// A role as shown in the grid: the record plus its rendered columns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    #[serde(flatten)]
    pub role: Role,
    pub granted: Vec<PermissionKey>,
    pub attributes_label: String,
}

impl From<&Role> for RoleResponse {
    fn from(role: &Role) -> Self {
        Self {
            granted: role.permissions.granted(),
            attributes_label: role.attributes_label(),
            role: role.clone(),
        }
    }
}

pub async fn list_roles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<RoleResponse>>> {
    let store = state.roles.read().await;
    Ok(Json(params.paginate(store.list_roles(), |r| RoleResponse::from(r))))
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<RoleResponse>> {
    let store = state.roles.read().await;
    let role = store.get_role(id)?;
    Ok(Json(RoleResponse::from(role)))
}

pub async fn new_role_draft(State(state): State<AppState>) -> Json<RoleDraft> {
    Json(state.roles.read().await.begin_create())
}

pub async fn edit_role_draft(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<RoleDraft>> {
    let draft = state.roles.read().await.begin_edit(id)?;
    Ok(Json(draft))
}

pub async fn create_role(
    State(state): State<AppState>,
    Json(draft): Json<RoleDraft>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state.roles.write().await.save(draft, None)?;
    Ok((StatusCode::CREATED, Json(RoleResponse::from(&role))))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<RoleDraft>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state.roles.write().await.save(draft, Some(id))?;
    Ok(Json(RoleResponse::from(&role)))
}

pub async fn delete_role(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    state.roles.write().await.delete_role(id);
    StatusCode::NO_CONTENT
}
