use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    api::pagination::{ListParams, Page},
    domain::entities::{User, UserDraft},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<&'static str>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            status_label: user.status.map(|s| s.label()),
            user: user.clone(),
        }
    }
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Page<UserResponse>>> {
    let store = state.users.read().await;
    Ok(Json(params.paginate(store.list_users(), |u| UserResponse::from(u))))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<UserResponse>> {
    let store = state.users.read().await;
    let user = store.get_user(id)?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn new_user_draft(State(state): State<AppState>) -> Json<UserDraft> {
    Json(state.users.read().await.begin_create())
}

pub async fn edit_user_draft(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<UserDraft>> {
    let draft = state.users.read().await.begin_edit(id)?;
    Ok(Json(draft))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.write().await.save(draft, None)?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.write().await.save(draft, Some(id))?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    state.users.write().await.delete_user(id);
    StatusCode::NO_CONTENT
}
