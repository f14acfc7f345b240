use crate::api::{self, AppState};
use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    let roles = Router::new()
        .route(
            "/api/roles",
            get(api::roles::list_roles).post(api::roles::create_role),
        )
        .route("/api/roles/draft", get(api::roles::new_role_draft))
        .route(
            "/api/roles/:id",
            get(api::roles::get_role)
                .put(api::roles::update_role)
                .delete(api::roles::delete_role),
        )
        .route("/api/roles/:id/draft", get(api::roles::edit_role_draft));

    let users = Router::new()
        .route(
            "/api/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/api/users/draft", get(api::users::new_user_draft))
        .route(
            "/api/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .route("/api/users/:id/draft", get(api::users::edit_user_draft));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(roles)
        .merge(users)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Adminpanel Role and Team Management"
}

async fn health_handler() -> &'static str {
    "OK"
}
