use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{
        auth::{callback, get_user, login, logout},
        review::{list_activities, recent_audit, resolve_activity, stats},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/review/activities", get(list_activities))
        .route("/api/review/activities/{id}/resolve", post(resolve_activity))
        .route("/api/review/audit", get(recent_audit))
        .route("/api/review/stats", get(stats))
}
