pub mod admin;
pub mod advise;
pub mod forms;
pub mod manage;

use axum::{
    Router, middleware,
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
};

use crate::session::require_session;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/users/edit/{user_id}", post(admin::edit_user))
        .route("/admin/users/delete/{user_id}", get(admin::delete_user))
        .route("/advise", get(advise::index))
        .route("/manage", get(manage::index))
        .route("/manage/course/add", post(manage::add_course))
        .route("/manage/course/edit/{id}", post(manage::edit_course))
        .route("/manage/course/delete/{id}", get(manage::delete_course))
        .route("/manage/term/add", post(manage::add_term))
        .route("/manage/term/edit/{id}", post(manage::edit_term))
        .route("/manage/term/delete/{id}", get(manage::delete_term))
        .route("/manage/program/add", post(manage::add_program))
        .route("/manage/program/edit/{id}", post(manage::edit_program))
        .route("/manage/program/delete/{id}", get(manage::delete_program))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(pages)
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::to("/advise")
}

async fn health() -> StatusCode {
    StatusCode::OK
}
