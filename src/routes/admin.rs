use axum::{
    Extension,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::{
    error::AppError,
    models::User,
    routes::advise,
    routes::forms::{Input, UserEditForm},
    session::Session,
    state::AppState,
    views,
};

/// The advising API has no count endpoint, so the admin page asks for
/// everything in one page.
pub const ALL_USERS_LIMIT: u64 = 10_000_000;

pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response, AppError> {
    if !session.user.can_administer() {
        info!("GET /admin: role lacks access, rendering advisement page");
        return Ok(advise::page_for(&session.user).into_response());
    }

    let users = state
        .api
        .fetch_all::<User>(&session.token, 0, ALL_USERS_LIMIT)
        .await?;
    info!(
        "GET /admin success: rendering admin page with {} user(s)",
        users.len()
    );
    Ok(Html(views::admin_page(&session.user, &users)).into_response())
}

pub async fn edit_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(user_id): Path<String>,
    Input(form): Input<UserEditForm>,
) -> Result<Redirect, AppError> {
    if !session.user.can_administer() {
        return Ok(Redirect::to("/advise"));
    }

    state
        .api
        .edit::<User>(&session.token, &user_id, &form.into_update())
        .await?;
    info!("POST /admin/users/edit/{} success", user_id);
    Ok(Redirect::to("/admin"))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(user_id): Path<String>,
) -> Result<Redirect, AppError> {
    if !session.user.can_administer() {
        return Ok(Redirect::to("/advise"));
    }

    state.api.delete::<User>(&session.token, &user_id).await?;
    info!("GET /admin/users/delete/{} success", user_id);
    Ok(Redirect::to("/admin"))
}
