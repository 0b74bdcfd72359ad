use axum::{
    Extension,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::{
    advisor::Resource,
    error::AppError,
    models::{Course, Program, Term},
    routes::advise,
    routes::forms::{CourseForm, Input, ProgramForm, TermForm},
    session::Session,
    state::AppState,
    views,
};

pub const PAGE_LIMIT: u64 = 100;

pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response, AppError> {
    if !session.user.can_manage() {
        info!("GET /manage: role lacks access, rendering advisement page");
        return Ok(advise::page_for(&session.user).into_response());
    }

    // Independent reads; the first failure fails the page.
    let (courses, terms, programs) = tokio::try_join!(
        state.api.fetch_all::<Course>(&session.token, 0, PAGE_LIMIT),
        state.api.fetch_all::<Term>(&session.token, 0, PAGE_LIMIT),
        state.api.fetch_all::<Program>(&session.token, 0, PAGE_LIMIT),
    )?;

    info!(
        "GET /manage success: rendering manage page with {} course(s), {} term(s), {} program(s)",
        courses.len(),
        terms.len(),
        programs.len()
    );
    Ok(Html(views::manage_page(&session.user, &courses, &terms, &programs)).into_response())
}

pub async fn add_course(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Input(form): Input<CourseForm>,
) -> Result<Redirect, AppError> {
    create_record::<Course>(&state, &session, form.into_payload()).await
}

pub async fn edit_course(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Input(form): Input<CourseForm>,
) -> Result<Redirect, AppError> {
    edit_record::<Course>(&state, &session, &id, form.into_payload()).await
}

pub async fn delete_course(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    delete_record::<Course>(&state, &session, &id).await
}

pub async fn add_term(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Input(form): Input<TermForm>,
) -> Result<Redirect, AppError> {
    create_record::<Term>(&state, &session, form.into_payload()).await
}

pub async fn edit_term(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Input(form): Input<TermForm>,
) -> Result<Redirect, AppError> {
    edit_record::<Term>(&state, &session, &id, form.into_payload()).await
}

pub async fn delete_term(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    delete_record::<Term>(&state, &session, &id).await
}

pub async fn add_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Input(form): Input<ProgramForm>,
) -> Result<Redirect, AppError> {
    create_record::<Program>(&state, &session, form.into_payload()).await
}

pub async fn edit_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Input(form): Input<ProgramForm>,
) -> Result<Redirect, AppError> {
    edit_record::<Program>(&state, &session, &id, form.into_payload()).await
}

pub async fn delete_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    delete_record::<Program>(&state, &session, &id).await
}

async fn create_record<R: Resource>(
    state: &AppState,
    session: &Session,
    payload: R::Payload,
) -> Result<Redirect, AppError> {
    if !session.user.can_manage() {
        return Ok(Redirect::to("/advise"));
    }

    let created = state.api.create::<R>(&session.token, &payload).await?;
    info!(
        "POST /manage/{}/add success ({}): {} {}",
        R::PATH,
        created.status.as_u16(),
        R::NAME,
        created.data.record_id().unwrap_or("?")
    );
    Ok(Redirect::to("/manage"))
}

async fn edit_record<R: Resource>(
    state: &AppState,
    session: &Session,
    id: &str,
    payload: R::Update,
) -> Result<Redirect, AppError> {
    if !session.user.can_manage() {
        return Ok(Redirect::to("/advise"));
    }

    state.api.edit::<R>(&session.token, id, &payload).await?;
    info!("POST /manage/{}/edit/{} success", R::PATH, id);
    Ok(Redirect::to("/manage"))
}

async fn delete_record<R: Resource>(
    state: &AppState,
    session: &Session,
    id: &str,
) -> Result<Redirect, AppError> {
    if !session.user.can_manage() {
        return Ok(Redirect::to("/advise"));
    }

    state.api.delete::<R>(&session.token, id).await?;
    info!("GET /manage/{}/delete/{} success", R::PATH, id);
    Ok(Redirect::to("/manage"))
}
