use axum::{Extension, response::Html};
use tracing::info;

use crate::{models::User, session::Session, views};

pub async fn index(Extension(session): Extension<Session>) -> Html<String> {
    let page = page_for(&session.user);
    info!("GET /advise success: rendering advisement page");
    page
}

/// Advisement page, or the access-denied page for disabled accounts. Also the
/// fallback for users who lack the role a page needs.
pub fn page_for(user: &User) -> Html<String> {
    if user.is_enabled() {
        Html(views::advise_page(user))
    } else {
        Html(views::access_denied_page(user))
    }
}
