//! Login, signup, and logout.

use actix_session::Session;
use actix_web::{HttpResponse, web};

use focal_core::domain::User;
use focal_shared::ApiResponse;
use focal_shared::dto::{LoginForm, PageView, SignupForm};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::SESSION_USER_KEY;
use crate::state::AppState;

/// GET /
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PageView::new("login")))
}

/// POST / - linear scan of the user table for an exact email+password
/// match; the first match wins and becomes the session identity. A failed
/// attempt falls through to the login page with no error message.
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Some(user) = state
        .users
        .find_by_credentials(&form.email, &form.password)
        .await?
    {
        session
            .insert(SESSION_USER_KEY, &user.email)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        tracing::info!(user = %user.email, "logged in");
        return Ok(super::redirect("/home"));
    }

    Ok(login_page().await)
}

/// GET /signup
pub async fn signup_page() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PageView::new("signup")))
}

/// POST /signup - appends whatever was submitted. No uniqueness check and
/// no hashing; duplicate emails coexist and login matches the first record
/// (see DESIGN.md).
pub async fn signup(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    state
        .users
        .append(User::new(form.email, form.password))
        .await?;
    Ok(super::redirect("/"))
}

/// GET /logout
pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    super::redirect("/")
}
