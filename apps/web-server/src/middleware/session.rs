//! Cookie sessions and the session-identity extractor.

use std::future::{Ready, ready};

use actix_session::storage::CookieSessionStore;
use actix_session::{SessionExt, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

/// Session key holding the logged-in user's email.
pub const SESSION_USER_KEY: &str = "user";

/// Cookie-backed session layer. Cookies are signed with the configured
/// secret; there is no expiry and no CSRF protection.
pub fn session_middleware(secret: &str) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), signing_key(secret))
        .cookie_secure(false)
        .build()
}

fn signing_key(secret: &str) -> Key {
    if secret.is_empty() {
        return Key::generate();
    }
    // Key::derive_from wants at least 32 bytes of material; short secrets
    // are cycled up to length.
    let mut material = secret.as_bytes().to_vec();
    while material.len() < 64 {
        material.extend_from_slice(secret.as_bytes());
    }
    Key::derive_from(&material)
}

/// Logged-in identity extractor.
///
/// Protected handlers take this as an argument; a request with no session
/// identity never reaches them and is answered with a redirect to the login
/// page instead. The identity is not re-checked against the user store -
/// only the profile page does that.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub email: String,
}

impl FromRequest for SessionUser {
    type Error = LoginRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        match session.get::<String>(SESSION_USER_KEY) {
            Ok(Some(email)) => ready(Ok(SessionUser { email })),
            _ => ready(Err(LoginRequired)),
        }
    }
}

/// Rejection for unauthenticated requests: 303 back to the login page.
#[derive(Debug)]
pub struct LoginRequired;

impl std::fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no session identity")
    }
}

impl actix_web::ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish()
    }
}
