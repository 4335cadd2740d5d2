//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;
mod profile;
mod upload;


use actix_web::http::header;
use actix_web::{HttpResponse, web};

use focal_core::domain::{Post, User};
use focal_shared::dto::{PostView, UserView};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(auth::login_page))
        .route("/", web::post().to(auth::login))
        .route("/signup", web::get().to(auth::signup_page))
        .route("/signup", web::post().to(auth::signup))
        .route("/home", web::get().to(feed::home))
        .route("/upload", web::get().to(upload::upload_page))
        .route("/upload", web::post().to(upload::upload_photo))
        .route("/profile", web::get().to(profile::profile_page))
        .route("/profile", web::post().to(profile::update_profile))
        .route("/settings", web::get().to(profile::settings_page))
        .route("/logout", web::get().to(auth::logout))
        .route("/health", web::get().to(health::health_check));
}

/// 303 to a sibling page - the answer every successful form post gives.
pub(crate) fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to.to_string()))
        .finish()
}

pub(crate) fn post_view(post: Post) -> PostView {
    PostView {
        image_url: post.image_url,
        user: post.user,
        timestamp: post.timestamp,
    }
}

pub(crate) fn user_view(user: User) -> UserView {
    let profile = user.profile.unwrap_or_default();
    UserView {
        email: user.email,
        title: profile.title,
        first_name: profile.first_name,
        last_name: profile.last_name,
        dob: profile.dob,
        profile_pic: profile.profile_pic,
    }
}
