//! The home feed.

use actix_web::{HttpResponse, web};

use focal_shared::ApiResponse;
use focal_shared::dto::FeedPage;

use crate::middleware::error::AppResult;
use crate::middleware::session::SessionUser;
use crate::state::AppState;

/// GET /home - every post, newest first.
pub async fn home(state: web::Data<AppState>, _user: SessionUser) -> AppResult<HttpResponse> {
    let mut posts = state.posts.all().await?;
    // RFC 3339 strings: lexicographic descending == newest first
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let page = FeedPage {
        posts: posts.into_iter().map(super::post_view).collect(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}
