//! Photo upload: normalize, push to the blob store, append a post.

use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use focal_core::domain::Post;
use focal_shared::ApiResponse;
use focal_shared::dto::PageView;

use crate::middleware::error::AppResult;
use crate::middleware::session::SessionUser;
use crate::state::AppState;

#[derive(Debug, MultipartForm)]
pub struct PhotoUploadForm {
    photo: Bytes,
}

/// GET /upload
pub async fn upload_page(_user: SessionUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PageView::new("upload")))
}

/// POST /upload - decode and resize the photo, upload it under a random
/// name (collisions are astronomically unlikely, and overwritten anyway),
/// record the post, and send the user back to the feed.
pub async fn upload_photo(
    state: web::Data<AppState>,
    user: SessionUser,
    MultipartForm(form): MultipartForm<PhotoUploadForm>,
) -> AppResult<HttpResponse> {
    let jpeg = state.normalizer.normalize_feed(&form.photo.data)?;

    let name = format!("{}.jpg", Uuid::new_v4());
    let image_url = state.blobs.put_jpeg(&name, jpeg).await?;

    state
        .posts
        .append(Post::new(image_url, user.email))
        .await?;

    Ok(super::redirect("/home"))
}
