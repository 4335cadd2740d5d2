//! Profile viewing and editing, plus the settings page.

use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes;
use actix_multipart::form::text::Text;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use focal_shared::ApiResponse;
use focal_shared::dto::{PageView, ProfilePage};

use crate::middleware::error::AppResult;
use crate::middleware::session::SessionUser;
use crate::state::AppState;

#[derive(Debug, MultipartForm)]
pub struct ProfileUpdateForm {
    title: Option<Text<String>>,
    first_name: Option<Text<String>>,
    last_name: Option<Text<String>>,
    dob: Option<Text<String>>,
    profile_pic: Option<Bytes>,
}

/// GET /profile - the session user's record and only their posts. A session
/// whose user record has vanished is sent to logout; this is the one route
/// that re-validates the identity against the store.
pub async fn profile_page(
    state: web::Data<AppState>,
    user: SessionUser,
) -> AppResult<HttpResponse> {
    let Some(record) = state.users.find_by_email(&user.email).await? else {
        return Ok(super::redirect("/logout"));
    };

    let posts = state.posts.by_user(&user.email).await?;
    let page = ProfilePage {
        user: super::user_view(record),
        posts: posts.into_iter().map(super::post_view).collect(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}

/// POST /profile - overwrite the profile fields with whatever the form
/// carried (absent fields clear), optionally replacing the profile picture
/// with a 320x320-normalized upload.
pub async fn update_profile(
    state: web::Data<AppState>,
    user: SessionUser,
    MultipartForm(form): MultipartForm<ProfileUpdateForm>,
) -> AppResult<HttpResponse> {
    let Some(mut record) = state.users.find_by_email(&user.email).await? else {
        return Ok(super::redirect("/logout"));
    };

    let mut profile = record.profile.take().unwrap_or_default();
    profile.title = form.title.map(Text::into_inner);
    profile.first_name = form.first_name.map(Text::into_inner);
    profile.last_name = form.last_name.map(Text::into_inner);
    profile.dob = form.dob.map(Text::into_inner);

    if let Some(pic) = form.profile_pic
        && pic.file_name.as_deref().is_some_and(|n| !n.is_empty())
    {
        let jpeg = state.normalizer.normalize_profile(&pic.data)?;
        let name = format!("profile_{}.jpg", Uuid::new_v4());
        profile.profile_pic = Some(state.blobs.put_jpeg(&name, jpeg).await?);
    }

    record.profile = Some(profile);
    state.users.update(record).await?;

    Ok(super::redirect("/profile"))
}

/// GET /settings
pub async fn settings_page(_user: SessionUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PageView::new("settings")))
}
