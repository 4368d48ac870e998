use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use roster_core::{UserChanges, UserDraft};
use uuid::Uuid;

use crate::{
    AppState,
    errors::AppResult,
    infra::flash::{FlashMessage, SessionId},
    users::forms,
    views,
};

/// List all users (the home page).
///
/// The only handler that surfaces a store error directly to the client
/// instead of redirecting.
pub async fn list_users_handler(
    State(state): State<AppState>,
    sid: SessionId,
) -> AppResult<Response> {
    let users = state.users.get_all_users().await?;
    let flash = state.flash.take(sid.id()).await;

    Ok(sid.attach(views::index_page(&users, flash.as_ref()).into_response()))
}

/// Render the add-user form. No store interaction.
pub async fn add_form_handler() -> Html<String> {
    views::add_page()
}

/// Create a user from the submitted form, saving the uploaded picture
/// first so the stored name can go into the record.
pub async fn create_user_handler(
    State(state): State<AppState>,
    sid: SessionId,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = forms::read_user_form(multipart).await?;

    // A failed insert after this write leaves an orphan upload; the two
    // stores are not coordinated.
    let image = match &form.upload {
        Some(upload) => Some(state.files.save(&upload.original_name, &upload.bytes).await?),
        None => None,
    };

    let draft = UserDraft {
        name: form.name,
        email: form.email,
        phone: form.phone,
        image,
    };
    state.users.create_user(&draft).await?;

    Ok(flash_and_redirect(&state, sid, FlashMessage::success("User added successfully")).await)
}

/// Render the edit form for an existing user; unknown ids go back home.
pub async fn edit_form_handler(
    State(state): State<AppState>,
    sid: SessionId,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_user_id(&raw_id) else {
        return Ok(sid.attach(Redirect::to("/").into_response()));
    };

    match state.users.get_user_by_id(id).await? {
        Some(user) => Ok(sid.attach(views::edit_page(&user).into_response())),
        None => Ok(sid.attach(Redirect::to("/").into_response())),
    }
}

/// Apply the edit form: a fresh upload replaces the stored picture, and
/// the old file is released best-effort; otherwise the prior picture is
/// retained unchanged.
pub async fn update_user_handler(
    State(state): State<AppState>,
    sid: SessionId,
    Path(raw_id): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = forms::read_user_form(multipart).await?;

    let Some(id) = parse_user_id(&raw_id) else {
        return Ok(flash_and_redirect(&state, sid, FlashMessage::danger("User not found!")).await);
    };

    let image = match &form.upload {
        Some(upload) => {
            let stored = state.files.save(&upload.original_name, &upload.bytes).await?;
            if let Some(old) = form.prior_image() {
                state.files.discard(old).await;
            }
            Some(stored)
        }
        None => form.prior_image().map(str::to_string),
    };

    let changes = UserChanges {
        name: form.name,
        email: form.email,
        phone: form.phone,
        image,
    };

    match state.users.update_user(id, &changes).await? {
        Some(_) => Ok(flash_and_redirect(
            &state,
            sid,
            FlashMessage::success("User updated successfully!"),
        )
        .await),
        None => {
            Ok(flash_and_redirect(&state, sid, FlashMessage::danger("User not found!")).await)
        }
    }
}

/// Delete a user and release its stored picture best-effort.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    sid: SessionId,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_user_id(&raw_id) else {
        return Ok(flash_and_redirect(&state, sid, FlashMessage::danger("User not found!")).await);
    };

    let Some(user) = state.users.delete_user(id).await? else {
        return Ok(flash_and_redirect(&state, sid, FlashMessage::danger("User not found!")).await);
    };

    if let Some(image) = &user.image {
        state.files.discard(image).await;
    }

    Ok(flash_and_redirect(&state, sid, FlashMessage::success("User deleted successfully")).await)
}

async fn flash_and_redirect(state: &AppState, sid: SessionId, message: FlashMessage) -> Response {
    state.flash.put(sid.id(), message).await;
    sid.attach(Redirect::to("/").into_response())
}

// Malformed ids cannot match a record; treat them as absent.
fn parse_user_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
