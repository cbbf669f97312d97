use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, instrument};

use blog_lib::models::post::{CreatePostArgs, Post, UpdatePostArgs};
use blog_lib::services::s_posts;

use crate::errors::BlogWebError;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, BlogWebError> {
    debug!("c: get posts");

    let posts = s_posts::get_posts(&state.posts).await?;
    Ok(Json(posts))
}

#[instrument(skip(state))]
pub async fn handle_create_post(
    State(state): State<AppState>,
    body: Result<Json<CreatePostArgs>, JsonRejection>,
) -> Result<impl IntoResponse, BlogWebError> {
    debug!("c: create post");

    let Json(args) = body.map_err(|err| BlogWebError::validation(err.body_text()))?;

    let (title, content) = match (non_empty(args.title), non_empty(args.content)) {
        (Some(title), Some(content)) => (title, content),
        _ => return Err(BlogWebError::validation("Title and content are required")),
    };

    let post = s_posts::create_post(&state.posts, title, content).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip(state))]
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Post>, BlogWebError> {
    debug!("c: get post {}", post_id);

    let post_id = parse_post_id(&post_id)?;

    match s_posts::get_post(&state.posts, post_id).await? {
        Some(post) => Ok(Json(post)),
        None => Err(BlogWebError::post_not_found()),
    }
}

#[instrument(skip(state))]
pub async fn handle_update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    body: Result<Json<UpdatePostArgs>, JsonRejection>,
) -> Result<Json<Post>, BlogWebError> {
    debug!("c: update post {}", post_id);

    let Json(args) = body.map_err(|err| BlogWebError::validation(err.body_text()))?;

    let title = non_empty(args.title);
    let content = non_empty(args.content);
    if title.is_none() && content.is_none() {
        return Err(BlogWebError::validation("Title or content is required"));
    }

    let post_id = parse_post_id(&post_id)?;

    match s_posts::update_post(&state.posts, post_id, title, content).await? {
        Some(post) => Ok(Json(post)),
        None => Err(BlogWebError::post_not_found()),
    }
}

#[instrument(skip(state))]
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<StatusCode, BlogWebError> {
    debug!("c: delete post {}", post_id);

    let post_id = parse_post_id(&post_id)?;

    if s_posts::delete_post(&state.posts, post_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BlogWebError::post_not_found())
    }
}

/// Stored ids are numeric, so a path id that does not parse cannot name any
/// post; it gets the same 404 an unknown id does.
fn parse_post_id(raw: &str) -> Result<u64, BlogWebError> {
    raw.parse::<u64>().map_err(|_| BlogWebError::post_not_found())
}

/// An empty string counts as an absent field, so it can neither satisfy a
/// required field nor blank out stored text.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
