//! Post resource handlers.
//!
//! Each handler is a short linear pipeline: validate, call the repository,
//! map the outcome to a status code, serialize. An empty list or search
//! result is a 404, not a 200 with an empty array - that is the published
//! contract of this API and callers depend on it.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostDraft, PostPatch};
use quill_shared::dto::{
    CreatePostRequest, MessageResponse, PostResponse, SearchQuery, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        category: post.category,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::debug!(?req, "Received create request");

    req.validate()?;

    let draft = PostDraft {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        category: req.category,
        tags: req.tags,
    };

    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    req.validate()?;

    let patch = PostPatch {
        title: req.title,
        content: req.content,
        category: req.category,
        tags: req.tags,
    };

    let post = state.posts.update(id, patch).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
pub async fn remove(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    // 204 with a confirmation message attached, matching the published
    // behavior of this endpoint.
    Ok(HttpResponse::NoContent().json(MessageResponse {
        message: format!("Post with id:{id} deleted successfully"),
    }))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    if posts.is_empty() {
        return Err(AppError::NotFound("No posts found".to_string()));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/search?term=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    query.validate()?;

    let term = query.term.unwrap_or_default();
    let posts = state.posts.search(&term).await?;

    if posts.is_empty() {
        return Err(AppError::NotFound("No posts found".to_string()));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
