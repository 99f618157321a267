//! Post handlers - the `/api/posts` surface.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::{Post, PostSummary};
use quill_core::service::{Lookup, PostPatch};
use quill_shared::dto::{
    CreatePostRequest, PostResponse, PostSummaryResponse, UpdatePostRequest,
};
use quill_shared::{ApiResponse, SearchResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        title: post.title,
        content: post.content,
        slug: post.slug,
        meta_title: post.meta_title,
        meta_description: post.meta_description,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn summary_response(summary: PostSummary) -> PostSummaryResponse {
    PostSummaryResponse {
        title: summary.title,
        slug: summary.slug,
        created_at: summary.created_at,
        updated_at: summary.updated_at,
    }
}

/// GET /api/posts?search=<keyword>
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let posts = state.resolver.list(params.search.as_deref()).await?;
    let data: Vec<PostSummaryResponse> = posts.into_iter().map(summary_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(data)))
}

/// GET /api/posts/{identifier}
///
/// Exact slug match returns a single post; otherwise the identifier is
/// treated as a slug fragment and matching posts come back tagged with
/// `searchResults: true`.
pub async fn lookup(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    match state.resolver.lookup(&path.into_inner()).await? {
        Lookup::Single(post) => Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post)))),
        Lookup::Matches(posts) => Ok(HttpResponse::Ok().json(SearchResponse::results(
            posts.into_iter().map(summary_response).collect(),
        ))),
    }
}

/// POST /api/posts - gated
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.lifecycle.create(&req.title, &req.content).await?;

    tracing::info!(slug = %post.slug, editor = %identity.name, editor_id = %identity.subject, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post_response(post),
        "Post created successfully",
    )))
}

/// PUT /api/posts/{slug} - gated
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };
    let post = state.lifecycle.update(&slug, patch).await?;

    tracing::info!(slug = %post.slug, editor = %identity.name, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_response(post),
        "Post updated successfully",
    )))
}

/// DELETE /api/posts/{slug} - gated
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    state.lifecycle.delete(&slug).await?;

    tracing::info!(slug = %slug, editor = %identity.name, "Post deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::<PostResponse>::message_only(
        "Post deleted successfully",
    )))
}
