// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand, UpdateBrowseCommand,
    },
    dto::{ArticleDetailDto, ArticleDto},
    queries::articles::{ArticleDetailQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Only articles in this category.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Substring matched against content or title.
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub status: Option<i16>,
    /// 1-based page number, defaults to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Defaults to 10, capped at 100.
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub seo_keyword: String,
    #[serde(default)]
    pub status: Option<i16>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub seo_keyword: String,
    #[serde(default)]
    pub status: Option<i16>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub admin_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBrowseRequest {
    pub browse: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of live articles.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        category_id: params.category_id,
        keyword: params.keyword,
        status: params.status,
        page: params.page,
        page_size: params.page_size,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with relations and comment count.", body = ArticleDetailDto),
        (status = 401, description = "No live article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_detail(ArticleDetailQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Title already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        img_url: payload.img_url,
        content: payload.content,
        seo_keyword: payload.seo_keyword,
        status: payload.status,
        sort_order: payload.sort_order,
        admin_id: payload.admin_id,
        category_id: payload.category_id,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Title already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        description: payload.description,
        img_url: payload.img_url,
        content: payload.content,
        seo_keyword: payload.seo_keyword,
        status: payload.status,
        sort_order: payload.sort_order,
        admin_id: payload.admin_id,
        category_id: payload.category_id,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Soft-deleted article.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/articles/{id}/browse",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateBrowseRequest,
    responses(
        (status = 200, description = "Article with the new view count.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_browse(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBrowseRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_browse(UpdateBrowseCommand {
            id,
            browse: payload.browse,
        })
        .await
        .into_http()
        .map(Json)
}
