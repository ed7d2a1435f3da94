//! Request handlers.
//!
//! Handlers bind the request, call into [`ReadmeEditor`](readme_core::ReadmeEditor)
//! and wrap the result. Body binding is checked before the readme's
//! existence; rendering validation comes last.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use readme_core::Table;

use crate::error::ApiError;
use crate::models::{
    AddCodeRequest, AddHeaderRequest, AddLinkRequest, AddTableRequest, MessageResponse,
    QueryParams, bind,
};
use crate::state::AppState;

type MessageResult = Result<Json<MessageResponse>, ApiError>;

fn message(fragment: String) -> Json<MessageResponse> {
    Json(MessageResponse::new(fragment))
}

// ============================================================================
// Readme lifecycle
// ============================================================================

/// `POST /readme?name=<optional>`
pub async fn create_readme(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state.editor().create(params.first("name")).await?;
    Ok((StatusCode::CREATED, message(id)))
}

/// `GET /readme/{id}`
pub async fn get_readme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.editor().fragments(&id).await?))
}

/// `GET /readme/{id}/markdown`
pub async fn get_markdown(State(state): State<AppState>, Path(id): Path<String>) -> MessageResult {
    Ok(message(state.editor().document(&id).await?))
}

/// `POST /readme/{id}/file`
pub async fn export_readme(State(state): State<AppState>, Path(id): Path<String>) -> MessageResult {
    let path = state.export_path();
    state.editor().export(&id, path).await?;
    Ok(message(path.display().to_string()))
}

// ============================================================================
// Fragments
// ============================================================================

/// `PUT /readme/{id}/header`
pub async fn add_header(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> MessageResult {
    let req: AddHeaderRequest = bind(&body)?;
    let fragment = state
        .editor()
        .add_heading(&id, &req.header_type, &req.value)
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/paragraph?paragraph=<text>`
pub async fn add_paragraph(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<QueryParams>,
) -> MessageResult {
    let fragment = state
        .editor()
        .add_paragraph(&id, params.first_or_empty("paragraph"))
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/code`
pub async fn add_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> MessageResult {
    let req: AddCodeRequest = bind(&body)?;
    let fragment = state
        .editor()
        .add_code(&id, &req.code_language, &req.value)
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/blockquote?blockquote=<text>`
pub async fn add_blockquote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<QueryParams>,
) -> MessageResult {
    let fragment = state
        .editor()
        .add_blockquote(&id, params.first_or_empty("blockquote"))
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/link`
pub async fn add_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> MessageResult {
    let req: AddLinkRequest = bind(&body)?;
    let fragment = state
        .editor()
        .add_link(&id, &req.description, &req.link)
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/image`
pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> MessageResult {
    let req: AddLinkRequest = bind(&body)?;
    let fragment = state
        .editor()
        .add_image(&id, &req.description, &req.link)
        .await?;
    Ok(message(fragment))
}

/// `PUT /readme/{id}/table`
pub async fn add_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> MessageResult {
    let req: AddTableRequest = bind(&body)?;
    let fragment = state.editor().add_table(&id, &Table::from(req)).await?;
    Ok(message(fragment))
}
