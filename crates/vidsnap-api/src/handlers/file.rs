//! File upload, read, update, download, and delete handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use vidsnap_core::error::AppError;
use vidsnap_service::file::{CreateFileParams, UpdateFileParams, UploadedVideo};

use crate::dto::request::UpdateFileRequest;
use crate::dto::response::FileResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Default screenshot interval when the header is absent, in seconds.
const DEFAULT_SCREENSHOTS_TIME: f64 = 30.0;

/// POST /files/upload
pub async fn upload_file(
    State(state): State<AppState>,
    user: CurrentUser,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<FileResponse>, ApiError> {
    let screenshots_time = parse_screenshots_time(&headers)?;

    let mut upload: Option<UploadedVideo> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read file field: {e}")))?;
        upload = Some(UploadedVideo {
            file_name,
            content_type,
            data,
        });
        break;
    }

    let file = state
        .file_service
        .create_file(
            CreateFileParams {
                user_id: user.id.clone(),
                screenshots_time,
            },
            upload,
        )
        .await?;

    Ok(Json(file.into()))
}

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state.file_service.get_files().await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

/// GET /files/{file_id}
pub async fn get_file(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    match state.file_service.get_file_by_id(file_id).await? {
        Some(file) => Ok(Json(FileResponse::from(file)).into_response()),
        None => Ok(not_found_body("File not found")),
    }
}

/// GET /users/{user_id}/files
pub async fn files_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state.file_service.get_files_by_user(&user_id).await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

/// GET /user/files
pub async fn my_files(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state.file_service.get_files_by_user(&user.id).await?;
    Ok(Json(files.into_iter().map(FileResponse::from).collect()))
}

/// PUT /files/{file_id}
pub async fn update_file(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
    Json(body): Json<UpdateFileRequest>,
) -> Result<Json<FileResponse>, ApiError> {
    let file = state
        .file_service
        .update_file(UpdateFileParams {
            id: file_id,
            compressed_file_key: body.compressed_file_key,
            status: body.status,
        })
        .await?;
    Ok(Json(file.into()))
}

/// GET /files/{file_id}/download
pub async fn download_file(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let url = state.file_service.get_signed_url(file_id).await?;

    let response = Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, url)
        .body(Body::empty())
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;
    Ok(response)
}

/// DELETE /files/{file_id}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.file_service.delete_file(file_id).await?;
    Ok(StatusCode::OK)
}

fn parse_screenshots_time(headers: &HeaderMap) -> Result<f64, ApiError> {
    match headers.get("x-screenshots-time") {
        None => Ok(DEFAULT_SCREENSHOTS_TIME),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| {
                ApiError(AppError::validation(
                    "x-screenshots-time header must be a number",
                ))
            }),
    }
}

pub(crate) fn not_found_body(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "message": message })),
    )
        .into_response()
}
