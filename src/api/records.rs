//! Record (catalog) endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        record::{CreateRecord, RecordQuery},
        Record,
    },
};

/// List of records, in catalog order
#[derive(Serialize, ToSchema)]
pub struct RecordList {
    pub records: Vec<Record>,
    pub total: usize,
}

impl From<Vec<Record>> for RecordList {
    fn from(records: Vec<Record>) -> Self {
        Self {
            total: records.len(),
            records,
        }
    }
}

/// Record creation response
#[derive(Serialize, ToSchema)]
pub struct CreateRecordResponse {
    pub message: String,
    pub record: Record,
}

/// List every record in the catalog
#[utoipa::path(
    get,
    path = "/records",
    tag = "records",
    responses(
        (status = 200, description = "All records, possibly empty", body = RecordList)
    )
)]
pub async fn list_records(State(state): State<crate::AppState>) -> Json<RecordList> {
    Json(state.services.catalog.list_records().await.into())
}

/// Add a record to the catalog
#[utoipa::path(
    post,
    path = "/records",
    tag = "records",
    request_body = CreateRecord,
    responses(
        (status = 201, description = "Record added", body = CreateRecordResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_record(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateRecord>,
) -> AppResult<(StatusCode, Json<CreateRecordResponse>)> {
    request.validate()?;

    let record = state.services.catalog.add_record(request).await;

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            message: "Book added successfully!".to_string(),
            record,
        }),
    ))
}

/// Search records by title or by author
#[utoipa::path(
    get,
    path = "/records/search",
    tag = "records",
    params(
        ("title" = Option<String>, Query, description = "Case-insensitive substring of the title"),
        ("author" = Option<String>, Query, description = "Case-insensitive substring of the author")
    ),
    responses(
        (status = 200, description = "Matching records, possibly empty", body = RecordList),
        (status = 400, description = "Neither or both of title and author given")
    )
)]
pub async fn search_records(
    State(state): State<crate::AppState>,
    Query(query): Query<RecordQuery>,
) -> AppResult<Json<RecordList>> {
    let found = match (query.title, query.author) {
        (Some(title), None) => state.services.catalog.search_by_title(&title).await,
        (None, Some(author)) => state.services.catalog.search_by_author(&author).await,
        _ => {
            return Err(AppError::BadRequest(
                "Give exactly one of 'title' or 'author'".to_string(),
            ))
        }
    };

    Ok(Json(found.into()))
}
