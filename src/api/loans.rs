//! Loan management endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        loan::{CreateLoan, ReturnLoan},
        BorrowOutcome, LoanEntry, ReturnOutcome,
    },
};

/// Borrow/return response
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// `borrowed` or `returned`
    pub status: String,
    pub message: String,
}

/// List the current ledger
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Outstanding loans", body = Vec<LoanEntry>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> Json<Vec<LoanEntry>> {
    Json(state.services.loans.list_loans().await)
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 200, description = "Book borrowed", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "No record with that id"),
        (status = 409, description = "No copy available")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLoan>,
) -> AppResult<Json<LoanResponse>> {
    request.validate()?;

    match state.services.loans.borrow(&request.user, &request.id).await {
        BorrowOutcome::Success => Ok(Json(LoanResponse {
            status: "borrowed".to_string(),
            message: "Book borrowed successfully!".to_string(),
        })),
        BorrowOutcome::Unavailable => Err(AppError::Conflict("Book not available.".to_string())),
        BorrowOutcome::NotFound => Err(AppError::NotFound("Invalid Book ID.".to_string())),
    }
}

/// Return the book a user holds
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = ReturnLoan,
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User holds no book")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnLoan>,
) -> AppResult<Json<LoanResponse>> {
    request.validate()?;

    match state.services.loans.return_book(&request.user).await {
        ReturnOutcome::Success => Ok(Json(LoanResponse {
            status: "returned".to_string(),
            message: "Book returned successfully!".to_string(),
        })),
        ReturnOutcome::NoRecord => {
            Err(AppError::NoSuchData("No borrowed book found.".to_string()))
        }
    }
}
