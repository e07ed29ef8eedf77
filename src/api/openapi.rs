//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, loans, records};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Digital Library API",
        version = "0.1.0",
        description = "In-memory book catalog and lending REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Records
        records::list_records,
        records::create_record,
        records::search_records,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
    ),
    components(
        schemas(
            health::StatusResponse,
            crate::models::Record,
            crate::models::record::CreateRecord,
            records::RecordList,
            records::CreateRecordResponse,
            crate::models::LoanEntry,
            crate::models::loan::CreateLoan,
            crate::models::loan::ReturnLoan,
            loans::LoanResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "records", description = "Catalog records"),
        (name = "loans", description = "Borrowing and returning")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
