use axum::{http::StatusCode, Json};
use contracts::inquiry::{ApiError, Inquiry, InquiryReceipt};

use crate::domain::inquiry::{service, InquiryError};
use crate::shared::content;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn internal(e: anyhow::Error) -> (StatusCode, Json<ApiError>) {
    tracing::error!("{}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            message: "Service unavailable".to_string(),
            field: None,
        }),
    )
}

/// POST /api/inquiries
pub async fn submit(Json(inquiry): Json<Inquiry>) -> ApiResult<InquiryReceipt> {
    let desk = service::get().map_err(internal)?;
    let loaded = content::get().map_err(internal)?;

    match desk.submit(inquiry, &loaded.content).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(InquiryError::Invalid(e)) => {
            tracing::warn!("Rejected inquiry: {}", e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, Json(e.into())))
        }
        Err(e @ InquiryError::Forward(_)) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiError {
                message: e.to_string(),
                field: None,
            }),
        )),
    }
}
