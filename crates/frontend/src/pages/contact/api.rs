//! Inquiry submission

use crate::shared::api_utils::api_url;
use contracts::inquiry::{ApiError, Inquiry, InquiryReceipt};

fn network(message: String) -> ApiError {
    ApiError {
        message,
        field: None,
    }
}

/// POST an inquiry; the server's error body is passed through so a field
/// error can be shown next to its input.
pub async fn submit_inquiry(inquiry: &Inquiry) -> Result<InquiryReceipt, ApiError> {
    let response = gloo_net::http::Request::post(&api_url("/api/inquiries"))
        .json(inquiry)
        .map_err(|e| network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(body) => body,
            Err(_) => network(format!("Server error: {}", status)),
        });
    }

    response
        .json::<InquiryReceipt>()
        .await
        .map_err(|e| network(format!("Failed to parse response: {}", e)))
}
