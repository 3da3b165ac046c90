use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::inquiry::Inquiry;
use serde::Serialize;
use uuid::Uuid;

use super::service::InquiryError;

/// Accepted inquiry as handed to a sink (and posted to the webhook)
#[derive(Debug, Clone, Serialize)]
pub struct InquiryRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub inquiry: Inquiry,
}

/// Destination for accepted inquiries
#[async_trait]
pub trait InquirySink: Send + Sync {
    /// Deliver one record. `Ok(true)` means it left the process.
    async fn deliver(&self, record: &InquiryRecord) -> Result<bool, InquiryError>;

    fn sink_name(&self) -> &str;
}

/// Writes inquiries to the application log only
pub struct LogSink;

#[async_trait]
impl InquirySink for LogSink {
    async fn deliver(&self, record: &InquiryRecord) -> Result<bool, InquiryError> {
        tracing::info!(
            id = %record.id,
            kind = record.inquiry.kind(),
            email = record.inquiry.email(),
            "Inquiry received from {}",
            record.inquiry.name()
        );
        Ok(false)
    }

    fn sink_name(&self) -> &str {
        "log"
    }
}

/// Logs inquiries and posts them as JSON to a webhook
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl InquirySink for WebhookSink {
    async fn deliver(&self, record: &InquiryRecord) -> Result<bool, InquiryError> {
        LogSink.deliver(record).await?;

        let response = self
            .client
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| InquiryError::Forward(format!("request to webhook failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InquiryError::Forward(format!(
                "webhook answered {}",
                status.as_u16()
            )));
        }

        tracing::info!(id = %record.id, "Inquiry forwarded to {}", self.url);
        Ok(true)
    }

    fn sink_name(&self) -> &str {
        "webhook"
    }
}
