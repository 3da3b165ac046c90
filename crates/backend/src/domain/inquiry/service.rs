use chrono::Utc;
use contracts::inquiry::{FieldError, Inquiry, InquiryReceipt};
use contracts::site::SiteContent;
use once_cell::sync::OnceCell;
use thiserror::Error;
use uuid::Uuid;

use super::sink::{InquiryRecord, InquirySink, LogSink, WebhookSink};
use crate::shared::config::InquiriesConfig;

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("invalid inquiry: {0}")]
    Invalid(#[from] FieldError),

    #[error("inquiry could not be forwarded: {0}")]
    Forward(String),
}

/// Accepts inquiries and hands them to the configured sink
pub struct InquiryDesk {
    sink: Box<dyn InquirySink>,
}

static INQUIRY_DESK: OnceCell<InquiryDesk> = OnceCell::new();

pub fn initialize(config: &InquiriesConfig) -> anyhow::Result<()> {
    let desk = InquiryDesk::from_config(config)?;
    tracing::info!("Inquiries are delivered via the {} sink", desk.sink.sink_name());
    INQUIRY_DESK
        .set(desk)
        .map_err(|_| anyhow::anyhow!("inquiry desk already initialized"))
}

pub fn get() -> anyhow::Result<&'static InquiryDesk> {
    INQUIRY_DESK
        .get()
        .ok_or_else(|| anyhow::anyhow!("inquiry desk not initialized"))
}

impl InquiryDesk {
    pub fn new(sink: Box<dyn InquirySink>) -> Self {
        Self { sink }
    }

    pub fn from_config(config: &InquiriesConfig) -> anyhow::Result<Self> {
        let sink: Box<dyn InquirySink> = match config.forward_url.as_deref() {
            Some(url) if !url.trim().is_empty() => {
                Box::new(WebhookSink::new(url.trim(), config.timeout_secs)?)
            }
            _ => Box::new(LogSink),
        };
        Ok(Self::new(sink))
    }

    /// Sanitize, validate and deliver one inquiry.
    ///
    /// Markup is stripped from free text before validation, so a message made
    /// only of tags counts as empty.
    pub async fn submit(
        &self,
        inquiry: Inquiry,
        content: &SiteContent,
    ) -> Result<InquiryReceipt, InquiryError> {
        let inquiry = inquiry.map_text(sanitize_text);
        inquiry.validate()?;
        check_room_type(&inquiry, content)?;

        let record = InquiryRecord {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            inquiry,
        };

        let forwarded = self.sink.deliver(&record).await.map_err(|e| {
            tracing::error!(id = %record.id, "Failed to deliver inquiry: {}", e);
            e
        })?;

        Ok(InquiryReceipt {
            id: record.id,
            kind: record.inquiry.kind().to_string(),
            received_at: record.received_at,
            forwarded,
            message: confirmation_message(&record.inquiry).to_string(),
        })
    }
}

/// Strip every tag (and script/style content) from user text.
///
/// ammonia serializes what is left as HTML, so the entities it writes for
/// text are decoded again: inquiries travel as plain text in JSON.
pub fn sanitize_text(text: &str) -> String {
    let html = ammonia::Builder::empty().clean(text).to_string();
    decode_text_entities(&html).trim().to_string()
}

/// Undo the escaping applied to text nodes (`&amp;`, `&lt;`, `&gt;`, `&nbsp;`, quotes)
fn decode_text_entities(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&nbsp;", '\u{a0}'),
        ]
        .into_iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match decoded {
            Some((entity, ch)) => {
                out.push(ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// A booking must name one of the room categories the site lists
fn check_room_type(inquiry: &Inquiry, content: &SiteContent) -> Result<(), FieldError> {
    let Inquiry::Booking(booking) = inquiry else {
        return Ok(());
    };

    let tabs = &content.rooms.catalog.tabs;
    if tabs.is_empty() || tabs.iter().any(|t| t.key == booking.room_type) {
        return Ok(());
    }

    let known: Vec<&str> = tabs.iter().map(|t| t.key.as_str()).collect();
    Err(FieldError::new(
        "room_type",
        format!("Unknown room type; expected one of: {}", known.join(", ")),
    ))
}

fn confirmation_message(inquiry: &Inquiry) -> &'static str {
    match inquiry {
        Inquiry::Contact(_) => "Thank you for your message! We will get back to you within 24 hours.",
        Inquiry::Booking(_) => {
            "Your booking inquiry has been received. Our admissions team will contact you within 2-3 business days."
        }
        Inquiry::Visit(_) => "Your visit request has been received. We will confirm the date and time by email.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::inquiry::{BookingInquiry, ContactInquiry, StayDuration};
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingSink {
        records: Arc<Mutex<Vec<InquiryRecord>>>,
    }

    #[async_trait]
    impl InquirySink for RecordingSink {
        async fn deliver(&self, record: &InquiryRecord) -> Result<bool, InquiryError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(true)
        }

        fn sink_name(&self) -> &str {
            "recording"
        }
    }

    struct FailingSink;

    #[async_trait]
    impl InquirySink for FailingSink {
        async fn deliver(&self, _record: &InquiryRecord) -> Result<bool, InquiryError> {
            Err(InquiryError::Forward("webhook answered 503".into()))
        }

        fn sink_name(&self) -> &str {
            "failing"
        }
    }

    fn contact() -> Inquiry {
        Inquiry::Contact(ContactInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            subject: "Availability".into(),
            message: "Is a <b>double</b> room free?<script>alert(1)</script>".into(),
        })
    }

    fn booking(room_type: &str) -> Inquiry {
        Inquiry::Booking(BookingInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            phone: "+1 555 0100".into(),
            room_type: room_type.into(),
            check_in: "2026-08-01".into(),
            duration: Some(StayDuration::Year),
            notes: String::new(),
        })
    }

    #[tokio::test]
    async fn test_contact_inquiry_is_sanitized_and_delivered() {
        let sink = RecordingSink::default();
        let desk = InquiryDesk::new(Box::new(sink.clone()));
        let content = SiteContent::builtin().unwrap();

        let receipt = desk.submit(contact(), &content).await.unwrap();
        assert_eq!(receipt.kind, "contact");
        assert!(receipt.forwarded);

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, receipt.id);
        match &records[0].inquiry {
            Inquiry::Contact(c) => assert_eq!(c.message, "Is a double room free?"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_markup_only_message_is_rejected() {
        let desk = InquiryDesk::new(Box::new(RecordingSink::default()));
        let content = SiteContent::builtin().unwrap();
        let inquiry = Inquiry::Contact(ContactInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            subject: "Hi".into(),
            message: "<script>alert(1)</script>".into(),
        });

        match desk.submit(inquiry, &content).await {
            Err(InquiryError::Invalid(e)) => assert_eq!(e.field, "message"),
            other => panic!("unexpected {:?}", other.map(|r| r.kind)),
        }
    }

    #[tokio::test]
    async fn test_booking_room_type_must_be_listed() {
        let desk = InquiryDesk::new(Box::new(RecordingSink::default()));
        let content = SiteContent::builtin().unwrap();

        assert!(desk.submit(booking("premium"), &content).await.is_ok());

        match desk.submit(booking("penthouse"), &content).await {
            Err(InquiryError::Invalid(e)) => {
                assert_eq!(e.field, "room_type");
                assert!(e.message.contains("single"));
            }
            other => panic!("unexpected {:?}", other.map(|r| r.kind)),
        }
    }

    #[tokio::test]
    async fn test_sink_failure_is_reported() {
        let desk = InquiryDesk::new(Box::new(FailingSink));
        let content = SiteContent::builtin().unwrap();

        let err = desk.submit(contact(), &content).await.unwrap_err();
        assert!(matches!(err, InquiryError::Forward(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_log_sink_does_not_forward() {
        let desk = InquiryDesk::from_config(&InquiriesConfig::default()).unwrap();
        let content = SiteContent::builtin().unwrap();
        let receipt = desk.submit(contact(), &content).await.unwrap();
        assert!(!receipt.forwarded);
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("  plain text "), "plain text");
        assert_eq!(sanitize_text("<i>hello</i>"), "hello");
        assert_eq!(sanitize_text("<style>p{}</style>ok"), "ok");
    }

    #[test]
    fn test_sanitize_text_keeps_plain_characters() {
        assert_eq!(sanitize_text("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(sanitize_text("budget < 500 and > 300"), "budget < 500 and > 300");
        assert_eq!(sanitize_text("<b>Ram</b> & Shyam"), "Ram & Shyam");
    }

    #[tokio::test]
    async fn test_delivered_text_is_not_entity_escaped() {
        let sink = RecordingSink::default();
        let desk = InquiryDesk::new(Box::new(sink.clone()));
        let content = SiteContent::builtin().unwrap();
        let inquiry = Inquiry::Contact(ContactInquiry {
            name: "Ram & Shyam".into(),
            email: "ram@example.com".into(),
            subject: "Rent < 500?".into(),
            message: "Is there anything < 500 & close to campus?".into(),
        });

        desk.submit(inquiry, &content).await.unwrap();

        let records = sink.records.lock().unwrap();
        let payload = serde_json::to_string(&records[0]).unwrap();
        assert!(!payload.contains("&amp;"));
        assert!(!payload.contains("&lt;"));
        match &records[0].inquiry {
            Inquiry::Contact(c) => {
                assert_eq!(c.name, "Ram & Shyam");
                assert_eq!(c.subject, "Rent < 500?");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
