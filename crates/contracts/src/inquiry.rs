//! Contact form payloads
//!
//! The contact page has three forms (general contact, booking request, visit
//! request). Each submits one [`Inquiry`]; the server answers with an
//! [`InquiryReceipt`] or an [`ApiError`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Date format of the `<input type="date">` fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Choices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayDuration {
    Semester,
    Year,
    Custom,
}

impl StayDuration {
    pub fn key(&self) -> &'static str {
        match self {
            StayDuration::Semester => "semester",
            StayDuration::Year => "year",
            StayDuration::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StayDuration::Semester => "One Semester",
            StayDuration::Year => "One Academic Year",
            StayDuration::Custom => "Custom Duration",
        }
    }

    pub fn all() -> Vec<StayDuration> {
        vec![StayDuration::Semester, StayDuration::Year, StayDuration::Custom]
    }

    pub fn from_key(key: &str) -> Option<StayDuration> {
        Self::all().into_iter().find(|d| d.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitSlot {
    Morning,
    Afternoon,
    Evening,
}

impl VisitSlot {
    pub fn key(&self) -> &'static str {
        match self {
            VisitSlot::Morning => "morning",
            VisitSlot::Afternoon => "afternoon",
            VisitSlot::Evening => "evening",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisitSlot::Morning => "Morning (9AM - 12PM)",
            VisitSlot::Afternoon => "Afternoon (1PM - 4PM)",
            VisitSlot::Evening => "Evening (5PM - 7PM)",
        }
    }

    pub fn all() -> Vec<VisitSlot> {
        vec![VisitSlot::Morning, VisitSlot::Afternoon, VisitSlot::Evening]
    }

    pub fn from_key(key: &str) -> Option<VisitSlot> {
        Self::all().into_iter().find(|s| s.key() == key)
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_type: String,
    /// Expected check-in, `YYYY-MM-DD`
    pub check_in: String,
    pub duration: Option<StayDuration>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Preferred visit date, `YYYY-MM-DD`
    pub visit_date: String,
    pub time_slot: Option<VisitSlot>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inquiry {
    Contact(ContactInquiry),
    Booking(BookingInquiry),
    Visit(VisitInquiry),
}

impl Inquiry {
    pub fn kind(&self) -> &'static str {
        match self {
            Inquiry::Contact(_) => "contact",
            Inquiry::Booking(_) => "booking",
            Inquiry::Visit(_) => "visit",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Inquiry::Contact(i) => &i.name,
            Inquiry::Booking(i) => &i.name,
            Inquiry::Visit(i) => &i.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Inquiry::Contact(i) => &i.email,
            Inquiry::Booking(i) => &i.email,
            Inquiry::Visit(i) => &i.email,
        }
    }

    /// Check required fields and formats; the first problem found is returned.
    pub fn validate(&self) -> Result<(), FieldError> {
        require("name", self.name())?;
        require("email", self.email())?;
        if !is_valid_email(self.email()) {
            return Err(FieldError::new("email", "Please enter a valid email address"));
        }

        match self {
            Inquiry::Contact(i) => {
                require("subject", &i.subject)?;
                require("message", &i.message)?;
            }
            Inquiry::Booking(i) => {
                require("phone", &i.phone)?;
                require("room_type", &i.room_type)?;
                require_date("check_in", &i.check_in)?;
                if i.duration.is_none() {
                    return Err(FieldError::new("duration", "Please select a duration of stay"));
                }
            }
            Inquiry::Visit(i) => {
                require("phone", &i.phone)?;
                require_date("visit_date", &i.visit_date)?;
                if i.time_slot.is_none() {
                    return Err(FieldError::new("time_slot", "Please select a preferred time"));
                }
            }
        }
        Ok(())
    }

    /// Rewrite every free-text field (subject, message, notes, names) with `f`.
    ///
    /// Structured fields (email, phone, dates, choices) are left untouched.
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Inquiry {
        match self {
            Inquiry::Contact(i) => Inquiry::Contact(ContactInquiry {
                name: f(&i.name),
                subject: f(&i.subject),
                message: f(&i.message),
                ..i
            }),
            Inquiry::Booking(i) => Inquiry::Booking(BookingInquiry {
                name: f(&i.name),
                notes: f(&i.notes),
                ..i
            }),
            Inquiry::Visit(i) => Inquiry::Visit(VisitInquiry {
                name: f(&i.name),
                notes: f(&i.notes),
                ..i
            }),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "This field is required"));
    }
    Ok(())
}

fn require_date(field: &str, value: &str) -> Result<NaiveDate, FieldError> {
    require(field, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| FieldError::new(field, "Please enter a date as YYYY-MM-DD"))
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no spaces
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ============================================================================
// Responses
// ============================================================================

/// Validation failure tied to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Acknowledgement of an accepted inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryReceipt {
    pub id: Uuid,
    pub kind: String,
    pub received_at: DateTime<Utc>,
    /// Whether the inquiry was also delivered to the configured webhook
    pub forwarded: bool,
    pub message: String,
}

/// Error body returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        Self {
            message: e.message,
            field: Some(e.field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactInquiry {
        ContactInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            subject: "Availability".into(),
            message: "Is a double room free in August?".into(),
        }
    }

    fn booking() -> BookingInquiry {
        BookingInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            phone: "+1 555 0100".into(),
            room_type: "double".into(),
            check_in: "2026-08-01".into(),
            duration: Some(StayDuration::Semester),
            notes: String::new(),
        }
    }

    fn visit() -> VisitInquiry {
        VisitInquiry {
            name: "Arjun".into(),
            email: "arjun@example.com".into(),
            phone: "+1 555 0100".into(),
            visit_date: "2026-07-12".into(),
            time_slot: Some(VisitSlot::Afternoon),
            notes: "Coming with my parents".into(),
        }
    }

    #[test]
    fn test_valid_inquiries() {
        assert_eq!(Inquiry::Contact(contact()).validate(), Ok(()));
        assert_eq!(Inquiry::Booking(booking()).validate(), Ok(()));
        assert_eq!(Inquiry::Visit(visit()).validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut c = contact();
        c.message = "   ".into();
        let err = Inquiry::Contact(c).validate().unwrap_err();
        assert_eq!(err.field, "message");

        let mut b = booking();
        b.duration = None;
        assert_eq!(Inquiry::Booking(b).validate().unwrap_err().field, "duration");

        let mut v = visit();
        v.time_slot = None;
        assert_eq!(Inquiry::Visit(v).validate().unwrap_err().field, "time_slot");
    }

    #[test]
    fn test_bad_date() {
        let mut b = booking();
        b.check_in = "01/08/2026".into();
        let err = Inquiry::Booking(b).validate().unwrap_err();
        assert_eq!(err.field, "check_in");
        assert!(err.message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" info@boyshostel.com "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@.com"));

        let mut c = contact();
        c.email = "not-an-email".into();
        assert_eq!(Inquiry::Contact(c).validate().unwrap_err().field, "email");
    }

    #[test]
    fn test_wire_format_is_tagged_by_kind() {
        let json = serde_json::to_value(Inquiry::Booking(booking())).unwrap();
        assert_eq!(json["kind"], "booking");
        assert_eq!(json["duration"], "semester");
        assert_eq!(json["room_type"], "double");

        let back: Inquiry = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), "booking");
    }

    #[test]
    fn test_map_text_leaves_structured_fields() {
        let mapped = Inquiry::Visit(visit()).map_text(|s| s.to_uppercase());
        match mapped {
            Inquiry::Visit(v) => {
                assert_eq!(v.name, "ARJUN");
                assert_eq!(v.notes, "COMING WITH MY PARENTS");
                assert_eq!(v.email, "arjun@example.com");
                assert_eq!(v.visit_date, "2026-07-12");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_choice_keys() {
        assert_eq!(StayDuration::from_key("year"), Some(StayDuration::Year));
        assert_eq!(StayDuration::from_key(""), None);
        assert_eq!(VisitSlot::from_key("evening"), Some(VisitSlot::Evening));
        assert_eq!(VisitSlot::Morning.label(), "Morning (9AM - 12PM)");
    }

    #[test]
    fn test_api_error_from_field_error() {
        let e: ApiError = FieldError::new("email", "bad").into();
        assert_eq!(e.field.as_deref(), Some("email"));
        assert_eq!(e.message, "bad");
    }
}
